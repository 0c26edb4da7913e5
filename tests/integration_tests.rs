use assert_approx_eq::assert_approx_eq;
use relief_well_engine::config::EngineConfig;
use relief_well_engine::data::builtin::{
    INTERCEPT_TVDSS_M, TARGET_SURFACE, TARGET_WELL, TEAM_SURFACES,
};
use relief_well_engine::data::{read_dataset_from_file, write_dataset_to_file, FieldDataset};
use relief_well_engine::projection::orbit::OrbitCamera;
use relief_well_engine::projection::plan::project_plan;
use relief_well_engine::projection::section::project_section;
use relief_well_engine::sag::calculator::{
    correction_table, evaluate_candidates, is_correct_selection, SagSelection, SagSign,
};
use relief_well_engine::separation::analyzer::{
    closest_approach, compute_separation, Separation, SeparationBand, SeparationTarget,
};
use relief_well_engine::survey::report::SurveyReport;
use relief_well_engine::trajectory::well::Owner;
use relief_well_engine::{format_survey, parse_survey, Origin, Trajectory};

const TEAM_SURVEY: &str = "\
MD\tInc\tAzi
0\t0\t0
300\t0\t0
500\t12\t205
800\t30 \t205
1100, 42, 205
1500;48;200
1900 50 198
";

#[test]
fn planned_well_against_reference_end_to_end() {
    let config = EngineConfig::default();
    let dataset = FieldDataset::builtin();
    let reference = dataset.well(TARGET_WELL).expect("built-in target").trajectory();

    let (name, color, surface) = TEAM_SURFACES[1];
    let stations = parse_survey(TEAM_SURVEY);
    assert_eq!(stations.len(), 7, "header line is dropped");
    let report = SurveyReport::assess(&stations, &config.survey);
    assert!(report.can_compute_trajectory());

    let team = Trajectory::from_stations(
        name,
        color,
        Owner::Team(name.to_string()),
        &stations,
        Origin::at(surface, -27.0),
    );
    assert_eq!(team.len(), stations.len());
    assert_eq!(team.points[0].tvd, -27.0);
    assert!(team.points.windows(2).all(|w| w[1].tvd >= w[0].tvd));

    // surface check first, then the full path
    let surface_sep = compute_separation(
        &team.points,
        SeparationTarget::Surface(TARGET_SURFACE),
        &config.separation,
    );
    let wellhead = surface_sep.report().expect("surface separation");
    assert_eq!(wellhead.band, SeparationBand::TooClose);

    let path_sep = compute_separation(
        &team.points,
        SeparationTarget::Trajectory(&reference.points),
        &config.separation,
    );
    let reverse = compute_separation(
        &reference.points,
        SeparationTarget::Trajectory(&team.points),
        &config.separation,
    );
    let forward = path_sep.report().expect("path separation");
    assert_eq!(Some(forward.distance_m), reverse.report().map(|r| r.distance_m));
    assert!(forward.distance_m <= wellhead.distance_m + 1e-9);

    let approach = closest_approach(&team.points, &reference.points).expect("approach");
    assert!(approach.distance_m.is_finite());
    assert!(forward.tvd.is_some());

    // every view accepts the same pair of wells
    let plan = project_plan(
        std::slice::from_ref(&team),
        Some(&reference),
        None,
        &config.plan,
    )
    .unwrap();
    assert_eq!(plan.paths[0].points.len(), team.len());
    assert!(plan.reference.is_some());
    for p in &plan.paths[0].points {
        assert!(p.x >= 0.0 && p.x <= config.plan.width);
        assert!(p.y >= 0.0 && p.y <= config.plan.height);
    }

    let wells = vec![team.clone(), reference.clone()];
    let section = project_section(&wells, 197.0).unwrap();
    assert_eq!(section.tvd_range.0, 0.0);
    assert!(section.vs_range.1 > section.vs_range.0);
    // both wells head roughly along the section azimuth
    for path in &section.paths {
        assert!(path.total_depth().unwrap().vs > path.surface().unwrap().vs);
    }

    let mut camera = OrbitCamera::default();
    camera.drag(25.0, -10.0);
    camera.wheel(true);
    let orbit = camera.project(&wells, &config.orbit).unwrap();
    assert_eq!(orbit.paths.len(), 2);
    assert_eq!(orbit.draw_order.len(), 2);
}

#[test]
fn survey_text_survives_format_and_reparse() {
    let stations = parse_survey(TEAM_SURVEY);
    assert_eq!(parse_survey(&format_survey(&stations)), stations);
}

#[test]
fn well_without_enough_stations_has_no_separation() {
    let dataset = FieldDataset::builtin();
    let reference = dataset.well(TARGET_WELL).unwrap().trajectory();
    let lonely = Trajectory::from_survey_text(
        "IBD",
        "#6b7280",
        Owner::Team("IBD".into()),
        "0 0 0",
        Origin::default(),
    );
    assert!(lonely.is_empty());
    assert_eq!(
        compute_separation(
            &lonely.points,
            SeparationTarget::Trajectory(&reference.points),
            &Default::default(),
        ),
        Separation::NoData
    );
}

#[test]
fn sag_exercise_on_built_in_readings() {
    let dataset = FieldDataset::builtin();
    let gwd = dataset.sensor("GWD").unwrap();
    let mwd = dataset.sensor("MWD").unwrap();

    let series = evaluate_candidates(&dataset.accelerometer, &gwd.candidates, SagSign::Subtract);
    assert_eq!(series.len(), gwd.candidates.len());
    assert!(series
        .iter()
        .all(|s| s.points.len() == dataset.accelerometer.len()));
    for p in &series[0].points {
        assert!(p.raw_inc.is_finite() && (0.0..=180.0).contains(&p.raw_inc));
    }

    let gwd_answer = gwd.correct_index().unwrap();
    let mwd_answer = mwd.correct_index().unwrap();
    assert!(is_correct_selection(
        gwd,
        &SagSelection {
            candidate: gwd_answer,
            sign: SagSign::Subtract
        }
    ));
    assert!(!is_correct_selection(
        mwd,
        &SagSelection {
            candidate: mwd_answer,
            sign: SagSign::Add
        }
    ));

    let table = correction_table(
        &dataset.accelerometer,
        &[
            (gwd.candidates[gwd_answer].sag_deg, SagSign::Subtract),
            (mwd.candidates[mwd_answer].sag_deg, SagSign::Subtract),
        ],
    );
    assert_eq!(table.len(), dataset.accelerometer.len());
    assert_approx_eq!(table[0].corrected[0], table[0].raw_inc - 0.18, 1e-9);
    assert_approx_eq!(table[0].corrected[1], table[0].raw_inc + 0.07, 1e-9);
}

#[test]
fn ifr_lookup_on_built_in_tables() {
    let dataset = FieldDataset::builtin();
    let aa16 = dataset.ifr_set("AA16").unwrap();
    let at_intercept = aa16.lookup(INTERCEPT_TVDSS_M);
    assert!(!at_intercept.is_clamped());
    let values = at_intercept.values().unwrap();
    assert!(values.total_field > 50308.70 && values.total_field < 50337.50);

    let rw = dataset.ifr_set("RW").unwrap();
    assert!(rw.lookup(50.0).is_clamped());
    assert_eq!(rw.lookup(50.0).values(), Some(rw.points[0].values));
}

#[test]
fn dataset_file_feeds_the_same_results() {
    let dataset = FieldDataset::builtin();
    let file = tempfile::NamedTempFile::new().unwrap();
    write_dataset_to_file(&dataset, file.path()).unwrap();
    let loaded = read_dataset_from_file(file.path()).unwrap();

    let a = dataset.well(TARGET_WELL).unwrap().trajectory();
    let b = loaded.well(TARGET_WELL).unwrap().trajectory();
    assert_eq!(a, b);
}
