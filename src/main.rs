use std::env;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{info, warn};
use once_cell::sync::Lazy;
use relief_well_engine::config::EngineConfig;
use relief_well_engine::data::builtin::{RT_ELEVATION_M, TARGET_WELL};
use relief_well_engine::data::{read_dataset_from_file, FieldDataset};
use relief_well_engine::ifr::interpolator::IfrLookup;
use relief_well_engine::projection::orbit::{OrbitCamera, OrbitProjection};
use relief_well_engine::projection::plan::{project_plan, PlanBounds, PlanProjection};
use relief_well_engine::projection::section::{project_section, SectionProjection};
use relief_well_engine::projection::ScreenPoint;
use relief_well_engine::sag::calculator::{
    evaluate_candidates, is_correct_selection, CorrectedSeries, SagSelection, SagSign,
};
use relief_well_engine::separation::analyzer::{
    closest_approach, compute_separation, ClosestApproach, Separation, SeparationTarget,
};
use relief_well_engine::survey::report::SurveyReport;
use relief_well_engine::trajectory::well::Owner;
use relief_well_engine::{format_survey, parse_survey, Origin, SurfaceLocation, Trajectory};
use serde::{Deserialize, Serialize};

const DATASET_ENV: &str = "RELIEF_WELL_DATASET";

static CONFIG: Lazy<EngineConfig> = Lazy::new(|| {
    EngineConfig::load().unwrap_or_else(|err| {
        warn!("falling back to default engine config: {err}");
        EngineConfig::default()
    })
});

static DATASET: Lazy<FieldDataset> = Lazy::new(|| match env::var_os(DATASET_ENV) {
    Some(path) => read_dataset_from_file(&path).unwrap_or_else(|err| {
        warn!("falling back to built-in field data: {err}");
        FieldDataset::builtin()
    }),
    None => FieldDataset::builtin(),
});

static REFERENCE: Lazy<Option<Trajectory>> =
    Lazy::new(|| DATASET.well(TARGET_WELL).map(|w| w.trajectory()));

/// A planned well as submitted by a team: survey text plus wellhead.
#[derive(Debug, Deserialize)]
struct WellInput {
    name: String,
    #[serde(default = "default_color")]
    color: String,
    survey: String,
    surface: SurfaceLocation,
    /// Defaults to the rotary table datum of the field.
    vertical_origin: Option<f64>,
}

fn default_color() -> String {
    "#2563eb".to_string()
}

impl WellInput {
    fn origin(&self) -> Origin {
        Origin::at(self.surface, self.vertical_origin.unwrap_or(-RT_ELEVATION_M))
    }

    fn trajectory(&self) -> Trajectory {
        Trajectory::from_survey_text(
            self.name.clone(),
            self.color.clone(),
            Owner::Team(self.name.clone()),
            &self.survey,
            self.origin(),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SeparationAgainst {
    ReferenceWell { name: String },
    Well { well: WellInput },
    Surface { location: SurfaceLocation },
}

/// Default section azimuth for the offset library, near the field's mean.
const LIBRARY_SECTION_AZIMUTH_DEG: f64 = 96.0;

fn library_azimuth() -> f64 {
    LIBRARY_SECTION_AZIMUTH_DEG
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum LibraryView {
    Plan {
        bounds: Option<PlanBounds>,
    },
    Section {
        #[serde(default = "library_azimuth")]
        azimuth_deg: f64,
    },
    Orbit {
        camera: Option<OrbitCamera>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineRequest {
    Trajectory {
        well: WellInput,
    },
    Plan {
        wells: Vec<WellInput>,
        bounds: Option<PlanBounds>,
    },
    Section {
        wells: Vec<WellInput>,
        azimuth_deg: f64,
        #[serde(default)]
        include_reference: bool,
    },
    Orbit {
        wells: Vec<WellInput>,
        camera: Option<OrbitCamera>,
        #[serde(default)]
        include_reference: bool,
    },
    Separation {
        well: WellInput,
        against: SeparationAgainst,
    },
    Sag {
        sensor: String,
        sign: SagSign,
        selection: Option<SagSelection>,
    },
    Ifr {
        set: String,
        tvdss: f64,
    },
    /// Offset wells from the library; all of them when `wells` is absent.
    Library {
        wells: Option<Vec<String>>,
        view: LibraryView,
    },
    DemoSurvey {
        team: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineResponse {
    Trajectory {
        trajectory: Trajectory,
        report: SurveyReport,
    },
    Plan {
        projection: PlanProjection,
        intercept: Option<ScreenPoint>,
    },
    Section {
        projection: SectionProjection,
    },
    Orbit {
        projection: OrbitProjection,
    },
    Separation {
        separation: Separation,
        closest_approach: Option<ClosestApproach>,
    },
    Sag {
        sensor: String,
        series: Vec<CorrectedSeries>,
        selection_correct: Option<bool>,
    },
    Ifr {
        set: String,
        lookup: IfrLookup,
    },
    DemoSurvey {
        team: String,
        surface: SurfaceLocation,
        survey: String,
        trajectory: Trajectory,
    },
    Error {
        message: String,
    },
}

fn trajectories(wells: &[WellInput], with_reference: bool) -> Vec<Trajectory> {
    let mut out: Vec<Trajectory> = wells.iter().map(WellInput::trajectory).collect();
    if with_reference {
        out.extend(REFERENCE.iter().cloned());
    }
    out
}

fn library_trajectories(names: Option<Vec<String>>) -> Result<Vec<Trajectory>, String> {
    match names {
        None => Ok(DATASET.offset_wells.iter().map(|w| w.trajectory()).collect()),
        Some(names) => names
            .iter()
            .map(|name| {
                DATASET
                    .offset_well(name)
                    .map(|w| w.trajectory())
                    .ok_or_else(|| format!("Unknown offset well {name}"))
            })
            .collect(),
    }
}

fn project_library(wells: &[Trajectory], view: LibraryView, config: &EngineConfig) -> EngineResponse {
    let projected = match view {
        LibraryView::Plan { bounds } => project_plan(wells, None, bounds, &config.plan)
            .map(|projection| EngineResponse::Plan {
                projection,
                intercept: None,
            }),
        LibraryView::Section { azimuth_deg } => {
            project_section(wells, azimuth_deg).map(|projection| EngineResponse::Section { projection })
        }
        LibraryView::Orbit { camera } => camera
            .unwrap_or_default()
            .project(wells, &config.orbit)
            .map(|projection| EngineResponse::Orbit { projection }),
    };
    projected.unwrap_or_else(|err| EngineResponse::Error { message: err.to_string() })
}

fn handle(req: EngineRequest) -> EngineResponse {
    let config = &*CONFIG;
    match req {
        EngineRequest::Trajectory { well } => {
            let stations = parse_survey(&well.survey);
            let report = SurveyReport::assess(&stations, &config.survey);
            report.log_advisories(&well.name);
            let trajectory = Trajectory::from_stations(
                well.name.clone(),
                well.color.clone(),
                Owner::Team(well.name.clone()),
                &stations,
                well.origin(),
            );
            EngineResponse::Trajectory { trajectory, report }
        }
        EngineRequest::Plan { wells, bounds } => {
            let reference = (*REFERENCE).as_ref();
            match project_plan(&trajectories(&wells, false), reference, bounds, &config.plan) {
                Ok(projection) => EngineResponse::Plan {
                    intercept: reference
                        .and_then(|r| r.intercept_point(config.intercept_md_m))
                        .map(|p| projection.marker(p)),
                    projection,
                },
                Err(err) => EngineResponse::Error { message: err.to_string() },
            }
        }
        EngineRequest::Section {
            wells,
            azimuth_deg,
            include_reference,
        } => match project_section(&trajectories(&wells, include_reference), azimuth_deg) {
            Ok(projection) => EngineResponse::Section { projection },
            Err(err) => EngineResponse::Error { message: err.to_string() },
        },
        EngineRequest::Orbit {
            wells,
            camera,
            include_reference,
        } => {
            let camera = camera.unwrap_or_default();
            match camera.project(&trajectories(&wells, include_reference), &config.orbit) {
                Ok(projection) => EngineResponse::Orbit { projection },
                Err(err) => EngineResponse::Error { message: err.to_string() },
            }
        }
        EngineRequest::Separation { well, against } => {
            let candidate = well.trajectory();
            let target = match against {
                SeparationAgainst::ReferenceWell { name } => match DATASET.well(&name) {
                    Some(w) => w.trajectory(),
                    None => {
                        return EngineResponse::Error {
                            message: format!("Unknown reference well {name}"),
                        }
                    }
                },
                SeparationAgainst::Well { well } => well.trajectory(),
                SeparationAgainst::Surface { location } => {
                    let separation = compute_separation(
                        &candidate.points,
                        SeparationTarget::Surface(location),
                        &config.separation,
                    );
                    return EngineResponse::Separation {
                        separation,
                        closest_approach: None,
                    };
                }
            };
            EngineResponse::Separation {
                separation: compute_separation(
                    &candidate.points,
                    SeparationTarget::Trajectory(&target.points),
                    &config.separation,
                ),
                closest_approach: closest_approach(&candidate.points, &target.points),
            }
        }
        EngineRequest::Sag {
            sensor,
            sign,
            selection,
        } => {
            let Some(candidates) = DATASET.sensor(&sensor) else {
                return EngineResponse::Error {
                    message: format!("Unknown sensor {sensor}"),
                };
            };
            EngineResponse::Sag {
                series: evaluate_candidates(&DATASET.accelerometer, &candidates.candidates, sign),
                selection_correct: selection.map(|s| is_correct_selection(candidates, &s)),
                sensor,
            }
        }
        EngineRequest::Ifr { set, tvdss } => match DATASET.ifr_set(&set) {
            Some(reference) => EngineResponse::Ifr {
                lookup: reference.lookup(tvdss),
                set,
            },
            None => EngineResponse::Error {
                message: format!("Unknown IFR set {set}"),
            },
        },
        EngineRequest::Library { wells, view } => match library_trajectories(wells) {
            Ok(wells) => project_library(&wells, view, config),
            Err(message) => EngineResponse::Error { message },
        },
        EngineRequest::DemoSurvey { team } => match DATASET.demo_survey(&team) {
            Some(demo) => EngineResponse::DemoSurvey {
                surface: demo.surface,
                survey: format_survey(&demo.stations),
                trajectory: demo.trajectory_for(Owner::Team(team.clone())),
                team,
            },
            None => EngineResponse::Error {
                message: format!("No demo survey for team {team}"),
            },
        },
    }
}

async fn handler(event: LambdaEvent<EngineRequest>) -> Result<EngineResponse, Error> {
    Ok(handle(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    info!(
        "relief well engine ready: {} reference wells, {} offset wells, {} IFR sets",
        DATASET.wells.len(),
        DATASET.offset_wells.len(),
        DATASET.ifr_sets.len()
    );
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
