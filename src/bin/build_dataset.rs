use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use relief_well_engine::data::{write_dataset_to_file, FieldDataset, ReferenceWell};
use relief_well_engine::parse_survey;
use relief_well_engine::survey::report::{QualityLimits, SurveyReport};
use relief_well_engine::SurfaceLocation;
use serde::{Deserialize, Serialize};

/// One entry of `wells.json` in the survey directory.
#[derive(Debug, Deserialize)]
struct WellManifestEntry {
    name: String,
    color: String,
    surface: SurfaceLocation,
    #[serde(default)]
    vertical_origin: f64,
    /// Survey text file, relative to the manifest.
    survey: PathBuf,
}

#[derive(Debug, Serialize)]
struct DatasetMetadata {
    source_dir: Option<String>,
    wells: Vec<WellSummary>,
    ifr_sets: usize,
    accelerometer_samples: usize,
    generated_at_epoch: u64,
}

#[derive(Debug, Serialize)]
struct WellSummary {
    name: String,
    stations: usize,
    max_md: Option<f64>,
    advisories: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut dataset = FieldDataset::builtin();
    let source_dir = env::args().nth(1).map(PathBuf::from);
    if let Some(dir) = &source_dir {
        for well in load_manifest(dir)? {
            info!("adding reference well {} ({} stations)", well.name, well.stations.len());
            dataset.insert_well(well);
        }
    }

    let limits = QualityLimits::default();
    let mut summaries = Vec::with_capacity(dataset.wells.len());
    for well in &dataset.wells {
        let report = SurveyReport::assess(&well.stations, &limits);
        report.log_advisories(&well.name);
        if !report.can_compute_trajectory() {
            bail!("reference well {} has too few stations for a trajectory", well.name);
        }
        summaries.push(WellSummary {
            name: well.name.clone(),
            stations: report.stations,
            max_md: report.max_md,
            advisories: report.advisories.len(),
        });
    }

    let output_dir = PathBuf::from("data");
    fs::create_dir_all(&output_dir).context("failed to create data output directory")?;
    let dataset_path = output_dir.join("field.bin");
    write_dataset_to_file(&dataset, &dataset_path)
        .with_context(|| format!("failed to write dataset to {}", dataset_path.display()))?;

    let metadata = DatasetMetadata {
        source_dir: source_dir.map(|d| d.display().to_string()),
        wells: summaries,
        ifr_sets: dataset.ifr_sets.len(),
        accelerometer_samples: dataset.accelerometer.len(),
        generated_at_epoch: current_epoch_seconds(),
    };

    let metadata_path = output_dir.join("field.meta.json");
    let metadata_json = serde_json::to_vec_pretty(&metadata)?;
    fs::write(&metadata_path, metadata_json)
        .with_context(|| format!("failed to write metadata to {}", metadata_path.display()))?;

    info!(
        "Wrote field dataset to {} ({} wells, {} IFR sets)",
        dataset_path.display(),
        metadata.wells.len(),
        metadata.ifr_sets
    );

    Ok(())
}

fn load_manifest(dir: &Path) -> Result<Vec<ReferenceWell>> {
    let manifest_path = dir.join("wells.json");
    let manifest = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let entries: Vec<WellManifestEntry> = serde_json::from_str(&manifest)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    let mut wells = Vec::with_capacity(entries.len());
    for entry in entries {
        let survey_path = dir.join(&entry.survey);
        let text = fs::read_to_string(&survey_path)
            .with_context(|| format!("failed to read survey {}", survey_path.display()))?;
        let stations = parse_survey(&text);
        if stations.is_empty() {
            warn!("survey {} has no usable stations, skipping", survey_path.display());
            continue;
        }
        wells.push(ReferenceWell {
            name: entry.name,
            color: entry.color,
            surface: entry.surface,
            vertical_origin: entry.vertical_origin,
            stations,
        });
    }
    Ok(wells)
}

fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
