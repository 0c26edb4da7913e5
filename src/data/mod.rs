pub mod builtin;

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use bincode::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ifr::interpolator::IfrReferenceSet;
use crate::sag::calculator::{AccelerometerSample, SensorCandidates};
use crate::trajectory::well::{Owner, Trajectory};
use crate::{Origin, Station, SurfaceLocation};

/// Compression level used when encoding dataset bundles.
const DATASET_COMPRESSION_LEVEL: i32 = 19;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] Box<ErrorKind>),
    #[error("Compression error: {0}")]
    Compression(#[source] std::io::Error),
}

/// Fixed survey of an existing well used as a target or offset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReferenceWell {
    pub name: String,
    pub color: String,
    pub surface: SurfaceLocation,
    /// Vertical datum of the first point (e.g. `-27.0` for RT 27 m above MSL).
    pub vertical_origin: f64,
    pub stations: Vec<Station>,
}

impl ReferenceWell {
    pub fn origin(&self) -> Origin {
        Origin::at(self.surface, self.vertical_origin)
    }

    pub fn trajectory(&self) -> Trajectory {
        self.trajectory_for(Owner::ReferenceWell(self.name.clone()))
    }

    pub fn trajectory_for(&self, owner: Owner) -> Trajectory {
        Trajectory::from_stations(
            self.name.clone(),
            self.color.clone(),
            owner,
            &self.stations,
            self.origin(),
        )
    }
}

/// Static reference data consumed by the engine: target wells, the offset
/// library, IFR tables and the sag exercise readings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldDataset {
    pub wells: Vec<ReferenceWell>,
    /// Offset wells in their own local frame, shown on their own.
    #[serde(default)]
    pub offset_wells: Vec<ReferenceWell>,
    /// Prefilled team surveys, keyed by team name.
    #[serde(default)]
    pub demo_surveys: Vec<ReferenceWell>,
    pub ifr_sets: Vec<IfrReferenceSet>,
    pub accelerometer: Vec<AccelerometerSample>,
    pub sensors: Vec<SensorCandidates>,
    #[serde(skip)]
    well_index: HashMap<String, usize>,
}

impl FieldDataset {
    pub fn new(
        wells: Vec<ReferenceWell>,
        ifr_sets: Vec<IfrReferenceSet>,
        accelerometer: Vec<AccelerometerSample>,
        sensors: Vec<SensorCandidates>,
    ) -> Self {
        let mut dataset = FieldDataset {
            wells,
            offset_wells: Vec::new(),
            demo_surveys: Vec::new(),
            ifr_sets,
            accelerometer,
            sensors,
            well_index: HashMap::new(),
        };
        dataset.rebuild_indices();
        dataset
    }

    pub fn with_library(mut self, offset_wells: Vec<ReferenceWell>, demo_surveys: Vec<ReferenceWell>) -> Self {
        self.offset_wells = offset_wells;
        self.demo_surveys = demo_surveys;
        self
    }

    pub fn well(&self, name: &str) -> Option<&ReferenceWell> {
        self.well_index
            .get(name)
            .and_then(|&idx| self.wells.get(idx))
            .filter(|well| well.name == name)
    }

    pub fn offset_well(&self, name: &str) -> Option<&ReferenceWell> {
        self.offset_wells.iter().find(|w| w.name == name)
    }

    pub fn demo_survey(&self, team: &str) -> Option<&ReferenceWell> {
        self.demo_surveys.iter().find(|w| w.name == team)
    }

    pub fn ifr_set(&self, key: &str) -> Option<&IfrReferenceSet> {
        self.ifr_sets.iter().find(|s| s.key == key)
    }

    pub fn sensor(&self, name: &str) -> Option<&SensorCandidates> {
        self.sensors.iter().find(|s| s.sensor == name)
    }

    /// Adds a well, replacing any existing well of the same name.
    pub fn insert_well(&mut self, well: ReferenceWell) {
        let slot = self
            .well_index
            .get(&well.name)
            .and_then(|&idx| self.wells.get_mut(idx))
            .filter(|existing| existing.name == well.name);
        match slot {
            Some(existing) => *existing = well,
            None => {
                self.wells.push(well);
                self.rebuild_indices();
            }
        }
    }

    pub fn rebuild_indices(&mut self) {
        self.well_index = self
            .wells
            .iter()
            .enumerate()
            .map(|(idx, well)| (well.name.clone(), idx))
            .collect();
    }
}

pub fn serialize_dataset(dataset: &FieldDataset) -> Result<Vec<u8>, DataError> {
    let encoded = bincode::serialize(dataset)?;
    let mut cursor = Cursor::new(encoded);
    zstd::stream::encode_all(&mut cursor, DATASET_COMPRESSION_LEVEL).map_err(DataError::Compression)
}

pub fn deserialize_dataset(bytes: &[u8]) -> Result<FieldDataset, DataError> {
    let mut cursor = Cursor::new(bytes);
    let decoded = zstd::stream::decode_all(&mut cursor).map_err(DataError::Compression)?;
    let mut dataset: FieldDataset = bincode::deserialize(&decoded)?;
    dataset.rebuild_indices();
    Ok(dataset)
}

pub fn write_dataset_to_file<P: AsRef<Path>>(dataset: &FieldDataset, path: P) -> Result<(), DataError> {
    let bytes = serialize_dataset(dataset)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_dataset_from_file<P: AsRef<Path>>(path: P) -> Result<FieldDataset, DataError> {
    let bytes = fs::read(path)?;
    deserialize_dataset(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_survives_file_round_trip_with_indices() {
        let dataset = FieldDataset::builtin();
        let file = tempfile::NamedTempFile::new().unwrap();
        write_dataset_to_file(&dataset, file.path()).unwrap();
        let loaded = read_dataset_from_file(file.path()).unwrap();

        assert_eq!(loaded.wells, dataset.wells);
        assert_eq!(loaded.offset_wells, dataset.offset_wells);
        assert!(loaded.offset_well("Deep").is_some());
        assert_eq!(loaded.demo_survey("GM"), dataset.demo_survey("GM"));
        assert_eq!(loaded.ifr_sets, dataset.ifr_sets);
        assert_eq!(loaded.accelerometer.len(), dataset.accelerometer.len());
        assert!(loaded.well("A04").is_some());
        assert!(loaded.ifr_set("RW").is_some());
        assert!(loaded.sensor("MWD").is_some());
    }

    #[test]
    fn garbage_bytes_are_a_compression_error() {
        assert!(matches!(
            deserialize_dataset(b"not zstd"),
            Err(DataError::Compression(_))
        ));
    }

    #[test]
    fn insert_replaces_by_name() {
        let mut dataset = FieldDataset::default();
        let well = |stations: Vec<Station>| ReferenceWell {
            name: "X1".into(),
            color: "#fff".into(),
            surface: SurfaceLocation::default(),
            vertical_origin: 0.0,
            stations,
        };
        dataset.insert_well(well(vec![Station::new(0.0, 0.0, 0.0)]));
        dataset.insert_well(well(vec![Station::new(0.0, 0.0, 0.0), Station::new(100.0, 0.0, 0.0)]));
        assert_eq!(dataset.wells.len(), 1);
        assert_eq!(dataset.well("X1").map(|w| w.trajectory().len()), Some(2));
    }

    #[test]
    fn stale_index_misses_instead_of_panicking() {
        let mut dataset = FieldDataset::builtin();
        dataset.wells.clear();
        assert!(dataset.well("A04").is_none());

        dataset.insert_well(builtin::target_well());
        assert_eq!(dataset.wells.len(), 1);
        assert!(dataset.well("A04").is_some());
    }

    #[test]
    fn demo_survey_belongs_to_its_team() {
        let dataset = FieldDataset::builtin();
        let demo = dataset.demo_survey("AC").unwrap().trajectory_for(Owner::Team("AC".into()));
        assert_eq!(demo.owner, Owner::Team("AC".into()));
        assert_eq!(demo.len(), 8);
        assert!(dataset.demo_survey("nobody").is_none());
    }
}
