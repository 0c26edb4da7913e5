use log::warn;
use serde::{Deserialize, Serialize};

use crate::trajectory::MIN_STATIONS_FOR_TRAJECTORY;
use crate::Station;

/// Thresholds for the advisory data-quality checks on a parsed survey.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualityLimits {
    /// Fewer stations than this is flagged as sparse.
    pub min_stations: usize,
    /// Average MD spacing above this is flagged (m).
    pub max_average_spacing_m: f64,
    /// When set, a survey ending shallower than this MD is flagged (m).
    pub min_total_depth_m: Option<f64>,
}

impl Default for QualityLimits {
    fn default() -> Self {
        QualityLimits {
            min_stations: 5,
            max_average_spacing_m: 60.0,
            min_total_depth_m: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurveyAdvisory {
    NoStations,
    TooFewForTrajectory { count: usize },
    SparseStations { count: usize, minimum: usize },
    WideSpacing { average_m: f64, limit_m: f64 },
    ShallowTotalDepth { max_md: f64, minimum_m: f64 },
}

/// Summary of a parsed survey plus the warnings a caller may surface.
/// None of the advisories are errors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SurveyReport {
    pub stations: usize,
    pub max_md: Option<f64>,
    pub max_inc: Option<f64>,
    pub average_spacing_m: Option<f64>,
    pub advisories: Vec<SurveyAdvisory>,
}

impl SurveyReport {
    pub fn assess(stations: &[Station], limits: &QualityLimits) -> Self {
        let count = stations.len();
        let max_md = stations.last().map(|s| s.md);
        let max_inc = stations.iter().map(|s| s.inc).reduce(f64::max);
        let average_spacing_m = match (stations.first(), stations.last()) {
            (Some(first), Some(last)) if count > 1 => Some((last.md - first.md) / (count - 1) as f64),
            _ => None,
        };

        let mut advisories = Vec::new();
        if count == 0 {
            advisories.push(SurveyAdvisory::NoStations);
        } else {
            if count < MIN_STATIONS_FOR_TRAJECTORY {
                advisories.push(SurveyAdvisory::TooFewForTrajectory { count });
            }
            if count < limits.min_stations {
                advisories.push(SurveyAdvisory::SparseStations {
                    count,
                    minimum: limits.min_stations,
                });
            }
        }
        if let Some(average_m) = average_spacing_m {
            if average_m > limits.max_average_spacing_m {
                advisories.push(SurveyAdvisory::WideSpacing {
                    average_m,
                    limit_m: limits.max_average_spacing_m,
                });
            }
        }
        if let (Some(max_md), Some(minimum_m)) = (max_md, limits.min_total_depth_m) {
            if max_md < minimum_m {
                advisories.push(SurveyAdvisory::ShallowTotalDepth { max_md, minimum_m });
            }
        }

        SurveyReport {
            stations: count,
            max_md,
            max_inc,
            average_spacing_m,
            advisories,
        }
    }

    pub fn can_compute_trajectory(&self) -> bool {
        self.stations >= MIN_STATIONS_FOR_TRAJECTORY
    }

    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    pub fn log_advisories(&self, source: &str) {
        for advisory in &self.advisories {
            warn!("survey {source}: {advisory:?}");
        }
    }
}
