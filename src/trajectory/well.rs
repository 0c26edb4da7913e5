use serde::{Deserialize, Serialize};

use crate::survey::parser::parse_survey;
use crate::trajectory::min_curvature::compute_trajectory;
use crate::trajectory::MIN_STATIONS_FOR_TRAJECTORY;
use crate::{Origin, Station, TrajectoryPoint};

/// Who a trajectory belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Owner {
    Team(String),
    ReferenceWell(String),
}

/// Named, colored wellbore path. An empty point list means the trajectory
/// is not available yet (too few stations), not that something failed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    pub name: String,
    pub color: String,
    pub owner: Owner,
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        owner: Owner,
        points: Vec<TrajectoryPoint>,
    ) -> Self {
        Trajectory {
            name: name.into(),
            color: color.into(),
            owner,
            points,
        }
    }

    pub fn from_stations(
        name: impl Into<String>,
        color: impl Into<String>,
        owner: Owner,
        stations: &[Station],
        origin: Origin,
    ) -> Self {
        let points = if stations.len() < MIN_STATIONS_FOR_TRAJECTORY {
            Vec::new()
        } else {
            compute_trajectory(stations, origin)
        };
        Trajectory::new(name, color, owner, points)
    }

    pub fn from_survey_text(
        name: impl Into<String>,
        color: impl Into<String>,
        owner: Owner,
        text: &str,
        origin: Origin,
    ) -> Self {
        Trajectory::from_stations(name, color, owner, &parse_survey(text), origin)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn surface(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn total_depth(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// First point at or past measured depth `md`, falling back to TD when
    /// the survey stops short of it.
    pub fn intercept_point(&self, md: f64) -> Option<&TrajectoryPoint> {
        self.points
            .iter()
            .find(|p| p.md >= md)
            .or_else(|| self.points.last())
    }
}
