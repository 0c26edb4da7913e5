pub mod config;
pub mod data;
pub mod ifr;
pub mod projection;
pub mod sag;
pub mod separation;
pub mod spatial;
pub mod survey;
pub mod trajectory;

use serde::{Deserialize, Serialize};

pub use survey::parser::{format_survey, parse_survey};
pub use trajectory::min_curvature::compute_trajectory;
pub use trajectory::well::Trajectory;

/// One directional survey measurement. Angles are in degrees.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Measured depth along the hole (m).
    pub md: f64,
    /// Inclination from vertical (deg).
    pub inc: f64,
    /// Grid azimuth (deg).
    pub azi: f64,
}

impl Station {
    pub fn new(md: f64, inc: f64, azi: f64) -> Self {
        Station { md, inc, azi }
    }
}

/// Grid coordinate of a wellhead or target on the horizontal plane.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SurfaceLocation {
    pub north: f64,
    pub east: f64,
}

impl SurfaceLocation {
    pub fn new(north: f64, east: f64) -> Self {
        SurfaceLocation { north, east }
    }
}

/// Where a trajectory starts: surface grid coordinate plus the vertical
/// datum offset of the first point (e.g. `-27.0` for a rotary table 27 m
/// above mean sea level when working in TVDSS).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Origin {
    pub north: f64,
    pub east: f64,
    pub vertical: f64,
}

impl Origin {
    pub fn new(north: f64, east: f64, vertical: f64) -> Self {
        Origin {
            north,
            east,
            vertical,
        }
    }

    pub fn at(surface: SurfaceLocation, vertical: f64) -> Self {
        Origin::new(surface.north, surface.east, vertical)
    }

    pub fn surface(&self) -> SurfaceLocation {
        SurfaceLocation::new(self.north, self.east)
    }
}

/// A computed point along a wellbore.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    pub md: f64,
    /// TVD (or TVDSS, depending on the origin's vertical datum), positive down.
    pub tvd: f64,
    pub north: f64,
    pub east: f64,
    pub inc: f64,
    pub azi: f64,
    /// Dogleg severity of the interval ending at this point (deg/30 m).
    pub dls: f64,
}

impl TrajectoryPoint {
    pub fn at_origin(origin: Origin) -> Self {
        TrajectoryPoint {
            md: 0.0,
            tvd: origin.vertical,
            north: origin.north,
            east: origin.east,
            inc: 0.0,
            azi: 0.0,
            dls: 0.0,
        }
    }

    /// `[north, east, tvd]`, the layout used by the spatial index.
    pub fn position(&self) -> [f64; 3] {
        [self.north, self.east, self.tvd]
    }

    pub fn surface(&self) -> SurfaceLocation {
        SurfaceLocation::new(self.north, self.east)
    }

    pub fn horizontal_distance(&self, other: &TrajectoryPoint) -> f64 {
        self.horizontal_distance_to(other.surface())
    }

    pub fn horizontal_distance_to(&self, p: SurfaceLocation) -> f64 {
        let dn = self.north - p.north;
        let de = self.east - p.east;
        (dn * dn + de * de).sqrt()
    }

    pub fn distance(&self, other: &TrajectoryPoint) -> f64 {
        let dn = self.north - other.north;
        let de = self.east - other.east;
        let dv = self.tvd - other.tvd;
        (dn * dn + de * de + dv * dv).sqrt()
    }
}
