use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::spatial::kd_tree::KDTree;
use crate::{SurfaceLocation, TrajectoryPoint};

/// Horizontal separation thresholds (m). A distance below
/// `too_close_below_m` is too close, one at or above `good_from_m` is good,
/// anything between is marginal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeparationBands {
    pub too_close_below_m: f64,
    pub good_from_m: f64,
}

impl Default for SeparationBands {
    fn default() -> Self {
        SeparationBands {
            too_close_below_m: 300.0,
            good_from_m: 600.0,
        }
    }
}

impl SeparationBands {
    pub fn classify(&self, distance_m: f64) -> SeparationBand {
        if distance_m < self.too_close_below_m {
            SeparationBand::TooClose
        } else if distance_m < self.good_from_m {
            SeparationBand::Marginal
        } else {
            SeparationBand::Good
        }
    }

    pub fn is_valid(&self) -> bool {
        self.too_close_below_m.is_finite()
            && self.good_from_m.is_finite()
            && self.too_close_below_m >= 0.0
            && self.too_close_below_m <= self.good_from_m
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeparationBand {
    TooClose,
    Marginal,
    Good,
}

/// What a candidate well is measured against.
#[derive(Clone, Copy, Debug)]
pub enum SeparationTarget<'a> {
    /// A fixed target trajectory, compared at matching TVD.
    Trajectory(&'a [TrajectoryPoint]),
    /// A target surface point, compared with the candidate's surface point.
    Surface(SurfaceLocation),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SeparationReport {
    /// Horizontal distance (m) used for the band.
    pub distance_m: f64,
    pub band: SeparationBand,
    /// Candidate minus target.
    pub delta_north: f64,
    pub delta_east: f64,
    pub candidate_md: f64,
    pub target_md: Option<f64>,
    /// Depth at which the two wells were compared, when the target has depth.
    pub tvd: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Separation {
    /// Nothing to measure yet; never a distance of zero.
    NoData,
    Measured(SeparationReport),
}

impl Separation {
    pub fn report(&self) -> Option<&SeparationReport> {
        match self {
            Separation::NoData => None,
            Separation::Measured(report) => Some(report),
        }
    }
}

/// Positions on `path` at `tvd`, linearly interpolated inside every
/// segment that spans that depth. A path that turns back up can cross the
/// same depth more than once.
fn positions_at_tvd(path: &[TrajectoryPoint], tvd: f64) -> Vec<TrajectoryPoint> {
    if let [only] = path {
        return if only.tvd == tvd { vec![*only] } else { Vec::new() };
    }
    let mut found = Vec::new();
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (lo, hi) = if a.tvd <= b.tvd { (a.tvd, b.tvd) } else { (b.tvd, a.tvd) };
        if tvd < lo || tvd > hi {
            continue;
        }
        if hi == lo {
            found.push(a);
            found.push(b);
            continue;
        }
        let t = (tvd - a.tvd) / (b.tvd - a.tvd);
        found.push(TrajectoryPoint {
            md: a.md + (b.md - a.md) * t,
            tvd,
            north: a.north + (b.north - a.north) * t,
            east: a.east + (b.east - a.east) * t,
            ..b
        });
    }
    found
}

/// Pairs of (candidate, target) positions at the same TVD: each candidate
/// point against the target path, then each target point against the
/// candidate path.
fn depth_matched_pairs(
    candidate: &[TrajectoryPoint],
    target: &[TrajectoryPoint],
) -> Vec<(TrajectoryPoint, TrajectoryPoint)> {
    let forward = candidate
        .iter()
        .flat_map(|c| positions_at_tvd(target, c.tvd).into_iter().map(move |t| (*c, t)));
    let reverse = target
        .iter()
        .flat_map(|t| positions_at_tvd(candidate, t.tvd).into_iter().map(move |c| (c, *t)));
    forward.chain(reverse).collect()
}

/// Horizontal separation between a candidate well and a target.
///
/// Against a trajectory the wells are compared at corresponding depths:
/// every station of either well is matched with the other well's position
/// at the same TVD, and the smallest horizontal distance is reported.
/// Stations outside the other well's depth range are not compared, and
/// wells with no depth in common give `NoData`. Swapping the two wells
/// yields the same distance and band.
pub fn compute_separation(
    candidate: &[TrajectoryPoint],
    target: SeparationTarget<'_>,
    bands: &SeparationBands,
) -> Separation {
    let report = match target {
        SeparationTarget::Surface(location) => candidate.first().map(|surface| SeparationReport {
            distance_m: surface.horizontal_distance_to(location),
            band: SeparationBand::Good,
            delta_north: surface.north - location.north,
            delta_east: surface.east - location.east,
            candidate_md: surface.md,
            target_md: None,
            tvd: None,
        }),
        SeparationTarget::Trajectory(points) => depth_matched_pairs(candidate, points)
            .into_iter()
            .map(|(c, t)| (c, t, c.horizontal_distance(&t)))
            .fold(None, |best: Option<(TrajectoryPoint, TrajectoryPoint, f64)>, pair| {
                match best {
                    Some(b) if b.2 <= pair.2 => Some(b),
                    _ => Some(pair),
                }
            })
            .map(|(c, t, distance_m)| SeparationReport {
                distance_m,
                band: SeparationBand::Good,
                delta_north: c.north - t.north,
                delta_east: c.east - t.east,
                candidate_md: c.md,
                target_md: Some(t.md),
                tvd: Some(c.tvd),
            }),
    };

    match report {
        Some(report) if report.distance_m.is_finite() => Separation::Measured(SeparationReport {
            band: bands.classify(report.distance_m),
            ..report
        }),
        Some(report) => {
            debug!("discarding non-finite separation {}", report.distance_m);
            Separation::NoData
        }
        None => Separation::NoData,
    }
}

/// Nearest 3D approach of a candidate well to a target well.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClosestApproach {
    pub candidate_index: usize,
    pub target_index: usize,
    pub candidate_md: f64,
    pub target_md: f64,
    pub distance_m: f64,
}

/// Searches every candidate point against a k-d tree of the target points.
/// `None` when either well has no points.
pub fn closest_approach(
    candidate: &[TrajectoryPoint],
    target: &[TrajectoryPoint],
) -> Option<ClosestApproach> {
    let positions: Vec<[f64; 3]> = target.iter().map(|p| p.position()).collect();
    let tree = KDTree::build(&positions);

    candidate
        .iter()
        .enumerate()
        .filter_map(|(ci, c)| tree.nearest(c.position()).map(|(ti, d)| (ci, ti, d)))
        .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
        .map(|(candidate_index, target_index, distance_m)| ClosestApproach {
            candidate_index,
            target_index,
            candidate_md: candidate[candidate_index].md,
            target_md: target[target_index].md,
            distance_m,
        })
}
