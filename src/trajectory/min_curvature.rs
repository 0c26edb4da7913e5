use log::debug;

use crate::{Origin, Station, TrajectoryPoint};

/// Below this dogleg (rad) the ratio factor is taken as exactly 1.
const MIN_DOGLEG_RAD: f64 = 1e-6;

/// Course length used to express dogleg severity (deg per 30 m).
const DLS_COURSE_LENGTH_M: f64 = 30.0;

/// Dogleg angle (rad) between two survey directions given in radians.
/// The arccos argument is clamped so floating drift never yields NaN.
pub fn dogleg_angle(inc1: f64, azi1: f64, inc2: f64, azi2: f64) -> f64 {
    let cos_dl = (inc2 - inc1).cos() - inc1.sin() * inc2.sin() * (1.0 - (azi2 - azi1).cos());
    cos_dl.clamp(-1.0, 1.0).acos()
}

/// Minimum-curvature ratio factor for a dogleg angle in radians.
pub fn ratio_factor(dogleg: f64) -> f64 {
    if dogleg < MIN_DOGLEG_RAD {
        1.0
    } else {
        (2.0 / dogleg) * (dogleg / 2.0).tan()
    }
}

/// Runs the minimum-curvature method over `stations`, starting from `origin`.
///
/// Point 0 is always the surface point at the origin. When the first
/// station is not at MD 0 it is reached from a vertical tie-in at the
/// surface, so the output holds one point per station plus that origin.
/// Intervals whose MD does not increase contribute nothing: the previous
/// position and angles are carried forward at the new MD.
///
/// Negative angles are converted as given; they are not rejected.
pub fn compute_trajectory(stations: &[Station], origin: Origin) -> Vec<TrajectoryPoint> {
    let Some(first) = stations.first() else {
        return Vec::new();
    };

    let (tie_in, rest) = if first.md == 0.0 {
        (*first, &stations[1..])
    } else {
        (Station::new(0.0, 0.0, 0.0), stations)
    };

    let mut points = Vec::with_capacity(rest.len() + 1);
    let mut current = TrajectoryPoint {
        inc: tie_in.inc,
        azi: tie_in.azi,
        ..TrajectoryPoint::at_origin(origin)
    };
    points.push(current);

    let mut previous = tie_in;
    for station in rest {
        current = advance(&current, &previous, station);
        points.push(current);
        previous = *station;
    }
    points
}

fn advance(last: &TrajectoryPoint, from: &Station, to: &Station) -> TrajectoryPoint {
    let dmd = to.md - from.md;
    if dmd <= 0.0 {
        debug!(
            "skipping survey interval {} -> {} m (non-increasing MD)",
            from.md, to.md
        );
        return TrajectoryPoint {
            md: to.md,
            dls: 0.0,
            ..*last
        };
    }

    let (i1, a1) = (from.inc.to_radians(), from.azi.to_radians());
    let (i2, a2) = (to.inc.to_radians(), to.azi.to_radians());
    let dogleg = dogleg_angle(i1, a1, i2, a2);
    let half = dmd / 2.0 * ratio_factor(dogleg);

    TrajectoryPoint {
        md: to.md,
        tvd: last.tvd + half * (i1.cos() + i2.cos()),
        north: last.north + half * (i1.sin() * a1.cos() + i2.sin() * a2.cos()),
        east: last.east + half * (i1.sin() * a1.sin() + i2.sin() * a2.sin()),
        inc: to.inc,
        azi: to.azi,
        dls: dogleg.to_degrees() / dmd * DLS_COURSE_LENGTH_M,
    }
}
