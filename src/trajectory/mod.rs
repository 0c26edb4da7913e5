pub mod min_curvature;
pub mod well;

/// Fewer valid stations than this yields an empty trajectory.
pub const MIN_STATIONS_FOR_TRAJECTORY: usize = 2;
