//! 2D views of trajectories: plan, vertical section and a rotated 3D
//! orthographic projection. Every projection is a pure function of its
//! inputs.

pub mod orbit;
pub mod plan;
pub mod section;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("projection parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("zoom must be positive, got {0}")]
    NonPositiveZoom(f64),
    #[error("viewport must have positive size, got {width}x{height}")]
    EmptyViewport { width: f64, height: f64 },
    #[error("padding {padding}px leaves no drawing area in a {width}x{height} viewport")]
    PaddingTooLarge { padding: f64, width: f64, height: f64 },
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ProjectionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjectionError::NonFiniteParameter { name, value })
    }
}

pub(crate) fn ensure_viewport(width: f64, height: f64) -> Result<(), ProjectionError> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::EmptyViewport { width, height })
    }
}

/// Padding on both sides must leave a drawable area on each axis.
pub(crate) fn ensure_padding(width: f64, height: f64, padding: f64) -> Result<(), ProjectionError> {
    ensure_viewport(width, height)?;
    if padding >= 0.0 && 2.0 * padding < width.min(height) {
        Ok(())
    } else {
        Err(ProjectionError::PaddingTooLarge { padding, width, height })
    }
}

/// Point in screen space, origin top-left, y down.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        ScreenPoint { x, y }
    }
}

/// One trajectory mapped into a view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectedPath<P> {
    pub name: String,
    pub color: String,
    pub points: Vec<P>,
}

impl<P> ProjectedPath<P> {
    pub fn surface(&self) -> Option<&P> {
        self.points.first()
    }

    pub fn total_depth(&self) -> Option<&P> {
        self.points.last()
    }
}

/// Axis label position: the world value and where it lands on screen.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub screen: f64,
}

/// `divisions + 1` evenly spaced values from `lo` to `hi`.
pub fn axis_values(lo: f64, hi: f64, divisions: usize) -> Vec<f64> {
    if divisions == 0 {
        return vec![lo];
    }
    (0..=divisions)
        .map(|i| lo + (hi - lo) * i as f64 / divisions as f64)
        .collect()
}

/// `(min, max)` of the values, `None` when there are none.
pub(crate) fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Span used for fitting; a zero span falls back to 1 so scales stay finite.
pub(crate) fn span(lo: f64, hi: f64) -> f64 {
    let d = hi - lo;
    if d == 0.0 || !d.is_finite() {
        1.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_values_cover_range() {
        assert_eq!(axis_values(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(axis_values(3.0, 9.0, 0), vec![3.0]);
    }

    #[test]
    fn extent_and_span() {
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(span(5.0, 5.0), 1.0);
        assert_eq!(span(-2.0, 2.0), 4.0);
    }

    #[test]
    fn parameter_validation() {
        assert!(ensure_finite("pitch", 1.0).is_ok());
        assert!(matches!(
            ensure_finite("yaw", f64::NAN),
            Err(ProjectionError::NonFiniteParameter { name: "yaw", .. })
        ));
        assert!(ensure_viewport(0.0, 10.0).is_err());
    }

    #[test]
    fn padding_must_leave_room_to_draw() {
        assert!(ensure_padding(400.0, 300.0, 20.0).is_ok());
        assert!(matches!(
            ensure_padding(400.0, 300.0, 150.0),
            Err(ProjectionError::PaddingTooLarge { padding, .. }) if padding == 150.0
        ));
        assert!(ensure_padding(400.0, 300.0, -1.0).is_err());
        assert!(ensure_padding(400.0, 300.0, f64::NAN).is_err());
        assert!(matches!(
            ensure_padding(0.0, 300.0, 0.0),
            Err(ProjectionError::EmptyViewport { .. })
        ));
    }
}
