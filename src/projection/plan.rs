use serde::{Deserialize, Serialize};

use crate::projection::{
    axis_values, ensure_finite, ensure_padding, extent, span, ProjectedPath, ProjectionError,
    ScreenPoint, Tick,
};
use crate::{SurfaceLocation, Trajectory, TrajectoryPoint};

/// Canvas and framing settings for the plan view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanViewport {
    pub width: f64,
    pub height: f64,
    /// Screen inset on every side (px).
    pub padding_px: f64,
    /// World margin added around the fitted data (m).
    pub margin_m: f64,
    /// Length represented by the scale bar (m).
    pub scale_bar_m: f64,
    pub tick_divisions: usize,
}

impl Default for PlanViewport {
    fn default() -> Self {
        PlanViewport {
            width: 620.0,
            height: 500.0,
            padding_px: 20.0,
            margin_m: 150.0,
            scale_bar_m: 200.0,
            tick_divisions: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanBounds {
    pub min_north: f64,
    pub max_north: f64,
    pub min_east: f64,
    pub max_east: f64,
}

impl PlanBounds {
    /// Tight bounds of the points grown by `margin_m` on every side.
    pub fn around<'a>(
        points: impl IntoIterator<Item = &'a TrajectoryPoint>,
        margin_m: f64,
    ) -> Option<Self> {
        let points: Vec<&TrajectoryPoint> = points.into_iter().collect();
        let (min_north, max_north) = extent(points.iter().map(|p| p.north))?;
        let (min_east, max_east) = extent(points.iter().map(|p| p.east))?;
        Some(PlanBounds {
            min_north: min_north - margin_m,
            max_north: max_north + margin_m,
            min_east: min_east - margin_m,
            max_east: max_east + margin_m,
        })
    }

    fn validate(&self) -> Result<(), ProjectionError> {
        ensure_finite("min_north", self.min_north)?;
        ensure_finite("max_north", self.max_north)?;
        ensure_finite("min_east", self.min_east)?;
        ensure_finite("max_east", self.max_east)?;
        Ok(())
    }
}

/// World-to-screen mapping for the plan view. North is up and both axes
/// share one scale so shapes keep their proportions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanFrame {
    pub bounds: PlanBounds,
    /// Pixels per meter.
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    pub padding_px: f64,
}

impl PlanFrame {
    pub fn fit(bounds: PlanBounds, viewport: &PlanViewport) -> Self {
        let usable_w = viewport.width - 2.0 * viewport.padding_px;
        let usable_h = viewport.height - 2.0 * viewport.padding_px;
        let scale = (usable_w / span(bounds.min_east, bounds.max_east))
            .min(usable_h / span(bounds.min_north, bounds.max_north));
        PlanFrame {
            bounds,
            scale,
            width: viewport.width,
            height: viewport.height,
            padding_px: viewport.padding_px,
        }
    }

    pub fn to_screen(&self, north: f64, east: f64) -> ScreenPoint {
        ScreenPoint::new(
            self.padding_px + (east - self.bounds.min_east) * self.scale,
            self.height - self.padding_px - (north - self.bounds.min_north) * self.scale,
        )
    }

    pub fn locate(&self, p: SurfaceLocation) -> ScreenPoint {
        self.to_screen(p.north, p.east)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScaleBar {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub length_m: f64,
    pub label: String,
}

/// North arrow drawn in the top-right corner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Compass {
    pub base: ScreenPoint,
    pub tip: ScreenPoint,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanProjection {
    pub frame: PlanFrame,
    pub paths: Vec<ProjectedPath<ScreenPoint>>,
    pub reference: Option<ProjectedPath<ScreenPoint>>,
    pub scale_bar: ScaleBar,
    pub compass: Compass,
    pub east_ticks: Vec<Tick>,
    pub north_ticks: Vec<Tick>,
}

impl PlanProjection {
    /// Screen position of a single point, e.g. the intercept on the reference well.
    pub fn marker(&self, point: &TrajectoryPoint) -> ScreenPoint {
        self.frame.to_screen(point.north, point.east)
    }
}

const COMPASS_LENGTH_PX: f64 = 16.0;

/// Projects trajectories (and an optional reference well) top-down.
///
/// Without explicit `bounds` the view is fitted to every point of every
/// trajectory, reference included, plus the viewport margin.
pub fn project_plan(
    trajectories: &[Trajectory],
    reference: Option<&Trajectory>,
    bounds: Option<PlanBounds>,
    viewport: &PlanViewport,
) -> Result<PlanProjection, ProjectionError> {
    ensure_padding(viewport.width, viewport.height, viewport.padding_px)?;
    ensure_finite("scale_bar_m", viewport.scale_bar_m)?;

    let bounds = match bounds {
        Some(b) => b,
        None => {
            let all = trajectories
                .iter()
                .chain(reference)
                .flat_map(|t| t.points.iter());
            PlanBounds::around(all, viewport.margin_m).unwrap_or(PlanBounds {
                min_north: -viewport.margin_m,
                max_north: viewport.margin_m,
                min_east: -viewport.margin_m,
                max_east: viewport.margin_m,
            })
        }
    };
    bounds.validate()?;

    let frame = PlanFrame::fit(bounds, viewport);
    let project = |t: &Trajectory| ProjectedPath {
        name: t.name.clone(),
        color: t.color.clone(),
        points: t
            .points
            .iter()
            .map(|p| frame.to_screen(p.north, p.east))
            .collect(),
    };

    let bar_y = viewport.height - viewport.padding_px;
    let scale_bar = ScaleBar {
        start: ScreenPoint::new(viewport.padding_px, bar_y),
        end: ScreenPoint::new(viewport.padding_px + viewport.scale_bar_m * frame.scale, bar_y),
        length_m: viewport.scale_bar_m,
        label: format!("{} m", viewport.scale_bar_m),
    };
    let compass_x = viewport.width - viewport.padding_px;
    let compass = Compass {
        base: ScreenPoint::new(compass_x, viewport.padding_px + COMPASS_LENGTH_PX),
        tip: ScreenPoint::new(compass_x, viewport.padding_px),
    };

    let east_ticks = axis_values(bounds.min_east, bounds.max_east, viewport.tick_divisions)
        .into_iter()
        .map(|value| Tick {
            value,
            screen: frame.to_screen(bounds.min_north, value).x,
        })
        .collect();
    let north_ticks = axis_values(bounds.min_north, bounds.max_north, viewport.tick_divisions)
        .into_iter()
        .map(|value| Tick {
            value,
            screen: frame.to_screen(value, bounds.min_east).y,
        })
        .collect();

    Ok(PlanProjection {
        frame,
        paths: trajectories.iter().map(project).collect(),
        reference: reference.map(project),
        scale_bar,
        compass,
        east_ticks,
        north_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::well::Owner;
    use crate::Origin;
    use assert_approx_eq::assert_approx_eq;

    fn well(name: &str, text: &str, origin: Origin) -> Trajectory {
        Trajectory::from_survey_text(name, "#fff", Owner::Team(name.into()), text, origin)
    }

    #[test]
    fn marker_matches_projected_path() {
        let t = well("A04", "0 0 0\n400 20 196\n800 40 196", Origin::default());
        let view = project_plan(&[], Some(&t), None, &PlanViewport::default()).unwrap();
        let target = t.intercept_point(300.0).unwrap();
        let idx = t.points.iter().position(|p| p == target).unwrap();
        let reference = view.reference.as_ref().unwrap();
        assert_eq!(view.marker(target), reference.points[idx]);
    }

    #[test]
    fn north_is_up_and_scale_is_uniform() {
        let t = well("GM", "0 0 0\n500 60 0\n1000 60 90", Origin::default());
        let view = project_plan(&[t.clone()], None, None, &PlanViewport::default()).unwrap();
        let path = &view.paths[0];
        assert_eq!(path.points.len(), t.len());

        // deeper points are further north, so higher on screen
        assert!(path.points[1].y < path.points[0].y);

        let world = t.points[0].horizontal_distance(&t.points[2]);
        let a = path.points[0];
        let b = path.points[2];
        let screen = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert_approx_eq!(screen, world * view.frame.scale, 1e-9);
    }

    #[test]
    fn fitted_points_stay_inside_padding() {
        let vp = PlanViewport::default();
        let a = well("A", "0 0 0\n800 45 200\n1600 50 196", Origin::new(600450.0, 524180.0, -27.0));
        let b = well("B", "0 0 0\n900 40 120", Origin::new(600606.0, 524209.0, -27.0));
        let view = project_plan(&[a], Some(&b), None, &vp).unwrap();
        let all = view
            .paths
            .iter()
            .chain(view.reference.iter())
            .flat_map(|p| p.points.iter());
        for p in all {
            assert!(p.x >= vp.padding_px - 1e-9 && p.x <= vp.width - vp.padding_px + 1e-9);
            assert!(p.y >= vp.padding_px - 1e-9 && p.y <= vp.height - vp.padding_px + 1e-9);
        }
    }

    #[test]
    fn oversized_padding_is_rejected() {
        let t = well("AC", "0 0 0\n1000 50 90", Origin::default());
        let vp = PlanViewport {
            padding_px: PlanViewport::default().height / 2.0,
            ..PlanViewport::default()
        };
        assert!(matches!(
            project_plan(&[t], None, None, &vp),
            Err(ProjectionError::PaddingTooLarge { .. })
        ));
    }

    #[test]
    fn scale_bar_spans_fixed_distance() {
        let t = well("AC", "0 0 0\n1000 50 90", Origin::default());
        let view = project_plan(&[t], None, None, &PlanViewport::default()).unwrap();
        assert_approx_eq!(view.scale_bar.end.x - view.scale_bar.start.x, 200.0 * view.frame.scale, 1e-9);
        assert_eq!(view.scale_bar.label, "200 m");
        assert!(view.compass.tip.y < view.compass.base.y);
        assert_eq!(view.east_ticks.len(), 6);
    }

    #[test]
    fn explicit_bounds_are_used_verbatim() {
        let bounds = PlanBounds {
            min_north: 0.0,
            max_north: 460.0,
            min_east: 0.0,
            max_east: 580.0,
        };
        let view = project_plan(&[], None, Some(bounds), &PlanViewport::default()).unwrap();
        assert_eq!(view.frame.bounds, bounds);
        assert_approx_eq!(view.frame.scale, 1.0, 1e-12);
        let p = view.frame.locate(SurfaceLocation::new(0.0, 0.0));
        assert_eq!(p, ScreenPoint::new(20.0, 480.0));
    }

    #[test]
    fn empty_input_and_bad_viewport() {
        let view = project_plan(&[], None, None, &PlanViewport::default()).unwrap();
        assert!(view.paths.is_empty());
        assert!(view.frame.scale.is_finite());

        let vp = PlanViewport {
            width: 0.0,
            ..PlanViewport::default()
        };
        assert!(project_plan(&[], None, None, &vp).is_err());
    }
}
