use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::projection::{
    axis_values, ensure_finite, ensure_viewport, extent, ProjectedPath, ProjectionError,
};
use crate::Trajectory;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitViewport {
    pub width: f64,
    pub height: f64,
    /// Fraction of the shorter canvas side covered by the data radius at zoom 1.
    pub fill: f64,
    pub grid_divisions: usize,
}

impl Default for OrbitViewport {
    fn default() -> Self {
        OrbitViewport {
            width: 680.0,
            height: 460.0,
            fill: 0.38,
            grid_divisions: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrbitPoint {
    pub x: f64,
    pub y: f64,
    /// View-space depth after rotation; larger is further from the viewer.
    pub depth: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrbitAxis {
    pub label: String,
    pub from: OrbitPoint,
    pub to: OrbitPoint,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrbitProjection {
    /// `[north, east, tvd]` of the centroid of all points.
    pub centroid: [f64; 3],
    /// Largest distance of any point from the centroid, at least 1 m.
    pub radius: f64,
    /// Pixels per meter, zoom included.
    pub scale: f64,
    pub paths: Vec<ProjectedPath<OrbitPoint>>,
    /// Path indices ordered far to near, for painter's-algorithm drawing.
    pub draw_order: Vec<usize>,
    /// Ground grid on the plane of the deepest point.
    pub grid: Vec<[OrbitPoint; 2]>,
    pub axes: Vec<OrbitAxis>,
}

const AXIS_FRACTION: f64 = 0.3;

struct Rotation {
    centroid: [f64; 3],
    pitch: (f64, f64),
    yaw: (f64, f64),
    scale: f64,
    half_width: f64,
    half_height: f64,
}

impl Rotation {
    fn project(&self, north: f64, east: f64, tvd: f64) -> OrbitPoint {
        let [cn, ce, cv] = self.centroid;
        let (x, y, z) = (east - ce, tvd - cv, north - cn);
        let (sin_yaw, cos_yaw) = self.yaw;
        let (sin_pitch, cos_pitch) = self.pitch;

        let x1 = x * cos_yaw + z * sin_yaw;
        let z1 = -x * sin_yaw + z * cos_yaw;
        let y2 = y * cos_pitch - z1 * sin_pitch;
        let z2 = y * sin_pitch + z1 * cos_pitch;

        OrbitPoint {
            x: self.half_width + x1 * self.scale,
            y: self.half_height + y2 * self.scale,
            depth: z2,
        }
    }
}

/// Rotated orthographic view of all trajectories.
///
/// Points are centred on their common centroid, rotated by yaw (about the
/// vertical axis) then pitch, and scaled so the furthest point from the
/// centroid stays on screen at zoom 1. TVD points down the screen at zero
/// rotation.
pub fn project_3d(
    trajectories: &[Trajectory],
    pitch_deg: f64,
    yaw_deg: f64,
    zoom: f64,
    viewport: &OrbitViewport,
) -> Result<OrbitProjection, ProjectionError> {
    let pitch = ensure_finite("pitch_deg", pitch_deg)?.to_radians();
    let yaw = ensure_finite("yaw_deg", yaw_deg)?.to_radians();
    if ensure_finite("zoom", zoom)? <= 0.0 {
        return Err(ProjectionError::NonPositiveZoom(zoom));
    }
    ensure_viewport(viewport.width, viewport.height)?;

    let all: Vec<[f64; 3]> = trajectories
        .iter()
        .flat_map(|t| t.points.iter().map(|p| p.position()))
        .collect();

    let centroid = if all.is_empty() {
        [0.0; 3]
    } else {
        let n = all.len() as f64;
        let sum = all.iter().fold([0.0; 3], |acc, p| {
            [acc[0] + p[0], acc[1] + p[1], acc[2] + p[2]]
        });
        [sum[0] / n, sum[1] / n, sum[2] / n]
    };
    let radius = all
        .iter()
        .map(|p| {
            let d = [p[0] - centroid[0], p[1] - centroid[1], p[2] - centroid[2]];
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
        })
        .fold(1.0_f64, f64::max);
    let scale = viewport.width.min(viewport.height) * viewport.fill / radius * zoom;

    let rot = Rotation {
        centroid,
        pitch: pitch.sin_cos(),
        yaw: yaw.sin_cos(),
        scale,
        half_width: viewport.width / 2.0,
        half_height: viewport.height / 2.0,
    };

    let paths: Vec<ProjectedPath<OrbitPoint>> = trajectories
        .iter()
        .map(|t| ProjectedPath {
            name: t.name.clone(),
            color: t.color.clone(),
            points: t
                .points
                .iter()
                .map(|p| rot.project(p.north, p.east, p.tvd))
                .collect(),
        })
        .collect();

    let mean_depth = |path: &ProjectedPath<OrbitPoint>| {
        path.points.iter().map(|p| p.depth).sum::<f64>() / path.points.len().max(1) as f64
    };
    let mut draw_order: Vec<usize> = (0..paths.len()).collect();
    draw_order.sort_by(|&a, &b| {
        mean_depth(&paths[b])
            .partial_cmp(&mean_depth(&paths[a]))
            .unwrap_or(Ordering::Equal)
    });

    let grid = ground_grid(&all, &rot, viewport.grid_divisions);

    let [cn, ce, _] = centroid;
    let axis_len = radius * AXIS_FRACTION;
    let origin = rot.project(cn, ce, 0.0);
    let axes = [
        ("E", cn, ce + axis_len, 0.0),
        ("N", cn + axis_len, ce, 0.0),
        ("TVD", cn, ce, axis_len),
    ]
    .into_iter()
    .map(|(label, n, e, v)| OrbitAxis {
        label: label.to_string(),
        from: origin,
        to: rot.project(n, e, v),
    })
    .collect();

    Ok(OrbitProjection {
        centroid,
        radius,
        scale,
        paths,
        draw_order,
        grid,
        axes,
    })
}

fn ground_grid(all: &[[f64; 3]], rot: &Rotation, divisions: usize) -> Vec<[OrbitPoint; 2]> {
    let (Some((n_min, n_max)), Some((e_min, e_max)), Some((_, tvd_max))) = (
        extent(all.iter().map(|p| p[0])),
        extent(all.iter().map(|p| p[1])),
        extent(all.iter().map(|p| p[2])),
    ) else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(2 * (divisions + 1));
    for e in axis_values(e_min, e_max, divisions) {
        lines.push([rot.project(n_min, e, tvd_max), rot.project(n_max, e, tvd_max)]);
    }
    for n in axis_values(n_min, n_max, divisions) {
        lines.push([rot.project(n, e_min, tvd_max), rot.project(n, e_max, tvd_max)]);
    }
    lines
}

/// Interactive orbit state: drag to rotate, wheel to zoom.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrbitCamera {
    pub pitch_deg: f64,
    pub yaw_deg: f64,
    pub zoom: f64,
}

impl OrbitCamera {
    pub const DEG_PER_PIXEL: f64 = 0.4;
    pub const ZOOM_IN: f64 = 1.12;
    pub const ZOOM_OUT: f64 = 0.9;
    pub const MIN_ZOOM: f64 = 0.15;
    pub const MAX_ZOOM: f64 = 20.0;

    pub fn drag(&mut self, dx_px: f64, dy_px: f64) {
        self.yaw_deg += dx_px * Self::DEG_PER_PIXEL;
        self.pitch_deg += dy_px * Self::DEG_PER_PIXEL;
    }

    pub fn wheel(&mut self, zoom_in: bool) {
        let factor = if zoom_in { Self::ZOOM_IN } else { Self::ZOOM_OUT };
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = OrbitCamera::default();
    }

    pub fn project(
        &self,
        trajectories: &[Trajectory],
        viewport: &OrbitViewport,
    ) -> Result<OrbitProjection, ProjectionError> {
        project_3d(trajectories, self.pitch_deg, self.yaw_deg, self.zoom, viewport)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            pitch_deg: -30.0,
            yaw_deg: 20.0,
            zoom: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::well::Owner;
    use crate::Origin;
    use assert_approx_eq::assert_approx_eq;

    fn wells() -> Vec<Trajectory> {
        vec![
            Trajectory::from_survey_text(
                "SC",
                "#9333ea",
                Owner::Team("SC".into()),
                "0 0 0\n125 2.2 202\n430 16 198\n730 31 196\n1030 43 195",
                Origin::new(600400.0, 524230.0, -27.0),
            ),
            Trajectory::from_survey_text(
                "A04",
                "#facc15",
                Owner::ReferenceWell("A04".into()),
                "0 0 0\n121 1 250\n256 7.3 235\n426 20 194\n640 38.8 196",
                Origin::new(600606.769, 524209.527, -27.0),
            ),
        ]
    }

    #[test]
    fn identical_parameters_give_identical_output() {
        let ws = wells();
        let vp = OrbitViewport::default();
        let a = project_3d(&ws, -30.0, 20.0, 1.0, &vp).unwrap();
        let b = project_3d(&ws, -30.0, 20.0, 1.0, &vp).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn whole_dataset_fits_regardless_of_absolute_position() {
        let ws = wells();
        let vp = OrbitViewport::default();
        for (pitch, yaw) in [(0.0, 0.0), (-30.0, 20.0), (75.0, 190.0)] {
            let view = project_3d(&ws, pitch, yaw, 1.0, &vp).unwrap();
            let reach = vp.width.min(vp.height) * vp.fill;
            for p in view.paths.iter().flat_map(|p| p.points.iter()) {
                let r = ((p.x - vp.width / 2.0).powi(2) + (p.y - vp.height / 2.0).powi(2)).sqrt();
                assert!(r <= reach + 1e-6, "point at {r} px exceeds {reach}");
            }
        }
    }

    #[test]
    fn zero_rotation_maps_east_right_and_depth_down() {
        let ws = wells();
        let view = project_3d(&ws, 0.0, 0.0, 1.0, &OrbitViewport::default()).unwrap();
        let sc = &view.paths[0];
        let surface = sc.surface().unwrap();
        let td = sc.total_depth().unwrap();
        assert!(td.y > surface.y);
        assert_eq!(view.grid.len(), 12);
        assert_eq!(view.axes.len(), 3);
        assert_eq!(view.draw_order.len(), 2);
    }

    #[test]
    fn zoom_scales_about_the_centre() {
        let ws = wells();
        let vp = OrbitViewport::default();
        let one = project_3d(&ws, 10.0, 40.0, 1.0, &vp).unwrap();
        let two = project_3d(&ws, 10.0, 40.0, 2.0, &vp).unwrap();
        assert_approx_eq!(two.scale, one.scale * 2.0, 1e-12);
        let p1 = one.paths[1].points[3];
        let p2 = two.paths[1].points[3];
        assert_approx_eq!(p2.x - vp.width / 2.0, 2.0 * (p1.x - vp.width / 2.0), 1e-9);
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        let ws = wells();
        let vp = OrbitViewport::default();
        assert!(matches!(
            project_3d(&ws, f64::NAN, 0.0, 1.0, &vp),
            Err(ProjectionError::NonFiniteParameter { name: "pitch_deg", .. })
        ));
        assert!(matches!(
            project_3d(&ws, 0.0, f64::INFINITY, 1.0, &vp),
            Err(ProjectionError::NonFiniteParameter { name: "yaw_deg", .. })
        ));
        assert!(matches!(
            project_3d(&ws, 0.0, 0.0, 0.0, &vp),
            Err(ProjectionError::NonPositiveZoom(_))
        ));
        assert!(matches!(
            project_3d(&ws, 0.0, 0.0, -1.0, &vp),
            Err(ProjectionError::NonPositiveZoom(_))
        ));
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        let view = project_3d(&[], 0.0, 0.0, 1.0, &OrbitViewport::default()).unwrap();
        assert!(view.paths.is_empty());
        assert!(view.grid.is_empty());
        assert_eq!(view.radius, 1.0);
    }

    #[test]
    fn camera_drag_zoom_and_reset() {
        let mut cam = OrbitCamera::default();
        cam.drag(10.0, -5.0);
        assert_approx_eq!(cam.yaw_deg, 24.0, 1e-12);
        assert_approx_eq!(cam.pitch_deg, -32.0, 1e-12);
        for _ in 0..100 {
            cam.wheel(true);
        }
        assert_eq!(cam.zoom, OrbitCamera::MAX_ZOOM);
        for _ in 0..100 {
            cam.wheel(false);
        }
        assert_eq!(cam.zoom, OrbitCamera::MIN_ZOOM);
        assert!(cam.project(&wells(), &OrbitViewport::default()).is_ok());
        cam.reset();
        assert_eq!(cam, OrbitCamera::default());
    }
}
