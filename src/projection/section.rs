use serde::{Deserialize, Serialize};

use crate::projection::{
    ensure_finite, ensure_padding, extent, span, ProjectedPath, ProjectionError, ScreenPoint,
};
use crate::{Trajectory, TrajectoryPoint};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SectionPoint {
    /// Horizontal displacement along the section azimuth (m).
    pub vs: f64,
    pub tvd: f64,
}

/// Horizontal displacement of a point along `azimuth_deg`.
pub fn vertical_section(point: &TrajectoryPoint, azimuth_deg: f64) -> f64 {
    let az = azimuth_deg.to_radians();
    point.north * az.cos() + point.east * az.sin()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SectionViewport {
    pub width: f64,
    pub height: f64,
    pub padding_px: f64,
}

impl Default for SectionViewport {
    fn default() -> Self {
        SectionViewport {
            width: 580.0,
            height: 420.0,
            padding_px: 44.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SectionProjection {
    pub azimuth_deg: f64,
    pub paths: Vec<ProjectedPath<SectionPoint>>,
    /// `(min, max)` of VS over all paths.
    pub vs_range: (f64, f64),
    /// Always starts at 0 so sections at different azimuths share a surface line.
    pub tvd_range: (f64, f64),
}

/// Projects every trajectory onto the vertical plane through `azimuth_deg`.
pub fn project_section(
    trajectories: &[Trajectory],
    azimuth_deg: f64,
) -> Result<SectionProjection, ProjectionError> {
    ensure_finite("azimuth_deg", azimuth_deg)?;

    let paths: Vec<ProjectedPath<SectionPoint>> = trajectories
        .iter()
        .map(|t| ProjectedPath {
            name: t.name.clone(),
            color: t.color.clone(),
            points: t
                .points
                .iter()
                .map(|p| SectionPoint {
                    vs: vertical_section(p, azimuth_deg),
                    tvd: p.tvd,
                })
                .collect(),
        })
        .collect();

    let all = || paths.iter().flat_map(|p| p.points.iter());
    let vs_range = extent(all().map(|p| p.vs)).unwrap_or((0.0, 0.0));
    let max_tvd = all().map(|p| p.tvd).fold(0.0_f64, f64::max);

    Ok(SectionProjection {
        azimuth_deg,
        paths,
        vs_range,
        tvd_range: (0.0, max_tvd),
    })
}

/// Screen mapping for a section view; TVD increases downward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SectionFrame {
    pub min_vs: f64,
    pub scale: f64,
    pub padding_px: f64,
}

impl SectionFrame {
    pub fn to_screen(&self, p: &SectionPoint) -> ScreenPoint {
        ScreenPoint::new(
            self.padding_px + (p.vs - self.min_vs) * self.scale,
            self.padding_px + p.tvd * self.scale,
        )
    }
}

impl SectionProjection {
    pub fn frame(&self, viewport: &SectionViewport) -> Result<SectionFrame, ProjectionError> {
        ensure_padding(viewport.width, viewport.height, viewport.padding_px)?;
        let (x0, x1) = self.vs_range;
        let (y0, y1) = self.tvd_range;
        let scale = ((viewport.width - 2.0 * viewport.padding_px) / span(x0, x1))
            .min((viewport.height - 2.0 * viewport.padding_px) / span(y0, y1));
        Ok(SectionFrame {
            min_vs: x0,
            scale,
            padding_px: viewport.padding_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::well::Owner;
    use crate::Origin;
    use assert_approx_eq::assert_approx_eq;

    fn well(text: &str) -> Trajectory {
        Trajectory::from_survey_text("VF", "#ea580c", Owner::Team("VF".into()), text, Origin::default())
    }

    #[test]
    fn section_along_well_azimuth_equals_horizontal_departure() {
        let t = well("0 0 0\n400 30 135\n900 45 135");
        let view = project_section(&[t.clone()], 135.0).unwrap();
        let last = view.paths[0].total_depth().copied().unwrap();
        let departure = t.points[0].horizontal_distance(t.total_depth().unwrap());
        assert_approx_eq!(last.vs, departure, 1e-6);
        assert_eq!(last.tvd, t.total_depth().unwrap().tvd);

        // perpendicular section sees no departure
        let side = project_section(&[t], 45.0).unwrap();
        assert_approx_eq!(side.paths[0].points[2].vs, 0.0, 1e-6);
    }

    #[test]
    fn vertical_axis_is_anchored_at_zero() {
        let t = well("0 0 0\n500 10 0\n1000 20 0");
        for az in [0.0, 90.0, 217.5] {
            let view = project_section(&[t.clone()], az).unwrap();
            assert_eq!(view.tvd_range.0, 0.0);
            let frame = view.frame(&SectionViewport::default()).unwrap();
            let surface = frame.to_screen(&SectionPoint { vs: view.vs_range.0, tvd: 0.0 });
            assert_eq!(surface.y, 44.0);
        }
    }

    #[test]
    fn frame_rejects_padding_wider_than_half_the_viewport() {
        let view = project_section(&[well("0 0 0\n500 10 0")], 0.0).unwrap();
        let vp = SectionViewport {
            padding_px: 400.0,
            ..SectionViewport::default()
        };
        assert!(matches!(
            view.frame(&vp),
            Err(ProjectionError::PaddingTooLarge { padding, .. }) if padding == 400.0
        ));
    }

    #[test]
    fn rejects_non_finite_azimuth() {
        assert!(project_section(&[], f64::INFINITY).is_err());
        let empty = project_section(&[], 10.0).unwrap();
        assert_eq!(empty.vs_range, (0.0, 0.0));
    }
}
