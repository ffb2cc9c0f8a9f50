use crate::angle::deg_to_rad;
use crate::consts::ANGLE_RESOLUTION;
use crate::fov::fov;
use crate::spec::PanSpec;

/// Fraction of a field of view left after removing the overlap.
fn overlap_factor(overlap_pct: f64) -> f64 {
    1.0 - overlap_pct / 100.0
}

fn round_to_resolution(degrees: f64) -> f64 {
    (degrees / ANGLE_RESOLUTION).round() * ANGLE_RESOLUTION
}

/// Yaw step between neighbouring shots without latitude correction.
pub fn horizontal_step(hfov: f64, overlap_pct: f64) -> f64 {
    hfov * overlap_factor(overlap_pct)
}

/// Pitch step between neighbouring rows. Fixed for a whole job.
pub fn vertical_step(vfov: f64, overlap_pct: f64) -> f64 {
    vfov * overlap_factor(overlap_pct)
}

/// Latitude of the row edge that is least foreshortened.
///
/// A row spanning the equator contains latitude 0. Otherwise the edge nearer
/// the equator wins, with ties going to the top edge.
pub fn least_foreshortened_edge(row_pitch: f64, vfov: f64) -> f64 {
    let top = row_pitch + 0.5 * vfov;
    let bottom = row_pitch - 0.5 * vfov;

    if bottom <= 0.0 && 0.0 <= top {
        0.0
    } else if top.abs() <= bottom.abs() {
        top
    } else {
        bottom
    }
}

/// Yaw step for a row centred on `row_pitch`, widened for foreshortening.
///
/// A shot's horizontal coverage shrinks by `cos(latitude)` when projected
/// onto the sphere away from the equator, so the overlap-adjusted field of
/// view is divided by the cosine of the binding edge. The result is rounded
/// to the nearest tenth of a degree.
pub fn optimized_horizontal_step(
    row_pitch: f64,
    hfov: f64,
    vfov: f64,
    overlap_pct: f64,
) -> f64 {
    let edge = least_foreshortened_edge(row_pitch, vfov);
    let base = horizontal_step(hfov, overlap_pct);
    round_to_resolution(base / deg_to_rad(edge).cos())
}

/// Per-job step sizes derived from a [`PanSpec`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPlan {
    pub hfov: f64,
    pub vfov: f64,
    /// Yaw step before any latitude correction.
    pub yaw_step: f64,
    pub pitch_step: f64,
    pub horizontal_overlap_pct: f64,
    pub optimize: bool,
}

impl StepPlan {
    pub fn from_spec(spec: &PanSpec) -> Self {
        let hfov = fov(spec.sensor_width, spec.focal_length);
        let vfov = fov(spec.sensor_height, spec.focal_length);
        Self {
            hfov,
            vfov,
            yaw_step: horizontal_step(hfov, spec.horizontal_overlap_pct),
            pitch_step: vertical_step(vfov, spec.vertical_overlap_pct),
            horizontal_overlap_pct: spec.horizontal_overlap_pct,
            optimize: spec.optimize,
        }
    }

    /// Yaw step for the row whose absolute centre pitch is `row_pitch`.
    pub fn yaw_step_for_row(&self, row_pitch: f64) -> f64 {
        if self.optimize {
            optimized_horizontal_step(
                row_pitch,
                self.hfov,
                self.vfov,
                self.horizontal_overlap_pct,
            )
        } else {
            self.yaw_step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_resolution() {
        assert!((round_to_resolution(12.34) - 12.3).abs() < 1e-9);
        assert!((round_to_resolution(12.36) - 12.4).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_factor_sign() {
        assert!(overlap_factor(25.0) < 1.0);
        assert!(overlap_factor(-25.0) > 1.0);
        assert_eq!(overlap_factor(0.0), 1.0);
    }
}
