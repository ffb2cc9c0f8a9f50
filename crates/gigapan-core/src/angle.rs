use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN, PITCH_LIMIT, YAW_LIMIT};
use crate::error::{GigapanError, Result};

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wrap a yaw angle into [-180, 180].
///
/// Values already inside the interval are returned unchanged, so 180 stays
/// 180. Anything else is shifted by whole turns and lands in [-180, 180).
pub fn wrap_yaw(yaw: f64) -> f64 {
    if (-YAW_LIMIT..=YAW_LIMIT).contains(&yaw) {
        yaw
    } else {
        (yaw + YAW_LIMIT).rem_euclid(FULL_TURN) - YAW_LIMIT
    }
}

/// A (yaw, pitch) pair in degrees.
///
/// Used both for absolute rig orientations and for displacements from a
/// start orientation.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AngularPoint {
    pub yaw: f64,
    pub pitch: f64,
}

impl AngularPoint {
    pub const ORIGIN: AngularPoint = AngularPoint {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Component-wise sum, not normalized.
    pub fn displaced_by(&self, shift: &AngularPoint) -> AngularPoint {
        AngularPoint {
            yaw: self.yaw + shift.yaw,
            pitch: self.pitch + shift.pitch,
        }
    }

    /// Wrap yaw into [-180, 180] and check pitch against [-90, 90].
    ///
    /// Pitch is never wrapped: a point past a pole would need the yaw
    /// flipped to the other hemisphere, and no valid scan produces one.
    pub fn normalized(&self) -> Result<AngularPoint> {
        if !self.yaw.is_finite() {
            return Err(GigapanError::OutOfRange {
                name: "yaw",
                value: self.yaw,
                min: -YAW_LIMIT,
                max: YAW_LIMIT,
            });
        }
        if !(-PITCH_LIMIT..=PITCH_LIMIT).contains(&self.pitch) {
            return Err(GigapanError::OutOfRange {
                name: "pitch",
                value: self.pitch,
                min: -PITCH_LIMIT,
                max: PITCH_LIMIT,
            });
        }
        Ok(AngularPoint {
            yaw: wrap_yaw(self.yaw),
            pitch: self.pitch,
        })
    }
}

impl fmt::Display for AngularPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\t{:.1}", self.yaw, self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_yaw_keeps_seam_values() {
        assert_eq!(wrap_yaw(180.0), 180.0);
        assert_eq!(wrap_yaw(-180.0), -180.0);
    }

    #[test]
    fn test_wrap_yaw_multiple_turns() {
        assert!((wrap_yaw(190.0) - -170.0).abs() < 1e-9);
        assert!((wrap_yaw(-190.0) - 170.0).abs() < 1e-9);
        assert!((wrap_yaw(725.0) - 5.0).abs() < 1e-9);
        assert!((wrap_yaw(-540.0) - -180.0).abs() < 1e-9);
    }
}
