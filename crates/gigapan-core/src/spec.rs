use serde::{Deserialize, Serialize};

use crate::angle::AngularPoint;
use crate::consts::{
    ANGLE_RESOLUTION, MAX_HORIZONTAL_OVERLAP_PCT, MAX_VERTICAL_OVERLAP_PCT, MIN_OVERLAP_PCT,
    PITCH_LIMIT, YAW_LIMIT,
};
use crate::error::{GigapanError, Result};
use crate::step::StepPlan;

/// One capture job.
///
/// Limits are displacements relative to `start`, in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanSpec {
    pub focal_length: f64,
    pub sensor_width: f64,
    pub sensor_height: f64,
    pub start: AngularPoint,
    pub right_limit: f64,
    pub left_limit: f64,
    pub up_limit: f64,
    pub down_limit: f64,
    pub horizontal_overlap_pct: f64,
    pub vertical_overlap_pct: f64,
    /// Widen the yaw step per row to correct for foreshortening.
    #[serde(default)]
    pub optimize: bool,
}

impl Default for PanSpec {
    fn default() -> Self {
        Self {
            focal_length: 50.0,
            sensor_width: 36.0,
            sensor_height: 24.0,
            start: AngularPoint::ORIGIN,
            right_limit: 30.0,
            left_limit: -30.0,
            up_limit: 20.0,
            down_limit: -20.0,
            horizontal_overlap_pct: 30.0,
            vertical_overlap_pct: 30.0,
            optimize: false,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GigapanError::InvalidGeometry { name, value })
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails the contains check as well.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GigapanError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn check_step(axis: &'static str, step: f64) -> Result<()> {
    if step >= ANGLE_RESOLUTION {
        Ok(())
    } else {
        Err(GigapanError::DegenerateStep { axis, step })
    }
}

impl PanSpec {
    /// Check every parameter against its bounds.
    ///
    /// Geometry is checked first, then ranges, then the derived steps. A
    /// window that would carry the rig past a pole is rejected as out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        check_positive("focal length", self.focal_length)?;
        check_positive("sensor width", self.sensor_width)?;
        check_positive("sensor height", self.sensor_height)?;

        check_range("start yaw", self.start.yaw, -YAW_LIMIT, YAW_LIMIT)?;
        check_range("start pitch", self.start.pitch, -PITCH_LIMIT, PITCH_LIMIT)?;
        check_range("right limit", self.right_limit, 0.0, YAW_LIMIT)?;
        check_range("left limit", self.left_limit, -YAW_LIMIT, 0.0)?;
        check_range("up limit", self.up_limit, 0.0, PITCH_LIMIT)?;
        check_range("down limit", self.down_limit, -PITCH_LIMIT, 0.0)?;
        check_range(
            "horizontal overlap",
            self.horizontal_overlap_pct,
            MIN_OVERLAP_PCT,
            MAX_HORIZONTAL_OVERLAP_PCT,
        )?;
        check_range(
            "vertical overlap",
            self.vertical_overlap_pct,
            MIN_OVERLAP_PCT,
            MAX_VERTICAL_OVERLAP_PCT,
        )?;

        check_range(
            "top of window",
            self.start.pitch + self.up_limit,
            -PITCH_LIMIT,
            PITCH_LIMIT,
        )?;
        check_range(
            "bottom of window",
            self.start.pitch + self.down_limit,
            -PITCH_LIMIT,
            PITCH_LIMIT,
        )?;

        let plan = StepPlan::from_spec(self);
        check_step("horizontal", plan.yaw_step)?;
        check_step("vertical", plan.pitch_step)?;

        Ok(())
    }

    /// Build a spec from the eleven values accepted on the command line, in
    /// order: focal length, sensor width, sensor height, start yaw, start
    /// pitch, right, left, up, down, horizontal overlap, vertical overlap.
    pub fn from_values(values: &[f64; 11], optimize: bool) -> Self {
        Self {
            focal_length: values[0],
            sensor_width: values[1],
            sensor_height: values[2],
            start: AngularPoint::new(values[3], values[4]),
            right_limit: values[5],
            left_limit: values[6],
            up_limit: values[7],
            down_limit: values[8],
            horizontal_overlap_pct: values[9],
            vertical_overlap_pct: values[10],
            optimize,
        }
    }
}
