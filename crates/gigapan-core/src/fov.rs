use crate::angle::rad_to_deg;

/// Angular field of view, in degrees, along one sensor axis.
///
/// `FOV = 2 * atan(d / 2f)`. The sensor dimension and focal length may use
/// any length unit as long as both use the same one. Callers validate that
/// `focal_length > 0`.
pub fn fov(sensor_dimension: f64, focal_length: f64) -> f64 {
    2.0 * rad_to_deg((sensor_dimension / (2.0 * focal_length)).atan())
}
