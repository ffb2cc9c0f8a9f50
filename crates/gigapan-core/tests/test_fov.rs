use approx::assert_abs_diff_eq;

use gigapan_core::fov::fov;

#[test]
fn test_full_frame_50mm() {
    assert_abs_diff_eq!(fov(36.0, 50.0), 39.6, epsilon = 0.1);
    assert_abs_diff_eq!(fov(24.0, 50.0), 27.0, epsilon = 0.1);
}

#[test]
fn test_zero_sensor_dimension() {
    assert_eq!(fov(0.0, 50.0), 0.0);
    assert_eq!(fov(0.0, 0.5), 0.0);
}

#[test]
fn test_sensor_equal_to_twice_focal_length_is_right_angle() {
    assert_abs_diff_eq!(fov(100.0, 50.0), 90.0, epsilon = 1e-9);
}

#[test]
fn test_units_cancel() {
    // 50 mm and 36 mm expressed in metres
    assert_abs_diff_eq!(fov(0.036, 0.050), fov(36.0, 50.0), epsilon = 1e-9);
}

#[test]
fn test_increasing_in_sensor_dimension() {
    let mut prev = fov(0.0, 35.0);
    for i in 1..200 {
        let next = fov(i as f64 * 0.5, 35.0);
        assert!(next > prev, "fov not increasing at d={}", i as f64 * 0.5);
        prev = next;
    }
}

#[test]
fn test_decreasing_in_focal_length() {
    let mut prev = fov(24.0, 1.0);
    for i in 2..400 {
        let next = fov(24.0, i as f64);
        assert!(next < prev, "fov not decreasing at f={i}");
        prev = next;
    }
}

#[test]
fn test_bounded_by_half_turn() {
    assert!(fov(1.0e6, 1.0) < 180.0);
}
