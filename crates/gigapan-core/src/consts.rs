/// Largest absolute yaw, in degrees.
pub const YAW_LIMIT: f64 = 180.0;

/// Largest absolute pitch, in degrees.
pub const PITCH_LIMIT: f64 = 90.0;

/// One full turn, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Output resolution of a coordinate, in degrees. Steps below this are
/// rejected because they round to zero.
pub const ANGLE_RESOLUTION: f64 = 0.1;

/// Distance from a limit, in degrees, at which the cursor counts as having
/// reached it.
pub const LIMIT_TOLERANCE: f64 = 0.1;

/// Overlap percentages are accepted down to this value on both axes.
pub const MIN_OVERLAP_PCT: f64 = -100.0;

/// Upper bound for horizontal overlap, in percent. Reaching it is a
/// degenerate step.
pub const MAX_HORIZONTAL_OVERLAP_PCT: f64 = 100.0;

/// Upper bound for vertical overlap, in percent.
pub const MAX_VERTICAL_OVERLAP_PCT: f64 = 50.0;

/// File the CLI writes coordinates to when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "coords.txt";
