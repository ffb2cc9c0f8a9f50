#![allow(dead_code)]

use gigapan_core::angle::AngularPoint;
use gigapan_core::error::Result;
use gigapan_core::scan::PanScanner;
use gigapan_core::spec::PanSpec;

/// Full-frame 50 mm camera at the origin with no overlap and the given
/// displacement limits.
pub fn window_spec(right: f64, left: f64, up: f64, down: f64) -> PanSpec {
    PanSpec {
        focal_length: 50.0,
        sensor_width: 36.0,
        sensor_height: 24.0,
        start: AngularPoint::ORIGIN,
        right_limit: right,
        left_limit: left,
        up_limit: up,
        down_limit: down,
        horizontal_overlap_pct: 0.0,
        vertical_overlap_pct: 0.0,
        optimize: false,
    }
}

/// Run a scan to completion and collect every point.
pub fn collect(spec: &PanSpec) -> Vec<AngularPoint> {
    PanScanner::new(spec)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

/// Split a scan into runs of consecutive points sharing one pitch.
pub fn rows(points: &[AngularPoint]) -> Vec<Vec<AngularPoint>> {
    let mut out: Vec<Vec<AngularPoint>> = Vec::new();
    for &p in points {
        match out.last_mut() {
            Some(row) if row[0].pitch == p.pitch => row.push(p),
            _ => out.push(vec![p]),
        }
    }
    out
}

/// Leading rows whose pitch keeps climbing.
pub fn top_half(rows: &[Vec<AngularPoint>]) -> Vec<Vec<AngularPoint>> {
    let mut out: Vec<Vec<AngularPoint>> = Vec::new();
    for row in rows {
        if let Some(prev) = out.last() {
            if row[0].pitch <= prev[0].pitch {
                break;
            }
        }
        out.push(row.clone());
    }
    out
}

/// Sign of the yaw travel from the first to the last point of a row.
pub fn direction(row: &[AngularPoint]) -> f64 {
    (row[row.len() - 1].yaw - row[0].yaw).signum()
}
