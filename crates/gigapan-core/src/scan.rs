use tracing::debug;

use crate::angle::AngularPoint;
use crate::consts::LIMIT_TOLERANCE;
use crate::error::Result;
use crate::spec::PanSpec;
use crate::step::StepPlan;

/// Horizontal sweep direction of the current row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Half {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Origin,
    Sweeping,
    Finished,
}

/// Traversal cursor: displacement from the start point plus sweep state.
#[derive(Clone, Debug)]
struct ScanState {
    dy: f64,
    dp: f64,
    direction: Direction,
    yaw_step: f64,
}

/// Lazy boustrophedon scan over the window described by a [`PanSpec`].
///
/// Yields absolute, normalized orientations in capture order. The start
/// point comes first. The top half follows, sweeping the right half of the
/// start row and then climbing row by row. Last comes the bottom half,
/// sweeping the left half of the start row and then descending. Each row
/// runs opposite to the one before it.
///
/// A scanner is finite and deterministic. Build a new one from the same
/// spec to replay the sequence.
#[derive(Clone, Debug)]
pub struct PanScanner {
    spec: PanSpec,
    plan: StepPlan,
    state: ScanState,
    half: Half,
    phase: Phase,
    row: usize,
}

impl PanScanner {
    /// Validate `spec` and position the cursor on the start point.
    pub fn new(spec: &PanSpec) -> Result<Self> {
        spec.validate()?;
        let plan = StepPlan::from_spec(spec);
        let yaw_step = plan.yaw_step_for_row(spec.start.pitch);
        debug!(
            hfov = plan.hfov,
            vfov = plan.vfov,
            yaw_step,
            pitch_step = plan.pitch_step,
            "Step plan ready"
        );
        Ok(Self {
            spec: spec.clone(),
            plan,
            state: ScanState {
                dy: 0.0,
                dp: 0.0,
                direction: Direction::Right,
                yaw_step,
            },
            half: Half::Top,
            phase: Phase::Origin,
            row: 0,
        })
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    /// Current displacement from the start point.
    pub fn displacement(&self) -> AngularPoint {
        AngularPoint::new(self.state.dy, self.state.dp)
    }

    /// Direction the current row sweeps in.
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    fn emit(&mut self) -> Result<AngularPoint> {
        let point = self.spec.start.displaced_by(&self.displacement()).normalized();
        if point.is_err() {
            self.phase = Phase::Finished;
        }
        point
    }

    /// Step along the row unless the cursor already sits on or past the
    /// limit in the direction of travel. The shot that crosses the limit is
    /// taken so the edge of the window is covered.
    fn advance_yaw(&mut self) -> bool {
        let s = &mut self.state;
        let at_edge = match s.direction {
            Direction::Right => s.dy >= self.spec.right_limit - LIMIT_TOLERANCE,
            Direction::Left => s.dy <= self.spec.left_limit + LIMIT_TOLERANCE,
        };
        if at_edge {
            return false;
        }
        s.dy += s.direction.sign() * s.yaw_step;
        true
    }

    /// Move to the next row of the current half. The last row is clamped
    /// onto the limit because pitch cannot wrap past a pole.
    fn advance_pitch(&mut self) -> bool {
        let s = &mut self.state;
        match self.half {
            Half::Top => {
                if s.dp >= self.spec.up_limit - LIMIT_TOLERANCE {
                    return false;
                }
                s.dp = (s.dp + self.plan.pitch_step).min(self.spec.up_limit);
            }
            Half::Bottom => {
                if s.dp <= self.spec.down_limit + LIMIT_TOLERANCE {
                    return false;
                }
                s.dp = (s.dp - self.plan.pitch_step).max(self.spec.down_limit);
            }
        }
        self.begin_row();
        true
    }

    fn begin_row(&mut self) {
        let row_pitch = self.spec.start.pitch + self.state.dp;
        self.state.yaw_step = self.plan.yaw_step_for_row(row_pitch);
        self.row += 1;
        debug!(
            row = self.row,
            pitch = row_pitch,
            yaw_step = self.state.yaw_step,
            direction = ?self.state.direction,
            "Starting row"
        );
    }

    fn begin_bottom_half(&mut self) {
        self.half = Half::Bottom;
        self.state.dy = 0.0;
        self.state.dp = 0.0;
        self.state.direction = Direction::Left;
        self.begin_row();
    }
}

impl Iterator for PanScanner {
    type Item = Result<AngularPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Finished => return None,
                Phase::Origin => {
                    self.phase = Phase::Sweeping;
                    return Some(self.emit());
                }
                Phase::Sweeping => {
                    if self.advance_yaw() {
                        return Some(self.emit());
                    }
                    self.state.direction = self.state.direction.flipped();
                    if self.advance_pitch() {
                        return Some(self.emit());
                    }
                    match self.half {
                        Half::Top => self.begin_bottom_half(),
                        Half::Bottom => self.phase = Phase::Finished,
                    }
                }
            }
        }
    }
}

/// Number of shots a scan of `spec` takes, without emitting them anywhere.
pub fn shot_count(spec: &PanSpec) -> Result<usize> {
    PanScanner::new(spec)?.try_fold(0, |n, point| point.map(|_| n + 1))
}
