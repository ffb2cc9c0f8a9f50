use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::angle::AngularPoint;
use crate::error::{GigapanError, Result};
use crate::scan::PanScanner;
use crate::spec::PanSpec;
use crate::step::StepPlan;

/// Ordered, append-only consumer of scan coordinates.
pub trait CoordinateSink {
    /// Accept the next coordinate. An error aborts the scan.
    fn accept(&mut self, point: AngularPoint) -> Result<()>;
}

impl CoordinateSink for Vec<AngularPoint> {
    fn accept(&mut self, point: AngularPoint) -> Result<()> {
        self.push(point);
        Ok(())
    }
}

impl<S: CoordinateSink + ?Sized> CoordinateSink for &mut S {
    fn accept(&mut self, point: AngularPoint) -> Result<()> {
        (**self).accept(point)
    }
}

/// Writes one `yaw<TAB>pitch` line per coordinate, one decimal each.
pub struct CoordinateWriter<W: Write> {
    writer: BufWriter<W>,
    points_written: usize,
}

impl CoordinateWriter<File> {
    /// Create (or truncate) the output file. Failing to open it is a
    /// [`GigapanError::Io`], not a write failure.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CoordinateWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            points_written: 0,
        }
    }

    pub fn points_written(&self) -> usize {
        self.points_written
    }

    /// Flush buffered lines and hand back the underlying writer.
    pub fn finalize(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| GigapanError::SinkWrite(e.into_error()))
    }
}

impl<W: Write> CoordinateSink for CoordinateWriter<W> {
    fn accept(&mut self, point: AngularPoint) -> Result<()> {
        writeln!(self.writer, "{point}").map_err(GigapanError::SinkWrite)?;
        self.points_written += 1;
        Ok(())
    }
}

/// Outcome of a completed scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanReport {
    pub shots: usize,
    pub plan: StepPlan,
}

/// Run a full scan of `spec` into `sink`.
///
/// Stops at the first error, whether from the spec, normalization or the
/// sink. Points already delivered stay delivered.
pub fn run_scan(spec: &PanSpec, sink: impl CoordinateSink) -> Result<ScanReport> {
    run_scan_reported(spec, sink, |_| {})
}

/// Like [`run_scan`], calling `progress` with the running shot count after
/// each delivered point.
pub fn run_scan_reported(
    spec: &PanSpec,
    mut sink: impl CoordinateSink,
    mut progress: impl FnMut(usize),
) -> Result<ScanReport> {
    let scanner = PanScanner::new(spec)?;
    let plan = *scanner.plan();
    info!(
        start = ?spec.start,
        optimize = spec.optimize,
        "Starting gigapan scan"
    );

    let mut shots = 0;
    for point in scanner {
        sink.accept(point?)?;
        shots += 1;
        progress(shots);
    }

    info!(shots, "Gigapan scan complete");
    Ok(ScanReport { shots, plan })
}
