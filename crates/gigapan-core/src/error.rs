use thiserror::Error;

#[derive(Error, Debug)]
pub enum GigapanError {
    #[error("Invalid geometry: {name} must be a positive finite length (got {value})")]
    InvalidGeometry { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Degenerate {axis} step of {step:.3} degrees; lower the {axis} overlap")]
    DegenerateStep { axis: &'static str, step: f64 },

    #[error("Failed to write coordinate: {0}")]
    SinkWrite(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GigapanError>;
