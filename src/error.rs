use thiserror::Error;

/// Faults raised while decoding a single telemetry frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Token is not exactly one frame long
    #[error("invalid frame length {0}")]
    InvalidLength(usize),
    /// A numeric field contains something other than decimal digits
    #[error("non-digit byte in numeric field")]
    InvalidDigits,
}

/// Faults raised by the meter byte transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serial port error: {0}")]
    Serial(#[from] tokio_serial::Error),
    #[error("transport closed by peer")]
    Closed,
}
