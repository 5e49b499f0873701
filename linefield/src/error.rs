//! Error types

/// Enum to hold various error types
#[derive(Debug)]
pub enum LinefieldError {
    /// Input ended with no terminating key.
    Aborted,
    ReadError(embedded_io::ErrorKind),
    WriteError(embedded_io::ErrorKind),
}

impl embedded_io::Error for LinefieldError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match *self {
            LinefieldError::Aborted => embedded_io::ErrorKind::Interrupted,
            LinefieldError::ReadError(e) => e.kind(),
            LinefieldError::WriteError(e) => e.kind(),
        }
    }
}
