use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    /// Byte, bit, slice, box or bank access outside its valid range.
    OutOfRange,
    /// A value does not fit the field it is written to (e.g. BCD money above 999999).
    DomainRange,
    /// A checksum range whose end precedes its start.
    MalformedRange,
    /// The buffer is not the fixed 32 KiB save size and the caller asked for strictness.
    UnexpectedSize,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::OutOfRange, message)
    }

    pub fn domain_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::DomainRange, message)
    }

    pub fn malformed_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::MalformedRange, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Io, message)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
