use displaydoc::Display;

/// Failures of the matrix routines.
///
/// `Singular` is an ordinary outcome of inversion and system solving, not a bug: callers are
/// expected to branch on it.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum LinalgError {
    /// invalid argument `{name}`: {reason}
    InvalidArgument { name: &'static str, reason: String },
    /// matrix is singular, pivot magnitude {magnitude} is below the tolerance
    Singular { magnitude: f64 },
    /// dimension mismatch: expected {expected}, got {actual}
    DimensionMismatch { expected: usize, actual: usize },
    /// malformed input: {0}
    MalformedInput(String),
}

impl std::error::Error for LinalgError {}

impl LinalgError {
    pub fn is_singular(&self) -> bool {
        matches!(self, LinalgError::Singular { .. })
    }
}

impl From<(&'static str, &str)> for LinalgError {
    fn from((name, reason): (&'static str, &str)) -> Self {
        LinalgError::InvalidArgument {
            name,
            reason: reason.to_string(),
        }
    }
}

impl From<&str> for LinalgError {
    fn from(message: &str) -> Self {
        LinalgError::MalformedInput(message.to_string())
    }
}
