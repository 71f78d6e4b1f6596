use thiserror::Error;

/// Errors raised while a substitute answers a call.
///
/// Both kinds point at an incomplete or wrong test setup rather than at a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstituteError {
    #[error("no stub is configured for {function}")]
    StubNotConfigured { function: String },

    #[error("the stub of {function} is a {actual} but {expected} is expected")]
    StubTypeMismatch {
        function: String,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T, E = SubstituteError> = std::result::Result<T, E>;
