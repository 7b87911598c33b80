use thiserror::Error;

/// Contract violations raised by [`crate::Month`] constructors and arithmetic.
///
/// Comparing a `Month` against some other type is a compile error, so there is
/// no runtime "type mismatch" case here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MonthError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MonthError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MonthError::InvalidArgument(msg.into())
    }
}
