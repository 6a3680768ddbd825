use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations the engine can see from its arguments alone.
///
/// A key that is simply absent is not an error; searches report that as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
}

impl Error {
  pub(crate) fn invalid(reason: impl Into<String>) -> Self {
    let reason = reason.into();
    tracing::debug!(%reason, "rejecting search arguments");
    Error::InvalidArgument(reason)
  }

  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}
