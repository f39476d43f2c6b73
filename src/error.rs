use thiserror::Error;

/// A result.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// A required field was absent.
	#[error(r#"The argument "{field}" must not be null."#)]
	InvalidArgument { field: &'static str },
}
