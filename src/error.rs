//! [`Error`] type.

/// An error from the HTTP client.
///
/// The request URL is stripped from the description since it carries the access key.
///
/// Every failure of a request collapses into [`Error::ClientError`]: connection failures, timeouts,
/// non-2xx statuses and undecodable bodies alike. The transport's description is kept as the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The request could not be completed.
	#[error("fixer.io client error: {0}")]
	ClientError(String),
}

impl Error {
	/// The description of the underlying failure.
	pub fn message(&self) -> &str {
		match self {
			Error::ClientError(message) => message,
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(error: reqwest::Error) -> Self { Error::ClientError(error.without_url().to_string()) }
}

/// A [`Result`](std::result::Result) with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
