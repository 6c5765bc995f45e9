//! Transport failures.

use reqwest::StatusCode;
use thiserror::Error;

/// The ways a single GET request can fail.
///
/// Callers treat all of these the same way; the distinction only exists for
/// logs and error messages.
#[derive(Debug, Error)]
pub enum Error
{
	/// The request could not be sent, or the body could not be read.
	#[error(transparent)]
	Request(#[from] reqwest::Error),

	/// The upstream responded with something other than `200 OK`.
	#[error("unexpected http status {0}")]
	Status(StatusCode),

	/// The upstream responded with the wrong content type.
	#[error("expected content type `{expected}` but got {}", match .actual {
		Some(actual) => format!("`{actual}`"),
		None => String::from("none"),
	})]
	ContentType
	{
		/// The MIME type we wanted.
		expected: &'static str,

		/// The raw `Content-Type` header value, if there was one.
		actual: Option<String>,
	},
}

impl Error
{
	/// The HTTP status code of the response, if we got one.
	pub fn status(&self) -> Option<StatusCode>
	{
		match self {
			Self::Request(error) => error.status(),
			Self::Status(status) => Some(*status),
			Self::ContentType { .. } => Some(StatusCode::OK),
		}
	}
}
