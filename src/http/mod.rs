//! The single-shot HTTP GET every resolver is built on.
//!
//! [`get()`] performs exactly one request. A response only counts as a
//! success if it has status `200 OK` and, when one is requested, the expected
//! content type. Everything else is turned into an [`Error::Unavailable`],
//! after logging the reason.
//!
//! [`Error::Unavailable`]: crate::Error::Unavailable

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::{Result, Upstream};

mod error;
pub use error::Error;

/// What kind of body we expect an upstream to send us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect
{
	/// Any body is fine.
	Anything,

	/// The `Content-Type` header's MIME essence must be exactly this.
	ContentType(&'static str),
}

/// Makes a GET request to `url` and returns the response body.
#[tracing::instrument(level = "debug", skip(http_client), fields(%url), err(Debug, level = "debug"))]
pub(crate) async fn get(
	http_client: &reqwest::Client,
	upstream: Upstream,
	url: Url,
	expect: Expect,
) -> Result<Bytes>
{
	tracing::debug!("making http request to {upstream}");

	fetch(http_client, url, expect).await.map_err(|source| {
		match source {
			Error::Status(status) => {
				tracing::error!(%upstream, status = status.as_u16(), "unexpected http status");
			}
			Error::ContentType { expected, ref actual } => {
				tracing::error!(
					%upstream,
					status = StatusCode::OK.as_u16(),
					expected,
					?actual,
					"unexpected content type",
				);
			}
			Error::Request(ref error) => {
				tracing::error!(
					%upstream,
					status = error.status().map(|status| status.as_u16()),
					%error,
					"http request failed",
				);
			}
		}

		crate::Error::Unavailable { upstream, source }
	})
}

/// Performs the actual request, without any logging.
async fn fetch(
	http_client: &reqwest::Client,
	url: Url,
	expect: Expect,
) -> std::result::Result<Bytes, Error>
{
	let response = http_client.get(url).send().await?;
	let status = response.status();

	if status != StatusCode::OK {
		return Err(Error::Status(status));
	}

	if let Expect::ContentType(expected) = expect {
		let actual = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok());

		let matches = actual
			.and_then(|value| value.parse::<mime::Mime>().ok())
			.is_some_and(|mime| mime.essence_str() == expected);

		if !matches {
			return Err(Error::ContentType { expected, actual: actual.map(ToOwned::to_owned) });
		}
	}

	Ok(response.bytes().await?)
}
