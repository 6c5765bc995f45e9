//! Degrading optional enrichments.
//!
//! Some data is nice to have but not worth failing a whole call over. Every
//! such lookup goes through [`optional()`], so the policy is the same
//! everywhere: log the failure, carry on without the value.

use crate::Result;

/// Converts the outcome of an optional lookup into an [`Option`].
///
/// `what` describes the value for the log message.
pub(crate) fn optional<T>(what: &'static str, result: Result<T>) -> Option<T>
{
	result
		.inspect_err(|error| {
			tracing::warn!(
				kind = %error.kind(),
				upstream = error.upstream().map(tracing::field::display),
				%error,
				"failed to fetch {what}; continuing without it",
			);
		})
		.ok()
}

#[cfg(test)]
mod tests
{
	use tracing::Level;

	use super::optional;
	use crate::logging::Capture;
	use crate::{Error, Upstream};

	#[test]
	fn keeps_successes()
	{
		assert_eq!(optional("thumbnail", Ok(3)), Some(3));
	}

	#[test]
	fn logs_and_drops_failures()
	{
		let capture = Capture::new();
		let result = tracing::dispatcher::with_default(&capture.dispatch(), || {
			optional::<u8>("vnl.kz tiers", Err(Error::malformed(Upstream::VnlKz, "not an object")))
		});

		assert_eq!(result, None);

		let [warning] = capture.events_at(Level::WARN).try_into().unwrap();

		assert_eq!(
			warning.message.as_deref(),
			Some("failed to fetch vnl.kz tiers; continuing without it"),
		);
		assert_eq!(warning.field("kind"), Some("malformed upstream response"));
		assert_eq!(warning.field("upstream"), Some("vnl.kz"));
	}
}
