//! Parsing of `created_on` timestamps.
//!
//! The Global API sends naive timestamps like `2023-08-14T19:22:31`, which are
//! in UTC. Should one ever carry an offset, its wall-clock time is still
//! taken as UTC, and a warning is logged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Formats accepted for timestamps with an explicit offset.
///
/// `%.f` also matches no fraction; `%z` accepts `+02:00` as well as `+0200`.
const OFFSET_FORMATS: [&str; 5] = [
	"%Y-%m-%dT%H:%M:%S%.f%z",
	"%Y-%m-%d %H:%M:%S%.f%z",
	"%Y-%m-%dT%H:%M%z",
	"%Y-%m-%d %H:%M%z",
	"%Y%m%dT%H%M%S%.f%z",
];

/// Formats accepted for naive timestamps.
const NAIVE_FORMATS: [&str; 6] = [
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M",
	"%Y%m%dT%H%M%S%.f",
	"%Y%m%dT%H%M",
];

/// Formats accepted for plain dates, which are taken as midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parses an ISO 8601 timestamp, interpreting its wall-clock time as UTC.
pub(super) fn parse_as_utc(text: &str) -> Option<DateTime<Utc>>
{
	// `Z` is UTC, so it is the same as no offset at all.
	let naive = text.strip_suffix('Z').unwrap_or(text);

	if let Some(date) = parse_naive(naive) {
		return Some(date.and_utc());
	}

	let date = OFFSET_FORMATS
		.into_iter()
		.find_map(|format| DateTime::parse_from_str(text, format).ok())?;

	if date.offset().local_minus_utc() != 0 {
		tracing::warn!(created_on = text, "timestamp has a non-UTC offset; treating it as UTC");
	}

	Some(date.naive_local().and_utc())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime>
{
	NAIVE_FORMATS
		.into_iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
		.or_else(|| {
			DATE_FORMATS
				.into_iter()
				.find_map(|format| NaiveDate::parse_from_str(text, format).ok())
				.map(|date| date.and_time(NaiveTime::MIN))
		})
}

#[cfg(test)]
mod tests
{
	use chrono::{TimeZone, Timelike, Utc};
	use tracing::Level;

	use super::parse_as_utc;
	use crate::logging::Capture;

	#[test]
	fn naive()
	{
		let expected = Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 31).unwrap();

		assert_eq!(parse_as_utc("2023-08-14T19:22:31"), Some(expected));
		assert_eq!(parse_as_utc("2023-08-14 19:22:31"), Some(expected));
	}

	#[test]
	fn fractional_seconds()
	{
		let date = parse_as_utc("2023-08-14T19:22:31.250").unwrap();

		assert_eq!(date.nanosecond(), 250_000_000);
	}

	#[test]
	fn offsets_keep_wall_clock_time()
	{
		let capture = Capture::new();
		let (utc, shifted) = tracing::dispatcher::with_default(&capture.dispatch(), || {
			(parse_as_utc("2023-08-14T19:22:31Z"), parse_as_utc("2023-08-14T19:22:31+02:00"))
		});

		let expected = Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 31).unwrap();

		assert_eq!(utc, Some(expected));
		assert_eq!(shifted, Some(expected));
		assert_eq!(capture.events_at(Level::WARN).len(), 1);
	}

	#[test]
	fn reduced_precision()
	{
		assert_eq!(parse_as_utc("2023-08-14T19:22"), Some(Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 0).unwrap()));
		assert_eq!(parse_as_utc("2023-08-14"), Some(Utc.with_ymd_and_hms(2023, 8, 14, 0, 0, 0).unwrap()));
		assert_eq!(parse_as_utc("20230814"), Some(Utc.with_ymd_and_hms(2023, 8, 14, 0, 0, 0).unwrap()));
	}

	#[test]
	fn basic_format()
	{
		let expected = Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 31).unwrap();

		assert_eq!(parse_as_utc("20230814T192231"), Some(expected));
		assert_eq!(parse_as_utc("20230814T192231Z"), Some(expected));
	}

	#[test]
	fn offsets_without_colon()
	{
		let capture = Capture::new();
		let (shifted, minutes) = tracing::dispatcher::with_default(&capture.dispatch(), || {
			(parse_as_utc("2023-08-14T19:22:31+0200"), parse_as_utc("2023-08-14T19:22-05:00"))
		});

		assert_eq!(shifted, Some(Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 31).unwrap()));
		assert_eq!(minutes, Some(Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 0).unwrap()));
		assert_eq!(capture.events_at(Level::WARN).len(), 2);
	}

	#[test]
	fn zero_offsets_are_quiet()
	{
		let capture = Capture::new();
		let date = tracing::dispatcher::with_default(&capture.dispatch(), || {
			parse_as_utc("2023-08-14T19:22:31+00:00")
		});

		assert_eq!(date, Some(Utc.with_ymd_and_hms(2023, 8, 14, 19, 22, 31).unwrap()));
		assert!(capture.events().is_empty());
	}

	#[test]
	fn garbage()
	{
		assert_eq!(parse_as_utc(""), None);
		assert_eq!(parse_as_utc("Z"), None);
		assert_eq!(parse_as_utc("yesterday"), None);
		assert_eq!(parse_as_utc("14/08/2023 19:22"), None);
		assert_eq!(parse_as_utc("2023-13-01"), None);
		assert_eq!(parse_as_utc("2023-08-14T19:22:31+25:00"), None);
	}
}
