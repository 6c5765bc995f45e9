use std::time::{Duration, TryFromFloatSecsError};

use kz::Mode;
use serde::Deserialize;
use serde_json::Number;
use thiserror::Error;

use super::{timestamp, PersonalBest};
use crate::json;

/// A single leaderboard entry, as sent by the Global API.
///
/// Only the fields we need are listed; everything else is ignored.
#[derive(Debug, Deserialize)]
pub(super) struct Entry
{
	#[serde(default)]
	player_name: Option<String>,
	time: Number,
	teleports: u32,
	points: u32,
	created_on: String,
}

/// Why an [`Entry`] was rejected.
#[derive(Debug, Error)]
pub(super) enum InvalidEntry
{
	#[error(transparent)]
	Shape(#[from] serde_json::Error),

	#[error("time `{0}` is not a floating-point number of seconds")]
	NotSeconds(Number),

	#[error("invalid time: {0}")]
	Time(#[from] TryFromFloatSecsError),

	#[error("`{created_on}` is not an ISO 8601 timestamp")]
	Date { created_on: String },
}

impl Entry
{
	/// Decodes an untyped JSON value into an [`Entry`].
	pub(super) fn decode(value: serde_json::Value) -> Result<Self, InvalidEntry>
	{
		Ok(json::from_object(value)?)
	}

	/// Converts this entry into a [`PersonalBest`].
	pub(super) fn into_personal_best(
		self,
		map_name: &str,
		mode: Mode,
	) -> Result<PersonalBest, InvalidEntry>
	{
		let secs = match self.time.as_f64() {
			Some(secs) if self.time.is_f64() => secs,
			_ => return Err(InvalidEntry::NotSeconds(self.time)),
		};

		let time = Duration::try_from_secs_f64(secs)?;
		let date = timestamp::parse_as_utc(&self.created_on)
			.ok_or(InvalidEntry::Date { created_on: self.created_on })?;

		Ok(PersonalBest {
			player_name: self.player_name,
			map_name: map_name.to_owned(),
			mode,
			time,
			teleports: self.teleports,
			points: self.points,
			date,
		})
	}
}
