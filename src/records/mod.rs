//! Personal bests from the Global API leaderboards.
//!
//! Leaderboard entries are all-or-nothing: if any entry in a response is
//! malformed, the whole response is rejected.

use std::time::Duration;

use chrono::{DateTime, Utc};
use kz::{Mode, SteamID};
use serde::{Serialize, Serializer};

use crate::config::endpoint;
use crate::http::{self, Expect};
use crate::{Client, Error, Result, Upstream};

mod entry;
use entry::Entry;

mod timestamp;

/// Content type of Global API responses.
const JSON: &str = "application/json";

/// A player's best run on a map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalBest
{
	/// The player's name at the time of the run, if the API knows it.
	pub player_name: Option<String>,

	/// The map the run was on.
	pub map_name: String,

	/// The mode the run was in.
	pub mode: Mode,

	/// How long the run took.
	#[serde(serialize_with = "serialize_seconds")]
	pub time: Duration,

	/// How many teleports were used. `0` means a PRO run.
	pub teleports: u32,

	/// Points awarded for the run.
	pub points: u32,

	/// When the run was submitted.
	pub date: DateTime<Utc>,
}

impl PersonalBest
{
	/// Whether this run was completed without teleports.
	pub const fn is_pro(&self) -> bool
	{
		self.teleports == 0
	}
}

fn serialize_seconds<S>(time: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	time.as_secs_f64().serialize(serializer)
}

/// Fetches `steam_id`'s personal bests on `map_name`.
#[tracing::instrument(level = "debug", skip(client), fields(%steam_id), err(Debug, level = "debug"))]
pub(crate) async fn resolve(
	client: &Client,
	steam_id: SteamID,
	map_name: &str,
	mode: Mode,
) -> Result<Vec<PersonalBest>>
{
	let mut url = endpoint(&client.upstreams().global_api_url, "records/top")
		.map_err(|source| Error::Endpoint { upstream: Upstream::GlobalApi, source })?;

	url.query_pairs_mut()
		.append_pair("steamid64", &steam_id.to_string())
		.append_pair("map_name", map_name)
		.append_pair("stage", "0")
		.append_pair("modes_list_string", mode.api_alias());

	let body = http::get(client.http_client(), Upstream::GlobalApi, url, Expect::ContentType(JSON))
		.await?;

	let personal_bests = decode(&body, map_name, mode)?;

	tracing::debug!(count = personal_bests.len(), "resolved personal bests");

	Ok(personal_bests)
}

/// Decodes a leaderboard response.
///
/// Returns either every entry, in the order the API sent them, or an error.
fn decode(body: &[u8], map_name: &str, mode: Mode) -> Result<Vec<PersonalBest>>
{
	let entries = serde_json::from_slice::<Vec<serde_json::Value>>(body).map_err(|error| {
		tracing::error!(%error, "malformed Global API records (not a list)");
		Error::malformed(Upstream::GlobalApi, format!("expected a list of records: {error}"))
	})?;

	entries
		.into_iter()
		.enumerate()
		.map(|(idx, entry)| {
			Entry::decode(entry)
				.and_then(|entry| entry.into_personal_best(map_name, mode))
				.map_err(|reason| {
					tracing::error!(idx, %reason, "malformed Global API record");
					Error::malformed(Upstream::GlobalApi, format!("record #{idx}: {reason}"))
				})
		})
		.collect()
}
