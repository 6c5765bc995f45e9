use kz::Tier;
use serde::Deserialize;

use super::JSON;
use crate::config::endpoint;
use crate::http::{self, Expect};
use crate::{json, Client, Error, Result, Upstream};

/// The only part of a Global API map we need.
///
/// The API answers with a literal `null` for unknown maps, which is why this
/// gets decoded as an `Option<GlobalMap>`.
#[derive(Debug, Deserialize)]
struct GlobalMap
{
	difficulty: Tier,
}

/// Fetches the tier of the map called `name`.
#[tracing::instrument(level = "debug", skip(client), err(Debug, level = "debug"))]
pub(super) async fn fetch_tier(client: &Client, name: &str) -> Result<Tier>
{
	let url = endpoint(&client.upstreams().global_api_url, &format!("maps/name/{name}"))
		.map_err(|source| Error::Endpoint { upstream: Upstream::GlobalApi, source })?;

	let body = http::get(client.http_client(), Upstream::GlobalApi, url, Expect::ContentType(JSON))
		.await?;

	let Some(map) = decode(&body)? else {
		tracing::debug!("map does not exist");
		return Err(Error::MapNotFound { name: name.to_owned() });
	};

	Ok(map.difficulty)
}

fn decode(body: &[u8]) -> Result<Option<GlobalMap>>
{
	serde_json::from_slice::<serde_json::Value>(body)
		.and_then(|value| match value {
			serde_json::Value::Null => Ok(None),
			value => json::from_object(value).map(Some),
		})
		.map_err(|error| {
			tracing::error!(%error, "malformed Global API map response");
			Error::malformed(Upstream::GlobalApi, error.to_string())
		})
}
