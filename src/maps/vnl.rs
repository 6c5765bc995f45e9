use kz::Tier;
use serde::Deserialize;

use super::JSON;
use crate::config::endpoint;
use crate::http::{self, Expect};
use crate::{json, Client, Error, Result, Upstream};

/// A map's ratings on vnl.kz.
///
/// Either tier may be missing for maps that were never rated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(super) struct VnlTiers
{
	#[serde(rename = "tpTier", default)]
	pub(super) tp: Option<Tier>,

	#[serde(rename = "proTier", default)]
	pub(super) pro: Option<Tier>,
}

/// Fetches the vnl.kz tiers of the map called `name`.
#[tracing::instrument(level = "debug", skip(client), err(Debug, level = "debug"))]
pub(super) async fn fetch_tiers(client: &Client, name: &str) -> Result<VnlTiers>
{
	let url = endpoint(&client.upstreams().vnl_api_url, &format!("maps/{name}"))
		.map_err(|source| Error::Endpoint { upstream: Upstream::VnlKz, source })?;

	let body =
		http::get(client.http_client(), Upstream::VnlKz, url, Expect::ContentType(JSON)).await?;

	decode(&body)
}

fn decode(body: &[u8]) -> Result<VnlTiers>
{
	serde_json::from_slice(body).and_then(json::from_object).map_err(|error| {
		tracing::error!(%error, "malformed vnl.kz map response");
		Error::malformed(Upstream::VnlKz, error.to_string())
	})
}
