//! Map lookups.
//!
//! A [`Map`] is assembled from up to three sources:
//!
//! 1. The Global API, which provides the map's tier. Without it there is no
//!    map, so any failure here fails the whole lookup.
//! 2. vnl.kz, which rates maps separately for TP and PRO runs in the Vanilla
//!    mode. Only asked when resolving for [`Mode::Vanilla`].
//! 3. The thumbnail repository.
//!
//! Failures in 2. and 3. are logged and leave the corresponding fields empty.

use bytes::Bytes;
use kz::{Mode, Tier};
use serde::Serialize;

use crate::config::endpoint;
use crate::http::{self, Expect};
use crate::{fallback, Client, Error, Result, Upstream};

mod global_api;
mod vnl;

use vnl::VnlTiers;

/// Content type of Global API and vnl.kz responses.
const JSON: &str = "application/json";

/// A resolved map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Map
{
	/// The map's name, e.g. `kz_beginnerblock_go`.
	pub name: String,

	/// The map's tier according to the Global API.
	pub tier: Tier,

	/// The map's TP tier according to vnl.kz.
	pub vnl_tier: Option<Tier>,

	/// The map's PRO tier according to vnl.kz.
	pub vnl_pro_tier: Option<Tier>,

	/// A WebP thumbnail of the map.
	#[serde(skip)]
	pub thumbnail: Option<Bytes>,
}

/// Checks whether `name` only consists of `[A-Za-z0-9_]`.
///
/// Names are embedded into request paths as-is, so this is also what keeps
/// them from escaping their path segment.
pub fn is_valid_name(name: &str) -> bool
{
	!name.is_empty()
		&& name
			.chars()
			.all(|char| char.is_ascii_alphanumeric() || char == '_')
}

/// Resolves the map called `name`.
#[tracing::instrument(level = "debug", skip(client), err(Debug, level = "debug"))]
pub(crate) async fn resolve(client: &Client, name: &str, mode: Mode) -> Result<Map>
{
	if !is_valid_name(name) {
		return Err(Error::InvalidMapName { name: name.to_owned() });
	}

	let tier = global_api::fetch_tier(client, name).await?;

	let VnlTiers { tp: vnl_tier, pro: vnl_pro_tier } = if mode.is_vanilla() {
		fallback::optional("vnl.kz tiers", vnl::fetch_tiers(client, name).await).unwrap_or_default()
	} else {
		VnlTiers::default()
	};

	let thumbnail = fallback::optional("map thumbnail", fetch_thumbnail(client, name).await);

	tracing::debug!(%tier, ?vnl_tier, ?vnl_pro_tier, has_thumbnail = thumbnail.is_some(), "resolved map");

	Ok(Map { name: name.to_owned(), tier, vnl_tier, vnl_pro_tier, thumbnail })
}

/// Downloads the map's thumbnail.
async fn fetch_thumbnail(client: &Client, name: &str) -> Result<Bytes>
{
	let url = endpoint(&client.upstreams().thumbnails_url, &format!("{name}.webp"))
		.map_err(|source| Error::Endpoint { upstream: Upstream::Thumbnails, source })?;

	http::get(client.http_client(), Upstream::Thumbnails, url, Expect::Anything).await
}

#[cfg(test)]
mod tests
{
	use super::is_valid_name;

	#[test]
	fn valid_names()
	{
		for name in ["kz_beginnerblock_go", "bkz_apricity_v3", "KZ_Olympus", "xc_powerblock_rc1", "_"] {
			assert!(is_valid_name(name), "{name}");
		}
	}

	#[test]
	fn invalid_names()
	{
		for name in ["", "kz_../admin", "kz map", "kz-map", "kz_[brackets]", "kz_^caret", "kz_`tick`", "kz_é", "a/b", "kz?x=1"] {
			assert!(!is_valid_name(name), "{name}");
		}
	}
}
