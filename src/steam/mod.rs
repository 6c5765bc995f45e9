//! Steam community profiles.
//!
//! Steam serves a machine-readable variant of every community profile when
//! `?xml=1` is appended to its URL. We use it to turn vanity URLs into
//! SteamIDs and to find avatars.

use bytes::Bytes;
use kz::SteamID;
use url::Url;

use crate::config::endpoint;
use crate::http::{self, Expect};
use crate::{Client, Error, Result, Upstream};

mod profile;
use profile::Profile;

/// The only host we accept profile URLs for.
const COMMUNITY_HOST: &str = "steamcommunity.com";

/// Content type of profile documents.
const XML: &str = "text/xml";

/// Resolves a profile URL into a [`SteamID`].
#[tracing::instrument(level = "debug", skip(client), err(Debug, level = "debug"))]
pub(crate) async fn resolve_identity(client: &Client, profile_url: &str) -> Result<SteamID>
{
	let invalid_url = || Error::InvalidProfileUrl { url: profile_url.to_owned() };
	let parsed = Url::parse(profile_url).map_err(|_| invalid_url())?;

	let is_community_host = parsed.host_str() == Some(COMMUNITY_HOST)
		&& parsed.port().is_none()
		&& parsed.username().is_empty()
		&& parsed.password().is_none();

	if !is_community_host {
		return Err(invalid_url());
	}

	let xml_url = endpoint(
		&client.upstreams().steam_community_url,
		&format!("{}?xml=1", parsed.path()),
	)
	.map_err(|_| invalid_url())?;

	let profile = fetch_profile(client, xml_url).await?;
	let steam_id = profile.steam_id()?;

	tracing::debug!(%steam_id, "resolved profile");

	Ok(steam_id)
}

/// Downloads the full-size avatar of `steam_id`.
#[tracing::instrument(level = "debug", skip(client), err(Debug, level = "debug"))]
pub(crate) async fn fetch_avatar(client: &Client, steam_id: SteamID) -> Result<Bytes>
{
	let xml_url = endpoint(
		&client.upstreams().steam_community_url,
		&format!("profiles/{steam_id}?xml=1"),
	)
	.map_err(|source| Error::Endpoint { upstream: Upstream::SteamCommunity, source })?;

	let profile = fetch_profile(client, xml_url).await?;
	let avatar_url = profile.avatar_url()?;

	http::get(client.http_client(), Upstream::SteamAvatar, avatar_url, Expect::Anything).await
}

/// Fetches and parses a profile document.
async fn fetch_profile(client: &Client, url: Url) -> Result<Profile>
{
	let body = http::get(client.http_client(), Upstream::SteamCommunity, url, Expect::ContentType(XML))
		.await?;

	let text = std::str::from_utf8(&body).map_err(|error| {
		tracing::error!(%error, "profile XML is not valid UTF-8");
		Error::malformed(Upstream::SteamCommunity, "profile is not valid UTF-8")
	})?;

	Profile::parse(text)
}
