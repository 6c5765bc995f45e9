//! The entry point for all resolvers.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use kz::{Mode, SteamID};
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::Dispatch;

use crate::config::UpstreamsConfig;
use crate::maps::Map;
use crate::records::PersonalBest;
use crate::{maps, records, steam, Config, Result};

/// A handle for resolving players, maps, and personal bests.
///
/// Cloning a [`Client`] is cheap; clones share the underlying HTTP client.
/// Calls on a [`Client`] don't share any mutable state, so any number of them
/// can run concurrently.
#[derive(Clone)]
pub struct Client
{
	http_client: reqwest::Client,
	upstreams: Arc<UpstreamsConfig>,
	diagnostics: Dispatch,
}

impl fmt::Debug for Client
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Client")
			.field("upstreams", &self.upstreams)
			.finish_non_exhaustive()
	}
}

impl Client
{
	/// Creates a new [`Client`] that reports diagnostics to whatever
	/// subscriber is the default at the time of the call.
	pub fn new(config: &Config) -> reqwest::Result<Self>
	{
		Self::with_diagnostics(config, tracing::dispatcher::get_default(Dispatch::clone))
	}

	/// Creates a new [`Client`] that reports all spans and events to
	/// `diagnostics`.
	pub fn with_diagnostics(config: &Config, diagnostics: Dispatch) -> reqwest::Result<Self>
	{
		let http_client = reqwest::Client::builder()
			.timeout(config.http.timeout)
			.user_agent(config.http.user_agent.as_str())
			.build()?;

		Ok(Self { http_client, upstreams: Arc::new(config.upstreams.clone()), diagnostics })
	}

	/// Resolves a Steam community profile URL into the account's SteamID.
	///
	/// The URL must point at `steamcommunity.com`, e.g.
	/// `https://steamcommunity.com/id/alphakeks/` or
	/// `https://steamcommunity.com/profiles/76561198282622073`.
	pub async fn resolve_identity(&self, profile_url: &str) -> Result<SteamID>
	{
		self.observe(steam::resolve_identity(self, profile_url))
			.await
	}

	/// Downloads the full-size avatar of the given account.
	pub async fn fetch_avatar(&self, steam_id: SteamID) -> Result<Bytes>
	{
		self.observe(steam::fetch_avatar(self, steam_id)).await
	}

	/// Resolves a map by name.
	///
	/// Only the map's tier is guaranteed to be present; the Vanilla tiers and
	/// the thumbnail are left empty if they could not be fetched.
	pub async fn resolve_map(&self, name: &str, mode: Mode) -> Result<Map>
	{
		self.observe(maps::resolve(self, name, mode)).await
	}

	/// Fetches a player's personal bests on a map, in leaderboard order.
	pub async fn resolve_personal_bests(
		&self,
		steam_id: SteamID,
		map_name: &str,
		mode: Mode,
	) -> Result<Vec<PersonalBest>>
	{
		self.observe(records::resolve(self, steam_id, map_name, mode))
			.await
	}

	pub(crate) const fn http_client(&self) -> &reqwest::Client
	{
		&self.http_client
	}

	pub(crate) fn upstreams(&self) -> &UpstreamsConfig
	{
		&self.upstreams
	}

	/// Runs `future` with our diagnostics collaborator as the default
	/// dispatcher.
	fn observe<F>(&self, future: F) -> WithDispatch<F>
	where
		F: Future,
	{
		future.with_subscriber(self.diagnostics.clone())
	}
}
