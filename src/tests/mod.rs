//! Resolver tests against a local mock server.
//!
//! Every upstream is served by the same [`MockServer`], under its own path
//! prefix, and every [`Client`] reports its diagnostics into a [`Capture`].

use tracing::Level;
use url::Url;
use wiremock::{MockServer, Request};

use crate::logging::{Capture, CapturedEvent};
use crate::{Client, Config};

mod maps;

struct Context
{
	server: MockServer,
	client: Client,
	capture: Capture,
}

impl Context
{
	async fn new() -> Self
	{
		let server = MockServer::start().await;
		let base = Url::parse(&server.uri()).expect("mock server should have a valid uri");
		let mut config = Config::default();

		config.upstreams.steam_community_url = base.join("steam/").expect("valid url");
		config.upstreams.global_api_url = base.join("global/").expect("valid url");
		config.upstreams.vnl_api_url = base.join("vnl/").expect("valid url");
		config.upstreams.thumbnails_url = base.join("thumbnails/").expect("valid url");

		let capture = Capture::new();
		let client =
			Client::with_diagnostics(&config, capture.dispatch()).expect("client should build");

		Self { server, client, capture }
	}

	/// An absolute URL on the mock server.
	fn url(&self, path: &str) -> String
	{
		format!("{}{path}", self.server.uri())
	}

	/// All requests the mock server has seen so far.
	async fn requests(&self) -> Vec<Request>
	{
		self.server
			.received_requests()
			.await
			.expect("request recording should be enabled")
	}

	/// All requests whose path starts with `prefix`.
	async fn requests_to(&self, prefix: &str) -> Vec<Request>
	{
		self.requests()
			.await
			.into_iter()
			.filter(|request| request.url.path().starts_with(prefix))
			.collect()
	}

	fn errors(&self) -> Vec<CapturedEvent>
	{
		self.capture.events_at(Level::ERROR)
	}

	fn warnings(&self) -> Vec<CapturedEvent>
	{
		self.capture.events_at(Level::WARN)
	}
}
