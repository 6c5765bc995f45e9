//! Runtime configuration.
//!
//! Everything has a sensible default, so an empty TOML file (or none at all)
//! yields a working [`Config`] that talks to the real upstreams.

use serde::Deserialize;

mod http;
pub use http::HttpConfig;

mod upstreams;
pub use upstreams::UpstreamsConfig;
pub(crate) use upstreams::endpoint;

pub mod tracing;
pub use tracing::TracingConfig;

/// The resolver configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	/// Configuration for the HTTP client.
	pub http: HttpConfig,

	/// Where to find each upstream.
	pub upstreams: UpstreamsConfig,

	/// Configuration for [`tracing-subscriber`].
	///
	/// [`tracing-subscriber`]: tracing_subscriber
	pub tracing: TracingConfig,
}
