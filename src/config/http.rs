use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Settings for the HTTP client shared by all resolvers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpConfig
{
	/// Upper bound for a single request, in seconds.
	#[serde(deserialize_with = "deserialize_secs")]
	pub timeout: Duration,

	/// The `User-Agent` header sent with every request.
	pub user_agent: String,
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			timeout: Duration::from_secs(10),
			user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
		}
	}
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	u64::deserialize(deserializer).map(Duration::from_secs)
}
