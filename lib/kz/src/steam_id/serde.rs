//! Trait implementations for the [`serde`] crate.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::SteamID;

impl Serialize for SteamID
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamID
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		#[allow(clippy::missing_docs_in_private_items)]
		enum Helper
		{
			U64(u64),
			Str(String),
		}

		match Helper::deserialize(deserializer)? {
			Helper::U64(int) => Self::try_from(int).map_err(de::Error::custom),
			Helper::Str(str) => str.parse().map_err(de::Error::custom),
		}
	}
}
