use serde::Deserialize;
use url::Url;

/// Base URLs of the data providers.
///
/// These only decide where requests are sent. Profile URLs given to
/// [`Client::resolve_identity()`] must still point at `steamcommunity.com`.
///
/// [`Client::resolve_identity()`]: crate::Client::resolve_identity
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct UpstreamsConfig
{
	/// Steam community, serving profile XML.
	#[serde(default = "default_steam_community_url")]
	pub steam_community_url: Url,

	/// The KZ Global API.
	#[serde(default = "default_global_api_url")]
	pub global_api_url: Url,

	/// The vnl.kz API.
	#[serde(default = "default_vnl_api_url")]
	pub vnl_api_url: Url,

	/// Directory containing `<map>.webp` thumbnails.
	#[serde(default = "default_thumbnails_url")]
	pub thumbnails_url: Url,
}

impl Default for UpstreamsConfig
{
	fn default() -> Self
	{
		Self {
			steam_community_url: default_steam_community_url(),
			global_api_url: default_global_api_url(),
			vnl_api_url: default_vnl_api_url(),
			thumbnails_url: default_thumbnails_url(),
		}
	}
}

fn default_steam_community_url() -> Url
{
	Url::parse("https://steamcommunity.com").expect("hard-coded URL should be valid")
}

fn default_global_api_url() -> Url
{
	Url::parse("https://kztimerglobal.com/api/v2.0/").expect("hard-coded URL should be valid")
}

fn default_vnl_api_url() -> Url
{
	Url::parse("https://vnl.kz/api/").expect("hard-coded URL should be valid")
}

fn default_thumbnails_url() -> Url
{
	Url::parse("https://raw.githubusercontent.com/KZGlobalTeam/map-images/public/webp/medium/")
		.expect("hard-coded URL should be valid")
}

/// Appends `path` to `base`, keeping any path prefix `base` already has.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError>
{
	let base = base.as_str().trim_end_matches('/');
	let path = path.trim_start_matches('/');

	Url::parse(&format!("{base}/{path}"))
}

#[cfg(test)]
mod tests
{
	use url::Url;

	use super::endpoint;

	#[test]
	fn endpoint_keeps_prefix()
	{
		let base = Url::parse("https://kztimerglobal.com/api/v2.0").unwrap();

		assert_eq!(
			endpoint(&base, "maps/name/kz_beginnerblock_go").unwrap().as_str(),
			"https://kztimerglobal.com/api/v2.0/maps/name/kz_beginnerblock_go",
		);

		let base = Url::parse("https://vnl.kz/api/").unwrap();

		assert_eq!(endpoint(&base, "/maps/kz_olympus").unwrap().as_str(), "https://vnl.kz/api/maps/kz_olympus");
	}

	#[test]
	fn endpoint_keeps_query()
	{
		let base = Url::parse("https://steamcommunity.com").unwrap();

		assert_eq!(
			endpoint(&base, "/id/alphakeks/?xml=1").unwrap().as_str(),
			"https://steamcommunity.com/id/alphakeks/?xml=1",
		);
	}
}
