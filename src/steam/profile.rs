use kz::SteamID;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::DeError;
use serde::Deserialize;
use url::Url;

use crate::{Error, Result, Upstream};

/// The parts of a Steam profile document we care about.
///
/// Both elements are optional at this stage; private or unknown profiles
/// produce a different document altogether, which decodes into a [`Profile`]
/// with nothing set.
#[derive(Debug, Deserialize)]
pub(super) struct Profile
{
	#[serde(rename = "steamID64")]
	steam_id64: Option<String>,

	#[serde(rename = "avatarFull")]
	avatar_full: Option<String>,
}

impl Profile
{
	/// Parses a profile document.
	pub(super) fn parse(xml: &str) -> Result<Self>
	{
		ensure_single_root(xml)
			.and_then(|()| quick_xml::de::from_str(xml))
			.map_err(|source| {
				tracing::error!(error = %source, "failed to parse Steam profile XML");
				Error::MalformedXml { upstream: Upstream::SteamCommunity, source }
			})
	}

	/// Returns the validated `steamID64` element.
	pub(super) fn steam_id(&self) -> Result<SteamID>
	{
		let value = element("steamID64", self.steam_id64.as_deref())?;

		value.parse::<SteamID>().map_err(|source| {
			tracing::error!(value, error = %source, "malformed Steam profile XML (bad steamID64)");
			Error::InvalidSteamID { value: value.to_owned(), source }
		})
	}

	/// Returns the `avatarFull` element as a URL.
	pub(super) fn avatar_url(&self) -> Result<Url>
	{
		let value = element("avatarFull", self.avatar_full.as_deref())?;

		Url::parse(value).map_err(|error| {
			tracing::error!(value, %error, "malformed Steam profile XML (bad avatarFull)");
			Error::malformed(Upstream::SteamCommunity, format!("`{value}` is not a valid avatar URL"))
		})
	}
}

/// Checks that `xml` is a single element, optionally surrounded by
/// whitespace, comments, and processing instructions.
///
/// The deserializer stops reading after the first element and never sees
/// anything that follows it.
fn ensure_single_root(xml: &str) -> Result<(), DeError>
{
	let mut reader = Reader::from_str(xml);
	let mut depth = 0_usize;
	let mut closed = false;

	loop {
		match reader.read_event()? {
			Event::Start(_) | Event::Empty(_) | Event::CData(_) if closed => {
				return Err(DeError::Custom(String::from("content after the root element")));
			}
			Event::Text(text) if closed && !text.iter().all(u8::is_ascii_whitespace) => {
				return Err(DeError::Custom(String::from("content after the root element")));
			}
			Event::Start(_) => depth += 1,
			Event::Empty(_) if depth == 0 => closed = true,
			Event::End(_) => {
				depth = depth.saturating_sub(1);
				closed = depth == 0;
			}
			Event::Eof => return Ok(()),
			_ => {}
		}
	}
}

/// Returns the trimmed text of an element, or an error if it is absent or
/// empty.
fn element<'a>(name: &'static str, text: Option<&'a str>) -> Result<&'a str>
{
	match text.map(str::trim) {
		Some(text) if !text.is_empty() => Ok(text),
		_ => {
			tracing::error!(element = name, "malformed Steam profile XML (missing element)");
			Err(Error::MissingProfileField { element: name })
		}
	}
}
