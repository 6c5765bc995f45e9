//! Resolver errors.
//!
//! This module exposes the [`Error`] type returned by every resolver on
//! [`Client`], and [`ErrorKind`], the coarse classification callers should
//! branch on when deciding what to tell a user.
//!
//! [`Client`]: crate::Client

use derive_more::Display;
use thiserror::Error;

use crate::http;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The external data providers we talk to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream
{
	/// Steam community profiles (XML).
	#[display("Steam Community")]
	SteamCommunity,

	/// The CDN serving the images referenced by Steam profiles.
	#[display("Steam avatar CDN")]
	SteamAvatar,

	/// The KZ Global API.
	#[display("Global API")]
	GlobalApi,

	/// vnl.kz, which rates maps for the Vanilla mode.
	#[display("vnl.kz")]
	VnlKz,

	/// The map thumbnail repository.
	#[display("map thumbnails")]
	Thumbnails,
}

/// Everything that can go wrong while resolving players, maps, and records.
#[derive(Debug, Error)]
pub enum Error
{
	/// The given URL does not point at a Steam community profile.
	#[error("`{url}` is not a Steam community profile URL")]
	InvalidProfileUrl
	{
		/// The URL the caller gave us.
		url: String,
	},

	/// The given map name contains characters other than `[A-Za-z0-9_]`.
	#[error("`{name}` is not a valid map name")]
	InvalidMapName
	{
		/// The name the caller gave us.
		name: String,
	},

	/// We could not get a successful response from an upstream.
	#[error("failed to fetch data from {upstream}")]
	Unavailable
	{
		/// The provider we tried to reach.
		upstream: Upstream,

		/// What went wrong on the wire.
		#[source]
		source: http::Error,
	},

	/// An upstream responded with something that isn't well-formed XML.
	#[error("{upstream} returned malformed XML")]
	MalformedXml
	{
		/// The provider that sent the document.
		upstream: Upstream,

		/// The parser error.
		#[source]
		source: quick_xml::DeError,
	},

	/// A Steam profile document lacks an element we need.
	#[error("Steam profile has no `{element}` element")]
	MissingProfileField
	{
		/// Name of the missing XML element.
		element: &'static str,
	},

	/// A Steam profile contained a `steamID64` that isn't one.
	#[error("`{value}` is not a valid SteamID64")]
	InvalidSteamID
	{
		/// The element text.
		value: String,

		/// Why it was rejected.
		#[source]
		source: kz::steam_id::ParseSteamIDError,
	},

	/// An upstream response was syntactically valid but had the wrong shape.
	#[error("{upstream} returned a malformed response: {reason}")]
	MalformedResponse
	{
		/// The provider that sent the response.
		upstream: Upstream,

		/// What was wrong with it.
		reason: String,
	},

	/// The Global API explicitly reported that the map does not exist.
	#[error("map `{name}` does not exist")]
	MapNotFound
	{
		/// The name we looked up.
		name: String,
	},

	/// A request URL could not be built from the configured base URL.
	#[error("failed to build request URL for {upstream}")]
	Endpoint
	{
		/// The provider the URL was meant for.
		upstream: Upstream,

		/// The parser error.
		#[source]
		source: url::ParseError,
	},
}

/// The four ways a resolver call can fail, as far as callers are concerned.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
	/// The caller gave us a URL or name that failed local validation.
	///
	/// No request was made.
	#[display("invalid input")]
	InvalidInput,

	/// An upstream could not be reached, or answered with an unexpected
	/// status or content type.
	#[display("upstream unavailable")]
	UpstreamUnavailable,

	/// An upstream answered, but the payload did not have the expected
	/// shape.
	///
	/// Also used when a configured base URL cannot be turned into a request
	/// URL, which no amount of retrying fixes either.
	#[display("malformed upstream response")]
	UpstreamMalformed,

	/// An upstream explicitly told us the entity does not exist.
	#[display("not found")]
	NotFound,
}

impl ErrorKind
{
	/// Whether trying the same call again later could succeed.
	pub const fn is_retryable(&self) -> bool
	{
		matches!(self, Self::UpstreamUnavailable)
	}
}

impl Error
{
	/// Classifies this error.
	pub const fn kind(&self) -> ErrorKind
	{
		match self {
			Self::InvalidProfileUrl { .. } | Self::InvalidMapName { .. } => ErrorKind::InvalidInput,
			Self::Unavailable { .. } => ErrorKind::UpstreamUnavailable,
			Self::Endpoint { .. }
			| Self::MalformedXml { .. }
			| Self::MissingProfileField { .. }
			| Self::InvalidSteamID { .. }
			| Self::MalformedResponse { .. } => ErrorKind::UpstreamMalformed,
			Self::MapNotFound { .. } => ErrorKind::NotFound,
		}
	}

	/// The upstream this error originated from, if any.
	pub const fn upstream(&self) -> Option<Upstream>
	{
		match *self {
			Self::InvalidProfileUrl { .. } | Self::InvalidMapName { .. } => None,
			Self::MissingProfileField { .. } | Self::InvalidSteamID { .. } => {
				Some(Upstream::SteamCommunity)
			}
			Self::MapNotFound { .. } => Some(Upstream::GlobalApi),
			Self::Unavailable { upstream, .. }
			| Self::MalformedXml { upstream, .. }
			| Self::MalformedResponse { upstream, .. }
			| Self::Endpoint { upstream, .. } => Some(upstream),
		}
	}

	/// Creates a [`MalformedResponse`] error.
	///
	/// [`MalformedResponse`]: Error::MalformedResponse
	pub(crate) fn malformed<R>(upstream: Upstream, reason: R) -> Self
	where
		R: Into<String>,
	{
		Self::MalformedResponse { upstream, reason: reason.into() }
	}
}
