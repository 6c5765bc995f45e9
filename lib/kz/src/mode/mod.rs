//! The three KZ modes tracked by the global leaderboards.
//!
//! Each mode has a short key (`kzt`, `skz`, `vnl`), which is what players
//! type and what gets stored, and an alias used by the Global API's
//! `modes_list_string` parameter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
mod serde;


/// The gamemodes supported by the global leaderboards.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode
{
	/// The KZTimer gamemode.
	///
	/// Timed runs with checkpoints and teleports.
	KZTimer = 200,

	/// The SimpleKZ gamemode.
	SimpleKZ = 201,

	/// The VNL gamemode.
	///
	/// Default CS:GO movement. Maps have separate TP and PRO tiers for this
	/// mode, maintained by vnl.kz.
	Vanilla = 202,
}

impl Mode
{
	/// All modes, in the order the Global API numbers them.
	pub const ALL: [Self; 3] = [Self::KZTimer, Self::SimpleKZ, Self::Vanilla];

	/// Checks whether `self` is [Vanilla].
	///
	/// [Vanilla]: Mode::Vanilla
	pub const fn is_vanilla(&self) -> bool
	{
		matches!(self, Self::Vanilla)
	}

	/// Returns the short key of `self`.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::KZTimer => "kzt",
			Self::SimpleKZ => "skz",
			Self::Vanilla => "vnl",
		}
	}

	/// Returns a capitalized string representation of `self`.
	pub const fn as_str_capitalized(&self) -> &'static str
	{
		match self {
			Self::KZTimer => "KZTimer",
			Self::SimpleKZ => "SimpleKZ",
			Self::Vanilla => "Vanilla",
		}
	}

	/// Returns the name the Global API uses for `self` in record queries.
	pub const fn api_alias(&self) -> &'static str
	{
		match self {
			Self::KZTimer => "kz_timer",
			Self::SimpleKZ => "kz_simple",
			Self::Vanilla => "kz_vanilla",
		}
	}
}

impl fmt::Display for Mode
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(match self {
			Self::KZTimer => "KZT",
			Self::SimpleKZ => "SKZ",
			Self::Vanilla => "VNL",
		})
	}
}

impl From<Mode> for u8
{
	#[allow(clippy::as_conversions)]
	fn from(value: Mode) -> Self
	{
		value as u8
	}
}

/// An error that can occur when parsing a string into a [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a known mode")]
pub struct UnknownMode(pub String);

impl FromStr for Mode
{
	type Err = UnknownMode;

	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		Self::ALL
			.into_iter()
			.find(|mode| {
				[mode.as_str(), mode.api_alias(), mode.as_str_capitalized()]
					.into_iter()
					.any(|name| s.eq_ignore_ascii_case(name))
			})
			.ok_or_else(|| UnknownMode(s.to_owned()))
	}
}
