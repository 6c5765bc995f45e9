//! A wrapper for validating Steam's 64-bit account identifiers.
//!
//! Only the "SteamID64" representation of individual accounts is supported,
//! since that is what Steam community profiles and the Global API expose.

use std::num::{NonZero, ParseIntError};
use std::str::FromStr;
use std::{fmt, mem};

use thiserror::Error;

#[cfg(feature = "serde")]
mod serde;


/// This is a compile-time sanity check.
const _ASSERT_NPO: () = {
	assert!(
		mem::size_of::<SteamID>() == mem::size_of::<Option<SteamID>>(),
		"`SteamID` should be null-pointer optimized."
	);
};

/// The minimum value for a valid SteamID.
const MIN: u64 = 76561197960265729_u64;

/// The maximum value for a valid SteamID.
const MAX: u64 = 76561202255233023_u64;

/// A stable 64-bit identifier of an individual Steam account.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamID(NonZero<u64>);

impl SteamID
{
	/// Creates a new [`SteamID`].
	///
	/// If `value` is outside the range of individual account IDs, this
	/// function will return [`None`].
	pub const fn new(value: u64) -> Option<Self>
	{
		if value < MIN || value > MAX {
			return None;
		}

		match NonZero::new(value) {
			Some(value) => Some(Self(value)),
			None => None,
		}
	}

	/// Returns the `SteamID` in its 64-bit representation.
	pub const fn as_u64(&self) -> u64
	{
		self.0.get()
	}

	/// Returns the 32-bit account ID, which is the lower half of the
	/// SteamID64.
	#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
	pub const fn as_u32(&self) -> u32
	{
		(self.as_u64() & 0xFFFF_FFFF) as u32
	}
}

impl fmt::Display for SteamID
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, f)
	}
}

/// An error for out-of-range SteamIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid 64-bit SteamID")]
pub struct OutOfRange(pub u64);

impl TryFrom<u64> for SteamID
{
	type Error = OutOfRange;

	fn try_from(value: u64) -> Result<Self, Self::Error>
	{
		Self::new(value).ok_or(OutOfRange(value))
	}
}

impl From<SteamID> for u64
{
	fn from(value: SteamID) -> Self
	{
		value.as_u64()
	}
}

/// Errors that can occur when parsing a string into a [`SteamID`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSteamIDError
{
	/// The string was not a decimal integer.
	#[error("not a 64-bit integer: {0}")]
	NotAnInteger(#[from] ParseIntError),

	/// The integer was not in the range of individual account IDs.
	#[error(transparent)]
	OutOfRange(#[from] OutOfRange),
}

impl FromStr for SteamID
{
	type Err = ParseSteamIDError;

	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let value = s.trim().parse::<u64>()?;

		Ok(Self::try_from(value)?)
	}
}
