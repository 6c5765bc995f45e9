//! Map difficulty ratings.

use std::fmt;

/// A difficulty rating as reported by a map registry.
///
/// The Global API rates maps from 1 (very easy) to 7 (death), vnl.kz uses its
/// own scale for TP and PRO runs. Neither scale is enforced here; a [`Tier`]
/// is whatever small integer the registry returned.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tier(u8);

impl Tier
{
	/// Returns the rating as an integer.
	pub const fn get(&self) -> u8
	{
		self.0
	}
}

impl From<u8> for Tier
{
	fn from(value: u8) -> Self
	{
		Self(value)
	}
}

impl From<Tier> for u8
{
	fn from(value: Tier) -> Self
	{
		value.0
	}
}

impl fmt::Display for Tier
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "T{}", self.0)
	}
}
