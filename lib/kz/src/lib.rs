//! The KZ "standard library".
//!
//! This crate contains the core types shared by the record and map
//! resolvers: game modes, player identities and difficulty ratings.

pub mod steam_id;

#[doc(inline)]
pub use steam_id::SteamID;

pub mod mode;

#[doc(inline)]
pub use mode::Mode;

pub mod tier;

#[doc(inline)]
pub use tier::Tier;
