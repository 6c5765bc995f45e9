//! Player, map, and record lookups for KZ.
//!
//! This crate aggregates data from several independent upstreams (Steam
//! community profiles, the KZ Global API, vnl.kz, and the map thumbnail
//! repository) into a few validated records. Everything goes through a
//! [`Client`]:
//!
//! - [`Client::resolve_identity()`] turns a profile URL into a [`SteamID`]
//! - [`Client::fetch_avatar()`] downloads a player's avatar
//! - [`Client::resolve_map()`] produces a [`Map`]
//! - [`Client::resolve_personal_bests()`] produces [`PersonalBest`]s
//!
//! Every call makes its requests one after another and retries nothing;
//! whether and when to try again is up to the caller, guided by
//! [`ErrorKind`].
//!
//! [`SteamID`]: kz::SteamID

mod error;
pub use error::{Error, ErrorKind, Result, Upstream};

pub mod config;
pub use config::Config;

mod client;
pub use client::Client;

pub mod http;
pub mod logging;

mod fallback;
mod json;

mod steam;

pub mod maps;
pub use maps::Map;

pub mod records;
pub use records::PersonalBest;

#[cfg(test)]
mod tests;

pub use kz::{Mode, SteamID, Tier};
