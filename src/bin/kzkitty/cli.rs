//! CLI argument handling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kzkitty::{Mode, SteamID};

pub fn args() -> Args
{
	Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args
{
	/// Path to the configuration file.
	///
	/// Will default to `./kzkitty.toml` if unspecified.
	/// If that file does not exist, default configuration values will be used.
	#[arg(short, long = "config")]
	pub config_path: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command
{
	/// Resolves a Steam community profile URL into a SteamID64.
	Identity
	{
		/// e.g. `https://steamcommunity.com/id/alphakeks/`
		profile_url: String,
	},

	/// Downloads a player's full-size avatar.
	Avatar
	{
		steam_id: SteamID,

		/// Where to write the image to.
		#[arg(short, long)]
		output: PathBuf,
	},

	/// Looks up a map's tiers.
	Map
	{
		name: String,

		/// `kzt`, `skz` or `vnl`.
		#[arg(short, long, default_value = "kzt")]
		mode: Mode,
	},

	/// Looks up a player's personal bests on a map.
	Pbs
	{
		steam_id: SteamID,

		map_name: String,

		/// `kzt`, `skz` or `vnl`.
		#[arg(short, long, default_value = "kzt")]
		mode: Mode,
	},
}
