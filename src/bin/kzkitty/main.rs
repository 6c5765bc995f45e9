use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use kzkitty::{Client, Config};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode>
{
	if let Err(error) = dotenvy::dotenv() {
		if !error.not_found() {
			eprintln!("Failed to load `.env` file: {error}");
		}
	}

	let cli_args = cli::args();
	let config = if let Some(config_path) = cli_args.config_path.as_deref() {
		read_and_parse_config_file(config_path)?
	} else if fs::exists("./kzkitty.toml")? {
		read_and_parse_config_file(Path::new("./kzkitty.toml"))?
	} else {
		Config::default()
	};

	let _guard = kzkitty::logging::init(&config.tracing).context("failed to initialize tracing")?;
	let client = Client::new(&config).context("failed to build http client")?;

	match run(&client, cli_args.command).await? {
		Ok(()) => Ok(ExitCode::SUCCESS),
		Err(error) => {
			eprintln!("{}: {error}", error.kind());
			Ok(ExitCode::FAILURE)
		}
	}
}

/// Runs a single command.
///
/// The outer error covers local failures (writing files, serializing output);
/// the inner one is whatever the resolver reported.
async fn run(client: &Client, command: cli::Command) -> anyhow::Result<kzkitty::Result<()>>
{
	match command {
		cli::Command::Identity { profile_url } => {
			Ok(client.resolve_identity(&profile_url).await.map(|steam_id| {
				println!("{steam_id}");
			}))
		}

		cli::Command::Avatar { steam_id, output } => {
			let avatar = match client.fetch_avatar(steam_id).await {
				Ok(avatar) => avatar,
				Err(error) => return Ok(Err(error)),
			};

			fs::write(&output, &avatar)
				.with_context(|| format!("failed to write avatar to `{}`", output.display()))?;

			Ok(Ok(()))
		}

		cli::Command::Map { name, mode } => {
			let map = match client.resolve_map(&name, mode).await {
				Ok(map) => map,
				Err(error) => return Ok(Err(error)),
			};

			let mut json = serde_json::to_value(&map).context("failed to serialize map")?;

			if let Some(object) = json.as_object_mut() {
				object.insert(
					"thumbnail_size".to_owned(),
					map.thumbnail.as_ref().map(|bytes| bytes.len()).into(),
				);
			}

			print_json(&json)?;

			Ok(Ok(()))
		}

		cli::Command::Pbs { steam_id, map_name, mode } => {
			let personal_bests = match client
				.resolve_personal_bests(steam_id, &map_name, mode)
				.await
			{
				Ok(personal_bests) => personal_bests,
				Err(error) => return Ok(Err(error)),
			};

			print_json(&personal_bests)?;

			Ok(Ok(()))
		}
	}
}

fn read_and_parse_config_file(path: &Path) -> anyhow::Result<Config>
{
	fs::read_to_string(path)
		.context("failed to read configuration file")
		.and_then(|text| toml::from_str(&text).context("failed to parse configuration file"))
}

fn print_json<T>(value: &T) -> anyhow::Result<()>
where
	T: serde::Serialize + ?Sized,
{
	let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;

	println!("{json}");

	Ok(())
}
