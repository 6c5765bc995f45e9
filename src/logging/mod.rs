//! Log-capturing facilities.
//!
//! The resolvers never talk to a global logger directly. Every [`Client`]
//! carries a [`Dispatch`] and runs its operations with that dispatch
//! installed, so a host (or a test) decides where diagnostics end up.
//! [`init()`] builds the process-wide subscriber for the binary;
//! [`Capture`] records events in memory.
//!
//! [`Client`]: crate::Client
//! [`Dispatch`]: tracing::Dispatch

use std::fs;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::{Layer as _, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;

mod layer;
pub use layer::{Capture, CapturedEvent};

mod visitor;

/// Initializes [`tracing-subscriber`] as the global default.
///
/// NOTE: the returned [`WorkerGuard`] will perform cleanup for the layer that
///       emits logs to files, which means it has to stay alive until the
///       program exits!
///
/// [`tracing-subscriber`]: tracing_subscriber
pub fn init(config: &TracingConfig) -> anyhow::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let env_filter =
		|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kzkitty=info,warn"));

	let stderr = config.stderr.enable.then(|| {
		tracing_subscriber::fmt::layer()
			.pretty()
			.with_ansi(config.stderr.ansi)
			.with_writer(std::io::stderr)
			.with_filter(env_filter())
	});

	let (files, guard) = config
		.files
		.enable
		.then(|| {
			if !config.files.directory.exists() {
				fs::create_dir_all(&config.files.directory).context("create log dir")?;
			}

			let log_dir = config
				.files
				.directory
				.canonicalize()
				.context("canonicalize log dir path")?;

			let (writer, guard) = tracing_appender::rolling::Builder::new()
				.rotation(Rotation::DAILY)
				.filename_prefix("kzkitty")
				.filename_suffix("log")
				.build(&log_dir)
				.map(tracing_appender::non_blocking)
				.context("failed to initialize logger")?;

			let layer = tracing_subscriber::fmt::layer()
				.compact()
				.with_ansi(false)
				.with_file(true)
				.with_level(true)
				.with_line_number(true)
				.with_span_events(FmtSpan::CLOSE)
				.with_target(true)
				.with_writer(writer)
				.with_filter(env_filter());

			anyhow::Ok((layer, guard))
		})
		.transpose()?
		.unzip();

	tracing_subscriber::registry()
		.with(stderr)
		.with(files)
		.try_init()
		.context("failed to install global subscriber")?;

	tracing::info!("initialized tracing");

	Ok(guard)
}
