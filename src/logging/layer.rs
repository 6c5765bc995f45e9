use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Dispatch, Level};
use tracing_subscriber::layer::{self, SubscriberExt};

use super::visitor::Visitor;

/// A single event recorded by [`Capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent
{
	/// The event's verbosity level.
	pub level: Level,

	/// The module that emitted the event.
	pub target: String,

	/// The formatted message, if there was one.
	pub message: Option<String>,

	/// All other fields, formatted as strings.
	pub fields: BTreeMap<String, String>,
}

impl CapturedEvent
{
	/// Returns the value of the field called `name`.
	pub fn field(&self, name: &str) -> Option<&str>
	{
		self.fields.get(name).map(String::as_str)
	}
}

/// An in-memory sink for diagnostics.
///
/// Hand [`Capture::dispatch()`] to a [`Client`] and inspect
/// [`Capture::events()`] afterwards.
///
/// [`Client`]: crate::Client
#[derive(Debug, Clone, Default)]
pub struct Capture
{
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Capture
{
	/// Creates an empty [`Capture`].
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Builds a [`Dispatch`] that records every event into `self`.
	pub fn dispatch(&self) -> Dispatch
	{
		Dispatch::new(tracing_subscriber::registry().with(self.clone()))
	}

	/// Returns a snapshot of all events recorded so far.
	pub fn events(&self) -> Vec<CapturedEvent>
	{
		self.events
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Returns all recorded events of the given level.
	pub fn events_at(&self, level: Level) -> Vec<CapturedEvent>
	{
		self.events()
			.into_iter()
			.filter(|event| event.level == level)
			.collect()
	}

	fn push(&self, event: CapturedEvent)
	{
		self.events
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(event);
	}
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
	S: tracing::Subscriber,
{
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>)
	{
		let metadata = event.metadata();
		let mut visitor = Visitor::default();

		event.record(&mut visitor);

		self.push(CapturedEvent {
			level: *metadata.level(),
			target: metadata.target().to_owned(),
			message: visitor.message,
			fields: visitor.fields,
		});
	}
}
