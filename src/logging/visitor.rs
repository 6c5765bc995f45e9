use std::collections::BTreeMap;
use std::fmt;

use tracing::field::{self, Field};

/// [`tracing`] field visitor for recording events.
#[derive(Debug, Default)]
pub(super) struct Visitor
{
	pub(super) message: Option<String>,
	pub(super) fields: BTreeMap<String, String>,
}

impl Visitor
{
	fn set_field(&mut self, field: &Field, value: String)
	{
		if field.name() == "message" {
			self.message = Some(value);
		} else {
			self.fields.insert(field.name().to_owned(), value);
		}
	}
}

impl field::Visit for Visitor
{
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug)
	{
		self.set_field(field, format!("{value:?}"));
	}

	fn record_str(&mut self, field: &Field, value: &str)
	{
		self.set_field(field, value.to_owned());
	}

	fn record_i64(&mut self, field: &Field, value: i64)
	{
		self.set_field(field, value.to_string());
	}

	fn record_u64(&mut self, field: &Field, value: u64)
	{
		self.set_field(field, value.to_string());
	}

	fn record_bool(&mut self, field: &Field, value: bool)
	{
		self.set_field(field, value.to_string());
	}

	fn record_f64(&mut self, field: &Field, value: f64)
	{
		self.set_field(field, value.to_string());
	}

	fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static))
	{
		self.set_field(field, value.to_string());
	}
}
