//! Strict JSON decoding.
//!
//! Derived [`Deserialize`] impls for structs accept JSON arrays as well as
//! objects, matching fields by position. Upstream payloads are only valid as
//! objects, so they are decoded through [`from_object()`].
//!
//! [`Deserialize`]: serde::Deserialize

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;

/// Decodes `value` into `T`, rejecting anything that is not a JSON object.
pub(crate) fn from_object<T>(value: Value) -> serde_json::Result<T>
where
	T: DeserializeOwned,
{
	if !value.is_object() {
		return Err(serde_json::Error::invalid_type(unexpected(&value), &"a JSON object"));
	}

	serde_json::from_value(value)
}

/// Describes `value` for error messages.
fn unexpected(value: &Value) -> Unexpected<'_>
{
	match value {
		Value::Null => Unexpected::Unit,
		Value::Bool(bool) => Unexpected::Bool(*bool),
		Value::Number(_) => Unexpected::Other("number"),
		Value::String(string) => Unexpected::Str(string),
		Value::Array(_) => Unexpected::Seq,
		Value::Object(_) => Unexpected::Map,
	}
}
