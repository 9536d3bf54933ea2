use crate::webc::{Error, Result};
use serde_json::Value;

/// Flattens GET parameters into query pairs.
///
/// - `null` (or absent) gives no pairs, so does an empty array.
/// - Strings are used verbatim; numbers and booleans are rendered.
/// - `null` members are skipped.
/// - Arrays produce one pair per element (`ids=1&ids=2`).
/// - Nested objects are JSON-encoded.
pub fn to_query_pairs(params: &Value) -> Result<Vec<(String, String)>> {
	let map = match params {
		Value::Null => return Ok(Vec::new()),
		Value::Array(items) if items.is_empty() => return Ok(Vec::new()),
		Value::Object(map) => map,
		other => {
			return Err(Error::QueryParamsNotObject {
				found: json_type_name(other),
			});
		}
	};

	let mut pairs = Vec::with_capacity(map.len());
	for (name, value) in map {
		match value {
			Value::Null => (),
			Value::Array(items) => {
				for item in items {
					if let Some(item) = scalar_to_string(item) {
						pairs.push((name.clone(), item));
					}
				}
			}
			other => {
				if let Some(value) = scalar_to_string(other) {
					pairs.push((name.clone(), value));
				}
			}
		}
	}

	Ok(pairs)
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}

const fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
