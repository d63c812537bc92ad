//! Query parameter serialization
//!
//! Array values are serialized in repeated-key format: `{"tags": ["a", "b"]}`
//! becomes `tags=a&tags=b`, not `tags[]=a&tags[]=b` or a comma-joined value.

use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;

/// Serialize `params` into a percent-encoded query string
///
/// `params` must serialize to a map of scalars or arrays of scalars. `null`
/// values (and `None` options) are skipped. Nested objects and arrays of
/// arrays are rejected with [`HttpError::Serialization`].
pub fn to_query_string<P>(params: &P) -> Result<String, HttpError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)?;
    let map = match value {
        Value::Null => return Ok(String::new()),
        Value::Object(map) => map,
        other => {
            return Err(HttpError::Serialization(format!(
                "query parameters must be a map, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    let rendered = scalar(&key, item)?;
                    pairs.push((key.clone(), rendered));
                }
            }
            other => {
                let rendered = scalar(&key, other)?;
                pairs.push((key, rendered));
            }
        }
    }

    serde_urlencoded::to_string(&pairs).map_err(|e| HttpError::Serialization(e.to_string()))
}

fn scalar(key: &str, value: Value) -> Result<String, HttpError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(HttpError::Serialization(format!(
            "unsupported value for query parameter `{}`: {}",
            key,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
