use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::ParamError;

/// Key of the parameter container in an inbound event
pub const QUERY_PARAMETERS_KEY: &str = "queryStringParameters";

/// Parameters of a single hashtag request, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagRequest {
    /// Name of the analyzed object, only used in messages
    pub name: String,

    pub image_url: String,

    /// Upper bound on the number of labels returned by the detector
    pub max_labels: i32,

    /// Confidence threshold in percent
    pub min_confidence: i32,
}

/// The parameter container of an inbound event, if it carries one.
///
/// A `null` or non-object container is treated the same as a missing one.
/// Inside the container, a key present with a `null` value is an error, not
/// a request for the default.
pub fn query_parameters(event: &Value) -> Option<&Map<String, Value>> {
    event.get(QUERY_PARAMETERS_KEY).and_then(Value::as_object)
}

fn text_param(
    params: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ParamError> {
    match params.get(field) {
        None => Ok(None),
        Some(Value::Null) => Err(ParamError::Null { field }),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Ok(Some(other.to_string())),
    }
}

fn int_param(
    params: &Map<String, Value>,
    field: &'static str,
    default: i32,
) -> Result<i32, ParamError> {
    let invalid = |value: &Value| ParamError::InvalidInteger {
        field,
        value: value.to_string(),
    };

    match params.get(field) {
        None => Ok(default),
        Some(Value::Null) => Err(ParamError::Null { field }),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| ParamError::InvalidInteger {
            field,
            value: s.clone(),
        }),
        // Whole-number floats such as `5.0` are accepted, fractions are not.
        Some(value @ Value::Number(n)) => {
            let whole = match n.as_i64() {
                Some(i) => Some(i),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64),
            };
            whole
                .and_then(|i| i32::try_from(i).ok())
                .ok_or_else(|| invalid(value))
        }
        Some(other) => Err(invalid(other)),
    }
}

impl HashtagRequest {
    pub fn from_query(params: &Map<String, Value>, config: &Config) -> Result<Self, ParamError> {
        Ok(HashtagRequest {
            name: text_param(params, "name")?.unwrap_or_else(|| config.default_name.clone()),
            image_url: text_param(params, "image_url")?
                .unwrap_or_else(|| config.default_image_url.clone()),
            max_labels: int_param(params, "max_labels", config.default_max_labels)?,
            min_confidence: int_param(params, "min_confidence", config.default_min_confidence)?,
        })
    }
}
