//! Response envelope returned to the hosting platform.
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::ParamError;
use crate::hashtag::Label;
use crate::request::HashtagRequest;

pub const MISSING_PARAMETERS_MESSAGE: &str =
    "[ERROR]: Query string parameters are missing! Please try new GET request with QUERY PARAMS";

pub const NO_LABELS_MESSAGE: &str = "[ERROR]: Please try again with different image url or make sure image is available for download";

/// What a failed request echoes back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Echo {
    /// The inbound event or its raw parameter container
    Raw(Value),
    Parsed(HashtagRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Failure {
        message: String,
        success: bool,
        request: Echo,
    },
    Success {
        message: String,
        success: bool,
        labels: Vec<Label>,
        hashtags: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub headers: BTreeMap<String, String>,

    #[serde(rename = "statusCode")]
    pub status_code: u16,

    pub body: ResponseBody,
}

impl Envelope {
    fn new(status_code: u16, body: ResponseBody) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Envelope {
            headers,
            status_code,
            body,
        }
    }

    fn failure(message: String, request: Echo) -> Self {
        Envelope::new(
            400,
            ResponseBody::Failure {
                message,
                success: false,
                request,
            },
        )
    }

    /// The event carried no parameter container; echoes the whole event.
    pub fn missing_parameters(event: &Value) -> Self {
        Envelope::failure(
            MISSING_PARAMETERS_MESSAGE.to_string(),
            Echo::Raw(event.clone()),
        )
    }

    pub fn invalid_parameter(err: &ParamError, params: &Map<String, Value>) -> Self {
        Envelope::failure(
            format!("[ERROR]: {}", err),
            Echo::Raw(Value::Object(params.clone())),
        )
    }

    /// Nothing was detected, either because the image could not be
    /// fetched or because the detector returned no labels.
    pub fn no_labels(request: &HashtagRequest) -> Self {
        Envelope::failure(
            NO_LABELS_MESSAGE.to_string(),
            Echo::Parsed(request.clone()),
        )
    }

    pub fn success(name: &str, labels: Vec<Label>, hashtags: Vec<String>) -> Self {
        Envelope::new(
            200,
            ResponseBody::Success {
                message: format!("Object {} analyzed successfully!", name),
                success: true,
                labels,
                hashtags,
            },
        )
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        match &self.body {
            ResponseBody::Failure { success, .. } | ResponseBody::Success { success, .. } => {
                *success
            }
        }
    }

    pub fn message(&self) -> &str {
        match &self.body {
            ResponseBody::Failure { message, .. } | ResponseBody::Success { message, .. } => {
                message
            }
        }
    }

    /// Hashtags of a successful envelope, empty for failures.
    pub fn hashtags(&self) -> &[String] {
        match &self.body {
            ResponseBody::Success { hashtags, .. } => hashtags,
            ResponseBody::Failure { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialized_shape() {
        let envelope = Envelope::success(
            "kitten",
            vec![Label::new("Cat", 99.0)],
            vec!["#cat".to_string()],
        );

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "headers": { "Content-Type": "application/json" },
                "statusCode": 200,
                "body": {
                    "message": "Object kitten analyzed successfully!",
                    "success": true,
                    "labels": [{ "name": "Cat", "confidence": 99.0 }],
                    "hashtags": ["#cat"],
                },
            })
        );
        assert!(envelope.is_success());
        assert_eq!(envelope.hashtags().to_vec(), vec!["#cat".to_string()]);
    }

    #[test]
    fn missing_parameters_echoes_event() {
        let event = json!({ "httpMethod": "GET", "path": "/hashtags" });
        let envelope = Envelope::missing_parameters(&event);

        assert_eq!(envelope.status_code(), 400);
        assert!(!envelope.is_success());
        assert_eq!(envelope.message(), MISSING_PARAMETERS_MESSAGE);
        assert_eq!(
            serde_json::to_value(&envelope.body).unwrap(),
            json!({
                "message": MISSING_PARAMETERS_MESSAGE,
                "success": false,
                "request": event,
            })
        );
    }

    #[test]
    fn no_labels_echoes_parsed_request() {
        let request = HashtagRequest {
            name: "kitten".to_string(),
            image_url: "test url".to_string(),
            max_labels: 5,
            min_confidence: 75,
        };
        let envelope = Envelope::no_labels(&request);

        assert!(envelope.hashtags().is_empty());
        assert_eq!(
            serde_json::to_value(&envelope.body).unwrap()["request"],
            json!({
                "name": "kitten",
                "image_url": "test url",
                "max_labels": 5,
                "min_confidence": 75,
            })
        );
    }

    #[test]
    fn invalid_parameter_names_field() {
        let params = json!({ "max_labels": "many" });
        let err = ParamError::InvalidInteger {
            field: "max_labels",
            value: "many".to_string(),
        };
        let envelope = Envelope::invalid_parameter(&err, params.as_object().unwrap());

        assert_eq!(envelope.status_code(), 400);
        assert_eq!(
            envelope.message(),
            "[ERROR]: 'max_labels' must be an integer, got 'many'"
        );
        assert_eq!(
            envelope.body,
            ResponseBody::Failure {
                message: envelope.message().to_string(),
                success: false,
                request: Echo::Raw(params),
            }
        );
    }
}
