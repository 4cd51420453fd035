use thiserror::Error;

/// Failure to retrieve the image bytes.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Could not fetch image from '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failure of the label detection service.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Refusing to run label detection on an empty image")]
    EmptyImage,

    #[error("Label detection service error: {0}")]
    Service(String),
}

/// A query parameter that could not be interpreted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamError {
    #[error("'{field}' must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("'{field}' is present but null")]
    Null { field: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
}
