//! Function configuration, read from `HASHTAGS_`-prefixed environment variables.
use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

const ENV_PREFIX: &str = "HASHTAGS_";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Name used when the request carries none
    #[serde(default = "default_name")]
    pub default_name: String,

    /// Image URL used when the request carries none
    #[serde(default = "default_image_url")]
    pub default_image_url: String,

    #[serde(default = "default_max_labels")]
    pub default_max_labels: i32,

    /// Confidence threshold in percent
    #[serde(default = "default_min_confidence")]
    pub default_min_confidence: i32,

    /// Timeout for the image download, client default when unset
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Overrides the region picked up by the AWS SDK
    #[serde(default)]
    pub aws_region: Option<String>,

    /// Bind address of the HTTP front end
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_name() -> String {
    "test name".to_string()
}

fn default_image_url() -> String {
    "test url".to_string()
}

fn default_max_labels() -> i32 {
    20
}

fn default_min_confidence() -> i32 {
    75
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_name: default_name(),
            default_image_url: default_image_url(),
            default_max_labels: default_max_labels(),
            default_min_confidence: default_min_confidence(),
            fetch_timeout_secs: None,
            aws_region: None,
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    /// Same as [`Config::from_env`] but over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_matches_default() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_max_labels, 20);
        assert_eq!(config.default_min_confidence, 75);
        assert_eq!(config.fetch_timeout(), None);
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("HASHTAGS_DEFAULT_MAX_LABELS", "5"),
            ("HASHTAGS_FETCH_TIMEOUT_SECS", "10"),
            ("HASHTAGS_AWS_REGION", "eu-west-1"),
            ("MAX_LABELS", "99"),
        ]))
        .unwrap();

        assert_eq!(config.default_max_labels, 5);
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.aws_region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.default_name, "test name");
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = Config::from_vars(vars(&[("HASHTAGS_DEFAULT_MIN_CONFIDENCE", "high")]));
        assert!(matches!(err, Err(ConfigError::Env(_))));
    }
}
