//! Image hashtag generation: fetch an image, label it with AWS Rekognition
//! and turn the labels into hashtags wrapped in an HTTP-style envelope.

pub mod config;
pub mod detector;
pub mod error;
pub mod fetcher;
pub mod handler;
pub mod hashtag;
pub mod request;
pub mod response;
pub mod timer;

pub use config::Config;
pub use detector::{LabelDetector, RekognitionDetector};
pub use error::{ConfigError, DetectError, FetchError, ParamError};
pub use fetcher::{HttpFetcher, ObjectFetcher};
pub use handler::Hashtagger;
pub use hashtag::{hashtags, to_hashtag, Label};
pub use request::{query_parameters, HashtagRequest, QUERY_PARAMETERS_KEY};
pub use response::Envelope;
pub use timer::Timer;

/// Build a [`Hashtagger`] wired to the HTTP fetcher and Rekognition.
pub async fn from_config(config: Config) -> Hashtagger {
    let fetcher = HttpFetcher::new(config.fetch_timeout());
    let detector = RekognitionDetector::from_config(&config).await;

    Hashtagger::new(Box::new(fetcher), Box::new(detector), config)
}
