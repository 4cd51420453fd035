use log::{debug, info, warn};
use serde_json::Value;

use crate::config::Config;
use crate::detector::LabelDetector;
use crate::fetcher::ObjectFetcher;
use crate::hashtag::{hashtags, Label};
use crate::request::{query_parameters, HashtagRequest};
use crate::response::Envelope;
use crate::timer::Timer;

/// Turns inbound events into hashtag envelopes.
///
/// Holds the process-wide collaborator handles; one instance serves every
/// invocation of the function.
pub struct Hashtagger {
    fetcher: Box<dyn ObjectFetcher>,
    detector: Box<dyn LabelDetector>,
    config: Config,
}

impl Hashtagger {
    pub fn new(
        fetcher: Box<dyn ObjectFetcher>,
        detector: Box<dyn LabelDetector>,
        config: Config,
    ) -> Self {
        Hashtagger {
            fetcher,
            detector,
            config,
        }
    }

    /// Run label detection on bytes already in memory. Detector failures
    /// yield no labels.
    pub async fn labels_from_raw(&self, data: &[u8], request: &HashtagRequest) -> Vec<Label> {
        info!(
            "Call to AWS Rekognition for object detection on image '{}'",
            request.name
        );

        let _t = Timer::start("Detecting labels");

        match self
            .detector
            .detect(data, request.max_labels, request.min_confidence)
            .await
        {
            Ok(labels) => labels,
            Err(err) => {
                warn!("Label detection failed for '{}': {}", request.name, err);
                Vec::new()
            }
        }
    }

    /// Fetch the request's image and detect its labels. Fetch failures
    /// yield no labels without calling the detector.
    pub async fn labels_from_url(&self, request: &HashtagRequest) -> Vec<Label> {
        let fetched = {
            let _t = Timer::start(format!("Fetching image from {}", request.image_url));
            self.fetcher.fetch(&request.image_url).await
        };

        match fetched {
            Ok(data) => self.labels_from_raw(&data, request).await,
            Err(err) => {
                warn!("Image fetch failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Handle one inbound event end to end.
    pub async fn handle(&self, event: &Value) -> Envelope {
        debug!("Received event: {:#?}", event);

        let params = match query_parameters(event) {
            Some(params) => params,
            None => {
                warn!("Event carries no query string parameters");
                return Envelope::missing_parameters(event);
            }
        };

        let request = match HashtagRequest::from_query(params, &self.config) {
            Ok(request) => request,
            Err(err) => {
                warn!("Rejecting request: {}", err);
                return Envelope::invalid_parameter(&err, params);
            }
        };

        let labels = self.labels_from_url(&request).await;
        let tags = hashtags(&labels);

        if tags.is_empty() {
            Envelope::no_labels(&request)
        } else {
            Envelope::success(&request.name, labels, tags)
        }
    }
}
