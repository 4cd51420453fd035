use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, Label as RekognitionLabel};
use aws_sdk_rekognition::Client;
use log::info;

use crate::config::Config;
use crate::error::DetectError;
use crate::hashtag::Label;

/// Classifies image bytes into labels with confidence scores.
#[async_trait]
pub trait LabelDetector: Send + Sync {
    async fn detect(
        &self,
        image: &[u8],
        max_labels: i32,
        min_confidence: i32,
    ) -> Result<Vec<Label>, DetectError>;
}

/// Label detection backed by AWS Rekognition `DetectLabels`.
pub struct RekognitionDetector {
    client: Client,
}

impl RekognitionDetector {
    /// Build a client from the default AWS credential and region chain.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        let sdk_config = loader.load().await;
        info!(
            "Rekognition client configured for region {:?}",
            sdk_config.region()
        );

        RekognitionDetector::new(Client::new(&sdk_config))
    }

    pub fn new(client: Client) -> Self {
        RekognitionDetector { client }
    }
}

fn to_label(label: &RekognitionLabel) -> Option<Label> {
    let name = label.name()?;
    Some(Label::new(name, label.confidence().unwrap_or_default()))
}

#[async_trait]
impl LabelDetector for RekognitionDetector {
    async fn detect(
        &self,
        image: &[u8],
        max_labels: i32,
        min_confidence: i32,
    ) -> Result<Vec<Label>, DetectError> {
        if image.is_empty() {
            return Err(DetectError::EmptyImage);
        }

        let image = Image::builder().bytes(Blob::new(image)).build();

        let output = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(max_labels)
            .min_confidence(min_confidence as f32)
            .send()
            .await
            .map_err(|e| DetectError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(output.labels().iter().filter_map(to_label).collect())
    }
}
