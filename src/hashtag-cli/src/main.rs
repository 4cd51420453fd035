use serde_json::{json, Map, Value};
use std::error::Error;
use structopt::StructOpt;

use hashtag_serve::{Config, QUERY_PARAMETERS_KEY};

use log::info;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "hashtag-cli",
    about = "CLI app to generate hashtags for an image with AWS Rekognition"
)]
struct CmdArgs {
    #[structopt(help = "URL to fetch image from")]
    image_url: String,

    #[structopt(long, help = "Name of the analyzed object")]
    name: Option<String>,

    #[structopt(long, help = "Maximum number of labels to detect")]
    max_labels: Option<i32>,

    #[structopt(long, help = "Confidence threshold in percent")]
    min_confidence: Option<i32>,
}

impl CmdArgs {
    /// Absent options stay absent so the handler applies its defaults.
    fn to_event(&self) -> Value {
        let mut params = Map::new();
        params.insert("image_url".to_string(), json!(self.image_url));

        if let Some(name) = &self.name {
            params.insert("name".to_string(), json!(name));
        }
        if let Some(max_labels) = self.max_labels {
            params.insert("max_labels".to_string(), json!(max_labels.to_string()));
        }
        if let Some(min_confidence) = self.min_confidence {
            params.insert(
                "min_confidence".to_string(),
                json!(min_confidence.to_string()),
            );
        }

        json!({ QUERY_PARAMETERS_KEY: params })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CmdArgs::from_args();

    let config = Config::from_env()?;
    let hashtagger = hashtag_serve::from_config(config).await;

    let envelope = hashtagger.handle(&args.to_event()).await;

    info!("Finished with status {}", envelope.status_code());
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
