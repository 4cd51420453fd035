use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::debug;
use serde_json::Value;

use hashtag_serve::{Config, Envelope, Hashtagger, Timer};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = Config::from_env()?;
    let hashtagger = hashtag_serve::from_config(config).await;

    debug!("Created fetcher and detector clients");

    let hashtagger_ref = &hashtagger;

    let handler_closure = move |event: LambdaEvent<Value>| async move {
        handle_request(event, hashtagger_ref).await
    };

    debug!("Dispatching handler");
    lambda_runtime::run(service_fn(handler_closure)).await?;

    Ok(())
}

async fn handle_request(
    event: LambdaEvent<Value>,
    hashtagger: &Hashtagger,
) -> Result<Envelope, Error> {
    debug!("Inside handler, request id {}", event.context.request_id);

    let _t = Timer::start("Handling request");

    Ok(hashtagger.handle(&event.payload).await)
}
