use hyper::header::CONTENT_TYPE;
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};
use log::{error, info};
use serde_json::{json, Map, Value};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hashtag_serve::{Config, Envelope, Hashtagger, Timer, QUERY_PARAMETERS_KEY};

/// Build a Lambda-style event from the request's query string. Requests
/// without a query string produce an event with no parameter container.
fn event_from_request<T>(req: &Request<T>) -> Value {
    let mut event = Map::new();
    event.insert("httpMethod".to_string(), json!(req.method().as_str()));
    event.insert("path".to_string(), json!(req.uri().path()));

    if let Some(query) = req.uri().query() {
        let params: Map<String, Value> = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect();
        event.insert(QUERY_PARAMETERS_KEY.to_string(), Value::Object(params));
    }

    Value::Object(event)
}

fn render(envelope: &Envelope) -> Response<Body> {
    let status =
        StatusCode::from_u16(envelope.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in &envelope.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    match serde_json::to_vec(&envelope.body) {
        Ok(body) => builder.body(Body::from(body)),
        Err(err) => Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from(format!("Response rendering failure: '{}'", err))),
    }
    .unwrap_or_else(|_| Response::new(Body::empty()))
}

async fn handle(
    req: Request<Body>,
    hashtagger: Arc<Hashtagger>,
) -> Result<Response<Body>, Infallible> {
    let _t = Timer::start("Handling request");

    let event = event_from_request(&req);
    let envelope = hashtagger.handle(&event).await;

    Ok(render(&envelope))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let config = Config::from_env()?;
    let addr: SocketAddr = config.listen_addr.parse()?;

    let hashtagger = Arc::new(hashtag_serve::from_config(config).await);

    let make_service = make_service_fn(move |_conn: &AddrStream| {
        let hashtagger = Arc::clone(&hashtagger);

        let service = service_fn(move |req| handle(req, hashtagger.clone()));

        async move { Ok::<_, Infallible>(service) }
    });

    let server = Server::bind(&addr).serve(make_service);
    info!("Listening on http://{}", addr);

    if let Err(e) = server.await {
        error!("server error: {}", e);
    }

    Ok(())
}
