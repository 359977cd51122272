//! Readings Lambda - Handles GET /readings?date=YYYYMMDD.
//!
//! Looks up the Mass for the requested date and returns its title, page URL,
//! and one row per section with the scripture reference (and optionally the
//! full reading text). Alleluia and Sequence sections are left out.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, query_param, respond};
use shared::{build_payload, parse_date, Config, MassSource, MassType, ReadingsPayload, UsccbClient};
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
    source: Arc<dyn MassSource>,
}

impl AppState {
    fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("readings-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let source = UsccbClient::new(config.usccb_base_url.clone(), http_client);

        Ok(Self {
            config,
            source: Arc::new(source),
        })
    }
}

async fn lookup_readings(state: &AppState, event: &Request) -> shared::Result<ReadingsPayload> {
    let raw_date = query_param(event, "date")
        .ok_or_else(|| shared::Error::Validation("missing date parameter".to_string()))?;
    let date = parse_date(raw_date)?;

    let mass = state
        .source
        .get_mass_from_date(date, &MassType::PREFERENCE)
        .await?
        .ok_or_else(|| {
            shared::Error::NotFound(format!("no readings found for {}", date.format("%Y-%m-%d")))
        })?;

    Ok(build_payload(&mass, state.config.include_text))
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    debug!("Received request: method={}, path={}", event.method(), event.uri().path());

    let max_age = state.config.cache_max_age;
    match lookup_readings(&state, &event).await {
        Ok(payload) => Ok(respond(200, &payload, max_age)),
        Err(e) => {
            let status = e.status_code();
            match status {
                500 => error!(error = %e, "Readings lookup failed"),
                404 => info!("{}", e),
                _ => debug!("Rejected request: {}", e),
            }
            Ok(error_response(status, e.to_string(), max_age))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}
