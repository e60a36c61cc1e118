//! Banker agent server binary.
//!
//! Loads configuration, initializes tracing, wires the handlers to the
//! in-memory registry and the ASI-One provider, and serves the game API.

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use banker_agent::adapters::ai::{AsiOneConfig, AsiOneProvider};
use banker_agent::adapters::http::game::{game_routes, GameHandlers};
use banker_agent::adapters::registry::InMemoryGameRegistry;
use banker_agent::application::handlers::game::{
    AcceptOfferHandler, GetHistoryHandler, ListGamesHandler, RejectOfferHandler,
    StartGameHandler, TakeTurnHandler, UpdateRoundStateHandler,
};
use banker_agent::config::{AppConfig, ServerConfig};
use banker_agent::domain::negotiation::OfferCalculator;
use banker_agent::ports::{BankerLlm, GameRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    // validate() above guarantees the key is present
    let api_key = config
        .ai
        .asi_one_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();
    let provider_config = AsiOneConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());

    let llm: Arc<dyn BankerLlm> = Arc::new(AsiOneProvider::new(provider_config));
    let registry: Arc<dyn GameRegistry> = Arc::new(InMemoryGameRegistry::new());
    let calculator = Arc::new(OfferCalculator::new(config.negotiation.tables()));

    let handlers = GameHandlers::new(
        Arc::new(StartGameHandler::new(
            registry.clone(),
            llm.clone(),
            calculator.clone(),
        )),
        Arc::new(TakeTurnHandler::new(
            registry.clone(),
            llm.clone(),
            calculator.clone(),
        )),
        Arc::new(AcceptOfferHandler::new(registry.clone())),
        Arc::new(RejectOfferHandler::new(registry.clone())),
        Arc::new(UpdateRoundStateHandler::new(
            registry.clone(),
            llm.clone(),
            calculator.clone(),
        )),
        Arc::new(GetHistoryHandler::new(registry.clone())),
        Arc::new(ListGamesHandler::new(registry.clone())),
    );

    let app = game_routes(handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config.server)?),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, model = %config.ai.model, "banker agent listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = server.cors_origins_list();
    let layer = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<_, _>>()?;
        CorsLayer::new().allow_origin(parsed)
    };
    Ok(layer
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}
