use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::AppConfig;
use crate::handlers::{protected, public};
use crate::middleware::require_api_token;
use crate::state::AppState;

/// Full router: public reads, token-gated creates, global layers.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(public::root))
        .route("/ping", get(public::ping))
        .merge(product_write_routes(state.clone()))
        .merge(product_read_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );
    }

    router.with_state(state)
}

fn product_read_routes() -> Router<AppState> {
    Router::new()
        // Collection route answers with and without the trailing slash
        .route("/products", get(public::products_list))
        .route("/products/", get(public::products_list))
        .route("/products/:id", get(public::products_show))
        .route("/products/price/:price", get(public::products_price_above))
}

fn product_write_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/products", post(protected::products_create))
        .route("/products/", post(protected::products_create))
        .route("/products/range", post(protected::products_create_range))
        .route_layer(middleware::from_fn_with_state(state, require_api_token))
}
