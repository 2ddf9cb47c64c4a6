//! HTTP API server

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod docs;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use docs::ApiDoc;
pub use error::{ApiError, ErrorBody};
pub use routes::{HttpMethod, Operation, Route, ROUTES};
pub use state::AppState;

/// Build the API router from the routing table, plus the API description
pub fn create_router(state: AppState) -> Router {
    let api = ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(&route.axum_path(), route.method_router())
        })
        .with_state(state);

    let swagger =
        SwaggerUi::new(docs::SWAGGER_UI_PATH).url(docs::OPENAPI_JSON_PATH, ApiDoc::openapi());
    api.merge(swagger)
}

/// Wrap a router in request tracing and panic recovery, and optionally a
/// permissive CORS policy
pub fn apply_layers(router: Router, cors_permissive: bool) -> Router {
    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
}
