// Route path constants and router construction

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    add_handler, delete_handler, health_handler, list_handler, options_handler,
    set_state_handler,
};
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const TODOS: &str = "/todos";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(todos_router())
        .route(HEALTH, get(health_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// `/todos` with its response headers; methods without a handler get 405
fn todos_router() -> Router<AppState> {
    Router::new()
        .route(
            TODOS,
            get(list_handler)
                .post(add_handler)
                .put(set_state_handler)
                .delete(delete_handler)
                .options(options_handler),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
