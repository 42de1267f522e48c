use crate::routes;
use axum::http::{header, StatusCode};

pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE";

/// OPTIONS /todos handler - CORS preflight
#[utoipa::path(
    options,
    path = routes::TODOS,
    responses(
        (status = 200, description = "Empty body with Access-Control-Allow-Methods")
    ),
    tag = "todos"
)]
pub async fn options_handler() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (
        StatusCode::OK,
        [(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::options, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_options_allow_methods() {
        let app: Router = Router::new().route(routes::TODOS, options(options_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(routes::TODOS)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,POST,PUT,DELETE"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
