use crate::error::ApiError;
use crate::handlers::list::todos_response;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

pub const MISSING_ID: &str = "Please provide a todo id";

/// DELETE /todos handler - Delete a todo
///
/// The raw request body is the id of the todo to delete.
#[utoipa::path(
    delete,
    path = routes::TODOS,
    request_body(content = String, content_type = "text/plain", description = "Todo id"),
    responses(
        (status = 200, description = "Todo deleted, full list returned", body = Vec<Item>),
        (status = 400, description = "Empty body or unknown id", body = String, content_type = "text/plain"),
        (status = 500, description = "Todo file could not be written", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let id = String::from_utf8_lossy(&body).into_owned();
    if id.is_empty() {
        return Err(ApiError::BadRequest(MISSING_ID.to_string()));
    }

    state.store.delete(&id).await.map_err(|e| state.reject(e))?;

    tracing::info!("Deleted todo {}", id);
    Ok(todos_response(&state).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::{body::Body, http::Request, routing::delete, Router};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new()
            .route(routes::TODOS, delete(delete_handler))
            .with_state(state)
    }

    fn delete_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(routes::TODOS)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_delete_success() {
        let (state, _fatal, _dir) = test_state();
        let keep = state.store.add("keep").await.unwrap();
        let remove = state.store.add("remove").await.unwrap();

        let response = app(state.clone())
            .oneshot(delete_request(&remove.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let todos: Vec<Item> = serde_json::from_slice(&body).unwrap();
        assert_eq!(todos, vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_empty_body() {
        let (state, _fatal, _dir) = test_state();

        let response = app(state).oneshot(delete_request("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], MISSING_ID.as_bytes());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let (state, mut fatal, _dir) = test_state();
        state.store.add("keep").await.unwrap();

        let response = app(state.clone()).oneshot(delete_request("abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Can't find todo with id abc");
        assert_eq!(state.store.len().await, 1);
        assert!(fatal.try_recv().is_none());
    }
}
