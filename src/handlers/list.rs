use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Current list as the body of a 200 response; every successful `/todos`
/// request answers with this
pub(crate) async fn todos_response(state: &AppState) -> (StatusCode, Json<Vec<Item>>) {
    (StatusCode::OK, Json(state.store.all().await))
}

/// GET /todos handler - List all todos
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All todos in insertion order", body = Vec<Item>)
    ),
    tag = "todos"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let response = todos_response(&state).await;
    tracing::info!("Listed {} todos", response.1.len());
    response
}
