use crate::error::ApiError;
use crate::handlers::list::todos_response;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

pub const MISSING_TEXT: &str = "Please provide a todo text";

/// POST /todos handler - Add a todo
///
/// The raw request body is the todo text.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body(content = String, content_type = "text/plain", description = "Todo text"),
    responses(
        (status = 200, description = "Todo added, full list returned", body = Vec<Item>),
        (status = 400, description = "Empty body", body = String, content_type = "text/plain"),
        (status = 500, description = "Todo file could not be written", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn add_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let text = String::from_utf8_lossy(&body).into_owned();
    if text.is_empty() {
        return Err(ApiError::BadRequest(MISSING_TEXT.to_string()));
    }

    let item = state.store.add(text).await.map_err(|e| state.reject(e))?;

    tracing::info!("Added todo {}", item.id);
    Ok(todos_response(&state).await)
}
