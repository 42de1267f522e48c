use crate::error::ApiError;
use crate::handlers::list::todos_response;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

pub const INVALID_STATE: &str = "Please provide a todo state of either 'done' or 'open'";

/// Split a `<id>:<state>` body into the id and the done flag
///
/// The state is the second `:`-separated field and must be `done` or `open`.
fn parse_state(body: &str) -> Result<(&str, bool), ApiError> {
    let invalid = || ApiError::BadRequest(INVALID_STATE.to_string());

    let mut fields = body.split(':');
    let id = fields.next().ok_or_else(invalid)?;
    let done = match fields.next() {
        Some("done") => true,
        Some("open") => false,
        _ => return Err(invalid()),
    };

    Ok((id, done))
}

/// PUT /todos handler - Mark a todo done or open
///
/// The raw request body is `<id>:done` or `<id>:open`.
#[utoipa::path(
    put,
    path = routes::TODOS,
    request_body(content = String, content_type = "text/plain", description = "`<id>:done` or `<id>:open`"),
    responses(
        (status = 200, description = "State updated, full list returned", body = Vec<Item>),
        (status = 400, description = "Malformed state or unknown id", body = String, content_type = "text/plain"),
        (status = 500, description = "Todo file could not be written", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn set_state_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let body = String::from_utf8_lossy(&body);
    if body.is_empty() {
        return Err(ApiError::BadRequest(INVALID_STATE.to_string()));
    }

    let (id, done) = parse_state(&body)?;
    state
        .store
        .set_state(id, done)
        .await
        .map_err(|e| state.reject(e))?;

    tracing::info!("Set todo {} to {}", id, if done { "done" } else { "open" });
    Ok(todos_response(&state).await)
}
