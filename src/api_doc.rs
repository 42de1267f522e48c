use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, Item};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-backend API",
        version = "1.0.0",
        description = "A todo list served over HTTP and stored in a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::add::add_handler,
        handlers::delete::delete_handler,
        handlers::set_state::set_state_handler,
        handlers::options::options_handler
    ),
    components(
        schemas(
            Item,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "Todo list operations")
    )
)]
pub struct ApiDoc;
