use serde::{Deserialize, Serialize};

/// A single todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    /// Random 32 character alphanumeric id
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Item {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
}

/// On-disk layout of the todo file: `{"todos": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TodoFile {
    #[serde(default)]
    pub todos: Vec<Item>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub todos: usize,
}
