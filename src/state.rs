use crate::error::{ApiError, StoreError};
use crate::fatal::FatalSignal;
use crate::store::TodoStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub fatal: FatalSignal,
}

impl AppState {
    pub fn new(store: TodoStore, fatal: FatalSignal) -> Self {
        Self {
            store: Arc::new(store),
            fatal,
        }
    }

    /// Map a store error onto the HTTP error returned to the client
    ///
    /// A missing todo is the client's fault. Anything else means the list on
    /// disk no longer matches memory, so the fatal signal is raised as well.
    pub fn reject(&self, err: StoreError) -> ApiError {
        if err.is_client_error() {
            return ApiError::BadRequest(err.to_string());
        }

        let message = err.to_string();
        self.fatal.raise(
            anyhow::Error::new(err)
                .context(format!("failed to persist {}", self.store.path().display())),
        );
        ApiError::Storage(message)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::test_state;
    use super::*;

    #[tokio::test]
    async fn test_reject_not_found_is_bad_request() {
        let (state, mut fatal, _dir) = test_state();

        let err = state.reject(StoreError::NotFound("abc".to_string()));

        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "Can't find todo with id abc"));
        assert!(fatal.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_reject_storage_error_raises_fatal() {
        let (state, mut fatal, _dir) = test_state();

        let err = state.reject(StoreError::Closed);

        assert!(matches!(err, ApiError::Storage(_)));
        let cause = fatal.try_recv().unwrap();
        assert!(format!("{:#}", cause).contains("todo store is closed"));
    }
}
