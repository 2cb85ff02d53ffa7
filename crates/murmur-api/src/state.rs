use std::sync::Arc;

use murmur_db::{AccountStore, Database, MessageStore};
use tracing::error;

use crate::error::{ServiceError, ServiceResult};
use crate::service::{AccountService, MessageService};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

impl AppStateInner {
    /// Wires both services to the same database.
    pub fn new(db: Arc<Database>) -> AppState {
        Self::with_stores(db.clone(), db)
    }

    pub fn with_stores(
        accounts: Arc<dyn AccountStore>,
        messages: Arc<dyn MessageStore>,
    ) -> AppState {
        Arc::new(Self {
            accounts: AccountService::new(accounts.clone()),
            messages: MessageService::new(messages, accounts),
        })
    }
}

/// Runs a synchronous service call on the blocking pool.
pub(crate) async fn blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ServiceError::Internal("An unexpected error occurred".into())
    })?
}
