//! Domain services and HTTP handlers for accounts and messages.

pub mod auth;
pub mod error;
pub mod extract;
pub mod messages;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{ServiceError, ServiceResult};
pub use routes::router;
pub use state::{AppState, AppStateInner};
