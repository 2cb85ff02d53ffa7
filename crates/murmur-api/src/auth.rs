use axum::{Json, extract::State};
use tracing::{info, warn};

use murmur_types::api::CredentialsRequest;
use murmur_types::models::{Account, NewAccount, is_valid_registration};

use crate::error::{ServiceError, ServiceResult};
use crate::extract::JsonBody;
use crate::state::{AppState, blocking};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> ServiceResult<Json<Account>> {
    // Validate input
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(ServiceError::invalid("Invalid data"));
    };
    if !is_valid_registration(&username, &password) {
        return Err(ServiceError::invalid("Invalid data"));
    }

    let account = blocking(move || {
        state.accounts.register(NewAccount { username, password })
    })
    .await?;

    info!("Account {} registered as {}", account.id, account.username);
    Ok(Json(account))
}

/// POST /login
///
/// An unreadable body is treated like bad credentials.
pub async fn login(
    State(state): State<AppState>,
    body: Result<JsonBody<CredentialsRequest>, ServiceError>,
) -> ServiceResult<Json<Account>> {
    let Ok(JsonBody(req)) = body else {
        warn!("Rejected login with unreadable body");
        return Err(ServiceError::Unauthorized("Invalid username or password".into()));
    };
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let result = {
        let username = username.clone();
        blocking(move || state.accounts.login(&username, &password)).await
    };

    match result {
        Ok(account) => Ok(Json(account)),
        Err(e) => {
            warn!("Failed login for '{}'", username);
            Err(e)
        }
    }
}
