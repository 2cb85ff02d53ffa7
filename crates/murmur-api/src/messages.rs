use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use murmur_types::api::{CreateMessageRequest, UpdateMessageRequest};
use murmur_types::models::{Message, NewMessage, is_valid_message_text};

use crate::error::{ServiceError, ServiceResult};
use crate::extract::JsonBody;
use crate::state::{AppState, blocking};

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMessageRequest>,
) -> ServiceResult<Json<Message>> {
    let text = match req.text {
        Some(text) if is_valid_message_text(&text) => text,
        _ => return Err(ServiceError::invalid("Invalid message text")),
    };

    let candidate = NewMessage {
        text,
        posted_by: req.posted_by,
        time_posted_epoch: req
            .time_posted_epoch
            .unwrap_or_else(|| chrono::Utc::now().timestamp()),
    };

    let message = blocking(move || state.messages.create(candidate)).await?;

    info!("Message {} posted by account {}", message.id, message.posted_by);
    Ok(Json(message))
}

/// GET /messages
pub async fn get_messages(State(state): State<AppState>) -> ServiceResult<Json<Vec<Message>>> {
    let messages = blocking(move || state.messages.get_all()).await?;
    Ok(Json(messages))
}

/// GET /messages/{message_id}: 200 with an empty body when absent.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> ServiceResult<Response> {
    let message = blocking(move || state.messages.get_by_id(message_id)).await?;

    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// DELETE /messages/{message_id}: 200 with the count, or an empty body when
/// nothing was deleted.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> ServiceResult<Response> {
    let deleted = blocking(move || state.messages.delete_by_id(message_id)).await?;

    if deleted > 0 {
        info!("Message {} deleted", message_id);
        Ok(Json(deleted).into_response())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

/// PATCH /messages/{message_id}
///
/// An unknown id answers 400, the same as invalid text.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    JsonBody(req): JsonBody<UpdateMessageRequest>,
) -> ServiceResult<Json<usize>> {
    let text = match req.text {
        Some(text) if is_valid_message_text(&text) => text,
        _ => return Err(ServiceError::invalid("Invalid message text")),
    };

    let updated = blocking(move || state.messages.update_text(message_id, &text)).await?;
    if updated == 0 {
        return Err(ServiceError::invalid("Message update failed"));
    }

    info!("Message {} updated", message_id);
    Ok(Json(updated))
}

/// GET /accounts/{account_id}/messages
pub async fn get_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> ServiceResult<Json<Vec<Message>>> {
    let messages = blocking(move || state.messages.get_all_by_author(account_id)).await?;
    Ok(Json(messages))
}
