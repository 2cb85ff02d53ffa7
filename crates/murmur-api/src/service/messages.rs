use std::sync::Arc;

use murmur_db::{AccountStore, MessageStore};
use murmur_types::models::{Message, NewMessage, is_valid_message_text};
use tracing::{debug, error};

use crate::error::{ServiceError, ServiceResult};

pub struct MessageService {
    messages: Arc<dyn MessageStore>,
    accounts: Arc<dyn AccountStore>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { messages, accounts }
    }

    pub fn create(&self, candidate: NewMessage) -> ServiceResult<Message> {
        if !is_valid_message_text(&candidate.text) {
            return Err(ServiceError::invalid("Message text is invalid"));
        }

        let Some(posted_by) = candidate.posted_by else {
            return Err(unknown_author());
        };
        if !self.accounts.account_exists_by_id(posted_by)? {
            return Err(unknown_author());
        }

        let row = self
            .messages
            .insert_message(posted_by, &candidate.text, candidate.time_posted_epoch)?;

        debug!("Created message {} by account {}", row.message_id, posted_by);
        Ok(row.into())
    }

    /// Every message, oldest first.
    pub fn get_all(&self) -> ServiceResult<Vec<Message>> {
        Ok(self
            .messages
            .find_all_messages()?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    pub fn get_by_id(&self, id: i64) -> ServiceResult<Option<Message>> {
        Ok(self.messages.find_message_by_id(id)?.map(Message::from))
    }

    /// Returns 1 if a message was removed, 0 if there was none.
    pub fn delete_by_id(&self, id: i64) -> ServiceResult<usize> {
        let deleted = self.messages.delete_message_by_id(id)?;
        debug!("Delete message {}: {} row(s)", id, deleted);
        Ok(deleted)
    }

    /// Returns 0 when no message has this id. Storage failures during the
    /// update surface as `Internal`.
    pub fn update_text(&self, id: i64, new_text: &str) -> ServiceResult<usize> {
        if !is_valid_message_text(new_text) {
            return Err(ServiceError::invalid("Message text is invalid"));
        }

        self.messages
            .update_message_text_by_id(id, new_text)
            .map_err(|e| {
                error!("Update of message {} failed: {}", id, e);
                ServiceError::Internal("Internal server error during update".into())
            })
    }

    /// Messages posted by `account_id`, oldest first. The account itself is
    /// not looked up; an unknown id yields an empty list.
    pub fn get_all_by_author(&self, account_id: i64) -> ServiceResult<Vec<Message>> {
        Ok(self
            .messages
            .find_messages_by_posted_by(account_id)?
            .into_iter()
            .map(Message::from)
            .collect())
    }
}

fn unknown_author() -> ServiceError {
    ServiceError::invalid("PostedBy user does not exist")
}
