use serde::{Deserialize, Serialize};

/// Longest message text accepted on create and update, in characters.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Shortest password accepted at registration, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

/// A registered account. The password is stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(alias = "accountId")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(alias = "messageId")]
    pub id: i64,
    #[serde(alias = "messageText")]
    pub text: String,
    pub posted_by: i64,
    pub time_posted_epoch: i64,
}

/// Account fields supplied at registration, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

/// Message fields supplied on create. `posted_by` is checked against
/// existing accounts by the message service.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub text: String,
    pub posted_by: Option<i64>,
    pub time_posted_epoch: i64,
}

/// True when the string is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Message text rule shared by create and update: non-blank, at most
/// [`MAX_MESSAGE_LEN`] characters.
pub fn is_valid_message_text(text: &str) -> bool {
    !is_blank(text) && text.chars().count() <= MAX_MESSAGE_LEN
}

/// Registration rule: non-blank username, password of at least
/// [`MIN_PASSWORD_LEN`] characters.
pub fn is_valid_registration(username: &str, password: &str) -> bool {
    !is_blank(username) && password.chars().count() >= MIN_PASSWORD_LEN
}
