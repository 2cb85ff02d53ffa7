use serde::Deserialize;

// -- Accounts --

/// Body of `POST /register` and `POST /login`.
///
/// Fields are optional so that a missing username or password reaches the
/// handler's own validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// -- Messages --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[serde(default, alias = "messageText")]
    pub text: Option<String>,
    #[serde(default)]
    pub posted_by: Option<i64>,
    /// Defaults to the current time when absent.
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(default, alias = "messageText")]
    pub text: Option<String>,
}
