//! Storage gateway contracts used by the domain services.
//!
//! Every call is synchronous and commits before it returns. Listings come
//! back in insertion order.

use crate::DbResult;
use crate::models::{AccountRow, MessageRow};

pub trait AccountStore: Send + Sync {
    /// Inserts an account and returns it with the assigned id. A duplicate
    /// username fails with [`crate::DbError::UniqueViolation`].
    fn insert_account(&self, username: &str, password: &str) -> DbResult<AccountRow>;

    fn find_account_by_id(&self, id: i64) -> DbResult<Option<AccountRow>>;

    fn account_exists_by_id(&self, id: i64) -> DbResult<bool>;

    /// Returns the number of rows removed (0 or 1).
    fn delete_account_by_id(&self, id: i64) -> DbResult<usize>;

    fn find_all_accounts(&self) -> DbResult<Vec<AccountRow>>;

    fn find_account_by_username(&self, username: &str) -> DbResult<Option<AccountRow>>;

    /// Exact, case-sensitive match on both fields.
    fn find_account_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> DbResult<Option<AccountRow>>;
}

pub trait MessageStore: Send + Sync {
    fn insert_message(
        &self,
        posted_by: i64,
        text: &str,
        time_posted_epoch: i64,
    ) -> DbResult<MessageRow>;

    fn find_message_by_id(&self, id: i64) -> DbResult<Option<MessageRow>>;

    fn message_exists_by_id(&self, id: i64) -> DbResult<bool>;

    /// Returns the number of rows removed (0 or 1).
    fn delete_message_by_id(&self, id: i64) -> DbResult<usize>;

    fn find_all_messages(&self) -> DbResult<Vec<MessageRow>>;

    fn find_messages_by_posted_by(&self, account_id: i64) -> DbResult<Vec<MessageRow>>;

    /// Sets the text of one message in a single statement and returns the
    /// number of rows affected (0 when the id does not exist).
    fn update_message_text_by_id(&self, id: i64, text: &str) -> DbResult<usize>;
}
