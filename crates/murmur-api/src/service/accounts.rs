use std::sync::Arc;

use murmur_db::{AccountStore, DbError};
use murmur_types::models::{Account, NewAccount, is_valid_registration};
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// True iff an account with exactly this username exists.
    pub fn exists(&self, username: &str) -> ServiceResult<bool> {
        Ok(self.store.find_account_by_username(username)?.is_some())
    }

    pub fn register(&self, candidate: NewAccount) -> ServiceResult<Account> {
        if !is_valid_registration(&candidate.username, &candidate.password) {
            return Err(ServiceError::invalid("Username or password is invalid"));
        }

        if self.exists(&candidate.username)? {
            return Err(username_taken());
        }

        // The UNIQUE constraint settles a registration racing this one
        let row = self
            .store
            .insert_account(&candidate.username, &candidate.password)
            .map_err(|e| match e {
                DbError::UniqueViolation(_) => username_taken(),
                other => other.into(),
            })?;

        debug!("Registered account {} ({})", row.account_id, row.username);
        Ok(row.into())
    }

    /// Plain equality on both fields.
    pub fn login(&self, username: &str, password: &str) -> ServiceResult<Account> {
        self.store
            .find_account_by_username_and_password(username, password)?
            .map(Account::from)
            .ok_or_else(|| ServiceError::Unauthorized("Invalid username or password".into()))
    }
}

fn username_taken() -> ServiceError {
    ServiceError::Conflict("Username already exists".into())
}
