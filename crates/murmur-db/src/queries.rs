use rusqlite::{Connection, OptionalExtension, Row};

use crate::models::{AccountRow, MessageRow};
use crate::store::{AccountStore, MessageStore};
use crate::{Database, DbResult};

const ACCOUNT_COLUMNS: &str = "account_id, username, password";
const MESSAGE_COLUMNS: &str = "message_id, posted_by, message_text, time_posted_epoch";

// -- Accounts --

impl AccountStore for Database {
    fn insert_account(&self, username: &str, password: &str) -> DbResult<AccountRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(AccountRow {
                account_id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    fn find_account_by_id(&self, id: i64) -> DbResult<Option<AccountRow>> {
        self.with_conn(|conn| query_account(conn, "account_id = ?1", (id,)))
    }

    fn account_exists_by_id(&self, id: i64) -> DbResult<bool> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM account WHERE account_id = ?1)",
                [id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    fn delete_account_by_id(&self, id: i64) -> DbResult<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM account WHERE account_id = ?1", [id])?))
    }

    fn find_all_accounts(&self) -> DbResult<Vec<AccountRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY account_id"
            ))?;
            let rows = stmt
                .query_map([], account_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn find_account_by_username(&self, username: &str) -> DbResult<Option<AccountRow>> {
        self.with_conn(|conn| query_account(conn, "username = ?1", (username,)))
    }

    fn find_account_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> DbResult<Option<AccountRow>> {
        self.with_conn(|conn| {
            query_account(conn, "username = ?1 AND password = ?2", (username, password))
        })
    }
}

// -- Messages --

impl MessageStore for Database {
    fn insert_message(
        &self,
        posted_by: i64,
        text: &str,
        time_posted_epoch: i64,
    ) -> DbResult<MessageRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, text, time_posted_epoch],
            )?;
            Ok(MessageRow {
                message_id: conn.last_insert_rowid(),
                posted_by,
                message_text: text.to_string(),
                time_posted_epoch,
            })
        })
    }

    fn find_message_by_id(&self, id: i64) -> DbResult<Option<MessageRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE message_id = ?1"),
                    [id],
                    message_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn message_exists_by_id(&self, id: i64) -> DbResult<bool> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM message WHERE message_id = ?1)",
                [id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    fn delete_message_by_id(&self, id: i64) -> DbResult<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM message WHERE message_id = ?1", [id])?))
    }

    fn find_all_messages(&self) -> DbResult<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM message ORDER BY message_id"
            ))?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn find_messages_by_posted_by(&self, account_id: i64) -> DbResult<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM message WHERE posted_by = ?1 ORDER BY message_id"
            ))?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn update_message_text_by_id(&self, id: i64, text: &str) -> DbResult<usize> {
        self.with_conn(|conn| {
            Ok(conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![text, id],
            )?)
        })
    }
}

fn query_account<P: rusqlite::Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> DbResult<Option<AccountRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM account WHERE {filter}"
    ))?;
    let row = stmt.query_row(params, account_from_row).optional()?;
    Ok(row)
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbError;

    fn db_with_account(username: &str) -> (Database, AccountRow) {
        let db = Database::open_in_memory().unwrap();
        let account = db.insert_account(username, "secret").unwrap();
        (db, account)
    }

    #[test]
    fn test_account_lookups() {
        let (db, alice) = db_with_account("alice");
        assert!(alice.account_id > 0);

        let found = db.find_account_by_username("alice").unwrap().unwrap();
        assert_eq!(found.account_id, alice.account_id);
        assert!(db.find_account_by_username("Alice").unwrap().is_none());

        assert!(db.find_account_by_username_and_password("alice", "secret").unwrap().is_some());
        assert!(db.find_account_by_username_and_password("alice", "Secret").unwrap().is_none());

        assert!(db.account_exists_by_id(alice.account_id).unwrap());
        assert!(!db.account_exists_by_id(alice.account_id + 1).unwrap());
        assert_eq!(db.find_account_by_id(alice.account_id).unwrap().unwrap().username, "alice");
    }

    #[test]
    fn test_duplicate_username_is_unique_violation() {
        let (db, _) = db_with_account("alice");
        let err = db.insert_account("alice", "other").unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation(_)), "got {err:?}");
    }

    #[test]
    fn test_delete_and_list_accounts() {
        let (db, alice) = db_with_account("alice");
        let bob = db.insert_account("bob", "secret").unwrap();

        let names: Vec<_> = db
            .find_all_accounts()
            .unwrap()
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);

        assert_eq!(db.delete_account_by_id(alice.account_id).unwrap(), 1);
        assert_eq!(db.delete_account_by_id(alice.account_id).unwrap(), 0);
        assert_eq!(db.find_all_accounts().unwrap().len(), 1);
        assert!(db.account_exists_by_id(bob.account_id).unwrap());
    }

    #[test]
    fn test_message_crud() {
        let (db, alice) = db_with_account("alice");

        let msg = db.insert_message(alice.account_id, "hello", 1_700_000_000).unwrap();
        assert!(db.message_exists_by_id(msg.message_id).unwrap());

        let fetched = db.find_message_by_id(msg.message_id).unwrap().unwrap();
        assert_eq!(fetched.message_text, "hello");
        assert_eq!(fetched.time_posted_epoch, 1_700_000_000);

        assert_eq!(db.update_message_text_by_id(msg.message_id, "edited").unwrap(), 1);
        assert_eq!(
            db.find_message_by_id(msg.message_id).unwrap().unwrap().message_text,
            "edited"
        );
        assert_eq!(db.update_message_text_by_id(msg.message_id + 100, "nope").unwrap(), 0);

        assert_eq!(db.delete_message_by_id(msg.message_id).unwrap(), 1);
        assert_eq!(db.delete_message_by_id(msg.message_id).unwrap(), 0);
        assert!(db.find_message_by_id(msg.message_id).unwrap().is_none());
    }

    #[test]
    fn test_messages_by_posted_by_in_insertion_order() {
        let (db, alice) = db_with_account("alice");
        let bob = db.insert_account("bob", "secret").unwrap();

        db.insert_message(alice.account_id, "a1", 1).unwrap();
        db.insert_message(bob.account_id, "b1", 2).unwrap();
        db.insert_message(alice.account_id, "a2", 3).unwrap();

        let texts: Vec<_> = db
            .find_messages_by_posted_by(alice.account_id)
            .unwrap()
            .into_iter()
            .map(|m| m.message_text)
            .collect();
        assert_eq!(texts, vec!["a1", "a2"]);
        assert_eq!(db.find_all_messages().unwrap().len(), 3);
        assert!(db.find_messages_by_posted_by(999).unwrap().is_empty());
    }

    #[test]
    fn test_message_requires_existing_author() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.insert_message(42, "orphan", 0).is_err());
    }
}
