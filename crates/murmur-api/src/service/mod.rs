//! Business rules for accounts and messages, independent of HTTP.
//!
//! Services are synchronous and hold nothing but handles to the storage
//! gateway; callers on the async runtime go through `state::blocking`.

mod accounts;
mod messages;

pub use accounts::AccountService;
pub use messages::MessageService;
