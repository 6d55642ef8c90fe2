//! SQLite plumbing behind [`crate::storage::SqliteStorage`].

mod connection;
pub mod migrations;

pub use connection::Database;
