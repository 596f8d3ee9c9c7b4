//! Storage adapters for the web frontend.

mod sqlite;

pub use sqlite::SqliteStore;
