//! `SeaORM` entities for `SqliteStore`.

pub(crate) mod config;
pub(crate) mod domain;
