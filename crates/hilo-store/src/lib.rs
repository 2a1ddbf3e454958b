//! Storage backends for the hilo observation store contract
//!
//! The production backend reads an existing SQLite dataset file. The schema
//! is created by an upstream loading step — nothing here migrates or
//! mutates it.

pub mod client;
pub mod memory;
pub mod queries;
pub mod schema;

pub use client::*;
pub use memory::*;
pub use schema::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
