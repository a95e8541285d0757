//! Task tracking backed by a local SQLite store.
//!
//! Two components make up the core: [`db::TaskStore`] owns the single-table
//! schema and its CRUD surface, and [`import::import_tasks`] merges external
//! comma-delimited batches into a store, resolving id collisions through a
//! caller-supplied decision.

pub mod db;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::{Error, Result};
