//! Domain models for taskdeck.
//!
//! [`Task`] is the sole persisted entity: one row with a store-assigned id,
//! a name, an open-set category, and a completion flag. There are no other
//! entities and no relationships between rows.

mod task;

pub use task::*;
