use serde::{Deserialize, Serialize};

/// A tracked task row.
///
/// `id` is assigned by the store on creation and stays stable for the life
/// of the row. The only way an incoming record lands at a chosen id is the
/// replace path during import; every other insert gets a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    /// Open set. The presentation layer suggests [`SUGGESTED_CATEGORIES`]
    /// but storage accepts any text.
    pub category: String,
    pub completed: bool,
}

/// Categories offered by the presentation layer. Not enforced by storage.
pub const SUGGESTED_CATEGORIES: &[&str] = &["Work", "Personal", "Other", "Miscellaneous"];
