use serde::{Deserialize, Serialize};

use crate::CatalogEntry;

/// A named snapshot of a past roster.
///
/// The entries are a deep copy taken at save time, never a live reference to
/// the active roster, and the snapshot is immutable after creation: it can be
/// loaded back or deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTeam {
    pub name: String,
    pub pokemon: Vec<CatalogEntry>,
    /// Human-readable local timestamp captured when the team was saved.
    pub saved_at: String,
}

impl SavedTeam {
    pub fn member_names(&self) -> Vec<&str> {
        self.pokemon.iter().map(|entry| entry.name.as_str()).collect()
    }
}
