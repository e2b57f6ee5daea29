//! Pokemon Team Builder
//!
//! A catalog browser and roster manager: filter a Pokemon catalog, assemble
//! a team of up to six entries, persist named rosters between sessions, and
//! derive aggregate team statistics. The presentation layer lives in the
//! binaries; this crate owns all state and rules.

// --- MODULE DECLARATIONS ---
pub mod analytics;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod interface;
pub mod notifications;
pub mod roster;
pub mod storage;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, CatalogEntry, EntryDetails, PokemonType, SavedTeam};

// --- From this crate's modules (`src/`) ---

// Derived views over the roster and catalog.
pub use analytics::{average_stats, weakness_histogram};
pub use catalog::{entry_details, fetch_catalog, find_by_name, load_catalog_file};
pub use filter::{filter_catalog, observed_types, TypeSelector};

// Core runtime types for a session.
pub use config::AppConfig;
pub use notifications::{Notification, Severity};
pub use roster::{RosterManager, MAX_ROSTER_SIZE};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Crate-specific error and result types.
pub use errors::{
    CatalogError, CatalogResult, ConfigError, RosterError, RosterResult, StorageError,
    StorageResult, TeamBuilderError, TeamBuilderResult,
};
