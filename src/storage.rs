use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use schema::{CatalogEntry, SavedTeam};
use tracing::warn;

use crate::errors::{StorageError, StorageResult};

/// Storage key for the active roster snapshot.
pub const ROSTER_KEY: &str = "pokemon_team";
/// Storage key for the saved-team collection.
pub const SAVED_TEAMS_KEY: &str = "saved_pokemon_teams";

/// A minimal string key-value store, the only durability primitive the
/// team builder relies on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// File-backed store: one JSON file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("{}: {}", path.display(), e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("{}: {}", self.root.display(), e)))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| StorageError::Io(format!("{}: {}", path.display(), e)))
    }
}

/// In-memory store used by tests and the offline walkthrough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Raw stored value, for asserting on write-through behavior in tests.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Seed a value before the manager restores from the store.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two independently persisted values, as restored at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub roster: Vec<CatalogEntry>,
    pub saved_teams: Vec<SavedTeam>,
}

/// Typed layer over a [`KeyValueStore`] holding the JSON-serialized roster
/// and saved-team collection.
///
/// Persistence here is best-effort client-side caching: a value that is
/// absent or fails to parse is treated as "no prior data", and a failed write
/// is swallowed after logging. Neither case is ever surfaced to the user.
#[derive(Debug)]
pub struct SnapshotStore<S> {
    inner: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(inner: S) -> Self {
        SnapshotStore { inner }
    }

    pub fn load(&self) -> Snapshot {
        Snapshot {
            roster: self.load_value(ROSTER_KEY),
            saved_teams: self.load_value(SAVED_TEAMS_KEY),
        }
    }

    pub fn save(&mut self, roster: &[CatalogEntry], saved_teams: &[SavedTeam]) {
        self.save_value(ROSTER_KEY, roster);
        self.save_value(SAVED_TEAMS_KEY, saved_teams);
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn load_value<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.inner.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!("failed to read stored value for {}: {}", key, e);
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("stored value for {} is not valid, starting empty: {}", key, e);
                T::default()
            }
        }
    }

    fn save_value<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize value for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.inner.set(key, &raw) {
            warn!("failed to persist value for {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use schema::BaseStats;

    use super::*;

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            pokedex_number: id as u16,
            primary_type: "Normal".to_string(),
            secondary_type: None,
            base_stats: BaseStats::default(),
            previous_evolution: None,
            next_evolution: None,
            moves: None,
        }
    }

    #[test]
    fn load_returns_empty_defaults_when_nothing_is_stored() {
        let store = SnapshotStore::new(MemoryStore::new());
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn save_then_load_round_trips_both_values() {
        let mut store = SnapshotStore::new(MemoryStore::new());
        let roster = vec![entry(25, "Pikachu")];
        let teams = vec![SavedTeam {
            name: "Solo".to_string(),
            pokemon: roster.clone(),
            saved_at: "2026-08-25 12:00:00".to_string(),
        }];

        store.save(&roster, &teams);
        let snapshot = store.load();
        assert_eq!(snapshot.roster, roster);
        assert_eq!(snapshot.saved_teams, teams);
    }

    #[test]
    fn corrupt_roster_value_falls_back_to_empty() {
        let mut inner = MemoryStore::new();
        inner.seed(ROSTER_KEY, "not json at all {{{");
        inner.seed(SAVED_TEAMS_KEY, "[]");

        let store = SnapshotStore::new(inner);
        let snapshot = store.load();
        assert!(snapshot.roster.is_empty());
        assert!(snapshot.saved_teams.is_empty());
    }

    #[test]
    fn foreign_shaped_value_is_treated_as_absent() {
        let mut inner = MemoryStore::new();
        // Valid JSON, wrong shape.
        inner.seed(ROSTER_KEY, r#"{"someone": "else's data"}"#);

        let store = SnapshotStore::new(inner);
        assert!(store.load().roster.is_empty());
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = FileStore::new(dir.path().join("team-builder"));

        assert_eq!(store.get(ROSTER_KEY).unwrap(), None);
        store.set(ROSTER_KEY, "[]").unwrap();
        assert_eq!(store.get(ROSTER_KEY).unwrap().as_deref(), Some("[]"));
    }
}
