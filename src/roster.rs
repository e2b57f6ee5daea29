use schema::{CatalogEntry, SavedTeam};
use tracing::debug;

use crate::errors::{RosterError, RosterResult};
use crate::storage::{KeyValueStore, SnapshotStore};

/// Hard cap on roster size.
pub const MAX_ROSTER_SIZE: usize = 6;

/// Owner of the active roster and the saved-team collection.
///
/// Constructed once per session, restoring both persisted values from the
/// snapshot store. All mutation goes through the operations here; each one
/// writes the snapshot back through the store before returning, so an
/// interrupted session never loses a committed operation.
#[derive(Debug)]
pub struct RosterManager<S: KeyValueStore> {
    roster: Vec<CatalogEntry>,
    saved_teams: Vec<SavedTeam>,
    store: SnapshotStore<S>,
}

impl<S: KeyValueStore> RosterManager<S> {
    /// Restore the previous session's roster and saved teams from `store`.
    pub fn new(store: S) -> Self {
        let store = SnapshotStore::new(store);
        let snapshot = store.load();
        debug!(
            "restored roster with {} entries and {} saved teams",
            snapshot.roster.len(),
            snapshot.saved_teams.len()
        );
        RosterManager {
            roster: snapshot.roster,
            saved_teams: snapshot.saved_teams,
            store,
        }
    }

    pub fn roster(&self) -> &[CatalogEntry] {
        &self.roster
    }

    pub fn saved_teams(&self) -> &[SavedTeam] {
        &self.saved_teams
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= MAX_ROSTER_SIZE
    }

    pub fn contains(&self, id: u32) -> bool {
        self.roster.iter().any(|entry| entry.id == id)
    }

    /// Append `entry` to the roster.
    ///
    /// A full roster is checked before a duplicate id: adding an entry that
    /// is both already present and over the cap reports `RosterFull`.
    pub fn add(&mut self, entry: &CatalogEntry) -> RosterResult<()> {
        if self.is_full() {
            return Err(RosterError::RosterFull);
        }
        if self.contains(entry.id) {
            return Err(RosterError::DuplicateEntry(entry.name.clone()));
        }

        self.roster.push(entry.clone());
        self.persist();
        Ok(())
    }

    /// Remove the entry with `id`, returning it so the caller can report
    /// what was removed. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: u32) -> Option<CatalogEntry> {
        let position = self.roster.iter().position(|entry| entry.id == id)?;
        let removed = self.roster.remove(position);
        self.persist();
        Some(removed)
    }

    /// Empty the roster unconditionally.
    pub fn clear(&mut self) {
        self.roster.clear();
        self.persist();
    }

    /// Snapshot the current roster under `name`.
    ///
    /// The name is trimmed before the emptiness and collision checks; the
    /// collision check is an exact, case-sensitive match against existing
    /// saved-team names. The snapshot is a deep copy of the roster.
    pub fn save_team(&mut self, name: &str) -> RosterResult<&SavedTeam> {
        if self.roster.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::NameRequired);
        }
        if self.saved_teams.iter().any(|team| team.name == name) {
            return Err(RosterError::NameExists(name.to_string()));
        }

        self.saved_teams.push(SavedTeam {
            name: name.to_string(),
            pokemon: self.roster.clone(),
            saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        self.persist();
        Ok(self.saved_teams.last().expect("just pushed"))
    }

    /// Replace the active roster wholesale with a copy of the named team.
    ///
    /// The snapshot carries entries by value, so no validation against the
    /// current catalog is needed.
    pub fn load_team(&mut self, name: &str) -> RosterResult<()> {
        let team = self
            .saved_teams
            .iter()
            .find(|team| team.name == name)
            .ok_or_else(|| RosterError::TeamNotFound(name.to_string()))?;

        self.roster = team.pokemon.clone();
        self.persist();
        Ok(())
    }

    /// Remove the named saved team; `None` when no such team exists.
    pub fn delete_team(&mut self, name: &str) -> Option<SavedTeam> {
        let position = self.saved_teams.iter().position(|team| team.name == name)?;
        let deleted = self.saved_teams.remove(position);
        self.persist();
        Some(deleted)
    }

    fn persist(&mut self) {
        self.store.save(&self.roster, &self.saved_teams);
    }

    /// The underlying store, for inspecting persisted state in tests.
    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        self.store.inner()
    }
}
