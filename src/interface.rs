//! Display and command-handling functions shared by the CLI walkthrough and
//! the MCP server. Everything here renders library results as plain text;
//! the roster and catalog logic lives in the other modules.

use schema::CatalogEntry;

use crate::analytics::{average_stats, weakness_histogram};
use crate::catalog::{entry_details, find_by_name};
use crate::filter::{filter_catalog, observed_types, TypeSelector};
use crate::notifications::Notification;
use crate::roster::{RosterManager, MAX_ROSTER_SIZE};
use crate::storage::KeyValueStore;

/// One catalog entry as a single summary line.
fn entry_line(entry: &CatalogEntry) -> String {
    let types = entry.type_tags().collect::<Vec<_>>().join("/");
    format!(
        "#{:03} {} [{}] (total {})",
        entry.pokedex_number,
        entry.name,
        types,
        entry.base_stats.total()
    )
}

/// Returns formatted search results with the visible/total counter.
pub fn search_results_display(
    catalog: &[CatalogEntry],
    query: &str,
    selector: &TypeSelector,
) -> String {
    let visible = filter_catalog(catalog, query, selector);
    if visible.is_empty() {
        return String::from("No Pokemon found. Try adjusting your search or filter criteria.");
    }

    let mut output = format!("Showing {} of {} Pokemon:\n", visible.len(), catalog.len());
    for entry in visible {
        output.push_str(&format!("  {}\n", entry_line(entry)));
    }
    output
}

/// Returns the selectable type filter options, "all" first.
pub fn type_options_display(catalog: &[CatalogEntry]) -> String {
    let mut output = String::from("Type filters: all");
    for tag in observed_types(catalog) {
        output.push_str(&format!(", {}", tag));
    }
    output
}

/// Returns the full detail view of a single entry.
pub fn entry_details_display(entry: &CatalogEntry) -> String {
    let details = entry_details(entry);
    let mut output = format!("--- {} ---\n{}\n", entry_line(entry), details.description);

    output.push_str("Base Stats:\n");
    for (label, value) in entry.base_stats.labeled() {
        output.push_str(&format!("  {}: {}\n", label, value));
    }

    if details.evolution_chain.len() > 1 {
        output.push_str(&format!(
            "Evolution Chain: {}\n",
            details.evolution_chain.join(" -> ")
        ));
    }

    if !details.moves.is_empty() {
        output.push_str(&format!("Moves: {}\n", details.moves.join(", ")));
    }

    output
}

/// Returns the team view: slots, average stats, and the weakness histogram.
pub fn team_status_display<S: KeyValueStore>(manager: &RosterManager<S>) -> String {
    let roster = manager.roster();
    let mut output = format!("--- My Team ({}/{}) ---\n", roster.len(), MAX_ROSTER_SIZE);

    if roster.is_empty() {
        output.push_str("Your team is empty. Add Pokemon from the catalog.\n");
        return output;
    }

    for entry in roster {
        output.push_str(&format!("  {}\n", entry_line(entry)));
    }
    for _ in roster.len()..MAX_ROSTER_SIZE {
        output.push_str("  (empty slot)\n");
    }

    output.push_str("\nTeam Average Stats:\n");
    match average_stats(roster) {
        Some(averages) => {
            for (label, value) in averages.labeled() {
                output.push_str(&format!("  {}: {}\n", label, value));
            }
        }
        None => output.push_str("  not applicable\n"),
    }

    let weaknesses = weakness_histogram(roster);
    if !weaknesses.is_empty() {
        output.push_str("\nTeam Weaknesses:\n");
        for (pokemon_type, count) in weaknesses {
            output.push_str(&format!("  {}: {}x\n", pokemon_type, count));
        }
    }

    output
}

/// Returns the saved-team listing with member names and save dates.
pub fn saved_teams_display<S: KeyValueStore>(manager: &RosterManager<S>) -> String {
    let teams = manager.saved_teams();
    if teams.is_empty() {
        return String::from("No saved teams yet.");
    }

    let mut output = String::from("Saved Teams:\n");
    for team in teams {
        output.push_str(&format!(
            "  {} (saved on {}): {}\n",
            team.name,
            team.saved_at,
            team.member_names().join(", ")
        ));
    }
    output
}

/// Adds the named catalog entry to the team, reporting the outcome.
pub fn handle_add_command<S: KeyValueStore>(
    manager: &mut RosterManager<S>,
    catalog: &[CatalogEntry],
    name: &str,
) -> String {
    let Some(entry) = find_by_name(catalog, name) else {
        return format!("'{}' was not found in the catalog.", name);
    };

    match manager.add(entry) {
        Ok(()) => Notification::success(
            "Added to team",
            format!("{} was added to your team.", entry.name),
        )
        .to_string(),
        Err(e) => Notification::from(&e).to_string(),
    }
}

/// Removes the named entry from the team, reporting the outcome.
pub fn handle_remove_command<S: KeyValueStore>(
    manager: &mut RosterManager<S>,
    name: &str,
) -> String {
    let id = manager
        .roster()
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
        .map(|entry| entry.id);

    match id.and_then(|id| manager.remove(id)) {
        Some(removed) => Notification::info(
            "Removed from team",
            format!("{} was removed from your team.", removed.name),
        )
        .to_string(),
        None => format!("'{}' is not on your team.", name),
    }
}

/// Clears the team unconditionally.
pub fn handle_clear_command<S: KeyValueStore>(manager: &mut RosterManager<S>) -> String {
    manager.clear();
    Notification::info("Team cleared", "Your team has been cleared.").to_string()
}

/// Saves the current team under `name`, reporting the outcome.
pub fn handle_save_command<S: KeyValueStore>(manager: &mut RosterManager<S>, name: &str) -> String {
    match manager.save_team(name) {
        Ok(team) => Notification::success(
            "Team saved",
            format!("Your team \"{}\" has been saved.", team.name),
        )
        .to_string(),
        Err(e) => Notification::from(&e).to_string(),
    }
}

/// Loads the named saved team as the active roster, reporting the outcome.
pub fn handle_load_command<S: KeyValueStore>(manager: &mut RosterManager<S>, name: &str) -> String {
    match manager.load_team(name) {
        Ok(()) => Notification::success(
            "Team loaded",
            format!("Team \"{}\" has been loaded.", name),
        )
        .to_string(),
        Err(e) => Notification::from(&e).to_string(),
    }
}

/// Deletes the named saved team, reporting the outcome.
pub fn handle_delete_command<S: KeyValueStore>(
    manager: &mut RosterManager<S>,
    name: &str,
) -> String {
    match manager.delete_team(name) {
        Some(team) => Notification::success(
            "Team deleted",
            format!("Team \"{}\" has been deleted.", team.name),
        )
        .to_string(),
        None => Notification::from(&crate::errors::RosterError::TeamNotFound(name.to_string()))
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use schema::BaseStats;

    use super::*;
    use crate::storage::MemoryStore;

    fn entry(id: u32, name: &str, primary: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            pokedex_number: id as u16,
            primary_type: primary.to_string(),
            secondary_type: None,
            base_stats: BaseStats::default(),
            previous_evolution: None,
            next_evolution: None,
            moves: None,
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry(4, "Charmander", "Fire"),
            entry(7, "Squirtle", "Water"),
        ]
    }

    #[test]
    fn search_display_reports_visible_of_total() {
        let output = search_results_display(&catalog(), "char", &TypeSelector::All);
        assert!(output.starts_with("Showing 1 of 2 Pokemon:"));
        assert!(output.contains("Charmander"));
    }

    #[test]
    fn search_display_has_a_no_results_message() {
        let output = search_results_display(&catalog(), "mew", &TypeSelector::All);
        assert_eq!(
            output,
            "No Pokemon found. Try adjusting your search or filter criteria."
        );
    }

    #[test]
    fn add_and_remove_report_notifications() {
        let catalog = catalog();
        let mut manager = RosterManager::new(MemoryStore::new());

        let added = handle_add_command(&mut manager, &catalog, "charmander");
        assert_eq!(added, "Added to team: Charmander was added to your team.");

        let removed = handle_remove_command(&mut manager, "Charmander");
        assert_eq!(
            removed,
            "Removed from team: Charmander was removed from your team."
        );
        assert!(manager.roster().is_empty());
    }

    #[test]
    fn add_of_an_unknown_name_reports_a_lookup_failure() {
        let mut manager = RosterManager::new(MemoryStore::new());
        let output = handle_add_command(&mut manager, &catalog(), "Mewtwo");
        assert_eq!(output, "'Mewtwo' was not found in the catalog.");
    }

    #[test]
    fn team_status_shows_empty_slots_and_not_applicable_averages() {
        let manager = RosterManager::new(MemoryStore::new());
        let output = team_status_display(&manager);
        assert!(output.contains("My Team (0/6)"));
        assert!(output.contains("Your team is empty"));

        let mut manager = manager;
        manager.add(&catalog()[0]).unwrap();
        let output = team_status_display(&manager);
        assert!(output.contains("My Team (1/6)"));
        assert_eq!(output.matches("(empty slot)").count(), 5);
        assert!(output.contains("Team Average Stats"));
    }

    #[test]
    fn save_load_delete_report_their_outcomes() {
        let catalog = catalog();
        let mut manager = RosterManager::new(MemoryStore::new());
        handle_add_command(&mut manager, &catalog, "Squirtle");

        assert_eq!(
            handle_save_command(&mut manager, "Solo"),
            "Team saved: Your team \"Solo\" has been saved."
        );
        assert_eq!(
            handle_save_command(&mut manager, "Solo"),
            "Team name exists: A team with this name already exists. Please choose a different name."
        );
        assert_eq!(
            handle_load_command(&mut manager, "Solo"),
            "Team loaded: Team \"Solo\" has been loaded."
        );
        assert_eq!(
            handle_delete_command(&mut manager, "Solo"),
            "Team deleted: Team \"Solo\" has been deleted."
        );
        assert_eq!(
            handle_delete_command(&mut manager, "Solo"),
            "Team not found: There is no saved team named \"Solo\"."
        );
    }
}
