use pokemon_team_builder::interface::{
    handle_add_command, handle_load_command, handle_save_command, saved_teams_display,
    search_results_display, team_status_display, type_options_display,
};
use pokemon_team_builder::{
    load_catalog_file, AppConfig, MemoryStore, RosterManager, TypeSelector,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading configuration: {}", e);
            return;
        }
    };

    // Offline walkthrough: load the bundled catalog rather than fetching.
    let catalog = match load_catalog_file(&config.catalog_file) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("Error loading catalog: {}", e);
            return;
        }
    };
    println!("Loaded {} catalog entries", catalog.len());
    println!("{}", type_options_display(&catalog));
    println!();

    // Example 1: filter the catalog by name and type.
    println!("{}", search_results_display(&catalog, "char", &TypeSelector::All));
    println!(
        "{}",
        search_results_display(&catalog, "", &TypeSelector::parse("Water"))
    );

    // Example 2: build a team. The walkthrough session is throwaway, so it
    // runs against an in-memory store instead of the configured directory.
    let mut manager = RosterManager::new(MemoryStore::new());
    for name in ["Bulbasaur", "Charmander", "Squirtle", "Pikachu"] {
        println!("{}", handle_add_command(&mut manager, &catalog, name));
    }
    // A duplicate add reports an error without changing the team.
    println!("{}", handle_add_command(&mut manager, &catalog, "Pikachu"));
    println!();

    // Example 3: team status with average stats and the weakness histogram.
    println!("{}", team_status_display(&manager));

    // Example 4: save, reload, and list named teams.
    println!("{}", handle_save_command(&mut manager, "Kanto Core"));
    manager.clear();
    println!("{}", handle_load_command(&mut manager, "Kanto Core"));
    println!("{}", saved_teams_display(&manager));
}
