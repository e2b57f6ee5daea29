use std::fs;
use std::path::Path;

use schema::{CatalogEntry, EntryDetails};
use tracing::{debug, info};

use crate::errors::{CatalogError, CatalogResult};

/// Fetch the full catalog from the configured endpoint.
///
/// A single GET at startup; the catalog is session-static afterwards. A
/// non-success status or an unparseable body is an error the caller degrades
/// to an empty catalog plus a user-visible notification.
pub async fn fetch_catalog(endpoint: &str) -> CatalogResult<Vec<CatalogEntry>> {
    debug!("fetching catalog from {}", endpoint);
    let response = reqwest::get(endpoint)
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Http(status.as_u16()));
    }

    let catalog: Vec<CatalogEntry> = response
        .json()
        .await
        .map_err(|e| CatalogError::Parse(e.to_string()))?;

    info!("loaded {} catalog entries from {}", catalog.len(), endpoint);
    Ok(catalog)
}

/// Load a catalog from a local RON file, used by the offline walkthrough and
/// as the fallback dataset when no endpoint is configured.
pub fn load_catalog_file(path: &Path) -> CatalogResult<Vec<CatalogEntry>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
    // The bundled catalog mirrors the HTTP catalog's JSON shape, writing
    // optional fields as bare values; implicit_some lets those parse.
    let catalog: Vec<CatalogEntry> = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(&raw)
        .map_err(|e| CatalogError::Parse(e.to_string()))?;

    info!("loaded {} catalog entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Case-insensitive exact-name lookup, for the name-oriented interface.
pub fn find_by_name<'a>(catalog: &'a [CatalogEntry], name: &str) -> Option<&'a CatalogEntry> {
    catalog
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
}

/// Derive the detail view of an entry: description line, evolution chain,
/// and formatted move list. Pure; the catalog carries only the raw fields.
pub fn entry_details(entry: &CatalogEntry) -> EntryDetails {
    let description = match &entry.secondary_type {
        Some(secondary) => format!(
            "{} is a {}/{} type Pokemon.",
            entry.name, entry.primary_type, secondary
        ),
        None => format!("{} is a {} type Pokemon.", entry.name, entry.primary_type),
    };

    let evolution_chain = [
        entry.previous_evolution.as_deref(),
        Some(entry.name.as_str()),
        entry.next_evolution.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect();

    let moves = entry
        .moves
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(format_move_name)
        .collect();

    EntryDetails {
        description,
        evolution_chain,
        moves,
    }
}

/// Turn a raw move tag like "vine-whip" into "Vine Whip".
pub fn format_move_name(raw: &str) -> String {
    raw.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::BaseStats;

    use super::*;

    fn bulbasaur() -> CatalogEntry {
        CatalogEntry {
            id: 1,
            name: "Bulbasaur".to_string(),
            pokedex_number: 1,
            primary_type: "Grass".to_string(),
            secondary_type: Some("Poison".to_string()),
            base_stats: BaseStats::default(),
            previous_evolution: None,
            next_evolution: Some("Ivysaur".to_string()),
            moves: Some("tackle, vine-whip, razor-leaf".to_string()),
        }
    }

    #[test]
    fn details_describe_dual_types() {
        let details = entry_details(&bulbasaur());
        assert_eq!(details.description, "Bulbasaur is a Grass/Poison type Pokemon.");
    }

    #[test]
    fn evolution_chain_skips_absent_links() {
        let details = entry_details(&bulbasaur());
        assert_eq!(details.evolution_chain, vec!["Bulbasaur", "Ivysaur"]);
    }

    #[test]
    fn moves_are_split_and_formatted() {
        let details = entry_details(&bulbasaur());
        assert_eq!(details.moves, vec!["Tackle", "Vine Whip", "Razor Leaf"]);
    }

    #[test]
    fn missing_move_list_yields_no_moves() {
        let mut entry = bulbasaur();
        entry.moves = None;
        assert!(entry_details(&entry).moves.is_empty());
    }

    #[rstest]
    #[case("vine-whip", "Vine Whip")]
    #[case("tackle", "Tackle")]
    #[case("SOLAR-BEAM", "Solar Beam")]
    fn move_names_title_case_hyphenated_words(#[case] raw: &str, #[case] formatted: &str) {
        assert_eq!(format_move_name(raw), formatted);
    }

    #[test]
    fn find_by_name_ignores_case_and_padding() {
        let catalog = vec![bulbasaur()];
        assert!(find_by_name(&catalog, "bulbasaur").is_some());
        assert!(find_by_name(&catalog, " BULBASAUR ").is_some());
        assert!(find_by_name(&catalog, "Ivysaur").is_none());
    }

    #[test]
    fn ron_catalog_files_parse() {
        let raw = r#"[
            {
                "id": 25,
                "name": "Pikachu",
                "pokedex_number": 25,
                "primary_type": "Electric",
                "base_hp": 35,
                "base_attack": 55,
                "base_defense": 40,
                "base_special_attack": 50,
                "base_special_defense": 50,
                "base_speed": 90,
                "next_evolution": "Raichu",
                "moves": "thunder-shock, quick-attack",
            },
        ]"#;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.ron");
        fs::write(&path, raw).expect("write catalog");

        let catalog = load_catalog_file(&path).expect("catalog should parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Pikachu");
        assert_eq!(catalog[0].base_stats.speed, 90);
    }

    #[test]
    fn unreadable_catalog_file_is_an_io_error() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
