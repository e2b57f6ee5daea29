use serde::{Deserialize, Serialize};

/// The six base stat dimensions carried by every catalog entry.
///
/// Flattened into the wire shape as `base_hp`, `base_attack`, and so on,
/// matching the catalog endpoint's JSON field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "base_hp")]
    pub hp: u16,
    #[serde(rename = "base_attack")]
    pub attack: u16,
    #[serde(rename = "base_defense")]
    pub defense: u16,
    #[serde(rename = "base_special_attack")]
    pub sp_attack: u16,
    #[serde(rename = "base_special_defense")]
    pub sp_defense: u16,
    #[serde(rename = "base_speed")]
    pub speed: u16,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }

    /// The stat dimensions paired with display labels, in canonical order.
    pub fn labeled(&self) -> [(&'static str, u16); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Special Attack", self.sp_attack),
            ("Special Defense", self.sp_defense),
            ("Speed", self.speed),
        ]
    }
}

/// One entry of the session-static Pokemon catalog.
///
/// Type tags are kept as the raw strings the catalog supplied rather than
/// parsed enums, so an entry with a tag this build does not recognize still
/// loads, filters, and joins a roster; only the weakness analytics skip it.
/// Roster membership stores a denormalized copy of this struct, so saved
/// teams stay loadable even if the catalog changes between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "pokemon_id")]
    pub id: u32,
    pub name: String,
    pub pokedex_number: u16,
    pub primary_type: String,
    #[serde(default)]
    pub secondary_type: Option<String>,
    #[serde(flatten)]
    pub base_stats: BaseStats,
    #[serde(default)]
    pub previous_evolution: Option<String>,
    #[serde(default)]
    pub next_evolution: Option<String>,
    /// Comma-joined move names as delivered by the catalog; split and
    /// formatted on demand by the details derivation.
    #[serde(default)]
    pub moves: Option<String>,
}

impl CatalogEntry {
    /// Primary and secondary tags in slot order, secondary skipped when absent.
    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_type.as_str())
            .chain(self.secondary_type.as_deref())
            .filter(|tag| !tag.is_empty())
    }
}

/// Derived per-entry detail view, computed on demand from a [`CatalogEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetails {
    pub description: String,
    pub evolution_chain: Vec<String>,
    pub moves: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry {
            id: 1,
            name: "Bulbasaur".to_string(),
            pokedex_number: 1,
            primary_type: "Grass".to_string(),
            secondary_type: Some("Poison".to_string()),
            base_stats: BaseStats {
                hp: 45,
                attack: 49,
                defense: 49,
                sp_attack: 65,
                sp_defense: 65,
                speed: 45,
            },
            previous_evolution: None,
            next_evolution: Some("Ivysaur".to_string()),
            moves: Some("tackle, vine-whip".to_string()),
        }
    }

    #[test]
    fn stat_total_sums_all_six_dimensions() {
        assert_eq!(sample_entry().base_stats.total(), 318);
    }

    #[test]
    fn type_tags_skip_missing_secondary() {
        let mut entry = sample_entry();
        assert_eq!(entry.type_tags().collect::<Vec<_>>(), vec!["Grass", "Poison"]);

        entry.secondary_type = None;
        assert_eq!(entry.type_tags().collect::<Vec<_>>(), vec!["Grass"]);
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let json = r#"{
            "pokemon_id": 4,
            "name": "Charmander",
            "pokedex_number": 4,
            "primary_type": "Fire",
            "secondary_type": null,
            "base_hp": 39,
            "base_attack": 52,
            "base_defense": 43,
            "base_special_attack": 60,
            "base_special_defense": 50,
            "base_speed": 65,
            "total_stats": 309,
            "previous_evolution": null,
            "next_evolution": "Charmeleon",
            "moves": "scratch, ember"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).expect("wire shape should parse");
        assert_eq!(entry.id, 4);
        assert_eq!(entry.base_stats.hp, 39);
        assert_eq!(entry.base_stats.speed, 65);
        assert_eq!(entry.next_evolution.as_deref(), Some("Charmeleon"));
    }
}
