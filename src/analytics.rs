use std::str::FromStr;

use schema::{BaseStats, CatalogEntry, PokemonType};

/// Per-dimension arithmetic mean of the roster's base stats, rounded half-up
/// to the nearest integer. `None` for an empty roster: an average over zero
/// entries is displayed as "not applicable", never as zeros.
pub fn average_stats(roster: &[CatalogEntry]) -> Option<BaseStats> {
    if roster.is_empty() {
        return None;
    }

    let n = roster.len() as u32;
    let mean = |pick: fn(&BaseStats) -> u16| -> u16 {
        let sum: u32 = roster.iter().map(|entry| pick(&entry.base_stats) as u32).sum();
        // Integer round-half-up: 65.5 averages to 66.
        ((sum + n / 2) / n) as u16
    };

    Some(BaseStats {
        hp: mean(|s| s.hp),
        attack: mean(|s| s.attack),
        defense: mean(|s| s.defense),
        sp_attack: mean(|s| s.sp_attack),
        sp_defense: mean(|s| s.sp_defense),
        speed: mean(|s| s.speed),
    })
}

/// Count how many of the roster's type slots are weak to each attacking type.
///
/// Every recognized primary and secondary tag contributes its full
/// weak-against set, one increment per listed type; tags the type chart does
/// not know are skipped silently. The result is sorted descending by count
/// with a stable sort, so tied types keep first-encounter order.
pub fn weakness_histogram(roster: &[CatalogEntry]) -> Vec<(PokemonType, u32)> {
    let mut counts: Vec<(PokemonType, u32)> = Vec::new();

    for entry in roster {
        for tag in entry.type_tags() {
            let Ok(pokemon_type) = PokemonType::from_str(tag) else {
                continue;
            };
            for &weakness in pokemon_type.weak_against() {
                match counts.iter_mut().find(|(t, _)| *t == weakness) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((weakness, 1)),
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
