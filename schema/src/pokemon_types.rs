use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The eighteen elemental types a catalog entry can carry.
///
/// Type tags arrive from the catalog as free-form strings; parsing is
/// case-insensitive so `"GRASS"`, `"Grass"`, and `"grass"` all resolve to
/// [`PokemonType::Grass`]. Unknown tags fail to parse and are skipped by the
/// analytics layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// The fixed set of types this type takes double damage from.
    ///
    /// This is the defensive weakness relation only, not a full battle
    /// effectiveness chart: resistances and immunities are out of scope.
    pub fn weak_against(self) -> &'static [PokemonType] {
        use PokemonType::*;

        match self {
            Normal => &[Fighting],
            Fire => &[Water, Ground, Rock],
            Water => &[Electric, Grass],
            Electric => &[Ground],
            Grass => &[Fire, Ice, Poison, Flying, Bug],
            Ice => &[Fire, Fighting, Rock, Steel],
            Fighting => &[Flying, Psychic, Fairy],
            Poison => &[Ground, Psychic],
            Ground => &[Water, Grass, Ice],
            Flying => &[Electric, Ice, Rock],
            Psychic => &[Bug, Ghost, Dark],
            Bug => &[Flying, Rock, Fire],
            Rock => &[Water, Grass, Fighting, Ground, Steel],
            Ghost => &[Ghost, Dark],
            Dragon => &[Ice, Dragon, Fairy],
            Dark => &[Fighting, Bug, Fairy],
            Steel => &[Fire, Fighting, Ground],
            Fairy => &[Poison, Steel],
        }
    }
}
