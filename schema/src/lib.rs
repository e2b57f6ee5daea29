// Pokemon Team Builder Schema - Shared type definitions
// This crate contains the core data shapes that are shared between the
// team-builder library, its binaries, and the persisted snapshot format.

// Re-export the main types
pub use catalog_data::*;
pub use pokemon_types::*;
pub use team_data::*;

pub mod catalog_data;
pub mod pokemon_types;
pub mod team_data;
