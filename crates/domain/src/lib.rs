//! Domain layer for Filmotek
//!
//! This crate contains the catalog's entities, validated value objects,
//! static vocabularies (genres, MPA ratings), the friendship status
//! model, and the popularity ranking. All logic is implemented as pure
//! functions without side effects.

pub mod common;
pub mod film;
pub mod friendship;
pub mod user;
