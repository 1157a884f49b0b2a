//! Syllable composition and the rules built on it

/// Positional syllable composition and romanized labels
pub mod engine;
/// Composition rules and their lookup table
pub mod rules;
/// Built-in difficulty tiers
pub mod tiers;
