/// Command-line front end
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Frequency allow-set loading
pub mod lexicon;
/// Terminal progress display
pub mod progress;
