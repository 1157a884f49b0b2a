mod error;
mod progress;
