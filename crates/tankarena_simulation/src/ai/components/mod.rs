//! AI components

pub mod config;
pub mod utility;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod utility_tests;

// Re-export all components
pub use config::*;
pub use utility::*;
