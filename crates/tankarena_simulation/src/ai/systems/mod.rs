//! AI systems

pub mod utility;

// Re-export all systems
pub use utility::*;
