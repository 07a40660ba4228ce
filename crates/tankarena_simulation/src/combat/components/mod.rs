//! Combat components

pub mod cannon;
pub mod projectile;


// Re-export all components
pub use cannon::*;
pub use projectile::*;
