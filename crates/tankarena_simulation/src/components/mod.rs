//! ECS Components для танков арены
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Health)
//! - movement: намерение движения, скорость, направление башни
//! - world: геометрия арены (ArenaBounds, CollisionRadius)
//! - player: player control (Player, PlayerInput)
//! - ai: re-export компонентов ботов (Bot, BotConfig, UtilityStateMachine)

pub mod actor;
pub mod ai;
pub mod movement;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use movement::*;
pub use player::*;
pub use world::*;
