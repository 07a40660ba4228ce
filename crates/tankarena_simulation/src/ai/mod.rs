//! AI decision-making module
//!
//! Utility AI: каждый тик все состояния roster получают score,
//! побеждает максимальный (> 0), при смене состояния вызывается on_enter.
//! Roster: Patrol → Chase → Flee (порядок = tie-break).

use bevy::prelude::*;

use crate::TickSet;

pub mod behaviour;
pub mod components;
pub mod opponents;
pub mod systems;


// Re-export основных типов
pub use behaviour::{BehaviorKind, BehaviorState, BotAction, BotContext};
pub use components::{select_state, Bot, BotConfig, UtilityStateMachine, UNAVAILABLE_SCORE};
pub use opponents::{refresh_opponent_registry, OpponentRegistry, OpponentSnapshot};
pub use systems::evaluate_bots;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. refresh_opponent_registry (TickSet::Perception) — snapshot противников
/// 2. evaluate_bots (TickSet::Decision) — scoring, переходы, update состояний
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OpponentRegistry>()
            .add_systems(
                FixedUpdate,
                (
                    refresh_opponent_registry.in_set(TickSet::Perception),
                    evaluate_bots.in_set(TickSet::Decision),
                ),
            );
    }
}
