//! Utility AI system: один тик FSM для каждого живого бота.

use bevy::prelude::*;

use crate::ai::{Bot, BotConfig, BotContext, OpponentRegistry, UtilityStateMachine};
use crate::combat::{fire_cannon, Cannon, Dead};
use crate::components::{Health, ShootDirection};
use crate::navigation::{ArenaWaypoints, NavPlanner, PathFollower, WaypointPool};
use crate::DeterministicRng;

/// System: evaluate utility FSM ботов
///
/// Противники берутся из OpponentRegistry (snapshot начала тика).
/// BotAction применяется сразу: поворот башни + выстрел через общий fire_cannon.
pub fn evaluate_bots(
    mut commands: Commands,
    mut bots: Query<
        (
            Entity,
            &Transform,
            &Health,
            &BotConfig,
            &mut UtilityStateMachine,
            &mut PathFollower,
            &mut WaypointPool,
            &mut Cannon,
            &mut ShootDirection,
        ),
        (With<Bot>, Without<Dead>),
    >,
    registry: Res<OpponentRegistry>,
    arena: Res<ArenaWaypoints>,
    planner: Res<NavPlanner>,
    mut rng: ResMut<DeterministicRng>,
) {
    for (
        entity,
        transform,
        health,
        config,
        mut machine,
        mut path,
        mut pool,
        mut cannon,
        mut shoot_direction,
    ) in bots.iter_mut()
    {
        let position = transform.translation;

        let mut ctx = BotContext {
            entity,
            position,
            health,
            config,
            opponent: registry.nearest_opponent(entity),
            path: &mut path,
            pool: &mut pool,
            arena: &arena,
            planner: planner.planner(),
            rng: &mut rng.rng,
        };

        let action = machine.evaluate(&mut ctx);

        if let Some(aim) = action.aim {
            shoot_direction.0 = aim;
        }

        if action.fire {
            fire_cannon(
                &mut commands,
                entity,
                position,
                health,
                &mut cannon,
                shoot_direction.0,
            );
        }
    }
}
