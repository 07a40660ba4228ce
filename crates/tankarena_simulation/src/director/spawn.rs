//! Спавн танков + инициализация уровня.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{Bot, BotConfig};
use crate::combat::Cannon;
use crate::components::{Actor, CollisionRadius, Health, Player, TankMotion};
use crate::config::{ArenaConfig, TankSettings};
use crate::director::ArenaDirector;
use crate::navigation::{ArenaWaypoints, PathFollower, WaypointPool};
use crate::DeterministicRng;

pub const PLAYER_FACTION: u64 = 0;
pub const BOT_FACTION: u64 = 1;

/// Resource: точки спавна танков арены
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SpawnPoints(pub Vec<Vec3>);

/// Общие компоненты танка из TankSettings
fn tank_bundle(position: Vec3, settings: &TankSettings) -> impl Bundle {
    (
        Health::new(settings.max_health),
        Cannon::from_settings(settings),
        TankMotion {
            move_speed: settings.move_speed,
        },
        CollisionRadius(settings.collision_radius),
        Transform::from_translation(position),
    )
}

/// Спавн танка игрока
pub fn spawn_player(commands: &mut Commands, position: Vec3, settings: &TankSettings) -> Entity {
    commands
        .spawn((
            Player,
            Actor {
                faction_id: PLAYER_FACTION,
            },
            tank_bundle(position, settings),
        ))
        .id()
}

/// Спавн бота (utility FSM стартует в Patrol, пул waypoints заполнен)
pub fn spawn_bot(
    commands: &mut Commands,
    position: Vec3,
    settings: &TankSettings,
    config: &BotConfig,
    arena: &ArenaWaypoints,
) -> Entity {
    commands
        .spawn((
            Bot,
            Actor {
                faction_id: BOT_FACTION,
            },
            tank_bundle(position, settings),
            config.clone(),
            PathFollower::new(config.waypoint_skip_distance),
            WaypointPool::filled(arena),
        ))
        .id()
}

/// Startup system: игрок на случайной spawn point, боты на оставшихся
///
/// Ботов = min(bots_count, spawn points − 1), точки не переиспользуются.
/// Без spawn points уровень пустой (ростер заполняет хост или тест).
pub fn initialize_level(
    mut commands: Commands,
    mut director: ResMut<ArenaDirector>,
    spawn_points: Res<SpawnPoints>,
    config: Res<ArenaConfig>,
    arena: Res<ArenaWaypoints>,
    mut rng: ResMut<DeterministicRng>,
) {
    let mut free_points = spawn_points.0.clone();
    if free_points.is_empty() {
        crate::log_warning("⚠️ No spawn points configured, level left empty");
        return;
    }

    let bots_count = config.bots_count.min(free_points.len() - 1);

    let index = rng.rng.gen_range(0..free_points.len());
    let player = spawn_player(&mut commands, free_points.remove(index), &config.tank);
    director.register_player(player);

    for _ in 0..bots_count {
        let index = rng.rng.gen_range(0..free_points.len());
        let bot = spawn_bot(
            &mut commands,
            free_points.remove(index),
            &config.tank,
            &config.bot,
            &arena,
        );
        director.register_bot(bot);
    }

    crate::log_info(&format!(
        "🗺️ Level initialized: player {:?} + {} bots (seed {})",
        player, bots_count, rng.seed
    ));
}
