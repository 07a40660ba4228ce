//! Combat system module (общая боевая модель игрока и ботов)
//!
//! ECS ответственность:
//! - Game state: Health, Cannon (cooldown), Projectile
//! - Combat rules: урон от снаряда, исключение владельца, idempotent death
//! - Events: DamageDealt, HealthChanged, EntityDied, ProjectileCollision
//!
//! Снаряд живёт ровно до первой коллизии (танк или стена арены).

use bevy::prelude::*;

use crate::TickSet;

pub mod components;
pub mod damage;
pub mod systems;

// Re-export основных типов
pub use components::{Cannon, Projectile};
pub use damage::{DamageDealt, DamageEvents, Dead, EntityDied, HealthChanged};
pub use systems::{fire_cannon, ProjectileCollision};

/// Swap/cleanup буферов combat-событий
///
/// `run_fixed_tick` гоняет FixedUpdate без `First`, где Bevy обычно обновляет
/// события, поэтому буферы обновляются здесь, раз в тик.
pub fn update_combat_events(world: &mut World) {
    update_events::<DamageDealt>(world);
    update_events::<HealthChanged>(world);
    update_events::<EntityDied>(world);
    update_events::<ProjectileCollision>(world);
}

fn update_events<E: Event>(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<E>>() {
        events.update();
    }
}

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения (через TickSet):
/// 1. tick_cannon_cooldowns — Cooldowns
/// 2. move_projectiles → detect_projectile_collisions — Projectiles
/// 3. resolve_projectile_collisions — Resolution (урон + деспавн снаряда)
///
/// Выстрел (`fire_cannon`) вызывается синхронно из player_control / evaluate_bots.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageDealt>()
            .add_event::<HealthChanged>()
            .add_event::<EntityDied>()
            .add_event::<ProjectileCollision>();

        app.add_systems(
            FixedUpdate,
            (
                systems::tick_cannon_cooldowns.in_set(TickSet::Cooldowns),
                (
                    systems::move_projectiles,
                    systems::detect_projectile_collisions,
                )
                    .chain()
                    .in_set(TickSet::Projectiles),
                systems::resolve_projectile_collisions.in_set(TickSet::Resolution),
            ),
        );
    }
}
