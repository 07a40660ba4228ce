//! Weapon systems (cooldowns + выстрел).

use bevy::prelude::*;

use crate::combat::{Cannon, Projectile};
use crate::components::Health;

/// System: обновление cooldown пушек
pub fn tick_cannon_cooldowns(mut cannons: Query<&mut Cannon>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut cannon in cannons.iter_mut() {
        cannon.tick_cooldown(delta);
    }
}

/// Выстрел танка `shooter` в направлении `direction`
///
/// Возвращает `true`, если снаряд реально выпущен. Мёртвый танк и танк
/// на cooldown не стреляют (без side effects). Снаряд летит по горизонтали,
/// несёт `cannon.damage` и не взаимодействует со своим владельцем.
pub fn fire_cannon(
    commands: &mut Commands,
    shooter: Entity,
    origin: Vec3,
    health: &Health,
    cannon: &mut Cannon,
    direction: Vec3,
) -> bool {
    if health.is_dead() {
        return false;
    }

    let Some(direction) = cannon.try_fire(direction) else {
        return false;
    };

    let spawn_position = origin + direction * cannon.muzzle_offset;
    let projectile = commands
        .spawn((
            Projectile::new(shooter, cannon.damage, direction * cannon.projectile_speed),
            Transform::from_translation(spawn_position),
        ))
        .id();

    crate::log(&format!(
        "🔫 {:?} fired {:?} towards {:?} (dmg {})",
        shooter, projectile, direction, cannon.damage
    ));

    true
}
