//! Projectile systems: полёт, детекция коллизий, применение урона.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::combat::{DamageEvents, Dead, Projectile};
use crate::components::{Actor, ArenaBounds, CollisionRadius, DamageOutcome, Health};

/// Event: снаряд столкнулся с чем-то
///
/// `other == None` — не-боевой объект (стена арены).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ProjectileCollision {
    pub projectile: Entity,
    pub other: Option<Entity>,
}

/// System: кинематический полёт снарядов
pub fn move_projectiles(
    mut projectiles: Query<(&Projectile, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (projectile, mut transform) in projectiles.iter_mut() {
        transform.translation += projectile.velocity * delta;
    }
}

/// System: overlap снаряда с корпусами танков и границей арены
///
/// Владелец снаряда в проверке не участвует (коллизия с ним игнорируется).
/// При нескольких пересечениях побеждает ближайший танк.
pub fn detect_projectile_collisions(
    projectiles: Query<(Entity, &Projectile, &Transform)>,
    targets: Query<(Entity, &Transform, &CollisionRadius), (With<Actor>, Without<Dead>)>,
    bounds: Res<ArenaBounds>,
    mut collisions: EventWriter<ProjectileCollision>,
) {
    for (projectile_entity, projectile, transform) in projectiles.iter() {
        let position = transform.translation;
        let mut closest: Option<(Entity, f32)> = None;

        for (target, target_transform, radius) in targets.iter() {
            if target == projectile.owner {
                continue;
            }

            let distance = position.distance(target_transform.translation);
            let overlaps = distance <= radius.0 + projectile.radius;

            if overlaps && closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((target, distance));
            }
        }

        if let Some((target, _)) = closest {
            collisions.write(ProjectileCollision {
                projectile: projectile_entity,
                other: Some(target),
            });
        } else if !bounds.contains(position) {
            collisions.write(ProjectileCollision {
                projectile: projectile_entity,
                other: None,
            });
        }
    }
}

/// System: обработка ProjectileCollision → урон + уничтожение снаряда
///
/// Каждый снаряд обрабатывает максимум одну коллизию: повторные события
/// в том же тике пропускаются, после тика снаряда уже нет.
/// Снаряд деспавнится всегда, даже если урон не применён.
pub fn resolve_projectile_collisions(
    mut commands: Commands,
    mut collisions: EventReader<ProjectileCollision>,
    projectiles: Query<&Projectile>,
    mut targets: Query<&mut Health>,
    mut damage_events: DamageEvents,
) {
    let mut consumed = HashSet::new();

    for collision in collisions.read() {
        if !consumed.insert(collision.projectile) {
            continue;
        }

        let Ok(projectile) = projectiles.get(collision.projectile) else {
            continue;
        };

        if let Some(other) = collision.other {
            if let Ok(mut health) = targets.get_mut(other) {
                match projectile.hit(other, &mut health) {
                    Some(outcome) => {
                        damage_events.report(
                            projectile.owner,
                            other,
                            projectile.damage,
                            outcome,
                            &health,
                        );
                        if outcome == DamageOutcome::Killed {
                            commands.entity(other).insert(Dead);
                        }
                    }
                    None => {
                        crate::log_warning(&format!(
                            "⚠️ SELF-HIT DETECTED! Projectile {:?} hit its owner {:?}",
                            collision.projectile, other
                        ));
                    }
                }
            }
        }

        commands.entity(collision.projectile).despawn();
    }
}
