//! Movement domain — интеграция движения танков
//!
//! MoveIntent (от player_control или follow_paths) → позиция + поворот корпуса.
//! Физики нет: кинематический шаг с clamp по границе арены.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{horizontal_direction, ArenaBounds, MoveIntent, TankMotion};
use crate::TickSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, apply_movement.in_set(TickSet::Movement));
    }
}

/// Шаг движения за `delta` секунд
///
/// Intent проецируется на горизонталь, длина ограничена 1 (диагональ не быстрее).
pub fn movement_step(intent: Vec3, move_speed: f32, delta: f32) -> Vec3 {
    let flat = Vec3::new(intent.x, 0.0, intent.z).clamp_length_max(1.0);
    flat * move_speed * delta
}

/// Поворот корпуса "лицом" (-Z) в сторону движения
pub fn facing_rotation(direction: Vec3) -> Option<Quat> {
    let flat = horizontal_direction(direction);
    if flat == Vec3::ZERO {
        return None;
    }

    Some(Quat::from_rotation_y(f32::atan2(-flat.x, -flat.z)))
}

/// System: интеграция MoveIntent
pub fn apply_movement(
    mut tanks: Query<(&MoveIntent, &TankMotion, &mut Transform), Without<Dead>>,
    bounds: Res<ArenaBounds>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (intent, motion, mut transform) in tanks.iter_mut() {
        let step = movement_step(intent.0, motion.move_speed, delta);
        if step == Vec3::ZERO {
            continue;
        }

        transform.translation = bounds.clamp(transform.translation + step);

        if let Some(rotation) = facing_rotation(step) {
            transform.rotation = rotation;
        }
    }
}
