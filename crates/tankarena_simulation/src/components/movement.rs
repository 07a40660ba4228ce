//! Movement компоненты: намерение движения, скорость, направление башни

use bevy::prelude::*;

/// Желаемое направление движения на этот тик
///
/// Пишут: player_control (ось ввода) и follow_paths (направление к waypoint).
/// Читает: apply_movement. `Vec3::ZERO` = стоять на месте.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveIntent(pub Vec3);

/// Скорость хода танка (units/sec)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TankMotion {
    pub move_speed: f32,
}

impl Default for TankMotion {
    fn default() -> Self {
        Self { move_speed: 10.0 }
    }
}

/// Куда смотрит башня (и куда полетит следующий снаряд)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ShootDirection(pub Vec3);

impl Default for ShootDirection {
    fn default() -> Self {
        Self(Vec3::NEG_Z)
    }
}

/// Проекция на горизонтальную плоскость + нормализация (ZERO если вырожден)
pub fn horizontal_direction(vector: Vec3) -> Vec3 {
    Vec3::new(vector.x, 0.0, vector.z).normalize_or_zero()
}
