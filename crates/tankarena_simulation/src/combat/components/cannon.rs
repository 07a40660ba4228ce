//! Пушка танка: урон, интервал стрельбы, cooldown

use bevy::prelude::*;

use crate::components::horizontal_direction;
use crate::config::TankSettings;

/// Cannon component (один тип оружия на танк)
///
/// ECS хранит stats + cooldown. Выстрел = `try_fire` → spawn Projectile
/// (см. `combat::systems::fire_cannon`).
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Cannon {
    /// Урон одного снаряда
    pub damage: f32,

    /// Интервал между выстрелами (секунды)
    pub shoot_interval: f32,

    /// Оставшийся cooldown (уменьшается до 0)
    pub cooldown_timer: f32,

    /// Скорость снаряда (units/sec)
    pub projectile_speed: f32,

    /// Смещение точки вылета от центра танка
    pub muzzle_offset: f32,
}

impl Default for Cannon {
    fn default() -> Self {
        Self::from_settings(&TankSettings::default())
    }
}

impl Cannon {
    pub fn from_settings(settings: &TankSettings) -> Self {
        Self {
            damage: settings.cannon_damage,
            shoot_interval: settings.shoot_interval,
            cooldown_timer: 0.0,
            projectile_speed: settings.projectile_speed,
            muzzle_offset: settings.muzzle_offset,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    pub fn start_cooldown(&mut self) {
        self.cooldown_timer = self.shoot_interval;
    }

    pub fn tick_cooldown(&mut self, delta: f32) {
        if self.cooldown_timer > 0.0 {
            self.cooldown_timer = (self.cooldown_timer - delta).max(0.0);
        }
    }

    /// Попытка выстрела
    ///
    /// Возвращает горизонтальное направление полёта снаряда, если выстрел
    /// состоялся (cooldown сброшен). `None` — cooldown не истёк или направление
    /// вырождено; в обоих случаях состояние не меняется.
    pub fn try_fire(&mut self, direction: Vec3) -> Option<Vec3> {
        if !self.can_fire() {
            return None;
        }

        let direction = horizontal_direction(direction);
        if direction == Vec3::ZERO {
            return None;
        }

        self.start_cooldown();
        Some(direction)
    }
}
