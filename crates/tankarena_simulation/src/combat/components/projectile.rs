//! Снаряд: урон + non-owning ссылка на стрелявшего

use bevy::prelude::*;

use crate::components::{DamageOutcome, Health};

/// Projectile component
///
/// `owner` используется только для исключения self-hit,
/// никогда для управления lifecycle стрелявшего.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    pub owner: Entity,
    pub damage: f32,
    pub velocity: Vec3,
    /// Радиус для overlap-проверки
    pub radius: f32,
}

impl Projectile {
    pub const DEFAULT_RADIUS: f32 = 0.25;

    pub fn new(owner: Entity, damage: f32, velocity: Vec3) -> Self {
        Self {
            owner,
            damage,
            velocity,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    /// Попадание в CombatEntity `other`
    ///
    /// `None` — это владелец снаряда (урон не применяется).
    pub fn hit(&self, other: Entity, health: &mut Health) -> Option<DamageOutcome> {
        if other == self.owner {
            return None;
        }

        Some(health.apply_damage(self.damage))
    }
}
