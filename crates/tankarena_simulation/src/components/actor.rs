//! Базовые компоненты танков: Actor, Health

use bevy::prelude::*;

use crate::combat::Cannon;
use crate::components::{CollisionRadius, MoveIntent, ShootDirection, TankMotion};

/// Танк (игрок или бот) — базовый компонент для всех боевых entity
///
/// Автоматически добавляет Health, Cannon, движение и Transform через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health, Cannon, ShootDirection, MoveIntent, TankMotion, CollisionRadius, Transform)]
pub struct Actor {
    /// ID фракции: противник = любой актор другой фракции
    pub faction_id: u64,
}

/// Результат `Health::apply_damage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Entity уже мертв — ничего не изменилось
    Ignored,
    /// Урон применён, entity жив
    Damaged,
    /// Этот вызов убил entity (ровно один раз за жизнь)
    Killed,
}

/// Здоровье танка
///
/// Инварианты:
/// - 0 ≤ current ≤ max
/// - после смерти current == 0 и больше не меняется
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    dead: bool,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Доля для health bar: clamp01(current / max)
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// Применить урон (amount — доверенный input, не валидируется)
    ///
    /// Переход в dead происходит ровно один раз: повторные вызовы → `Ignored`.
    pub fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }

        // не clamp: он паникует при max < 0 или NaN
        self.current = (self.current - amount).min(self.max).max(0.0);

        if self.current <= 0.0 {
            self.current = 0.0;
            self.dead = true;
            DamageOutcome::Killed
        } else {
            DamageOutcome::Damaged
        }
    }
}
