//! Damage/death события и их публикация

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{DamageOutcome, Health};

/// Событие: урон нанесен
///
/// Генерируется после применения damage к Health.
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
    pub target_died: bool,
}

/// Событие: health изменился (для health bar collaborator'а)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
}

/// Событие: entity умер — ровно один раз на entity
///
/// Director читает его, убирает entity из ростеров и деспавнит.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Компонент-маркер: entity мертв, ждёт деспавна в Lifecycle фазе
///
/// AI/input/movement фильтруют `Without<Dead>`.
#[derive(Component, Debug)]
pub struct Dead;

/// Писатели damage-событий одним SystemParam
#[derive(SystemParam)]
pub struct DamageEvents<'w> {
    dealt: EventWriter<'w, DamageDealt>,
    health_changed: EventWriter<'w, HealthChanged>,
    died: EventWriter<'w, EntityDied>,
}

impl DamageEvents<'_> {
    /// Публикует последствия `Health::apply_damage`
    ///
    /// `Ignored` ничего не публикует. `Killed` публикует EntityDied —
    /// а он возможен только один раз, так что death notification не дублируется.
    pub fn report(
        &mut self,
        attacker: Entity,
        target: Entity,
        damage: f32,
        outcome: DamageOutcome,
        health: &Health,
    ) {
        if outcome == DamageOutcome::Ignored {
            return;
        }

        let target_died = outcome == DamageOutcome::Killed;

        self.dealt.write(DamageDealt {
            attacker,
            target,
            damage,
            target_died,
        });
        self.health_changed.write(HealthChanged {
            entity: target,
            current: health.current,
            max: health.max,
        });

        if target_died {
            self.died.write(EntityDied {
                entity: target,
                killer: Some(attacker),
            });
            crate::log_info(&format!("💀 Entity {:?} killed by {:?}", target, attacker));
        }
    }
}
