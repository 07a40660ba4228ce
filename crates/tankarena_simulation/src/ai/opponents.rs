//! Opponent registry — snapshot танков на начало тика
//!
//! AI читает противников только отсюда: позиции/смерть фиксируются
//! один раз в фазе Perception и не меняются до конца тика.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{Actor, Health};

/// Снимок одного танка
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentSnapshot {
    pub entity: Entity,
    pub faction_id: u64,
    pub position: Vec3,
    pub is_dead: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct OpponentRegistry {
    entries: Vec<OpponentSnapshot>,
}

impl OpponentRegistry {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn insert(&mut self, snapshot: OpponentSnapshot) {
        match self.entries.iter_mut().find(|entry| entry.entity == snapshot.entity) {
            Some(entry) => *entry = snapshot,
            None => self.entries.push(snapshot),
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&OpponentSnapshot> {
        self.entries.iter().find(|entry| entry.entity == entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ближайший танк другой фракции
    ///
    /// Живые в приоритете; мёртвый возвращается только если живых нет
    /// (состояния сами проверяют `is_dead`). При равной дистанции — первый.
    pub fn nearest_opponent(&self, entity: Entity) -> Option<OpponentSnapshot> {
        let me = self.get(entity)?;

        let mut nearest_alive: Option<(OpponentSnapshot, f32)> = None;
        let mut nearest_dead: Option<(OpponentSnapshot, f32)> = None;

        for entry in self.entries.iter() {
            if entry.entity == entity || entry.faction_id == me.faction_id {
                continue;
            }

            let distance = me.position.distance_squared(entry.position);
            let slot = if entry.is_dead {
                &mut nearest_dead
            } else {
                &mut nearest_alive
            };

            if slot.map_or(true, |(_, best)| distance < best) {
                *slot = Some((*entry, distance));
            }
        }

        nearest_alive.or(nearest_dead).map(|(snapshot, _)| snapshot)
    }

    /// Неизвестный entity (деспавнен или не танк) считается мёртвым
    pub fn is_dead(&self, entity: Entity) -> bool {
        self.get(entity).map_or(true, |entry| entry.is_dead)
    }

    pub fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.get(entity).map(|entry| entry.position)
    }
}

/// System: пересобрать snapshot всех танков
pub fn refresh_opponent_registry(
    mut registry: ResMut<OpponentRegistry>,
    actors: Query<(Entity, &Actor, &Transform, &Health, Has<Dead>)>,
) {
    registry.clear();

    for (entity, actor, transform, health, dead) in actors.iter() {
        registry.insert(OpponentSnapshot {
            entity,
            faction_id: actor.faction_id,
            position: transform.translation,
            is_dead: dead || health.is_dead(),
        });
    }
}
