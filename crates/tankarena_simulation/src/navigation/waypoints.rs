//! Waypoints арены + per-bot пул для случайного патруля

use bevy::prelude::*;
use rand::Rng;

/// Источник waypoints арены
pub trait WaypointProvider {
    fn waypoint_count(&self) -> usize;
    fn waypoint_at(&self, index: usize) -> Option<Vec3>;
}

/// Resource: фиксированный набор waypoints арены (из ArenaConfig)
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ArenaWaypoints(pub Vec<Vec3>);

impl From<Vec<Vec3>> for ArenaWaypoints {
    fn from(points: Vec<Vec3>) -> Self {
        Self(points)
    }
}

impl WaypointProvider for ArenaWaypoints {
    fn waypoint_count(&self) -> usize {
        self.0.len()
    }

    fn waypoint_at(&self, index: usize) -> Option<Vec3> {
        self.0.get(index).copied()
    }
}

/// Расходуемый набор waypoints бота
///
/// Вытянутый waypoint не повторяется до следующего reset.
/// Размер ≤ числа waypoints арены.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct WaypointPool {
    entries: Vec<Vec3>,
}

impl WaypointPool {
    /// Пул, сразу заполненный всеми waypoints арены
    pub fn filled(arena: &impl WaypointProvider) -> Self {
        let mut pool = Self::default();
        pool.refill(arena);
        pool
    }

    /// Перезаполнить, если размер пула разошёлся с ареной
    pub fn reset(&mut self, arena: &impl WaypointProvider) {
        if self.entries.len() != arena.waypoint_count() {
            self.refill(arena);
        }
    }

    /// Случайный (uniform) waypoint, удаляется из пула
    ///
    /// Пустой пул сначала перезаполняется. `None` только если у арены нет waypoints.
    pub fn draw_random<R: Rng + ?Sized>(
        &mut self,
        arena: &impl WaypointProvider,
        rng: &mut R,
    ) -> Option<Vec3> {
        if self.entries.is_empty() {
            self.reset(arena);
        }

        if self.entries.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.entries.len());
        Some(self.entries.swap_remove(index))
    }

    pub fn for_each(&self, mut visit: impl FnMut(Vec3)) {
        for point in &self.entries {
            visit(*point);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn refill(&mut self, arena: &impl WaypointProvider) {
        self.entries.clear();
        self.entries
            .extend((0..arena.waypoint_count()).filter_map(|index| arena.waypoint_at(index)));
    }
}
