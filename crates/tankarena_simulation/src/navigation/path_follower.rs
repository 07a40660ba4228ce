//! PathFollower: следование по углам маршрута от PathPlanner

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::MoveIntent;
use crate::navigation::PathPlanner;

/// Углы ближе этого расстояния к старту отбрасываются при `set_path`
pub const CORNER_SKIP_RADIUS: f32 = 3.0;

/// Маршрут AI entity
///
/// `path.front()` — следующая цель. Пустой путь = "прибыли".
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PathFollower {
    path: VecDeque<Vec3>,
    /// Waypoint снимается, когда entity ближе этого расстояния
    pub stopping_distance: f32,
    destination: Option<Vec3>,
}

/// Default = stopping distance патруля, так что `Bot` через required
/// components сразу снимает достигнутые waypoints
impl Default for PathFollower {
    fn default() -> Self {
        Self::new(CORNER_SKIP_RADIUS)
    }
}

impl PathFollower {
    pub fn new(stopping_distance: f32) -> Self {
        Self {
            path: VecDeque::new(),
            stopping_distance,
            destination: None,
        }
    }

    /// Запросить маршрут `from → destination` и заменить им текущий путь
    ///
    /// Старый путь сбрасывается в любом случае. `Unreachable` → warning в лог,
    /// путь остаётся пустым (entity стоит на месте). Возвращает `true`, если
    /// после фильтрации ближних углов осталось куда идти.
    pub fn set_path(&mut self, from: Vec3, destination: Vec3, planner: &dyn PathPlanner) -> bool {
        self.path.clear();
        self.destination = Some(destination);

        let corners = match planner.compute_path(from, destination) {
            Ok(corners) => corners,
            Err(err) => {
                crate::log_warning(&format!("🧭 Path planning failed: {}", err));
                return false;
            }
        };

        self.path.extend(
            corners
                .into_iter()
                .filter(|corner| from.distance(*corner) > CORNER_SKIP_RADIUS),
        );

        !self.path.is_empty()
    }

    /// Снять передний waypoint, если до него меньше stopping_distance
    ///
    /// Вызывается раз в тик до `direction_to_next`.
    pub fn advance(&mut self, position: Vec3) {
        let Some(front) = self.path.front() else {
            return;
        };

        if position.distance(*front) < self.stopping_distance {
            self.path.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Нормализованное направление к следующему waypoint (ZERO если пусто)
    pub fn direction_to_next(&self, position: Vec3) -> Vec3 {
        self.path
            .front()
            .map(|front| (*front - position).normalize_or_zero())
            .unwrap_or(Vec3::ZERO)
    }

    /// Последняя запрошенная цель (даже если она оказалась недостижима)
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Vec3> {
        self.path.iter()
    }
}

/// System: advance + MoveIntent к следующему waypoint
///
/// Пустой путь → MoveIntent = ZERO (стоим).
pub fn follow_paths(
    mut followers: Query<(&Transform, &mut PathFollower, &mut MoveIntent), Without<Dead>>,
) {
    for (transform, mut follower, mut intent) in followers.iter_mut() {
        let position = transform.translation;

        follower.advance(position);
        intent.0 = follower.direction_to_next(position);
    }
}
