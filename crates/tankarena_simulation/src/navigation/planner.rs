//! Path planner — внешний collaborator (navmesh)
//!
//! Ядро видит только `compute_path(from, to)`: упорядоченные углы маршрута
//! или `Unreachable`. Провал не фатален — entity просто стоит на месте.

use bevy::prelude::*;
use thiserror::Error;

use crate::components::ArenaBounds;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    #[error("destination {to:?} is not reachable from {from:?}")]
    Unreachable { from: Vec3, to: Vec3 },
}

/// Вычисление маршрута: углы (corners) от `from` до `to` включительно
pub trait PathPlanner: Send + Sync + 'static {
    fn compute_path(&self, from: Vec3, to: Vec3) -> Result<Vec<Vec3>, NavigationError>;
}

/// Resource: активный planner (подменяется хостом или тестом)
#[derive(Resource)]
pub struct NavPlanner(Box<dyn PathPlanner>);

impl NavPlanner {
    pub fn new(planner: impl PathPlanner) -> Self {
        Self(Box::new(planner))
    }

    pub fn planner(&self) -> &dyn PathPlanner {
        self.0.as_ref()
    }
}

/// Planner для арены без препятствий
///
/// Маршрут = [from, to] (как navmesh, первый угол — стартовая точка).
/// Точка за границей арены недостижима.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFieldPlanner {
    pub bounds: ArenaBounds,
}

impl OpenFieldPlanner {
    pub fn new(bounds: ArenaBounds) -> Self {
        Self { bounds }
    }
}

impl PathPlanner for OpenFieldPlanner {
    fn compute_path(&self, from: Vec3, to: Vec3) -> Result<Vec<Vec3>, NavigationError> {
        if !self.bounds.contains(to) {
            return Err(NavigationError::Unreachable { from, to });
        }

        Ok(vec![from, to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_field_straight_line() {
        let planner = OpenFieldPlanner::new(ArenaBounds::new(20.0));
        let path = planner
            .compute_path(Vec3::ZERO, Vec3::new(10.0, 0.0, 5.0))
            .expect("inside arena");
        assert_eq!(path, vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 5.0)]);
    }

    #[test]
    fn test_open_field_outside_bounds_unreachable() {
        let planner = OpenFieldPlanner::new(ArenaBounds::new(20.0));
        let to = Vec3::new(25.0, 0.0, 0.0);
        assert_eq!(
            planner.compute_path(Vec3::ZERO, to),
            Err(NavigationError::Unreachable { from: Vec3::ZERO, to })
        );
    }
}
