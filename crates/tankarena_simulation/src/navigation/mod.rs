//! Navigation: consumer-сторона pathfinding
//!
//! Сам navmesh-алгоритм — внешний collaborator за trait `PathPlanner`.
//! Здесь: следование по углам пути (PathFollower) и пул waypoints арены
//! для патруля/бегства (WaypointPool).

use bevy::prelude::*;

use crate::TickSet;

pub mod path_follower;
pub mod planner;
pub mod waypoints;


pub use path_follower::{follow_paths, PathFollower, CORNER_SKIP_RADIUS};
pub use planner::{NavPlanner, NavigationError, OpenFieldPlanner, PathPlanner};
pub use waypoints::{ArenaWaypoints, WaypointPool, WaypointProvider};

/// Navigation Plugin
///
/// follow_paths идёт после решений ботов (TickSet::Decision), чтобы путь,
/// выставленный в этом тике, сразу дал MoveIntent.
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaWaypoints>()
            .add_systems(FixedUpdate, follow_paths.in_set(TickSet::Navigation));
    }
}
