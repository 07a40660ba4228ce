//! Bot components: marker + параметры utility AI.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::UtilityStateMachine;
use crate::components::Actor;
use crate::navigation::{PathFollower, WaypointPool};

/// Marker: AI-управляемый танк
///
/// Required Components дают боту FSM, маршрут и пул waypoints.
/// Фракцию задаёт spawn (`Actor { faction_id }`).
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Actor, BotConfig, UtilityStateMachine, PathFollower, WaypointPool)]
pub struct Bot;

/// Параметры бота (balance levers)
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct BotConfig {
    /// Максимальная дистанция, на которой бот замечает противника
    pub spot_radius: f32,
    /// Stopping distance для патруля/бегства по waypoints
    pub waypoint_skip_distance: f32,
    /// Дальше этой дистанции бот не стреляет
    pub max_shoot_distance: f32,
    /// Stopping distance при погоне (держим дистанцию)
    pub chase_stopping_distance: f32,
    /// Насколько противник должен сместиться, чтобы перестроить путь погони
    pub chase_retarget_threshold: f32,
    pub patrol_score: f32,
    pub chase_score: f32,
    /// Flee score = (pivot − health) × scale
    pub flee_health_pivot: f32,
    pub flee_score_scale: f32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            spot_radius: 10.0,
            waypoint_skip_distance: 3.0,
            max_shoot_distance: 20.0,
            chase_stopping_distance: 10.0,
            chase_retarget_threshold: 1.0,
            patrol_score: 10.0,
            chase_score: 20.0,
            flee_health_pivot: 30.0,
            flee_score_scale: 2.0,
        }
    }
}
