//! Конфигурация арены (balance levers + геометрия)
//!
//! Все числа, влияющие на баланс, живут здесь с дефолтами оригинальной игры.
//! Загружается из TOML (`ArenaConfig::from_toml_str`), любое поле опционально.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::BotConfig;
use crate::components::ArenaBounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read arena config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse arena config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("arena config field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Параметры танка, общие для игрока и ботов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct TankSettings {
    pub max_health: f32,
    /// Скорость хода (units/sec)
    pub move_speed: f32,
    /// Интервал между выстрелами (секунды)
    pub shoot_interval: f32,
    pub cannon_damage: f32,
    /// Скорость снаряда (units/sec)
    pub projectile_speed: f32,
    /// Расстояние от центра танка до точки вылета снаряда
    pub muzzle_offset: f32,
    pub collision_radius: f32,
}

impl Default for TankSettings {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            move_speed: 10.0,
            shoot_interval: 1.0,
            cannon_damage: 25.0,
            projectile_speed: 10.0,
            muzzle_offset: 2.0,
            collision_radius: 1.5,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub seed: u64,
    /// Частота FixedUpdate
    pub tick_hz: f64,
    /// Сколько ботов спавнить (ограничено числом spawn points − 1)
    pub bots_count: usize,
    /// Арена — квадрат [-half_extent, half_extent] по X/Z
    pub arena_half_extent: f32,
    pub waypoints: Vec<[f32; 3]>,
    pub spawn_points: Vec<[f32; 3]>,
    pub tank: TankSettings,
    pub bot: BotConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            bots_count: 4,
            arena_half_extent: 50.0,
            waypoints: vec![
                [-35.0, 0.0, -35.0],
                [0.0, 0.0, -40.0],
                [35.0, 0.0, -35.0],
                [40.0, 0.0, 0.0],
                [35.0, 0.0, 35.0],
                [0.0, 0.0, 40.0],
                [-35.0, 0.0, 35.0],
                [-40.0, 0.0, 0.0],
            ],
            spawn_points: vec![
                [0.0, 0.0, 0.0],
                [-30.0, 0.0, -30.0],
                [30.0, 0.0, -30.0],
                [30.0, 0.0, 30.0],
                [-30.0, 0.0, 30.0],
            ],
            tank: TankSettings::default(),
            bot: BotConfig::default(),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Загрузка TOML-файла конфигурации
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64); 4] = [
            ("tick_hz", self.tick_hz),
            ("arena_half_extent", self.arena_half_extent as f64),
            ("tank.max_health", self.tank.max_health as f64),
            ("tank.shoot_interval", self.tank.shoot_interval as f64),
        ];

        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }

    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds::new(self.arena_half_extent)
    }

    pub fn waypoint_positions(&self) -> Vec<Vec3> {
        self.waypoints.iter().map(|p| Vec3::from_array(*p)).collect()
    }

    pub fn spawn_positions(&self) -> Vec<Vec3> {
        self.spawn_points.iter().map(|p| Vec3::from_array(*p)).collect()
    }
}
