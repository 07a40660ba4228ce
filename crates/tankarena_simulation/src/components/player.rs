//! Player control компоненты
//!
//! Отмечают entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::*;

use crate::components::Actor;

/// Marker component для player-controlled танка
///
/// - AI systems используют `With<Bot>` (игрок туда не попадает)
/// - Input systems используют `With<Player>`
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Actor, PlayerInput)]
pub struct Player;

/// Снимок ввода игрока на текущий тик
///
/// Заполняется внешним input collaborator'ом (клавиатура, геймпад, тест).
/// `fire` — edge-triggered: player_control сбрасывает его после обработки.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Ось движения: x → world X, y → world Z
    pub move_axis: Vec2,
    /// Точка прицеливания на земле (raycast курсора)
    pub aim_point: Option<Vec3>,
    pub fire: bool,
}
