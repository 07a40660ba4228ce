//! Player control: PlayerInput → MoveIntent + выстрел
//!
//! Сам ввод (клавиатура, мышь, raycast курсора) — внешний collaborator,
//! он только заполняет компонент `PlayerInput`.

use bevy::prelude::*;

use crate::combat::{fire_cannon, Cannon, Dead};
use crate::components::{horizontal_direction, Health, MoveIntent, Player, PlayerInput, ShootDirection};
use crate::TickSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, player_control.in_set(TickSet::Input));
    }
}

/// System: ввод игрока за тик
///
/// move_axis (x, y) → MoveIntent (x, 0, y). Выстрел: башня поворачивается
/// к aim_point (только по горизонтали), дальше общий fire_cannon с cooldown.
/// Флаг `fire` сбрасывается всегда, даже если выстрел не состоялся.
pub fn player_control(
    mut commands: Commands,
    mut players: Query<
        (
            Entity,
            &Transform,
            &Health,
            &mut PlayerInput,
            &mut MoveIntent,
            &mut ShootDirection,
            &mut Cannon,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    for (entity, transform, health, mut input, mut intent, mut shoot_direction, mut cannon) in
        players.iter_mut()
    {
        intent.0 = Vec3::new(input.move_axis.x, 0.0, input.move_axis.y);

        if !input.fire {
            continue;
        }
        input.fire = false;

        let Some(aim_point) = input.aim_point else {
            continue;
        };

        let position = transform.translation;
        let direction = horizontal_direction(aim_point - position);
        if direction == Vec3::ZERO {
            continue;
        }

        shoot_direction.0 = direction;
        fire_cannon(&mut commands, entity, position, health, &mut cannon, direction);
    }
}
