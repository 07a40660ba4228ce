//! Behavior states бота: Patrol, Chase, Flee
//!
//! Каждое состояние даёт score (desirability) каждый тик, hook входа
//! (on_enter) и per-tick update. Состояния работают поверх PathFollower
//! (куда ехать) и возвращают BotAction (куда целиться, стрелять ли).

use bevy::prelude::*;
use rand::RngCore;

use crate::ai::{BotConfig, OpponentSnapshot};
use crate::components::{horizontal_direction, Health};
use crate::navigation::{ArenaWaypoints, PathFollower, PathPlanner, WaypointPool};

/// Вид состояния без per-instance данных (для логов и проверок)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum BehaviorKind {
    Patrol,
    Chase,
    Flee,
}

/// Состояние utility FSM
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum BehaviorState {
    /// Случайный обход waypoints арены
    Patrol,

    /// Преследование противника в радиусе обнаружения
    Chase {
        /// Позиция противника на прошлом тике (для retarget)
        last_opponent_position: Option<Vec3>,
    },

    /// Отход к waypoint, наиболее противоположному противнику
    Flee,
}

/// Что бот хочет сделать пушкой в этом тике
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BotAction {
    /// Новое направление башни (горизонтальное, нормализованное)
    pub aim: Option<Vec3>,
    pub fire: bool,
}

/// Всё, что нужно состояниям на одном тике одного бота
///
/// Собирается системой evaluate_bots из компонентов и ресурсов.
/// `opponent` — snapshot начала тика (read-only).
pub struct BotContext<'a> {
    pub entity: Entity,
    pub position: Vec3,
    pub health: &'a Health,
    pub config: &'a BotConfig,
    pub opponent: Option<OpponentSnapshot>,
    pub path: &'a mut PathFollower,
    pub pool: &'a mut WaypointPool,
    pub arena: &'a ArenaWaypoints,
    pub planner: &'a dyn PathPlanner,
    pub rng: &'a mut dyn RngCore,
}

impl BotContext<'_> {
    /// Перестроить маршрут от текущей позиции к `destination`
    pub fn set_destination(&mut self, destination: Vec3) -> bool {
        self.path.set_path(self.position, destination, self.planner)
    }

    /// Следующий случайный waypoint из пула бота
    pub fn draw_waypoint(&mut self) -> Option<Vec3> {
        self.pool.draw_random(self.arena, &mut *self.rng)
    }

    /// Противник, если он есть и жив
    pub fn live_opponent(&self) -> Option<OpponentSnapshot> {
        self.opponent.filter(|opponent| !opponent.is_dead)
    }

    fn patrol_to_random_waypoint(&mut self) {
        if let Some(waypoint) = self.draw_waypoint() {
            self.set_destination(waypoint);
        }
    }
}

impl BehaviorState {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Patrol => BehaviorKind::Patrol,
            Self::Chase { .. } => BehaviorKind::Chase,
            Self::Flee => BehaviorKind::Flee,
        }
    }

    /// Desirability состояния: 0 = не подходит, > 0 = кандидат
    pub fn score(&self, ctx: &BotContext) -> f32 {
        let config = ctx.config;

        match self {
            Self::Patrol => config.patrol_score,

            Self::Chase { .. } => match ctx.live_opponent() {
                Some(opponent) if ctx.position.distance(opponent.position) <= config.spot_radius => {
                    config.chase_score
                }
                _ => 0.0,
            },

            Self::Flee => (config.flee_health_pivot - ctx.health.current) * config.flee_score_scale,
        }
    }

    /// Hook входа в состояние (вызывается только при смене состояния)
    pub fn on_enter(&mut self, ctx: &mut BotContext, previous: BehaviorKind) {
        crate::log(&format!(
            "🤖 Bot {:?}: {:?} → {:?}",
            ctx.entity,
            previous,
            self.kind()
        ));

        match self {
            Self::Patrol => {
                ctx.path.stopping_distance = ctx.config.waypoint_skip_distance;
                ctx.patrol_to_random_waypoint();
            }

            Self::Chase {
                last_opponent_position,
            } => {
                ctx.path.stopping_distance = ctx.config.chase_stopping_distance;
                // Память прошлой погони устарела: первый update сразу строит путь
                *last_opponent_position = None;
            }

            Self::Flee => {
                ctx.path.stopping_distance = ctx.config.waypoint_skip_distance;
            }
        }
    }

    /// Per-tick логика активного состояния
    pub fn update(&mut self, ctx: &mut BotContext) -> BotAction {
        match self {
            Self::Patrol => {
                if ctx.path.is_empty() {
                    ctx.patrol_to_random_waypoint();
                }
                BotAction::default()
            }

            Self::Chase {
                last_opponent_position,
            } => {
                let Some(opponent) = ctx.live_opponent() else {
                    return BotAction::default();
                };

                let moved = last_opponent_position.map_or(true, |last| {
                    last.distance(opponent.position) > ctx.config.chase_retarget_threshold
                });
                if moved {
                    ctx.set_destination(opponent.position);
                }
                *last_opponent_position = Some(opponent.position);

                let aim = horizontal_direction(opponent.position - ctx.position);
                let max_shoot = ctx.config.max_shoot_distance;

                BotAction {
                    aim: (aim != Vec3::ZERO).then_some(aim),
                    fire: ctx.position.distance_squared(opponent.position) < max_shoot * max_shoot,
                }
            }

            Self::Flee => {
                if let Some(opponent) = ctx.live_opponent() {
                    flee_from(ctx, opponent.position);
                }
                BotAction::default()
            }
        }
    }
}

/// Выбор waypoint "прочь от противника" и перестройка пути к нему
///
/// Берётся waypoint с минимальным dot(направление на waypoint, направление
/// на противника); при равенстве — первый по порядку пула. Путь
/// перестраивается только если цель сменилась или маршрут уже пройден.
/// Каждый тик путь не перепланируется: маршрут к той же цели строится
/// заново лишь после того, как прежний пройден.
fn flee_from(ctx: &mut BotContext, opponent_position: Vec3) {
    ctx.pool.reset(ctx.arena);

    let position = ctx.position;
    let to_opponent = (opponent_position - position).normalize_or_zero();
    let mut best: Option<(Vec3, f32)> = None;

    ctx.pool.for_each(|waypoint| {
        let to_waypoint = (waypoint - position).normalize_or_zero();
        let alignment = to_waypoint.dot(to_opponent);

        if best.map_or(true, |(_, best_alignment)| alignment < best_alignment) {
            best = Some((waypoint, alignment));
        }
    });

    let Some((destination, _)) = best else {
        return;
    };

    if ctx.path.destination() != Some(destination) || ctx.path.is_empty() {
        ctx.set_destination(destination);
    }
}
