//! Arena director — жизненный цикл матча
//!
//! Фазы: AwaitingStart → InProgress → Finished.
//! Director держит ростер (игрок + боты), принимает уведомления о смерти
//! и решает, когда матч окончен (игрок мёртв или отсутствует).

use bevy::prelude::*;

use crate::combat::EntityDied;
use crate::components::{Health, Player};
use crate::TickSet;

pub mod spawn;

pub use spawn::{initialize_level, spawn_bot, spawn_player, SpawnPoints, BOT_FACTION, PLAYER_FACTION};

/// Фаза матча
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum MatchPhase {
    /// Уровень собран, ждём старта (Enter в оригинальной игре)
    #[default]
    AwaitingStart,
    InProgress,
    Finished,
}

/// Resource: состояние матча + ростер танков
#[derive(Resource, Debug, Clone, Default)]
pub struct ArenaDirector {
    phase: MatchPhase,
    player: Option<Entity>,
    bots: Vec<Entity>,
}

impl ArenaDirector {
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == MatchPhase::InProgress
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn bots(&self) -> &[Entity] {
        &self.bots
    }

    pub fn register_player(&mut self, entity: Entity) {
        self.player = Some(entity);
    }

    pub fn register_bot(&mut self, entity: Entity) {
        if !self.bots.contains(&entity) {
            self.bots.push(entity);
        }
    }

    /// Запуск матча (только из AwaitingStart)
    pub fn start_match(&mut self) -> bool {
        if self.phase != MatchPhase::AwaitingStart {
            return false;
        }

        self.phase = MatchPhase::InProgress;
        crate::log_info(&format!(
            "🏁 Match started: player {:?}, {} bots",
            self.player,
            self.bots.len()
        ));
        true
    }

    /// Смерть танка: убрать из ростера
    ///
    /// Возвращает `true`, если entity был в ростере. Повторное уведомление
    /// ничего не меняет.
    pub fn notify_death(&mut self, entity: Entity) -> bool {
        if self.player == Some(entity) {
            self.player = None;
            return true;
        }

        let before = self.bots.len();
        self.bots.retain(|bot| *bot != entity);
        self.bots.len() != before
    }

    fn finish(&mut self) {
        if self.phase == MatchPhase::Finished {
            return;
        }

        self.phase = MatchPhase::Finished;
        crate::log_info(&format!(
            "🏁 Game Over! {} bots remaining",
            self.bots.len()
        ));
    }
}

/// Run condition: весь тик симуляции работает только во время матча
pub fn match_in_progress(director: Res<ArenaDirector>) -> bool {
    director.is_in_progress()
}

/// Director Plugin
///
/// Startup: initialize_level (игрок + боты на spawn points).
/// FixedUpdate (TickSet::Lifecycle): смерть → ростер + деспавн, затем фаза матча.
pub struct DirectorPlugin;

impl Plugin for DirectorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaDirector>()
            .init_resource::<SpawnPoints>()
            .add_systems(Startup, initialize_level)
            .add_systems(
                FixedUpdate,
                (handle_deaths, update_match_phase)
                    .chain()
                    .in_set(TickSet::Lifecycle),
            );
    }
}

/// System: EntityDied → notify_death + деспавн танка
pub fn handle_deaths(
    mut commands: Commands,
    mut deaths: EventReader<EntityDied>,
    mut director: ResMut<ArenaDirector>,
) {
    for death in deaths.read() {
        if director.notify_death(death.entity) {
            crate::log(&format!("☠️ {:?} removed from roster", death.entity));
        }

        if let Ok(mut entity) = commands.get_entity(death.entity) {
            entity.despawn();
        }
    }
}

/// System: матч окончен, когда игрока нет или он мёртв
pub fn update_match_phase(mut director: ResMut<ArenaDirector>, players: Query<&Health, With<Player>>) {
    let player_alive = director
        .player()
        .and_then(|player| players.get(player).ok())
        .is_some_and(Health::is_alive);

    if !player_alive {
        director.finish();
    }
}
