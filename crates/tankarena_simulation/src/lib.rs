//! Tank Arena Simulation Core
//!
//! ECS-симуляция арены на Bevy 0.16: utility AI ботов + общая боевая модель
//! (health, damage, cooldown выстрела, коллизии снарядов).
//!
//! За пределами ядра (внешние collaborators):
//! - рендер, UI, камера, ввод с устройств
//! - navmesh pathfinding (только через `PathPlanner::compute_path`)
//! - физика (снаряды летят кинематически, коллизии — простой overlap)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod director;
pub mod logger;
pub mod movement;
pub mod navigation;
pub mod player;

pub use ai::{
    AIPlugin, BehaviorKind, BehaviorState, Bot, BotConfig, OpponentRegistry, UtilityStateMachine,
};
pub use combat::{
    fire_cannon, Cannon, CombatPlugin, DamageDealt, Dead, EntityDied, HealthChanged, Projectile,
    ProjectileCollision,
};
pub use components::*;
pub use config::{ArenaConfig, ConfigError, TankSettings};
pub use director::{
    spawn_bot, spawn_player, ArenaDirector, DirectorPlugin, MatchPhase, SpawnPoints, BOT_FACTION,
    PLAYER_FACTION,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::MovementPlugin;
pub use navigation::{
    ArenaWaypoints, NavPlanner, NavigationError, NavigationPlugin, OpenFieldPlanner, PathFollower,
    PathPlanner, WaypointPool, WaypointProvider,
};
pub use player::PlayerPlugin;

/// Фазы одного тика симуляции (FixedUpdate)
///
/// Порядок важен: cooldown/health → восприятие → решения → движение.
/// Решение, принятое ботом в этом тике, сразу влияет на его MoveIntent.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Cooldown пушек
    Cooldowns,
    /// Snapshot позиций/здоровья противников (read-only на весь тик)
    Perception,
    /// Player input → MoveIntent + выстрел
    Input,
    /// Utility FSM ботов
    Decision,
    /// PathFollower: advance + направление к следующему waypoint
    Navigation,
    /// Интеграция движения танков
    Movement,
    /// Полёт снарядов + детекция коллизий
    Projectiles,
    /// Применение урона от коллизий
    Resolution,
    /// Смерть, деспавн, фаза матча
    Lifecycle,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Берёт `ArenaConfig` из World, если он уже вставлен, иначе default.
/// `DeterministicRng` и `NavPlanner` вставляются только если их ещё нет —
/// тесты и хост могут подменить их до добавления plugin'а.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<ArenaConfig>()
            .cloned()
            .unwrap_or_default();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(config.seed));
        }

        let bounds = config.bounds();
        if !app.world().contains_resource::<NavPlanner>() {
            app.insert_resource(NavPlanner::new(OpenFieldPlanner::new(bounds)));
        }

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            .insert_resource(bounds)
            .insert_resource(ArenaWaypoints::from(config.waypoint_positions()))
            .insert_resource(SpawnPoints(config.spawn_positions()))
            .insert_resource(config)
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Cooldowns,
                    TickSet::Perception,
                    TickSet::Input,
                    TickSet::Decision,
                    TickSet::Navigation,
                    TickSet::Movement,
                    TickSet::Projectiles,
                    TickSet::Resolution,
                    TickSet::Lifecycle,
                )
                    .chain()
                    .run_if(director::match_in_progress),
            )
            .add_plugins((
                CombatPlugin,
                AIPlugin,
                NavigationPlugin,
                PlayerPlugin,
                MovementPlugin,
                DirectorPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Ровно один тик FixedUpdate, без привязки к wall-clock
///
/// Сдвигает `Time<Fixed>` на один timestep и прогоняет расписание напрямую,
/// затем обновляет буферы combat-событий (иначе они растут весь матч).
/// Используется тестами и headless прогоном для детерминизма.
pub fn run_fixed_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
    combat::update_combat_events(app.world_mut());
}

/// Snapshot компонента `T` всех entities в детерминированном формате
///
/// Entities сортируются по index, компонент сериализуется через Debug.
/// Два прогона с одним seed обязаны давать одинаковые байты.
pub fn world_snapshot<T>(world: &mut World) -> Vec<u8>
where
    T: Component + std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
