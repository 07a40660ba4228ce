//! Combat integration test
//!
//! Headless App, тики через run_fixed_tick.
//!
//! Проверяем:
//! - снаряд убивает ровно один раз (одно EntityDied на entity)
//! - снаряд никогда не ранит своего владельца
//! - cooldown выстрела игрока
//! - смерть игрока завершает матч
//! - HealthChanged/DamageDealt на каждое попадание
//! - буферы событий не растут между тиками

use bevy::prelude::*;
use tankarena_simulation::*;

/// Все EntityDied, увиденные за прогон
#[derive(Resource, Default)]
struct DeathLog(Vec<Entity>);

fn record_deaths(mut deaths: EventReader<EntityDied>, mut log: ResMut<DeathLog>) {
    for death in deaths.read() {
        log.0.push(death.entity);
    }
}

/// Все HealthChanged (entity, current, max)
#[derive(Resource, Default)]
struct HealthLog(Vec<(Entity, f32, f32)>);

fn record_health_changes(mut changes: EventReader<HealthChanged>, mut log: ResMut<HealthLog>) {
    for change in changes.read() {
        log.0.push((change.entity, change.current, change.max));
    }
}

/// Все DamageDealt (target, damage, target_died)
#[derive(Resource, Default)]
struct DamageLog(Vec<(Entity, f32, bool)>);

fn record_damage(mut dealt: EventReader<DamageDealt>, mut log: ResMut<DamageLog>) {
    for damage in dealt.read() {
        log.0.push((damage.target, damage.damage, damage.target_died));
    }
}

/// Helper: арена без автоспавна, матч уже запущен
fn create_combat_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.insert_resource(ArenaConfig {
        spawn_points: Vec::new(),
        ..default()
    });
    app.add_plugins(SimulationPlugin);
    app.init_resource::<DeathLog>()
        .init_resource::<HealthLog>()
        .init_resource::<DamageLog>();
    app.add_systems(
        FixedUpdate,
        (record_deaths, record_health_changes, record_damage).after(TickSet::Resolution),
    );

    // Startup (initialize_level без spawn points ничего не делает)
    app.update();
    app
}

fn spawn_registered_player(app: &mut App, position: Vec3, settings: &TankSettings) -> Entity {
    let player = spawn_player(&mut app.world_mut().commands(), position, settings);
    app.world_mut().flush();

    let mut director = app.world_mut().resource_mut::<ArenaDirector>();
    director.register_player(player);
    director.start_match();
    player
}

/// Танк без AI (мишень)
fn spawn_dummy(app: &mut App, position: Vec3, max_health: f32) -> Entity {
    app.world_mut()
        .spawn((
            Actor { faction_id: BOT_FACTION },
            Health::new(max_health),
            Transform::from_translation(position),
        ))
        .id()
}

fn spawn_projectile(app: &mut App, owner: Entity, position: Vec3, damage: f32) -> Entity {
    app.world_mut()
        .spawn((
            Projectile::new(owner, damage, Vec3::ZERO),
            Transform::from_translation(position),
        ))
        .id()
}

fn projectile_count(app: &mut App) -> usize {
    app.world_mut()
        .query::<&Projectile>()
        .iter(app.world())
        .count()
}

fn health_of(app: &App, entity: Entity) -> f32 {
    app.world()
        .get::<Health>(entity)
        .map(|health| health.current)
        .expect("entity has Health")
}

#[test]
fn test_player_shot_kills_target() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &TankSettings::default());
    let target = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -6.0), 25.0);

    app.world_mut().get_mut::<PlayerInput>(player).expect("player input").fire = true;
    app.world_mut().get_mut::<PlayerInput>(player).expect("player input").aim_point =
        Some(Vec3::new(0.0, 3.0, -6.0));

    run_fixed_tick(&mut app);
    assert_eq!(projectile_count(&mut app), 1);
    // fire — edge-triggered
    assert!(!app.world().get::<PlayerInput>(player).expect("player input").fire);

    for _ in 0..60 {
        run_fixed_tick(&mut app);
    }

    assert_eq!(app.world().resource::<DeathLog>().0, vec![target]);
    assert!(!app.world().entities().contains(target));
    assert_eq!(projectile_count(&mut app), 0);
    assert_eq!(app.world().resource::<ArenaDirector>().phase(), MatchPhase::InProgress);
}

#[test]
fn test_simultaneous_hits_kill_once() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::new(20.0, 0.0, 0.0), &TankSettings::default());
    let shooter = spawn_dummy(&mut app, Vec3::new(-20.0, 0.0, 0.0), 100.0);
    let target = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, 10.0), 25.0);

    // Два снаряда разных владельцев внутри корпуса цели в одном тике
    spawn_projectile(&mut app, player, Vec3::new(0.0, 0.0, 10.0), 25.0);
    spawn_projectile(&mut app, shooter, Vec3::new(0.5, 0.0, 10.0), 25.0);

    run_fixed_tick(&mut app);

    assert_eq!(app.world().resource::<DeathLog>().0, vec![target]);
    assert_eq!(projectile_count(&mut app), 0);

    for _ in 0..10 {
        run_fixed_tick(&mut app);
    }
    assert_eq!(app.world().resource::<DeathLog>().0.len(), 1);
}

#[test]
fn test_projectile_never_damages_owner() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &TankSettings::default());

    // Снаряд игрока прямо в корпусе игрока: коллизии нет, урона нет
    let own = spawn_projectile(&mut app, player, Vec3::ZERO, 25.0);
    for _ in 0..5 {
        run_fixed_tick(&mut app);
    }
    assert_eq!(health_of(&app, player), 100.0);
    assert!(app.world().entities().contains(own));

    // Чужой снаряд в той же точке ранит
    let enemy = spawn_dummy(&mut app, Vec3::new(30.0, 0.0, 0.0), 100.0);
    spawn_projectile(&mut app, enemy, Vec3::ZERO, 25.0);
    run_fixed_tick(&mut app);
    assert_eq!(health_of(&app, player), 75.0);
}

#[test]
fn test_projectile_destroyed_by_arena_wall() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &TankSettings::default());

    let wall_hit = spawn_projectile(&mut app, player, Vec3::new(60.0, 0.0, 0.0), 25.0);
    run_fixed_tick(&mut app);

    assert!(!app.world().entities().contains(wall_hit));
    assert!(app.world().resource::<DeathLog>().0.is_empty());
}

#[test]
fn test_player_fire_respects_cooldown() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &TankSettings::default());

    let pull_trigger = |app: &mut App| {
        let mut input = app.world_mut().get_mut::<PlayerInput>(player).expect("player input");
        input.fire = true;
        input.aim_point = Some(Vec3::new(0.0, 0.0, -10.0));
    };

    // shoot_interval 1 s = 60 тиков
    for _ in 0..50 {
        pull_trigger(&mut app);
        run_fixed_tick(&mut app);
    }
    assert_eq!(projectile_count(&mut app), 1);

    for _ in 0..20 {
        pull_trigger(&mut app);
        run_fixed_tick(&mut app);
    }
    assert_eq!(projectile_count(&mut app), 2);
}

#[test]
fn test_player_death_finishes_match() {
    let mut app = create_combat_app(42);
    let settings = TankSettings {
        max_health: 25.0,
        ..default()
    };
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &settings);
    let enemy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, 30.0), 100.0);

    spawn_projectile(&mut app, enemy, Vec3::new(1.0, 0.0, 0.0), 25.0);
    run_fixed_tick(&mut app);

    let director = app.world().resource::<ArenaDirector>();
    assert_eq!(director.phase(), MatchPhase::Finished);
    assert_eq!(director.player(), None);
    assert!(!app.world().entities().contains(player));
    assert_eq!(app.world().resource::<DeathLog>().0, vec![player]);

    // Матч окончен — тики больше ничего не двигают
    let stray = app
        .world_mut()
        .spawn((
            Projectile::new(enemy, 25.0, Vec3::X * 10.0),
            Transform::from_xyz(0.0, 0.0, -20.0),
        ))
        .id();
    for _ in 0..10 {
        run_fixed_tick(&mut app);
    }
    assert_eq!(
        app.world().get::<Transform>(stray).expect("stray projectile").translation,
        Vec3::new(0.0, 0.0, -20.0)
    );
}

#[test]
fn test_hits_report_health_changes() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::new(20.0, 0.0, 0.0), &TankSettings::default());
    let target = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, 10.0), 100.0);

    spawn_projectile(&mut app, player, Vec3::new(0.0, 0.0, 10.0), 25.0);
    run_fixed_tick(&mut app);
    assert_eq!(app.world().resource::<HealthLog>().0, vec![(target, 75.0, 100.0)]);

    // Первый снаряд добивает, второй попадает в уже мёртвую цель (Ignored)
    spawn_projectile(&mut app, player, Vec3::new(0.0, 0.0, 10.0), 100.0);
    spawn_projectile(&mut app, player, Vec3::new(0.5, 0.0, 10.0), 100.0);
    run_fixed_tick(&mut app);

    assert_eq!(
        app.world().resource::<HealthLog>().0,
        vec![(target, 75.0, 100.0), (target, 0.0, 100.0)]
    );
    assert_eq!(
        app.world().resource::<DamageLog>().0,
        vec![(target, 25.0, false), (target, 100.0, true)]
    );
    assert_eq!(app.world().resource::<DeathLog>().0, vec![target]);
}

#[test]
fn test_event_buffers_stay_bounded() {
    let mut app = create_combat_app(42);
    let player = spawn_registered_player(&mut app, Vec3::ZERO, &TankSettings::default());
    let target = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, 10.0), 1.0e9);

    // Каждый тик: один снаряд в стену и одно попадание в мишень
    for _ in 0..300 {
        spawn_projectile(&mut app, player, Vec3::new(60.0, 0.0, 0.0), 25.0);
        spawn_projectile(&mut app, player, Vec3::new(0.0, 0.0, 10.0), 1.0);
        run_fixed_tick(&mut app);
    }

    // Double buffer: не больше двух тиков событий
    let world = app.world();
    assert!(world.resource::<Events<ProjectileCollision>>().len() <= 4);
    assert!(world.resource::<Events<DamageDealt>>().len() <= 2);
    assert!(world.resource::<Events<HealthChanged>>().len() <= 2);
    assert_eq!(app.world().resource::<HealthLog>().0.len(), 300);
    assert!(health_of(&app, target) > 0.0);
}
