//! Headless симуляция Tank Arena
//!
//! Собирает уровень, стартует матч и гоняет фиксированное число тиков
//! без рендера. Первый аргумент (опционально) — путь к TOML конфигу арены.

use std::path::Path;
use std::process;

use tankarena_simulation::*;

const TICK_COUNT: usize = 1000;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match ArenaConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                init_logger();
                log_error(&format!("❌ {}", err));
                process::exit(1);
            }
        },
        None => ArenaConfig::default(),
    };

    let seed = config.seed;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Tank Arena headless simulation (seed: {})", seed));

    app.insert_resource(config);
    app.add_plugins(SimulationPlugin);

    // Startup: initialize_level
    app.update();
    app.world_mut().resource_mut::<ArenaDirector>().start_match();

    for tick in 0..TICK_COUNT {
        run_fixed_tick(&mut app);

        let director = app.world().resource::<ArenaDirector>();
        if tick % 100 == 0 {
            log(&format!(
                "Tick {}: {} bots alive, player {:?}",
                tick,
                director.bots().len(),
                director.player()
            ));
        }

        if director.phase() == MatchPhase::Finished {
            log_info(&format!("Match finished at tick {}", tick));
            break;
        }
    }

    log_info("Simulation complete!");
}
