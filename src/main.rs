use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeview::config::SimulationConfig;
use lifeview::pattern::Pattern;
use lifeview::world::World;

const DEFAULT_GENERATIONS: u64 = 100;

/// Drives the engine the way a screen saver host would: one step per timer tick.
///
/// Usage: `lifeview [pattern.rle] [generations]`
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = SimulationConfig::default();

    let mut world = match args.get(1).map(Path::new) {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let pattern = Pattern::parse(&data)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let mut world = World::empty(config, rand::random());
            let placed = world.stamp_centered(&pattern);

            info!(name = ?pattern.name, placed, "pattern loaded");

            world
        }
        None => World::new(config),
    };

    let generations = match args.get(2) {
        Some(n) => n
            .parse()
            .with_context(|| format!("Invalid generation count \"{n}\""))?,
        None => DEFAULT_GENERATIONS,
    };

    let interval = world.config().frame_interval();
    let mut next_tick = Instant::now();

    for _ in 0..generations {
        let report = world.step();

        info!(
            generation = report.generation,
            population = report.population,
            births = report.births,
            deaths = report.deaths,
            injected = report.injected,
            "step"
        );

        next_tick += interval;
        std::thread::sleep(next_tick.saturating_duration_since(Instant::now()));
    }

    println!("{}", world.grid());

    Ok(())
}
