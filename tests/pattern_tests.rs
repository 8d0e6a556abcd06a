use lifeview::config::SimulationConfig;
use lifeview::grid::Grid;
use lifeview::pattern::Pattern;
use lifeview::pattern::PatternError;
use lifeview::world::World;

fn read_pattern(name: &str) -> anyhow::Result<Pattern> {
    let bytes = std::fs::read(format!("tests/patterns/{name}"))?;

    Ok(Pattern::parse(&bytes)?)
}

fn live(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, c)| c.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect()
}

fn quiet(width: usize, height: usize) -> SimulationConfig {
    SimulationConfig {
        width,
        height,
        random_cells_per_step: 0,
        ..Default::default()
    }
}

#[test]
fn test_patterns() -> anyhow::Result<()> {
    let pattern_dir = std::fs::read_dir("tests/patterns")?;
    let mut tested = 0;
    let mut failed = Vec::new();

    for entry in pattern_dir {
        let path = entry?.path();
        let bytes = std::fs::read(&path)?;

        match Pattern::parse(&bytes) {
            Ok(pattern) => {
                assert!(pattern.name.is_some(), "{path:?}");
                assert!(!pattern.cells().is_empty(), "{path:?}");
                tested += 1;
            }
            Err(e) => failed.push((path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed to parse {:?}: {:#}", path, err);
        }

        panic!(
            "{}/{} patterns failed to parse",
            failed.len(),
            tested + failed.len()
        );
    }

    assert!(tested > 0, "no patterns found");

    Ok(())
}

#[test]
fn gosper_gun_metadata() -> anyhow::Result<()> {
    let gun = read_pattern("gosperglidergun.rle")?;

    assert_eq!(gun.name.as_deref(), Some("Gosper glider gun"));
    assert_eq!((gun.width(), gun.height()), (36, 9));
    assert_eq!(gun.cells().len(), 36);

    Ok(())
}

#[test]
fn glider_moves_diagonally() -> anyhow::Result<()> {
    let glider = read_pattern("glider.rle")?;
    let mut world = World::empty(quiet(20, 15), 0);

    world.stamp(&glider, 2, 2);
    let start = live(world.grid());

    for _ in 0..4 {
        world.step();
    }

    let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(live(world.grid()), shifted);

    Ok(())
}

#[test]
fn pulsar_has_period_three() -> anyhow::Result<()> {
    let pulsar = read_pattern("pulsar.rle")?;
    let mut world = World::empty(quiet(40, 30), 0);

    assert_eq!(world.stamp_centered(&pulsar), 48);
    let start = live(world.grid());

    world.step();
    assert_ne!(live(world.grid()), start);

    world.step();
    world.step();
    assert_eq!(live(world.grid()), start);

    Ok(())
}

#[test]
fn centered_blinker_oscillates() -> anyhow::Result<()> {
    let blinker = read_pattern("blinker.rle")?;
    let mut world = World::empty(quiet(20, 15), 0);
    world.stamp_centered(&blinker);

    assert_eq!(live(world.grid()), vec![(7, 8), (7, 9), (7, 10)]);

    world.step();
    assert_eq!(live(world.grid()), vec![(6, 9), (7, 9), (8, 9)]);

    Ok(())
}

#[test]
fn oversized_runs_fail_cleanly() {
    for data in [
        b"x = 0, y = 0\n18446744073709551615b2b!".as_slice(),
        b"x = 0, y = 0\n18446744073709551615$o!",
        b"100000000000o!",
    ] {
        assert_eq!(Pattern::parse(data), Err(PatternError::RunTooLong));
    }

    assert_eq!(
        Pattern::parse(b"#N Too wide\n301o!"),
        Err(PatternError::RunTooLong)
    );
}
