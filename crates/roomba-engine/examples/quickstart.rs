//! Roomba quickstart: one random world per variant, run to completion.
//!
//! Demonstrates:
//!   1. Building a world from a `SimConfig`
//!   2. Stepping it tick by tick and reading summaries
//!   3. Building a hand-placed world with `ScenarioBuilder`
//!
//! Run with:
//!   RUST_LOG=roomba=debug cargo run --example quickstart

use roomba_core::Coord;
use roomba_engine::{ScenarioBuilder, SimConfig, Simulation, TickSummary};
use tracing_subscriber::EnvFilter;

fn report(label: &str, s: &TickSummary) {
    println!("── {label} ──");
    println!(
        "ticks {:>4}  trash {}/{} ({:.1}% collected)  explored {}",
        s.ticks_elapsed,
        s.trash_initial - s.trash_remaining,
        s.trash_initial,
        s.trash_collected_pct(),
        s.explored_cells
    );
    println!(
        "alive {}  mean battery {:.1}  mean steps {:.1}  mean recharges {:.2}",
        s.agents_alive(),
        s.mean_battery(),
        s.mean_steps(),
        s.mean_recharges()
    );
    for a in &s.agents {
        println!(
            "  roomba {}: {} at {} battery {:>3}  steps {}  recharges {}  cleaned {:.1}%",
            a.id,
            a.state,
            a.coord,
            a.battery,
            a.steps,
            a.recharges,
            a.cleaned_pct(s.trash_initial)
        );
    }
    if let Some(reason) = s.termination {
        println!("stopped: {reason}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Single agent, default 8x8 walled grid.
    let mut single = Simulation::new(SimConfig::single_agent())?;
    let mut summary = single.tick()?;
    while !summary.is_terminated() {
        summary = single.tick()?;
        if summary.ticks_elapsed % 100 == 0 {
            report("single (in progress)", &summary);
        }
    }
    report("single", &summary);

    // Four agents on a larger grid.
    let mut multi = Simulation::create(16, 16, 0.1, 0.15, 4, 7, 2000)?;
    report("multi", &multi.run()?);

    // Hand-placed world.
    let mut scenario = ScenarioBuilder::new(8, 8)
        .station(Coord::new(1, 1))
        .roomba(Coord::new(1, 1))
        .trash(Coord::new(5, 5))
        .seed(3)
        .build()?;
    report("scenario", &scenario.run()?);
    Ok(())
}
