//! Skirmish headless client.
//!
//! Loads a content directory, builds the world, applies the scenario, and
//! runs the simulation for a fixed number of ticks, logging a summary.
//!
//! ```bash
//! SKIRMISH_CONTENT_DIR=content SKIRMISH_TICKS=600 RUST_LOG=skirmish_runtime=debug \
//!     cargo run -p skirmish-client
//! ```
mod config;

use anyhow::{Context, Result};
use skirmish_content::ContentFactory;
use skirmish_core::{ResourceType, TerrainKind};
use skirmish_runtime::World;

use config::ClientConfig;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Loading content from {}", config.content_dir.display());

    let mut content = ContentFactory::new(&config.content_dir)
        .load_all()
        .with_context(|| format!("loading {}", config.content_dir.display()))?;
    if let Some(seconds) = config.tick_seconds {
        content.rules.simulation.tick_seconds = seconds;
    }

    let mut world = World::from_content(&content).context("building the world")?;
    tracing::info!(
        units = world.unit_count(),
        ticks = config.ticks,
        tick_seconds = content.rules.simulation.tick_seconds,
        "Skirmish started"
    );

    for tick in 1..=config.ticks {
        world.run(1);
        if config.report_every > 0 && tick % config.report_every == 0 {
            report(&world);
        }
    }

    tracing::info!("Skirmish finished");
    report(&world);

    if config.show_map {
        for row in world.map().rows() {
            println!("{row}");
        }
    }
    Ok(())
}

fn report(world: &World) {
    let states = world
        .state_counts()
        .into_iter()
        .map(|(state, count)| format!("{state}={count}"))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::info!(
        tick = world.ticks(),
        clock = world.clock(),
        gold = world.ledger().stock(ResourceType::Gold),
        wood = world.ledger().stock(ResourceType::Wood),
        trees = world.map().count(TerrainKind::Tree),
        units = world.unit_count(),
        pooled = world.pool().len(),
        corpses = world.effects().len(),
        "{states}"
    );
}
