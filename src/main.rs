use std::env;
use std::io::{self, Write};

use grid_dungeon::DungeonConfig;
use log::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading dungeon config from {path}");
            DungeonConfig::load(&path)?
        }
        None => {
            warn!("no config path given, using defaults");
            DungeonConfig::default()
        }
    };

    info!(
        "generating {}x{} {} dungeon with seed {}",
        config.width,
        config.height,
        config.strategy.name(),
        config.seed
    );
    let grid = config.generate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &grid)?;
    writeln!(out)?;
    Ok(())
}
