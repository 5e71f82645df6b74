use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake in the terminal")]
struct Cli {
    /// Maximum absolute coordinate of the playable grid
    #[arg(long, default_value = "7")]
    bound: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "500")]
    tick_ms: u64,

    /// Seed the RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        ..GameConfig::with_bound(cli.bound)
    };

    let mut mode = match cli.seed {
        Some(seed) => HumanMode::with_seed(config, seed)?,
        None => HumanMode::new(config)?,
    };
    mode.run().await?;

    Ok(())
}
