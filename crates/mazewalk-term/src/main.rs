//! mazewalk: generate a maze and watch DFS or greedy best-first search it.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use mazewalk_board::BoardConfig;
use mazewalk_term::TermDriver;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Coarse maze width in cells
    #[arg(short = 'W', long, default_value = "10")]
    width: i32,

    /// Coarse maze height in cells
    #[arg(short = 'H', long, default_value = "10")]
    height: i32,

    /// Seed for maze generation and marker placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds between search steps
    #[arg(short, long, default_value = "0.04")]
    interval: f32,

    /// Do not replay the path once the end is found
    #[arg(long)]
    no_auto_trace: bool,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &args.log_file {
        logger.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    logger.init();

    let config = BoardConfig {
        step_interval: args.interval,
        auto_trace: !args.no_auto_trace,
        ..BoardConfig::default()
    }
    .with_size(args.width, args.height);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    config.validate()?;
    log::info!("starting with {config:?}");

    mazewalk_term::run(config, TermDriver::new().with_mouse(!args.no_mouse))
}
