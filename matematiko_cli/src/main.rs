use std::time::Duration;

use clap::Parser;
use matematiko_cli::{run, BotKind, Config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let a bot play instead of reading moves from stdin
    #[arg(long, value_enum)]
    autoplay: Option<BotKind>,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Pause before each of the computer's moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    computer_delay_ms: u64,

    /// Print the final state of each game as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if args.num_games == 0 {
        anyhow::bail!("At least one game has to be played");
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = Config {
        rng: StdRng::seed_from_u64(seed),
        autoplay: args.autoplay,
        num_games: args.num_games,
        computer_delay: Duration::from_millis(args.computer_delay_ms),
        json: args.json,
    };

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run(config, &mut stdin, &mut stdout)?;
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
