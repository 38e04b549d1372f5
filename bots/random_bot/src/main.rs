use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use walker::{GameConfig, Move, ALL_MOVES};
use walker_bot_utils::Bot;

/// The seed used when none is given, so that two runs over the same input
/// produce the same sequence of moves.
const DEFAULT_SEED: u64 = 1;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let rng = StdRng::seed_from_u64(args.seed);

    RandomBot { rng }.run()
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, config: &GameConfig) {
        info!(
            "Random walker launching on a {}x{} map",
            config.width, config.height
        );
    }

    fn play_turn(&mut self) -> Move {
        *ALL_MOVES.choose(&mut self.rng).unwrap()
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout carries the move tokens, so all diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
