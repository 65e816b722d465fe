//! roundcolor CLI — coloring, benchmarking, validation and run inspection.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use roundcolor_protocol::BroadcastPolicy;

mod commands;

#[derive(Parser)]
#[command(name = "roundcolor")]
#[command(version, about = "roundcolor — randomized round-based (Δ+1) vertex coloring")]
struct Cli {
    /// Log per-round telemetry.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Broadcast semantics selectable from the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum BroadcastArg {
    /// Remove the sender's vertex index from neighbor palettes.
    Index,
    /// Remove the sender's committed color from neighbor palettes.
    Color,
}

impl From<BroadcastArg> for BroadcastPolicy {
    fn from(arg: BroadcastArg) -> Self {
        match arg {
            BroadcastArg::Index => BroadcastPolicy::VertexIndex,
            BroadcastArg::Color => BroadcastPolicy::CommittedColor,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Color a graph from a JSON input file.
    Color {
        /// Path to the coloring input (JSON).
        input: String,

        /// Protocol config (TOML). Overrides the config embedded in the input.
        #[arg(short, long)]
        config: Option<String>,

        /// Seed for the random source.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Broadcast semantics.
        #[arg(short, long, value_enum)]
        broadcast: Option<BroadcastArg>,

        /// Abort after this many rounds.
        #[arg(long)]
        round_limit: Option<u32>,

        /// Write the coloring output (JSON) here instead of stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Record a per-round trace (binary) for `inspect`.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (triangle, isolated, path, sweep, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Base seed for graph generation and protocol runs.
        #[arg(long, default_value_t = roundcolor_types::constants::DEFAULT_SEED)]
        seed: u64,

        /// Broadcast semantics.
        #[arg(short, long, value_enum)]
        broadcast: Option<BroadcastArg>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a coloring input (.json) or protocol config (.toml).
    Validate {
        /// Path to input or config file.
        path: String,
    },

    /// Inspect a recorded run trace.
    Inspect {
        /// Path to trace file.
        path: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Color {
            input,
            config,
            seed,
            broadcast,
            round_limit,
            output,
            snapshot,
        } => commands::color(&commands::ColorArgs {
            input,
            config,
            seed,
            broadcast: broadcast.map(Into::into),
            round_limit,
            output,
            snapshot,
            verbose: cli.verbose,
        }),
        Commands::Benchmark {
            scenario,
            seed,
            broadcast,
            output,
        } => commands::benchmark(&scenario, seed, broadcast.map(Into::into), output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
