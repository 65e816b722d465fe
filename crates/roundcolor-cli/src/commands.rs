//! CLI command implementations.

use roundcolor_bench::metrics::BenchmarkMetrics;
use roundcolor_bench::runner::BenchmarkRunner;
use roundcolor_bench::scenarios::{Scenario, ScenarioKind};
use roundcolor_debug::hooks::{ObserverChain, SnapshotHook, TelemetryHook};
use roundcolor_debug::snapshot::RunTrace;
use roundcolor_io::contract::{ColoringInput, ColoringOutput};
use roundcolor_io::validator::{validate_coloring, validate_input};
use roundcolor_protocol::{BroadcastPolicy, ProtocolConfig, RoundExecutor};
use roundcolor_telemetry::sinks::TracingSink;
use roundcolor_telemetry::EventBus;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Arguments of the `color` subcommand.
pub struct ColorArgs {
    pub input: String,
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub broadcast: Option<BroadcastPolicy>,
    pub round_limit: Option<u32>,
    pub output: Option<String>,
    pub snapshot: Option<String>,
    pub verbose: bool,
}

fn load_config(path: &str) -> Result<ProtocolConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Color a graph from an input file.
pub fn color(args: &ColorArgs) -> CliResult {
    let text = std::fs::read_to_string(&args.input)?;
    let mut input = ColoringInput::from_json(&text)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => input.config.clone().unwrap_or_default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(policy) = args.broadcast {
        config.broadcast = policy;
    }
    if args.round_limit.is_some() {
        config.round_limit = args.round_limit;
    }
    input.config = Some(config.clone());
    validate_input(&input)?;

    let max_degree = input.effective_max_degree();
    tracing::info!(
        vertices = input.graph.vertex_count(),
        edges = input.graph.edge_count(),
        max_degree,
        broadcast = config.broadcast.name(),
        "coloring graph"
    );
    if config.broadcast == BroadcastPolicy::VertexIndex {
        tracing::debug!("broadcast removes vertex indices, not committed colors; use --broadcast color for the committed-color protocol");
    }

    let mut telemetry = TelemetryHook::new();
    let mut snapshots = SnapshotHook::new();
    let result = {
        let mut chain = ObserverChain::new();
        chain.push(&mut telemetry);
        if args.snapshot.is_some() {
            chain.push(&mut snapshots);
        }
        let mut executor = RoundExecutor::new(&input.graph, max_degree, config)?;
        executor.run_with(&mut chain)
    };

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(args.verbose)));
    bus.emit_all(telemetry.drain_events());
    bus.shutdown();

    if let Some(path) = &args.snapshot {
        std::fs::write(path, snapshots.trace().to_bytes()?)?;
        tracing::info!(path = %path, rounds = snapshots.trace().snapshots.len(), "trace written");
    }

    let outcome = result?;
    validate_coloring(&input.graph, &outcome.colors, max_degree)?;

    let output = ColoringOutput::from_outcome(&outcome, max_degree);
    let json = output.to_json()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("Coloring written to: {path}");
        }
        None => println!("{json}"),
    }
    println!(
        "It took {} rounds to color the graph ({} colors, seed {}).",
        output.rounds, output.colors_used, output.seed
    );

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    seed: u64,
    broadcast: Option<BroadcastPolicy>,
    output_path: Option<&str>,
) -> CliResult {
    println!("roundcolor Benchmark Suite");
    println!("══════════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: triangle, isolated, path, sweep, all");
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind, seed)?;
        if let Some(policy) = broadcast {
            scenario.config = scenario.config.with_broadcast(policy);
        }

        println!(
            "Running: {} ({} case{}, broadcast {})",
            kind.name(),
            scenario.cases.len(),
            if scenario.cases.len() == 1 { "" } else { "s" },
            scenario.config.broadcast.name(),
        );

        let metrics = BenchmarkRunner::run(&scenario, seed)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        for m in &metrics {
            println!(
                "  {:<10} V={:<6} E={:<7} Δ={:<4} rounds={:<5} colors={:<4} {:.3}ms {}",
                m.scenario,
                m.vertex_count,
                m.edge_count,
                m.max_degree,
                m.rounds,
                m.colors_used,
                m.wall_time * 1000.0,
                if m.valid { "ok" } else { "STALLED" },
            );
        }
        println!();
        all_metrics.extend(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a coloring input or a protocol config.
pub fn validate(path: &str) -> CliResult {
    println!("roundcolor Validator");
    println!("────────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = load_config(path)?;
        match config.validate() {
            Ok(()) => println!("✅ Config is valid (broadcast {}).", config.broadcast.name()),
            Err(e) => println!("❌ Config validation failed: {e}"),
        }
    } else if path.ends_with(".json") {
        println!("Validating input: {path}");
        let content = std::fs::read_to_string(path)?;
        match ColoringInput::from_json(&content).and_then(|input| {
            validate_input(&input)?;
            Ok(input)
        }) {
            Ok(input) => println!(
                "✅ Input is valid ({} vertices, {} edges, max degree {}).",
                input.graph.vertex_count(),
                input.graph.edge_count(),
                input.effective_max_degree()
            ),
            Err(e) => println!("❌ Input validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (input).");
    }

    Ok(())
}

/// Inspect a recorded run trace.
pub fn inspect(path: &str) -> CliResult {
    println!("roundcolor Trace Inspector");
    println!("──────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let trace = RunTrace::from_bytes(&data)?;

    match trace.seed {
        Some(seed) => println!("Seed:         {seed}"),
        None => println!("Seed:         (run did not finish)"),
    }
    println!("Rounds:       {}", trace.snapshots.len());

    if let Some(last) = trace.snapshots.last() {
        println!("Vertices:     {}", last.vertex_count());
        println!("Uncommitted:  {}", last.uncommitted());
        let min_palette = last.palette_sizes.iter().min().copied().unwrap_or(0);
        let max_palette = last.palette_sizes.iter().max().copied().unwrap_or(0);
        println!("Palette size: [{min_palette}, {max_palette}]");
        println!();
        println!("round  uncommitted");
        for snap in &trace.snapshots {
            println!("{:>5}  {:>11}", snap.round, snap.uncommitted());
        }
    }

    match trace.first_recoloring() {
        Some(round) => println!("❌ Committed color changed in round {round}"),
        None => println!("✅ Commitments are permanent"),
    }
    match trace.first_palette_growth() {
        Some(round) => println!("❌ A palette grew in round {round}"),
        None => println!("✅ Palettes never grow"),
    }

    Ok(())
}
