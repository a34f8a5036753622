// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tandem - Thread coordination demos

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use std::time::Duration;

use tandem_core::{
    run_barrier_scenario, run_latch_scenario, run_pingpong_scenario, BarrierConfig, ConsoleSink,
    EventSink, JsonSink, LatchConfig, PingPongConfig, ScenarioEvent, StopFlag,
};

#[derive(Parser)]
#[command(
    name = "tandem",
    version,
    about = "Thread coordination demos - barrier, latch, ping-pong"
)]
struct Cli {
    /// Output format for scenario events
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Workers rendezvous through sequential phases on a reusable barrier
    Barrier(BarrierArgs),
    /// Workers signal a countdown gate, then wait together for the exit signal
    Latch(LatchArgs),
    /// Two threads alternate strictly through paired binary semaphores
    PingPong(PingPongArgs),
    /// Run all three scenarios in sequence
    All(AllArgs),
}

#[derive(Args)]
struct BarrierArgs {
    /// Number of worker threads
    #[arg(long, default_value_t = 5)]
    workers: usize,

    /// Number of work phases before the exit rendezvous
    #[arg(long, default_value_t = 3)]
    phases: usize,

    /// Upper bound for each worker's simulated work delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1s")]
    max_delay: Duration,
}

#[derive(Args)]
struct LatchArgs {
    /// Number of worker threads
    #[arg(long, default_value_t = 5)]
    workers: usize,

    /// Upper bound for each worker's simulated work delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1s")]
    max_delay: Duration,
}

#[derive(Args)]
struct PingPongArgs {
    /// Pause bound between rounds
    #[arg(long, value_parser = humantime::parse_duration, default_value = "500ms")]
    max_delay: Duration,

    /// Stop after this many rounds per side
    #[arg(long)]
    rounds: Option<u64>,

    /// Stop after this much wall-clock time
    #[arg(long, value_parser = humantime::parse_duration)]
    run_for: Option<Duration>,
}

#[derive(Args)]
struct AllArgs {
    /// Number of worker threads for the barrier and latch scenarios
    #[arg(long, default_value_t = 5)]
    workers: usize,

    /// Number of work phases for the barrier scenario
    #[arg(long, default_value_t = 3)]
    phases: usize,

    /// Upper bound for simulated work delays
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1s")]
    max_delay: Duration,

    /// Rounds per side for the ping-pong scenario
    #[arg(long, default_value_t = 10)]
    rounds: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let sink: Arc<dyn EventSink> = match cli.format {
        OutputFormat::Text => Arc::new(ConsoleSink::new()),
        OutputFormat::Json => Arc::new(JsonSink::new()),
    };

    match cli.command {
        Commands::Barrier(args) => {
            let config =
                BarrierConfig::new(args.workers, args.phases).with_max_delay(args.max_delay);
            run_barrier_scenario(&config, &sink)?;
        }
        Commands::Latch(args) => {
            let config = LatchConfig::new(args.workers).with_max_delay(args.max_delay);
            run_latch_scenario(&config, &sink)?;
        }
        Commands::PingPong(args) => {
            let mut config = PingPongConfig::new().with_max_delay(args.max_delay);
            if let Some(rounds) = args.rounds {
                config = config.with_max_rounds(rounds);
            }
            if let Some(run_for) = args.run_for {
                config = config.with_run_for(run_for);
            }
            let stop = stop_on_ctrl_c(&sink)?;
            run_pingpong_scenario(&config, &stop, &sink)?;
        }
        Commands::All(args) => run_all(&args, &sink)?,
    }

    Ok(())
}

/// Run the three scenarios back to back
///
/// A scenario failure is terminal for that scenario but not for its
/// siblings; the command exits non-zero if any of them failed.
fn run_all(args: &AllArgs, sink: &Arc<dyn EventSink>) -> Result<()> {
    let stop = stop_on_ctrl_c(sink)?;
    let mut failed = false;

    let barrier = BarrierConfig::new(args.workers, args.phases).with_max_delay(args.max_delay);
    if let Err(error) = run_barrier_scenario(&barrier, sink) {
        tracing::error!(scenario = "barrier", error = %error, "scenario failed");
        failed = true;
    }

    let latch = LatchConfig::new(args.workers).with_max_delay(args.max_delay);
    if let Err(error) = run_latch_scenario(&latch, sink) {
        tracing::error!(scenario = "latch", error = %error, "scenario failed");
        failed = true;
    }

    let pingpong = PingPongConfig::new()
        .with_max_delay(args.max_delay)
        .with_max_rounds(args.rounds);
    if let Err(error) = run_pingpong_scenario(&pingpong, &stop, sink) {
        tracing::error!(scenario = "ping-pong", error = %error, "scenario failed");
        failed = true;
    }

    if failed {
        anyhow::bail!("one or more scenarios failed");
    }
    Ok(())
}

/// Stop flag raised by Ctrl-C
fn stop_on_ctrl_c(sink: &Arc<dyn EventSink>) -> Result<StopFlag> {
    let stop = StopFlag::new();
    let handler = stop.clone();
    let sink = Arc::clone(sink);
    ctrlc::set_handler(move || {
        if handler.raise() {
            sink.emit(ScenarioEvent::StopRequested);
        }
    })?;
    Ok(stop)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
