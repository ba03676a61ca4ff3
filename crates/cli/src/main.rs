//! Memory hierarchy simulator CLI.
//!
//! This binary is presentation glue over `memsim-core`. It performs:
//! 1. **Run:** Load input text (inline or from a file), step the simulation
//!    to completion, and print the final report.
//! 2. **Tracing:** Optionally print one line per step (hit/miss, eviction,
//!    refresh) instead of running silently.
//! 3. **Output:** Plain-text sectioned report or a JSON metrics snapshot.

use clap::{Parser, Subcommand};
use std::{fs, process};

use memsim_core::config::Config;
use memsim_core::sim::{AccessOutcome, DriverState, Simulation, StepReport};
use memsim_core::stats::REPORT_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    author,
    version,
    about = "SRAM/DRAM memory hierarchy simulator",
    long_about = "Simulate a two-level SRAM/DRAM memory hierarchy over an input string.\n\nEach character is one memory access: hits stay in the LRU cache, misses\nfetch from DRAM and may evict. Delay, energy, and periodic refresh energy\nare accumulated per step.\n\nExamples:\n  memsim run -t ABCAABBCCA\n  memsim run -f trace.txt --trace\n  memsim run -t HELLOWORLD --config config.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation over an input string or file.
    Run {
        /// Input text; each character is one access.
        #[arg(short, long)]
        text: Option<String>,

        /// Read the input text from a file instead.
        #[arg(short, long)]
        file: Option<String>,

        /// JSON configuration file (all fields optional).
        #[arg(long)]
        config: Option<String>,

        /// Print one line per step while running.
        #[arg(long)]
        trace: bool,

        /// Emit the final metrics snapshot as JSON instead of a report.
        #[arg(long)]
        json: bool,

        /// Report sections to print (default: all).
        #[arg(long = "section", value_parser = clap::builder::PossibleValuesParser::new(REPORT_SECTIONS))]
        sections: Vec<String>,

        /// Enable core debug logging to stderr.
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            text,
            file,
            config,
            trace,
            json,
            sections,
            verbose,
        }) => cmd_run(text, file, config, trace, json, sections, verbose),
        None => {
            eprintln!("memsim — pass a subcommand");
            eprintln!();
            eprintln!("  memsim run -t <TEXT>           Simulate an inline string");
            eprintln!("  memsim run -f <FILE> --trace   Simulate a file, step by step");
            eprintln!();
            eprintln!("  memsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the simulator: loads config and input, steps to completion, prints
/// the report. On a fatal simulation error, prints the partial metrics and
/// exits with code 1.
#[allow(clippy::fn_params_excessive_bools)]
fn cmd_run(
    text: Option<String>,
    file: Option<String>,
    config_path: Option<String>,
    trace: bool,
    json: bool,
    sections: Vec<String>,
    verbose: bool,
) {
    if verbose {
        init_logging();
    }

    let config = config_path.map_or_else(Config::default, |path| load_config(&path));
    let input = match (text, file) {
        (Some(t), _) => t,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading input {path}: {e}");
            process::exit(1);
        }),
        (None, None) => {
            eprintln!("Error: specify --text <TEXT> or --file <FILE>");
            eprintln!("  memsim run -t ABCAABBCCA");
            process::exit(1);
        }
    };

    let mut sim = Simulation::new(config);
    if let Err(e) = sim.load(input.trim()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    while sim.state() != DriverState::Completed {
        match sim.step() {
            Ok(report) => {
                if trace {
                    print_step(&report);
                }
            }
            Err(e) => {
                eprintln!("\n[!] FATAL: {e}");
                sim.current_metrics().print();
                process::exit(1);
            }
        }
    }

    let snapshot = sim.current_metrics();
    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    } else {
        snapshot.print_sections(&sections);
    }
}

/// Prints one trace line for a completed step, mirroring the per-step
/// status a graphical front end would show.
fn print_step(report: &StepReport) {
    let r = &report.result;
    match r.outcome {
        AccessOutcome::Hit => {
            print!(
                "step {:>4}: '{}' SRAM HIT   | delay {} ns | energy {:.1} pJ",
                report.step, r.symbol, r.sram_delay, r.sram_energy
            );
        }
        AccessOutcome::Miss => {
            print!(
                "step {:>4}: '{}' DRAM MISS  | delay {} ns | energy {:.1} + {:.1} pJ",
                report.step, r.symbol, r.dram_delay, r.dram_energy, r.sram_energy
            );
            if let Some(evicted) = r.evicted {
                print!(" | evicted '{evicted}'");
            }
        }
    }
    if report.refreshed {
        print!(" | refresh +{:.1} pJ", report.refresh_energy);
    }
    println!();
}

/// Loads a JSON configuration file, exiting on read or parse errors.
fn load_config(path: &str) -> Config {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Error parsing config {path}: {e}");
        process::exit(1);
    })
}

/// Installs a stderr `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to core debug output.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memsim_core=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
