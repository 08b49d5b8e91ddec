use crate::build_info;
use crate::decomposition::Backend;
use crate::sink::ValueFormat;
use crate::solver::*;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Five point stencil driver.
/// Logs every cell whose magnitude changes by less than 1e-2 in a step.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid rows
    #[arg(default_value = "10000")]
    pub nx: usize,

    /// Grid columns
    #[arg(default_value = "200")]
    pub ny: usize,

    /// Number of time steps
    #[arg(default_value = "200")]
    pub nt: usize,

    /// Log file for convergence records, truncated if it exists.
    #[arg(short, long, default_value = "data_out")]
    pub output: PathBuf,

    /// Update engine.
    #[arg(short, long, default_value = "parallel")]
    pub engine: Engine,

    /// Execution backend for parallel stages.
    #[arg(short, long, default_value = "rayon")]
    pub backend: Backend,

    /// The number of threads to use, 0 for all available.
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// How magnitudes are written to the log.
    #[arg(short, long, default_value = "compat")]
    pub format: ValueFormat,

    /// Do not print the step counter.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the final `current` field as csv.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the final `current` field as an image, WARNING: one pixel per cell.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn solver_parameters(&self) -> SolverParameters {
        SolverParameters {
            nx: self.nx,
            ny: self.ny,
            nt: self.nt,
            engine: self.engine,
            backend: self.backend,
            threads: self.threads,
        }
    }

    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        init_tracing();

        if args.threads > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(args.threads)
                .thread_name(|i| format!("rayon_thread_{}", i))
                .build_global()
            {
                tracing::warn!("rayon pool already initialized: {e}");
            }
        }

        args
    }
}

/// Log to stderr, filtered by `RUST_LOG`, default `warn`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
