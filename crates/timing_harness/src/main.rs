// CLI for the elementwise squaring latency harness.

use clap::Parser;

use timing_harness::{BenchConfig, DEFAULT_LENGTH, DEFAULT_TRIALS, run_benchmark, stats};

// setup command line args

#[derive(Parser)]
#[command(about, long_about = None)]
struct CliArgs {
    /// Number of timed trials folded into the mean.
    #[clap(long)]
    trials: Option<usize>,
    /// Number of elements per buffer.
    #[clap(long)]
    length: Option<usize>,
    /// Master seed for a reproducible run; omit to reseed each trial
    /// from OS entropy.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let config = BenchConfig {
        length: args.length.unwrap_or(DEFAULT_LENGTH),
        trials: args.trials.unwrap_or(DEFAULT_TRIALS),
        seed: args.seed,
    };

    let report = run_benchmark(&config);

    log::info!(
        "Trials: {}, min: {} ns, max: {} ns",
        report.trial_ns.len(),
        stats::min_ns(&report.trial_ns),
        stats::max_ns(&report.trial_ns),
    );

    println!("duration:: {}", report.mean_ns);
}
