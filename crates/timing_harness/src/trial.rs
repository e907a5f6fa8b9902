// The timed trial and the loop that folds trials into a mean.

use std::hint::black_box;
use std::time::Instant;

use elementwise::square;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::buffers::TrialBuffers;
use crate::stats;

/// Settings for one benchmark run.
pub struct BenchConfig {
    pub length: usize,
    pub trials: usize,
    /// Master seed for reproducible runs; `None` seeds every trial
    /// from OS entropy.
    pub seed: Option<u64>,
}

/// Per-trial samples plus the mean the harness reports.
pub struct BenchReport {
    pub trial_ns: Vec<u64>,
    pub mean_ns: f64,
}

/// Generator for one trial's random fill.
///
/// With a master seed, each trial gets a distinct deterministic stream
/// so a whole run can be replayed; without one, each trial reseeds from
/// OS entropy.
fn trial_rng(seed: Option<u64>, trial: usize) -> ChaCha8Rng {
    match seed {
        Some(master) => ChaCha8Rng::seed_from_u64(master.wrapping_add(trial as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run one allocate → fill → compute → time → free cycle and return the
/// elapsed nanoseconds.
///
/// Only the kernel call sits between the clock reads; buffer setup and
/// teardown are excluded from the measurement. `Instant` is monotonic,
/// so wall-clock adjustments cannot skew the sample. The output is read
/// through `black_box` once the clock has stopped so the optimizer
/// cannot drop the squaring loop.
pub fn run_trial(length: usize, rng: &mut ChaCha8Rng) -> u64 {
    let mut buffers = TrialBuffers::allocate(length);
    buffers.fill_uniform(rng);

    let start = Instant::now();
    square(
        buffers.input.as_slice().unwrap(),
        buffers.output.as_slice_mut().unwrap(),
    );
    let elapsed = start.elapsed();

    black_box(buffers.output[0]);

    elapsed.as_nanos() as u64
}

/// Run the configured number of trials and fold them into the mean.
pub fn run_benchmark(config: &BenchConfig) -> BenchReport {
    let mut trial_ns = Vec::with_capacity(config.trials);

    for trial in 0..config.trials {
        let mut rng = trial_rng(config.seed, trial);
        let elapsed = run_trial(config.length, &mut rng);

        log::debug!("Trial {trial}: {elapsed} ns");
        trial_ns.push(elapsed);
    }

    let mean_ns = stats::mean_ns(&trial_ns);

    BenchReport { trial_ns, mean_ns }
}
