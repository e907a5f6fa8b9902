// top-level library module

pub mod buffers;
pub mod stats;
pub mod trial;

pub use trial::{BenchConfig, BenchReport, run_benchmark};

/// Number of elements timed per trial unless overridden.
pub const DEFAULT_LENGTH: usize = 1_000_000;

/// Number of trials folded into the reported mean unless overridden.
pub const DEFAULT_TRIALS: usize = 100;
