// Buffer lifecycle for a single timing trial.

use ndarray::Array1;
use rand::Rng;
use rand::distributions::{Distribution, Uniform};

/// The input and output buffers owned by one trial.
///
/// Both are zero-initialized on allocation and dropped when the trial
/// ends; nothing is carried over between trials.
pub struct TrialBuffers {
    pub input: Array1<f64>,
    pub output: Array1<f64>,
}

impl TrialBuffers {
    pub fn allocate(length: usize) -> Self {
        Self {
            input: Array1::<f64>::zeros(length),
            output: Array1::<f64>::zeros(length),
        }
    }

    /// Fill the input buffer with independent uniform draws from [-1, 1).
    /// The output buffer stays zeroed until the kernel writes it.
    pub fn fill_uniform<R: Rng>(&mut self, rng: &mut R) {
        let dist = Uniform::from(-1.0..1.0);
        for value in self.input.iter_mut() {
            *value = dist.sample(rng);
        }
    }
}
