// This file is a place to exercise the squaring kernel by hand.

use elementwise::square;
use ndarray::Array1;

/// Demo sequence length to use when none is given.
const LENGTH: usize = 8;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
  #[arg(long)]
  length: Option<usize>,
}

/// Squares a short ramp sequence and prints the input next to the output.
fn main() {
  let args = Args::parse();
  let length = match args.length {
    Some(n) => n,
    None => LENGTH,
  };

  let input = get_ramp_array(length);
  let mut output = Array1::<f64>::zeros(length);

  square(input.as_slice().unwrap(), output.as_slice_mut().unwrap());

  println!("Input:   {:#?}", input);
  println!("Squared: {:#?}", output);
}

fn get_ramp_array(length: usize) -> Array1<f64> {
  // evenly spaced values covering [-1, 1)
  let mut data = Array1::<f64>::zeros(length);
  let mut_slice = data.as_slice_mut().unwrap();

  for n in 0..mut_slice.len() {
    mut_slice[n] = -1.0 + 2.0 * (n as f64) / (length as f64);
  }

  data
}
