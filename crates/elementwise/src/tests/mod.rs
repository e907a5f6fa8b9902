// unit tests

use super::*;

const TEST_INPUT: [f64; 8] = [
  -1.0, -0.5, 0.0, 0.25, //
  0.5, 0.75, 1.5, -2.0, //
];

#[test]
fn square_matches_elementwise_product() {
  let mut output = [0.0_f64; 8];
  square(&TEST_INPUT, &mut output);

  for i in 0..TEST_INPUT.len() {
    assert_eq!(output[i], TEST_INPUT[i] * TEST_INPUT[i]);
  }
}

#[test]
fn square_is_idempotent_for_fixed_input() {
  let mut first = [0.0_f64; 8];
  let mut second = [0.0_f64; 8];

  square(&TEST_INPUT, &mut first);
  square(&TEST_INPUT, &mut second);

  assert_eq!(first, second);
}

#[test]
fn square_of_negative_input_is_non_negative() {
  let mut output = [0.0_f64; 8];
  square(&TEST_INPUT, &mut output);

  assert!(output.iter().all(|&v| v >= 0.0));
}

#[test]
#[should_panic]
fn square_rejects_mismatched_lengths() {
  let mut output = [0.0_f64; 4];
  square(&TEST_INPUT, &mut output);
}
