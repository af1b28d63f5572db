//! Integration tests for background correction and cumulative release

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::{fixture, rstest};
use tritium_lsc::{
    cumulative_activity, subtract_background, subtract_background_from_measurements, Error,
    MeasurementSet, Sample,
};
use tritium_units::{Dimension, Quantity, Unit};
use tritium_utils::SliceExt;

fn bq(values: [f64; 4]) -> [Quantity; 4] {
    values.map(|a| a * Unit::BQ)
}

/// Seven sampling events with two different blanks
#[fixture]
fn raw_run() -> MeasurementSet {
    let background_1 = 0.282 * Unit::BQ;
    let background_2 = 0.272 * Unit::BQ;

    [
        (bq([1.102, 0.300, 0.347, 0.308]), background_1),
        (bq([1.412, 0.352, 0.354, 0.329]), background_1),
        (bq([1.069, 0.447, 0.662, 0.347]), background_1),
        (bq([2.415, 0.569, 0.570, 0.333]), background_1),
        (bq([2.538, 0.510, 0.348, 0.292]), background_2),
        (bq([1.188, 0.351, 0.343, 0.313]), background_2),
        (bq([1.163, 0.541, 0.349, 0.316]), background_2),
    ]
    .into_iter()
    .zip(1..)
    .map(|((vials, background), id)| Sample::new(id, vials).with_background(background))
    .collect()
}

#[rstest]
#[case(0.0, 0.0)] // case 1
#[case(0.1, 0.3)] // case 2
#[case(0.3, 0.3)] // case 3
fn at_or_below_background_is_zero(#[case] measured: f64, #[case] background: f64) {
    let corrected = subtract_background(measured * Unit::BQ, background * Unit::BQ).unwrap();
    assert_eq!(corrected, Quantity::zero(Dimension::ACTIVITY));
}

#[rstest]
#[case(0.4, 0.3)] // case 1
#[case(6.352, 0.265)] // case 2
#[case(1.0e3, 0.0)] // case 3
fn above_background_is_difference(#[case] measured: f64, #[case] background: f64) {
    let corrected = subtract_background(measured * Unit::BQ, background * Unit::BQ).unwrap();
    assert_eq!(corrected, (measured - background) * Unit::BQ);
    assert_eq!(corrected.dimension(), Dimension::ACTIVITY);
}

#[rstest]
fn corrected_set_has_no_background(raw_run: MeasurementSet) {
    let corrected = subtract_background_from_measurements(&raw_run).unwrap();
    assert!(corrected.is_background_subtracted());
    assert_eq!(corrected.len(), raw_run.len());

    // every vial is floored, never negative
    for sample in &corrected {
        assert_eq!(sample.vials.len(), 4);
        assert!(sample.vials.iter().all(|v| v.activity.value() >= 0.0));
    }
}

#[rstest]
fn cumulative_release_of_run(raw_run: MeasurementSet) {
    let corrected = subtract_background_from_measurements(&raw_run).unwrap();
    let release = cumulative_activity(&corrected).unwrap();

    let values = release.iter().map(Quantity::value).collect::<Vec<f64>>();
    assert_eq!(values.len(), 7);
    assert!(values.is_non_decreasing());

    let expected = [0.929, 2.248, 3.645, 6.404, 9.004, 10.111, 11.392];
    for (value, expected) in values.iter().zip(expected) {
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-9);
    }
}

#[rstest]
fn final_value_is_total_of_every_vial(raw_run: MeasurementSet) {
    let corrected = subtract_background_from_measurements(&raw_run).unwrap();
    let release = cumulative_activity(&corrected).unwrap();

    let every_vial: f64 = corrected
        .iter()
        .flat_map(|s| s.vials.iter())
        .map(|v| v.activity.value())
        .sum();

    let last = release.last().unwrap().value();
    assert_relative_eq!(last, every_vial, max_relative = 1e-12);
}

#[rstest]
fn accumulating_raw_measurements_fails(raw_run: MeasurementSet) {
    assert!(matches!(
        cumulative_activity(&raw_run),
        Err(Error::BackgroundNotSubtracted { sample: 1 })
    ));
}
