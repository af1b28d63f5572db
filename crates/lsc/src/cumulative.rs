//! Cumulative release from background-corrected samples

// crate modules
use crate::error::{Error, Result};
use crate::measurement::MeasurementSet;

// tritium modules
use tritium_units::{Dimension, Quantity};
use tritium_utils::SliceExt;

// external crates
use log::debug;

/// Cumulative activity released up to and including each sample
///
/// Every sample is reduced to the sum of its vials, and a running total is
/// taken over the samples in their stored order. The result has one value
/// per sample and never decreases.
///
/// The samples must already be background-corrected with
/// [subtract_background_from_measurements()](crate::subtract_background_from_measurements).
/// Any sample still carrying a background fails before any aggregation is
/// done.
///
/// ```rust
/// # use tritium_lsc::{cumulative_activity, MeasurementSet, Sample};
/// # use tritium_units::Unit;
/// let corrected: MeasurementSet = [
///     Sample::new(1, [1.0_f64, 0.5].map(|a| a * Unit::BQ)),
///     Sample::new(2, [0.25_f64, 0.25].map(|a| a * Unit::BQ)),
/// ]
/// .into_iter()
/// .collect();
///
/// let cumulative = cumulative_activity(&corrected).unwrap();
/// assert_eq!(cumulative[0], 1.5 * Unit::BQ);
/// assert_eq!(cumulative[1], 2.0 * Unit::BQ);
/// ```
pub fn cumulative_activity(measurements: &MeasurementSet) -> Result<Vec<Quantity>> {
    if let Some(sample) = measurements.iter().find(|s| s.background.is_some()) {
        return Err(Error::BackgroundNotSubtracted { sample: sample.id });
    }

    let totals = measurements
        .sample_totals()?
        .iter()
        .map(Quantity::value)
        .collect::<Vec<f64>>();

    debug!("Accumulating {} sample totals", totals.len());

    Ok(totals
        .cumulative_sum()
        .into_iter()
        .map(|total| Quantity::from_si(total, Dimension::ACTIVITY))
        .collect())
}
