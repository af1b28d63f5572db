//! Background subtraction for vial activities

// crate modules
use crate::error::{Error, Result};
use crate::measurement::{MeasurementSet, Sample, Vial};

// tritium modules
use tritium_units::Quantity;

// external crates
use log::{debug, trace};

/// Subtract the background from a measured activity
///
/// Returns `measured - background` when the measurement is above the
/// background, otherwise a zero activity. The result is never negative.
///
/// A background in a different dimension to the measurement is an error.
///
/// ```rust
/// # use approx::assert_relative_eq;
/// # use tritium_lsc::subtract_background;
/// # use tritium_units::{Dimension, Quantity, Unit};
/// let corrected = subtract_background(1.102 * Unit::BQ, 0.282 * Unit::BQ).unwrap();
/// assert_relative_eq!(corrected.to(Unit::BQ).unwrap(), 0.820, max_relative = 1e-12);
///
/// // measurements at or below the background are floored at zero
/// let floored = subtract_background(0.254 * Unit::BQ, 0.290 * Unit::BQ).unwrap();
/// assert_eq!(floored, Quantity::zero(Dimension::ACTIVITY));
/// ```
pub fn subtract_background(measured: Quantity, background: Quantity) -> Result<Quantity> {
    let difference = measured.checked_sub(background)?;

    if measured > background {
        Ok(difference)
    } else {
        debug!("Measured {measured} is not above background {background}, set to zero");
        Ok(Quantity::zero(measured.dimension()))
    }
}

/// Subtract the background from every vial of every sample
///
/// Each sample is corrected with its own background, and the samples of the
/// returned set carry no background at all. The order of samples and vials
/// is unchanged.
///
/// Any sample without a background is an error, see
/// [MeasurementSet::with_shared_background] for applying a single background
/// to an entire run.
pub fn subtract_background_from_measurements(raw: &MeasurementSet) -> Result<MeasurementSet> {
    raw.iter().map(correct_sample).collect()
}

/// Background-corrected copy of a single sample
fn correct_sample(sample: &Sample) -> Result<Sample> {
    let background = sample
        .background
        .ok_or(Error::MissingBackground { sample: sample.id })?;

    let vials = sample
        .vials
        .iter()
        .map(|vial| {
            let activity = subtract_background(vial.activity, background)?;
            trace!("Sample {} vial {} corrected to {activity}", sample.id, vial.id);
            Ok(Vial {
                id: vial.id,
                activity,
            })
        })
        .collect::<Result<Vec<Vial>>>()?;

    Ok(Sample {
        id: sample.id,
        vials,
        background: None,
    })
}
