//! Module for vial measurements grouped by sampling event

// crate modules
use crate::error::Result;

// tritium modules
use tritium_units::{Dimension, Quantity};

// external crates
use serde::{Deserialize, Serialize};

/// Activity of a single LSC vial
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Vial {
    /// Vial number within the sample, e.g. 1-4 for a standard bubbler
    pub id: u32,
    /// Measured activity (Bq)
    pub activity: Quantity,
}

/// All vials collected at one sampling event
///
/// The `background` is the blank activity measured alongside the vials. Raw
/// samples carry one, and background-corrected samples never do.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Sample {
    /// Sample identifier, expected to increase chronologically
    pub id: u32,
    /// Vial activities in the order they were recorded
    pub vials: Vec<Vial>,
    /// Background activity for every vial in the sample
    #[serde(default)]
    pub background: Option<Quantity>,
}

impl Sample {
    /// New sample with vials numbered from 1 in the order given
    ///
    /// ```rust
    /// # use tritium_lsc::Sample;
    /// # use tritium_units::{Quantity, Unit};
    /// let sample = Sample::new(1, [1.102_f64, 0.300, 0.347, 0.308].map(|a| a * Unit::BQ))
    ///     .with_background(0.282 * Unit::BQ);
    ///
    /// assert_eq!(sample.vials.len(), 4);
    /// assert_eq!(sample.vials[3].id, 4);
    /// ```
    pub fn new(id: u32, activities: impl IntoIterator<Item = Quantity>) -> Self {
        let vials = activities
            .into_iter()
            .zip(1..)
            .map(|(activity, id)| Vial { id, activity })
            .collect();

        Self {
            id,
            vials,
            background: None,
        }
    }

    /// Set the background activity for the sample
    pub fn with_background(mut self, background: Quantity) -> Self {
        self.background = Some(background);
        self
    }

    /// Sum of every vial activity in the sample
    ///
    /// An empty sample totals zero activity. Vials in anything other than
    /// activity units are rejected.
    pub fn total(&self) -> Result<Quantity> {
        let total = self
            .vials
            .iter()
            .try_fold(Quantity::zero(Dimension::ACTIVITY), |total, vial| {
                total.checked_add(vial.activity)
            })?;
        Ok(total)
    }
}

/// Ordered collection of [Sample]s for one experiment
///
/// Insertion order is preserved and treated as chronological order. Callers
/// are responsible for pushing samples in the order they were taken.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    /// Samples in chronological order
    pub samples: Vec<Sample>,
}

impl MeasurementSet {
    /// Empty measurement set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, keeping insertion order
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples in order
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Use a single background activity for every sample
    ///
    /// Any background already set on a sample is replaced. This is common
    /// when one blank, or the mean of several blanks, is shared across a run.
    pub fn with_shared_background(mut self, background: Quantity) -> Self {
        for sample in &mut self.samples {
            sample.background = Some(background);
        }
        self
    }

    /// Check that no sample still carries a background
    pub fn is_background_subtracted(&self) -> bool {
        self.samples.iter().all(|s| s.background.is_none())
    }

    /// Total activity of each sample, in order
    pub fn sample_totals(&self) -> Result<Vec<Quantity>> {
        self.samples.iter().map(Sample::total).collect()
    }
}

impl FromIterator<Sample> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
