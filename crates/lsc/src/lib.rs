//! Background correction and cumulative activity for LSC measurements
//!
//! Tritium released from a BABY cell is collected in bubbler vials that are
//! periodically replaced and counted by liquid scintillation. This crate turns
//! the raw vial activities into the cumulative release curve used to tune the
//! transport model.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use tritium_lsc::{cumulative_activity, subtract_background_from_measurements};
//! # use tritium_lsc::{MeasurementSet, Sample};
//! # use tritium_units::Unit;
//! let bq = |values: [f64; 4]| values.map(|a| a * Unit::BQ);
//!
//! // Raw vial activities for two sampling events, sharing one background
//! let raw: MeasurementSet = [
//!     Sample::new(1, bq([1.102, 0.300, 0.347, 0.308])),
//!     Sample::new(2, bq([1.412, 0.352, 0.354, 0.329])),
//! ]
//! .into_iter()
//! .collect::<MeasurementSet>()
//! .with_shared_background(0.282 * Unit::BQ);
//!
//! // Subtract the background, then accumulate over sampling events
//! let corrected = subtract_background_from_measurements(&raw).unwrap();
//! let release = cumulative_activity(&corrected).unwrap();
//!
//! assert_eq!(release.len(), 2);
//! assert!(release[1] > release[0]);
//! ```
//!
//! ## Core concepts
//!
//! A [MeasurementSet] holds [Sample]s in chronological order, and each
//! [Sample] holds the [Vial] activities collected at that time along with
//! its background.
//!
//! Background correction floors every vial at zero and strips the background
//! from each sample. Accumulation refuses any set that still carries a
//! background, so the two steps can not be applied out of order.
//!
//! ## Reading measurements
//!
//! Measurement sets may be stored as JSON with activities written as unit
//! strings. An optional top-level `background` is shared by every sample
//! that does not set its own.
//!
//! ```json
//! {
//!     "background": "0.282 Bq",
//!     "samples": [
//!         {
//!             "id": 1,
//!             "vials": [
//!                 { "id": 1, "activity": "1.102 Bq" },
//!                 { "id": 2, "activity": "0.300 Bq" }
//!             ]
//!         }
//!     ]
//! }
//! ```

mod background;
mod cumulative;
mod error;
mod measurement;

#[doc(inline)]
pub use background::{subtract_background, subtract_background_from_measurements};

#[doc(inline)]
pub use cumulative::cumulative_activity;

#[doc(inline)]
pub use measurement::{MeasurementSet, Sample, Vial};

#[doc(inline)]
pub use error::{Error, Result};

// tritium modules
use tritium_units::Quantity;

// external crates
use log::info;
use serde::Deserialize;

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a raw measurement set from a JSON file
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
///
/// A top-level `background` is applied to samples without their own.
///
/// ```rust, no_run
/// # use tritium_lsc::{read_json, MeasurementSet};
/// let raw: MeasurementSet = read_json("path/to/run_8.json").unwrap();
/// ```
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<MeasurementSet> {
    let path: &Path = Path::new(path.as_ref());
    info!("Reading {:?}", path.file_name().unwrap_or_default());

    let reader = BufReader::new(File::open(path)?);
    let file: MeasurementFile = serde_json::from_reader(reader)?;
    Ok(file.into_measurement_set())
}

/// Intermediate type for the JSON measurement layout
#[derive(Deserialize, Debug)]
struct MeasurementFile {
    #[serde(default)]
    background: Option<Quantity>,
    samples: Vec<Sample>,
}

impl MeasurementFile {
    fn into_measurement_set(self) -> MeasurementSet {
        let shared = self.background;
        self.samples
            .into_iter()
            .map(|mut sample| {
                sample.background = sample.background.or(shared);
                sample
            })
            .collect()
    }
}
