//! JSON description of a single BABY run

// crate modules
use crate::error::{Error, Result};
use crate::geometry::{height_from_volume, Geometry};
use crate::model::Model;
use crate::parameters::{check_dimension, ModelParameters};
use crate::schedule::{Irradiation, PeriodicExposure};

// tritium modules
use tritium_units::{Dimension, Quantity};

// external crates
use log::info;
use serde::{Deserialize, Serialize};

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Run configuration as stored on disk
///
/// Every quantity is a string with units, and anything left out takes the
/// default from [ModelParameters::new()]. The salt is given either by its
/// `height` or by its `volume`, but never both.
///
/// ```rust
/// # use approx::assert_relative_eq;
/// # use tritium_model::RunConfig;
/// # use tritium_units::Unit;
/// let config: RunConfig = serde_json::from_str(
///     r#"{
///         "radius": "0.825 in",
///         "volume": "100 mL",
///         "tbr": "5.4e-4",
///         "neutron_rate": "3.54e8 neutron/s",
///         "irradiations": [
///             { "start": "0 h", "stop": "12 h" },
///             { "start": "24 h", "stop": "36 h" }
///         ],
///         "t_final": "4 d"
///     }"#,
/// )
/// .unwrap();
///
/// let model = config.build().unwrap();
/// assert_relative_eq!(model.volume().to(Unit::ML).unwrap(), 100.0, max_relative = 1e-12);
/// assert_eq!(model.parameters().irradiations.len(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Inner radius of the salt volume
    pub radius: Quantity,
    /// Height of salt, exclusive with `volume`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Quantity>,
    /// Volume of salt, exclusive with `height`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Quantity>,
    /// Gap between the salt and the crucible wall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_gap: Option<Quantity>,
    /// Tritium breeding ratio
    pub tbr: Quantity,
    /// Neutron emission rate of the generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutron_rate: Option<Quantity>,
    /// Mass transfer coefficient through the top surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_top: Option<Quantity>,
    /// Mass transfer coefficient through the walls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_wall: Option<Quantity>,
    /// Explicit irradiation periods
    #[serde(default)]
    pub irradiations: Vec<Irradiation>,
    /// Fallback daily exposure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodic: Option<PeriodicExposure>,
    /// Time step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<Quantity>,
    /// Duration of the simulation
    pub t_final: Quantity,
}

impl RunConfig {
    /// Model parameters described by the configuration
    pub fn parameters(&self) -> Result<ModelParameters> {
        check_dimension("tbr", self.tbr, Dimension::DIMENSIONLESS)?;

        let height = match (self.height, self.volume) {
            (Some(height), None) => height,
            (None, Some(volume)) => height_from_volume(self.radius, volume)?,
            (Some(_), Some(_)) => {
                return Err(Error::InvalidParameter {
                    parameter: "height",
                    reason: "set either height or volume, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(Error::InvalidParameter {
                    parameter: "height",
                    reason: "one of height or volume is required".to_string(),
                })
            }
        };

        let mut parameters = ModelParameters::new(self.radius, height, self.tbr.value());

        if let Some(wall_gap) = self.wall_gap {
            parameters.geometry = Geometry::new(self.radius, height, wall_gap);
        }

        parameters.neutron_rate = self.neutron_rate.unwrap_or(parameters.neutron_rate);
        parameters.k_top = self.k_top.unwrap_or(parameters.k_top);
        parameters.k_wall = self.k_wall.unwrap_or(parameters.k_wall);
        parameters.dt = self.dt.unwrap_or(parameters.dt);
        parameters.irradiations = self.irradiations.clone();
        parameters.periodic = self.periodic;

        parameters.validate()?;
        Ok(parameters)
    }

    /// Idle model ready to [run()](Model::run) to `t_final`
    pub fn build(&self) -> Result<Model> {
        check_dimension("t_final", self.t_final, Dimension::TIME)?;
        Model::new(self.parameters()?)
    }
}

/// Read a run configuration from a JSON file
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use tritium_model::read_json;
/// let config = read_json("path/to/run_8.json").unwrap();
/// let mut model = config.build().unwrap();
/// model.run(config.t_final).unwrap();
/// ```
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let path: &Path = Path::new(path.as_ref());
    info!("Reading {:?}", path.file_name().unwrap_or_default());

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
