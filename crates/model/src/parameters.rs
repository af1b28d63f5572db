//! Physical and numerical parameters of the transport model

// crate modules
use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::schedule::{Irradiation, PeriodicExposure};

// tritium modules
use tritium_units::{Dimension, Quantity, Unit};

// external crates
use log::trace;
use serde::{Deserialize, Serialize};

/// Everything needed to run a [Model](crate::Model)
///
/// Only the geometry and the TBR are required, see
/// [ModelParameters::new()] for the defaults of everything else.
///
/// ```rust
/// # use tritium_model::{Irradiation, ModelParameters};
/// # use tritium_units::Unit;
/// let mut parameters = ModelParameters::new(2.0 * Unit::CM, 7.0 * Unit::CM, 5.4e-4);
/// parameters.neutron_rate = 3.5e8 * (Unit::NEUTRON / Unit::S);
/// parameters.irradiations = vec![Irradiation::new(0.0 * Unit::HOUR, 12.0 * Unit::HOUR)];
///
/// assert!(parameters.validate().is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelParameters {
    /// Dimensions of the salt volume
    pub geometry: Geometry,
    /// Tritium breeding ratio, tritons per neutron
    pub tbr: Quantity,
    /// Neutron emission rate of the generator
    pub neutron_rate: Quantity,
    /// Mass transfer coefficient through the top surface
    pub k_top: Quantity,
    /// Mass transfer coefficient through the walls
    pub k_wall: Quantity,
    /// Explicit irradiation periods, these take precedence when present
    #[serde(default)]
    pub irradiations: Vec<Irradiation>,
    /// Fallback daily exposure used when `irradiations` is empty
    #[serde(default)]
    pub periodic: Option<PeriodicExposure>,
    /// Time step
    pub dt: Quantity,
}

impl ModelParameters {
    /// New parameters with BABY defaults
    ///
    /// | Parameter    | Default        |
    /// | ------------ | -------------- |
    /// | wall gap     | 1 cm           |
    /// | neutron rate | 3e8 neutron/s  |
    /// | k_top        | 4.9e-7 m/s     |
    /// | k_wall       | 1.9e-8 m/s     |
    /// | dt           | 1 h            |
    ///
    /// There is no irradiation until one is added.
    pub fn new(radius: Quantity, height: Quantity, tbr: f64) -> Self {
        let velocity = Unit::M / Unit::S;
        Self {
            geometry: Geometry::new(radius, height, 1.0 * Unit::CM),
            tbr: tbr * Unit::DIMENSIONLESS,
            neutron_rate: 3.0e8 * (Unit::NEUTRON / Unit::S),
            k_top: 4.9e-7 * velocity,
            k_wall: 1.9e-8 * velocity,
            irradiations: Vec::new(),
            periodic: None,
            dt: 1.0 * Unit::HOUR,
        }
    }

    /// Check the dimension and range of every parameter
    ///
    /// Each quantity must have the expected dimension and be non-negative,
    /// the time step must be positive, and every irradiation must start
    /// before it stops.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;

        for (parameter, value, expected) in [
            ("tbr", self.tbr, Dimension::DIMENSIONLESS),
            ("neutron_rate", self.neutron_rate, Dimension::PARTICLE_RATE),
            ("k_top", self.k_top, Dimension::VELOCITY),
            ("k_wall", self.k_wall, Dimension::VELOCITY),
            ("dt", self.dt, Dimension::TIME),
        ] {
            check_dimension(parameter, value, expected)?;
            check_non_negative(parameter, value)?;
        }

        if self.dt.is_zero() {
            return Err(Error::InvalidParameter {
                parameter: "dt",
                reason: "time step must be positive".to_string(),
            });
        }

        for irradiation in &self.irradiations {
            irradiation.validate()?;
        }

        if let Some(periodic) = &self.periodic {
            periodic.validate()?;
        }

        trace!("Parameters validated: {self:?}");
        Ok(())
    }
}

/// Fail with [Error::UnexpectedDimension] unless `value` has the expected dimension
pub(crate) fn check_dimension(
    parameter: &'static str,
    value: Quantity,
    expected: Dimension,
) -> Result<()> {
    if value.dimension() == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedDimension {
            parameter,
            expected,
            found: value.dimension(),
        })
    }
}

/// Fail with [Error::InvalidParameter] for negative or non-finite values
pub(crate) fn check_non_negative(parameter: &'static str, value: Quantity) -> Result<()> {
    let v = value.value();
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            parameter,
            reason: format!("{value} is not a finite non-negative value"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters() -> ModelParameters {
        ModelParameters::new(2.0 * Unit::CM, 7.0 * Unit::CM, 1.0e-3)
    }

    #[test]
    fn defaults_are_valid() {
        assert!(parameters().validate().is_ok());
    }

    #[test]
    fn zero_time_step() {
        let mut p = parameters();
        p.dt = 0.0 * Unit::S;
        assert!(matches!(
            p.validate(),
            Err(Error::InvalidParameter { parameter: "dt", .. })
        ));
    }

    #[test]
    fn negative_rate() {
        let mut p = parameters();
        p.neutron_rate = -p.neutron_rate;
        assert!(matches!(
            p.validate(),
            Err(Error::InvalidParameter {
                parameter: "neutron_rate",
                ..
            })
        ));
    }

    #[test]
    fn k_top_as_area_rate() {
        let mut p = parameters();
        p.k_top = 1.0 * (Unit::M.powi(2) / Unit::S);
        assert!(matches!(
            p.validate(),
            Err(Error::UnexpectedDimension {
                parameter: "k_top",
                expected: Dimension::VELOCITY,
                ..
            })
        ));
    }
}
