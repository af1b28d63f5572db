//! Cylindrical salt volume of a BABY cell

// crate modules
use crate::error::{Error, Result};

// tritium modules
use tritium_units::{Dimension, Quantity};

// external crates
use serde::{Deserialize, Serialize};

// standard library
use std::f64::consts::PI;

/// Dimensions of the cylindrical salt volume
///
/// The wall area includes the gap between the salt and the crucible, so
/// it is the lateral surface of a cylinder of radius `radius + wall_gap`
/// plus the top surface of the salt.
///
/// ```rust
/// # use approx::assert_relative_eq;
/// # use tritium_model::Geometry;
/// # use tritium_units::{Dimension, Unit};
/// let geometry = Geometry::new(1.0 * Unit::CM, 3.0 * Unit::CM, 1.0 * Unit::CM);
///
/// assert_eq!(geometry.top_area().dimension(), Dimension::AREA);
/// assert_eq!(geometry.volume().dimension(), Dimension::VOLUME);
/// assert_relative_eq!(geometry.volume().to(Unit::ML).unwrap(), 3.0 * std::f64::consts::PI, max_relative = 1e-12);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Inner radius of the salt volume
    pub radius: Quantity,
    /// Height of the salt
    pub height: Quantity,
    /// Gap between the salt and the crucible wall
    pub wall_gap: Quantity,
}

impl Geometry {
    /// New geometry from a radius, height, and wall gap
    pub fn new(radius: Quantity, height: Quantity, wall_gap: Quantity) -> Self {
        Self {
            radius,
            height,
            wall_gap,
        }
    }

    /// Area of the free surface at the top of the salt
    pub fn top_area(&self) -> Quantity {
        PI * self.radius.powi(2)
    }

    /// Area for release through the walls
    pub fn wall_area(&self) -> Quantity {
        2.0 * PI * (self.radius + self.wall_gap) * self.height + self.top_area()
    }

    /// Volume of the salt
    pub fn volume(&self) -> Quantity {
        self.top_area() * self.height
    }

    /// Check every field is a non-negative length and the salt is not empty
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("radius", self.radius),
            ("height", self.height),
            ("wall_gap", self.wall_gap),
        ] {
            crate::parameters::check_dimension(parameter, value, Dimension::LENGTH)?;
            crate::parameters::check_non_negative(parameter, value)?;
        }

        if self.radius.is_zero() || self.height.is_zero() {
            return Err(Error::InvalidParameter {
                parameter: "geometry",
                reason: "radius and height must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Height of a cylinder of the given radius holding a volume
///
/// BABY runs are specified by the volume of salt loaded into the crucible,
/// so the height of the salt follows from `V / (π r²)`.
///
/// ```rust
/// # use approx::assert_abs_diff_eq;
/// # use tritium_model::height_from_volume;
/// # use tritium_units::Unit;
/// let radius = 0.5 * (1.77 * Unit::INCH - 0.12 * Unit::INCH);
/// let height = height_from_volume(radius, 100.0 * Unit::ML).unwrap();
/// assert_abs_diff_eq!(height.to(Unit::CM).unwrap(), 7.25, epsilon = 0.01);
/// ```
pub fn height_from_volume(radius: Quantity, volume: Quantity) -> Result<Quantity> {
    crate::parameters::check_dimension("radius", radius, Dimension::LENGTH)?;
    crate::parameters::check_dimension("volume", volume, Dimension::VOLUME)?;

    if radius.is_zero() {
        return Err(Error::InvalidParameter {
            parameter: "radius",
            reason: "cannot hold a volume with zero radius".to_string(),
        });
    }

    Ok(volume / (PI * radius.powi(2)))
}
