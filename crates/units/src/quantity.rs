//! Module for dimensioned values and their arithmetic

// crate modules
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::parsers;
use crate::unit::Unit;

// tritium modules
use tritium_utils::{f, ValueExt};

// external crates
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};

// standard library
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric value tagged with a physical [Dimension]
///
/// Values are stored in SI base units, so a [Quantity] created from `1 h` and
/// one created from `3600 s` are identical. Converting back out is always
/// explicit with [to()](Quantity::to).
///
/// ## Arithmetic
///
/// Multiplication and division are always defined and compose dimensions.
/// Addition and subtraction require identical dimensions:
///
/// - [checked_add()](Quantity::checked_add) and
///   [checked_sub()](Quantity::checked_sub) return
///   [Error::DimensionMismatch]
/// - the `+` and `-` operators panic on a mismatch, which is always a
///   programming error in the calling code
///
/// Comparisons between quantities of different dimensions are undefined, and
/// `partial_cmp` returns `None`.
///
/// ```rust
/// # use tritium_units::{Dimension, Quantity, Unit};
/// let radius = Quantity::new(1.65, Unit::CM);
/// let area = radius * radius * std::f64::consts::PI;
/// assert_eq!(area.dimension(), Dimension::AREA);
///
/// // explicit conversion to a unit of the same dimension
/// let minutes = Quantity::new(2.0, Unit::HOUR).to(Unit::MINUTE).unwrap();
/// assert_eq!(minutes, 120.0);
///
/// // quantities may also be parsed
/// let rate: Quantity = "3.5e8 neutron/s".parse().unwrap();
/// assert_eq!(rate.dimension(), Dimension::PARTICLE_RATE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Create a quantity from a value in the given unit
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: value * unit.factor,
            dimension: unit.dimension,
        }
    }

    /// Create a quantity directly from an SI base unit value
    pub const fn from_si(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    /// Zero of a given dimension
    pub const fn zero(dimension: Dimension) -> Self {
        Self::from_si(0.0, dimension)
    }

    /// Magnitude in SI base units
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Physical dimension of the quantity
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Magnitude expressed in another unit of the same dimension
    ///
    /// ```rust
    /// # use approx::assert_relative_eq;
    /// # use tritium_units::{Quantity, Unit};
    /// let volume = Quantity::new(100.0, Unit::ML);
    /// assert_relative_eq!(volume.to(Unit::L).unwrap(), 0.1, max_relative = 1e-12);
    /// assert!(volume.to(Unit::HOUR).is_err());
    /// ```
    pub fn to(&self, unit: Unit) -> Result<f64> {
        self.ensure_dimension(unit.dimension, "conversion")?;
        Ok(self.value / unit.factor)
    }

    /// Check the quantity has the expected dimension
    pub fn ensure_dimension(&self, expected: Dimension, operation: &'static str) -> Result<()> {
        if self.dimension == expected {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                operation,
                expected,
                found: self.dimension,
            })
        }
    }

    /// Check if the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Addition that fails on mismatched dimensions
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        rhs.ensure_dimension(self.dimension, "addition")?;
        Ok(Self::from_si(self.value + rhs.value, self.dimension))
    }

    /// Subtraction that fails on mismatched dimensions
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        rhs.ensure_dimension(self.dimension, "subtraction")?;
        Ok(Self::from_si(self.value - rhs.value, self.dimension))
    }

    /// Raise the quantity to an integer power
    pub fn powi(self, n: i8) -> Self {
        Self::from_si(self.value.powi(n.into()), self.dimension.powi(n))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.dimension.is_dimensionless() {
            write!(f, "{}", self.value.sci(5, 2))
        } else {
            write!(f, "{} {}", self.value.sci(5, 2), self.dimension)
        }
    }
}

impl std::str::FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (remainder, (magnitude, terms)) =
            parsers::quantity(s).map_err(|_| Error::ParseError(s.to_string()))?;

        if !remainder.trim().is_empty() {
            return Err(Error::ParseError(s.to_string()));
        }

        Ok(Self::new(magnitude, parsers::combine_terms(&terms)?))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension == other.dimension {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

impl Add for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the dimensions differ, see [Quantity::checked_add]
    fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the dimensions differ, see [Quantity::checked_sub]
    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Quantity {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_si(-self.value, self.dimension)
    }
}

impl Mul for Quantity {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_si(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}

impl Div for Quantity {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_si(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.value * rhs, self.dimension)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.value / rhs, self.dimension)
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;

    /// Shorthand for [Quantity::new], e.g. `12.0 * Unit::HOUR`
    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self, rhs)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // SI form that parses back into an identical quantity
        let s = if self.dimension.is_dimensionless() {
            f!("{:e}", self.value)
        } else {
            f!("{:e} {}", self.value, self.dimension)
        };
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| D::Error::custom(f!("invalid quantity \"{s}\": {e}")))
    }
}
