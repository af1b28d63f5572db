//! Immutable table of known units

// crate modules
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::parsers;

// standard library
use std::ops::{Div, Mul};

/// Avogadro constant (mol^-1)
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// A unit of measure as a scale factor to SI base units
///
/// Every [Unit] is a conversion factor to the SI base units of its
/// [Dimension]. There is no mutable registry: the known units are constants
/// and compound units are built by multiplication, division, and powers, or
/// parsed from expressions such as `"neutron/s"`.
///
/// ```rust
/// # use tritium_units::{Dimension, Unit};
/// // compound units compose both the factor and the dimension
/// let rate = Unit::NEUTRON / Unit::S;
/// assert_eq!(rate.dimension, Dimension::PARTICLE_RATE);
///
/// // parse a unit expression
/// let velocity: Unit = "cm/h".parse().unwrap();
/// assert_eq!(velocity.dimension, Dimension::VELOCITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Multiplier converting a value in this unit to SI base units
    pub factor: f64,
    /// Physical dimension of the unit
    pub dimension: Dimension,
}

impl Unit {
    /// Pure number
    pub const DIMENSIONLESS: Self = Self::new(1.0, Dimension::DIMENSIONLESS);

    /// Metre
    pub const M: Self = Self::new(1.0, Dimension::LENGTH);
    /// Centimetre
    pub const CM: Self = Self::new(1.0e-2, Dimension::LENGTH);
    /// Millimetre
    pub const MM: Self = Self::new(1.0e-3, Dimension::LENGTH);
    /// Inch
    pub const INCH: Self = Self::new(2.54e-2, Dimension::LENGTH);

    /// Litre
    pub const L: Self = Self::new(1.0e-3, Dimension::VOLUME);
    /// Millilitre
    pub const ML: Self = Self::new(1.0e-6, Dimension::VOLUME);

    /// Second
    pub const S: Self = Self::new(1.0, Dimension::TIME);
    /// Minute
    pub const MINUTE: Self = Self::new(60.0, Dimension::TIME);
    /// Hour
    pub const HOUR: Self = Self::new(3600.0, Dimension::TIME);
    /// Day
    pub const DAY: Self = Self::new(86400.0, Dimension::TIME);

    /// Gram
    pub const G: Self = Self::new(1.0e-3, Dimension::MASS);
    /// Kilogram
    pub const KG: Self = Self::new(1.0, Dimension::MASS);

    /// Mole
    pub const MOL: Self = Self::new(1.0, Dimension::AMOUNT);
    /// A single particle, 1/N_A mol
    pub const PARTICLE: Self = Self::new(1.0 / AVOGADRO, Dimension::AMOUNT);
    /// A single neutron, defined as one particle
    pub const NEUTRON: Self = Self::PARTICLE;

    /// Becquerel
    pub const BQ: Self = Self::new(1.0, Dimension::ACTIVITY);

    /// Construct a unit from an SI factor and dimension
    pub const fn new(factor: f64, dimension: Dimension) -> Self {
        Self { factor, dimension }
    }

    /// Find a named unit in the table of known units
    ///
    /// Names are case sensitive, and common aliases are accepted.
    ///
    /// ```rust
    /// # use tritium_units::Unit;
    /// assert_eq!(Unit::lookup("inches"), Some(Unit::INCH));
    /// assert_eq!(Unit::lookup("n"), Some(Unit::NEUTRON));
    /// assert_eq!(Unit::lookup("furlong"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        UNIT_TABLE
            .iter()
            .find(|(aliases, _)| aliases.contains(&name))
            .map(|(_, unit)| *unit)
    }

    /// Raise the unit to an integer power
    pub fn powi(self, n: i8) -> Self {
        Self::new(self.factor.powi(n.into()), self.dimension.powi(n))
    }
}

/// Every named unit and the aliases it may be written as
const UNIT_TABLE: [(&[&str], Unit); 17] = [
    (&["m", "meter", "metre"], Unit::M),
    (&["cm", "centimeter", "centimetre"], Unit::CM),
    (&["mm", "millimeter", "millimetre"], Unit::MM),
    (&["in", "inch", "inches"], Unit::INCH),
    (&["L", "l", "liter", "litre"], Unit::L),
    (&["mL", "ml", "milliliter", "millilitre"], Unit::ML),
    (&["s", "second", "seconds"], Unit::S),
    (&["min", "minute", "minutes"], Unit::MINUTE),
    (&["h", "hr", "hour", "hours"], Unit::HOUR),
    (&["d", "day", "days"], Unit::DAY),
    (&["g", "gram", "grams"], Unit::G),
    (&["kg", "kilogram", "kilograms"], Unit::KG),
    (&["mol", "mole", "moles"], Unit::MOL),
    (&["particle", "particles"], Unit::PARTICLE),
    (&["n", "neutron", "neutrons"], Unit::NEUTRON),
    (&["Bq", "becquerel"], Unit::BQ),
    (&["dimensionless"], Unit::DIMENSIONLESS),
];

impl Mul for Unit {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.factor * rhs.factor, self.dimension * rhs.dimension)
    }
}

impl Div for Unit {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.factor / rhs.factor, self.dimension / rhs.dimension)
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (remainder, terms) =
            parsers::unit_expression(s.trim()).map_err(|_| Error::ParseError(s.to_string()))?;

        if !remainder.trim().is_empty() {
            return Err(Error::ParseError(s.to_string()));
        }

        parsers::combine_terms(&terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_is_unique() {
        let mut names = UNIT_TABLE
            .iter()
            .flat_map(|(aliases, _)| aliases.iter())
            .collect::<Vec<_>>();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn per_neutron_cancels() {
        let tbr = Unit::PARTICLE / Unit::NEUTRON;
        assert_eq!(tbr.factor, 1.0);
        assert!(tbr.dimension.is_dimensionless());
    }
}
