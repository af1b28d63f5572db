//! Physical dimensions as exponents of the SI base dimensions

// standard library
use std::ops::{Div, Mul};

/// Exponents of the base dimensions used by the toolkit
///
/// Only the base dimensions that appear in tritium release analysis are
/// tracked: length (m), mass (kg), time (s), and amount of substance (mol).
///
/// Particle counts such as `neutron` and `particle` are amounts of 1/N_A mol,
/// so a tritium breeding ratio in particles per neutron is dimensionless and
/// an activity in Bq is simply a rate (s^-1).
///
/// Multiplication and division compose dimensions by adding and subtracting
/// exponents.
///
/// ```rust
/// # use tritium_units::Dimension;
/// assert_eq!(Dimension::LENGTH * Dimension::LENGTH, Dimension::AREA);
/// assert_eq!(Dimension::AMOUNT / Dimension::VOLUME, Dimension::CONCENTRATION);
/// assert_eq!(Dimension::LENGTH.powi(3), Dimension::VOLUME);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Length exponent (m)
    pub length: i8,
    /// Mass exponent (kg)
    pub mass: i8,
    /// Time exponent (s)
    pub time: i8,
    /// Amount of substance exponent (mol)
    pub amount: i8,
}

impl Dimension {
    /// Pure number
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0);
    /// Length (m)
    pub const LENGTH: Self = Self::new(1, 0, 0, 0);
    /// Area (m^2)
    pub const AREA: Self = Self::new(2, 0, 0, 0);
    /// Volume (m^3)
    pub const VOLUME: Self = Self::new(3, 0, 0, 0);
    /// Mass (kg)
    pub const MASS: Self = Self::new(0, 1, 0, 0);
    /// Time (s)
    pub const TIME: Self = Self::new(0, 0, 1, 0);
    /// Amount of substance or particle count (mol)
    pub const AMOUNT: Self = Self::new(0, 0, 0, 1);
    /// Activity, decays per unit time (Bq)
    pub const ACTIVITY: Self = Self::new(0, 0, -1, 0);
    /// Particle generation or loss rate (mol s^-1)
    pub const PARTICLE_RATE: Self = Self::new(0, 0, -1, 1);
    /// Concentration (mol m^-3)
    pub const CONCENTRATION: Self = Self::new(-3, 0, 0, 1);
    /// Velocity, including mass-transfer coefficients (m s^-1)
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0);

    /// Construct from the base dimension exponents
    pub const fn new(length: i8, mass: i8, time: i8, amount: i8) -> Self {
        Self {
            length,
            mass,
            time,
            amount,
        }
    }

    /// Check if every exponent is zero
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Raise the dimension to an integer power
    pub fn powi(self, n: i8) -> Self {
        Self::new(
            self.length * n,
            self.mass * n,
            self.time * n,
            self.amount * n,
        )
    }

    /// Base unit symbols paired with their exponents
    fn exponents(&self) -> [(&'static str, i8); 4] {
        [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("mol", self.amount),
        ]
    }
}

impl Mul for Dimension {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.length + rhs.length,
            self.mass + rhs.mass,
            self.time + rhs.time,
            self.amount + rhs.amount,
        )
    }
}

impl Div for Dimension {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.powi(-1)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let terms = self
            .exponents()
            .iter()
            .filter(|(_, exp)| *exp != 0)
            .map(|(symbol, exp)| match exp {
                1 => symbol.to_string(),
                _ => format!("{symbol}^{exp}"),
            })
            .collect::<Vec<String>>();

        write!(f, "{}", terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_si_terms() {
        assert_eq!(Dimension::CONCENTRATION.to_string(), "m^-3 mol");
        assert_eq!(Dimension::PARTICLE_RATE.to_string(), "s^-1 mol");
        assert_eq!(Dimension::LENGTH.to_string(), "m");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "dimensionless");
    }

    #[test]
    fn flux_dimension_composition() {
        // area * velocity * concentration is a particle rate
        let flux = Dimension::AREA * Dimension::VELOCITY * Dimension::CONCENTRATION;
        assert_eq!(flux, Dimension::PARTICLE_RATE);
    }

    #[test]
    fn breeding_ratio_is_dimensionless() {
        assert!((Dimension::AMOUNT / Dimension::AMOUNT).is_dimensionless());
    }
}
