//! Conversions between amounts of tritium and activity

// crate modules
use crate::error::Result;

// tritium modules
use tritium_units::{Dimension, Quantity};

/// Specific activity of tritium, 3.57e14 Bq/g
pub const SPECIFIC_ACTIVITY: Quantity = Quantity::from_si(3.57e17, Dimension::new(0, -1, -1, 0));

/// Molar mass of tritium gas (T2) per tritium atom, 3.016 g/mol
pub const MOLAR_MASS: Quantity = Quantity::from_si(6.032e-3 / 2.0, Dimension::new(0, 1, 0, -1));

/// Activity of an amount of tritium
///
/// Converts model output into the units measured by LSC.
///
/// ```rust
/// # use approx::assert_relative_eq;
/// # use tritium_model::quantity_to_activity;
/// # use tritium_units::Unit;
/// let activity = quantity_to_activity(1.0 * Unit::MOL).unwrap();
/// assert_relative_eq!(activity.to(Unit::BQ).unwrap(), 1.076712e15, max_relative = 1e-12);
///
/// assert!(quantity_to_activity(1.0 * Unit::G).is_err());
/// ```
pub fn quantity_to_activity(amount: Quantity) -> Result<Quantity> {
    amount.ensure_dimension(Dimension::AMOUNT, "activity conversion")?;
    Ok(amount * MOLAR_MASS * SPECIFIC_ACTIVITY)
}
