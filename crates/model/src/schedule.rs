//! Irradiation schedules for the neutron source

// crate modules
use crate::error::{Error, Result};
use crate::parameters::check_dimension;

// tritium modules
use tritium_units::{Dimension, Quantity, Unit};

// external crates
use serde::{Deserialize, Serialize};

/// A single period of neutron irradiation
///
/// The source is active strictly between `start` and `stop`, so the
/// boundaries themselves are not irradiated.
///
/// ```rust
/// # use tritium_model::Irradiation;
/// # use tritium_units::Unit;
/// let irradiation = Irradiation::new(0.0 * Unit::HOUR, 12.0 * Unit::HOUR);
///
/// assert!(irradiation.contains(6.0 * Unit::HOUR));
/// assert!(!irradiation.contains(12.0 * Unit::HOUR));
/// assert!(!irradiation.contains(13.0 * Unit::HOUR));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Irradiation {
    /// Time the generator is switched on
    pub start: Quantity,
    /// Time the generator is switched off
    pub stop: Quantity,
}

impl Irradiation {
    /// New irradiation between two times
    pub fn new(start: Quantity, stop: Quantity) -> Self {
        Self { start, stop }
    }

    /// Check if the source is active at time `t`
    pub fn contains(&self, t: Quantity) -> bool {
        self.start < t && t < self.stop
    }

    /// Check both times are times and the interval is not empty
    pub fn validate(&self) -> Result<()> {
        check_dimension("irradiation start", self.start, Dimension::TIME)?;
        check_dimension("irradiation stop", self.stop, Dimension::TIME)?;

        if self.start < self.stop {
            Ok(())
        } else {
            Err(Error::InvalidParameter {
                parameter: "irradiation",
                reason: format!("start {} is not before stop {}", self.start, self.stop),
            })
        }
    }
}

/// Repeated daily irradiation used when no explicit list is given
///
/// The source is on for the first `exposure_time` of every `period`, up to
/// the `cutoff` time. The start of each period is irradiated and the end of
/// each exposure is not.
///
/// ```rust
/// # use tritium_model::PeriodicExposure;
/// # use tritium_units::Unit;
/// let periodic = PeriodicExposure::daily(12.0 * Unit::HOUR, 2.0 * Unit::DAY);
///
/// assert!(periodic.is_active(6.0 * Unit::HOUR));
/// assert!(!periodic.is_active(18.0 * Unit::HOUR));
/// assert!(periodic.is_active(30.0 * Unit::HOUR));
/// assert!(!periodic.is_active(54.0 * Unit::HOUR));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PeriodicExposure {
    /// Time the source is on at the start of each period
    pub exposure_time: Quantity,
    /// Repeat interval, one day unless set otherwise
    #[serde(default = "one_day")]
    pub period: Quantity,
    /// No irradiation at or after this time
    pub cutoff: Quantity,
}

fn one_day() -> Quantity {
    1.0 * Unit::DAY
}

impl PeriodicExposure {
    /// Exposure repeated every 24 hours until the cutoff
    pub fn daily(exposure_time: Quantity, cutoff: Quantity) -> Self {
        Self {
            exposure_time,
            period: one_day(),
            cutoff,
        }
    }

    /// Check if the source is active at time `t`
    pub fn is_active(&self, t: Quantity) -> bool {
        if t >= self.cutoff {
            return false;
        }

        let phase = t.value().rem_euclid(self.period.value());
        phase < self.exposure_time.value()
    }

    /// Check all fields are times with a positive period
    pub fn validate(&self) -> Result<()> {
        check_dimension("exposure_time", self.exposure_time, Dimension::TIME)?;
        check_dimension("period", self.period, Dimension::TIME)?;
        check_dimension("cutoff", self.cutoff, Dimension::TIME)?;

        if self.period.value() > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidParameter {
                parameter: "period",
                reason: "must be positive".to_string(),
            })
        }
    }
}

/// Decide if the source is on at time `t`
///
/// A non-empty list of irradiations always takes precedence. The periodic
/// exposure is only used when the list is empty, and with neither the source
/// is never active.
pub(crate) fn is_irradiated(
    irradiations: &[Irradiation],
    periodic: Option<&PeriodicExposure>,
    t: Quantity,
) -> bool {
    match (irradiations.is_empty(), periodic) {
        (false, _) => irradiations.iter().any(|i| i.contains(t)),
        (true, Some(periodic)) => periodic.is_active(t),
        (true, None) => false,
    }
}
