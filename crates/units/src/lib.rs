//! Dimension-checked physical quantities
//!
//! Every scalar in a tritium release analysis carries a physical dimension:
//! activities, lengths, volumes, times, particle rates, concentrations, and
//! mass-transfer velocities. This crate attaches a [Dimension] to every value
//! and refuses additive arithmetic between incompatible dimensions.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use tritium_units::{Dimension, Quantity, Unit};
//! // Build quantities from the table of known units
//! let radius = Quantity::new(0.825, Unit::INCH);
//! let volume = Quantity::new(100.0, Unit::ML);
//!
//! // Derived values compose their dimensions automatically
//! let height = volume / (radius * radius * std::f64::consts::PI);
//! assert_eq!(height.dimension(), Dimension::LENGTH);
//!
//! // Conversions out of SI are explicit
//! let height_cm = height.to(Unit::CM).unwrap();
//! assert!(height_cm > 7.0 && height_cm < 7.5);
//! ```
//!
//! ## Unit table
//!
//! There is no mutable unit registry. The known units are constants on
//! [Unit], and compound units are composed with `*`, `/`, and
//! [powi()](Unit::powi), or parsed from an expression.
//!
//! | Dimension     | Units                                   |
//! | ------------- | --------------------------------------- |
//! | Length        | `m`, `cm`, `mm`, `in`                   |
//! | Volume        | `L`, `mL`                               |
//! | Time          | `s`, `min`, `h`, `d`                    |
//! | Mass          | `g`, `kg`                               |
//! | Amount        | `mol`, `particle`, `neutron`            |
//! | Activity      | `Bq`                                    |
//!
//! Particles and neutrons are both 1/N_A mol, so a breeding ratio written as
//! `particle/neutron` is dimensionless.
//!
//! ## Parsing
//!
//! Quantities parse from `<value> <unit expression>`, where terms are joined
//! by `*`, `/`, or whitespace and may carry integer exponents:
//!
//! ```rust
//! # use tritium_units::{Dimension, Quantity};
//! let k: Quantity = "4.9e-7 m/s".parse().unwrap();
//! assert_eq!(k.dimension(), Dimension::VELOCITY);
//!
//! let c: Quantity = "1.0e-9 m^-3 mol".parse().unwrap();
//! assert_eq!(c.dimension(), Dimension::CONCENTRATION);
//! ```
//!
//! The same format is used by `serde` to (de)serialise a [Quantity] as a
//! string.

mod dimension;
mod error;
mod parsers;
mod quantity;
mod unit;

#[doc(inline)]
pub use dimension::Dimension;

#[doc(inline)]
pub use quantity::Quantity;

#[doc(inline)]
pub use unit::{Unit, AVOGADRO};

#[doc(inline)]
pub use error::{Error, Result};
