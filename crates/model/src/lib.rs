//! Lumped-parameter tritium transport model for BABY cells
//!
//! Tritium bred in a molten salt volume by a neutron generator is released
//! through the free surface at the top of the salt and through the crucible
//! walls. This crate integrates a single well-mixed tritium balance over time
//! and reports the release rates and the cumulative amounts released through
//! each path.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use tritium_model::{height_from_volume, quantity_to_activity};
//! # use tritium_model::{Irradiation, Model, ModelParameters};
//! # use tritium_units::Unit;
//! // 100 mL of salt in a 1.77 in crucible with 0.06 in walls
//! let radius = 0.5 * (1.77 * Unit::INCH - 2.0 * 0.06 * Unit::INCH);
//! let height = height_from_volume(radius, 100.0 * Unit::ML).unwrap();
//!
//! // Two 12 hour irradiations a day apart
//! let mut parameters = ModelParameters::new(radius, height, 5.4e-4);
//! parameters.neutron_rate = 3.54e8 * (Unit::NEUTRON / Unit::S);
//! parameters.irradiations = vec![
//!     Irradiation::new(0.0 * Unit::HOUR, 12.0 * Unit::HOUR),
//!     Irradiation::new(24.0 * Unit::HOUR, 36.0 * Unit::HOUR),
//! ];
//!
//! // Integrate over four days
//! let mut model = Model::new(parameters).unwrap();
//! model.run(4.0 * Unit::DAY).unwrap();
//!
//! // Cumulative release through the top, converted to activity
//! let released = model.integrated_release_top().unwrap();
//! let activity = quantity_to_activity(*released.last().unwrap()).unwrap();
//! assert!(activity.to(Unit::BQ).unwrap() > 0.0);
//! ```
//!
//! ## Core concepts
//!
//! ### Mass balance
//!
//! The inventory follows
//!
//! ```text
//! V dc/dt = S(t) - A_top k_top c - A_wall k_wall c
//! ```
//!
//! where `S(t)` is the breeding rate `TBR × neutron rate` while irradiated.
//! Each time step solves the backward Euler form for the new concentration
//! with a [RootSolver], which is [Newton] unless another is given to
//! [Model::run_with()].
//!
//! ### Irradiation schedule
//!
//! An explicit list of [Irradiation] periods always takes precedence. Only
//! when the list is empty is a [PeriodicExposure] used, and with neither
//! the source is never on.
//!
//! ### Units
//!
//! Every input and output is a [Quantity](tritium_units::Quantity), and
//! parameters are checked for the expected dimension when a [Model] is
//! built. Outputs are in SI base units and converted explicitly.
//!
//! ## Run configurations
//!
//! Runs may be described by a JSON [RunConfig] and loaded with
//! [read_json()].
//!
//! ```rust, no_run
//! # use tritium_model::read_json;
//! let config = read_json("path/to/run_8.json").unwrap();
//!
//! let mut model = config.build().unwrap();
//! model.run(config.t_final).unwrap();
//! ```

mod config;
mod error;
mod geometry;
mod model;
mod parameters;
mod schedule;
mod solver;
mod tritium;

#[doc(inline)]
pub use config::{read_json, RunConfig};

#[doc(inline)]
pub use geometry::{height_from_volume, Geometry};

#[doc(inline)]
pub use model::Model;

#[doc(inline)]
pub use parameters::ModelParameters;

#[doc(inline)]
pub use schedule::{Irradiation, PeriodicExposure};

#[doc(inline)]
pub use solver::{Newton, RootSolver, SolverError};

#[doc(inline)]
pub use tritium::{quantity_to_activity, MOLAR_MASS, SPECIFIC_ACTIVITY};

#[doc(inline)]
pub use error::{Error, Result};
