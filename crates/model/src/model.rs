//! Implicit time integration of the lumped tritium balance

// crate modules
use crate::error::{Error, Result};
use crate::parameters::{check_dimension, ModelParameters};
use crate::schedule::is_irradiated;
use crate::solver::{Newton, RootSolver, SolverError};

// tritium modules
use tritium_units::{Dimension, Quantity};
use tritium_utils::SliceExt;

// external crates
use itertools::izip;
use log::{debug, trace, warn};

/// Upper bound on the trajectory length reserved ahead of a run
const MAX_PREALLOCATED_STEPS: f64 = 65_536.0;

/// Well-mixed tritium inventory in the salt of a BABY cell
///
/// Tritium is bred in the salt at a rate of `TBR × neutron rate` while the
/// source is on, and leaves through the top surface and the walls at rates
/// proportional to the concentration in the salt.
///
/// ```text
/// V dc/dt = S(t) - A_top k_top c - A_wall k_wall c
/// ```
///
/// Every step solves the backward Euler form of this balance for the new
/// concentration with a [RootSolver], starting from zero concentration at
/// `t = 0`.
///
/// ## Lifecycle
///
/// A new model is idle with no recorded trajectory. [run()](Model::run)
/// replaces any previous trajectory with a fresh one from `t = 0`, and
/// [reset()](Model::reset) returns the model to idle. If a run fails, the
/// model is left idle rather than with a partial trajectory.
///
/// ```rust
/// # use tritium_model::{Irradiation, Model, ModelParameters};
/// # use tritium_units::Unit;
/// let mut parameters = ModelParameters::new(2.0 * Unit::CM, 7.0 * Unit::CM, 5.4e-4);
/// parameters.irradiations = vec![Irradiation::new(0.0 * Unit::HOUR, 12.0 * Unit::HOUR)];
///
/// let mut model = Model::new(parameters).unwrap();
/// model.run(48.0 * Unit::HOUR).unwrap();
///
/// assert_eq!(model.times().len(), 48);
/// assert!(model.concentrations()[10] > model.concentrations()[0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    parameters: ModelParameters,
    times: Vec<Quantity>,
    concentrations: Vec<Quantity>,
}

impl Model {
    /// New idle model with validated parameters
    pub fn new(parameters: ModelParameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            times: Vec::new(),
            concentrations: Vec::new(),
        })
    }

    /// New idle model with some parameters changed
    ///
    /// The current model is untouched, and the copy starts without a
    /// trajectory.
    ///
    /// ```rust
    /// # use tritium_model::{Model, ModelParameters};
    /// # use tritium_units::Unit;
    /// let model = Model::new(ModelParameters::new(2.0 * Unit::CM, 7.0 * Unit::CM, 5.4e-4)).unwrap();
    /// let faster = model
    ///     .with_overrides(|p| p.k_top = 3.0 * p.k_top)
    ///     .unwrap();
    ///
    /// assert!(faster.time_constant() < model.time_constant());
    /// ```
    pub fn with_overrides<F>(&self, overrides: F) -> Result<Self>
    where
        F: FnOnce(&mut ModelParameters),
    {
        let mut parameters = self.parameters.clone();
        overrides(&mut parameters);
        Self::new(parameters)
    }

    /// Replace the parameters, discarding any trajectory
    pub fn set_parameters(&mut self, parameters: ModelParameters) -> Result<()> {
        parameters.validate()?;
        self.parameters = parameters;
        self.reset();
        Ok(())
    }

    /// Parameters the model was built with
    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// Area of the free surface of the salt
    pub fn top_area(&self) -> Quantity {
        self.parameters.geometry.top_area()
    }

    /// Area for release through the walls
    pub fn wall_area(&self) -> Quantity {
        self.parameters.geometry.wall_area()
    }

    /// Volume of salt
    pub fn volume(&self) -> Quantity {
        self.parameters.geometry.volume()
    }

    /// Characteristic decay time of the inventory with the source off
    ///
    /// This is `V / (A_top k_top + A_wall k_wall)`.
    pub fn time_constant(&self) -> Quantity {
        self.volume() / self.loss_coefficient()
    }

    /// Tritium production rate at time `t`
    ///
    /// Equal to `TBR × neutron rate` while irradiated and zero otherwise.
    /// The explicit irradiation list takes precedence over the periodic
    /// exposure.
    pub fn source(&self, t: Quantity) -> Result<Quantity> {
        check_dimension("t", t, Dimension::TIME)?;

        let p = &self.parameters;
        if is_irradiated(&p.irradiations, p.periodic.as_ref(), t) {
            Ok(p.tbr * p.neutron_rate)
        } else {
            Ok(Quantity::zero(Dimension::PARTICLE_RATE))
        }
    }

    /// Release rate through the top surface at concentration `c`
    pub fn q_top(&self, c: Quantity) -> Quantity {
        self.top_area() * self.parameters.k_top * c
    }

    /// Release rate through the walls at concentration `c`
    pub fn q_wall(&self, c: Quantity) -> Quantity {
        self.wall_area() * self.parameters.k_wall * c
    }

    /// Backward Euler residual of the mass balance
    ///
    /// For a step ending at `t`, this is
    /// `V (c - c_old) / dt - S(t) + Q_top(c) + Q_wall(c)` and vanishes at
    /// the new concentration.
    pub fn balance_residual(&self, c: Quantity, c_old: Quantity, t: Quantity) -> Result<Quantity> {
        check_dimension("c", c, Dimension::CONCENTRATION)?;
        check_dimension("c_old", c_old, Dimension::CONCENTRATION)?;
        Ok(self.step_residual(c, c_old, self.source(t)?))
    }

    /// Integrate from `t = 0` to `t_final` with the default [Newton] solver
    pub fn run(&mut self, t_final: Quantity) -> Result<()> {
        self.run_with(t_final, &Newton::default())
    }

    /// Integrate from `t = 0` to `t_final` with any [RootSolver]
    ///
    /// The time advances by `dt` before each solve, and steps continue while
    /// the time is below `t_final`. The first recorded point is therefore at
    /// `dt`, and the last may overshoot `t_final` by less than one step.
    ///
    /// The trajectory is only stored once every step has converged. Any
    /// failure returns [Error::NonConvergence] and leaves the model idle.
    pub fn run_with<S>(&mut self, t_final: Quantity, solver: &S) -> Result<()>
    where
        S: RootSolver + ?Sized,
    {
        check_dimension("t_final", t_final, Dimension::TIME)?;

        if !self.is_idle() {
            debug!("Discarding previous trajectory of {} steps", self.times.len());
            self.reset();
        }

        let dt = self.parameters.dt;
        debug!("Running to {t_final} with dt = {dt}");
        if t_final.value() > 0.0 && dt > t_final {
            warn!("Time step {dt} is longer than the run, only one step is taken");
        }

        let steps = (t_final.value() / dt.value()).ceil().clamp(0.0, MAX_PREALLOCATED_STEPS);
        let mut times = Vec::with_capacity(steps as usize);
        let mut concentrations = Vec::with_capacity(steps as usize);

        let mut t = Quantity::zero(Dimension::TIME);
        let mut c = Quantity::zero(Dimension::CONCENTRATION);

        while t < t_final {
            t = t + dt;
            let source = self.source(t)?;
            let c_old = c;

            let residual = |x: f64| {
                self.step_residual(Quantity::from_si(x, Dimension::CONCENTRATION), c_old, source)
                    .value()
            };

            let root = solver.solve(&residual, c_old.value()).map_err(|cause| {
                warn!("Solver failed at t = {t}: {cause}");
                Error::NonConvergence {
                    time: t.value(),
                    cause,
                }
            })?;

            if !root.is_finite() {
                warn!("Solver returned {root} at t = {t}");
                return Err(Error::NonConvergence {
                    time: t.value(),
                    cause: SolverError::NotFinite,
                });
            }

            // rounding near underflow can land just below zero
            c = Quantity::from_si(root.max(0.0), Dimension::CONCENTRATION);
            trace!("t = {t}, c = {c}");

            times.push(t);
            concentrations.push(c);
        }

        debug!("Completed {} steps", times.len());
        self.times = times;
        self.concentrations = concentrations;
        Ok(())
    }

    /// Clear the trajectory and return to idle
    pub fn reset(&mut self) {
        self.times.clear();
        self.concentrations.clear();
    }

    /// Check if there is no recorded trajectory
    pub fn is_idle(&self) -> bool {
        self.times.is_empty()
    }

    /// Times at the end of each step
    pub fn times(&self) -> &[Quantity] {
        &self.times
    }

    /// Concentration at the end of each step
    pub fn concentrations(&self) -> &[Quantity] {
        &self.concentrations
    }

    /// Release rate through the top surface at every recorded time
    pub fn release_rates_top(&self) -> Vec<Quantity> {
        self.concentrations.iter().map(|c| self.q_top(*c)).collect()
    }

    /// Release rate through the walls at every recorded time
    pub fn release_rates_wall(&self) -> Vec<Quantity> {
        self.concentrations.iter().map(|c| self.q_wall(*c)).collect()
    }

    /// Cumulative amount released through the top surface
    ///
    /// Trapezoidal integral of the top release rate over the recorded times,
    /// starting from zero at the first recorded time.
    pub fn integrated_release_top(&self) -> Result<Vec<Quantity>> {
        self.integrate(&self.release_rates_top())
    }

    /// Cumulative amount released through the walls
    pub fn integrated_release_wall(&self) -> Result<Vec<Quantity>> {
        self.integrate(&self.release_rates_wall())
    }

    /// Cumulative amount released through the top surface and walls combined
    pub fn integrated_release_total(&self) -> Result<Vec<Quantity>> {
        let top = self.integrated_release_top()?;
        let wall = self.integrated_release_wall()?;
        Ok(izip!(top, wall).map(|(t, w)| t + w).collect())
    }

    /// Sum of the top and wall loss terms, `A_top k_top + A_wall k_wall`
    fn loss_coefficient(&self) -> Quantity {
        self.top_area() * self.parameters.k_top + self.wall_area() * self.parameters.k_wall
    }

    /// Residual for a known source, dimensions already checked
    fn step_residual(&self, c: Quantity, c_old: Quantity, source: Quantity) -> Quantity {
        let accumulation = self.volume() * (c - c_old) / self.parameters.dt;
        accumulation - source + self.q_top(c) + self.q_wall(c)
    }

    /// Cumulative trapezoid of a rate over the recorded times
    fn integrate(&self, rates: &[Quantity]) -> Result<Vec<Quantity>> {
        let times = self.times.iter().map(Quantity::value).collect::<Vec<f64>>();
        let rates = rates.iter().map(Quantity::value).collect::<Vec<f64>>();

        Ok(rates
            .cumulative_trapezoid(&times)?
            .into_iter()
            .map(|amount| Quantity::from_si(amount, Dimension::AMOUNT))
            .collect())
    }
}
