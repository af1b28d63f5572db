//! Integration tests for the tritium transport model

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::{fixture, rstest};
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;

use tritium_model::{
    height_from_volume, Error, Irradiation, Model, ModelParameters, Newton, PeriodicExposure,
    RootSolver, SolverError,
};
use tritium_units::{Dimension, Quantity, Unit};
use tritium_utils::SliceExt;

fn hours(h: f64) -> Quantity {
    h * Unit::HOUR
}

fn values(quantities: &[Quantity]) -> Vec<f64> {
    quantities.iter().map(Quantity::value).collect()
}

/// 100 mL BABY cell with a single 12 hour irradiation
#[fixture]
fn baby() -> ModelParameters {
    let radius = 0.5 * (1.77 * Unit::INCH - 2.0 * 0.06 * Unit::INCH);
    let height = height_from_volume(radius, 100.0 * Unit::ML).unwrap();

    let mut parameters = ModelParameters::new(radius, height, 5.4e-4);
    parameters.neutron_rate = 3.5e8 * (Unit::NEUTRON / Unit::S);
    parameters.irradiations = vec![Irradiation::new(hours(0.0), hours(12.0))];
    parameters
}

/// Same cell already run for two days
#[fixture]
fn completed(baby: ModelParameters) -> Model {
    let mut model = Model::new(baby).unwrap();
    model.run(hours(48.0)).unwrap();
    model
}

/// Exact for residuals linear in x
struct Linear;

impl RootSolver for Linear {
    fn solve(&self, residual: &dyn Fn(f64) -> f64, x0: f64) -> Result<f64, SolverError> {
        let f0 = residual(x0);
        let slope = residual(x0 + 1.0) - f0;
        Ok(x0 - f0 / slope)
    }
}

/// Newton, keeping every initial guess it was given
#[derive(Default)]
struct Recording {
    guesses: RefCell<Vec<f64>>,
}

impl RootSolver for Recording {
    fn solve(&self, residual: &dyn Fn(f64) -> f64, x0: f64) -> Result<f64, SolverError> {
        self.guesses.borrow_mut().push(x0);
        Newton::default().solve(residual, x0)
    }
}

/// Succeeds for a fixed number of steps, then fails
struct FailsAfter {
    remaining: Cell<usize>,
}

impl RootSolver for FailsAfter {
    fn solve(&self, residual: &dyn Fn(f64) -> f64, x0: f64) -> Result<f64, SolverError> {
        match self.remaining.get() {
            0 => Err(SolverError::MaxIterations(0)),
            n => {
                self.remaining.set(n - 1);
                Linear.solve(residual, x0)
            }
        }
    }
}

#[rstest]
fn volume_is_cylinder(baby: ModelParameters) {
    let model = Model::new(baby.clone()).unwrap();
    let g = baby.geometry;

    let expected = PI * g.radius.value().powi(2) * g.height.value();
    assert_relative_eq!(model.volume().value(), expected, max_relative = 1e-12);
    assert_relative_eq!(model.volume().to(Unit::ML).unwrap(), 100.0, max_relative = 1e-12);
    assert_eq!(model.volume().dimension(), Dimension::VOLUME);
}

#[rstest]
#[case(6.0, true)] // case 1
#[case(12.0, false)] // case 2
#[case(13.0, false)] // case 3
#[case(0.0, false)] // case 4
fn source_follows_schedule(baby: ModelParameters, #[case] t: f64, #[case] on: bool) {
    let expected = match on {
        true => baby.tbr * baby.neutron_rate,
        false => Quantity::zero(Dimension::PARTICLE_RATE),
    };

    let model = Model::new(baby).unwrap();
    assert_eq!(model.source(hours(t)).unwrap(), expected);
}

#[rstest]
fn source_rejects_non_time(baby: ModelParameters) {
    let model = Model::new(baby).unwrap();
    assert!(matches!(
        model.source(1.0 * Unit::CM),
        Err(Error::UnexpectedDimension { parameter: "t", .. })
    ));
}

#[rstest]
#[case::no_breeding(|p: &mut ModelParameters| p.tbr = 0.0 * Unit::DIMENSIONLESS)]
#[case::no_schedule(|p: &mut ModelParameters| p.irradiations.clear())]
fn without_source_nothing_is_bred(baby: ModelParameters, #[case] change: fn(&mut ModelParameters)) {
    let mut model = Model::new(baby).unwrap().with_overrides(change).unwrap();
    model.run(hours(24.0)).unwrap();

    let c = values(model.concentrations());
    assert_eq!(c.len(), 24);
    assert!(c.iter().all(|v| *v == 0.0));
    assert!(c.is_non_increasing());
}

#[rstest]
#[case::default_transfer(|_: &mut ModelParameters| {})]
#[case::short_time_constant(|p: &mut ModelParameters| p.k_top = 1.0e-3 * (Unit::M / Unit::S))]
fn inventory_decays_over_long_run(baby: ModelParameters, #[case] change: fn(&mut ModelParameters)) {
    let mut model = Model::new(baby).unwrap().with_overrides(change).unwrap();
    model.run(30.0 * Unit::DAY).unwrap();

    let c = values(model.concentrations());
    assert_eq!(c.len(), 720);
    assert!(c.iter().all(|v| *v >= 0.0));

    // no source after the step ending at 11 h
    assert!(c[10..].is_non_increasing());

    let peak = c.iter().copied().fold(0.0, f64::max);
    assert!(peak > 0.0);
    assert!(c[719] <= 1e-6 * peak);
}

#[rstest]
fn rises_while_irradiated_then_decays(completed: Model) {
    let c = values(completed.concentrations());
    assert_eq!(c.len(), 48);

    // source is on for the steps ending at 1 h to 11 h
    assert!(c[..=10].windows(2).all(|w| w[1] > w[0]));
    assert!(c[10..].windows(2).all(|w| w[1] < w[0]));
    assert!(c.iter().all(|v| *v > 0.0));

    let t = values(completed.times());
    assert_eq!(t[0], 3600.0);
    assert_eq!(t[47], 48.0 * 3600.0);
}

#[rstest]
fn decay_follows_time_constant(completed: Model) {
    let tau = completed.time_constant();
    assert_eq!(tau.dimension(), Dimension::TIME);

    // backward Euler decay factor per step
    let dt = completed.parameters().dt;
    let factor = 1.0 / (1.0 + (dt / tau).value());

    let c = values(completed.concentrations());
    for w in c[12..].windows(2) {
        assert_relative_eq!(w[1] / w[0], factor, max_relative = 1e-9);
    }
}

#[rstest]
fn balance_holds_at_every_step(completed: Model) {
    let scale = (completed.parameters().tbr * completed.parameters().neutron_rate).value();

    let mut c_old = Quantity::zero(Dimension::CONCENTRATION);
    for (t, c) in completed.times().iter().zip(completed.concentrations()) {
        let residual = completed.balance_residual(*c, c_old, *t).unwrap();
        assert_eq!(residual.dimension(), Dimension::PARTICLE_RATE);
        assert_abs_diff_eq!(residual.value(), 0.0, epsilon = 1e-6 * scale);
        c_old = *c;
    }
}

#[rstest]
fn integrated_release_matches_trapezoid(completed: Model) {
    let rates = values(&completed.release_rates_top());
    let times = values(completed.times());
    let expected = rates.trapezoid(&times).unwrap();

    let top = completed.integrated_release_top().unwrap();
    assert_eq!(top.len(), 48);
    assert_eq!(top[0], Quantity::zero(Dimension::AMOUNT));
    assert_relative_eq!(top[47].value(), expected, max_relative = 1e-12);
    assert!(values(&top).is_non_decreasing());

    let wall = completed.integrated_release_wall().unwrap();
    assert!(values(&wall).is_non_decreasing());

    let total = completed.integrated_release_total().unwrap();
    for ((t, w), sum) in top.iter().zip(&wall).zip(&total) {
        assert_eq!(*t + *w, *sum);
    }
}

#[rstest]
fn released_less_than_produced(completed: Model) {
    let p = completed.parameters();
    let produced = p.tbr * p.neutron_rate * hours(12.0);

    let total = completed.integrated_release_total().unwrap();
    let released = *total.last().unwrap();

    assert_eq!(released.dimension(), Dimension::AMOUNT);
    assert!(released > Quantity::zero(Dimension::AMOUNT));
    assert!(released < produced);
}

#[rstest]
fn reset_then_run_is_deterministic(mut completed: Model) {
    let first = completed.concentrations().to_vec();

    completed.reset();
    assert!(completed.is_idle());
    assert!(completed.concentrations().is_empty());

    completed.run(hours(48.0)).unwrap();
    assert_eq!(completed.concentrations(), first.as_slice());
}

#[rstest]
fn partial_final_step(baby: ModelParameters) {
    let mut model = Model::new(baby).unwrap();
    model.run(hours(2.5)).unwrap();
    assert_eq!(values(model.times()), vec![3600.0, 7200.0, 10800.0]);
}

#[rstest]
fn injected_solver_agrees_with_newton(baby: ModelParameters, completed: Model) {
    let mut model = Model::new(baby).unwrap();
    model.run_with(hours(48.0), &Linear).unwrap();

    for (a, b) in model.concentrations().iter().zip(completed.concentrations()) {
        assert_relative_eq!(a.value(), b.value(), max_relative = 1e-6);
    }
}

#[rstest]
fn solver_starts_from_previous_concentration(baby: ModelParameters) {
    let solver = Recording::default();
    let mut model = Model::new(baby).unwrap();
    model.run_with(hours(6.0), &solver).unwrap();

    let guesses = solver.guesses.into_inner();
    let c = values(model.concentrations());
    assert_eq!(guesses.len(), 6);
    assert_eq!(guesses[0], 0.0);
    assert_eq!(guesses[1..], c[..5]);
}

#[rstest]
fn failed_run_leaves_model_idle(mut completed: Model) {
    let solver = FailsAfter {
        remaining: Cell::new(2),
    };

    let result = completed.run_with(hours(48.0), &solver);
    match result {
        Err(Error::NonConvergence { time, cause }) => {
            assert_eq!(time, 3.0 * 3600.0);
            assert_eq!(cause, SolverError::MaxIterations(0));
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }

    assert!(completed.is_idle());
    assert!(completed.times().is_empty());
    assert!(completed.concentrations().is_empty());
}

#[rstest]
fn huge_horizon_fails_at_first_step(baby: ModelParameters) {
    let solver = FailsAfter {
        remaining: Cell::new(0),
    };
    let mut model = Model::new(baby).unwrap();

    let result = model.run_with(1.0e30 * Unit::S, &solver);
    assert!(matches!(
        result,
        Err(Error::NonConvergence { time, .. }) if time == 3600.0
    ));
    assert!(model.is_idle());
}

#[rstest]
fn periodic_exposure_without_list(baby: ModelParameters) {
    let mut model = Model::new(baby)
        .unwrap()
        .with_overrides(|p| {
            p.irradiations.clear();
            p.periodic = Some(PeriodicExposure::daily(hours(12.0), hours(48.0)));
        })
        .unwrap();

    assert!(model.source(hours(30.0)).unwrap().value() > 0.0);
    assert!(model.source(hours(60.0)).unwrap().is_zero());

    model.run(hours(72.0)).unwrap();
    let c = values(model.concentrations());

    // second day of exposure raises the inventory again, nothing after cutoff
    assert!(c[34] > c[23]);
    assert!(c[48..].windows(2).all(|w| w[1] < w[0]));
}

#[rstest]
#[case::radius_as_time(|p: &mut ModelParameters| p.geometry.radius = hours(1.0))]
#[case::rate_without_time(|p: &mut ModelParameters| p.neutron_rate = 1.0 * Unit::NEUTRON)]
#[case::tbr_with_units(|p: &mut ModelParameters| p.tbr = 1.0 * Unit::CM)]
#[case::dt_as_length(|p: &mut ModelParameters| p.dt = 1.0 * Unit::CM)]
#[case::irradiation_in_length(|p: &mut ModelParameters| {
    p.irradiations = vec![Irradiation::new(0.0 * Unit::CM, 1.0 * Unit::CM)]
})]
fn wrong_dimensions_are_rejected(baby: ModelParameters, #[case] change: fn(&mut ModelParameters)) {
    let model = Model::new(baby).unwrap();
    assert!(matches!(
        model.with_overrides(change),
        Err(Error::UnexpectedDimension { .. })
    ));
}

#[rstest]
fn run_rejects_non_time(mut completed: Model) {
    assert!(matches!(
        completed.run(1.0 * Unit::CM),
        Err(Error::UnexpectedDimension {
            parameter: "t_final",
            ..
        })
    ));
    // validation happens before the previous run is discarded
    assert!(!completed.is_idle());
}
