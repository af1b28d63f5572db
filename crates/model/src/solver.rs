//! Root finding strategies for the implicit concentration update

// external crates
use log::trace;

/// Failure modes of a [RootSolver]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Iteration limit reached before the step tolerance was met
    #[error("no convergence after {0} iterations")]
    MaxIterations(usize),

    /// The residual is flat at the current iterate
    #[error("zero derivative at x = {0}")]
    ZeroDerivative(f64),

    /// An iterate or residual became NaN or infinite
    #[error("non-finite iterate or residual")]
    NotFinite,
}

/// Strategy for finding a root of a scalar residual
///
/// The transport model calls `solve` once per time step with the backward
/// Euler mass balance as the residual and the previous concentration as the
/// initial guess. Any numerical backend can be injected, including fakes for
/// testing.
///
/// ```rust
/// # use approx::assert_relative_eq;
/// # use tritium_model::{Newton, RootSolver};
/// let root = Newton::default().solve(&|x| x * x - 2.0, 1.0).unwrap();
/// assert_relative_eq!(root, 2.0_f64.sqrt(), max_relative = 1e-12);
/// ```
pub trait RootSolver {
    /// Find `x` such that `residual(x) == 0`, starting from `initial_guess`
    fn solve(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, SolverError>;
}

/// Newton iteration with a forward finite-difference derivative
///
/// Converges when any of the following holds:
///
/// - the residual is exactly zero
/// - the residual is within `ftol` of the residual at the initial guess
/// - the Newton step is within `xtol` of the current iterate
/// - the Newton step is below the smallest normal float
///
/// The derivative step is scaled to the iterate, so very small
/// concentrations are handled without rescaling, and is floored so it can
/// never underflow while the iterate decays towards zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Newton {
    /// Relative step tolerance
    pub xtol: f64,
    /// Residual tolerance relative to the initial residual
    pub ftol: f64,
    /// Maximum number of Newton steps
    pub max_iterations: usize,
}

impl Default for Newton {
    fn default() -> Self {
        Self {
            xtol: 1.49012e-8,
            ftol: 1.0e-12,
            max_iterations: 100,
        }
    }
}

impl RootSolver for Newton {
    fn solve(
        &self,
        residual: &dyn Fn(f64) -> f64,
        initial_guess: f64,
    ) -> Result<f64, SolverError> {
        let mut x = initial_guess;
        let mut fx = residual(x);
        let f_tolerance = self.ftol * fx.abs();

        for iteration in 1..=self.max_iterations {
            if !x.is_finite() || !fx.is_finite() {
                return Err(SolverError::NotFinite);
            }

            if fx == 0.0 || fx.abs() <= f_tolerance {
                return Ok(x);
            }

            let step = fx / derivative(residual, x, fx)?;
            x -= step;
            fx = residual(x);
            trace!("Newton iteration {iteration}: x = {x:e}, f(x) = {fx:e}");

            if step.abs() <= self.xtol * x.abs() || !step.is_normal() {
                return match x.is_finite() {
                    true => Ok(x),
                    false => Err(SolverError::NotFinite),
                };
            }
        }

        Err(SolverError::MaxIterations(self.max_iterations))
    }
}

/// Smallest magnitude used to scale the difference step
const MIN_STEP_SCALE: f64 = 1.0e-150;

/// Forward difference approximation of the residual slope at `x`
fn derivative(residual: &dyn Fn(f64) -> f64, x: f64, fx: f64) -> Result<f64, SolverError> {
    let scale = match x == 0.0 {
        true => 1.0,
        false => x.abs().max(MIN_STEP_SCALE),
    };
    let h = f64::EPSILON.sqrt() * scale;

    let slope = (residual(x + h) - fx) / h;

    if slope == 0.0 {
        Err(SolverError::ZeroDerivative(x))
    } else if !slope.is_finite() {
        Err(SolverError::NotFinite)
    } else {
        Ok(slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn linear_residual_from_zero() {
        // tiny roots typical of concentrations in mol/m3
        let root = Newton::default()
            .solve(&|x| 2.8e-8 * x - 3.1e-19, 0.0)
            .unwrap();
        assert_relative_eq!(root, 3.1e-19 / 2.8e-8, max_relative = 1e-9);
    }

    #[test]
    fn zero_residual_returns_guess() {
        assert_eq!(Newton::default().solve(&|x| x, 0.0), Ok(0.0));
    }

    #[test]
    fn flat_residual_fails() {
        assert_eq!(
            Newton::default().solve(&|_| 1.0, 3.0),
            Err(SolverError::ZeroDerivative(3.0))
        );
    }

    #[test]
    fn decay_into_subnormal_range() {
        // backward Euler decay with a short time constant, previous value subnormal
        let c_old = 6.31e-311_f64;
        let root = Newton::default()
            .solve(&|x| 2.8e-8 * (x - c_old) + 1.43e-6 * x, c_old)
            .unwrap();
        assert!(root >= 0.0);
        assert!(root < c_old);
    }

    #[test]
    fn stops_on_small_residual() {
        let solver = Newton {
            xtol: 0.0,
            ..Default::default()
        };
        let root = solver.solve(&|x| x * x - 2.0, 1.0).unwrap();
        assert_abs_diff_eq!(root * root, 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn iteration_limit() {
        let solver = Newton {
            max_iterations: 2,
            ..Default::default()
        };
        // no real root, iterates wander forever
        let result = solver.solve(&|x| x * x + 1.0, 0.5);
        assert!(result.is_err());
    }
}
