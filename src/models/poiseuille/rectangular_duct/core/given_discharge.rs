//! Iterative sizing for a target discharge.
//!
//! This module finds the half-depth at which a duct of fixed half-width
//! delivers a prescribed (normalized) discharge, by bisecting the discharge
//! residual. The residual is strictly monotone in the half-depth and the
//! bracket below is analytic, so the search cannot stall on a bad interval.

mod config;
mod error;
mod problem;

pub use config::GivenDischargeConfig;
pub use error::GivenDischargeError;

use std::f64::consts::PI;

use twine_solvers::equation::bisection;

use crate::models::poiseuille::rectangular_duct::core::{RectangularDuct, TruncationOrder};
use crate::support::constraint::{Constrained, StrictlyPositive};

use problem::{GivenDischargeModel, GivenDischargeProblem};

/// Upper bound on `Σ 1/i⁵` over odd `i` (the exact sum is `31ζ(5)/32 ≈ 1.00452`).
const ODD_RECIP_FIFTH_SUM_BOUND: f64 = 1.005;

/// A duct sized to deliver a target discharge.
#[derive(Debug, Clone, Copy)]
pub struct DepthSolution {
    /// The sized duct, sharing the requested half-width.
    pub duct: RectangularDuct,

    /// Discharge achieved at the sized half-depth.
    pub discharge: f64,
}

/// Finds the half-depth at which a duct of the given half-width delivers the
/// target discharge, truncating the series at `order`.
///
/// The discharge satisfies `Q(b) < 4a³b/3` and
/// `Q(b) > 4a³b/3 − (256a⁴/π⁵)·Σ 1/i⁵` for every `b > 0`, which brackets the
/// root between `3Q/(4a³)` and `3(Q + deficit)/(4a³)`.
///
/// # Errors
///
/// Returns [`GivenDischargeError`] if the bisection solver fails or reaches
/// its iteration limit without converging.
pub fn given_discharge(
    half_width: Constrained<f64, StrictlyPositive>,
    target: Constrained<f64, StrictlyPositive>,
    config: GivenDischargeConfig,
    order: TruncationOrder,
) -> Result<DepthSolution, GivenDischargeError> {
    let a = half_width.into_inner();
    let target = target.into_inner();

    let deficit = 256.0 * a.powi(4) / PI.powi(5) * ODD_RECIP_FIFTH_SUM_BOUND;
    let lo = 0.75 * target / a.powi(3);
    let hi = 0.75 * (target + deficit) / a.powi(3);

    let model = GivenDischargeModel::new(a, order);
    let problem = GivenDischargeProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [lo, hi],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenDischargeError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn roundtrip() {
        let order = TruncationOrder::default();
        let duct = RectangularDuct::new(0.5, 0.1).unwrap();
        let target = duct.discharge(order);

        let solution = given_discharge(
            StrictlyPositive::new(0.5).unwrap(),
            StrictlyPositive::new(target).unwrap(),
            GivenDischargeConfig::default(),
            order,
        )
        .expect("sizing solve should succeed");

        assert_relative_eq!(solution.duct.half_depth(), 0.1, epsilon = 1e-9);
        assert_relative_eq!(solution.discharge, target, epsilon = 1e-12);
    }

    #[test]
    fn larger_targets_require_deeper_ducts() {
        let order = TruncationOrder::default();
        let config = GivenDischargeConfig::default();
        let a = StrictlyPositive::new(0.5).unwrap();

        let shallow = given_discharge(a, StrictlyPositive::new(2e-4).unwrap(), config, order)
            .expect("sizing solve should succeed");
        let deep = given_discharge(a, StrictlyPositive::new(8e-4).unwrap(), config, order)
            .expect("sizing solve should succeed");

        assert!(deep.duct.half_depth() > shallow.duct.half_depth());
    }
}
