//! Problem formulation for sizing a duct to a target discharge.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::poiseuille::rectangular_duct::core::{
    DuctError, RectangularDuct, TruncationOrder,
};

use super::DepthSolution;

/// Model adapter exposing the half-depth as the sole input variable.
///
/// Each call constructs a candidate duct at the requested half-depth and
/// evaluates its discharge. The search bracket keeps candidates strictly
/// positive, so construction only fails on a caller-supplied bad bracket.
pub(super) struct GivenDischargeModel {
    half_width: f64,
    order: TruncationOrder,
}

impl GivenDischargeModel {
    pub(super) fn new(half_width: f64, order: TruncationOrder) -> Self {
        Self { half_width, order }
    }
}

impl Model for GivenDischargeModel {
    type Input = f64;
    type Output = DepthSolution;
    type Error = DuctError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let duct = RectangularDuct::new(self.half_width, *input)?;
        let discharge = duct.discharge(self.order);
        Ok(DepthSolution { duct, discharge })
    }
}

/// Equation problem definition for discharge matching.
///
/// Computes the residual as `achieved - target`, which is strictly monotone
/// in the half-depth.
pub(super) struct GivenDischargeProblem {
    target: f64,
}

impl GivenDischargeProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenDischargeProblem {
    type Input = f64;
    type Output = DepthSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.discharge - self.target])
    }
}
