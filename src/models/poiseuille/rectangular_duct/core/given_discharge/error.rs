use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::poiseuille::rectangular_duct::core::DuctError;

/// Errors that can occur while sizing a duct to a target discharge.
#[derive(Debug, Error)]
pub enum GivenDischargeError {
    /// Constructing a candidate duct failed.
    #[error("duct evaluation failed")]
    Duct(#[from] DuctError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best discharge residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
