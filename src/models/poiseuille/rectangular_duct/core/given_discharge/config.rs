use twine_solvers::equation::bisection;

/// Solver configuration for sizing a duct to a target discharge.
#[derive(Debug, Clone, Copy)]
pub struct GivenDischargeConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the half-depth search variable.
    pub depth_tol: f64,

    /// Absolute tolerance for the discharge residual (achieved - target).
    pub discharge_tol: f64,
}

impl Default for GivenDischargeConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            depth_tol: 1e-12,
            discharge_tol: 1e-12,
        }
    }
}

impl GivenDischargeConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.depth_tol,
            x_rel_tol: 0.0,
            residual_tol: self.discharge_tol,
        }
    }
}
