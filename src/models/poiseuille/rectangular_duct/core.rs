//! Truncated-series evaluation core for rectangular-duct Poiseuille flow.
//!
//! The exact solution is an infinite series over odd indices whose terms
//! decay at least as `1/i³`, so a fixed truncation order gives a convergent
//! approximation. The velocity, its two in-plane derivatives, and the
//! discharge all apply different closed-form per-term kernels to the same
//! index sequence; [`series`] owns the sequence and the summation, while
//! [`duct`] owns the kernels and binds them to a validated geometry.

mod duct;
mod error;
mod given_discharge;
mod series;

pub use duct::{REFERENCE, RectangularDuct};
pub use error::DuctError;
pub use given_discharge::{
    DepthSolution, GivenDischargeConfig, GivenDischargeError, given_discharge,
};
pub use series::TruncationOrder;
