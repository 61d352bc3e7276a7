use std::f64::consts::PI;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::error::DuctError;
use super::series::{TruncationOrder, alternating_sign, sum_over_odd_indices};

/// Bibliographic reference for the series solution.
pub const REFERENCE: &str = "\
@book{white1991viscous,
  title={Viscous fluid flow},
  author={White, Frank M.},
  year={1991},
  ISBN={0-07-069712-4},
  publisher={McGraw-Hill, Inc.},
  series={Mechanical Engineering},
  page={120},
  edition={2},
}";

/// A straight duct of rectangular cross-section.
///
/// The section spans `y ∈ [-a, a]` and `z ∈ [-b, b]`, where `a` is the
/// [`half_width`](Self::half_width) and `b` the [`half_depth`](Self::half_depth).
/// The velocity profile is even in both coordinates, so callers conventionally
/// evaluate the lower half `z ∈ [-b, 0]`; the plane `z = 0` is the shear-free
/// midplane, which also makes the model directly usable for a free-surface
/// channel of depth `b`.
///
/// All evaluators are normalized to a unit pressure gradient over viscosity;
/// see [`RectangularDuctFlow`](crate::models::poiseuille::rectangular_duct::RectangularDuctFlow)
/// for the dimensional scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularDuct {
    half_width: Constrained<f64, StrictlyPositive>,
    half_depth: Constrained<f64, StrictlyPositive>,
}

impl RectangularDuct {
    /// Creates a duct from its two half-spans.
    ///
    /// # Errors
    ///
    /// Returns [`DuctError::InvalidGeometry`] if either span is zero,
    /// negative, or NaN. The walls at `y = ±a` and `z = ±b` would otherwise
    /// degenerate and the series scale factors divide by the spans.
    pub fn new(half_width: f64, half_depth: f64) -> Result<Self, DuctError> {
        let half_width =
            StrictlyPositive::new(half_width).map_err(|source| DuctError::InvalidGeometry {
                dimension: "half-width",
                source,
            })?;
        let half_depth =
            StrictlyPositive::new(half_depth).map_err(|source| DuctError::InvalidGeometry {
                dimension: "half-depth",
                source,
            })?;

        Ok(Self {
            half_width,
            half_depth,
        })
    }

    /// Half-span of the section along `y`.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width.into_inner()
    }

    /// Half-span of the section along `z`.
    #[must_use]
    pub fn half_depth(&self) -> f64 {
        self.half_depth.into_inner()
    }

    /// Axial velocity at `(y, z)`, truncated at `order`.
    ///
    /// Exactly zero on the wall `z = -b`; on `y = ±a` the truncated series
    /// leaves a Gibbs-type residual that shrinks as `order` grows.
    #[must_use]
    pub fn velocity(&self, y: f64, z: f64, order: TruncationOrder) -> f64 {
        let (a, b) = (self.half_width(), self.half_depth());
        self.scale() * sum_over_odd_indices(order, |i| velocity_term(i, y, z, a, b))
    }

    /// In-plane derivative `∂u/∂y` at `(y, z)`, truncated at `order`.
    ///
    /// The series is differentiated analytically term by term, not by finite
    /// differences of [`velocity`](Self::velocity).
    #[must_use]
    pub fn du_dy(&self, y: f64, z: f64, order: TruncationOrder) -> f64 {
        let (a, b) = (self.half_width(), self.half_depth());
        self.scale() * sum_over_odd_indices(order, |i| du_dy_term(i, y, z, a, b))
    }

    /// In-plane derivative `∂u/∂z` at `(y, z)`, truncated at `order`.
    ///
    /// Vanishes on the midplane `z = 0`.
    #[must_use]
    pub fn du_dz(&self, y: f64, z: f64, order: TruncationOrder) -> f64 {
        let (a, b) = (self.half_width(), self.half_depth());
        self.scale() * sum_over_odd_indices(order, |i| du_dz_term(i, y, z, a, b))
    }

    /// Volumetric discharge through the full section, truncated at `order`.
    ///
    /// Obtained by closed-form term-wise integration of the velocity series;
    /// the terms decay as `1/i⁵`, so this converges faster than the field
    /// evaluators.
    #[must_use]
    pub fn discharge(&self, order: TruncationOrder) -> f64 {
        let (a, b) = (self.half_width(), self.half_depth());
        let sum = sum_over_odd_indices(order, |i| discharge_term(i, a, b));
        ((-192.0 * a / (PI.powi(5) * b)) * sum + 1.0) * (4.0 * b * a.powi(3) / 3.0)
    }

    /// Shared scale factor of the field evaluators.
    ///
    /// Constant in `(y, z)`, so term-wise differentiation leaves it intact.
    fn scale(&self) -> f64 {
        let a = self.half_width();
        16.0 * a * a / PI.powi(3)
    }
}

/// The `i`-th velocity term: `(-1)^((i-1)/2)·(1 - cosh(kz)/cosh(kb))·cos(ky)/i³`
/// with `k = iπ/(2a)`.
fn velocity_term(i: u32, y: f64, z: f64, a: f64, b: f64) -> f64 {
    let k = f64::from(i) * PI / (2.0 * a);
    alternating_sign(i) * (1.0 - (k * z).cosh() / (k * b).cosh()) * (k * y).cos()
        / f64::from(i).powi(3)
}

fn du_dy_term(i: u32, y: f64, z: f64, a: f64, b: f64) -> f64 {
    let k = f64::from(i) * PI / (2.0 * a);
    -alternating_sign(i) * (1.0 - (k * z).cosh() / (k * b).cosh()) * k * (k * y).sin()
        / f64::from(i).powi(3)
}

fn du_dz_term(i: u32, y: f64, z: f64, a: f64, b: f64) -> f64 {
    let k = f64::from(i) * PI / (2.0 * a);
    alternating_sign(i) * (-k * (k * z).sinh() / (k * b).cosh()) * (k * y).cos()
        / f64::from(i).powi(3)
}

/// The `i`-th discharge term: `tanh(iπb/(2a))/i⁵`. No alternating sign here;
/// it cancels against the sign of the integrated cosine.
fn discharge_term(i: u32, a: f64, b: f64) -> f64 {
    (f64::from(i) * PI * b / (2.0 * a)).tanh() / f64::from(i).powi(5)
}
