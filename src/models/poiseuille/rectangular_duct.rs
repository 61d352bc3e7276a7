//! Poiseuille flow in a duct of rectangular cross-section.
//!
//! The axial velocity satisfies a Poisson equation over the section with
//! no-slip walls, and admits an exact Fourier-series solution (White,
//! *Viscous Fluid Flow*, 2nd ed., p. 120). The computational core
//! truncates that series at a caller-supplied order and
//! evaluates the velocity, its two in-plane derivatives, and the total
//! discharge from the same odd-index term sequence. Core results are
//! normalized to a unit pressure gradient over viscosity.
//!
//! The core lives in an internal `core` module; its public surface is
//! re-exported here.
//!
//! [`RectangularDuctFlow`] is the [`Model`] adapter over the core: it scales
//! the normalized fields by a physical [`FlowDrive`] to produce dimensional
//! quantities.

pub(crate) mod core;

pub use self::core::{
    DepthSolution, DuctError, GivenDischargeConfig, GivenDischargeError, REFERENCE,
    RectangularDuct, TruncationOrder, given_discharge,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    area::square_meter,
    f64::{Area, DynamicViscosity, Velocity, VolumeRate},
};

use crate::support::units::{PressureGradient, second_moment_of_area};

/// The physical conditions driving the flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowDrive {
    /// Magnitude of the streamwise pressure drop per unit length (`-dp/dx`).
    pub pressure_gradient: PressureGradient,

    /// Dynamic viscosity of the fluid.
    pub viscosity: DynamicViscosity,
}

/// Dimensional bulk results for a driven duct flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowSummary {
    /// Axial velocity at the section center, where the profile peaks.
    pub peak_velocity: Velocity,

    /// Volumetric flow rate through the full section.
    pub discharge: VolumeRate,
}

/// Poiseuille flow through a rectangular duct under a prescribed drive.
///
/// Thin [`Model`] adapter over [`RectangularDuct`]: the normalized series
/// results carry units of m² (velocity) and m⁴ (discharge), and scaling by
/// `pressure_gradient / viscosity` restores the physical fields.
#[derive(Debug, Clone, Copy)]
pub struct RectangularDuctFlow {
    duct: RectangularDuct,
    order: TruncationOrder,
}

impl RectangularDuctFlow {
    /// Creates a flow model for the given duct and truncation order.
    #[must_use]
    pub fn new(duct: RectangularDuct, order: TruncationOrder) -> Self {
        Self { duct, order }
    }

    /// The duct geometry this model evaluates.
    #[must_use]
    pub fn duct(&self) -> RectangularDuct {
        self.duct
    }
}

impl Model for RectangularDuctFlow {
    type Input = FlowDrive;
    type Output = FlowSummary;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mobility = input.pressure_gradient / input.viscosity;

        let peak = Area::new::<square_meter>(self.duct.velocity(0.0, 0.0, self.order));
        let flux = second_moment_of_area(self.duct.discharge(self.order));

        Ok(FlowSummary {
            peak_velocity: mobility * peak,
            discharge: mobility * flux,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, f64::Length, f64::Pressure, length::meter,
        pressure::pascal, velocity::meter_per_second, volume_rate::cubic_meter_per_second,
    };

    use super::*;

    fn drive(gradient_pa_per_m: f64, viscosity_pa_s: f64) -> FlowDrive {
        FlowDrive {
            pressure_gradient: Pressure::new::<pascal>(gradient_pa_per_m)
                / Length::new::<meter>(1.0),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity_pa_s),
        }
    }

    #[test]
    fn unit_drive_reproduces_normalized_fields() {
        let duct = RectangularDuct::new(0.5, 0.1).unwrap();
        let order = TruncationOrder::default();
        let model = RectangularDuctFlow::new(duct, order);

        let summary = model.call(&drive(1.0, 1.0)).unwrap();

        assert_relative_eq!(
            summary.peak_velocity.get::<meter_per_second>(),
            duct.velocity(0.0, 0.0, order),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            summary.discharge.get::<cubic_meter_per_second>(),
            duct.discharge(order),
            epsilon = 1e-15
        );
    }

    #[test]
    fn output_scales_linearly_with_the_drive() {
        let duct = RectangularDuct::new(0.5, 0.1).unwrap();
        let model = RectangularDuctFlow::new(duct, TruncationOrder::default());

        let baseline = model.call(&drive(1.0, 1.0)).unwrap();
        let scaled = model.call(&drive(10.0, 1e-3)).unwrap();

        assert_relative_eq!(
            scaled.discharge.get::<cubic_meter_per_second>(),
            1e4 * baseline.discharge.get::<cubic_meter_per_second>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            scaled.peak_velocity.get::<meter_per_second>(),
            1e4 * baseline.peak_velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }
}
