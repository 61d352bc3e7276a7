use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, P4, Z0},
};

/// Pressure gradient, Pa/m in SI.
pub type PressureGradient = Quantity<ISQ<N2, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Second moment of area, m⁴ in SI.
pub type SecondMomentOfArea = Quantity<ISQ<P4, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`SecondMomentOfArea`] from a raw value in m⁴.
///
/// [`uom`] ships no named unit for m⁴, so this is the construction path for
/// the alias.
#[must_use]
pub fn second_moment_of_area(value: f64) -> SecondMomentOfArea {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

#[cfg(test)]
mod tests {
    use uom::si::{
        f64::{Length, Pressure, Volume},
        length::meter,
        pressure::pascal,
        volume::cubic_meter,
    };

    use super::*;

    #[test]
    fn pressure_gradient_from_quantity_arithmetic() {
        let gradient: PressureGradient =
            Pressure::new::<pascal>(10.0) / Length::new::<meter>(2.0);
        assert_eq!(gradient.value, 5.0);
    }

    #[test]
    fn second_moment_of_area_recovers_volume_times_length() {
        let q = second_moment_of_area(3.0);
        let v: Volume = q / Length::new::<meter>(1.5);
        assert_eq!(v.get::<cubic_meter>(), 2.0);
    }
}
