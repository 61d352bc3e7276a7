//! Renders the Poiseuille velocity field over the lower half-section of a
//! rectangular duct as an ASCII contour map, and reports the discharge and
//! peak velocity for a water-like drive.
//!
//! Run with `cargo run --example rectangular_duct`.

use poiseuille_models::models::poiseuille::rectangular_duct::{
    DuctError, FlowDrive, RectangularDuct, RectangularDuctFlow, TruncationOrder,
};
use twine_core::Model;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, Pressure},
    length::meter,
    pressure::pascal,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

const LEVELS: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), DuctError> {
    // A wide, shallow section: width 1 m, depth 0.3 m below the midplane.
    let duct = RectangularDuct::new(0.5, 0.3)?;
    let order = TruncationOrder::default();

    let (a, b) = (duct.half_width(), duct.half_depth());
    let ny = 61;
    let nz = ((ny as f64) * b / a) as usize;

    // Mesh over y ∈ [-a, a], z ∈ [-b, 0], top row at the midplane.
    let peak = duct.velocity(0.0, 0.0, order);
    for iz in (0..nz).rev() {
        let z = -b + b * (iz as f64) / ((nz - 1) as f64);
        let mut row = String::with_capacity(ny);
        for iy in 0..ny {
            let y = -a + 2.0 * a * (iy as f64) / ((ny - 1) as f64);
            let u = duct.velocity(y, z, order);
            let level = ((u / peak) * ((LEVELS.len() - 1) as f64)).round() as usize;
            row.push(LEVELS[level.min(LEVELS.len() - 1)] as char);
        }
        println!("{row}");
    }

    println!();
    println!("normalized peak velocity: {peak:.6e} m^2");
    println!("normalized discharge:     {:.6e} m^4", duct.discharge(order));

    // Dimensional results for water driven at 10 Pa/m.
    let model = RectangularDuctFlow::new(duct, order);
    let summary = model
        .call(&FlowDrive {
            pressure_gradient: Pressure::new::<pascal>(10.0) / Length::new::<meter>(1.0),
            viscosity: DynamicViscosity::new::<pascal_second>(1.0e-3),
        })
        .expect("dimensional scaling is infallible");

    println!();
    println!("water at 10 Pa/m:");
    println!(
        "  peak velocity: {:.4} m/s",
        summary.peak_velocity.get::<meter_per_second>()
    );
    println!(
        "  discharge:     {:.4} m^3/s",
        summary.discharge.get::<cubic_meter_per_second>()
    );

    Ok(())
}
