//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units in the dimensional model
//! adapters. This module provides quantity aliases that are useful for flow
//! modeling but aren't included in [`uom`], such as [`PressureGradient`]
//! (Pa/m) and [`SecondMomentOfArea`] (m⁴, the dimension of a discharge
//! normalized by pressure gradient over viscosity).

mod quantities;

pub use quantities::{PressureGradient, SecondMomentOfArea, second_moment_of_area};
