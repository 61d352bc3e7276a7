//! Steady pressure-driven laminar flow models.
//!
//! This module contains Poiseuille flow models, where a constant streamwise
//! pressure gradient drives a Newtonian fluid through a straight duct and the
//! velocity profile is independent of the streamwise coordinate.

pub mod rectangular_duct;
