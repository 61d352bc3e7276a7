//! # Poiseuille Models
//!
//! Analytic models of steady, pressure-driven laminar (Poiseuille) flow.
//!
//! The crate currently models flow through straight ducts of rectangular
//! cross-section via the classical truncated Fourier-series solution of the
//! governing Poisson equation (White, *Viscous Fluid Flow*, 2nd ed., p. 120).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific flow models and their [`twine_core::Model`]
//!   adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! The numerical core of each model is pure and deterministic: evaluators
//! share no mutable state, so they are safe to call concurrently once a
//! model is constructed.

pub mod models;
pub mod support;
