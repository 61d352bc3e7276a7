//! Public flow models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`poiseuille`]) so that other flow regimes can be added alongside without
//! disturbing existing model paths.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The
//! [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API; a single core may be exposed through multiple
//! adapters.

pub mod poiseuille;
