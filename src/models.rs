//! Public Twine models.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `reactor`).
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation and domain
//! logic in an internal `core` submodule. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core API.

pub mod reactor;
