//! # Twine Reactor Models
//!
//! Zero-dimensional reactor network models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Reactor network elements and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts next to the model that needs it and moves to
//! [`support`] once it is useful across models.

pub mod models;
pub mod support;
