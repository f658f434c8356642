//! Zero-dimensional reactor network models.
//!
//! Reactors themselves are external to this crate; this module provides the
//! elements that couple them, such as [`wall::Wall`].

pub mod wall;
