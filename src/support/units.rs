//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Derived quantities
//!
//! Quantities such as [`ExpansionRateCoefficient`] and [`ThermalInsulance`] have
//! no unit module in [`uom`], so they are built from quantities that do:
//!
//! ```
//! use twine_reactor_models::support::units::{ExpansionRateCoefficient, ThermalInsulance};
//! use uom::si::{
//!     f64::{HeatTransfer, Pressure, VolumeRate},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     pressure::pascal,
//!     volume_rate::cubic_meter_per_second,
//! };
//!
//! let k: ExpansionRateCoefficient =
//!     VolumeRate::new::<cubic_meter_per_second>(0.01) / Pressure::new::<pascal>(1.0);
//! let r: ThermalInsulance = HeatTransfer::new::<watt_per_square_meter_kelvin>(4.0).recip();
//! assert_eq!(r.value, 0.25);
//! # let _ = k;
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{ExpansionRateCoefficient, STEFAN_BOLTZMANN, ThermalInsulance};
pub use temperature_difference::TemperatureDifference;
