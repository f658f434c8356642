use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, P4, Z0},
};

/// Volume rate per unit pressure difference, m³/(s·Pa) in SI.
///
/// Relates the pressure difference across a wall to its rate of volume change.
pub type ExpansionRateCoefficient = Quantity<ISQ<P4, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// The reciprocal of a [`uom::si::f64::HeatTransfer`] coefficient.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Stefan–Boltzmann constant, W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
