use uom::{
    ConstZero,
    si::f64::{Power, Time, VolumeRate},
};

use super::{ReactorEndpoint, WallProperties};

/// Transport law evaluated by a [`Wall`](super::Wall) each right-hand-side evaluation.
///
/// The provided methods implement the linear expansion law and the
/// conduction/radiation/imposed-flux heat law of [`WallProperties`].
/// Specialized walls override one or both instead of reimplementing the wall.
///
/// Implementations must be pure: an integrator may evaluate the same state
/// several times, e.g. for finite-difference Jacobians.
pub trait WallTransportLaw {
    /// Rate of volume change of the left reactor.
    fn vdot(
        &self,
        properties: &WallProperties,
        t: Time,
        left: &dyn ReactorEndpoint,
        right: &dyn ReactorEndpoint,
    ) -> VolumeRate {
        properties.volume_rate(t, left.pressure(), right.pressure())
    }

    /// Heat flow rate from left to right.
    fn q_dot(
        &self,
        properties: &WallProperties,
        t: Time,
        left: &dyn ReactorEndpoint,
        right: &dyn ReactorEndpoint,
    ) -> Power {
        properties.heat_rate(t, left.temperature(), right.temperature())
    }

    /// Extra readiness conditions beyond having both endpoints bound.
    fn ready(&self) -> bool {
        true
    }
}

/// The default law: linear piston response and additive heat transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearLaw;

impl WallTransportLaw for LinearLaw {}

/// A rigid wall that exchanges heat but never moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedVolume;

impl WallTransportLaw for FixedVolume {
    fn vdot(
        &self,
        _properties: &WallProperties,
        _t: Time,
        _left: &dyn ReactorEndpoint,
        _right: &dyn ReactorEndpoint,
    ) -> VolumeRate {
        VolumeRate::ZERO
    }
}
