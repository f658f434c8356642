//! Reactor walls.
//!
//! The wall itself lives in an internal `core` module and is re-exported
//! here, since networks configure it directly.
//! [`WallModel`] adapts an installed wall to [`twine_core::Model`], mapping a
//! time to the volume and heat rates the network integrates.

mod core;

pub use self::core::{
    FixedVolume, HeatTransferRate, LinearLaw, ReactorEndpoint, Reservoir, SensitivityGuard,
    SensitivityParameter, SharedKinetics, Side, Sides, SurfaceKinetics, SurfacePhase, TimeFunction,
    Wall, WallError, WallErrorKind, WallProperties, WallTransportLaw,
};

use twine_core::Model;
use uom::si::f64::{Time, VolumeRate};

/// Rates a wall contributes to the network at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFluxes {
    /// Rate of volume change of the left reactor.
    pub vdot: VolumeRate,
    /// Heat transfer between the two reactors.
    pub q_dot: HeatTransferRate,
}

/// [`Model`] adapter evaluating an installed [`Wall`] at a given time.
#[derive(Debug, Clone, Copy)]
pub struct WallModel<'a, L> {
    wall: &'a Wall<L>,
}

impl<'a, L> WallModel<'a, L> {
    #[must_use]
    pub fn new(wall: &'a Wall<L>) -> Self {
        Self { wall }
    }
}

impl<L: WallTransportLaw> Model for WallModel<'_, L> {
    type Input = Time;
    type Output = WallFluxes;
    type Error = WallError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(WallFluxes {
            vdot: self.wall.vdot(*input)?,
            q_dot: self.wall.heat_transfer_rate(*input)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatTransfer, Pressure, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        power::watt,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
        time::second,
        volume_rate::cubic_meter_per_second,
    };

    fn reservoir(pressure_pa: f64, temperature_k: f64) -> Rc<Reservoir> {
        Rc::new(Reservoir::new(
            Pressure::new::<pascal>(pressure_pa),
            ThermodynamicTemperature::new::<kelvin>(temperature_k),
        ))
    }

    #[test]
    fn fluxes_follow_the_wall() {
        let left = reservoir(2.0e5, 300.0);
        let right = reservoir(1.0e5, 1000.0);

        let mut wall = Wall::new();
        wall.set_expansion_rate_coeff(
            VolumeRate::new::<cubic_meter_per_second>(0.01) / Pressure::new::<pascal>(1.0),
        );
        wall.set_heat_transfer_coeff(HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0));
        wall.install(&left, &right).unwrap();

        let fluxes = WallModel::new(&wall)
            .call(&Time::new::<second>(1.0))
            .unwrap();

        assert_relative_eq!(fluxes.vdot.get::<cubic_meter_per_second>(), 1000.0);
        assert!(matches!(fluxes.q_dot, HeatTransferRate::RightToLeft(_)));
        assert_relative_eq!(fluxes.q_dot.magnitude().get::<watt>(), 7000.0);
    }

    #[test]
    fn detached_wall_is_an_error() {
        let wall = Wall::new();
        let err = WallModel::new(&wall)
            .call(&Time::new::<second>(0.0))
            .unwrap_err();
        assert_eq!(
            err,
            WallError::Detached {
                operation: "Wall::vdot"
            }
        );
        assert_eq!(err.kind(), WallErrorKind::PreconditionViolation);
    }
}
