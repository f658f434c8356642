use std::{fmt, rc::Rc};

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{
            Area, HeatFluxDensity, HeatTransfer, Power, Pressure, ThermodynamicTemperature, Time,
            Velocity, VolumeRate,
        },
        power::watt,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::{ExpansionRateCoefficient, STEFAN_BOLTZMANN, TemperatureDifference},
};

use super::TimeFunction;

/// Physical parameters of a wall and the linear transport laws built on them.
///
/// The defaults describe a 1 m² wall that neither moves nor conducts heat.
#[derive(Clone)]
pub struct WallProperties {
    /// Wall area.
    pub area: Area,

    /// Overall heat transfer coefficient `U`.
    pub heat_transfer_coeff: HeatTransfer,

    /// Volume rate per unit pressure difference.
    ///
    /// Ignored while a velocity function is bound.
    pub expansion_rate_coeff: ExpansionRateCoefficient,

    /// Surface emissivity for radiative exchange.
    pub emissivity: Constrained<f64, UnitInterval>,

    /// Piston velocity, positive toward the right reactor.
    pub velocity: Option<Rc<dyn TimeFunction<Velocity>>>,

    /// Imposed heat flux, positive from left to right.
    pub heat_flux: Option<Rc<dyn TimeFunction<HeatFluxDensity>>>,
}

impl Default for WallProperties {
    fn default() -> Self {
        Self {
            area: Area::new::<square_meter>(1.0),
            heat_transfer_coeff: HeatTransfer::ZERO,
            expansion_rate_coeff: ExpansionRateCoefficient::ZERO,
            emissivity: UnitInterval::zero(),
            velocity: None,
            heat_flux: None,
        }
    }
}

impl fmt::Debug for WallProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WallProperties")
            .field("area", &self.area)
            .field("heat_transfer_coeff", &self.heat_transfer_coeff)
            .field("expansion_rate_coeff", &self.expansion_rate_coeff)
            .field("emissivity", self.emissivity.as_ref())
            .field("velocity", &self.velocity.is_some())
            .field("heat_flux", &self.heat_flux.is_some())
            .finish()
    }
}

impl WallProperties {
    /// Rate of volume change of the left reactor.
    ///
    /// `A·v(t)` when a velocity function is bound, otherwise `k·(p_left − p_right)`.
    #[must_use]
    pub fn volume_rate(&self, t: Time, p_left: Pressure, p_right: Pressure) -> VolumeRate {
        match &self.velocity {
            Some(velocity) => self.area * velocity.eval(t),
            None => self.expansion_rate_coeff * (p_left - p_right),
        }
    }

    /// Heat flow from left to right: conduction, radiation, and imposed flux.
    #[must_use]
    pub fn heat_rate(
        &self,
        t: Time,
        t_left: ThermodynamicTemperature,
        t_right: ThermodynamicTemperature,
    ) -> Power {
        self.conduction(t_left, t_right) + self.radiation(t_left, t_right) + self.imposed_heat(t)
    }

    /// Conductive term `U·A·(T_left − T_right)`.
    #[must_use]
    pub fn conduction(
        &self,
        t_left: ThermodynamicTemperature,
        t_right: ThermodynamicTemperature,
    ) -> Power {
        self.heat_transfer_coeff * self.area * t_left.minus(t_right)
    }

    /// Radiative term `ε·A·σ·(T_left⁴ − T_right⁴)`, zero for a non-emitting wall.
    #[must_use]
    pub fn radiation(
        &self,
        t_left: ThermodynamicTemperature,
        t_right: ThermodynamicTemperature,
    ) -> Power {
        let emissivity = *self.emissivity.as_ref();
        if emissivity <= 0.0 {
            return Power::ZERO;
        }

        let t_left = t_left.get::<kelvin>();
        let t_right = t_right.get::<kelvin>();
        Power::new::<watt>(
            emissivity
                * self.area.get::<square_meter>()
                * STEFAN_BOLTZMANN
                * (t_left.powi(4) - t_right.powi(4)),
        )
    }

    /// Imposed term `A·q″(t)`, zero when no heat flux function is bound.
    #[must_use]
    pub fn imposed_heat(&self, t: Time) -> Power {
        match &self.heat_flux {
            Some(heat_flux) => self.area * heat_flux.eval(t),
            None => Power::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        heat_flux_density::watt_per_square_meter, heat_transfer::watt_per_square_meter_kelvin,
        pressure::pascal, time::second, velocity::meter_per_second,
        volume_rate::cubic_meter_per_second,
    };

    fn temp(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    #[test]
    fn defaults() {
        let props = WallProperties::default();
        assert_relative_eq!(props.area.get::<square_meter>(), 1.0);
        assert_eq!(props.heat_transfer_coeff, HeatTransfer::ZERO);
        assert_eq!(props.expansion_rate_coeff, ExpansionRateCoefficient::ZERO);
        assert_relative_eq!(*props.emissivity.as_ref(), 0.0);
        assert!(props.velocity.is_none() && props.heat_flux.is_none());
    }

    #[test]
    fn expansion_law_ignores_time() {
        let props = WallProperties {
            expansion_rate_coeff: VolumeRate::new::<cubic_meter_per_second>(0.01)
                / Pressure::new::<pascal>(1.0),
            ..WallProperties::default()
        };
        let p_left = Pressure::new::<pascal>(200_000.0);
        let p_right = Pressure::new::<pascal>(100_000.0);

        for t in [0.0, 1.0, 1e6] {
            let vdot = props.volume_rate(seconds(t), p_left, p_right);
            assert_relative_eq!(vdot.get::<cubic_meter_per_second>(), 1000.0);
        }
    }

    #[test]
    fn velocity_overrides_expansion_law() {
        let velocity: Rc<dyn TimeFunction<Velocity>> =
            Rc::new(|t: Time| Velocity::new::<meter_per_second>(2.0 * t.get::<second>()));
        let props = WallProperties {
            area: Area::new::<square_meter>(3.0),
            expansion_rate_coeff: VolumeRate::new::<cubic_meter_per_second>(1.0)
                / Pressure::new::<pascal>(1.0),
            velocity: Some(velocity),
            ..WallProperties::default()
        };

        let vdot = props.volume_rate(
            seconds(0.5),
            Pressure::new::<pascal>(5.0e5),
            Pressure::new::<pascal>(1.0e5),
        );
        assert_relative_eq!(vdot.get::<cubic_meter_per_second>(), 3.0);
    }

    #[test]
    fn heat_terms_add_independently() {
        let heat_flux: Rc<dyn TimeFunction<HeatFluxDensity>> =
            Rc::new(|_t: Time| HeatFluxDensity::new::<watt_per_square_meter>(-50.0));
        let props = WallProperties {
            area: Area::new::<square_meter>(2.0),
            heat_transfer_coeff: HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
            emissivity: UnitInterval::new(0.5).unwrap(),
            heat_flux: Some(heat_flux),
            ..WallProperties::default()
        };
        let (t_left, t_right) = (temp(1000.0), temp(300.0));

        let conduction = 10.0 * 2.0 * 700.0;
        let radiation = 0.5 * 2.0 * STEFAN_BOLTZMANN * (1000.0_f64.powi(4) - 300.0_f64.powi(4));
        let imposed = -100.0;

        assert_relative_eq!(props.conduction(t_left, t_right).get::<watt>(), conduction);
        assert_relative_eq!(props.radiation(t_left, t_right).get::<watt>(), radiation);
        assert_relative_eq!(props.imposed_heat(seconds(0.0)).get::<watt>(), imposed);
        assert_relative_eq!(
            props.heat_rate(seconds(0.0), t_left, t_right).get::<watt>(),
            conduction + radiation + imposed
        );
    }

    #[test]
    fn black_body_radiation_reverses_with_temperatures() {
        let props = WallProperties {
            emissivity: UnitInterval::one(),
            ..WallProperties::default()
        };

        let forward = props.radiation(temp(500.0), temp(400.0));
        let reverse = props.radiation(temp(400.0), temp(500.0));
        assert_relative_eq!(forward.get::<watt>(), -reverse.get::<watt>());
        assert_relative_eq!(
            forward.get::<watt>(),
            STEFAN_BOLTZMANN * (500.0_f64.powi(4) - 400.0_f64.powi(4))
        );
    }
}
