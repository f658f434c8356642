use std::cell::Cell;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use super::Side;

/// A lumped-parameter control volume bounded by a wall.
///
/// The wall only reads endpoint state. Rates it computes are returned to the
/// network, which folds them into each endpoint's own balances.
pub trait ReactorEndpoint {
    /// Current pressure.
    fn pressure(&self) -> Pressure;

    /// Current temperature.
    fn temperature(&self) -> ThermodynamicTemperature;

    /// Called when a wall named `wall` is installed against this endpoint.
    ///
    /// `side` is the face of the wall that touches this endpoint.
    /// The default does nothing.
    fn attach_wall(&self, wall: &str, side: Side) {
        let _ = (wall, side);
    }
}

/// An endpoint whose state is imposed rather than integrated.
///
/// State is held in [`Cell`]s so a reservoir shared through an `Rc` can be
/// updated between evaluations.
#[derive(Debug, Clone)]
pub struct Reservoir {
    pressure: Cell<Pressure>,
    temperature: Cell<ThermodynamicTemperature>,
}

impl Reservoir {
    #[must_use]
    pub fn new(pressure: Pressure, temperature: ThermodynamicTemperature) -> Self {
        Self {
            pressure: Cell::new(pressure),
            temperature: Cell::new(temperature),
        }
    }

    pub fn set_pressure(&self, pressure: Pressure) {
        self.pressure.set(pressure);
    }

    pub fn set_temperature(&self, temperature: ThermodynamicTemperature) {
        self.temperature.set(temperature);
    }
}

impl ReactorEndpoint for Reservoir {
    fn pressure(&self) -> Pressure {
        self.pressure.get()
    }

    fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

    #[test]
    #[allow(clippy::float_cmp)]
    fn reservoir_state_is_settable_through_shared_ref() {
        let reservoir = Reservoir::new(
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );
        let shared = &reservoir;

        shared.set_pressure(Pressure::new::<pascal>(200_000.0));
        shared.set_temperature(ThermodynamicTemperature::new::<kelvin>(1000.0));

        assert_eq!(reservoir.pressure().get::<pascal>(), 200_000.0);
        assert_eq!(reservoir.temperature().get::<kelvin>(), 1000.0);
    }
}
