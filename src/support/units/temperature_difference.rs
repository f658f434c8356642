use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// Subtracting two absolute temperatures in [`uom`] yields another absolute
/// temperature, which is the wrong kind for driving forces such as
/// `U·A·(T_left − T_right)`.
/// See [#380](https://github.com/iliekturtles/uom/issues/380).
///
/// # Example
///
/// ```
/// use twine_reactor_models::support::units::TemperatureDifference;
/// use uom::si::{
///     f64::ThermodynamicTemperature,
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let hot = ThermodynamicTemperature::new::<kelvin>(1000.0);
/// let cold = ThermodynamicTemperature::new::<kelvin>(300.0);
/// assert_eq!(hot.minus(cold).get::<delta_kelvin>(), 700.0);
/// ```
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
