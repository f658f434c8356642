use uom::si::f64::Time;

/// A scalar function of time, such as a piston velocity or an imposed heat flux.
///
/// Implemented for every `Fn(Time) -> Q`, so closures can be used directly:
///
/// ```
/// use std::rc::Rc;
///
/// use twine_reactor_models::models::reactor::wall::TimeFunction;
/// use uom::si::{f64::{Time, Velocity}, time::second, velocity::meter_per_second};
///
/// let piston: Rc<dyn TimeFunction<Velocity>> =
///     Rc::new(|t: Time| Velocity::new::<meter_per_second>(0.5 * t.get::<second>()));
///
/// let v = piston.eval(Time::new::<second>(2.0));
/// assert_eq!(v.get::<meter_per_second>(), 1.0);
/// ```
pub trait TimeFunction<Q> {
    /// Evaluates the function at time `t`.
    fn eval(&self, t: Time) -> Q;
}

impl<F, Q> TimeFunction<Q> for F
where
    F: Fn(Time) -> Q,
{
    fn eval(&self, t: Time) -> Q {
        self(t)
    }
}
