//! A wall coupling two lumped-parameter reactors.
//!
//! A wall exchanges volume (piston work) and heat between the reactors on its
//! two faces, and carries optional surface chemistry on each face.
//! The network evaluates [`Wall::vdot`] and [`Wall::q_dot`] on every
//! right-hand-side evaluation and folds the rates into the reactor balances.
//!
//! The wall never owns the reactors, time functions, or kinetics it refers
//! to: reactors are held weakly, and functions and kinetics are shared with the
//! network through `Rc`.

mod endpoint;
mod error;
mod heat_transfer_rate;
mod law;
mod properties;
mod sensitivity;
mod side;
mod surface;
mod time_function;

#[cfg(test)]
mod test_support;

pub use endpoint::{ReactorEndpoint, Reservoir};
pub use error::{WallError, WallErrorKind};
pub use heat_transfer_rate::HeatTransferRate;
pub use law::{FixedVolume, LinearLaw, WallTransportLaw};
pub use properties::WallProperties;
pub use sensitivity::{SensitivityGuard, SensitivityParameter};
pub use side::{Side, Sides};
pub use surface::{SharedKinetics, SurfaceKinetics, SurfacePhase};
pub use time_function::TimeFunction;

use std::rc::{Rc, Weak};

use uom::si::f64::{Area, HeatFluxDensity, HeatTransfer, Power, Time, Velocity, VolumeRate};

use crate::support::{
    constraint::UnitInterval,
    units::{ExpansionRateCoefficient, ThermalInsulance},
};

use sensitivity::SensitivityTable;
use surface::SurfaceSide;

/// A boundary element connecting two reactors.
///
/// The transport law `L` decides how [`vdot`](Wall::vdot) and
/// [`q_dot`](Wall::q_dot) are computed from the wall's [`WallProperties`]
/// and the current endpoint state; [`LinearLaw`] is the default.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use twine_reactor_models::models::reactor::wall::{Reservoir, Wall};
/// use uom::si::{
///     area::square_meter,
///     f64::{Area, HeatTransfer, Pressure, ThermodynamicTemperature, Time},
///     heat_transfer::watt_per_square_meter_kelvin,
///     power::watt,
///     pressure::pascal,
///     thermodynamic_temperature::kelvin,
///     time::second,
/// };
///
/// let hot = Rc::new(Reservoir::new(
///     Pressure::new::<pascal>(101_325.0),
///     ThermodynamicTemperature::new::<kelvin>(1000.0),
/// ));
/// let cold = Rc::new(Reservoir::new(
///     Pressure::new::<pascal>(101_325.0),
///     ThermodynamicTemperature::new::<kelvin>(300.0),
/// ));
///
/// let mut wall = Wall::new();
/// wall.set_area(Area::new::<square_meter>(2.0));
/// wall.set_heat_transfer_coeff(HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0));
/// wall.install(&hot, &cold).unwrap();
///
/// let q_dot = wall.q_dot(Time::new::<second>(0.0)).unwrap();
/// assert_eq!(q_dot.get::<watt>(), 14_000.0);
/// ```
#[derive(Debug)]
pub struct Wall<L = LinearLaw> {
    name: String,
    properties: WallProperties,
    law: L,
    left: Option<Weak<dyn ReactorEndpoint>>,
    right: Option<Weak<dyn ReactorEndpoint>>,
    sides: Sides<SurfaceSide>,
}

impl Wall {
    /// Creates a wall with default properties and the linear transport law.
    #[must_use]
    pub fn new() -> Self {
        Self::with_law(LinearLaw)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Wall<L> {
    /// Creates a wall with default properties and the given transport law.
    #[must_use]
    pub fn with_law(law: L) -> Self {
        Self {
            name: String::from("wall"),
            properties: WallProperties::default(),
            law,
            left: None,
            right: None,
            sides: Sides::default(),
        }
    }

    /// Returns this wall renamed.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns this wall with `properties` replacing the current ones.
    #[must_use]
    pub fn with_properties(mut self, properties: WallProperties) -> Self {
        self.properties = properties;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn properties(&self) -> &WallProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut WallProperties {
        &mut self.properties
    }

    #[must_use]
    pub fn law(&self) -> &L {
        &self.law
    }

    pub fn law_mut(&mut self) -> &mut L {
        &mut self.law
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.properties.area
    }

    pub fn set_area(&mut self, area: Area) {
        self.properties.area = area;
    }

    #[must_use]
    pub fn heat_transfer_coeff(&self) -> HeatTransfer {
        self.properties.heat_transfer_coeff
    }

    pub fn set_heat_transfer_coeff(&mut self, u: HeatTransfer) {
        self.properties.heat_transfer_coeff = u;
    }

    /// Area-specific thermal resistance, the reciprocal of the heat transfer coefficient.
    #[must_use]
    pub fn thermal_resistance(&self) -> ThermalInsulance {
        self.properties.heat_transfer_coeff.recip()
    }

    /// Sets the heat transfer coefficient to `1 / r`.
    pub fn set_thermal_resistance(&mut self, r: ThermalInsulance) {
        self.properties.heat_transfer_coeff = r.recip();
    }

    #[must_use]
    pub fn expansion_rate_coeff(&self) -> ExpansionRateCoefficient {
        self.properties.expansion_rate_coeff
    }

    pub fn set_expansion_rate_coeff(&mut self, k: ExpansionRateCoefficient) {
        self.properties.expansion_rate_coeff = k;
    }

    #[must_use]
    pub fn emissivity(&self) -> f64 {
        *self.properties.emissivity.as_ref()
    }

    /// Sets the surface emissivity.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Emissivity`] if `emissivity` is outside `[0, 1]`
    /// or NaN; the previous value is kept.
    pub fn set_emissivity(&mut self, emissivity: f64) -> Result<(), WallError> {
        self.properties.emissivity =
            UnitInterval::new(emissivity).map_err(|source| WallError::Emissivity {
                operation: "Wall::set_emissivity",
                emissivity,
                source,
            })?;
        Ok(())
    }

    /// Binds a piston velocity function, overriding the expansion law.
    ///
    /// `None` keeps the current function; use [`clear_velocity`](Self::clear_velocity)
    /// to remove it.
    pub fn set_velocity(&mut self, velocity: Option<Rc<dyn TimeFunction<Velocity>>>) {
        if let Some(velocity) = velocity {
            self.properties.velocity = Some(velocity);
        }
    }

    pub fn clear_velocity(&mut self) {
        self.properties.velocity = None;
    }

    /// Binds an imposed heat flux function.
    ///
    /// `None` keeps the current function; use [`clear_heat_flux`](Self::clear_heat_flux)
    /// to remove it.
    pub fn set_heat_flux(&mut self, heat_flux: Option<Rc<dyn TimeFunction<HeatFluxDensity>>>) {
        if let Some(heat_flux) = heat_flux {
            self.properties.heat_flux = Some(heat_flux);
        }
    }

    pub fn clear_heat_flux(&mut self) {
        self.properties.heat_flux = None;
    }

    /// Installs the wall between `left` and `right`, replacing any previous binding.
    ///
    /// Each endpoint is told which face of the wall it touches.
    /// Use [`install_dyn`](Self::install_dyn) when the reactors are already
    /// type-erased.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::SameEndpoint`] if `left` and `right` are the same
    /// object; the wall is left unchanged.
    pub fn install<A, B>(&mut self, left: &Rc<A>, right: &Rc<B>) -> Result<(), WallError>
    where
        A: ReactorEndpoint + 'static,
        B: ReactorEndpoint + 'static,
    {
        let left: Rc<dyn ReactorEndpoint> = left.clone();
        let right: Rc<dyn ReactorEndpoint> = right.clone();
        self.install_dyn(&left, &right)
    }

    /// Installs the wall between two type-erased reactors.
    ///
    /// Accepts what [`left`](Self::left) and [`right`](Self::right) return,
    /// so a network holding `Rc<dyn ReactorEndpoint>` can rewire walls.
    ///
    /// # Errors
    ///
    /// Same as [`install`](Self::install).
    pub fn install_dyn(
        &mut self,
        left: &Rc<dyn ReactorEndpoint>,
        right: &Rc<dyn ReactorEndpoint>,
    ) -> Result<(), WallError> {
        if std::ptr::addr_eq(Rc::as_ptr(left), Rc::as_ptr(right)) {
            return Err(WallError::SameEndpoint {
                operation: "Wall::install",
            });
        }

        self.left = Some(Rc::downgrade(left));
        self.right = Some(Rc::downgrade(right));

        left.attach_wall(&self.name, Side::Left);
        right.attach_wall(&self.name, Side::Right);

        tracing::debug!(wall = %self.name, "installed between two reactors");
        Ok(())
    }

    /// The reactor on the left face, if bound and still alive.
    #[must_use]
    pub fn left(&self) -> Option<Rc<dyn ReactorEndpoint>> {
        self.left.as_ref().and_then(Weak::upgrade)
    }

    /// The reactor on the right face, if bound and still alive.
    #[must_use]
    pub fn right(&self) -> Option<Rc<dyn ReactorEndpoint>> {
        self.right.as_ref().and_then(Weak::upgrade)
    }

    fn endpoints(
        &self,
        operation: &'static str,
    ) -> Result<(Rc<dyn ReactorEndpoint>, Rc<dyn ReactorEndpoint>), WallError> {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(WallError::Detached { operation }),
        }
    }

    /// Attaches surface kinetics to each side; `None` detaches.
    ///
    /// A side handed the mechanism it already has keeps its staged coverages
    /// and sensitivity parameters.
    /// A side that changes mechanism has any perturbed multipliers restored on
    /// the old mechanism, its sensitivity parameters cleared, and its coverage
    /// buffer reseeded from the new surface.
    ///
    /// # Panics
    ///
    /// Panics if a kinetics is already mutably borrowed elsewhere.
    pub fn set_kinetics(&mut self, left: Option<SharedKinetics>, right: Option<SharedKinetics>) {
        for (side, kinetics) in [(Side::Left, left), (Side::Right, right)] {
            let attached = kinetics.is_some();
            let surface = self.sides.get_mut(side);
            if !surface.attach(kinetics) {
                continue;
            }
            tracing::debug!(
                wall = %self.name,
                %side,
                attached,
                n_species = surface.coverages.len(),
                "surface kinetics updated"
            );
        }
    }

    #[must_use]
    pub fn kinetics(&self, side: Side) -> Option<&SharedKinetics> {
        self.sides.get(side).kinetics.as_ref()
    }

    /// Number of species on the surface of `side`, zero without kinetics.
    #[must_use]
    pub fn n_surface_species(&self, side: Side) -> usize {
        self.sides.get(side).coverages.len()
    }

    /// The staged coverages of `side`.
    #[must_use]
    pub fn coverages(&self, side: Side) -> &[f64] {
        &self.sides.get(side).coverages
    }

    /// Stages coverages for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::CoverageLength`] if `values` does not have one entry
    /// per surface species; the buffer is unchanged.
    pub fn set_coverages(&mut self, side: Side, values: &[f64]) -> Result<(), WallError> {
        self.sides.get_mut(side).set_coverages(side, values)
    }

    /// Copies the staged coverages of `side` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::CoverageLength`] if `out` does not have one entry
    /// per surface species.
    pub fn get_coverages(&self, side: Side, out: &mut [f64]) -> Result<(), WallError> {
        self.sides.get(side).get_coverages(side, out)
    }

    /// Commits the staged coverages of `side` to its surface phase.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoKinetics`] if no kinetics is attached to `side`.
    ///
    /// # Panics
    ///
    /// Panics if the kinetics is already borrowed elsewhere.
    pub fn sync_coverages(&self, side: Side) -> Result<(), WallError> {
        self.sides.get(side).sync_coverages(side)
    }

    /// Tracks the rate multiplier of `reaction` on `side` as a sensitivity parameter.
    ///
    /// # Errors
    ///
    /// - [`WallError::NoKinetics`] if no kinetics is attached to `side`.
    /// - [`WallError::ReactionIndex`] if the mechanism has no such reaction.
    /// - [`WallError::DuplicateReaction`] if the reaction is already tracked.
    ///
    /// # Panics
    ///
    /// Panics if the kinetics is already mutably borrowed elsewhere.
    pub fn add_sensitivity_reaction(
        &mut self,
        side: Side,
        reaction: usize,
    ) -> Result<(), WallError> {
        const OPERATION: &str = "Wall::add_sensitivity_reaction";

        let surface = self.sides.get_mut(side);
        let Some(kinetics) = &surface.kinetics else {
            return Err(WallError::NoKinetics {
                operation: OPERATION,
                side,
            });
        };
        let kinetics = kinetics.borrow();

        let n_reactions = kinetics.n_reactions();
        if reaction >= n_reactions {
            return Err(WallError::ReactionIndex {
                operation: OPERATION,
                side,
                reaction,
                n_reactions,
            });
        }
        if surface.sensitivity.contains(reaction) {
            return Err(WallError::DuplicateReaction {
                operation: OPERATION,
                side,
                reaction,
            });
        }

        let name = format!(
            "{} ({side} surface): {}",
            self.name,
            kinetics.reaction_equation(reaction)
        );
        tracing::debug!(wall = %self.name, %side, reaction, "added sensitivity parameter");
        surface.sensitivity.push(reaction, name);
        Ok(())
    }

    /// Number of sensitivity parameters tracked on `side`.
    #[must_use]
    pub fn n_sens_params(&self, side: Side) -> usize {
        self.sides.get(side).sensitivity.len()
    }

    /// Name of the sensitivity parameter at `position` on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::SensitivityPosition`] if `position` is out of range.
    pub fn sensitivity_param_id(&self, side: Side, position: usize) -> Result<&str, WallError> {
        let table = &self.sides.get(side).sensitivity;
        table
            .get(position)
            .map(SensitivityParameter::name)
            .ok_or(WallError::SensitivityPosition {
                operation: "Wall::sensitivity_param_id",
                side,
                position,
                len: table.len(),
            })
    }

    /// All sensitivity parameters tracked on `side`, in registration order.
    #[must_use]
    pub fn sensitivity_parameters(&self, side: Side) -> &[SensitivityParameter] {
        self.sides.get(side).sensitivity.params()
    }

    /// Perturbs the tracked reactions on `side`.
    ///
    /// Each tracked multiplier is saved, then scaled by the matching entry of
    /// `params`. Must be followed by exactly one
    /// [`reset_sensitivity_parameters`](Self::reset_sensitivity_parameters);
    /// [`perturb_sensitivity`](Self::perturb_sensitivity) enforces that pairing.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::ParameterCount`] if `params` does not have one entry
    /// per tracked parameter; nothing is perturbed.
    ///
    /// # Panics
    ///
    /// Panics if the kinetics is already borrowed elsewhere.
    pub fn set_sensitivity_parameters(
        &mut self,
        side: Side,
        params: &[f64],
    ) -> Result<(), WallError> {
        let surface = self.sides.get_mut(side);
        let expected = surface.sensitivity.len();
        if params.len() != expected {
            return Err(WallError::ParameterCount {
                operation: "Wall::set_sensitivity_parameters",
                side,
                expected,
                actual: params.len(),
            });
        }

        if let Some(kinetics) = &surface.kinetics {
            surface.sensitivity.apply(&mut *kinetics.borrow_mut(), params);
            tracing::trace!(wall = %self.name, %side, n_params = expected, "perturbed multipliers");
        }
        Ok(())
    }

    /// Restores the multipliers saved by the last
    /// [`set_sensitivity_parameters`](Self::set_sensitivity_parameters) on `side`.
    ///
    /// Does nothing if the side is not currently perturbed.
    ///
    /// # Panics
    ///
    /// Panics if the kinetics is already borrowed elsewhere.
    pub fn reset_sensitivity_parameters(&mut self, side: Side) {
        let surface = self.sides.get_mut(side);
        if let Some(kinetics) = &surface.kinetics {
            if surface.sensitivity.restore(&mut *kinetics.borrow_mut()) {
                tracing::trace!(wall = %self.name, %side, "restored multipliers");
            }
        }
    }

    /// Perturbs the tracked reactions on `side` until the returned guard drops.
    ///
    /// # Errors
    ///
    /// Same as [`set_sensitivity_parameters`](Self::set_sensitivity_parameters).
    pub fn perturb_sensitivity(
        &mut self,
        side: Side,
        params: &[f64],
    ) -> Result<SensitivityGuard<'_, L>, WallError> {
        self.set_sensitivity_parameters(side, params)?;
        Ok(SensitivityGuard { wall: self, side })
    }
}

impl<L: WallTransportLaw> Wall<L> {
    /// True once both reactors are bound and alive and the law is ready.
    #[must_use]
    pub fn ready(&self) -> bool {
        let alive = |end: &Option<Weak<dyn ReactorEndpoint>>| {
            end.as_ref().is_some_and(|end| end.strong_count() > 0)
        };
        alive(&self.left) && alive(&self.right) && self.law.ready()
    }

    /// Rate of volume change; positive grows the left reactor at the right's expense.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Detached`] if the wall is not installed or a
    /// reactor has been dropped.
    pub fn vdot(&self, t: Time) -> Result<VolumeRate, WallError> {
        let (left, right) = self.endpoints("Wall::vdot")?;
        Ok(self.law.vdot(&self.properties, t, &*left, &*right))
    }

    /// Heat flow rate through the wall; positive flows from left to right.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Detached`] if the wall is not installed or a
    /// reactor has been dropped.
    pub fn q_dot(&self, t: Time) -> Result<Power, WallError> {
        let (left, right) = self.endpoints("Wall::q_dot")?;
        Ok(self.law.q_dot(&self.properties, t, &*left, &*right))
    }

    /// Heat flow rate through the wall with its direction made explicit.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Detached`] as for [`q_dot`](Self::q_dot), or
    /// [`WallError::HeatRate`] if the rate is not a number.
    pub fn heat_transfer_rate(&self, t: Time) -> Result<HeatTransferRate, WallError> {
        HeatTransferRate::from_signed_left_to_right(self.q_dot(t)?).map_err(|source| {
            WallError::HeatRate {
                operation: "Wall::heat_transfer_rate",
                source,
            }
        })
    }
}
