use std::{cell::RefCell, rc::Rc};

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use super::{ReactorEndpoint, Reservoir, SharedKinetics, Side, SurfaceKinetics, SurfacePhase};

#[derive(Debug, Clone, Default)]
pub(super) struct TestSurface {
    pub(super) coverages: Vec<f64>,
}

impl SurfacePhase for TestSurface {
    fn n_species(&self) -> usize {
        self.coverages.len()
    }

    fn get_coverages(&self, out: &mut [f64]) {
        out.copy_from_slice(&self.coverages);
    }

    fn set_coverages(&mut self, coverages: &[f64]) {
        self.coverages.copy_from_slice(coverages);
    }
}

/// Mechanism with unit multipliers and `A<n> <=> B<n>` style equations.
#[derive(Debug, Clone)]
pub(super) struct TestKinetics {
    pub(super) surface: TestSurface,
    pub(super) multipliers: Vec<f64>,
}

impl TestKinetics {
    pub(super) fn new(coverages: &[f64], n_reactions: usize) -> Self {
        Self {
            surface: TestSurface {
                coverages: coverages.to_vec(),
            },
            multipliers: vec![1.0; n_reactions],
        }
    }
}

impl SurfaceKinetics for TestKinetics {
    fn surface(&self) -> &dyn SurfacePhase {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut dyn SurfacePhase {
        &mut self.surface
    }

    fn n_reactions(&self) -> usize {
        self.multipliers.len()
    }

    fn multiplier(&self, reaction: usize) -> f64 {
        self.multipliers[reaction]
    }

    fn set_multiplier(&mut self, reaction: usize, multiplier: f64) {
        self.multipliers[reaction] = multiplier;
    }

    fn reaction_equation(&self, reaction: usize) -> String {
        format!("A{reaction}(s) <=> B{reaction}(s)")
    }
}

/// Returns the concrete handle alongside the type-erased one the wall stores.
pub(super) fn shared(kinetics: TestKinetics) -> (Rc<RefCell<TestKinetics>>, SharedKinetics) {
    let concrete = Rc::new(RefCell::new(kinetics));
    let erased: SharedKinetics = concrete.clone();
    (concrete, erased)
}

pub(super) fn reservoir(pressure_pa: f64, temperature_k: f64) -> Rc<Reservoir> {
    Rc::new(Reservoir::new(
        Pressure::new::<pascal>(pressure_pa),
        ThermodynamicTemperature::new::<kelvin>(temperature_k),
    ))
}

/// Endpoint that records the walls installed against it.
#[derive(Debug, Default)]
pub(super) struct TestEndpoint {
    pub(super) walls: RefCell<Vec<(String, Side)>>,
}

impl ReactorEndpoint for TestEndpoint {
    fn pressure(&self) -> Pressure {
        Pressure::new::<pascal>(101_325.0)
    }

    fn temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(300.0)
    }

    fn attach_wall(&self, wall: &str, side: Side) {
        self.walls.borrow_mut().push((wall.to_owned(), side));
    }
}
