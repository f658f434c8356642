use std::{cell::RefCell, fmt, rc::Rc};

use super::{SensitivityTable, Side, WallError};

/// Surface phase on one face of a wall.
///
/// The surface phase owns the authoritative coverage state during
/// integration; the wall stages coverages and commits them on
/// [`Wall::sync_coverages`](super::Wall::sync_coverages).
pub trait SurfacePhase {
    /// Number of surface species.
    fn n_species(&self) -> usize;

    /// Writes the current coverages into `out`, which has length [`n_species`](Self::n_species).
    fn get_coverages(&self, out: &mut [f64]);

    /// Replaces the current coverages; `coverages` has length [`n_species`](Self::n_species).
    fn set_coverages(&mut self, coverages: &[f64]);
}

/// Heterogeneous reaction mechanism on one face of a wall.
pub trait SurfaceKinetics {
    /// The surface phase the mechanism acts on.
    fn surface(&self) -> &dyn SurfacePhase;

    /// Mutable access to the surface phase.
    fn surface_mut(&mut self) -> &mut dyn SurfacePhase;

    /// Number of reactions in the mechanism.
    fn n_reactions(&self) -> usize;

    /// Rate multiplier of `reaction`.
    fn multiplier(&self, reaction: usize) -> f64;

    /// Sets the rate multiplier of `reaction`.
    fn set_multiplier(&mut self, reaction: usize, multiplier: f64);

    /// Human-readable identity of `reaction`, used to name sensitivity parameters.
    fn reaction_equation(&self, reaction: usize) -> String {
        format!("reaction {reaction}")
    }
}

/// Kinetics shared between the network that owns it and the walls that use it.
pub type SharedKinetics = Rc<RefCell<dyn SurfaceKinetics>>;

/// Surface chemistry bound to one face of a wall.
#[derive(Default)]
pub(super) struct SurfaceSide {
    pub(super) kinetics: Option<SharedKinetics>,
    pub(super) coverages: Vec<f64>,
    pub(super) sensitivity: SensitivityTable,
}

impl fmt::Debug for SurfaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceSide")
            .field("kinetics", &self.kinetics.is_some())
            .field("coverages", &self.coverages)
            .field("sensitivity", &self.sensitivity)
            .finish()
    }
}

impl SurfaceSide {
    /// Binds `kinetics`, seeding the coverage buffer from its surface.
    ///
    /// Rebinding the current mechanism is a no-op and returns `false`.
    /// Otherwise the old mechanism's perturbed multipliers are restored and
    /// the sensitivity parameters dropped, since their reaction indices
    /// belong to the old mechanism.
    pub(super) fn attach(&mut self, kinetics: Option<SharedKinetics>) -> bool {
        let unchanged = match (&self.kinetics, &kinetics) {
            (Some(current), Some(new)) => Rc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        if let Some(old) = &self.kinetics {
            self.sensitivity.restore(&mut *old.borrow_mut());
        }

        self.coverages = match &kinetics {
            Some(kinetics) => {
                let kinetics = kinetics.borrow();
                let surface = kinetics.surface();
                let mut coverages = vec![0.0; surface.n_species()];
                surface.get_coverages(&mut coverages);
                coverages
            }
            None => Vec::new(),
        };
        self.sensitivity.clear();
        self.kinetics = kinetics;
        true
    }

    pub(super) fn set_coverages(&mut self, side: Side, values: &[f64]) -> Result<(), WallError> {
        self.check_length(side, values.len(), "Wall::set_coverages")?;
        self.coverages.copy_from_slice(values);
        Ok(())
    }

    pub(super) fn get_coverages(&self, side: Side, out: &mut [f64]) -> Result<(), WallError> {
        self.check_length(side, out.len(), "Wall::get_coverages")?;
        out.copy_from_slice(&self.coverages);
        Ok(())
    }

    pub(super) fn sync_coverages(&self, side: Side) -> Result<(), WallError> {
        let Some(kinetics) = &self.kinetics else {
            return Err(WallError::NoKinetics {
                operation: "Wall::sync_coverages",
                side,
            });
        };
        kinetics
            .borrow_mut()
            .surface_mut()
            .set_coverages(&self.coverages);
        Ok(())
    }

    fn check_length(
        &self,
        side: Side,
        actual: usize,
        operation: &'static str,
    ) -> Result<(), WallError> {
        if actual == self.coverages.len() {
            Ok(())
        } else {
            Err(WallError::CoverageLength {
                operation,
                side,
                expected: self.coverages.len(),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::reactor::wall::core::test_support::{TestKinetics, shared};

    #[test]
    fn attach_seeds_buffer_from_surface() {
        let (_kinetics, handle) = shared(TestKinetics::new(&[0.7, 0.2, 0.1], 4));
        let mut side = SurfaceSide::default();

        assert!(side.attach(Some(handle)));
        assert_eq!(side.coverages, vec![0.7, 0.2, 0.1]);

        assert!(side.attach(None));
        assert!(side.coverages.is_empty());
        assert!(side.kinetics.is_none());
        assert!(!side.attach(None));
    }

    #[test]
    fn rebinding_same_mechanism_keeps_state() {
        let (_kinetics, handle) = shared(TestKinetics::new(&[0.5, 0.5], 3));
        let mut side = SurfaceSide::default();
        side.attach(Some(handle.clone()));
        side.set_coverages(Side::Left, &[0.9, 0.1]).unwrap();
        side.sensitivity.push(2, "r2".into());

        assert!(!side.attach(Some(handle)));
        assert_eq!(side.coverages, vec![0.9, 0.1]);
        assert_eq!(side.sensitivity.len(), 1);
    }

    #[test]
    fn switching_mechanism_restores_old_multipliers() {
        let (old, old_handle) = shared(TestKinetics::new(&[1.0], 2));
        let (_new, new_handle) = shared(TestKinetics::new(&[0.4, 0.6], 1));
        let mut side = SurfaceSide::default();
        side.attach(Some(old_handle));
        side.sensitivity.push(1, "r1".into());
        side.sensitivity.apply(&mut *old.borrow_mut(), &[3.0]);
        assert_eq!(old.borrow().multipliers, vec![1.0, 3.0]);

        assert!(side.attach(Some(new_handle)));
        assert_eq!(old.borrow().multipliers, vec![1.0, 1.0]);
        assert_eq!(side.sensitivity.len(), 0);
        assert_eq!(side.coverages, vec![0.4, 0.6]);
    }

    #[test]
    fn length_mismatch_leaves_buffer_alone() {
        let (_kinetics, handle) = shared(TestKinetics::new(&[0.5, 0.5], 1));
        let mut side = SurfaceSide::default();
        side.attach(Some(handle));

        let err = side.set_coverages(Side::Left, &[1.0]).unwrap_err();
        assert_eq!(
            err,
            WallError::CoverageLength {
                operation: "Wall::set_coverages",
                side: Side::Left,
                expected: 2,
                actual: 1,
            }
        );
        assert_eq!(side.coverages, vec![0.5, 0.5]);
    }

    #[test]
    fn sync_without_kinetics_fails() {
        let side = SurfaceSide::default();
        assert!(matches!(
            side.sync_coverages(Side::Right),
            Err(WallError::NoKinetics {
                side: Side::Right,
                ..
            })
        ));
    }
}
