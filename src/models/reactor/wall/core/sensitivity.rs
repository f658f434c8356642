use std::ops::Deref;

use super::{Side, SurfaceKinetics, Wall};

/// A heterogeneous reaction whose rate multiplier is a sensitivity parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityParameter {
    reaction: usize,
    saved_multiplier: f64,
    name: String,
}

impl SensitivityParameter {
    /// Index of the reaction within its side's mechanism.
    #[must_use]
    pub fn reaction(&self) -> usize {
        self.reaction
    }

    /// Multiplier recorded before the most recent perturbation.
    ///
    /// Holds `1.0` until the parameter is first perturbed.
    #[must_use]
    pub fn saved_multiplier(&self) -> f64 {
        self.saved_multiplier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Sensitivity parameters tracked on one face of a wall.
#[derive(Debug, Clone, Default)]
pub(super) struct SensitivityTable {
    params: Vec<SensitivityParameter>,
    perturbed: bool,
}

impl SensitivityTable {
    pub(super) fn len(&self) -> usize {
        self.params.len()
    }

    pub(super) fn params(&self) -> &[SensitivityParameter] {
        &self.params
    }

    pub(super) fn get(&self, position: usize) -> Option<&SensitivityParameter> {
        self.params.get(position)
    }

    pub(super) fn contains(&self, reaction: usize) -> bool {
        self.params.iter().any(|p| p.reaction == reaction)
    }

    pub(super) fn push(&mut self, reaction: usize, name: String) {
        self.params.push(SensitivityParameter {
            reaction,
            saved_multiplier: 1.0,
            name,
        });
    }

    /// Forgets every tracked parameter.
    ///
    /// Callers restore a perturbed table first.
    pub(super) fn clear(&mut self) {
        self.params.clear();
        self.perturbed = false;
    }

    pub(super) fn is_perturbed(&self) -> bool {
        self.perturbed
    }

    /// Saves each tracked multiplier, then scales it by the matching factor.
    ///
    /// `factors` has one entry per tracked parameter.
    pub(super) fn apply(&mut self, kinetics: &mut dyn SurfaceKinetics, factors: &[f64]) {
        for (param, factor) in self.params.iter_mut().zip(factors) {
            param.saved_multiplier = kinetics.multiplier(param.reaction);
            kinetics.set_multiplier(param.reaction, param.saved_multiplier * factor);
        }
        self.perturbed = true;
    }

    /// Writes every saved multiplier back into `kinetics`.
    ///
    /// Returns `false` without touching `kinetics` if nothing is perturbed.
    pub(super) fn restore(&mut self, kinetics: &mut dyn SurfaceKinetics) -> bool {
        if !self.perturbed {
            return false;
        }
        for param in &self.params {
            kinetics.set_multiplier(param.reaction, param.saved_multiplier);
        }
        self.perturbed = false;
        true
    }
}

/// Scoped sensitivity perturbation of one side of a wall.
///
/// Created by [`Wall::perturb_sensitivity`]. The perturbed multipliers stay
/// in effect while the guard lives and are restored when it drops, so every
/// perturbation is paired with exactly one reset.
///
/// The guard dereferences to the wall so rates can be evaluated under the
/// perturbation.
#[derive(Debug)]
pub struct SensitivityGuard<'w, L> {
    pub(super) wall: &'w mut Wall<L>,
    pub(super) side: Side,
}

impl<L> SensitivityGuard<'_, L> {
    /// The side being perturbed.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl<L> Deref for SensitivityGuard<'_, L> {
    type Target = Wall<L>;

    fn deref(&self) -> &Wall<L> {
        self.wall
    }
}

impl<L> Drop for SensitivityGuard<'_, L> {
    fn drop(&mut self) {
        self.wall.reset_sensitivity_parameters(self.side);
    }
}
