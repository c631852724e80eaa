//! Sensitivity-parameter bookkeeping for surface reactions.
//!
//! An outer sensitivity driver perturbs individual surface reaction rates
//! by overriding their multipliers in the bound kinetics mechanism, runs a
//! perturbed integration pass, then restores the originals. The wall keeps
//! one registry per face recording which reactions participate, in
//! registration order; that order defines the parameter numbering used by
//! the driver.

use crate::support::surface::HeterogeneousKinetics;

use super::{Side, Wall, WallError};

/// Ordered registry of perturbable reactions on one wall face.
///
/// Each entry bundles the reaction index, its derived parameter id, and the
/// multiplier saved at perturbation time, so the per-entry invariants hold
/// by construction.
#[derive(Debug, Default)]
pub(crate) struct SensitivityRegistry {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    reaction: usize,
    id: String,
    saved: Option<f64>,
}

impl SensitivityRegistry {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn push(&mut self, reaction: usize, id: String) {
        self.entries.push(Entry {
            reaction,
            id,
            saved: None,
        });
    }

    pub(crate) fn id(&self, p: usize) -> Option<&str> {
        self.entries.get(p).map(|e| e.id.as_str())
    }

    /// Saves each registered reaction's current multiplier, then overwrites
    /// it with the corresponding parameter, in registration order.
    ///
    /// The caller has already checked that `params` matches the registry
    /// length.
    pub(crate) fn perturb(&mut self, kinetics: &dyn HeterogeneousKinetics, params: &[f64]) {
        for (entry, &param) in self.entries.iter_mut().zip(params) {
            entry.saved = Some(kinetics.multiplier(entry.reaction));
            kinetics.set_multiplier(entry.reaction, param);
        }
    }

    /// Restores each perturbed reaction's saved multiplier, in registration
    /// order, and clears the saved values. Entries never perturbed are left
    /// untouched.
    pub(crate) fn restore(&mut self, kinetics: &dyn HeterogeneousKinetics) {
        for entry in &mut self.entries {
            if let Some(saved) = entry.saved.take() {
                kinetics.set_multiplier(entry.reaction, saved);
            }
        }
    }
}

impl Wall<'_> {
    /// Number of sensitivity parameters registered on one face.
    #[must_use]
    pub fn n_sens_params(&self, side: Side) -> usize {
        self.surfaces[side].as_ref().map_or(0, |s| s.registry.len())
    }

    /// Registers a surface reaction for sensitivity analysis on one face.
    ///
    /// Registration order defines parameter numbering. Registering the same
    /// reaction twice appends a duplicate entry.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism,
    /// or [`WallError::ReactionIndexOutOfRange`] if the mechanism has no
    /// such reaction.
    pub fn add_sensitivity_reaction(
        &mut self,
        side: Side,
        reaction: usize,
    ) -> Result<(), WallError> {
        let site = self
            .surfaces
            .get_mut(side)
            .as_mut()
            .ok_or(WallError::NoSurface(side))?;
        let kinetics = site.mechanism.kinetics;
        let n_reactions = kinetics.n_reactions();
        if reaction >= n_reactions {
            return Err(WallError::ReactionIndexOutOfRange {
                reaction,
                n_reactions,
            });
        }

        let id = format!(
            "{}: {} {}",
            self.name,
            side,
            kinetics.reaction_equation(reaction)
        );
        site.registry.push(reaction, id);
        Ok(())
    }

    /// The stable textual id of the `p`-th registered parameter on one face.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism,
    /// or [`WallError::SensitivityIndexOutOfRange`] if `p` is past the end
    /// of the registry.
    pub fn sensitivity_param_id(&self, side: Side, p: usize) -> Result<&str, WallError> {
        let site = self.surfaces[side]
            .as_ref()
            .ok_or(WallError::NoSurface(side))?;
        site.registry
            .id(p)
            .ok_or(WallError::SensitivityIndexOutOfRange {
                index: p,
                count: site.registry.len(),
            })
    }

    /// Perturbs the registered reactions on one face.
    ///
    /// For each registered reaction, in registration order, saves its
    /// current rate multiplier and overwrites it with the corresponding
    /// entry of `params`. Pair every call with a later
    /// [`reset_sensitivity_parameters`](Wall::reset_sensitivity_parameters);
    /// a second `set` before the reset re-saves the already-perturbed
    /// multipliers.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism,
    /// or [`WallError::ParamsLength`] if `params` does not match the
    /// registry length.
    pub fn set_sensitivity_parameters(
        &mut self,
        side: Side,
        params: &[f64],
    ) -> Result<(), WallError> {
        let site = self
            .surfaces
            .get_mut(side)
            .as_mut()
            .ok_or(WallError::NoSurface(side))?;
        if params.len() != site.registry.len() {
            return Err(WallError::ParamsLength {
                expected: site.registry.len(),
                got: params.len(),
            });
        }
        let kinetics = site.mechanism.kinetics;
        site.registry.perturb(kinetics, params);
        Ok(())
    }

    /// Undoes the previous perturbation on one face, restoring each
    /// registered reaction's saved multiplier in registration order.
    ///
    /// A reset without a prior matching set, or on a face with no bound
    /// mechanism, is a no-op.
    pub fn reset_sensitivity_parameters(&mut self, side: Side) {
        if let Some(site) = self.surfaces.get_mut(side).as_mut() {
            let kinetics = site.mechanism.kinetics;
            site.registry.restore(kinetics);
        }
    }
}
