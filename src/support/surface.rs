//! Capability traits for heterogeneous surface chemistry collaborators.
//!
//! A wall face may carry adsorbed species whose reactions are evaluated by
//! an external kinetics mechanism. The wall borrows both collaborators and
//! never owns them; the same phase or mechanism instance may be shared by
//! several network components.
//!
//! Methods take `&self` even when they update collaborator state: in the
//! single-threaded network simulation a mechanism can sit behind shared
//! borrows from multiple walls, so implementations of the mutating methods
//! (`set_coverages`, `set_multiplier`) are expected to use interior
//! mutability (`Cell`, `RefCell`).

/// The authoritative store of per-species surface site coverage on one wall face.
pub trait SurfacePhase {
    /// Number of surface species in this phase.
    fn species_count(&self) -> usize;

    /// Overwrites the phase's coverage array.
    ///
    /// `coverages` has one entry per surface species, in phase species order.
    fn set_coverages(&self, coverages: &[f64]);
}

/// A heterogeneous reaction-rate evaluator with perturbable rate multipliers.
///
/// Each reaction carries a scalar multiplier applied on top of its rate
/// constant (nominally 1). Sensitivity analysis perturbs multipliers rather
/// than the underlying rate data, so the mechanism stays intact.
pub trait HeterogeneousKinetics {
    /// Number of reactions in the mechanism.
    fn n_reactions(&self) -> usize;

    /// Returns the current rate multiplier of a reaction.
    fn multiplier(&self, reaction: usize) -> f64;

    /// Overwrites the rate multiplier of a reaction.
    fn set_multiplier(&self, reaction: usize, value: f64);

    /// A human-readable equation string for a reaction.
    ///
    /// Used to label sensitivity parameters. The default is index-based.
    fn reaction_equation(&self, reaction: usize) -> String {
        format!("reaction {reaction}")
    }
}
