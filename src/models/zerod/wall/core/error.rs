use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::side::Side;

/// Errors raised by wall configuration, evaluation, and bookkeeping.
///
/// All errors are raised synchronously at the offending call and leave the
/// wall's prior state unchanged; recovery is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallError {
    /// `set_emissivity` was given a value outside `[0, 1]`.
    #[error("invalid emissivity: {0}")]
    Emissivity(ConstraintError),

    /// `set_area` was given a negative area.
    #[error("invalid area: {0}")]
    Area(ConstraintError),

    /// `set_expansion_rate_coeff` was given a negative coefficient.
    #[error("invalid expansion rate coefficient: {0}")]
    ExpansionRateCoeff(ConstraintError),

    /// `set_heat_transfer_coeff` was given a negative coefficient.
    #[error("invalid heat transfer coefficient: {0}")]
    HeatTransferCoeff(ConstraintError),

    /// `set_thermal_resistance` was given a non-positive resistance.
    #[error("invalid thermal resistance: {0}")]
    ThermalResistance(ConstraintError),

    /// A coupling rate was requested before the wall was ready.
    #[error("wall is not ready: install both reactors (and a velocity function, for a piston)")]
    NotReady,

    /// A surface-chemistry operation addressed a face with no bound mechanism.
    #[error("no surface mechanism is bound on the {0} side")]
    NoSurface(Side),

    /// A coverage slice did not match the face's species count.
    #[error("coverage slice has length {got}, expected {expected}")]
    CoverageLength { expected: usize, got: usize },

    /// A sensitivity registration named a reaction the mechanism lacks.
    #[error("reaction {reaction} is out of range: mechanism has {n_reactions} reactions")]
    ReactionIndexOutOfRange { reaction: usize, n_reactions: usize },

    /// A sensitivity parameter lookup was out of range.
    #[error("sensitivity parameter {index} is out of range: {count} registered on this side")]
    SensitivityIndexOutOfRange { index: usize, count: usize },

    /// A perturbation slice did not match the side's registry length.
    #[error("sensitivity parameter slice has length {got}, expected {expected}")]
    ParamsLength { expected: usize, got: usize },
}
