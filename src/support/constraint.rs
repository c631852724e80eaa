//! Type-level numeric constraints with zero runtime cost.
//!
//! A [`Constrained<T, C>`] wraps a value that was checked at construction
//! time against the marker type `C`, so downstream code can rely on the
//! invariant without re-validating.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (areas, rate coefficients)
//! - [`StrictlyPositive`]: greater than zero (thermal resistances)
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1` (emissivities)
//!
//! Each marker provides an associated `new()` constructor, e.g.
//! `NonNegative::new(area)`.
//!
//! # Extending
//!
//! Custom numeric invariants can be added by implementing [`Constraint<T>`]
//! for a new zero-sized marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for a marker type representing a numeric
/// constraint, such as [`NonNegative`] or [`UnitInterval`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types or your own
/// [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use reactornet_models::support::constraint::{Constrained, NonNegative};
///
/// let n = Constrained::<_, NonNegative>::new(3.0).unwrap();
/// assert_eq!(n.into_inner(), 3.0);
/// assert!(Constrained::<_, NonNegative>::new(-3.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
