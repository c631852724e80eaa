//! Zero-dimensional reactor-network models.
//!
//! A reactor network couples well-mixed control volumes through boundary
//! entities. This module provides those couplings; the control volumes
//! themselves are external collaborators reached through
//! [`crate::support::reactor::ReactorState`].

pub mod wall;
