//! # Reactornet Models
//!
//! Zero-dimensional reactor-network component models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A zero-D reactor network represents a chemical or thermal system as a
//! set of well-mixed control volumes coupled by boundary entities. This
//! crate models those boundaries; the control volumes, the kinetics
//! evaluators, and the time integrator that drives the network are
//! collaborators reached through capability traits.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models: numeric
//!   constraints, [`uom`] extensions, and the collaborator capability
//!   traits.
//!
//! ## Units
//!
//! All physical quantities use [`uom`] SI types. Raw `f64` values appear
//! only where a quantity is genuinely dimensionless (emissivities, surface
//! coverages, rate multipliers).

pub mod models;
pub mod support;
