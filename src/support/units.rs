//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., pressure, temperature,
//! power). This module provides extensions that are useful for reactor-network
//! modeling but aren't included in [`uom`]:
//!
//! - Quantity aliases for the wall coupling coefficients
//!   ([`ExpansionRateCoefficient`], [`HeatTransferCoefficient`],
//!   [`ThermalInsulance`]), with constructors taking SI values.
//! - The [`TemperatureDifference`] trait, providing a
//!   [`minus`](TemperatureDifference::minus) method for subtracting one
//!   absolute temperature from another to get a temperature interval.
//! - The Stefan–Boltzmann constant used by radiative heat transfer.

mod quantities;
mod temperature_difference;

pub use quantities::{
    ExpansionRateCoefficient, HeatTransferCoefficient, ThermalInsulance,
    expansion_rate_coefficient, heat_transfer_coefficient, thermal_insulance,
};
pub use temperature_difference::TemperatureDifference;

/// Stefan–Boltzmann constant, W/(m²·K⁴).
///
/// Exact in the 2019 SI.
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
