use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, P2, P3, Z0},
};

/// Expansion rate coefficient, m³/s of volume exchange per m² of wall area
/// per Pa of pressure imbalance; m/(s·Pa) in SI base units.
pub type ExpansionRateCoefficient = Quantity<ISQ<P2, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Overall heat transfer coefficient, W/(m²·K) in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// The reciprocal of [`HeatTransferCoefficient`].
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`ExpansionRateCoefficient`] from its SI value in m/(s·Pa).
#[must_use]
pub fn expansion_rate_coefficient(value: f64) -> ExpansionRateCoefficient {
    ExpansionRateCoefficient {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Creates a [`HeatTransferCoefficient`] from its SI value in W/(m²·K).
#[must_use]
pub fn heat_transfer_coefficient(value: f64) -> HeatTransferCoefficient {
    HeatTransferCoefficient {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Creates a [`ThermalInsulance`] from its SI value in m²·K/W.
#[must_use]
pub fn thermal_insulance(value: f64) -> ThermalInsulance {
    ThermalInsulance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
