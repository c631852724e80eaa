//! Evaluation of the wall's two coupling rates.
//!
//! Closed forms:
//!
//! - `vdot(t) = k·A·(P_left − P_right) + A·v(t)` — a piston responding to
//!   the instantaneous pressure imbalance with gain `k`, plus the optional
//!   prescribed velocity `v(t)`. A [`WallKind::Piston`] drops the
//!   compliance term.
//! - `Q(t) = U·A·(T_left − T_right) + ε·σ·A·(T_left⁴ − T_right⁴) + A·q₀(t)`
//!   — conduction through the overall coefficient `U`, gray-body radiative
//!   exchange with emissivity `ε` and the Stefan–Boltzmann constant `σ`,
//!   plus the optional prescribed flux `q₀(t)`.
//!
//! Sign conventions: positive `vdot` adds volume to the left reactor and
//! removes it from the right; positive `Q` flows from left to right.

use uom::{
    ConstZero,
    si::{
        f64::{HeatFluxDensity, Power, Time, VolumeRate},
        heat_flux_density::watt_per_square_meter,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::{STEFAN_BOLTZMANN, TemperatureDifference};

use super::{Side, Wall, WallError, WallKind};

/// The two scalar coupling terms a wall supplies to the network integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouplingRates {
    /// Rate of volume change; positive adds volume to the left reactor.
    pub vdot: VolumeRate,

    /// Heat flow rate; positive flows from left to right.
    pub q_dot: Power,
}

impl Wall<'_> {
    /// Rate of volume change across the wall at time `t`.
    ///
    /// Positive values add volume to the left reactor and remove it from
    /// the right. A rigid wall (zero expansion rate coefficient, no
    /// velocity function) exchanges no volume.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NotReady`] unless [`ready`](Wall::ready) holds.
    pub fn vdot(&self, t: Time) -> Result<VolumeRate, WallError> {
        if !self.ready() {
            return Err(WallError::NotReady);
        }
        let Some(reactors) = self.reactors else {
            return Err(WallError::NotReady);
        };

        let area = self.area.into_inner();
        let mut vdot: VolumeRate = match self.kind {
            WallKind::Flexible => {
                let dp = reactors[Side::Left].pressure() - reactors[Side::Right].pressure();
                self.expansion_rate_coeff.into_inner() * area * dp
            }
            WallKind::Piston => VolumeRate::ZERO,
        };

        if let Some(v) = &self.velocity_fn {
            vdot += area * v.eval(t);
        }

        Ok(vdot)
    }

    /// Heat flow rate through the wall at time `t`.
    ///
    /// Positive values flow from the left reactor to the right. A wall with
    /// zero heat transfer coefficient, zero emissivity, and no heat flux
    /// function is adiabatic.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NotReady`] unless [`ready`](Wall::ready) holds.
    pub fn heat_rate(&self, t: Time) -> Result<Power, WallError> {
        if !self.ready() {
            return Err(WallError::NotReady);
        }
        let Some(reactors) = self.reactors else {
            return Err(WallError::NotReady);
        };

        let area = self.area.into_inner();
        let t_left = reactors[Side::Left].temperature();
        let t_right = reactors[Side::Right].temperature();

        let mut q: Power = self.heat_transfer_coeff.into_inner() * area * t_left.minus(t_right);

        let emissivity = self.emissivity.into_inner();
        if emissivity > 0.0 {
            let t4 = t_left.get::<kelvin>().powi(4) - t_right.get::<kelvin>().powi(4);
            q += area
                * HeatFluxDensity::new::<watt_per_square_meter>(
                    emissivity * STEFAN_BOLTZMANN * t4,
                );
        }

        if let Some(q0) = &self.heat_flux_fn {
            q += area * q0.eval(t);
        }

        Ok(q)
    }
}
