//! The wall coupling model.
//!
//! A wall is the boundary between two control volumes in a zero-dimensional
//! reactor network. At any simulated time it supplies two scalar coupling
//! terms to the external integrator: the volumetric flow rate across the
//! boundary and the heat flow rate through it. It also tracks heterogeneous
//! surface chemistry on each face and the per-reaction sensitivity
//! bookkeeping for that chemistry.
//!
//! The computational core is in the internal `core` module; the
//! [`twine_core::Model`] implementation below is a thin adapter over it.
//!
//! # Example
//!
//! ```
//! use reactornet_models::models::zerod::wall::{Wall, WallError};
//! use reactornet_models::support::{
//!     reactor::Reservoir,
//!     units::heat_transfer_coefficient,
//! };
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Pressure, ThermodynamicTemperature, Time, Volume},
//!     power::watt,
//!     pressure::pascal,
//!     thermodynamic_temperature::kelvin,
//!     time::second,
//!     volume::cubic_meter,
//! };
//!
//! let hot = Reservoir::new(
//!     Pressure::new::<pascal>(101_325.0),
//!     ThermodynamicTemperature::new::<kelvin>(500.0),
//!     Volume::new::<cubic_meter>(1.0),
//! );
//! let cold = Reservoir::new(
//!     Pressure::new::<pascal>(101_325.0),
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//!     Volume::new::<cubic_meter>(1.0),
//! );
//!
//! let mut wall = Wall::new();
//! wall.set_area(Area::new::<square_meter>(0.5))?;
//! wall.set_heat_transfer_coeff(heat_transfer_coefficient(10.0))?;
//! assert!(wall.install(&hot, &cold));
//!
//! let q = wall.heat_rate(Time::new::<second>(0.0))?;
//! assert_eq!(q.get::<watt>(), 1000.0);
//! # Ok::<(), WallError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    CouplingRates, PerSide, Side, SurfaceMechanism, Wall, WallError, WallKind,
};

use twine_core::Model;
use uom::si::f64::Time;

/// Walls evaluate directly as Twine models: the input is the simulated
/// time, the output bundles both coupling rates.
impl Model for Wall<'_> {
    type Input = Time;
    type Output = CouplingRates;
    type Error = WallError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(CouplingRates {
            vdot: self.vdot(*input)?,
            q_dot: self.heat_rate(*input)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, f64::Area, power::watt, time::second,
        volume_rate::cubic_meter_per_second,
    };

    use crate::support::units::{expansion_rate_coefficient, heat_transfer_coefficient};

    use super::core::test_support::reactor;

    #[test]
    fn adapter_bundles_both_rates() {
        let hot = reactor(3e5, 500.0);
        let cold = reactor(1e5, 300.0);

        let mut wall = Wall::new();
        wall.set_area(Area::new::<square_meter>(1.0)).unwrap();
        wall.set_expansion_rate_coeff(expansion_rate_coefficient(1e-5))
            .unwrap();
        wall.set_heat_transfer_coeff(heat_transfer_coefficient(10.0))
            .unwrap();
        wall.install(&hot, &cold);

        let rates = wall.call(&Time::new::<second>(0.0)).unwrap();
        assert_relative_eq!(rates.vdot.get::<cubic_meter_per_second>(), 2.0);
        assert_relative_eq!(rates.q_dot.get::<watt>(), 2000.0);
    }

    #[test]
    fn adapter_reports_an_uninstalled_wall() {
        let wall = Wall::new();
        assert_eq!(
            wall.call(&Time::new::<second>(0.0)),
            Err(WallError::NotReady)
        );
    }
}
