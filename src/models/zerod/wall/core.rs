//! Wall state, configuration, and per-face bookkeeping.
//!
//! The wall couples exactly two control volumes. This module owns the
//! entity's state: geometric and physical parameters, the optional
//! prescribed time functions, the borrowed reactor pair, and the per-face
//! surface-chemistry bindings. Rate evaluation lives in [`coupling`],
//! coverage synchronization in [`surface`], and sensitivity bookkeeping in
//! [`sensitivity`].

mod coupling;
mod error;
mod sensitivity;
mod side;
mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use coupling::CouplingRates;
pub use error::WallError;
pub use side::{PerSide, Side};
pub use surface::SurfaceMechanism;

use std::fmt;

use uom::si::{
    f64::{Area, HeatFluxDensity, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval},
    reactor::ReactorState,
    time_function::TimeFunction,
    units::{ExpansionRateCoefficient, HeatTransferCoefficient, ThermalInsulance},
};

use surface::SurfaceSite;

/// The physics variant of a wall, chosen at construction.
///
/// The variants form a closed set; each answers `vdot`, `heat_rate`, and
/// `ready` with its own rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WallKind {
    /// A compliant wall that deforms in response to the pressure imbalance
    /// between its two reactors, with an optional prescribed velocity
    /// contribution on top.
    #[default]
    Flexible,

    /// A rigid piston whose motion is fully prescribed by a velocity
    /// function; the pressure imbalance exerts no effect. Not ready until
    /// a velocity function is set.
    Piston,
}

/// A boundary coupling two reactors in a zero-dimensional network.
///
/// A `Wall` supplies two scalar coupling terms to an external time
/// integrator: the volumetric flow rate across the boundary
/// ([`vdot`](Wall::vdot), positive toward the left reactor) and the heat
/// flow rate ([`heat_rate`](Wall::heat_rate), positive from left to right).
/// Each face may additionally carry a heterogeneous surface mechanism with
/// its own coverage cache and sensitivity registry.
///
/// The wall borrows its collaborators and owns none of them; every
/// referenced reactor, mechanism, and surface phase must outlive the wall.
///
/// A freshly constructed wall is rigid and adiabatic: area, expansion rate
/// coefficient, heat transfer coefficient, and emissivity all start at
/// zero, with no time functions and no reactors bound.
pub struct Wall<'a> {
    name: String,
    kind: WallKind,
    area: Constrained<Area, NonNegative>,
    expansion_rate_coeff: Constrained<ExpansionRateCoefficient, NonNegative>,
    heat_transfer_coeff: Constrained<HeatTransferCoefficient, NonNegative>,
    emissivity: Constrained<f64, UnitInterval>,
    velocity_fn: Option<TimeFunction<Velocity>>,
    heat_flux_fn: Option<TimeFunction<HeatFluxDensity>>,
    reactors: Option<PerSide<&'a dyn ReactorState>>,
    surfaces: PerSide<Option<SurfaceSite<'a>>>,
}

impl<'a> Wall<'a> {
    /// Creates a flexible wall with neutral defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::from("wall"),
            kind: WallKind::Flexible,
            area: NonNegative::zero(),
            expansion_rate_coeff: NonNegative::zero(),
            heat_transfer_coeff: NonNegative::zero(),
            emissivity: UnitInterval::zero(),
            velocity_fn: None,
            heat_flux_fn: None,
            reactors: None,
            surfaces: PerSide::default(),
        }
    }

    /// Creates a kinematic piston wall.
    ///
    /// The piston is not [`ready`](Wall::ready) until a velocity function
    /// is set with [`set_velocity`](Wall::set_velocity).
    #[must_use]
    pub fn piston() -> Self {
        Self {
            kind: WallKind::Piston,
            ..Self::new()
        }
    }

    /// The wall's name, used to label its sensitivity parameters.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the wall.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The physics variant chosen at construction.
    #[must_use]
    pub fn kind(&self) -> WallKind {
        self.kind
    }

    /// Sets the wall contact area.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Area`] for a negative or `NaN` area; the prior
    /// area is kept.
    pub fn set_area(&mut self, area: Area) -> Result<(), WallError> {
        self.area = NonNegative::new(area).map_err(WallError::Area)?;
        Ok(())
    }

    /// The wall contact area.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area.into_inner()
    }

    /// Sets the gain relating pressure imbalance to volumetric flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::ExpansionRateCoeff`] for a negative or `NaN`
    /// coefficient; the prior value is kept.
    pub fn set_expansion_rate_coeff(
        &mut self,
        k: ExpansionRateCoefficient,
    ) -> Result<(), WallError> {
        self.expansion_rate_coeff = NonNegative::new(k).map_err(WallError::ExpansionRateCoeff)?;
        Ok(())
    }

    /// The expansion rate coefficient.
    #[must_use]
    pub fn expansion_rate_coeff(&self) -> ExpansionRateCoefficient {
        self.expansion_rate_coeff.into_inner()
    }

    /// Sets the overall heat transfer coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::HeatTransferCoeff`] for a negative or `NaN`
    /// coefficient; the prior value is kept.
    pub fn set_heat_transfer_coeff(
        &mut self,
        u: HeatTransferCoefficient,
    ) -> Result<(), WallError> {
        self.heat_transfer_coeff = NonNegative::new(u).map_err(WallError::HeatTransferCoeff)?;
        Ok(())
    }

    /// The overall heat transfer coefficient.
    #[must_use]
    pub fn heat_transfer_coeff(&self) -> HeatTransferCoefficient {
        self.heat_transfer_coeff.into_inner()
    }

    /// Sets the area-specific thermal resistance.
    ///
    /// Stores the reciprocal: this is an alternate spelling of
    /// [`set_heat_transfer_coeff`](Wall::set_heat_transfer_coeff), and the
    /// two representations stay consistent.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::ThermalResistance`] unless the resistance is
    /// strictly positive; the prior coefficient is kept.
    pub fn set_thermal_resistance(&mut self, r: ThermalInsulance) -> Result<(), WallError> {
        let r = StrictlyPositive::new(r).map_err(WallError::ThermalResistance)?;
        let u: HeatTransferCoefficient = Ratio::new::<ratio>(1.0) / r.into_inner();
        self.heat_transfer_coeff = NonNegative::new(u).map_err(WallError::HeatTransferCoeff)?;
        Ok(())
    }

    /// The area-specific thermal resistance, the reciprocal of the heat
    /// transfer coefficient.
    ///
    /// Infinite for an adiabatic wall (zero coefficient).
    #[must_use]
    pub fn thermal_resistance(&self) -> ThermalInsulance {
        Ratio::new::<ratio>(1.0) / self.heat_transfer_coeff.into_inner()
    }

    /// Sets the emissivity of the radiative coupling.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Emissivity`] unless `epsilon` lies in `[0, 1]`;
    /// the prior emissivity is kept.
    pub fn set_emissivity(&mut self, epsilon: f64) -> Result<(), WallError> {
        self.emissivity = UnitInterval::new(epsilon).map_err(WallError::Emissivity)?;
        Ok(())
    }

    /// The emissivity of the radiative coupling.
    #[must_use]
    pub fn emissivity(&self) -> f64 {
        self.emissivity.into_inner()
    }

    /// Prescribes a velocity program for the wall.
    ///
    /// For a [`WallKind::Flexible`] wall the prescribed velocity adds to
    /// the compliance term; for a [`WallKind::Piston`] it is the only
    /// source of motion.
    pub fn set_velocity(&mut self, f: TimeFunction<Velocity>) {
        self.velocity_fn = Some(f);
    }

    /// Prescribes an externally imposed heat flux program for the wall.
    pub fn set_heat_flux(&mut self, f: TimeFunction<HeatFluxDensity>) {
        self.heat_flux_fn = Some(f);
    }

    /// Installs the wall between two reactors and returns [`ready`](Wall::ready).
    ///
    /// Positive `vdot` adds volume to `left`; positive heat flows from
    /// `left` to `right`. Re-installing an already installed wall
    /// overwrites the previous binding.
    pub fn install(&mut self, left: &'a dyn ReactorState, right: &'a dyn ReactorState) -> bool {
        self.reactors = Some(PerSide::new(left, right));
        self.ready()
    }

    /// True if the wall is correctly configured and ready to evaluate.
    ///
    /// Both reactors must be installed; a [`WallKind::Piston`] additionally
    /// requires a velocity function.
    #[must_use]
    pub fn ready(&self) -> bool {
        let installed = self.reactors.is_some();
        match self.kind {
            WallKind::Flexible => installed,
            WallKind::Piston => installed && self.velocity_fn.is_some(),
        }
    }

    /// The reactor on the left of the wall, if installed.
    #[must_use]
    pub fn left(&self) -> Option<&'a dyn ReactorState> {
        self.reactors.map(|r| r[Side::Left])
    }

    /// The reactor on the right of the wall, if installed.
    #[must_use]
    pub fn right(&self) -> Option<&'a dyn ReactorState> {
        self.reactors.map(|r| r[Side::Right])
    }
}

impl Default for Wall<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Wall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wall")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ready", &self.ready())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    use crate::support::units::{heat_transfer_coefficient, thermal_insulance};

    use super::test_support::reactor;

    #[test]
    fn fresh_wall_has_neutral_defaults() {
        let wall = Wall::new();

        assert_eq!(wall.kind(), WallKind::Flexible);
        assert_relative_eq!(wall.area().get::<square_meter>(), 0.0);
        assert_relative_eq!(wall.expansion_rate_coeff().value, 0.0);
        assert_relative_eq!(wall.heat_transfer_coeff().value, 0.0);
        assert_relative_eq!(wall.emissivity(), 0.0);
        assert!(!wall.ready());
        assert!(wall.left().is_none());
        assert!(wall.right().is_none());
    }

    #[test]
    fn area_round_trips() {
        let mut wall = Wall::new();

        wall.set_area(Area::new::<square_meter>(0.75)).unwrap();
        assert_relative_eq!(wall.area().get::<square_meter>(), 0.75);

        let err = wall.set_area(Area::new::<square_meter>(-1.0)).unwrap_err();
        assert!(matches!(err, WallError::Area(_)));
        assert_relative_eq!(wall.area().get::<square_meter>(), 0.75);
    }

    #[test]
    fn emissivity_is_domain_checked_and_sticky() {
        let mut wall = Wall::new();

        for epsilon in [0.0, 0.4, 1.0] {
            wall.set_emissivity(epsilon).unwrap();
            assert_relative_eq!(wall.emissivity(), epsilon);
        }

        for epsilon in [-0.1, 1.5, f64::NAN] {
            let err = wall.set_emissivity(epsilon).unwrap_err();
            assert!(matches!(err, WallError::Emissivity(_)));
            // The last accepted value survives a rejected set.
            assert_relative_eq!(wall.emissivity(), 1.0);
        }
    }

    #[test]
    fn resistance_and_coefficient_are_reciprocal() {
        let mut wall = Wall::new();

        wall.set_heat_transfer_coeff(heat_transfer_coefficient(20.0))
            .unwrap();
        assert_relative_eq!(wall.heat_transfer_coeff().value, 20.0);
        assert_relative_eq!(wall.thermal_resistance().value, 0.05);

        wall.set_thermal_resistance(thermal_insulance(0.2)).unwrap();
        assert_relative_eq!(wall.heat_transfer_coeff().value, 5.0);

        assert!(matches!(
            wall.set_thermal_resistance(thermal_insulance(0.0)),
            Err(WallError::ThermalResistance(_))
        ));
        assert_relative_eq!(wall.heat_transfer_coeff().value, 5.0);
    }

    #[test]
    fn install_makes_the_wall_ready() {
        let a = reactor(2e5, 400.0);
        let b = reactor(1e5, 300.0);

        let mut wall = Wall::new();
        assert!(!wall.ready());

        assert!(wall.install(&a, &b));
        assert!(wall.ready());
        assert_eq!(wall.left().map(|r| r.pressure()), Some(a.pressure()));
        assert_eq!(wall.right().map(|r| r.pressure()), Some(b.pressure()));
    }

    #[test]
    fn reinstall_overwrites_the_previous_binding() {
        let a = reactor(2e5, 400.0);
        let b = reactor(1e5, 300.0);

        let mut wall = Wall::new();
        wall.install(&a, &b);
        wall.install(&b, &a);

        assert_eq!(wall.left().map(|r| r.pressure()), Some(b.pressure()));
        assert_eq!(wall.right().map(|r| r.pressure()), Some(a.pressure()));
    }

    #[test]
    fn piston_requires_a_velocity_function() {
        use uom::si::{f64::Velocity, velocity::meter_per_second};

        let a = reactor(2e5, 400.0);
        let b = reactor(1e5, 300.0);

        let mut wall = Wall::piston();
        assert_eq!(wall.kind(), WallKind::Piston);

        // Installed but still missing its motion program.
        assert!(!wall.install(&a, &b));

        wall.set_velocity(TimeFunction::constant(Velocity::new::<meter_per_second>(
            0.1,
        )));
        assert!(wall.ready());
    }
}
