//! The reactor-facing capability trait and a fixed-state reservoir.
//!
//! Walls and other network couplings never own the control volumes they
//! connect; they hold borrows of anything implementing [`ReactorState`].
//! The borrowed reactor must outlive the coupling that references it.

use uom::si::f64::{Pressure, ThermodynamicTemperature, Volume};

/// Read access to the instantaneous state of a control volume.
///
/// A coupling only ever reads through this trait; advancing the state is the
/// job of the network's time integrator. Test doubles can implement it to
/// stand in for a full reactor.
pub trait ReactorState {
    /// Returns the pressure of the reactor contents.
    fn pressure(&self) -> Pressure;

    /// Returns the temperature of the reactor contents.
    fn temperature(&self) -> ThermodynamicTemperature;

    /// Returns the volume of the reactor.
    fn volume(&self) -> Volume;
}

/// A control volume whose state never changes.
///
/// Reservoirs model boundary conditions: an infinite environment, a feed
/// tank, an exhaust plenum. Coupling a wall to a reservoir fixes the
/// pressure and temperature seen on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservoir {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    volume: Volume,
}

impl Reservoir {
    /// Creates a reservoir with the given fixed state.
    #[must_use]
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: Volume,
    ) -> Self {
        Self {
            pressure,
            temperature,
            volume,
        }
    }
}

impl ReactorState for Reservoir {
    fn pressure(&self) -> Pressure {
        self.pressure
    }

    fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    fn volume(&self) -> Volume {
        self.volume
    }
}
