use std::cell::RefCell;

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    reactor::ReactorState,
    surface::{HeterogeneousKinetics, SurfacePhase},
};

/// A reactor double with a fixed state.
pub(crate) struct TestReactor {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    volume: Volume,
}

/// Builds a unit-volume reactor at the given pressure (Pa) and temperature (K).
pub(crate) fn reactor(pressure_pa: f64, temperature_k: f64) -> TestReactor {
    TestReactor {
        pressure: Pressure::new::<pascal>(pressure_pa),
        temperature: ThermodynamicTemperature::new::<kelvin>(temperature_k),
        volume: Volume::new::<cubic_meter>(1.0),
    }
}

impl ReactorState for TestReactor {
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

/// A surface phase double recording what the wall pushes into it.
pub(crate) struct TestSurface {
    coverages: RefCell<Vec<f64>>,
}

impl TestSurface {
    pub(crate) fn with_species(n: usize) -> Self {
        Self {
            coverages: RefCell::new(vec![0.0; n]),
        }
    }

    /// The phase's current coverage array.
    pub(crate) fn coverages(&self) -> Vec<f64> {
        self.coverages.borrow().clone()
    }
}

impl SurfacePhase for TestSurface {
    fn species_count(&self) -> usize {
        self.coverages.borrow().len()
    }

    fn set_coverages(&self, coverages: &[f64]) {
        self.coverages.borrow_mut().copy_from_slice(coverages);
    }
}

/// A kinetics double tracking only per-reaction rate multipliers.
pub(crate) struct TestKinetics {
    multipliers: RefCell<Vec<f64>>,
}

impl TestKinetics {
    /// Builds a mechanism of `n` reactions, all at the nominal multiplier 1.
    pub(crate) fn with_reactions(n: usize) -> Self {
        Self {
            multipliers: RefCell::new(vec![1.0; n]),
        }
    }
}

impl HeterogeneousKinetics for TestKinetics {
    fn n_reactions(&self) -> usize {
        self.multipliers.borrow().len()
    }

    fn multiplier(&self, reaction: usize) -> f64 {
        self.multipliers.borrow()[reaction]
    }

    fn set_multiplier(&self, reaction: usize, value: f64) {
        self.multipliers.borrow_mut()[reaction] = value;
    }

    fn reaction_equation(&self, reaction: usize) -> String {
        format!("A{reaction} + site <=> A{reaction}(ads)")
    }
}
