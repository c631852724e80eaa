use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] deliberately forbids subtracting two [`ThermodynamicTemperature`]
/// values directly, since an absolute temperature and a temperature change
/// are different kinds of quantity. This trait provides the missing
/// [`minus`](Self::minus) operation, returning a [`TemperatureInterval`]
/// that participates in ordinary quantity arithmetic (e.g., `U * A * ΔT`).
///
/// For background: [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn signed_differences() {
        let hot = ThermodynamicTemperature::new::<abs_kelvin>(550.0);
        let cold = ThermodynamicTemperature::new::<abs_kelvin>(300.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_kelvin>(), 250.0);
        assert_relative_eq!(cold.minus(hot).get::<delta_kelvin>(), -250.0);
        assert_relative_eq!(hot.minus(hot).get::<delta_kelvin>(), 0.0);
    }
}
