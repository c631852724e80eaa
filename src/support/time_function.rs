//! Prescribed scalar programs over simulated time.

use std::fmt;

use uom::si::f64::Time;

/// An opaque pure function of simulated time returning a typed quantity.
///
/// Used to impose externally prescribed forcing on a coupling, such as a
/// piston velocity profile or a heat flux schedule. Evaluation carries no
/// internal state: calling [`eval`](Self::eval) twice with the same time
/// yields the same value.
///
/// # Example
///
/// ```
/// use reactornet_models::support::time_function::TimeFunction;
/// use uom::si::{f64::{Time, Velocity}, time::second, velocity::meter_per_second};
///
/// let ramp = TimeFunction::new(|t: Time| {
///     Velocity::new::<meter_per_second>(0.1 * t.get::<second>())
/// });
/// let v = ramp.eval(Time::new::<second>(2.0));
/// assert_eq!(v, Velocity::new::<meter_per_second>(0.2));
/// ```
pub struct TimeFunction<Q> {
    f: Box<dyn Fn(Time) -> Q>,
}

impl<Q> TimeFunction<Q> {
    /// Wraps a pure function of time.
    pub fn new(f: impl Fn(Time) -> Q + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    /// A function that returns the same value at every time.
    pub fn constant(value: Q) -> Self
    where
        Q: Copy + 'static,
    {
        Self::new(move |_| value)
    }

    /// Evaluates the function at time `t`.
    #[must_use]
    pub fn eval(&self, t: Time) -> Q {
        (self.f)(t)
    }
}

impl<Q> fmt::Debug for TimeFunction<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeFunction").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter, time::second,
    };

    #[test]
    fn constant_ignores_time() {
        let q0 = TimeFunction::constant(HeatFluxDensity::new::<watt_per_square_meter>(750.0));

        for t in [0.0, 1.0, 1e6] {
            assert_relative_eq!(
                q0.eval(Time::new::<second>(t))
                    .get::<watt_per_square_meter>(),
                750.0
            );
        }
    }

    #[test]
    fn closures_see_the_passed_time() {
        let pulse = TimeFunction::new(|t: Time| {
            if t.get::<second>() < 1.0 {
                HeatFluxDensity::new::<watt_per_square_meter>(100.0)
            } else {
                HeatFluxDensity::new::<watt_per_square_meter>(0.0)
            }
        });

        assert_relative_eq!(
            pulse
                .eval(Time::new::<second>(0.5))
                .get::<watt_per_square_meter>(),
            100.0
        );
        assert_relative_eq!(
            pulse
                .eval(Time::new::<second>(2.0))
                .get::<watt_per_square_meter>(),
            0.0
        );
    }
}
