use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::individual::{evaluate, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling::spin;
use crate::selection::selection_strategy::SelectionStrategy;

/// Temperature of the cooling schedule `tc + (t0 - tc) * exp(-rate * t)`.
///
/// Starts at `t0` for `t = 0` and decays towards the floor `tc`.
pub fn temperature(t0: f64, tc: f64, rate: f64, t: f64) -> f64 {
    tc + (t0 - tc) * (-rate * t).exp()
}

/// Boltzmann factor of `fitness` at `temp`, relative to the population's
/// average factor `avg`.
pub fn expected_value(fitness: f64, temp: f64, avg: f64) -> f64 {
    (fitness / temp).exp() / avg
}

/// Boltzmann selection with an annealed temperature.
///
/// Each individual is weighted by `exp(fitness / temp)` divided by the
/// population average of that factor, and the weights are spun on the
/// roulette wheel. A high temperature flattens the weights towards uniform
/// choice; as the temperature cools towards its floor, selection
/// concentrates on the fittest.
///
/// The temperature follows [`temperature`] with the parameters given at
/// construction. `get_winners` uses the requested winner count `k` as the
/// schedule's time. Use [`EntropicBoltzmannSelection::get_winners_at`] to
/// drive the schedule with another clock, such as a generation index.
///
/// Large `fitness / temp` ratios overflow `exp`; the call then fails with
/// `SelectionError::InvalidNumericValue`.
///
/// # Examples
///
/// ```
/// use genselect::selection::EntropicBoltzmannSelection;
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![1.0, 2.0, 3.0];
///     let fitness = |value: &f64| *value;
///     let mut rng = RandomNumberGenerator::from_seed(5);
///
///     let selection = EntropicBoltzmannSelection::new(100.0, 0.5, 0.1)?;
///     assert_eq!(selection.temperature(0.0), 100.0);
///
///     // Late in the schedule selection is nearly greedy.
///     let winners = selection.get_winners_at(&population, 10, 1_000.0, &fitness, &mut rng)?;
///     assert_eq!(winners.len(), 10);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropicBoltzmannSelection {
    initial_temperature: f64,
    floor_temperature: f64,
    cooling_rate: f64,
}

impl EntropicBoltzmannSelection {
    /// Creates a new Boltzmann selection with the given cooling schedule.
    ///
    /// # Arguments
    ///
    /// * `initial_temperature` - Temperature at time 0.
    /// * `floor_temperature` - Temperature the schedule decays towards.
    /// * `cooling_rate` - Exponential decay rate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any parameter is not finite
    /// - `initial_temperature` is not positive
    /// - `floor_temperature` is negative
    /// - `cooling_rate` is negative
    ///
    /// The floor may be zero, which gives the plain `t0 * exp(-rate * t)`
    /// schedule, and it may lie above the initial temperature.
    pub fn new(initial_temperature: f64, floor_temperature: f64, cooling_rate: f64) -> Result<Self> {
        let selection = Self {
            initial_temperature,
            floor_temperature,
            cooling_rate,
        };
        selection.validate()?;
        Ok(selection)
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn floor_temperature(&self) -> f64 {
        self.floor_temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// Checks the cooling schedule parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite()
            && self.floor_temperature.is_finite()
            && self.cooling_rate.is_finite())
        {
            return Err(SelectionError::Configuration(
                "Boltzmann temperatures and cooling rate must be finite".to_string(),
            ));
        }
        if self.initial_temperature <= 0.0 {
            return Err(SelectionError::Configuration(
                "Initial temperature must be positive".to_string(),
            ));
        }
        if self.floor_temperature < 0.0 {
            return Err(SelectionError::Configuration(
                "Floor temperature must not be negative".to_string(),
            ));
        }
        if self.cooling_rate < 0.0 {
            return Err(SelectionError::Configuration(
                "Cooling rate must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Temperature of this schedule at time `t`.
    pub fn temperature(&self, t: f64) -> f64 {
        temperature(
            self.initial_temperature,
            self.floor_temperature,
            self.cooling_rate,
            t,
        )
    }

    /// Boltzmann weights of `fitness` at `temp`, normalized to average 1.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidNumericValue` if the factors overflow
    /// or are otherwise not finite.
    pub fn boltzmann_weights(fitness: &[f64], temp: f64) -> Result<Vec<f64>> {
        let pseudo: Vec<f64> = fitness.iter().map(|f| (f / temp).exp()).collect();
        let avg = pseudo.iter().sum::<f64>() / pseudo.len() as f64;

        if !(avg.is_finite() && avg > 0.0) {
            return Err(SelectionError::InvalidNumericValue(format!(
                "average Boltzmann factor {} at temperature {} is unusable",
                avg, temp
            )));
        }

        Ok(fitness
            .iter()
            .map(|&f| expected_value(f, temp, avg))
            .collect())
    }

    /// Selects `k` winners with the schedule evaluated at `time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the temperature at
    /// `time` is not positive, or the Boltzmann weights cannot be computed.
    pub fn get_winners_at<'a, I, F>(
        &self,
        population: &'a [I],
        k: usize,
        time: f64,
        fitness: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a I>>
    where
        F: Fitness<I> + ?Sized,
    {
        if population.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        self.validate()?;

        let temp = self.temperature(time);
        if !(temp.is_finite() && temp > 0.0) {
            return Err(SelectionError::InvalidNumericValue(format!(
                "temperature {} at time {} is not positive",
                temp, time
            )));
        }
        debug!(
            population = population.len(),
            k,
            time,
            temperature = temp,
            "boltzmann selection"
        );

        let weights = Self::boltzmann_weights(&evaluate(population, fitness), temp)?;
        let indices = spin(&weights, k, rng)?;

        Ok(indices.into_iter().map(|idx| &population[idx]).collect())
    }
}

impl<I> SelectionStrategy<I> for EntropicBoltzmannSelection {
    fn get_winners<'a, F>(
        &self,
        population: &'a [I],
        k: usize,
        fitness: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a I>>
    where
        F: Fitness<I> + ?Sized,
    {
        self.get_winners_at(population, k, k as f64, fitness, rng)
    }
}
