use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::individual::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::tournament::contestant;

/// Binary tournament in which the better contestant wins only with
/// probability `threshold`.
///
/// Each call draws one threshold from `[0.5, 1)` and shares it across all `k`
/// tournaments of that call. Each tournament draws two contestants uniformly
/// with replacement; the first drawn counts as the better one on a tie. A
/// uniform draw below the threshold picks the better contestant, otherwise
/// the worse one.
///
/// `with_threshold` pins the threshold instead, e.g. to 1.0 for a tournament
/// that always favors the better contestant.
///
/// # Examples
///
/// ```
/// use genselect::selection::{ProbabilisticTournamentSelection, SelectionStrategy};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![0.5, 0.8, 0.3];
///     let fitness = |value: &f64| *value;
///     let mut rng = RandomNumberGenerator::from_seed(12);
///
///     let selection = ProbabilisticTournamentSelection::new();
///     let selected = selection.get_winners(&population, 4, &fitness, &mut rng)?;
///     assert_eq!(selected.len(), 4);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProbabilisticTournamentSelection {
    #[cfg_attr(feature = "serde", serde(default))]
    threshold: Option<f64>,
}

impl ProbabilisticTournamentSelection {
    /// Creates a tournament that draws its threshold once per call.
    pub fn new() -> Self {
        Self { threshold: None }
    }

    /// Creates a tournament with a fixed threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not within `[0.5, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let selection = Self {
            threshold: Some(threshold),
        };
        selection.validate()?;
        Ok(selection)
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Checks the fixed threshold, if any.
    pub fn validate(&self) -> Result<()> {
        match self.threshold {
            Some(t) if !(0.5..=1.0).contains(&t) => Err(SelectionError::Configuration(format!(
                "Tournament threshold {} must be within [0.5, 1]",
                t
            ))),
            _ => Ok(()),
        }
    }

    /// Runs a single binary tournament and returns the winner.
    fn run_tournament<'a, I, F>(
        population: &'a [I],
        threshold: f64,
        fitness: &F,
        rng: &mut RandomNumberGenerator,
    ) -> &'a I
    where
        F: Fitness<I> + ?Sized,
    {
        let first = contestant(population, rng);
        let second = contestant(population, rng);

        let (best, worst) = if fitness.fitness(first) >= fitness.fitness(second) {
            (first, second)
        } else {
            (second, first)
        };

        if rng.uniform(0.0, 1.0) < threshold {
            best
        } else {
            worst
        }
    }
}

impl<I> SelectionStrategy<I> for ProbabilisticTournamentSelection {
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
        if population.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        self.validate()?;
        let threshold = match self.threshold {
            Some(t) => t,
            None => rng.uniform(0.5, 1.0),
        };
        debug!(
            population = population.len(),
            k,
            threshold,
            "probabilistic tournament selection"
        );

        Ok((0..k)
            .map(|_| Self::run_tournament(population, threshold, fitness, rng))
            .collect())
    }
}
