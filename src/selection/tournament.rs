use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::individual::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Draws a uniformly random member of a population.
///
/// The population must not be empty; every caller returns early on an empty
/// population before drawing.
pub(crate) fn contestant<'a, I>(population: &'a [I], rng: &mut RandomNumberGenerator) -> &'a I {
    &population[rng.index(population.len())]
}

/// A selection strategy that selects individuals through tournament selection.
///
/// Each winner is the fittest of `size` contestants drawn uniformly at random,
/// with replacement, from the population. A tie goes to the contestant drawn
/// first. A tournament size of 1 is equivalent to random selection; larger
/// tournaments increase selection pressure.
///
/// # Examples
///
/// ```
/// use genselect::selection::{DeterministicTournamentSelection, SelectionStrategy};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let fitness = |value: &f64| *value;
///     let mut rng = RandomNumberGenerator::from_seed(4);
///
///     let selection = DeterministicTournamentSelection::new(3)?;
///     let selected = selection.get_winners(&population, 3, &fitness, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicTournamentSelection {
    size: usize,
}

impl DeterministicTournamentSelection {
    /// Creates a new tournament selection with the specified tournament size.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of contestants in each tournament. Must be at least 1.
    ///   It may exceed the population size, since contestants are drawn with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        let selection = Self { size };
        selection.validate()?;
        Ok(selection)
    }

    pub fn with_size(mut self, size: usize) -> Result<Self> {
        self.size = size;
        self.validate()?;
        Ok(self)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks the tournament size.
    pub fn validate(&self) -> Result<()> {
        if self.size < 1 {
            return Err(SelectionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Runs a single tournament and returns the winner.
    fn run_tournament<'a, I, F>(
        &self,
        population: &'a [I],
        fitness: &F,
        rng: &mut RandomNumberGenerator,
    ) -> &'a I
    where
        F: Fitness<I> + ?Sized,
    {
        let mut best = contestant(population, rng);
        let mut best_fitness = fitness.fitness(best);

        for _ in 1..self.size {
            let challenger = contestant(population, rng);
            let challenger_fitness = fitness.fitness(challenger);

            if best_fitness < challenger_fitness {
                best = challenger;
                best_fitness = challenger_fitness;
            }
        }

        best
    }
}

impl Default for DeterministicTournamentSelection {
    fn default() -> Self {
        Self { size: 2 }
    }
}

impl<I> SelectionStrategy<I> for DeterministicTournamentSelection {
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
        debug!(
            population = population.len(),
            k,
            size = self.size,
            "deterministic tournament selection"
        );

        Ok((0..k)
            .map(|_| self.run_tournament(population, fitness, rng))
            .collect())
    }
}
