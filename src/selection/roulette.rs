use tracing::debug;

use crate::error::Result;
use crate::individual::{evaluate, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling::spin;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Each of the `k`
/// draws is independent, so an individual may be selected several times.
///
/// This strategy requires all fitness values to be non-negative with a positive
/// sum. If you have negative fitness values, consider using rank selection instead.
///
/// # Examples
///
/// ```
/// use genselect::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genselect::individual::Individual;
/// use genselect::individual::IntrinsicFitness;
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// #[derive(Debug)]
/// struct Candidate {
///     score: f64,
/// }
///
/// impl Individual for Candidate {
///     fn fitness(&self) -> f64 {
///         self.score
///     }
/// }
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Candidate { score: 0.5 },
///         Candidate { score: 0.8 },
///         Candidate { score: 0.3 },
///         Candidate { score: 0.9 },
///         Candidate { score: 0.1 },
///     ];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = RouletteWheelSelection::new();
///     let winners = selection.get_winners(&population, 3, &IntrinsicFitness, &mut rng)?;
///
///     assert_eq!(winners.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<I> SelectionStrategy<I> for RouletteWheelSelection {
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

        debug!(population = population.len(), k, "roulette wheel selection");

        let weights = evaluate(population, fitness);
        let indices = spin(&weights, k, rng)?;

        Ok(indices.into_iter().map(|idx| &population[idx]).collect())
    }
}
