use tracing::debug;

use crate::error::Result;
use crate::individual::{evaluate, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::order_best_first;
use crate::selection::sampling::spin;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals based on their rank in the population.
///
/// Rank-based selection assigns a selection probability to each individual based on its
/// rank in the population, rather than its absolute fitness value. This helps prevent
/// premature convergence when there are a few individuals with much higher fitness than
/// the rest of the population, and it handles negative fitness values.
///
/// With the population ranked best first, the individual at rank `idx` of `length`
/// gets weight `(length - (idx + 1)) / length`. The weights are spun on the same
/// roulette wheel as `RouletteWheelSelection`. The worst-ranked individual has
/// weight zero and is never selected. A population of one has only zero weights,
/// so it fails with `SelectionError::InvalidWeights`.
///
/// # Examples
///
/// ```
/// use genselect::selection::{RankSelection, SelectionStrategy};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![-3.0, 12.0, 0.5, 1e9];
///     let fitness = |value: &f64| *value;
///     let mut rng = RandomNumberGenerator::from_seed(3);
///
///     let selection = RankSelection::new();
///     let selected = selection.get_winners(&population, 50, &fitness, &mut rng)?;
///
///     assert_eq!(selected.len(), 50);
///     // -3.0 ranks last.
///     assert!(selected.iter().all(|value| **value != -3.0));
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankSelection;

impl RankSelection {
    /// Creates a new RankSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Calculates the rank weight of every individual, in population order.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of all individuals.
    ///
    /// # Returns
    ///
    /// A vector of non-negative weights. They are not normalized.
    pub fn rank_weights(fitness: &[f64]) -> Vec<f64> {
        let length = fitness.len();
        let mut weights = vec![0.0; length];

        for (rank, idx) in order_best_first(fitness).into_iter().enumerate() {
            weights[idx] = (length - (rank + 1)) as f64 / length as f64;
        }

        weights
    }
}

impl<I> SelectionStrategy<I> for RankSelection {
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

        debug!(population = population.len(), k, "rank selection");

        let weights = Self::rank_weights(&evaluate(population, fitness));
        let indices = spin(&weights, k, rng)?;

        Ok(indices.into_iter().map(|idx| &population[idx]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;

    #[derive(Debug, PartialEq)]
    struct TestIndividual {
        value: f64,
    }

    fn score(ind: &TestIndividual) -> f64 {
        ind.value
    }

    fn population(values: &[f64]) -> Vec<TestIndividual> {
        values.iter().map(|&value| TestIndividual { value }).collect()
    }

    #[test]
    fn test_rank_weights() {
        let weights = RankSelection::rank_weights(&[0.5, 0.8, 0.3, 0.9, 0.1]);

        // Ranks best first: 0.9, 0.8, 0.5, 0.3, 0.1
        assert_eq!(weights, vec![0.4, 0.6, 0.2, 0.8, 0.0]);
    }

    #[test]
    fn test_rank_selection_never_selects_worst() {
        let population = population(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RankSelection::new()
            .get_winners(&population, 1_000, &score, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 1_000);
        assert!(selected.iter().all(|ind| ind.value != 0.1));
    }

    #[test]
    fn test_rank_selection_handles_negative_fitness() {
        let population = population(&[-5.0, -1.0, -3.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RankSelection::new()
            .get_winners(&population, 20, &score, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 20);
        assert!(selected.iter().all(|ind| ind.value != -5.0));
    }

    #[test]
    fn test_rank_selection_favors_better_ranks() {
        let population = population(&[1.0, 2.0, 3.0]);
        let mut rng = RandomNumberGenerator::from_seed(9);

        let selected = RankSelection::new()
            .get_winners(&population, 6_000, &score, &mut rng)
            .unwrap();

        // Weights 2/3 and 1/3 for the best two.
        let best = selected.iter().filter(|ind| ind.value == 3.0).count();
        let second = selected.iter().filter(|ind| ind.value == 2.0).count();
        assert!(best > second);
        assert_eq!(best + second, 6_000);
    }

    #[test]
    fn test_rank_selection_single_individual_has_no_weight() {
        let population = population(&[7.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert_eq!(RankSelection::rank_weights(&[7.0]), vec![0.0]);

        let result = RankSelection::new().get_winners(&population, 3, &score, &mut rng);

        assert!(matches!(result, Err(SelectionError::InvalidWeights(_))));
    }

    #[test]
    fn test_rank_selection_leaves_population_order_untouched() {
        let values = [0.5, 0.8, 0.3];
        let population = population(&values);
        let mut rng = RandomNumberGenerator::from_seed(42);

        RankSelection::new()
            .get_winners(&population, 5, &score, &mut rng)
            .unwrap();

        let after: Vec<f64> = population.iter().map(|ind| ind.value).collect();
        assert_eq!(after, values);
    }

    #[test]
    fn test_rank_selection_empty_population() {
        let population: Vec<TestIndividual> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RankSelection::new()
            .get_winners(&population, 4, &score, &mut rng)
            .unwrap();

        assert!(selected.is_empty());
    }
}
