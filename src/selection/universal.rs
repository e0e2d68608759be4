use tracing::debug;

use crate::error::Result;
use crate::individual::{evaluate, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::sampling::spin_universal;
use crate::selection::selection_strategy::SelectionStrategy;

/// Stochastic universal sampling.
///
/// Uses the same fitness-proportionate weights as roulette wheel selection,
/// but spins once: a single offset `r` places `k` evenly spaced pointers at
/// `(r + i) / k`. An individual with relative fitness `p` is selected either
/// `floor(k * p)` or `ceil(k * p)` times, which removes most of the spread of
/// `k` independent spins.
///
/// Winners come out in population order. Fitness values must be
/// non-negative with a positive sum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniversalSelection;

impl UniversalSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<I> SelectionStrategy<I> for UniversalSelection {
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

        debug!(population = population.len(), k, "universal selection");

        let weights = evaluate(population, fitness);
        let indices = spin_universal(&weights, k, rng)?;

        Ok(indices.into_iter().map(|idx| &population[idx]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;

    fn score(value: &f64) -> f64 {
        *value
    }

    #[test]
    fn test_universal_selection_equal_fitness_is_exact() {
        let population = vec![1.0; 4];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = UniversalSelection::new()
            .get_winners(&population, 8, &score, &mut rng)
            .unwrap();

        // Equal weights and k a multiple of n: every individual exactly twice.
        for member in &population {
            let count = selected.iter().filter(|w| std::ptr::eq(**w, member)).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_universal_selection_single_dominant_individual() {
        let population = vec![0.0, 5.0, 0.0];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selected = UniversalSelection::new()
            .get_winners(&population, 6, &score, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 6);
        assert!(selected.iter().all(|w| std::ptr::eq(*w, &population[1])));
    }

    #[test]
    fn test_universal_selection_rejects_negative_fitness() {
        let population = vec![1.0, -1.0];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = UniversalSelection::new().get_winners(&population, 2, &score, &mut rng);

        assert!(matches!(result, Err(SelectionError::InvalidWeights(_))));
    }

    #[test]
    fn test_universal_selection_empty_population() {
        let population: Vec<f64> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = UniversalSelection::new()
            .get_winners(&population, 2, &score, &mut rng)
            .unwrap();

        assert!(result.is_empty());
    }
}
