use tracing::debug;

use crate::error::Result;
use crate::individual::{evaluate, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::order_best_first;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that allocates copies by fitness rank.
///
/// The population is ranked best first. The individual at rank `i` of
/// `length` receives `ceil((k - i) / length)` copies, or none when that is
/// not positive. For `k <= length` this is a plain top-`k` cut; for larger
/// `k` the quota wraps around, so every individual gets `k / length` copies
/// and the best `k % length` get one more. Winners come out in rank order,
/// each individual's copies adjacent.
///
/// Ties keep population order. NaN fitness ranks last. The population
/// itself is not reordered.
///
/// # Examples
///
/// ```
/// use genselect::selection::{EliteSelection, SelectionStrategy};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![("a", 3.0), ("b", 1.0), ("c", 2.0)];
///     let fitness = |ind: &(&'static str, f64)| ind.1;
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = EliteSelection::new();
///     let winners = selection.get_winners(&population, 5, &fitness, &mut rng)?;
///
///     let names: Vec<&str> = winners.iter().map(|ind| ind.0).collect();
///     assert_eq!(names, vec!["a", "a", "c", "c", "b"]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliteSelection;

impl EliteSelection {
    /// Creates a new EliteSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Number of copies allocated to rank `rank` out of `length` when `k`
    /// winners are requested: `ceil((k - rank) / length)`, floored at zero.
    pub fn quota(rank: usize, length: usize, k: usize) -> usize {
        if length == 0 || k <= rank {
            return 0;
        }
        (k - rank).div_ceil(length)
    }
}

impl<I> SelectionStrategy<I> for EliteSelection {
    fn get_winners<'a, F>(
        &self,
        population: &'a [I],
        k: usize,
        fitness: &F,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a I>>
    where
        F: Fitness<I> + ?Sized,
    {
        if population.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let length = population.len();
        debug!(population = length, k, "elite selection");

        let scores = evaluate(population, fitness);
        let mut winners = Vec::with_capacity(k);

        for (rank, idx) in order_best_first(&scores).into_iter().enumerate() {
            let copies = Self::quota(rank, length, k);
            if copies == 0 {
                // Quotas only shrink with rank.
                break;
            }
            winners.extend(std::iter::repeat(&population[idx]).take(copies));
        }

        Ok(winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TestIndividual {
        name: &'static str,
        value: f64,
    }

    fn score(ind: &TestIndividual) -> f64 {
        ind.value
    }

    fn names(winners: &[&TestIndividual]) -> Vec<&'static str> {
        winners.iter().map(|ind| ind.name).collect()
    }

    fn abc() -> Vec<TestIndividual> {
        vec![
            TestIndividual { name: "C", value: 1.0 },
            TestIndividual { name: "A", value: 3.0 },
            TestIndividual { name: "B", value: 2.0 },
        ]
    }

    #[test]
    fn test_elite_one_copy_each_when_k_equals_length() {
        let population = abc();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let winners = EliteSelection::new()
            .get_winners(&population, 3, &score, &mut rng)
            .unwrap();

        assert_eq!(names(&winners), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_elite_top_cut_when_k_below_length() {
        let population = abc();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let winners = EliteSelection::new()
            .get_winners(&population, 2, &score, &mut rng)
            .unwrap();

        assert_eq!(names(&winners), vec!["A", "B"]);
    }

    #[test]
    fn test_elite_wraps_quota_when_k_exceeds_length() {
        let population = abc();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let winners = EliteSelection::new()
            .get_winners(&population, 7, &score, &mut rng)
            .unwrap();

        assert_eq!(names(&winners), vec!["A", "A", "A", "B", "B", "C", "C"]);
    }

    #[test]
    fn test_elite_total_matches_k() {
        let population: Vec<TestIndividual> = (0..7)
            .map(|i| TestIndividual {
                name: "x",
                value: i as f64,
            })
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for k in 0..40 {
            let winners = EliteSelection::new()
                .get_winners(&population, k, &score, &mut rng)
                .unwrap();
            assert_eq!(winners.len(), k);
        }
    }

    #[test]
    fn test_elite_ties_keep_population_order() {
        let population = vec![
            TestIndividual { name: "first", value: 1.0 },
            TestIndividual { name: "second", value: 1.0 },
            TestIndividual { name: "best", value: 5.0 },
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let winners = EliteSelection::new()
            .get_winners(&population, 3, &score, &mut rng)
            .unwrap();

        assert_eq!(names(&winners), vec!["best", "first", "second"]);
    }

    #[test]
    fn test_elite_nan_ranks_last() {
        let population = vec![
            TestIndividual { name: "nan", value: f64::NAN },
            TestIndividual { name: "low", value: -1.0 },
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let winners = EliteSelection::new()
            .get_winners(&population, 1, &score, &mut rng)
            .unwrap();

        assert_eq!(names(&winners), vec!["low"]);
    }

    #[test]
    fn test_elite_leaves_population_order_untouched() {
        let population = abc();
        let mut rng = RandomNumberGenerator::from_seed(42);

        EliteSelection::new()
            .get_winners(&population, 3, &score, &mut rng)
            .unwrap();

        assert_eq!(population, abc());
    }

    #[test]
    fn test_elite_empty_population() {
        let population: Vec<TestIndividual> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        let winners = EliteSelection::new()
            .get_winners(&population, 3, &score, &mut rng)
            .unwrap();

        assert!(winners.is_empty());
    }

    #[test]
    fn test_quota() {
        assert_eq!(EliteSelection::quota(0, 3, 3), 1);
        assert_eq!(EliteSelection::quota(2, 3, 3), 1);
        assert_eq!(EliteSelection::quota(3, 3, 3), 0);
        assert_eq!(EliteSelection::quota(0, 3, 7), 3);
        assert_eq!(EliteSelection::quota(2, 3, 7), 2);
        assert_eq!(EliteSelection::quota(0, 0, 7), 0);
    }
}
