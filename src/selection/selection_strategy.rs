use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Fitness;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy picks a multiset of `k` winners from a population,
/// to act as parents or to survive into the next generation. Winners borrow
/// from the population and may repeat.
///
/// Every strategy shares these guarantees:
/// - an empty population or `k == 0` yields an empty vector, without
///   evaluating fitness;
/// - the population is never reordered;
/// - given the same population and a generator in the same state, the
///   winners are identical.
///
/// # Examples
///
/// ```
/// use genselect::selection::{SelectionStrategy, DeterministicTournamentSelection};
/// use genselect::individual::{Individual, IntrinsicFitness};
/// use genselect::rng::RandomNumberGenerator;
/// use genselect::error::Result;
///
/// #[derive(Debug, PartialEq)]
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
///         Candidate { score: 1.0 },
///         Candidate { score: 2.0 },
///         Candidate { score: 3.0 },
///     ];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = DeterministicTournamentSelection::new(2)?;
///     let winners = selection.get_winners(&population, 4, &IntrinsicFitness, &mut rng)?;
///
///     assert_eq!(winners.len(), 4);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<I>: Debug + Send + Sync {
    /// Selects `k` winners from `population`.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of individuals.
    /// * `k` - The number of winners to select.
    /// * `fitness` - Reads the fitness of an individual. Higher is better.
    /// * `rng` - The random source the strategy draws from.
    ///
    /// # Returns
    ///
    /// A vector of references into `population`. Its length is `k` for every
    /// strategy; `EliteSelection` documents how it allocates copies.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a proportionate strategy receives negative, non-finite or all-zero weights
    /// - the strategy's configuration is invalid (possible after deserialization)
    fn get_winners<'a, F>(
        &self,
        population: &'a [I],
        k: usize,
        fitness: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a I>>
    where
        F: Fitness<I> + ?Sized;
}
