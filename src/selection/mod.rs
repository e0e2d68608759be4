pub mod boltzmann;
pub mod elitist;
pub mod probabilistic_tournament;
pub mod rank;
pub mod roulette;
pub mod sampling;
pub mod selection_strategy;
pub mod tournament;
pub mod universal;

use std::cmp::Ordering;

pub use boltzmann::EntropicBoltzmannSelection;
pub use elitist::EliteSelection;
pub use probabilistic_tournament::ProbabilisticTournamentSelection;
pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::DeterministicTournamentSelection;
pub use universal::UniversalSelection;

use crate::error::{Result, SelectionError};
use crate::individual::Fitness;
use crate::rng::RandomNumberGenerator;

/// Converts a signed winner count into the `usize` the strategies take.
///
/// # Errors
///
/// Returns `SelectionError::InvalidArgument` if `k` is negative.
pub fn winners_count(k: i64) -> Result<usize> {
    usize::try_from(k).map_err(|_| {
        SelectionError::InvalidArgument(format!("cannot select {} winners", k))
    })
}

/// Indices of `scores` ordered best first. Ties keep their original order;
/// NaN scores go last.
pub(crate) fn order_best_first(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        let (fa, fb) = (scores[a], scores[b]);
        match (fa.is_nan(), fb.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => fb.partial_cmp(&fa).unwrap_or(Ordering::Equal),
        }
    });
    indices
}

/// Every selection strategy as one closed set.
///
/// Lets a driver pick its policy at runtime, or load it from configuration
/// with the `serde` feature:
///
/// ```json
/// { "type": "deterministic_tournament", "size": 3 }
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Elite(EliteSelection),
    RouletteWheel(RouletteWheelSelection),
    Universal(UniversalSelection),
    Rank(RankSelection),
    EntropicBoltzmann(EntropicBoltzmannSelection),
    DeterministicTournament(DeterministicTournamentSelection),
    ProbabilisticTournament(ProbabilisticTournamentSelection),
}

impl Selection {
    pub fn name(&self) -> &'static str {
        match self {
            Selection::Elite(_) => "elite",
            Selection::RouletteWheel(_) => "roulette_wheel",
            Selection::Universal(_) => "universal",
            Selection::Rank(_) => "rank",
            Selection::EntropicBoltzmann(_) => "entropic_boltzmann",
            Selection::DeterministicTournament(_) => "deterministic_tournament",
            Selection::ProbabilisticTournament(_) => "probabilistic_tournament",
        }
    }

    /// Re-applies the constructor checks. Useful after deserialization,
    /// which bypasses the constructors.
    pub fn validate(&self) -> Result<()> {
        match self {
            Selection::EntropicBoltzmann(s) => s.validate(),
            Selection::DeterministicTournament(s) => s.validate(),
            Selection::ProbabilisticTournament(s) => s.validate(),
            Selection::Elite(_)
            | Selection::RouletteWheel(_)
            | Selection::Universal(_)
            | Selection::Rank(_) => Ok(()),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::DeterministicTournament(DeterministicTournamentSelection::default())
    }
}

impl<I> SelectionStrategy<I> for Selection {
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
        match self {
            Selection::Elite(s) => s.get_winners(population, k, fitness, rng),
            Selection::RouletteWheel(s) => s.get_winners(population, k, fitness, rng),
            Selection::Universal(s) => s.get_winners(population, k, fitness, rng),
            Selection::Rank(s) => s.get_winners(population, k, fitness, rng),
            Selection::EntropicBoltzmann(s) => s.get_winners(population, k, fitness, rng),
            Selection::DeterministicTournament(s) => s.get_winners(population, k, fitness, rng),
            Selection::ProbabilisticTournament(s) => s.get_winners(population, k, fitness, rng),
        }
    }
}

macro_rules! impl_from_strategy {
    ($($strategy:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$strategy> for Selection {
                fn from(strategy: $strategy) -> Self {
                    Selection::$variant(strategy)
                }
            }
        )*
    };
}

impl_from_strategy! {
    EliteSelection => Elite,
    RouletteWheelSelection => RouletteWheel,
    UniversalSelection => Universal,
    RankSelection => Rank,
    EntropicBoltzmannSelection => EntropicBoltzmann,
    DeterministicTournamentSelection => DeterministicTournament,
    ProbabilisticTournamentSelection => ProbabilisticTournament,
}
