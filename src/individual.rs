//! # Individual and Fitness
//!
//! Selection only needs to read one scalar from each member of a population.
//! Two forms of that accessor are supported:
//!
//! - the `Individual` trait, for types that know their own fitness, and
//! - the `Fitness` trait, for an accessor injected at the call site. Every
//!   closure `Fn(&I) -> f64` is a `Fitness<I>`.
//!
//! `IntrinsicFitness` bridges the two, so the method form can be passed
//! wherever an accessor is expected.
//!
//! ## Example
//!
//! ```rust
//! use genselect::individual::{Fitness, Individual, IntrinsicFitness};
//!
//! #[derive(Debug)]
//! struct Route {
//!     length: f64,
//! }
//!
//! impl Individual for Route {
//!     fn fitness(&self) -> f64 {
//!         1.0 / self.length
//!     }
//! }
//!
//! let route = Route { length: 4.0 };
//! assert_eq!(IntrinsicFitness.fitness(&route), 0.25);
//!
//! // The same individual scored by an injected accessor.
//! let by_length = |r: &Route| -r.length;
//! assert_eq!(by_length.fitness(&route), -4.0);
//! ```

/// Types that report their own fitness.
///
/// Higher is better. The value must not change for the duration of a single
/// selection call.
pub trait Individual {
    fn fitness(&self) -> f64;
}

/// An accessor from an individual to its fitness.
///
/// Implementations must be pure for the duration of a selection call; a
/// strategy may invoke the accessor any number of times per individual.
pub trait Fitness<I: ?Sized> {
    fn fitness(&self, individual: &I) -> f64;
}

impl<I, F> Fitness<I> for F
where
    I: ?Sized,
    F: Fn(&I) -> f64,
{
    fn fitness(&self, individual: &I) -> f64 {
        self(individual)
    }
}

/// Reads fitness through `Individual::fitness`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntrinsicFitness;

impl<I> Fitness<I> for IntrinsicFitness
where
    I: Individual + ?Sized,
{
    fn fitness(&self, individual: &I) -> f64 {
        Individual::fitness(individual)
    }
}

/// Evaluates `fitness` once for every member of `population`, in order.
pub(crate) fn evaluate<I, F>(population: &[I], fitness: &F) -> Vec<f64>
where
    F: Fitness<I> + ?Sized,
{
    population.iter().map(|ind| fitness.fitness(ind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Scored(f64);

    impl Individual for Scored {
        fn fitness(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_intrinsic_fitness_forwards() {
        assert_eq!(IntrinsicFitness.fitness(&Scored(1.5)), 1.5);
    }

    #[test]
    fn test_closure_is_fitness() {
        let doubled = |s: &Scored| s.0 * 2.0;
        assert_eq!(doubled.fitness(&Scored(1.5)), 3.0);
    }

    #[test]
    fn test_evaluate_calls_once_per_individual() {
        let calls = Cell::new(0);
        let counting = |s: &Scored| {
            calls.set(calls.get() + 1);
            s.0
        };
        let population = vec![Scored(1.0), Scored(2.0), Scored(3.0)];

        let scores = evaluate(&population, &counting);

        assert_eq!(scores, vec![1.0, 2.0, 3.0]);
        assert_eq!(calls.get(), 3);
    }
}
