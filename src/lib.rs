pub mod error;
pub mod individual;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{OptionExt, Result, SelectionError};
pub use individual::{Fitness, Individual, IntrinsicFitness};
pub use rng::RandomNumberGenerator;
pub use selection::{Selection, SelectionStrategy};
