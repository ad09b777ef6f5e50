mod episode;
mod generator;
mod trace;

pub use episode::Episode;
pub use generator::{GeneratorError, SumProblemGenerator};
pub use trace::ActionTrace;
