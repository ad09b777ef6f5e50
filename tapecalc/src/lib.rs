//! Synthesizes labeled addition episodes for training sequence models.
//!
//! An episode shows, action by action, how multi-digit addition is carried out
//! by moving cursors over an input tape, an output tape and a four-row scratch
//! pad. The [`ActionTrace`] of an [`Episode`] is the supervision target.
//!
//! ```
//! use tapecalc::SumProblemGenerator;
//!
//! let mut generator = SumProblemGenerator::default();
//! let episode = generator.generate_sum("712", "378").unwrap();
//! assert_eq!(episode.output_digits(), "1090");
//! ```

mod action;
mod config;
mod execution;
mod memory;
pub mod operand;
pub mod stats;
pub mod util;

pub use action::Action;
pub use config::{GeneratorConfig, DEFAULT_MAX_DIGITS, DEFAULT_TAPE_LEN};
pub use execution::{ActionTrace, Episode, GeneratorError, SumProblemGenerator};
pub use memory::{MemoryError, Region, Row, ScratchPad, Tape, TapeKind, BLANK};
pub use operand::{OperandError, OperandSource, RandomOperands};
pub use stats::ActionStats;
pub use util::{init_logger, LoggerGuard};
