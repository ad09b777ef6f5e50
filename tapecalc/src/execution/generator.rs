//! The addition episode generator.
//!
//! An episode is built by a fixed, linear sequence of phases:
//!
//! 1. reset every memory region and the trace;
//! 2. render `"<lhs> + <rhs>"` onto the input tape;
//! 3. scan the input tape to its last character and back;
//! 4. stage both operands, right-aligned, on the scratch pad;
//! 5. add column by column, right to left, propagating the carry;
//! 6. copy the result row onto the output tape.
//!
//! Every cursor step and every write made along the way is recorded in the
//! [`ActionTrace`].

use strum::EnumCount;
use thiserror::Error;
use tracing::{debug, instrument, trace};

use super::{ActionTrace, Episode};
use crate::{
    memory::{MemoryError, Region, Row, ScratchPad, Tape, TapeKind},
    operand::{validate_operand, OperandError, OperandSource},
    Action, GeneratorConfig,
};

/// Separator rendered between the operands on the input tape.
const PLUS: &str = " + ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error("malformed operand {operand:?}: {reason}")]
    MalformedOperand {
        operand: String,
        reason: OperandError,
    },
}

impl GeneratorError {
    /// Whether the rendered problem did not fit on the input tape.
    ///
    /// Freshly drawn operands may still fit, so callers drawing at random can
    /// discard the attempt and draw again.
    pub const fn is_input_overflow(&self) -> bool {
        matches!(
            self,
            Self::Memory(MemoryError::OutOfBounds {
                region: Region::Input,
                ..
            })
        )
    }
}

/// Owns the working memory for one problem at a time and turns operand pairs
/// into [`Episode`]s.
///
/// A generator can be reused for any number of problems; each call starts
/// from a full reset. Independent generators share no state.
#[derive(Debug, Clone)]
pub struct SumProblemGenerator {
    config: GeneratorConfig,
    input: Tape,
    output: Tape,
    scratch: ScratchPad,
    trace: ActionTrace,
}

impl Default for SumProblemGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl SumProblemGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            input: Tape::new(TapeKind::Input, config.tape_len),
            output: Tape::new(TapeKind::Output, config.tape_len),
            scratch: ScratchPad::new(Row::COUNT, config.tape_len),
            trace: ActionTrace::new(),
        }
    }

    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Clears all tapes, the scratch pad and the trace, and returns every
    /// cursor to its origin.
    pub fn reset(&mut self) {
        self.input.reset();
        self.output.reset();
        self.scratch.reset();
        self.trace.clear();
    }

    /// Generates the episode for `lhs + rhs`.
    #[instrument(level = "debug", skip(self))]
    pub fn generate_sum(&mut self, lhs: &str, rhs: &str) -> Result<Episode, GeneratorError> {
        self.reset();

        let rendered_len = self.render(lhs, rhs)?;
        self.scan(rendered_len)?;

        let n = lhs.len().max(rhs.len());
        trace!(n, "staging operands");
        self.stage_operand(0, lhs.len(), n - lhs.len() + 1, Row::LeftOperand)?;
        self.stage_operand(
            lhs.len() + PLUS.len(),
            rhs.len(),
            n - rhs.len() + 1,
            Row::RightOperand,
        )?;

        let n_out = self.add_with_carry(n)?;
        self.emit_output(n + 1 - n_out, n_out)?;

        debug!(actions = self.trace.len(), n_out, "episode generated");
        Ok(self.snapshot(lhs, rhs))
    }

    /// Generates an episode, drawing any operand that is not given from
    /// `source`.
    pub fn generate_sum_with<S: OperandSource + ?Sized>(
        &mut self,
        lhs: Option<&str>,
        rhs: Option<&str>,
        source: &mut S,
    ) -> Result<Episode, GeneratorError> {
        let max_digits = self.config.max_digits;
        let lhs = lhs.map_or_else(|| source.next_operand(max_digits), str::to_string);
        let rhs = rhs.map_or_else(|| source.next_operand(max_digits), str::to_string);
        self.generate_sum(&lhs, &rhs)
    }

    /// Generates an episode with both operands drawn from `source`.
    pub fn generate_random<S: OperandSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Episode, GeneratorError> {
        self.generate_sum_with(None, None, source)
    }

    /// Writes `"{lhs} + {rhs}"` onto the input tape and returns its length.
    fn render(&mut self, lhs: &str, rhs: &str) -> Result<usize, GeneratorError> {
        for operand in [lhs, rhs] {
            validate_operand(operand).map_err(|reason| GeneratorError::MalformedOperand {
                operand: operand.to_string(),
                reason,
            })?;
        }

        let expression = format!("{lhs}{PLUS}{rhs}");
        self.input.write_string(&expression)?;
        trace!(%expression, "rendered input");
        Ok(expression.len())
    }

    /// Walks the input cursor to the last rendered character and back.
    fn scan(&mut self, rendered_len: usize) -> Result<(), MemoryError> {
        self.input.move_cursor_to(rendered_len - 1, &mut self.trace)?;
        self.input.move_cursor_to(0, &mut self.trace)
    }

    /// Copies `len` characters starting at input position `src` into `row`,
    /// starting at column `dst`.
    fn stage_operand(
        &mut self,
        src: usize,
        len: usize,
        dst: usize,
        row: Row,
    ) -> Result<(), MemoryError> {
        for i in 0..len {
            self.input.move_cursor_to(src + i, &mut self.trace)?;
            self.scratch.move_cursor_to(dst + i, row.index(), &mut self.trace)?;
            let c = self.input.read_at(src + i)?;
            let action = Action::pass_through(c, Region::Input, src + i, 0)?;
            self.scratch.write(c);
            self.trace.push(action);
        }
        Ok(())
    }

    /// Adds the staged operands column by column, right to left, and returns
    /// the length of the result.
    fn add_with_carry(&mut self, n: usize) -> Result<usize, MemoryError> {
        let mut carry = 0;
        for col in (1..=n).rev() {
            self.set_digit(col, Row::Carry, carry)?;
            let left = self.get_digit(col, Row::LeftOperand)?;
            let right = self.get_digit(col, Row::RightOperand)?;

            let sum = left + right + carry;
            let digit = if sum >= 10 {
                carry = 1;
                sum - 10
            } else {
                carry = 0;
                sum
            };
            trace!(col, left, right, digit, carry, "added column");
            self.set_digit(col, Row::Result, digit)?;
        }

        if carry == 1 {
            self.set_digit(0, Row::Carry, carry)?;
            self.set_digit(0, Row::Result, carry)?;
            Ok(n + 1)
        } else {
            Ok(n)
        }
    }

    /// Copies `n_out` result cells, starting at scratch column `x`, onto the
    /// output tape from position 0.
    fn emit_output(&mut self, x: usize, n_out: usize) -> Result<(), MemoryError> {
        for i in 0..n_out {
            self.output.move_cursor_to(i, &mut self.trace)?;
            let c = self.scratch.load(x + i, Row::Result.index(), &mut self.trace)?;
            self.output.write(c)?;
            self.trace.push(Action::CopyToOutput);
        }
        Ok(())
    }

    fn set_digit(&mut self, x: usize, row: Row, digit: u8) -> Result<(), MemoryError> {
        self.scratch.set_digit(x, row.index(), digit, &mut self.trace)
    }

    fn get_digit(&mut self, x: usize, row: Row) -> Result<u8, MemoryError> {
        self.scratch.get_digit(x, row.index(), &mut self.trace)
    }

    fn snapshot(&self, lhs: &str, rhs: &str) -> Episode {
        Episode {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            input: self.input.cells().to_vec(),
            output: self.output.cells().to_vec(),
            scratch: self.scratch.iter_rows().map(<[u8]>::to_vec).collect(),
            input_cursor: self.input.cursor(),
            output_cursor: self.output.cursor(),
            scratch_cursor: self.scratch.cursor(),
            trace: self.trace.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::RandomOperands;

    fn padded(s: &str, len: usize) -> Vec<u8> {
        format!("{s:<len$}").into_bytes()
    }

    #[test]
    fn test_712_plus_378() {
        let mut generator = SumProblemGenerator::default();
        let episode = generator.generate_sum("712", "378").unwrap();

        assert_eq!(episode.input(), padded("712 + 378", 16));
        assert_eq!(episode.output(), padded("1090", 16));
        assert_eq!(episode.scratch_row(Row::Carry), padded("1010", 16));
        assert_eq!(episode.scratch_row(Row::LeftOperand), padded(" 712", 16));
        assert_eq!(episode.scratch_row(Row::RightOperand), padded(" 378", 16));
        assert_eq!(episode.scratch_row(Row::Result), padded("1090", 16));
        assert_eq!(episode.result_value(), Some(1090));

        assert_eq!(episode.input_cursor(), 8);
        assert_eq!(episode.output_cursor(), 3);
        assert_eq!(episode.scratch_cursor(), (3, 3));

        let expected = [
            "IR IR IR IR IR IR IR IR IL IL IL IL IL IL IL IL",
            // stage lhs
            "R D 7 IR R 1 IR R 2",
            // stage rhs
            "IR IR IR IR L L D 3 IR R 7 IR R 8",
            // units, tens, hundreds
            "U U 0 D D D 0",
            "L U U U 1 D D D 9",
            "L U U U 0 D D D 0",
            // final carry
            "L U U U 1 D D D 1",
            // emit
            "C OR R C OR R C OR R C",
        ]
        .join(" ");
        assert_eq!(episode.trace().to_string(), expected);
    }

    #[test]
    fn test_single_digit_carry() {
        let mut generator = SumProblemGenerator::default();
        let episode = generator.generate_sum("9", "1").unwrap();

        assert_eq!(episode.output_digits(), "10");
        assert_eq!(episode.scratch_row(Row::Result), padded("10", 16));
        assert_eq!(
            episode.trace().to_string(),
            "IR IR IR IR IL IL IL IL R D 9 IR IR IR IR D 1 U U 0 D D D 0 L U U U 1 D D D 1 C OR R C"
        );
    }

    #[test]
    fn test_zero_plus_zero() {
        let mut generator = SumProblemGenerator::default();
        let episode = generator.generate_sum("0", "0").unwrap();

        assert_eq!(episode.output(), padded("0", 16));
        assert_eq!(episode.scratch_row(Row::Carry), padded(" 0", 16));
        assert_eq!(episode.scratch_row(Row::Result), padded(" 0", 16));
        assert_eq!(
            episode.trace().to_string(),
            "IR IR IR IR IL IL IL IL R D 0 IR IR IR IR D 0 U U 0 D D D 0 C"
        );
    }

    #[test]
    fn test_unequal_lengths_are_right_aligned() {
        let mut generator = SumProblemGenerator::default();
        let episode = generator.generate_sum("5", "1234").unwrap();

        assert_eq!(episode.scratch_row(Row::LeftOperand), padded("    5", 16));
        assert_eq!(episode.scratch_row(Row::RightOperand), padded(" 1234", 16));
        assert_eq!(episode.scratch_row(Row::Result), padded(" 1239", 16));
        assert_eq!(episode.output_digits(), "1239");
    }

    #[test]
    fn test_overflowing_operands() {
        let mut generator = SumProblemGenerator::default();
        let err = generator.generate_sum("12345678", "87654321").unwrap_err();

        assert_eq!(
            err,
            GeneratorError::Memory(MemoryError::OutOfBounds {
                region: Region::Input,
                x: 18,
                y: 0,
            })
        );
        assert!(err.is_input_overflow());
    }

    #[test]
    fn test_malformed_operands() {
        let mut generator = SumProblemGenerator::default();

        let err = generator.generate_sum("012", "3").unwrap_err();
        assert_eq!(
            err,
            GeneratorError::MalformedOperand {
                operand: "012".to_string(),
                reason: OperandError::LeadingZero,
            }
        );
        assert!(!err.is_input_overflow());

        let err = generator.generate_sum("4", "").unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::MalformedOperand {
                reason: OperandError::Empty,
                ..
            }
        ));

        let err = generator.generate_sum("4", "x").unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::MalformedOperand {
                reason: OperandError::NonDigit('x'),
                ..
            }
        ));
    }

    #[test]
    fn test_reset_between_problems() {
        let mut generator = SumProblemGenerator::default();
        let first = generator.generate_sum("712", "378").unwrap();
        let _ = generator.generate_sum("99", "99").unwrap();
        let again = generator.generate_sum("712", "378").unwrap();

        assert_eq!(first, again);
    }

    #[test]
    fn test_generate_with_source() {
        let mut generator = SumProblemGenerator::default();
        let mut source = RandomOperands::seeded(3);

        let episode = generator
            .generate_sum_with(Some("42"), None, &mut source)
            .unwrap();
        assert_eq!(episode.lhs(), "42");
        assert!(episode.rhs().len() <= 8);

        let expected: u128 = 42 + episode.rhs().parse::<u128>().unwrap();
        assert_eq!(episode.result_value(), Some(expected));
    }

    #[test]
    fn test_small_tape() {
        let config = GeneratorConfig::default().with_tape_len(5);
        let mut generator = SumProblemGenerator::new(config);

        assert_eq!(generator.generate_sum("1", "2").unwrap().output_digits(), "3");
        assert!(generator.generate_sum("10", "2").is_err());
    }
}
