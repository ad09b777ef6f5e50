//! Operand validation and the pluggable sources that supply operands when the
//! caller does not.

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

/// Reasons a digit string is rejected as an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("operand is empty")]
    Empty,

    #[error("operand contains non-digit character {0:?}")]
    NonDigit(char),

    #[error("multi-digit operand has a leading zero")]
    LeadingZero,
}

/// Checks that `operand` is a non-empty string of ASCII digits without a
/// leading zero, unless it is exactly `"0"`.
pub fn validate_operand(operand: &str) -> Result<(), OperandError> {
    let bytes = operand.as_bytes();
    if bytes.is_empty() {
        return Err(OperandError::Empty);
    }
    if let Some(c) = operand.chars().find(|c| !c.is_ascii_digit()) {
        return Err(OperandError::NonDigit(c));
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(OperandError::LeadingZero);
    }
    Ok(())
}

/// Supplies operands for episodes whose operands were not given explicitly.
///
/// Implementations must only return strings accepted by [`validate_operand`].
pub trait OperandSource {
    fn next_operand(&mut self, max_digits: usize) -> String;
}

/// Draws operands uniformly at random.
///
/// The digit count is uniform in `1..=max_digits`; the leading digit is
/// non-zero unless the number has a single digit.
#[derive(Debug, Clone)]
pub struct RandomOperands<R = StdRng> {
    rng: R,
}

impl RandomOperands<StdRng> {
    /// A reproducible source: the same seed yields the same operands.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomOperands<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a number with exactly `n_digits` digits. A count of 0 is
    /// treated as 1.
    pub fn number_with_digits(&mut self, n_digits: usize) -> String {
        if n_digits <= 1 {
            return self.digit(0).to_string();
        }

        let mut number = String::with_capacity(n_digits);
        number.push(self.digit(1));
        for _ in 1..n_digits {
            number.push(self.digit(0));
        }
        number
    }

    fn digit(&mut self, low: u8) -> char {
        char::from(b'0' + self.rng.random_range(low..=9))
    }
}

impl<R: Rng> OperandSource for RandomOperands<R> {
    fn next_operand(&mut self, max_digits: usize) -> String {
        let n_digits = self.rng.random_range(1..=max_digits.max(1));
        self.number_with_digits(n_digits)
    }
}
