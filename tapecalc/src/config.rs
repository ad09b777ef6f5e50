pub const DEFAULT_TAPE_LEN: usize = 16;
pub const DEFAULT_MAX_DIGITS: usize = 8;

/// Length of the `" + "` separator rendered between the operands.
const SEPARATOR_LEN: usize = 3;

/// Dimensions of the working memory and limits on generated operands.
///
/// The scratch pad is `Row::COUNT` rows by `tape_len` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of cells on each tape and columns on the scratch pad.
    pub tape_len: usize,
    /// Largest digit count drawn for a random operand.
    pub max_digits: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tape_len: DEFAULT_TAPE_LEN,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

impl GeneratorConfig {
    pub fn with_tape_len(mut self, tape_len: usize) -> Self {
        self.tape_len = tape_len;
        self
    }

    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Whether every pair of operands with up to `max_digits` digits fits on
    /// the input tape.
    pub const fn random_operands_fit(&self) -> bool {
        2 * self.max_digits + SEPARATOR_LEN <= self.tape_len
    }
}
