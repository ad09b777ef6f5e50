use std::fmt;

use super::ActionTrace;
use crate::memory::{Row, BLANK};

/// A finished addition problem: the final contents of every memory region,
/// the final cursor positions and the action trace that produced them.
///
/// Episodes are immutable snapshots; generating another problem never
/// touches an episode that was already returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub(crate) lhs: String,
    pub(crate) rhs: String,
    pub(crate) input: Vec<u8>,
    pub(crate) output: Vec<u8>,
    pub(crate) scratch: Vec<Vec<u8>>,
    pub(crate) input_cursor: usize,
    pub(crate) output_cursor: usize,
    pub(crate) scratch_cursor: (usize, usize),
    pub(crate) trace: ActionTrace,
}

impl Episode {
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    /// The input tape, padded with blanks to its full length.
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// The output tape, padded with blanks to its full length.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn scratch_rows(&self) -> &[Vec<u8>] {
        &self.scratch
    }

    pub fn scratch_row(&self, row: Row) -> &[u8] {
        &self.scratch[row.index()]
    }

    pub const fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    pub const fn output_cursor(&self) -> usize {
        self.output_cursor
    }

    /// Scratch cursor as `(x, y)`.
    pub const fn scratch_cursor(&self) -> (usize, usize) {
        self.scratch_cursor
    }

    pub fn trace(&self) -> &ActionTrace {
        &self.trace
    }

    /// The digits written to the output tape, without padding.
    pub fn output_digits(&self) -> String {
        let end = self
            .output
            .iter()
            .rposition(|&c| c != BLANK)
            .map_or(0, |i| i + 1);
        self.output[..end].iter().map(|&c| char::from(c)).collect()
    }

    /// The sum read back from the output tape.
    ///
    /// Returns `None` if the result does not fit in a `u128`.
    pub fn result_value(&self) -> Option<u128> {
        self.output_digits().parse().ok()
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[u8]) -> fmt::Result {
    f.write_str("[")?;
    for &c in cells {
        write!(f, "{}", char::from(c))?;
    }
    f.write_str("]")
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cells(f, &self.input)?;
        f.write_str("\n\n")?;
        write_cells(f, &self.output)?;
        f.write_str("\n\n")?;
        for row in &self.scratch {
            write_cells(f, row)?;
            f.write_str("\n")?;
        }
        let (x, y) = self.scratch_cursor;
        writeln!(
            f,
            "ix:{} ox:{} x:{x} y:{y}",
            self.input_cursor, self.output_cursor
        )?;
        write!(f, "actions: {}", self.trace)
    }
}
