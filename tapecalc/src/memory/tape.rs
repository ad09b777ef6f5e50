use strum_macros::Display;

use super::{MemoryError, Region, BLANK};
use crate::{execution::ActionTrace, Action};

/// Selects which of the two tapes a [`Tape`] is, and therefore which move
/// vocabulary its cursor emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TapeKind {
    Input,
    Output,
}

impl TapeKind {
    pub const fn right(self) -> Action {
        match self {
            TapeKind::Input => Action::InputRight,
            TapeKind::Output => Action::OutputRight,
        }
    }

    pub const fn left(self) -> Action {
        match self {
            TapeKind::Input => Action::InputLeft,
            TapeKind::Output => Action::OutputLeft,
        }
    }
}

/// A fixed-length, one-dimensional character buffer with a single cursor.
///
/// The cursor only moves through [`Tape::move_cursor_to`], which records one
/// action per cell travelled. Writes never advance the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    kind: TapeKind,
    cells: Vec<u8>,
    cursor: usize,
}

impl Tape {
    /// Creates a blank tape of `len` cells with the cursor at 0.
    pub fn new(kind: TapeKind, len: usize) -> Self {
        Self {
            kind,
            cells: vec![BLANK; len],
            cursor: 0,
        }
    }

    pub const fn kind(&self) -> TapeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the raw cell contents.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Blanks every cell and returns the cursor to the origin.
    pub fn reset(&mut self) {
        self.cells.fill(BLANK);
        self.cursor = 0;
    }

    /// Writes `s` at positions `0..s.len()`.
    ///
    /// This is bulk initialization: the cursor does not move and no action is
    /// recorded. Fails without touching the tape if `s` does not fit.
    pub fn write_string(&mut self, s: &str) -> Result<(), MemoryError> {
        let bytes = s.as_bytes();
        if bytes.len() > self.len() {
            return Err(self.out_of_bounds(bytes.len() - 1));
        }
        self.cells[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Moves the cursor to `target`, recording one move action per cell.
    pub fn move_cursor_to(
        &mut self,
        target: usize,
        trace: &mut ActionTrace,
    ) -> Result<(), MemoryError> {
        self.check_bounds(target)?;

        let action = if target > self.cursor {
            self.kind.right()
        } else {
            self.kind.left()
        };
        trace.repeat(action, self.cursor.abs_diff(target));
        self.cursor = target;

        Ok(())
    }

    pub fn read_at(&self, pos: usize) -> Result<u8, MemoryError> {
        self.check_bounds(pos)?;
        Ok(self.cells[pos])
    }

    pub(crate) fn write_at(&mut self, pos: usize, value: u8) -> Result<(), MemoryError> {
        self.check_bounds(pos)?;
        self.cells[pos] = value;
        Ok(())
    }

    /// Reads the cell under the cursor.
    pub fn read(&self) -> Result<u8, MemoryError> {
        self.read_at(self.cursor)
    }

    /// Writes the cell under the cursor.
    pub(crate) fn write(&mut self, value: u8) -> Result<(), MemoryError> {
        self.write_at(self.cursor, value)
    }

    fn check_bounds(&self, pos: usize) -> Result<(), MemoryError> {
        if pos < self.len() {
            Ok(())
        } else {
            Err(self.out_of_bounds(pos))
        }
    }

    fn out_of_bounds(&self, pos: usize) -> MemoryError {
        MemoryError::OutOfBounds {
            region: Region::from(self.kind),
            x: pos,
            y: 0,
        }
    }
}
