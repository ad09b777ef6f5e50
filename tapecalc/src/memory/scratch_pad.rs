use num_enum::IntoPrimitive;
use strum_macros::EnumCount;

use super::{MemoryError, Region, BLANK};
use crate::{execution::ActionTrace, Action};

/// The role each scratch-pad row plays during an addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, IntoPrimitive)]
#[repr(u8)]
pub enum Row {
    Carry = 0,
    LeftOperand = 1,
    RightOperand = 2,
    Result = 3,
}

impl Row {
    pub fn index(self) -> usize {
        u8::from(self) as usize
    }
}

/// A fixed-size grid of characters with its own 2D cursor.
///
/// Cursor motion always goes horizontally first, then vertically, recording
/// one action per unit step. Blank cells read as the digit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPad {
    rows: usize,
    cols: usize,
    /// Row-major cells.
    cells: Vec<u8>,
    x: usize,
    y: usize,
}

impl ScratchPad {
    /// Creates a blank `rows` × `cols` grid with the cursor at `(0, 0)`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![BLANK; rows * cols],
            x: 0,
            y: 0,
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cursor as `(x, y)`.
    pub const fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Blanks every cell and returns the cursor to the origin.
    pub fn reset(&mut self) {
        self.cells.fill(BLANK);
        self.x = 0;
        self.y = 0;
    }

    /// Moves the cursor to `(x, y)`: first along the row, then along the
    /// column.
    pub fn move_cursor_to(
        &mut self,
        x: usize,
        y: usize,
        trace: &mut ActionTrace,
    ) -> Result<(), MemoryError> {
        self.check_bounds(x, y)?;

        let horizontal = if x > self.x {
            Action::ScratchRight
        } else {
            Action::ScratchLeft
        };
        trace.repeat(horizontal, self.x.abs_diff(x));
        self.x = x;

        let vertical = if y > self.y {
            Action::ScratchDown
        } else {
            Action::ScratchUp
        };
        trace.repeat(vertical, self.y.abs_diff(y));
        self.y = y;

        Ok(())
    }

    /// Moves to `(x, y)` and writes `digit` there, recording the digit token.
    pub fn set_digit(
        &mut self,
        x: usize,
        y: usize,
        digit: u8,
        trace: &mut ActionTrace,
    ) -> Result<(), MemoryError> {
        let action = Action::digit(digit)?;
        self.move_cursor_to(x, y, trace)?;
        trace.push(action);
        self.write(b'0' + digit);
        Ok(())
    }

    /// Moves to `(x, y)` and reads the digit stored there.
    ///
    /// Reading is not free: the moves it takes are recorded in the trace.
    pub fn get_digit(
        &mut self,
        x: usize,
        y: usize,
        trace: &mut ActionTrace,
    ) -> Result<u8, MemoryError> {
        match self.load(x, y, trace)? {
            BLANK => Ok(0),
            c @ b'0'..=b'9' => Ok(c - b'0'),
            c => Err(MemoryError::CorruptCell {
                region: Region::Scratch,
                x,
                y,
                value: c as char,
            }),
        }
    }

    /// Moves to `(x, y)` and returns the raw character stored there.
    pub fn load(
        &mut self,
        x: usize,
        y: usize,
        trace: &mut ActionTrace,
    ) -> Result<u8, MemoryError> {
        self.move_cursor_to(x, y, trace)?;
        self.read()
    }

    /// Reads the cell under the cursor.
    pub fn read(&self) -> Result<u8, MemoryError> {
        self.cell(self.x, self.y)
    }

    /// Writes the cell under the cursor.
    pub(crate) fn write(&mut self, value: u8) {
        self.cells[self.y * self.cols + self.x] = value;
    }

    /// Returns the cell at `(x, y)` without moving the cursor.
    pub fn cell(&self, x: usize, y: usize) -> Result<u8, MemoryError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y * self.cols + x])
    }

    /// Returns row `y` without moving the cursor.
    pub fn row(&self, y: usize) -> Result<&[u8], MemoryError> {
        self.check_bounds(0, y)?;
        Ok(&self.cells[y * self.cols..(y + 1) * self.cols])
    }

    /// Iterates over all rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.cols.max(1))
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), MemoryError> {
        if x < self.cols && y < self.rows {
            Ok(())
        } else {
            Err(MemoryError::OutOfBounds {
                region: Region::Scratch,
                x,
                y,
            })
        }
    }
}
