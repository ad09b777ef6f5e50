use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::memory::{MemoryError, Region};

/// The vocabulary of atomic actions recorded in an [`ActionTrace`](crate::ActionTrace).
///
/// Every variant corresponds to exactly one primitive state change: a single
/// cursor step on one of the tapes or on the scratch pad, a digit write, or a
/// copy of one scratch cell to the output tape.
///
/// Digit discriminants equal the digit value so that the integer id of a
/// digit token is the digit itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum Action {
    // Digit writes
    #[strum(serialize = "0")]
    Digit0 = 0,
    #[strum(serialize = "1")]
    Digit1 = 1,
    #[strum(serialize = "2")]
    Digit2 = 2,
    #[strum(serialize = "3")]
    Digit3 = 3,
    #[strum(serialize = "4")]
    Digit4 = 4,
    #[strum(serialize = "5")]
    Digit5 = 5,
    #[strum(serialize = "6")]
    Digit6 = 6,
    #[strum(serialize = "7")]
    Digit7 = 7,
    #[strum(serialize = "8")]
    Digit8 = 8,
    #[strum(serialize = "9")]
    Digit9 = 9,

    // Input tape moves
    #[strum(serialize = "IR")]
    InputRight = 10,
    #[strum(serialize = "IL")]
    InputLeft = 11,

    // Output tape moves
    #[strum(serialize = "OR")]
    OutputRight = 12,
    #[strum(serialize = "OL")]
    OutputLeft = 13,

    // Scratch pad moves
    #[strum(serialize = "R")]
    ScratchRight = 14,
    #[strum(serialize = "L")]
    ScratchLeft = 15,
    #[strum(serialize = "D")]
    ScratchDown = 16,
    #[strum(serialize = "U")]
    ScratchUp = 17,

    /// Copies the scratch cell under the cursor onto the output tape.
    #[strum(serialize = "C")]
    CopyToOutput = 18,
}

impl Action {
    /// Returns the write action for the digit `digit`.
    pub fn digit(digit: u8) -> Result<Self, MemoryError> {
        if digit > 9 {
            return Err(MemoryError::InvalidDigit(digit));
        }
        Self::try_from(digit).map_err(|_| MemoryError::InvalidDigit(digit))
    }

    /// Returns the pass-through token for an ASCII digit character read from
    /// `region` at `(x, y)`.
    pub(crate) fn pass_through(
        value: u8,
        region: Region,
        x: usize,
        y: usize,
    ) -> Result<Self, MemoryError> {
        match value {
            b'0'..=b'9' => Self::digit(value - b'0'),
            _ => Err(MemoryError::CorruptCell {
                region,
                x,
                y,
                value: value as char,
            }),
        }
    }

    /// Stable integer id of this action, for downstream serialization.
    pub fn id(self) -> u8 {
        self.into()
    }

    /// The token string of this action, e.g. `"IR"` or `"7"`.
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for single-cell cursor moves on any region.
    pub const fn is_move(self) -> bool {
        matches!(
            self,
            Action::InputRight
                | Action::InputLeft
                | Action::OutputRight
                | Action::OutputLeft
                | Action::ScratchRight
                | Action::ScratchLeft
                | Action::ScratchDown
                | Action::ScratchUp
        )
    }

    /// Returns the digit value if this is a digit write.
    pub fn digit_value(self) -> Option<u8> {
        let id = self.id();
        (id <= 9).then_some(id)
    }
}
