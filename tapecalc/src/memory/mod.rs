mod error;
mod scratch_pad;
mod tape;

pub use error::MemoryError;
pub use scratch_pad::{Row, ScratchPad};
pub use tape::{Tape, TapeKind};

use strum_macros::Display;

/// Character held by every cell that has not been written yet.
pub const BLANK: u8 = b' ';

/// The memory regions an episode operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Region {
    #[strum(serialize = "input tape")]
    Input,
    #[strum(serialize = "output tape")]
    Output,
    #[strum(serialize = "scratch pad")]
    Scratch,
}

impl From<TapeKind> for Region {
    fn from(kind: TapeKind) -> Self {
        match kind {
            TapeKind::Input => Region::Input,
            TapeKind::Output => Region::Output,
        }
    }
}
