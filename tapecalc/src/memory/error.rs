use thiserror::Error;

use super::Region;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("{region} access at ({x}, {y}) is out of bounds")]
    OutOfBounds { region: Region, x: usize, y: usize },

    #[error("digit value {0} is outside 0..=9")]
    InvalidDigit(u8),

    #[error("{region} cell ({x}, {y}) holds {value:?}, expected a digit or blank")]
    CorruptCell {
        region: Region,
        x: usize,
        y: usize,
        value: char,
    },
}
