use std::fmt;

use mazewalk_core::Point;

/// Largest accepted coarse width or height.
pub const MAX_DIMENSION: i32 = 128;

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coarse dimension is zero or negative.
    ZeroSize { width: i32, height: i32 },
    /// A coarse dimension exceeds [`MAX_DIMENSION`].
    TooLarge { width: i32, height: i32 },
    /// Fewer than two open cells to hold the start and the end.
    NoRoom,
    /// Requested start and end coincide or one of them is not open.
    BadPlacement { start: Point, end: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "board: empty maze size {width}x{height}")
            }
            Self::TooLarge { width, height } => write!(
                f,
                "board: maze size {width}x{height} exceeds {MAX_DIMENSION}x{MAX_DIMENSION}"
            ),
            Self::NoRoom => write!(f, "board: not enough open cells for start and end"),
            Self::BadPlacement { start, end } => {
                write!(f, "board: cannot place start at {start} and end at {end}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_size() {
        let e = BoardError::ZeroSize {
            width: 0,
            height: 4,
        };
        assert_eq!(e.to_string(), "board: empty maze size 0x4");
        let e = BoardError::TooLarge {
            width: 500,
            height: 4,
        };
        assert!(e.to_string().contains("500x4"));
    }
}
