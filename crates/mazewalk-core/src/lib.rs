//! **mazewalk-core**: foundational types shared by the *mazewalk* crates.
//!
//! Geometry primitives for the maze grids, the four cardinal
//! [`Direction`]s with their fixed search priority, and the floating-point
//! [`Rgb`] palette the board animates.

pub mod geom;
pub mod style;

pub use geom::{Direction, Point, Range};
pub use style::Rgb;
