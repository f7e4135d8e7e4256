//! The mazewalk board and everything that happens on it.
//!
//! A [`Board`] owns a carved maze projected onto a walkable [`FineGrid`],
//! the start and end markers, a [`Player`], both search steppers and the
//! path replay. It does nothing on its own: a front end drives it with
//! [`Board::tick`] and [`Board::apply`], then reads cell colours and
//! [`Progress`] back out.
//!
//! ```no_run
//! use mazewalk_board::{Board, BoardConfig, Command};
//!
//! let mut board = Board::new(BoardConfig::default().with_seed(7))?;
//! board.apply(Command::StartDfs);
//! while board.is_running() {
//!     board.tick(0.04);
//! }
//! # Ok::<(), mazewalk_board::BoardError>(())
//! ```

mod board;
mod cell;
mod config;
mod error;
mod grid;
mod player;

pub use board::{Algorithm, Board, Command, Progress, ResetMode};
pub use cell::{DEFAULT_SCALE, FineCell, Focus, INIT_SCALE, MAX_SCALE};
pub use config::BoardConfig;
pub use error::{BoardError, MAX_DIMENSION};
pub use grid::FineGrid;
pub use player::Player;
