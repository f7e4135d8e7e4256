//! Crossterm terminal front end for the mazewalk board.
//!
//! The [`TermDriver`] owns the terminal, [`MazeApp`] maps keys and clicks
//! to board commands and draws each fine cell as two coloured columns.
//! Only changed cells are written each frame.

mod app;
mod driver;
mod screen;
mod view;

pub use app::{Action, MazeApp, action_for_key, run};
pub use driver::{Input, Key, MouseAction, TermDriver};
pub use screen::{Frame, FrameCell, Rgb8, Screen, TermCell};
pub use view::{CELL_COLUMNS, cell_at, draw, screen_size, status};
