//! Perfect-maze generation for the *mazewalk* board.
//!
//! A [`MazeGen`] carves a spanning tree over a [`CoarseGrid`] by recursive
//! backtracking. [`WallMask::project`] then expands it to the walkable
//! fine grid at twice the resolution.

mod carve;
mod coarse;
mod project;

pub use carve::MazeGen;
pub use coarse::{Boundary, CoarseCell, CoarseGrid};
pub use project::WallMask;

use rand::Rng;

/// A carved maze together with its fine wall mask.
#[derive(Clone, Debug)]
pub struct Maze {
    pub coarse: CoarseGrid,
    pub walls: WallMask,
}

impl Maze {
    /// Carve a `width × height` maze with `rng` and project it.
    pub fn generate<R: Rng>(width: i32, height: i32, rng: R) -> Self {
        let mut mg = MazeGen::new(width, height, rng);
        mg.carve();
        let walls = WallMask::project(&mg.grid);
        Self {
            coarse: mg.grid,
            walls,
        }
    }
}
