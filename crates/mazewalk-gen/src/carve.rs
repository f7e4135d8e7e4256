//! Recursive-backtracking carving with an explicit stack.

use mazewalk_core::{Direction, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::coarse::CoarseGrid;

/// A cell on the carving stack with its shuffled directions and the index
/// of the next one to try.
struct Frame {
    cell: Point,
    dirs: [Direction; 4],
    next: usize,
}

/// Maze generator operating on a [`CoarseGrid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: CoarseGrid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over a blank `width × height` grid.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self {
            rng,
            grid: CoarseGrid::new(width, height),
        }
    }

    /// Carve a perfect maze starting at `(0, 0)`.
    ///
    /// Each cell shuffles the four directions when it is first entered.
    /// Directions are tried in that order; an in-bounds unvisited neighbour
    /// is connected and carved from before the next direction is tried.
    ///
    /// Returns the number of passages carved, `width * height - 1` for a
    /// non-empty grid.
    pub fn carve(&mut self) -> usize {
        let range = self.grid.range();
        if range.is_empty() {
            return 0;
        }
        let mut visited = vec![false; range.len()];
        let mut carved = 0usize;

        let root = range.min;
        if let Some(i) = range.index(root) {
            visited[i] = true;
        }
        let mut stack = vec![self.frame(root)];

        while let Some(top) = stack.last_mut() {
            if top.next == top.dirs.len() {
                stack.pop();
                continue;
            }
            let dir = top.dirs[top.next];
            top.next += 1;
            let cell = top.cell;
            let neighbor = cell.step(dir);
            let Some(i) = range.index(neighbor) else {
                continue;
            };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            self.grid.connect(cell, dir);
            carved += 1;
            let frame = self.frame(neighbor);
            stack.push(frame);
        }

        log::debug!("carved {carved} passages over {range}");
        carved
    }

    fn frame(&mut self, cell: Point) -> Frame {
        let mut dirs = Direction::ALL;
        dirs.shuffle(&mut self.rng);
        Frame {
            cell,
            dirs,
            next: 0,
        }
    }
}
