//! Projection of a carved [`CoarseGrid`] onto the double-resolution grid.

use mazewalk_core::{Direction, Point, Range};

use crate::coarse::CoarseGrid;

/// Wall flags of the fine grid, `2 * width × 2 * height`, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallMask {
    range: Range,
    walls: Vec<bool>,
}

impl WallMask {
    /// A mask where every cell is a wall.
    pub fn solid(width: i32, height: i32) -> Self {
        let range = Range::sized(width, height);
        Self {
            range,
            walls: vec![true; range.len()],
        }
    }

    /// Project `coarse`: coarse `(x, y)` maps to fine `(2x, 2y)`. Every open
    /// side of a coarse cell clears that anchor and the fine cell one unit
    /// toward the side. Writes landing outside the fine grid are dropped.
    pub fn project(coarse: &CoarseGrid) -> Self {
        let size = coarse.range().size() * 2;
        let mut mask = Self::solid(size.x, size.y);
        for (p, _) in coarse.iter() {
            let anchor = p * 2;
            for dir in Direction::ALL {
                if coarse.boundary(p, dir).is_open() {
                    mask.clear(anchor);
                    mask.clear(anchor.step(dir));
                }
            }
        }
        mask
    }

    /// Bounds of the fine grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether `p` is a wall. Cells outside the grid count as walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.range.index(p).is_none_or(|i| self.walls[i])
    }

    /// Clear the wall at `p`; ignored outside the grid.
    pub fn clear(&mut self, p: Point) {
        if let Some(i) = self.range.index(p) {
            self.walls[i] = false;
        }
    }

    /// Iterate over the open cells, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.range.iter().filter(|&p| !self.is_wall(p))
    }
}
