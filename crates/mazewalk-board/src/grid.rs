//! The walkable grid the searches run on.

use mazewalk_core::{Point, Range};
use mazewalk_gen::WallMask;
use mazewalk_paths::{Frontier, GreedyGrid, SearchGrid};

use crate::cell::{FineCell, Focus};

/// Row-major grid of [`FineCell`]s.
#[derive(Clone, Debug)]
pub struct FineGrid {
    range: Range,
    cells: Vec<FineCell>,
}

impl FineGrid {
    /// Build the cells from a projected wall mask.
    pub fn from_mask(mask: &WallMask) -> Self {
        let range = mask.range();
        let cells = range.iter().map(|p| FineCell::new(mask.is_wall(p))).collect();
        Self { range, cells }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn at(&self, p: Point) -> Option<&FineCell> {
        self.range.index(p).map(|i| &self.cells[i])
    }

    pub fn at_mut(&mut self, p: Point) -> Option<&mut FineCell> {
        let i = self.range.index(p)?;
        Some(&mut self.cells[i])
    }

    /// Apply `f` to the cell at `p`, if inside.
    pub fn update(&mut self, p: Point, f: impl FnOnce(&mut FineCell)) {
        if let Some(c) = self.at_mut(p) {
            f(c);
        }
    }

    /// Iterate over `(position, cell)` pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &FineCell)> + '_ {
        self.range.iter().zip(self.cells.iter())
    }

    /// Number of walkable cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Reset every cell for a fresh search pass.
    pub fn reset(&mut self) {
        for c in &mut self.cells {
            c.reset();
        }
    }

    /// Advance every cell's appearance by `dt` seconds.
    pub fn update_appearance(
        &mut self,
        dt: f32,
        cursor: Point,
        next: Option<Point>,
        scale_rate: f32,
    ) {
        for (p, c) in self.range.iter().zip(self.cells.iter_mut()) {
            let focus = if next == Some(p) {
                Focus::NextOnPath
            } else if p == cursor {
                Focus::Cursor
            } else {
                Focus::None
            };
            c.update_appearance(dt, focus, scale_rate);
        }
    }
}

impl SearchGrid for FineGrid {
    fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(FineCell::is_open)
    }

    fn is_end(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_end)
    }

    fn is_visited(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_visited)
    }

    fn mark_visited(&mut self, p: Point) {
        self.update(p, |c| c.is_visited = true);
    }

    fn mark_discovered(&mut self, p: Point) {
        self.update(p, |c| {
            c.is_visited = true;
            c.begin_fade();
        });
    }

    fn reach_end(&mut self, p: Point) {
        self.update(p, FineCell::stop_fade);
    }
}

impl GreedyGrid for FineGrid {
    fn set_parent(&mut self, p: Point, parent: Frontier) {
        self.update(p, |c| c.parent = Some(parent));
    }

    fn parent(&self, p: Point) -> Option<Frontier> {
        self.at(p).and_then(|c| c.parent)
    }

    fn mark_explored(&mut self, p: Point) {
        self.update(p, |c| c.is_explored = true);
    }
}
