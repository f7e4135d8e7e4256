//! The generation-time grid: one [`CoarseCell`] per maze cell.

use mazewalk_core::{Direction, Point, Range};

/// Passage flags of one maze cell, one per direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CoarseCell {
    pub n: bool,
    pub s: bool,
    pub e: bool,
    pub w: bool,
}

impl CoarseCell {
    /// Whether a passage leaves this cell toward `dir`.
    #[inline]
    pub fn has_passage(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.n,
            Direction::South => self.s,
            Direction::East => self.e,
            Direction::West => self.w,
        }
    }

    /// Record a passage toward `dir`.
    #[inline]
    pub fn open(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.n = true,
            Direction::South => self.s = true,
            Direction::East => self.e = true,
            Direction::West => self.w = true,
        }
    }

    /// Number of passages leaving this cell.
    pub fn degree(&self) -> usize {
        [self.n, self.s, self.e, self.w].iter().filter(|&&b| b).count()
    }
}

/// What lies on one side of a coarse cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// A carved passage to the neighbour.
    Passage,
    /// An uncarved wall between two cells.
    Wall,
    /// The side faces the outside of the grid.
    OutOfGrid,
}

impl Boundary {
    /// Whether projection clears the fine cell on this side. The outside of
    /// the grid counts as open.
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, Boundary::Wall)
    }
}

/// A `width × height` grid of coarse cells, row-major.
#[derive(Clone, Debug)]
pub struct CoarseGrid {
    range: Range,
    cells: Vec<CoarseCell>,
}

impl CoarseGrid {
    /// A grid with no passages.
    pub fn new(width: i32, height: i32) -> Self {
        let range = Range::sized(width, height);
        Self {
            range,
            cells: vec![CoarseCell::default(); range.len()],
        }
    }

    /// Bounds of the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// The cell at `p`, if inside.
    pub fn at(&self, p: Point) -> Option<&CoarseCell> {
        self.range.index(p).map(|i| &self.cells[i])
    }

    /// Carve a passage from `p` toward `dir`, recorded on both sides.
    /// Returns `false` without touching anything when either cell lies
    /// outside the grid.
    pub fn connect(&mut self, p: Point, dir: Direction) -> bool {
        let q = p.step(dir);
        let (Some(i), Some(j)) = (self.range.index(p), self.range.index(q)) else {
            return false;
        };
        self.cells[i].open(dir);
        self.cells[j].open(dir.opposite());
        true
    }

    /// What lies on the `dir` side of `p`.
    pub fn boundary(&self, p: Point, dir: Direction) -> Boundary {
        if !self.range.contains(p.step(dir)) {
            return Boundary::OutOfGrid;
        }
        match self.at(p) {
            Some(c) if c.has_passage(dir) => Boundary::Passage,
            _ => Boundary::Wall,
        }
    }

    /// Number of distinct passages, each counted once.
    pub fn passage_count(&self) -> usize {
        self.cells.iter().map(|c| usize::from(c.e) + usize::from(c.s)).sum()
    }

    /// Iterate over `(position, cell)` pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &CoarseCell)> + '_ {
        self.range.iter().zip(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_records_both_sides() {
        let mut g = CoarseGrid::new(2, 2);
        assert!(g.connect(Point::new(0, 0), Direction::South));
        assert!(g.at(Point::new(0, 0)).unwrap().s);
        assert!(g.at(Point::new(0, 1)).unwrap().n);
        assert_eq!(g.passage_count(), 1);
        assert!(!g.connect(Point::new(1, 1), Direction::East));
        assert_eq!(g.passage_count(), 1);
    }

    #[test]
    fn boundary_distinguishes_outside_from_walls() {
        let mut g = CoarseGrid::new(2, 1);
        g.connect(Point::new(0, 0), Direction::East);
        assert_eq!(g.boundary(Point::new(0, 0), Direction::East), Boundary::Passage);
        assert_eq!(g.boundary(Point::new(1, 0), Direction::West), Boundary::Passage);
        assert_eq!(g.boundary(Point::new(0, 0), Direction::North), Boundary::OutOfGrid);
        assert_eq!(g.boundary(Point::new(1, 0), Direction::East), Boundary::OutOfGrid);
        assert!(Boundary::OutOfGrid.is_open());
        assert!(!Boundary::Wall.is_open());

        let g = CoarseGrid::new(2, 1);
        assert_eq!(g.boundary(Point::new(0, 0), Direction::East), Boundary::Wall);
    }
}
