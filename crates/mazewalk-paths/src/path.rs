//! Recorded routes: [`Step`] and [`Path`].

use std::ops::Index;

use mazewalk_core::{Direction, Point};

/// One entry of a [`Path`]: the direction of the move that entered `pos`.
///
/// The first entry of every path has no direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub dir: Option<Direction>,
    pub pos: Point,
}

impl Step {
    /// A move in `dir` that ends at `pos`.
    #[inline]
    pub const fn new(dir: Direction, pos: Point) -> Self {
        Self {
            dir: Some(dir),
            pos,
        }
    }

    /// The directionless first entry of a path.
    #[inline]
    pub const fn origin(pos: Point) -> Self {
        Self { dir: None, pos }
    }
}

/// An ordered route that always starts with a directionless origin step.
///
/// The origin can be moved but never removed, so a `Path` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// A path holding only the origin `start`.
    pub fn new(start: Point) -> Self {
        Self {
            steps: vec![Step::origin(start)],
        }
    }

    /// Number of entries, origin included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path records at least one move.
    #[inline]
    pub fn has_moves(&self) -> bool {
        self.steps.len() > 1
    }

    /// The origin entry.
    #[inline]
    pub fn first(&self) -> Step {
        self.steps[0]
    }

    /// The most recent entry (the origin when no move is recorded).
    #[inline]
    pub fn last(&self) -> Step {
        self.steps[self.steps.len() - 1]
    }

    /// Append a move.
    #[inline]
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Remove the most recent move. The origin is never removed.
    pub fn pop(&mut self) -> Option<Step> {
        if self.has_moves() {
            self.steps.pop()
        } else {
            None
        }
    }

    /// Move the origin, keeping any recorded moves.
    pub fn set_origin(&mut self, start: Point) {
        self.steps[0] = Step::origin(start);
    }

    /// All entries, origin first.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over entries, origin first.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Whether every move goes one unit in its recorded direction and every
    /// position satisfies `is_open`.
    pub fn is_valid(&self, is_open: impl Fn(Point) -> bool) -> bool {
        if !is_open(self.first().pos) {
            return false;
        }
        self.steps.windows(2).all(|w| match w[1].dir {
            Some(dir) => w[0].pos.step(dir) == w[1].pos && is_open(w[1].pos),
            None => false,
        })
    }
}

impl Index<usize> for Path {
    type Output = Step;

    fn index(&self, i: usize) -> &Step {
        &self.steps[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_never_popped() {
        let mut p = Path::new(Point::new(2, 2));
        assert_eq!(p.pop(), None);
        assert_eq!(p.len(), 1);
        p.push(Step::new(Direction::East, Point::new(3, 2)));
        assert_eq!(p.pop(), Some(Step::new(Direction::East, Point::new(3, 2))));
        assert_eq!(p.pop(), None);
        assert_eq!(p.first(), Step::origin(Point::new(2, 2)));
    }

    #[test]
    fn set_origin_keeps_moves() {
        let mut p = Path::new(Point::ZERO);
        p.set_origin(Point::new(1, 1));
        assert_eq!(p[0].pos, Point::new(1, 1));
        assert_eq!(p[0].dir, None);
    }

    #[test]
    fn validity_checks_directions_and_cells() {
        let mut p = Path::new(Point::new(0, 0));
        p.push(Step::new(Direction::South, Point::new(0, 1)));
        p.push(Step::new(Direction::East, Point::new(1, 1)));
        assert!(p.is_valid(|_| true));
        assert!(!p.is_valid(|q| q != Point::new(1, 1)));

        let mut bad = Path::new(Point::new(0, 0));
        bad.push(Step::new(Direction::North, Point::new(0, 1)));
        assert!(!bad.is_valid(|_| true));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_keeps_directionless_origin() {
        let mut p = Path::new(Point::new(1, 2));
        p.push(Step::new(Direction::West, Point::new(0, 2)));
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.first().dir, None);
    }
}
