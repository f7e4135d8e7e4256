use mazewalk_core::{Direction, Point};

use crate::path::{Path, Step};
use crate::traits::SearchGrid;
use crate::SearchState;

/// Depth-first search with backtracking, advanced one move per [`step`].
///
/// The recorded [`Path`] always mirrors the DFS stack: a forward move pushes
/// a step and a backtrack pops one.
///
/// [`step`]: DfsSearch::step
#[derive(Debug, Clone)]
pub struct DfsSearch {
    cursor: Point,
    path: Path,
    state: SearchState,
}

impl DfsSearch {
    /// A fresh search rooted at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            cursor: start,
            path: Path::new(start),
            state: SearchState::Idle,
        }
    }

    /// Discard all progress and root the search at `start`.
    pub fn reset(&mut self, start: Point) {
        *self = Self::new(start);
    }

    /// Re-root a search that has not been stepped yet. Returns `false` and
    /// changes nothing once stepping has begun.
    pub fn move_start(&mut self, start: Point) -> bool {
        if self.state != SearchState::Idle {
            return false;
        }
        self.cursor = start;
        self.path.set_origin(start);
        true
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cell under examination.
    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// The current DFS stack as a path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Advance by one move, forward or backward.
    ///
    /// Once the search is `Found` or `Exhausted` further calls change
    /// nothing.
    pub fn step<G: SearchGrid>(&mut self, grid: &mut G) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = SearchState::Running;

        let cur = self.cursor;
        grid.mark_visited(cur);
        if grid.is_end(cur) {
            grid.reach_end(cur);
            self.state = SearchState::Found;
            log::trace!("dfs: end reached at {cur}");
            return self.state;
        }

        let next = Direction::SEARCH_ORDER
            .into_iter()
            .map(|d| (d, cur.step(d)))
            .find(|&(_, p)| grid.is_open(p) && !grid.is_visited(p));

        match next {
            Some((dir, p)) => {
                grid.mark_discovered(p);
                self.path.push(Step::new(dir, p));
                self.cursor = p;
                log::trace!("dfs: {dir} to {p}");
            }
            None if self.path.has_moves() => {
                self.path.pop();
                self.cursor = self.path.last().pos;
                log::trace!("dfs: backtrack to {}", self.cursor);
            }
            None => {
                self.state = SearchState::Exhausted;
                log::trace!("dfs: exhausted");
            }
        }
        self.state
    }

    /// Step until the search terminates or `max_steps` is spent.
    pub fn run<G: SearchGrid>(&mut self, grid: &mut G, max_steps: usize) -> SearchState {
        for _ in 0..max_steps {
            if self.step(grid).is_terminal() {
                break;
            }
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::AsciiGrid;

    #[test]
    fn walks_a_corridor() {
        let mut g = AsciiGrid::parse(
            "\
S..
##.
E..",
        );
        let mut dfs = DfsSearch::new(g.start);
        assert_eq!(dfs.state(), SearchState::Idle);
        assert_eq!(dfs.run(&mut g, 100), SearchState::Found);
        let cells: Vec<Point> = dfs.path().iter().map(|s| s.pos).collect();
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(0, 2),
            ]
        );
        assert!(dfs.path().is_valid(|p| g.is_open(p)));
        assert_eq!(dfs.cursor(), g.end);
    }

    #[test]
    fn prefers_north_then_south_then_west_then_east() {
        let mut g = AsciiGrid::parse(
            "\
.E.
.S.
...",
        );
        let mut dfs = DfsSearch::new(g.start);
        dfs.step(&mut g);
        assert_eq!(dfs.cursor(), Point::new(1, 0));
        assert_eq!(dfs.path().last().dir, Some(Direction::North));
        assert_eq!(dfs.step(&mut g), SearchState::Found);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut g = AsciiGrid::parse(
            "\
.#.
S#E
...",
        );
        let mut dfs = DfsSearch::new(g.start);
        // North into the dead end first.
        dfs.step(&mut g);
        assert_eq!(dfs.cursor(), Point::new(0, 0));
        assert_eq!(dfs.path().len(), 2);
        // Nothing left there: pop back to the start.
        dfs.step(&mut g);
        assert_eq!(dfs.cursor(), Point::new(0, 1));
        assert_eq!(dfs.path().len(), 1);
        assert_eq!(dfs.run(&mut g, 100), SearchState::Found);
        assert_eq!(dfs.path().last().pos, g.end);
        assert!(dfs.path().is_valid(|p| g.is_open(p)));
    }

    #[test]
    fn reports_exhaustion_when_end_is_walled_off() {
        let mut g = AsciiGrid::parse(
            "\
S.#.
..#E",
        );
        let mut dfs = DfsSearch::new(g.start);
        assert_eq!(dfs.run(&mut g, 100), SearchState::Exhausted);
        assert!(!dfs.path().has_moves());
        assert_eq!(dfs.cursor(), g.start);
        // Terminal states are sticky.
        assert_eq!(dfs.step(&mut g), SearchState::Exhausted);
    }

    #[test]
    fn start_on_end_is_found_immediately() {
        let mut g = AsciiGrid::parse("..\n..");
        g.start = Point::new(1, 1);
        g.end = Point::new(1, 1);
        let mut dfs = DfsSearch::new(g.start);
        assert_eq!(dfs.step(&mut g), SearchState::Found);
        assert_eq!(dfs.path().len(), 1);
    }

    #[test]
    fn move_start_only_before_stepping() {
        let mut g = AsciiGrid::parse("S.E");
        let mut dfs = DfsSearch::new(g.start);
        assert!(dfs.move_start(Point::new(1, 0)));
        assert_eq!(dfs.path().first(), Step::origin(Point::new(1, 0)));
        dfs.step(&mut g);
        assert!(!dfs.move_start(Point::new(2, 0)));
        // West comes before east.
        assert_eq!(dfs.cursor(), Point::ZERO);
    }

    #[test]
    fn terminates_on_open_field() {
        let rows = vec!["S".to_string() + &".".repeat(9)]
            .into_iter()
            .chain(std::iter::repeat(".".repeat(10)).take(8))
            .chain(std::iter::once(".".repeat(9) + "E"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut g = AsciiGrid::parse(&rows);
        let mut dfs = DfsSearch::new(g.start);
        // Each cell is entered at most once and left at most once.
        assert_eq!(dfs.run(&mut g, 2 * 100 + 1), SearchState::Found);
        assert!(dfs.path().is_valid(|p| g.is_open(p)));
    }
}
