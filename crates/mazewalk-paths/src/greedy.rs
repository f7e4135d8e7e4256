use mazewalk_core::{Direction, Point};

use crate::heap::{HeapKey, MinHeap};
use crate::path::{Path, Step};
use crate::traits::GreedyGrid;
use crate::SearchState;

/// A frontier entry: the move that discovered `pos` and the heuristic
/// distance from `pos` to the end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frontier {
    pub dir: Option<Direction>,
    pub pos: Point,
    pub dist: f64,
}

impl Frontier {
    /// The step this entry records.
    #[inline]
    pub fn step(&self) -> Step {
        Step {
            dir: self.dir,
            pos: self.pos,
        }
    }
}

impl HeapKey for Frontier {
    fn key(&self) -> f64 {
        self.dist
    }
}

/// Greedy best-first search, advanced one discovery per [`step`].
///
/// Cells are ranked by straight-line distance to the end, so the route found
/// is generally not the shortest one.
///
/// A call either selects the next cell to expand (and discovers its first
/// free neighbour), discovers one more neighbour of the cell under
/// expansion, or retires that cell once it has no free neighbour left.
///
/// [`step`]: GreedySearch::step
#[derive(Debug, Clone)]
pub struct GreedySearch {
    start: Point,
    goal: Point,
    heap: MinHeap<Frontier>,
    expanding: Option<Frontier>,
    cursor: Point,
    path: Path,
    state: SearchState,
    expansions: usize,
}

impl GreedySearch {
    /// A fresh search from `start` toward `goal`.
    pub fn new(start: Point, goal: Point) -> Self {
        let mut heap = MinHeap::new();
        heap.push(Frontier {
            dir: None,
            pos: start,
            dist: start.distance(goal),
        });
        Self {
            start,
            goal,
            heap,
            expanding: None,
            cursor: start,
            path: Path::new(start),
            state: SearchState::Idle,
            expansions: 0,
        }
    }

    /// Discard all progress and search again from `start` toward `goal`.
    pub fn reset(&mut self, start: Point, goal: Point) {
        *self = Self::new(start, goal);
    }

    /// Re-root a search that has not been stepped yet, replacing the
    /// frontier root. Returns `false` and changes nothing once stepping has
    /// begun.
    pub fn move_start(&mut self, start: Point) -> bool {
        if self.state != SearchState::Idle {
            return false;
        }
        self.start = start;
        self.cursor = start;
        self.path.set_origin(start);
        self.heap.replace_root(Frontier {
            dir: None,
            pos: start,
            dist: start.distance(self.goal),
        });
        true
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Most recently discovered cell.
    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// The reconstructed route once `Found`; only the origin before that.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The frontier.
    #[inline]
    pub fn frontier(&self) -> &MinHeap<Frontier> {
        &self.heap
    }

    /// The cell whose neighbours are being enqueued, if any.
    #[inline]
    pub fn expanding(&self) -> Option<Point> {
        self.expanding.map(|f| f.pos)
    }

    /// Number of cells popped from the frontier so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Advance by one discovery.
    ///
    /// Once the search is `Found` or `Exhausted` further calls change
    /// nothing.
    pub fn step<G: GreedyGrid>(&mut self, grid: &mut G) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = SearchState::Running;

        let current = match self.expanding {
            Some(f) => f,
            None => {
                let Some(f) = self.heap.pop() else {
                    self.state = SearchState::Exhausted;
                    log::trace!("greedy: frontier exhausted");
                    return self.state;
                };
                // Only the root can still be unvisited here.
                grid.mark_visited(f.pos);
                self.expansions += 1;
                self.expanding = Some(f);
                log::trace!("greedy: expanding {} (d = {:.3})", f.pos, f.dist);
                f
            }
        };

        if grid.is_end(current.pos) {
            grid.reach_end(current.pos);
            self.path = self.reconstruct(grid, current.pos);
            self.expanding = None;
            self.state = SearchState::Found;
            log::trace!("greedy: end reached at {}", current.pos);
            return self.state;
        }

        let next = Direction::SEARCH_ORDER
            .into_iter()
            .map(|d| (d, current.pos.step(d)))
            .find(|&(_, p)| grid.is_open(p) && !grid.is_visited(p));

        match next {
            Some((dir, p)) => {
                grid.mark_discovered(p);
                grid.set_parent(p, current);
                self.heap.push(Frontier {
                    dir: Some(dir),
                    pos: p,
                    dist: p.distance(self.goal),
                });
                self.cursor = p;
            }
            None => {
                grid.mark_explored(current.pos);
                self.expanding = None;
            }
        }
        self.state
    }

    /// Step until the search terminates or `max_steps` is spent.
    pub fn run<G: GreedyGrid>(&mut self, grid: &mut G, max_steps: usize) -> SearchState {
        for _ in 0..max_steps {
            if self.step(grid).is_terminal() {
                break;
            }
        }
        self.state
    }

    /// Follow back-pointers from `end` to the start and lay the chain out
    /// start-first, then append the final move into `end`.
    fn reconstruct<G: GreedyGrid>(&self, grid: &G, end: Point) -> Path {
        let mut chain: Vec<Step> = Vec::new();
        let mut cur = end;
        while cur != self.start {
            let Some(parent) = grid.parent(cur) else {
                log::warn!("greedy: broken back-pointer chain at {cur}");
                break;
            };
            chain.push(parent.step());
            cur = parent.pos;
        }
        chain.reverse();

        let mut path = Path::new(self.start);
        // The first link is the start itself.
        for step in chain.into_iter().filter(|s| s.pos != self.start) {
            path.push(step);
        }
        if let Some(dir) = Direction::between(path.last().pos, end) {
            path.push(Step::new(dir, end));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::AsciiGrid;
    use crate::traits::SearchGrid;

    #[test]
    fn first_step_pops_root_and_discovers_a_neighbour() {
        let mut g = AsciiGrid::parse(
            "\
...
.S.
..E",
        );
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert_eq!(gbfs.frontier().len(), 1);
        gbfs.step(&mut g);
        assert_eq!(gbfs.expansions(), 1);
        assert_eq!(gbfs.expanding(), Some(g.start));
        // North is discovered first.
        assert_eq!(gbfs.cursor(), Point::new(1, 0));
        assert_eq!(gbfs.frontier().len(), 1);
        assert!(g.is_visited(g.start));
    }

    #[test]
    fn enqueues_every_neighbour_before_selecting_again() {
        let mut g = AsciiGrid::parse(
            "\
...
.S.
..E",
        );
        let mut gbfs = GreedySearch::new(g.start, g.end);
        for _ in 0..4 {
            gbfs.step(&mut g);
        }
        assert_eq!(gbfs.frontier().len(), 4);
        assert_eq!(gbfs.expanding(), Some(g.start));
        // Fifth call finds nothing new and retires the start.
        gbfs.step(&mut g);
        assert_eq!(gbfs.expanding(), None);
        assert!(g.is_explored(g.start));
        // Sixth call selects the neighbour closest to the end: south (1, 2)
        // and east (2, 1) tie at distance 1.0.
        gbfs.step(&mut g);
        let picked = gbfs.expanding().unwrap();
        assert!(picked == Point::new(1, 2) || picked == Point::new(2, 1));
    }

    #[test]
    fn reconstructs_route_with_final_move_into_end() {
        let mut g = AsciiGrid::parse(
            "\
S.#.
#.#.
#...
##.E",
        );
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert_eq!(gbfs.run(&mut g, 200), SearchState::Found);
        let path = gbfs.path();
        assert_eq!(path.first(), Step::origin(g.start));
        assert_eq!(path.last().pos, g.end);
        assert!(path.is_valid(|p| g.is_open(p)));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn adjacent_end_yields_two_entry_path() {
        let mut g = AsciiGrid::parse("SE");
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert_eq!(gbfs.run(&mut g, 10), SearchState::Found);
        let steps: Vec<Step> = gbfs.path().iter().copied().collect();
        assert_eq!(
            steps,
            vec![
                Step::origin(Point::new(0, 0)),
                Step::new(Direction::East, Point::new(1, 0)),
            ]
        );
    }

    #[test]
    fn exhausts_when_unreachable() {
        let mut g = AsciiGrid::parse(
            "\
S.#..
..#.E",
        );
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert_eq!(gbfs.run(&mut g, 100), SearchState::Exhausted);
        assert!(!gbfs.path().has_moves());
        assert!(gbfs.frontier().is_empty());
        assert_eq!(gbfs.step(&mut g), SearchState::Exhausted);
    }

    #[test]
    fn expansions_are_bounded_by_cell_count() {
        let mut g = AsciiGrid::parse(
            "\
S....#....
.###.#.##.
...#...#..
##.#####.#
.........E",
        );
        let cells = g.width() * g.height();
        let mut gbfs = GreedySearch::new(g.start, g.end);
        let state = gbfs.run(&mut g, 10 * cells);
        assert_eq!(state, SearchState::Found);
        assert!(gbfs.expansions() <= cells);
        assert!(gbfs.path().is_valid(|p| g.is_open(p)));
    }

    #[test]
    fn move_start_replaces_the_root() {
        let mut g = AsciiGrid::parse("S..E");
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert!(gbfs.move_start(Point::new(2, 0)));
        assert_eq!(gbfs.frontier().len(), 1);
        assert_eq!(gbfs.frontier().peek().map(|f| f.pos), Some(Point::new(2, 0)));
        assert_eq!(gbfs.run(&mut g, 10), SearchState::Found);
        assert_eq!(gbfs.path().len(), 2);
        assert!(!gbfs.move_start(Point::ZERO));
    }

    #[test]
    fn start_on_end_keeps_only_origin() {
        let mut g = AsciiGrid::parse("S.");
        g.end = g.start;
        let mut gbfs = GreedySearch::new(g.start, g.end);
        assert_eq!(gbfs.step(&mut g), SearchState::Found);
        assert_eq!(gbfs.path().len(), 1);
    }
}
