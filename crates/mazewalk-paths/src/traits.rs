use mazewalk_core::Point;

use crate::greedy::Frontier;

/// Grid access needed by the depth-first stepper.
pub trait SearchGrid {
    /// Whether `p` lies inside the grid and is not a wall.
    fn is_open(&self, p: Point) -> bool;

    /// Whether `p` is the end cell.
    fn is_end(&self, p: Point) -> bool;

    /// Whether `p` was visited during the current search pass.
    fn is_visited(&self, p: Point) -> bool;

    /// Mark `p` visited.
    fn mark_visited(&mut self, p: Point);

    /// Mark a cell reached by a move: visited, and flagged for the visited
    /// colour transition.
    fn mark_discovered(&mut self, p: Point) {
        self.mark_visited(p);
    }

    /// Called once when the search settles on the end cell.
    fn reach_end(&mut self, _p: Point) {}
}

/// Grid with per-cell back-pointers, needed by greedy best-first search.
pub trait GreedyGrid: SearchGrid {
    /// Record the frontier entry that discovered `p`.
    fn set_parent(&mut self, p: Point, parent: Frontier);

    /// The frontier entry that discovered `p`, if any.
    fn parent(&self, p: Point) -> Option<Frontier>;

    /// Mark `p` as fully expanded.
    fn mark_explored(&mut self, p: Point);
}
