//! Step-at-a-time maze search for the *mazewalk* board.
//!
//! Both strategies advance by a single unit of work per call so the caller
//! can animate every discovery:
//!
//! - **DFS** with backtracking ([`DfsSearch`]), whose live stack is the path
//! - **Greedy best-first** ([`GreedySearch`]) over a [`MinHeap`] frontier,
//!   ranked by straight-line distance to the end
//!
//! A found [`Path`] is replayed move by move with a [`PathTracer`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`SearchGrid`] | DFS |
//! | [`GreedyGrid`] : [`SearchGrid`] | greedy best-first |

mod dfs;
mod greedy;
mod heap;
mod path;
mod trace;
mod traits;

#[cfg(test)]
mod testgrid;

pub use dfs::DfsSearch;
pub use greedy::{Frontier, GreedySearch};
pub use heap::{HeapKey, MinHeap};
pub use path::{Path, Step};
pub use trace::{PathTracer, TraceMove};
pub use traits::{GreedyGrid, SearchGrid};

/// Progress of a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Not stepped yet.
    #[default]
    Idle,
    Running,
    /// The end cell was reached.
    Found,
    /// Nothing reachable is left to examine.
    Exhausted,
}

impl SearchState {
    /// Whether further steps are no-ops.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}
