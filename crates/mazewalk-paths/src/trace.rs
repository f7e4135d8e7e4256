use mazewalk_core::{Direction, Point};

use crate::path::Path;

/// A single replay move handed to whatever animates the walker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceMove {
    pub dir: Direction,
    pub from: Point,
    pub to: Point,
}

/// Replays a found [`Path`] one move at a time.
///
/// After a move is issued the tracer waits for [`complete_move`] before it
/// issues the next one, so a move still in flight is never skipped.
///
/// [`complete_move`]: PathTracer::complete_move
#[derive(Debug, Clone, Default)]
pub struct PathTracer {
    index: usize,
    awaiting: bool,
    active: bool,
    prev: Point,
    next: Point,
}

impl PathTracer {
    /// An idle tracer.
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle tracer parked on `origin`.
    pub fn at(origin: Point) -> Self {
        Self {
            prev: origin,
            next: origin,
            ..Self::default()
        }
    }

    /// Begin replaying `path` from its first move.
    pub fn start(&mut self, path: &Path) {
        let origin = path.first().pos;
        *self = Self {
            index: 1,
            awaiting: false,
            active: true,
            prev: origin,
            next: origin,
        };
        log::debug!("trace: replaying {} moves from {origin}", path.len() - 1);
    }

    /// Abandon the replay.
    pub fn stop(&mut self) {
        self.active = false;
        self.awaiting = false;
    }

    /// Whether a replay is in progress.
    #[inline]
    pub fn is_tracing(&self) -> bool {
        self.active
    }

    /// Whether the last issued move is still in flight.
    #[inline]
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Index of the next path entry to replay.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell the walker left on the last issued move.
    #[inline]
    pub fn prev(&self) -> Point {
        self.prev
    }

    /// Cell the walker is heading for.
    #[inline]
    pub fn next(&self) -> Point {
        self.next
    }

    /// Issue the next move of `path`, if one is due.
    ///
    /// Returns `None` while inactive or while a move is in flight. Reaching
    /// the end of `path` ends the replay.
    pub fn step(&mut self, path: &Path) -> Option<TraceMove> {
        if !self.active || self.awaiting {
            return None;
        }
        while self.index < path.len() {
            let entry = path[self.index];
            let Some(dir) = entry.dir else {
                self.index += 1;
                continue;
            };
            let from = path[self.index - 1].pos;
            self.prev = from;
            self.next = entry.pos;
            self.awaiting = true;
            return Some(TraceMove {
                dir,
                from,
                to: entry.pos,
            });
        }
        self.active = false;
        log::debug!("trace: replay finished");
        None
    }

    /// Acknowledge that the in-flight move has landed.
    pub fn complete_move(&mut self) {
        if self.awaiting {
            self.awaiting = false;
            self.index += 1;
        }
    }
}
