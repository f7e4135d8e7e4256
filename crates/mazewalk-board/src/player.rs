//! The walker that moves one fine cell at a time.

use mazewalk_core::{Direction, Point};

/// Player position and in-flight motion.
///
/// A move covers `unit_length` world units at `speed` units per second.
/// The player's grid position only changes once a move completes.
#[derive(Clone, Debug)]
pub struct Player {
    pos: Point,
    facing: Direction,
    moving: Option<Direction>,
    distance: f32,
    speed: f32,
    unit_length: f32,
}

impl Player {
    /// Direction a freshly placed player faces.
    pub const INIT_FACING: Direction = Direction::South;

    pub fn new(pos: Point, speed: f32, unit_length: f32) -> Self {
        Self {
            pos,
            facing: Self::INIT_FACING,
            moving: None,
            distance: 0.0,
            speed,
            unit_length,
        }
    }

    /// Grid position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Direction of the move in flight, if any.
    #[inline]
    pub fn moving(&self) -> Option<Direction> {
        self.moving
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving.is_some()
    }

    /// Distance covered by the move in flight.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Completed fraction of the move in flight, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.unit_length <= 0.0 {
            return 0.0;
        }
        (self.distance / self.unit_length).clamp(0.0, 1.0)
    }

    /// Start a unit move toward `dir`. Ignored while a move is in flight.
    pub fn begin_move(&mut self, dir: Direction) -> bool {
        if self.moving.is_some() {
            return false;
        }
        self.moving = Some(dir);
        self.facing = dir;
        self.distance = 0.0;
        true
    }

    /// Drop the move in flight without changing position.
    pub fn cancel(&mut self) {
        self.moving = None;
        self.distance = 0.0;
    }

    /// Put the player on `pos` facing the initial direction.
    pub fn place(&mut self, pos: Point) {
        self.cancel();
        self.pos = pos;
        self.facing = Self::INIT_FACING;
    }

    /// Advance the move in flight by `dt` seconds. Returns the new position
    /// when the move completes.
    pub fn advance(&mut self, dt: f32) -> Option<Point> {
        let dir = self.moving?;
        self.distance += dt * self.speed;
        if self.distance < self.unit_length {
            return None;
        }
        self.pos = self.pos.step(dir);
        self.moving = None;
        self.distance = 0.0;
        Some(self.pos)
    }
}
