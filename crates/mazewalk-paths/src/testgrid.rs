//! A character-map grid for the search tests.

use mazewalk_core::{Point, Range};

use crate::greedy::Frontier;
use crate::traits::{GreedyGrid, SearchGrid};

pub struct AsciiGrid {
    pub range: Range,
    pub start: Point,
    pub end: Point,
    walls: Vec<bool>,
    visited: Vec<bool>,
    explored: Vec<bool>,
    parents: Vec<Option<Frontier>>,
}

impl AsciiGrid {
    /// `#` is a wall, `S` the start, `E` the end; anything else is open.
    /// Rows must have equal length.
    pub fn parse(map: &str) -> Self {
        let rows: Vec<&str> = map.lines().collect();
        let h = rows.len() as i32;
        let w = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let range = Range::sized(w, h);
        let mut walls = vec![false; range.len()];
        let mut start = Point::ZERO;
        let mut end = Point::ZERO;
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match c {
                    '#' => walls[range.index(p).unwrap()] = true,
                    'S' => start = p,
                    'E' => end = p,
                    _ => {}
                }
            }
        }
        let n = range.len();
        Self {
            range,
            start,
            end,
            walls,
            visited: vec![false; n],
            explored: vec![false; n],
            parents: vec![None; n],
        }
    }

    pub fn width(&self) -> usize {
        self.range.width() as usize
    }

    pub fn height(&self) -> usize {
        self.range.height() as usize
    }

    pub fn is_explored(&self, p: Point) -> bool {
        self.range.index(p).is_some_and(|i| self.explored[i])
    }
}

impl SearchGrid for AsciiGrid {
    fn is_open(&self, p: Point) -> bool {
        self.range.index(p).is_some_and(|i| !self.walls[i])
    }

    fn is_end(&self, p: Point) -> bool {
        p == self.end
    }

    fn is_visited(&self, p: Point) -> bool {
        self.range.index(p).is_some_and(|i| self.visited[i])
    }

    fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.range.index(p) {
            self.visited[i] = true;
        }
    }
}

impl GreedyGrid for AsciiGrid {
    fn set_parent(&mut self, p: Point, parent: Frontier) {
        if let Some(i) = self.range.index(p) {
            self.parents[i] = Some(parent);
        }
    }

    fn parent(&self, p: Point) -> Option<Frontier> {
        self.range.index(p).and_then(|i| self.parents[i])
    }

    fn mark_explored(&mut self, p: Point) {
        if let Some(i) = self.range.index(p) {
            self.explored[i] = true;
        }
    }
}
