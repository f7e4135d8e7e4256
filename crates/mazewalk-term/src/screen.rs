//! An off-screen character buffer and frame diffing.

use mazewalk_core::{Point, Range, Rgb};

/// 24-bit colour as sent to the terminal.
pub type Rgb8 = (u8, u8, u8);

/// One terminal cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub fg: Rgb8,
    pub bg: Rgb8,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: (255, 255, 255),
            bg: (0, 0, 0),
        }
    }
}

impl TermCell {
    /// A blank cell painted with `bg`.
    pub fn block(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            fg: (0, 0, 0),
            bg: bg.to_u8(),
        }
    }
}

/// A cell that changed since the previous frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Point,
    pub cell: TermCell,
}

/// The cells to write this frame. `clear` asks for a full clear first.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub clear: bool,
    pub cells: Vec<FrameCell>,
}

/// A rectangular buffer of [`TermCell`]s, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    range: Range,
    cells: Vec<TermCell>,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        let range = Range::sized(width, height);
        Self {
            range,
            cells: vec![TermCell::default(); range.len()],
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn at(&self, p: Point) -> Option<TermCell> {
        self.range.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`; ignored outside the buffer.
    pub fn set(&mut self, p: Point, cell: TermCell) {
        if let Some(i) = self.range.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: TermCell) {
        self.cells.fill(cell);
    }

    /// Write `text` from `p` rightwards, clipped to the buffer.
    pub fn text(&mut self, p: Point, text: &str, fg: Rgb8) {
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(i as i32, 0);
            self.set(
                q,
                TermCell {
                    ch,
                    fg,
                    bg: (0, 0, 0),
                },
            );
        }
    }

    /// Cells of `self` that differ from `prev`. Every cell when the sizes
    /// differ.
    pub fn diff(&self, prev: &Screen) -> Frame {
        if self.range != prev.range {
            return Frame {
                clear: true,
                cells: self
                    .range
                    .iter()
                    .zip(self.cells.iter())
                    .map(|(pos, &cell)| FrameCell { pos, cell })
                    .collect(),
            };
        }
        let cells = self
            .range
            .iter()
            .zip(self.cells.iter().zip(prev.cells.iter()))
            .filter(|(_, (a, b))| a != b)
            .map(|(pos, (&cell, _))| FrameCell { pos, cell })
            .collect();
        Frame {
            clear: false,
            cells,
        }
    }
}
