//! Floating-point colours for cell animation.

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// An RGB colour with components in `0.0..=1.0`.
///
/// Components are kept unclamped while a transition is in flight; use
/// [`clamped`](Self::clamped) before handing the colour to a renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Colour of wall cells.
    pub const WALL: Self = Self::new(0.5, 0.5, 0.5);
    /// Colour of open (walkable) cells.
    pub const OPEN: Self = Self::new(1.0, 1.0, 1.0);
    /// Colour of the next cell on a replayed path.
    pub const PATH: Self = Self::new(1.0, 1.0, 0.0);
    /// Colour of the cell currently examined by a search.
    pub const VISITING: Self = Self::new(1.0, 1.0, 0.0);
    /// First colour of a freshly visited cell; it fades toward
    /// [`VISITED`](Self::VISITED).
    pub const VISITED_INIT: Self = Self::new(1.0, 0.8, 0.0);
    /// Resting colour of a visited cell.
    pub const VISITED: Self = Self::new(0.0, 0.8, 1.0);
    /// Colour of the start marker.
    pub const START: Self = Self::new(1.0, 0.753, 0.796);
    /// Colour of the player.
    pub const PLAYER: Self = Self::new(1.0, 0.61, 0.549);

    /// Construct from individual components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Copy with every component clamped to `0.0..=1.0`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// 8-bit components, for true-colour terminals.
    #[inline]
    pub fn to_u8(self) -> (u8, u8, u8) {
        let c = self.clamped();
        (
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        )
    }
}
