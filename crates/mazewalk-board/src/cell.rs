//! Fine grid cells and their appearance animation.

use mazewalk_core::Rgb;
use mazewalk_paths::Frontier;

/// Scale of a cell at rest.
pub const DEFAULT_SCALE: f32 = 0.8;
/// Scale a cell shrinks to when a replayed move leaves it.
pub const INIT_SCALE: f32 = 0.32;
/// Scale at which the grow-back stops.
pub const MAX_SCALE: f32 = 0.8;

/// What the board currently points at on a cell, for
/// [`FineCell::update_appearance`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    /// The search cursor sits here.
    Cursor,
    /// The replay is heading here.
    NextOnPath,
}

/// One unit of the walkable grid.
///
/// Search flags are public; colour and scale are driven through
/// [`update_appearance`](Self::update_appearance) and read back through
/// accessors.
#[derive(Clone, Debug)]
pub struct FineCell {
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_player: bool,
    pub is_visited: bool,
    /// Greedy search only: every neighbour has been enqueued.
    pub is_explored: bool,
    /// Greedy search back-pointer.
    pub parent: Option<Frontier>,
    // The colour the cell rests at; the visited fade rewrites it.
    rgb: Rgb,
    // The colour shown this frame.
    color: Rgb,
    is_changing_color: bool,
    fade_started: bool,
    scale: f32,
    is_scaling: bool,
    scale_started: bool,
    is_shown: bool,
}

impl FineCell {
    /// A cell with its resting colour set.
    pub fn new(is_wall: bool) -> Self {
        let rgb = Self::base_for(is_wall);
        Self {
            is_wall,
            is_start: false,
            is_end: false,
            is_player: false,
            is_visited: false,
            is_explored: false,
            parent: None,
            rgb,
            color: rgb,
            is_changing_color: false,
            fade_started: false,
            scale: DEFAULT_SCALE,
            is_scaling: false,
            scale_started: false,
            is_shown: true,
        }
    }

    fn base_for(is_wall: bool) -> Rgb {
        if is_wall { Rgb::WALL } else { Rgb::OPEN }
    }

    /// Wall grey or open white, depending on the wall flag.
    #[inline]
    pub fn base_color(&self) -> Rgb {
        Self::base_for(self.is_wall)
    }

    /// Colour shown this frame.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Whether the visited fade is running.
    #[inline]
    pub fn is_changing_color(&self) -> bool {
        self.is_changing_color
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn is_scaling(&self) -> bool {
        self.is_scaling
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    /// Whether the cell can be walked on.
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.is_wall
    }

    /// Set the wall flag and snap both colours to the matching base.
    pub fn set_wall(&mut self, is_wall: bool) {
        self.is_wall = is_wall;
        self.rgb = self.base_color();
        self.color = self.rgb;
    }

    /// Start the visited fade on the next update.
    pub fn begin_fade(&mut self) {
        self.is_changing_color = true;
    }

    /// Cancel a pending or running visited fade.
    pub fn stop_fade(&mut self) {
        self.is_changing_color = false;
    }

    /// Shrink and grow back on the following updates.
    pub fn begin_scale(&mut self) {
        self.is_scaling = true;
        self.scale_started = false;
    }

    /// Clear search and animation state for a fresh pass. The wall and end
    /// flags survive; start and player markers are dropped.
    pub fn reset(&mut self) {
        self.rgb = self.base_color();
        self.color = self.rgb;
        self.is_shown = true;
        self.is_start = false;
        self.is_player = false;
        self.is_visited = false;
        self.is_explored = false;
        self.parent = None;
        self.is_changing_color = false;
        self.fade_started = false;
        self.is_scaling = false;
        self.scale_started = false;
        self.scale = DEFAULT_SCALE;
    }

    /// Advance colour and scale by `dt` seconds.
    ///
    /// The end cell keeps its look.
    pub fn update_appearance(&mut self, dt: f32, focus: Focus, scale_rate: f32) {
        if self.is_end {
            return;
        }
        match focus {
            Focus::NextOnPath => {
                self.rgb = Rgb::PATH;
                self.color = self.rgb;
            }
            Focus::Cursor if !self.is_player => self.color = Rgb::VISITING,
            _ if self.is_changing_color => self.fade(dt),
            _ => {
                self.color = self.rgb;
                self.is_shown = true;
            }
        }

        if self.is_scaling {
            if !self.scale_started {
                self.scale = INIT_SCALE;
                self.scale_started = true;
            }
            self.scale = (self.scale + dt * scale_rate).min(MAX_SCALE);
            if self.scale >= MAX_SCALE {
                self.is_scaling = false;
            }
        }
    }

    fn fade(&mut self, dt: f32) {
        if !self.fade_started {
            self.rgb = Rgb::VISITED_INIT;
            self.fade_started = true;
        }
        self.rgb.r -= dt;
        self.rgb.b += dt;
        self.color = self.rgb.clamped();
        if self.rgb.r <= 0.0 || self.rgb.b >= 1.0 {
            self.rgb.r = 0.0;
            self.rgb.b = 1.0;
            self.is_changing_color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_fade_runs_from_amber_to_blue() {
        let mut c = FineCell::new(false);
        c.begin_fade();
        c.update_appearance(0.25, Focus::None, 1.0);
        assert_eq!(c.color(), Rgb::new(0.75, 0.8, 0.25));
        assert!(c.is_changing_color());
        c.update_appearance(0.5, Focus::None, 1.0);
        c.update_appearance(0.5, Focus::None, 1.0);
        assert!(!c.is_changing_color());
        // Settles on the resting visited colour.
        c.update_appearance(0.1, Focus::None, 1.0);
        assert_eq!(c.color(), Rgb::VISITED);
    }

    #[test]
    fn focus_takes_priority_over_fade() {
        let mut c = FineCell::new(false);
        c.begin_fade();
        c.update_appearance(0.1, Focus::Cursor, 1.0);
        assert_eq!(c.color(), Rgb::VISITING);

        c.is_player = true;
        c.update_appearance(0.1, Focus::Cursor, 1.0);
        assert_ne!(c.color(), Rgb::VISITING);

        c.update_appearance(0.1, Focus::NextOnPath, 1.0);
        assert_eq!(c.color(), Rgb::PATH);
    }

    #[test]
    fn scale_drops_then_grows_to_max() {
        let mut c = FineCell::new(false);
        assert_eq!(c.scale(), DEFAULT_SCALE);
        c.begin_scale();
        c.update_appearance(0.0, Focus::None, 1.0);
        assert_eq!(c.scale(), INIT_SCALE);
        c.update_appearance(0.25, Focus::None, 1.0);
        assert!((c.scale() - 0.57).abs() < 1e-6);
        c.update_appearance(1.0, Focus::None, 1.0);
        assert_eq!(c.scale(), MAX_SCALE);
        assert!(!c.is_scaling());
    }

    #[test]
    fn end_cell_never_animates() {
        let mut c = FineCell::new(false);
        c.is_end = true;
        c.begin_fade();
        c.begin_scale();
        c.update_appearance(0.5, Focus::Cursor, 1.0);
        assert_eq!(c.color(), Rgb::OPEN);
        assert_eq!(c.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn reset_keeps_wall_and_end() {
        let mut c = FineCell::new(false);
        c.is_end = true;
        c.is_start = true;
        c.is_visited = true;
        c.set_wall(true);
        c.reset();
        assert!(c.is_wall && c.is_end);
        assert!(!c.is_start && !c.is_visited);
        assert_eq!(c.color(), Rgb::WALL);
    }
}
