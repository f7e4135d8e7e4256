//! The board: maze, markers, player, searches and replay.

use std::fmt;

use mazewalk_core::{Direction, Point, Range};
use mazewalk_gen::{CoarseGrid, Maze};
use mazewalk_paths::{DfsSearch, GreedySearch, Path, PathTracer, SearchGrid, SearchState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::FineCell;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::grid::FineGrid;
use crate::player::Player;

// ---------------------------------------------------------------------------
// Commands and views
// ---------------------------------------------------------------------------

/// A search strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Greedy,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Greedy => write!(f, "greedy best-first"),
        }
    }
}

/// Where the player goes on reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetMode {
    /// Back to the start chosen at generation (or by the last
    /// [`Command::SetStart`]).
    Initial,
    /// Stay put; the player's cell becomes the new start.
    Pause,
}

/// Input accepted by [`Board::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    StartDfs,
    StartGreedy,
    StopSearch,
    MovePlayer(Direction),
    ToggleWall(Point),
    SetStart(Point),
    SetEnd(Point),
    Resize { dw: i32, dh: i32 },
    Reset(ResetMode),
    Trace,
}

/// Snapshot of search and replay progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Cell the search is looking at.
    pub cursor: Point,
    pub found_end: bool,
    /// `false` once a search ran out of cells.
    pub path_exists: bool,
    pub tracing: bool,
    /// Cell the replay is heading for.
    pub next: Point,
    pub running: Option<Algorithm>,
    /// Entries in the current path, origin included.
    pub path_len: usize,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A generated maze and everything that moves on it.
///
/// The board only advances when told to: [`tick`](Self::tick) feeds it
/// elapsed time and [`apply`](Self::apply) feeds it commands.
pub struct Board {
    config: BoardConfig,
    rng: StdRng,
    coarse: CoarseGrid,
    grid: FineGrid,
    player: Player,
    start: Point,
    end: Point,
    init_start: Point,
    dfs: DfsSearch,
    greedy: GreedySearch,
    running: Option<Algorithm>,
    // Algorithm started since the last reset; its path is the board's path.
    searched: Option<Algorithm>,
    tracer: PathTracer,
    found_end: bool,
    path_exists: bool,
    elapsed: f32,
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn active_path<'a>(
    searched: Option<Algorithm>,
    dfs: &'a DfsSearch,
    greedy: &'a GreedySearch,
) -> &'a Path {
    match searched {
        Some(Algorithm::Greedy) => greedy.path(),
        _ => dfs.path(),
    }
}

impl Board {
    /// Generate a maze and place start and end on two random distinct open
    /// cells.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let rng = seeded(config.seed);
        Self::generate(config, rng)
    }

    /// Generate a maze with start and end at the given cells.
    pub fn with_markers(config: BoardConfig, start: Point, end: Point) -> Result<Self, BoardError> {
        config.validate()?;
        let mut rng = seeded(config.seed);
        let maze = Maze::generate(config.width, config.height, &mut rng);
        if start == end || maze.walls.is_wall(start) || maze.walls.is_wall(end) {
            return Err(BoardError::BadPlacement { start, end });
        }
        Ok(Self::assemble(config, rng, maze, start, end))
    }

    fn generate(config: BoardConfig, mut rng: StdRng) -> Result<Self, BoardError> {
        let maze = Maze::generate(config.width, config.height, &mut rng);
        let open: Vec<Point> = maze.walls.open_cells().collect();
        if open.len() < 2 {
            return Err(BoardError::NoRoom);
        }
        let picks = rand::seq::index::sample(&mut rng, open.len(), 2);
        let (start, end) = (open[picks.index(0)], open[picks.index(1)]);
        Ok(Self::assemble(config, rng, maze, start, end))
    }

    fn assemble(config: BoardConfig, rng: StdRng, maze: Maze, start: Point, end: Point) -> Self {
        let mut grid = FineGrid::from_mask(&maze.walls);
        grid.update(end, |c| c.is_end = true);
        log::info!(
            "generated {}x{} maze: {} open cells, start {start}, end {end}",
            config.width,
            config.height,
            grid.open_count()
        );
        let player = Player::new(start, config.player_speed, config.unit_length);
        let mut board = Self {
            config,
            rng,
            coarse: maze.coarse,
            grid,
            player,
            start,
            end,
            init_start: start,
            dfs: DfsSearch::new(start),
            greedy: GreedySearch::new(start, end),
            running: None,
            searched: None,
            tracer: PathTracer::at(start),
            found_end: false,
            path_exists: true,
            elapsed: 0.0,
        };
        board.reset(ResetMode::Initial);
        board
    }

    // -------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Coarse maze width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.config.width
    }

    /// Coarse maze height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// Bounds of the walkable grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.grid.range()
    }

    /// The carved maze the walkable grid was projected from.
    #[inline]
    pub fn coarse(&self) -> &CoarseGrid {
        &self.coarse
    }

    #[inline]
    pub fn grid(&self) -> &FineGrid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Where [`ResetMode::Initial`] puts the player.
    #[inline]
    pub fn init_start(&self) -> Point {
        self.init_start
    }

    /// Every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &FineCell)> + '_ {
        self.grid.iter()
    }

    /// The DFS stack, or the greedy route once found.
    pub fn path(&self) -> &Path {
        active_path(self.searched, &self.dfs, &self.greedy)
    }

    /// Cell the search is looking at; the start before any search.
    pub fn cursor(&self) -> Point {
        match self.searched {
            Some(Algorithm::Dfs) => self.dfs.cursor(),
            Some(Algorithm::Greedy) => self.greedy.cursor(),
            None => self.start,
        }
    }

    #[inline]
    pub fn running(&self) -> Option<Algorithm> {
        self.running
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    #[inline]
    pub fn is_found_end(&self) -> bool {
        self.found_end
    }

    #[inline]
    pub fn is_path_exists(&self) -> bool {
        self.path_exists
    }

    #[inline]
    pub fn is_tracing(&self) -> bool {
        self.tracer.is_tracing()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            cursor: self.cursor(),
            found_end: self.found_end,
            path_exists: self.path_exists,
            tracing: self.tracer.is_tracing(),
            next: self.tracer.next(),
            running: self.running,
            path_len: self.path().len(),
        }
    }

    // -------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------

    /// Advance animations and the player by `dt` seconds, and take one
    /// search or replay step whenever a full step interval has gone by.
    pub fn tick(&mut self, dt: f32) {
        let cursor = self.cursor();
        let next = self.tracer.is_tracing().then(|| self.tracer.next());
        self.grid
            .update_appearance(dt, cursor, next, self.config.scale_rate);

        self.advance_player(dt);

        self.elapsed += dt;
        if self.elapsed >= self.config.step_interval {
            self.elapsed = 0.0;
            self.step();
        }
    }

    /// Take one step of the running search, or else one replay step.
    pub fn step(&mut self) {
        if let Some(alg) = self.running {
            self.step_search(alg);
        } else if self.tracer.is_tracing() {
            self.step_trace();
        }
    }

    fn step_search(&mut self, alg: Algorithm) {
        let state = match alg {
            Algorithm::Dfs => self.dfs.step(&mut self.grid),
            Algorithm::Greedy => self.greedy.step(&mut self.grid),
        };
        match state {
            SearchState::Found => {
                self.running = None;
                self.found_end = true;
                log::info!(
                    "{alg} reached {} in {} moves",
                    self.end,
                    self.path().len() - 1
                );
                if self.config.auto_trace {
                    self.trace();
                }
            }
            SearchState::Exhausted => {
                self.running = None;
                self.path_exists = false;
                log::info!("{alg}: no path from {} to {}", self.start, self.end);
            }
            SearchState::Idle | SearchState::Running => {}
        }
    }

    fn step_trace(&mut self) {
        let path = active_path(self.searched, &self.dfs, &self.greedy);
        let Some(mv) = self.tracer.step(path) else {
            return;
        };
        self.grid.update(mv.from, FineCell::begin_scale);
        if !self.player.begin_move(mv.dir) {
            log::warn!("replay: player busy at {}, stopping", self.player.pos());
            self.tracer.stop();
            return;
        }
        log::trace!("replay: {} {} -> {}", mv.dir, mv.from, mv.to);
    }

    fn advance_player(&mut self, dt: f32) {
        let Some(dir) = self.player.moving() else {
            return;
        };
        let from = self.player.pos();
        let dest = from.step(dir);
        if !self.grid.is_open(dest) {
            self.player.cancel();
            if self.tracer.is_tracing() {
                log::warn!("replay blocked at {dest}, stopping");
                self.tracer.stop();
            } else {
                log::debug!("move to {dest} blocked");
            }
            return;
        }
        let Some(to) = self.player.advance(dt) else {
            return;
        };
        self.grid.update(from, |c| c.is_player = false);
        self.grid.update(to, |c| c.is_player = true);
        if self.searched.is_none() {
            self.follow_player(to);
        }
        if self.tracer.is_tracing() {
            self.tracer.complete_move();
        }
    }

    // The start marker and both search roots follow the player until a
    // search begins.
    fn follow_player(&mut self, to: Point) {
        self.grid.update(self.start, |c| c.is_start = false);
        self.start = to;
        self.grid.update(to, |c| c.is_start = true);
        self.dfs.move_start(to);
        self.greedy.move_start(to);
        self.tracer = PathTracer::at(to);
    }

    fn place_player(&mut self, p: Point) {
        self.grid.update(self.player.pos(), |c| c.is_player = false);
        self.player.place(p);
        self.grid.update(p, |c| c.is_player = true);
    }

    // -------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------

    /// Apply a command. Returns `false` when it was rejected.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::StartDfs => self.start_search(Algorithm::Dfs),
            Command::StartGreedy => self.start_search(Algorithm::Greedy),
            Command::StopSearch => self.stop_search(),
            Command::MovePlayer(dir) => self.move_player(dir),
            Command::ToggleWall(p) => self.toggle_wall(p),
            Command::SetStart(p) => self.set_start(p),
            Command::SetEnd(p) => self.set_end(p),
            Command::Resize { dw, dh } => match self.resize(dw, dh) {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("resize rejected: {e}");
                    false
                }
            },
            Command::Reset(mode) => {
                self.reset(mode);
                true
            }
            Command::Trace => self.trace(),
        }
    }

    /// Start or resume `alg`.
    ///
    /// Rejected while a search runs or a replay plays, after a search has
    /// finished, and when the other algorithm has already been started since
    /// the last reset.
    pub fn start_search(&mut self, alg: Algorithm) -> bool {
        if let Some(r) = self.running {
            log::debug!("start {alg}: {r} already running");
            return false;
        }
        if self.found_end || !self.path_exists || self.tracer.is_tracing() {
            log::debug!("start {alg}: search already finished, reset first");
            return false;
        }
        if let Some(prev) = self.searched.filter(|&prev| prev != alg) {
            log::debug!("start {alg}: {prev} in progress, reset first");
            return false;
        }
        self.running = Some(alg);
        self.searched = Some(alg);
        log::debug!("{alg} started from {}", self.start);
        true
    }

    /// Pause the running search.
    pub fn stop_search(&mut self) -> bool {
        match self.running.take() {
            Some(alg) => {
                log::debug!("{alg} stopped at {}", self.cursor());
                true
            }
            None => false,
        }
    }

    /// Begin a one-cell player move. Rejected while a move is in flight,
    /// during a replay, or toward a cell that is not open.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        let dest = self.player.pos().step(dir);
        if self.tracer.is_tracing() || self.player.is_moving() || !self.grid.is_open(dest) {
            log::debug!("move {dir} to {dest} rejected");
            return false;
        }
        self.player.begin_move(dir)
    }

    /// Flip the wall flag at `p`. Refused on the start, the end, the
    /// player and the initial start, where `Reset(Initial)` lands.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        if p == self.init_start {
            log::debug!("toggle {p}: initial start");
            return false;
        }
        let Some(cell) = self.grid.at_mut(p) else {
            log::debug!("toggle {p}: outside the grid");
            return false;
        };
        if cell.is_start || cell.is_end || cell.is_player {
            log::debug!("toggle {p}: cell holds a marker");
            return false;
        }
        let wall = !cell.is_wall;
        cell.set_wall(wall);
        log::debug!("toggle {p}: wall = {wall}");
        true
    }

    /// Move the start and the player to `p` and reset. `p` also becomes the
    /// initial position.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !self.grid.is_open(p) || p == self.end {
            log::debug!("set start {p} rejected");
            return false;
        }
        self.init_start = p;
        self.place_player(p);
        self.reset(ResetMode::Initial);
        true
    }

    /// Move the end to `p` and reset, keeping the player where it stands.
    pub fn set_end(&mut self, p: Point) -> bool {
        if !self.grid.is_open(p)
            || p == self.start
            || p == self.player.pos()
            || p == self.init_start
        {
            log::debug!("set end {p} rejected");
            return false;
        }
        self.grid.update(self.end, |c| c.is_end = false);
        self.end = p;
        self.grid.update(p, |c| c.is_end = true);
        self.reset(ResetMode::Pause);
        true
    }

    /// Regenerate with the coarse size changed by `(dw, dh)`. On error the
    /// board is left untouched.
    pub fn resize(&mut self, dw: i32, dh: i32) -> Result<(), BoardError> {
        let config = self.config.clone().with_size(
            self.config.width.saturating_add(dw),
            self.config.height.saturating_add(dh),
        );
        config.validate()?;
        let rng = StdRng::seed_from_u64(self.rng.random());
        *self = Self::generate(config, rng)?;
        Ok(())
    }

    /// Abort any search or replay and clear search state.
    pub fn reset(&mut self, mode: ResetMode) {
        self.grid.reset();
        match mode {
            ResetMode::Pause => self.player.cancel(),
            ResetMode::Initial => self.player.place(self.init_start),
        }
        let start = self.player.pos();
        self.start = start;
        self.grid.update(start, |c| {
            c.is_player = true;
            c.is_start = true;
        });
        self.dfs.reset(start);
        self.greedy.reset(start, self.end);
        self.running = None;
        self.searched = None;
        self.tracer = PathTracer::at(start);
        self.found_end = false;
        self.path_exists = true;
        self.elapsed = 0.0;
        log::debug!("reset ({mode:?}): start {start}, end {}", self.end);
    }

    /// Replay the found path from its origin.
    pub fn trace(&mut self) -> bool {
        if !self.found_end || self.running.is_some() || self.tracer.is_tracing() {
            log::debug!("trace rejected: no finished path");
            return false;
        }
        let origin = self.path().first().pos;
        if self.player.pos() != origin {
            self.place_player(origin);
        }
        self.tracer
            .start(active_path(self.searched, &self.dfs, &self.greedy));
        true
    }
}
