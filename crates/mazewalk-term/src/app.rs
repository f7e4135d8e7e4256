//! Input mapping and the application loop.

use std::error::Error;
use std::time::Instant;

use mazewalk_board::{Board, BoardConfig, Command, ResetMode};
use mazewalk_core::{Direction, Point};

use crate::driver::{Input, Key, MouseAction, TermDriver};
use crate::screen::{Frame, Screen};
use crate::view;

/// What a key asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Board(Command),
    Quit,
}

/// Key bindings.
pub fn action_for_key(key: Key) -> Option<Action> {
    let cmd = match key {
        Key::Escape | Key::Char('q') => return Some(Action::Quit),
        Key::ArrowUp => Command::MovePlayer(Direction::North),
        Key::ArrowDown => Command::MovePlayer(Direction::South),
        Key::ArrowLeft => Command::MovePlayer(Direction::West),
        Key::ArrowRight => Command::MovePlayer(Direction::East),
        Key::Char('d') => Command::StartDfs,
        Key::Char('g') => Command::StartGreedy,
        Key::Char('x') | Key::Char(' ') => Command::StopSearch,
        Key::Char('t') => Command::Trace,
        Key::Char('r') => Command::Reset(ResetMode::Initial),
        Key::Char('p') => Command::Reset(ResetMode::Pause),
        Key::Char('+') | Key::Char('=') => Command::Resize { dw: 1, dh: 1 },
        Key::Char('-') => Command::Resize { dw: -1, dh: -1 },
        Key::Char(_) => return None,
    };
    Some(Action::Board(cmd))
}

/// The terminal application: a board plus the last drawn screen.
pub struct MazeApp {
    board: Board,
    screen: Screen,
    prev: Screen,
}

impl MazeApp {
    pub fn new(board: Board) -> Self {
        let (w, h) = view::screen_size(&board);
        Self {
            board,
            screen: Screen::new(w, h),
            prev: Screen::new(0, 0),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle one input. Returns `true` when the user asked to quit.
    pub fn update(&mut self, input: Input) -> bool {
        let cmd = match input {
            Input::Key(key) => match action_for_key(key) {
                Some(Action::Quit) => return true,
                Some(Action::Board(cmd)) => cmd,
                None => return false,
            },
            Input::Mouse { action, pos } => {
                let Some(p) = view::cell_at(&self.board, pos) else {
                    return false;
                };
                match action {
                    MouseAction::Main => Command::ToggleWall(p),
                    MouseAction::Secondary => Command::SetEnd(p),
                    MouseAction::Auxiliary => Command::SetStart(p),
                }
            }
            Input::Screen { .. } => {
                // Terminal contents are lost on resize: redraw everything.
                self.prev = Screen::new(0, 0);
                return false;
            }
        };
        if !self.board.apply(cmd) {
            log::debug!("{cmd:?} rejected");
        }
        false
    }

    pub fn tick(&mut self, dt: f32) {
        self.board.tick(dt);
    }

    /// Draw the board and return what changed since the last draw.
    pub fn draw(&mut self) -> Frame {
        let (w, h) = view::screen_size(&self.board);
        if self.screen.range().size() != Point::new(w, h) {
            self.screen = Screen::new(w, h);
        }
        view::draw(&self.board, &mut self.screen);
        let frame = self.screen.diff(&self.prev);
        self.prev.clone_from(&self.screen);
        frame
    }
}

/// Run the board in the terminal until the user quits.
pub fn run(config: BoardConfig, mut driver: TermDriver) -> Result<(), Box<dyn Error>> {
    let board = Board::new(config)?;
    let mut app = MazeApp::new(board);
    driver.init()?;
    let res = event_loop(&mut app, &mut driver);
    driver.close();
    res
}

fn event_loop(app: &mut MazeApp, driver: &mut TermDriver) -> Result<(), Box<dyn Error>> {
    driver.flush(&app.draw())?;
    let mut last = Instant::now();
    loop {
        for input in driver.poll()? {
            if app.update(input) {
                return Ok(());
            }
        }
        let now = Instant::now();
        app.tick(now.duration_since(last).as_secs_f32());
        last = now;
        driver.flush(&app.draw())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MazeApp {
        let config = BoardConfig::default().with_size(3, 2).with_seed(9);
        let board = Board::with_markers(config, Point::new(0, 0), Point::new(4, 2)).unwrap();
        MazeApp::new(board)
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(action_for_key(Key::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(Key::Escape), Some(Action::Quit));
        assert_eq!(
            action_for_key(Key::ArrowLeft),
            Some(Action::Board(Command::MovePlayer(Direction::West)))
        );
        assert_eq!(
            action_for_key(Key::Char('-')),
            Some(Action::Board(Command::Resize { dw: -1, dh: -1 }))
        );
        assert_eq!(action_for_key(Key::Char('z')), None);
    }

    #[test]
    fn quit_key_ends_the_app() {
        let mut a = app();
        assert!(!a.update(Input::Key(Key::Char('d'))));
        assert!(a.board().is_running());
        assert!(a.update(Input::Key(Key::Char('q'))));
    }

    #[test]
    fn main_click_toggles_a_wall() {
        let mut a = app();
        // Column 2 is the left half of fine cell (1, 0).
        let p = Point::new(1, 0);
        let before = a.board().grid().at(p).map(|c| c.is_wall);
        a.update(Input::Mouse {
            action: MouseAction::Main,
            pos: Point::new(2, 0),
        });
        let after = a.board().grid().at(p).map(|c| c.is_wall);
        assert_eq!(after, before.map(|w| !w));
        // Clicks on the status line are ignored.
        a.update(Input::Mouse {
            action: MouseAction::Main,
            pos: Point::new(0, 5),
        });
    }

    #[test]
    fn second_draw_sends_only_changes() {
        let mut a = app();
        let first = a.draw();
        assert!(first.clear);
        assert_eq!(first.cells.len(), 12 * 6);
        assert!(a.draw().cells.is_empty());
        a.update(Input::Screen {
            width: 80,
            height: 24,
        });
        assert!(a.draw().clear);
    }

    #[test]
    fn resize_key_grows_the_screen() {
        let mut a = app();
        a.draw();
        a.update(Input::Key(Key::Char('+')));
        assert_eq!(a.board().width(), 4);
        let frame = a.draw();
        assert!(frame.clear);
        assert_eq!(frame.cells.len(), 8 * 2 * 8);
    }
}
