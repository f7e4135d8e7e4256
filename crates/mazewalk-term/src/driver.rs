//! Crossterm terminal driver.
//!
//! Owns raw mode, the alternate screen and mouse capture, turns crossterm
//! events into [`Input`]s and writes [`Frame`]s.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazewalk_core::Point;

use crate::screen::{Frame, Rgb8};

/// Keys the front end reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Mouse buttons, by role.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseAction {
    Main,
    Secondary,
    Auxiliary,
}

/// A decoded terminal event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Mouse { action: MouseAction, pos: Point },
    Screen { width: i32, height: i32 },
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
            to_key(code).map(Input::Key)
        }
        Event::Mouse(me) => {
            let MouseEventKind::Down(btn) = me.kind else {
                return None;
            };
            let action = match btn {
                MouseButton::Left => MouseAction::Main,
                MouseButton::Right => MouseAction::Secondary,
                MouseButton::Middle => MouseAction::Auxiliary,
            };
            Some(Input::Mouse {
                action,
                pos: Point::new(i32::from(me.column), i32::from(me.row)),
            })
        }
        Event::Resize(w, h) => Some(Input::Screen {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

fn to_ct_color((r, g, b): Rgb8) -> CtColor {
    CtColor::Rgb { r, g, b }
}

/// A terminal back-end using crossterm.
pub struct TermDriver {
    mouse_enabled: bool,
    poll_timeout: Duration,
}

impl TermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            poll_timeout: Duration::from_millis(16),
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Longest wait for the first event of a poll.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Wait up to the poll timeout for input, then drain whatever is queued.
    pub fn poll(&mut self) -> io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        if !event::poll(self.poll_timeout)? {
            return Ok(inputs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(input) = to_input(event::read()?) {
                inputs.push(input);
            }
        }
        Ok(inputs)
    }

    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout();
        if frame.clear {
            queue!(stdout, ResetColor, terminal::Clear(ClearType::All))?;
        }
        for fc in &frame.cells {
            let (Ok(x), Ok(y)) = (u16::try_from(fc.pos.x), u16::try_from(fc.pos.y)) else {
                continue;
            };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(fc.cell.fg)),
                SetBackgroundColor(to_ct_color(fc.cell.bg)),
                Print(fc.cell.ch)
            )?;
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()
    }

    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for TermDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    #[test]
    fn key_releases_are_dropped() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        assert_eq!(to_input(press), Some(Input::Key(Key::Char('d'))));

        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(to_input(Event::Key(release)), None);
        let tab = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(to_input(tab), None);
    }

    #[test]
    fn mouse_buttons_map_to_roles() {
        let ev = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 7,
                row: 3,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            to_input(ev(MouseEventKind::Down(MouseButton::Right))),
            Some(Input::Mouse {
                action: MouseAction::Secondary,
                pos: Point::new(7, 3)
            })
        );
        assert_eq!(to_input(ev(MouseEventKind::Moved)), None);
        assert_eq!(
            to_input(Event::Resize(80, 24)),
            Some(Input::Screen {
                width: 80,
                height: 24
            })
        );
    }
}
