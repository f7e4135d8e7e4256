//! Drawing a [`Board`] into a [`Screen`].
//!
//! Each fine cell takes two columns so the maze looks roughly square. The
//! two lines below the maze hold the status and the key help.

use mazewalk_board::{Board, FineCell, MAX_SCALE};
use mazewalk_core::{Direction, Point, Rgb};

use crate::screen::{Rgb8, Screen, TermCell};

/// Columns per fine cell.
pub const CELL_COLUMNS: i32 = 2;

const HELP: &str = "arrows move  d dfs  g greedy  x stop  t trace  r reset  p pause  +/- size  q quit";

/// Screen size needed to draw `board`.
pub fn screen_size(board: &Board) -> (i32, i32) {
    let r = board.range();
    (r.width() * CELL_COLUMNS, r.height() + 2)
}

/// Fine cell under terminal position `pos`, if any.
pub fn cell_at(board: &Board, pos: Point) -> Option<Point> {
    if pos.x < 0 {
        return None;
    }
    let p = Point::new(pos.x / CELL_COLUMNS, pos.y);
    board.range().contains(p).then_some(p)
}

fn glyphs(c: &FineCell) -> ([char; 2], Rgb8) {
    if c.is_end {
        (['[', ']'], (200, 0, 0))
    } else if c.is_start {
        (['S', ' '], (80, 40, 40))
    } else if c.is_scaling() && c.scale() < MAX_SCALE {
        (['.', '.'], (60, 60, 60))
    } else {
        ([' ', ' '], (0, 0, 0))
    }
}

fn put(screen: &mut Screen, p: Point, chars: [char; 2], fg: Rgb8, bg: Rgb8) {
    for (i, ch) in chars.into_iter().enumerate() {
        screen.set(
            Point::new(p.x * CELL_COLUMNS + i as i32, p.y),
            TermCell { ch, fg, bg },
        );
    }
}

fn facing_arrow(dir: Direction) -> char {
    match dir {
        Direction::North => '^',
        Direction::South => 'v',
        Direction::East => '>',
        Direction::West => '<',
    }
}

/// Where to draw the player: its cell, or the next one once a move is
/// more than half done.
fn player_cell(board: &Board) -> Point {
    let player = board.player();
    match player.moving() {
        Some(dir) if player.progress() >= 0.5 => player.pos().step(dir),
        _ => player.pos(),
    }
}

/// Draw the board, the status line and the key help.
pub fn draw(board: &Board, screen: &mut Screen) {
    screen.fill(TermCell::default());

    for (p, c) in board.cells() {
        let bg = if !c.is_shown() {
            (0, 0, 0)
        } else if c.is_start && c.color() == c.base_color() {
            Rgb::START.to_u8()
        } else {
            c.color().to_u8()
        };
        let (chars, fg) = glyphs(c);
        put(screen, p, chars, fg, bg);
    }

    let pp = player_cell(board);
    let bg = board
        .grid()
        .at(pp)
        .map_or((0, 0, 0), |c| c.color().to_u8());
    let arrow = facing_arrow(board.player().facing());
    put(screen, pp, ['@', arrow], Rgb::PLAYER.to_u8(), bg);

    let h = board.range().height();
    screen.text(Point::new(0, h), &status(board), (255, 255, 255));
    screen.text(Point::new(0, h + 1), HELP, (140, 140, 140));
}

/// One-line summary of the board's progress.
pub fn status(board: &Board) -> String {
    let pr = board.progress();
    let state = match (pr.running, pr.found_end, pr.path_exists) {
        (Some(alg), _, _) => format!("{alg} running"),
        (None, true, _) => "end found".to_string(),
        (None, false, false) => "no path".to_string(),
        (None, false, true) => "idle".to_string(),
    };
    let mut s = format!(
        "{}x{} | {state} | cursor {} | path {}",
        board.width(),
        board.height(),
        pr.cursor,
        pr.path_len.saturating_sub(1)
    );
    if pr.tracing {
        s.push_str(&format!(" | tracing to {}", pr.next));
    }
    s
}
