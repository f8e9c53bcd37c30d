//! Drawing the game in a terminal.  Each board cell becomes one terminal
//! cell.
use crate::consts;
use crate::game::{Direction, Game, Pixel, Status, Surface, Tile};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.grid();
        // Score bar, bordered board, message line
        let needed = Size {
            width: grid.width().saturating_add(2),
            height: grid.height().saturating_add(4),
        };
        if area.width < needed.width || area.height < needed.height {
            render_too_small(area, needed, buf);
            return;
        }
        let [score_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(
                " Score: {}  Best: {}  Deaths: {}",
                self.score(),
                self.best_score(),
                self.deaths()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: needed.width,
                height: grid.height().saturating_add(2),
            },
        );
        let block = Block::bordered();
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        self.paint(&mut Canvas {
            area: inner,
            buf: &mut *buf,
            heading: self.heading(),
        });

        let (status, action) = match self.status() {
            Status::Running => return,
            Status::Stopped => (" — STOPPED —", " Start ("),
            Status::Won => (" — THE BOARD IS FULL. YOU WIN! —", " Play again ("),
        };
        Line::from_iter([
            Span::raw(status),
            Span::raw(action),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(msg_area, buf);
    }
}

/// Tell the user to enlarge the terminal when the board doesn't fit in it
fn render_too_small(area: Rect, needed: Size, buf: &mut Buffer) {
    let [_, line1, line2, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    Line::from("Terminal too small").centered().render(line1, buf);
    Line::from(format!(
        "Need {}×{}, have {}×{}",
        needed.width, needed.height, area.width, area.height
    ))
    .centered()
    .render(line2, buf);
}

/// A terminal buffer region viewed as a [`Surface`]: a square at pixel
/// position `(x, y)` with side `side` lands on terminal cell `(x / side, y /
/// side)` of `area`.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,

    /// Which way the head glyph points
    heading: Direction,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if pos.x >= self.area.width || pos.y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    fn head_symbol(&self) -> char {
        match self.heading {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        }
    }
}

impl Surface for Canvas<'_> {
    fn fill_square(&mut self, origin: Pixel, side: u16, tile: Tile) {
        let side = i32::from(side.max(1));
        let (Ok(x), Ok(y)) = (
            u16::try_from(origin.x.div_euclid(side)),
            u16::try_from(origin.y.div_euclid(side)),
        ) else {
            return;
        };
        let (symbol, style) = match tile {
            Tile::SnakeHead => (self.head_symbol(), consts::SNAKE_STYLE),
            Tile::SnakeBody => (consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE),
            Tile::Food => (consts::FOOD_SYMBOL, consts::FOOD_STYLE),
        };
        self.draw_cell(Position::new(x, y), symbol, style);
    }
}
