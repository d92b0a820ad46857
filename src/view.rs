use crate::consts;
use crate::game::{Cell, Direction, GameOver, Phase, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_size = Size {
            width: self.grid.width().saturating_add(2),
            height: self.grid.height().saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: board_size.width.max(consts::MIN_DISPLAY_WIDTH),
                height: board_size.height.saturating_add(3),
            },
        );
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}  Level: {}  Speed: {}  Best: {}",
                self.score, self.level, self.speed, self.high_score
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board_area = center_rect(board_area, board_size);
        Block::bordered().render(board_area, buf);
        let mut canvas = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some((&head, body)) = self.snake.split_last() {
            for &c in body {
                canvas.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
            if let Some(apple) = self.apple {
                canvas.draw_cell(apple, consts::APPLE_SYMBOL, consts::APPLE_STYLE);
            }
            // Draw the head last so that, if it's a collision, we overwrite
            // whatever it's colliding with
            if matches!(
                self.phase,
                Phase::GameOver(GameOver::OutOfBounds | GameOver::SelfCollision)
            ) {
                canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw_cell(head, head_symbol(self.heading), consts::SNAKE_STYLE);
            }
        }

        let (msg1, msg2) = self.messages();
        msg1.render(msg1_area, buf);
        msg2.render(msg2_area, buf);
    }
}

impl Snapshot {
    /// The two status lines shown beneath the board
    fn messages(&self) -> (Line<'static>, Line<'static>) {
        let msg1 = if !self.started() {
            Line::from(" Steer with the arrow keys to start")
        } else if self.paused() {
            Line::from(" — PAUSED —")
        } else if let Phase::GameOver(reason) = self.phase {
            Line::from(format!(" — GAME OVER: {reason} —"))
        } else {
            Line::default()
        };
        let mut keys = Vec::with_capacity(2);
        if self.game_over() {
            keys.push(("Restart", "Enter"));
        } else if self.paused() {
            keys.push(("Resume", "p"));
        } else if self.started() {
            keys.push(("Pause", "p"));
        }
        keys.push(("Quit", "q"));
        let mut msg2 = Line::from(" ");
        for (i, (label, key)) in keys.into_iter().enumerate() {
            if i > 0 {
                msg2.push_span(" — ");
            }
            msg2.push_span(format!("{label} ("));
            msg2.push_span(Span::styled(key, consts::KEY_STYLE));
            msg2.push_span(")");
        }
        (msg1, msg2)
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(cell.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.y) else {
            return;
        };
        if !self.area.contains((x, y).into()) {
            return;
        }
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;
    use pretty_assertions::assert_eq;

    fn snapshot(phase: Phase) -> Snapshot {
        Snapshot {
            grid: Grid::new(10, 3).unwrap(),
            snake: vec![Cell::new(3, 1), Cell::new(4, 1), Cell::new(5, 1)],
            heading: Direction::Right,
            apple: None,
            score: 0,
            level: 1,
            speed: 10,
            high_score: 12,
            phase,
        }
    }

    #[test]
    fn not_started() {
        let snap = snapshot(Phase::NotStarted);
        let area = Rect::new(0, 0, 44, 8);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0  Level: 1  Speed: 10  Best: 12",
            "                ┌──────────┐                ",
            "                │          │                ",
            "                │   ⚬⚬<    │                ",
            "                │          │                ",
            "                └──────────┘                ",
            " Steer with the arrow keys to start",
            " Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 44, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(20, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(7, 7, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn running_with_apple() {
        let mut snap = snapshot(Phase::Running);
        snap.snake = vec![Cell::new(5, 1), Cell::new(5, 0)];
        snap.heading = Direction::Up;
        snap.apple = Some(Cell::new(9, 2));
        snap.score = 6;
        snap.level = 2;
        snap.speed = 11;
        let area = Rect::new(0, 0, 44, 8);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 6  Level: 2  Speed: 11  Best: 12",
            "                ┌──────────┐                ",
            "                │     v    │                ",
            "                │     ⚬    │                ",
            "                │         ●│                ",
            "                └──────────┘                ",
            "",
            " Pause (p) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 44, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(22, 2, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(22, 3, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(26, 4, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(8, 7, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(19, 7, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn wall_collision() {
        let mut snap = snapshot(Phase::GameOver(GameOver::OutOfBounds));
        snap.snake = vec![Cell::new(7, 1), Cell::new(8, 1), Cell::new(9, 1)];
        snap.score = 3;
        let area = Rect::new(0, 0, 44, 8);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 3  Level: 1  Speed: 10  Best: 12",
            "                ┌──────────┐                ",
            "                │          │                ",
            "                │       ⚬⚬×│                ",
            "                │          │                ",
            "                └──────────┘                ",
            " — GAME OVER: hit a wall —",
            " Restart (Enter) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 44, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(24, 3, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(26, 3, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(10, 7, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(25, 7, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn paused_message() {
        let (msg1, msg2) = snapshot(Phase::Paused).messages();
        assert_eq!(msg1.to_string(), " — PAUSED —");
        assert_eq!(msg2.to_string(), " Resume (p) — Quit (q)");
    }

    #[test]
    fn clipped_to_small_terminal() {
        let mut snap = snapshot(Phase::Running);
        snap.grid = Grid::new(60, 30).unwrap();
        snap.snake = vec![Cell::new(58, 28), Cell::new(59, 28), Cell::new(59, 29)];
        let area = Rect::new(0, 0, 20, 10);
        let mut buffer = Buffer::empty(area);
        // Must not panic even though most of the board is off-screen
        snap.render(area, &mut buffer);
    }
}
