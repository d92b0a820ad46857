use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake, from the tail (front) to the
    /// cell just behind the head (back)
    pub(super) body: VecDeque<Cell>,

    /// The length the snake grows towards; once reached, the tail is dropped
    /// on every move.
    pub(super) target_len: usize,
}

impl Snake {
    /// Create a new snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// cells with its head at `head`, facing in `facing`, and its body
    /// trailing straight out behind it.  Body cells that would fall outside
    /// `grid` are omitted.
    pub(crate) fn new(head: Cell, facing: Direction, grid: Grid) -> Snake {
        let behind = facing.reverse();
        let mut body = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH);
        for cell in std::iter::successors(behind.advance(head, grid), |&c| behind.advance(c, grid))
            .take(consts::INITIAL_SNAKE_LENGTH - 1)
        {
            body.push_front(cell);
        }
        Snake {
            head,
            body,
            target_len: consts::INITIAL_SNAKE_LENGTH,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Number of cells the snake currently occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn target_len(&self) -> usize {
        self.target_len
    }

    /// Iterate over the snake's cells from tail to head
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body
            .iter()
            .copied()
            .chain(std::iter::once(self.head))
    }

    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Compute where the head would end up after one step in `direction`.
    /// Returns `None` if the step would leave `grid`.
    pub(crate) fn advance(&self, direction: Direction, grid: Grid) -> Option<Cell> {
        direction.advance(self.head(), grid)
    }

    /// Would moving the head to `new_head` run the snake into itself?
    ///
    /// The tail cell counts as free if and only if it is vacated by this
    /// move, which is the case exactly when the snake is not `growing`.
    pub(crate) fn would_collide(&self, new_head: Cell, growing: bool) -> bool {
        let target = self.target_len() + usize::from(growing);
        let vacated = usize::from(self.len() + 1 > target);
        self.cells().skip(vacated).any(|c| c == new_head)
    }

    /// Move the head to `new_head`, dropping cells from the tail while the
    /// snake is longer than its target length.
    pub(crate) fn commit_advance(&mut self, new_head: Cell) {
        self.body.push_back(self.head);
        self.head = new_head;
        while self.len() > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Lengthen the snake by one cell in response to eating an apple.  The
    /// extra cell appears on the next call to `commit_advance()`.
    pub(crate) fn grow(&mut self) {
        self.target_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn five_by_five() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    fn row(cells: &[(u16, u16)]) -> Vec<Cell> {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Cell::new(2, 2), Direction::Right, five_by_five());
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            row(&[(0, 2), (1, 2), (2, 2)])
        );
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.target_len(), 3);
    }

    #[test]
    fn new_snake_facing_up() {
        let snake = Snake::new(Cell::new(2, 2), Direction::Up, five_by_five());
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            row(&[(2, 4), (2, 3), (2, 2)])
        );
    }

    #[test]
    fn advance_is_pure() {
        let snake = Snake::new(Cell::new(2, 2), Direction::Right, five_by_five());
        assert_eq!(
            snake.advance(Direction::Up, five_by_five()),
            Some(Cell::new(2, 1))
        );
        assert_eq!(snake.head(), Cell::new(2, 2));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_off_grid() {
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right, five_by_five());
        snake.commit_advance(Cell::new(3, 2));
        snake.commit_advance(Cell::new(4, 2));
        assert_eq!(snake.advance(Direction::Right, five_by_five()), None);
    }

    #[test]
    fn commit_drops_tail() {
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right, five_by_five());
        snake.commit_advance(Cell::new(3, 2));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            row(&[(1, 2), (2, 2), (3, 2)])
        );
    }

    #[test]
    fn grow_retains_tail() {
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right, five_by_five());
        snake.grow();
        assert_eq!(snake.len(), 3);
        snake.commit_advance(Cell::new(3, 2));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            row(&[(0, 2), (1, 2), (2, 2), (3, 2)])
        );
        snake.commit_advance(Cell::new(4, 2));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            row(&[(1, 2), (2, 2), (3, 2), (4, 2)])
        );
    }

    /// A 2x2 loop: tail (1,1), then (1,2), (2,2), head (2,1).  Moving left
    /// from the head lands on the tail.
    fn coiled() -> Snake {
        Snake {
            head: Cell::new(2, 1),
            body: VecDeque::from(row(&[(1, 1), (1, 2), (2, 2)])),
            target_len: 4,
        }
    }

    #[test]
    fn chasing_tail_is_legal() {
        let snake = coiled();
        let next = snake.advance(Direction::Left, five_by_five()).unwrap();
        assert_eq!(next, Cell::new(1, 1));
        assert!(!snake.would_collide(next, false));
    }

    #[test]
    fn chasing_tail_while_growing_collides() {
        let snake = coiled();
        assert!(snake.would_collide(Cell::new(1, 1), true));
    }

    #[test]
    fn body_collision() {
        let snake = coiled();
        assert!(snake.would_collide(Cell::new(2, 2), false));
        assert!(snake.would_collide(Cell::new(1, 2), false));
        assert!(!snake.would_collide(Cell::new(3, 1), false));
    }

    #[test]
    fn short_snake_keeps_tail() {
        // Still growing towards its target length, so the tail stays put
        let snake = Snake {
            head: Cell::new(2, 1),
            body: VecDeque::from(row(&[(1, 1), (1, 2), (2, 2)])),
            target_len: 6,
        };
        assert!(snake.would_collide(Cell::new(1, 1), false));
    }

    #[test]
    fn length_never_exceeds_target() {
        let grid = Grid::new(10, 1).unwrap();
        let mut snake = Snake::new(Cell::new(3, 0), Direction::Right, grid);
        for x in 4..10 {
            let before = snake.len();
            let growing = x % 2 == 0;
            if growing {
                snake.grow();
            }
            snake.commit_advance(Cell::new(x, 0));
            assert_eq!(snake.len(), (before + 1).min(snake.target_len()));
            assert!(snake.len() <= snake.target_len());
        }
        assert_eq!(snake.len(), 6);
    }
}
