use crate::consts;
use thiserror::Error;

/// A single square on the board.  Coordinates are measured from the top-left
/// corner, with `y` increasing downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

/// The rectangular playing field, measured in cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Create a grid `width` cells wide and `height` cells tall.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the grid is too small to hold a freshly-spawned snake.
    pub(crate) fn new(width: u16, height: u16) -> Result<Grid, GridError> {
        if width < consts::MIN_GRID_WIDTH {
            Err(GridError::TooNarrow(width))
        } else if height == 0 {
            Err(GridError::ZeroHeight)
        } else {
            Ok(Grid { width, height })
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Total number of cells on the grid
    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// The cell at which a new snake's head is placed
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Iterate over every cell on the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("grid must be at least {min} cells wide; got {0}", min = consts::MIN_GRID_WIDTH)]
    TooNarrow(u16),
    #[error("grid must be at least 1 cell tall")]
    ZeroHeight,
}
