use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use log::debug;
use rand::{seq::IteratorRandom, Rng};
use thiserror::Error;

/// Every cell on the grid is taken up by the snake, so there is nowhere to
/// put an apple.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the grid for an apple")]
pub(crate) struct PlacementExhausted;

/// Pick a uniformly random cell of `grid` not occupied by `snake`.
///
/// Cells are sampled from the whole grid until a free one turns up.  After
/// [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] misses the choice is
/// made directly among the remaining free cells instead, so a nearly-full
/// grid still resolves quickly.
pub(crate) fn place_apple<R: Rng>(
    rng: &mut R,
    grid: Grid,
    snake: &Snake,
) -> Result<Cell, PlacementExhausted> {
    if snake.len() >= grid.cell_count() {
        return Err(PlacementExhausted);
    }
    for _ in 0..consts::PLACEMENT_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }
    debug!(
        "No free cell found after {} samples; choosing among {} free cells",
        consts::PLACEMENT_ATTEMPTS,
        grid.cell_count() - snake.len()
    );
    grid.cells()
        .filter(|&c| !snake.occupies(c))
        .choose(rng)
        .ok_or(PlacementExhausted)
}
