//! Assorted constants & hard-coded configuration
use crate::game::Direction;
use ratatui::style::{Color, Modifier, Style};

/// Grid width used when neither the configuration file nor the command line
/// specifies one
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 40;

/// Grid height used when neither the configuration file nor the command line
/// specifies one.  Together with the border, score bar, and message lines,
/// this fits an 80×24 terminal.
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 18;

/// Narrowest grid that can hold a freshly-spawned snake
pub(crate) const MIN_GRID_WIDTH: u16 = 4;

/// Ticks per second before the level bonus is added
pub(crate) const DEFAULT_BASE_SPEED: u32 = 9;

/// Number of apples that must be eaten to advance one level
pub(crate) const APPLES_PER_LEVEL: u32 = 5;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Direction the snake faces at the start of a game
pub(crate) const INITIAL_HEADING: Direction = Direction::Right;

/// How many random cells to try when placing an apple before choosing
/// directly among the free cells
pub(crate) const PLACEMENT_ATTEMPTS: usize = 64;

/// The game display is at least this wide so that the status lines fit
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 44;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
