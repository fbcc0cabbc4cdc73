//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::num::NonZeroU32;
use std::time::Duration;

/// Default width of the play field, in pixels
pub(crate) const GAME_WIDTH: i32 = 1000;

/// Default height of the play field, in pixels
pub(crate) const GAME_HEIGHT: i32 = 600;

/// Default thickness of the frame drawn around the play field
pub(crate) const BOARD_LINE_WIDTH: i32 = 3;

/// Length of each dash in the frame, and half the distance between the starts
/// of consecutive dashes
pub(crate) const BOARD_DASH_LENGTH: i32 = 12;

/// Side length of a snake segment
pub(crate) const SNAKE_SQUARE_SIZE: i32 = 12;

/// Side length of a piece of food
pub(crate) const FOOD_SIZE: i32 = 12;

/// Empty space left between consecutive snake segments
pub(crate) const SEGMENT_GAP: i32 = 3;

/// Top-left corner of the snake's initial head
pub(crate) const SNAKE_START: (i32, i32) = (60, 90);

/// Number of segments the snake starts with
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default number of ticks per second
pub(crate) const TICK_RATE: NonZeroU32 = match NonZeroU32::new(15) {
    Some(rate) => rate,
    None => panic!("tick rate must be nonzero"),
};

/// Default time to keep the "GAME OVER" screen up before exiting
pub(crate) const GAME_OVER_DELAY: Duration = Duration::from_secs(3);

/// Edge length, in pixels, of the square of the play field that is shown as a
/// single dot in the terminal.  Two dots stack vertically in each terminal
/// cell.
pub(crate) const DOT_SIZE: i32 = SNAKE_SQUARE_SIZE + SEGMENT_GAP;

/// Glyph used to show two dots in one terminal cell: the upper dot is the
/// foreground, the lower dot the background.
pub(crate) const HALF_BLOCK: char = '▀';

pub(crate) const SNAKE_COLOR: Color = Color::Green;

pub(crate) const FOOD_COLOR: Color = Color::Red;

pub(crate) const BORDER_COLOR: Color = Color::Green;

/// Colour of empty space; erasing a cell paints it this colour
pub(crate) const BLANK_COLOR: Color = Color::Black;

pub(crate) const GAME_OVER_TEXT: &str = "GAME OVER";

pub(crate) const GAME_OVER_COLOR: Color = Color::Green;

/// Style applied to text drawn onto the play field, in addition to its colour
pub(crate) const LABEL_STYLE: Style = Style::new().bg(BLANK_COLOR).add_modifier(Modifier::BOLD);
