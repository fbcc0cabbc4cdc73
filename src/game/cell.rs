use super::direction::Direction;
use crate::consts;
use crate::surface::{PixelRect, Surface};
use ratatui::style::Color;

/// A square on the play field: either a segment of the snake or a piece of
/// food.  Cells don't hold on to the surface they're shown on; it's passed in
/// whenever they draw or erase themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    /// Pixel coordinate of the left edge
    pub(crate) x: i32,
    /// Pixel coordinate of the top edge
    pub(crate) y: i32,
    size: i32,
    color: Color,
}

impl Cell {
    /// Create a snake segment with its top-left corner at (`x`, `y`)
    pub(crate) fn segment(x: i32, y: i32) -> Cell {
        Cell {
            x,
            y,
            size: consts::SNAKE_SQUARE_SIZE,
            color: consts::SNAKE_COLOR,
        }
    }

    /// Create a piece of food with its top-left corner at (`x`, `y`)
    pub(crate) fn food(x: i32, y: i32) -> Cell {
        Cell {
            x,
            y,
            size: consts::FOOD_SIZE,
            color: consts::FOOD_COLOR,
        }
    }

    pub(crate) fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Return the coordinate of the cell's edge on the given side
    pub(crate) fn edge(&self, side: Direction) -> i32 {
        match side {
            Direction::Left => self.x,
            Direction::Up => self.y,
            Direction::Right => self.x + self.size,
            Direction::Down => self.y + self.size,
        }
    }

    fn rect(&self) -> PixelRect {
        PixelRect::new(self.x, self.y, self.size, self.size)
    }

    pub(crate) fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.color, self.rect());
    }

    /// Paint over the cell with the background colour
    pub(crate) fn erase<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(consts::BLANK_COLOR, self.rect());
    }
}
