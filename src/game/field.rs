use crate::consts;
use crate::surface::{PixelRect, Surface};
use serde::Deserialize;
use thiserror::Error;

/// The rectangular play field, bordered by a dashed frame
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawField")]
pub(crate) struct Field {
    width: i32,
    height: i32,
    border: i32,
}

impl Field {
    pub(crate) const MIN_SIZE: i32 = 150;
    pub(crate) const MAX_SIZE: i32 = 10000;
    pub(crate) const MAX_BORDER: i32 = 12;

    pub(crate) fn new(width: i32, height: i32, border: i32) -> Result<Field, FieldError> {
        for (what, value) in [("width", width), ("height", height)] {
            if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&value) {
                return Err(FieldError::Size { what, value });
            }
        }
        if !(0..=Self::MAX_BORDER).contains(&border) {
            return Err(FieldError::Border(border));
        }
        Ok(Field {
            width,
            height,
            border,
        })
    }

    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    /// Width of the field less the border
    pub(crate) fn inner_width(&self) -> i32 {
        self.width - self.border
    }

    /// Height of the field less the border
    pub(crate) fn inner_height(&self) -> i32 {
        self.height - self.border
    }

    pub(crate) fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    /// Draw the dashed frame along all four edges of the field
    pub(crate) fn draw_border<S: Surface + ?Sized>(&self, surface: &mut S) {
        let dash = consts::BOARD_DASH_LENGTH;
        let step = usize::try_from(dash * 2).unwrap_or(1);
        for x in (0..=self.width).step_by(step) {
            surface.fill_rect(consts::BORDER_COLOR, PixelRect::new(x, 0, dash, self.border));
            surface.fill_rect(
                consts::BORDER_COLOR,
                PixelRect::new(x, self.height - self.border, dash, self.border),
            );
        }
        for y in (0..=self.height).step_by(step) {
            surface.fill_rect(consts::BORDER_COLOR, PixelRect::new(0, y, self.border, dash));
            surface.fill_rect(
                consts::BORDER_COLOR,
                PixelRect::new(self.width - self.border, y, self.border, dash),
            );
        }
    }
}

impl Default for Field {
    fn default() -> Field {
        Field {
            width: consts::GAME_WIDTH,
            height: consts::GAME_HEIGHT,
            border: consts::BOARD_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawField {
    width: i32,
    height: i32,
    border: i32,
}

impl Default for RawField {
    fn default() -> RawField {
        RawField {
            width: consts::GAME_WIDTH,
            height: consts::GAME_HEIGHT,
            border: consts::BOARD_LINE_WIDTH,
        }
    }
}

impl TryFrom<RawField> for Field {
    type Error = FieldError;

    fn try_from(value: RawField) -> Result<Field, FieldError> {
        Field::new(value.width, value.height, value.border)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum FieldError {
    #[error("field {what} must be between {min} and {max}, got {value}", min = Field::MIN_SIZE, max = Field::MAX_SIZE)]
    Size { what: &'static str, value: i32 },
    #[error("field border must be between 0 and {max}, got {0}", max = Field::MAX_BORDER)]
    Border(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Framebuffer;
    use rstest::rstest;

    #[test]
    fn default_field() {
        let field = Field::default();
        assert_eq!(Field::new(1000, 600, 3), Ok(field));
        assert_eq!(field.inner_width(), 997);
        assert_eq!(field.inner_height(), 597);
        assert_eq!(field.center(), (500, 300));
    }

    #[rstest]
    #[case(149, 600, 3, FieldError::Size { what: "width", value: 149 })]
    #[case(1000, 10001, 3, FieldError::Size { what: "height", value: 10001 })]
    #[case(1000, 600, -1, FieldError::Border(-1))]
    #[case(1000, 600, 13, FieldError::Border(13))]
    fn invalid_field(
        #[case] width: i32,
        #[case] height: i32,
        #[case] border: i32,
        #[case] err: FieldError,
    ) {
        assert_eq!(Field::new(width, height, border), Err(err));
    }

    #[test]
    fn field_error_message() {
        assert_eq!(
            FieldError::Size {
                what: "width",
                value: 149
            }
            .to_string(),
            "field width must be between 150 and 10000, got 149"
        );
    }

    #[test]
    fn border_is_dashed() {
        let field = Field::default();
        let mut fb = Framebuffer::new(field.width(), field.height());
        field.draw_border(&mut fb);
        // Dashes at 0..12 and 24..36 along the top; 12..24 is a gap, but it
        // shares dots with its neighbours.
        assert_eq!(fb.dot_at(0, 0), consts::BORDER_COLOR);
        assert_eq!(fb.dot_at(30, 0), consts::BORDER_COLOR);
        assert_eq!(fb.dot_at(0, 300), consts::BORDER_COLOR);
        assert_eq!(fb.dot_at(999, 300), consts::BORDER_COLOR);
        assert_eq!(fb.dot_at(500, 599), consts::BORDER_COLOR);
        assert_eq!(fb.dot_at(500, 300), consts::BLANK_COLOR);
        assert_eq!(fb.dot_at(60, 90), consts::BLANK_COLOR);
    }

    #[test]
    fn borderless_field_draws_nothing() {
        let field = Field::new(300, 300, 0).expect("field should be valid");
        let mut fb = Framebuffer::new(field.width(), field.height());
        field.draw_border(&mut fb);
        assert_eq!(fb, Framebuffer::new(300, 300));
    }
}
