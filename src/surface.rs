//! The drawing surface that game objects paint themselves onto
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    text::Span,
    widgets::Widget,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// An axis-aligned rectangle in play-field pixel coordinates
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PixelRect {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl PixelRect {
    pub(crate) fn new(x: i32, y: i32, width: i32, height: i32) -> PixelRect {
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Something that can be drawn on.  Drawing is immediate: whatever is painted
/// stays until painted over.
pub(crate) trait Surface {
    /// Fill `rect` with `color`
    fn fill_rect(&mut self, color: Color, rect: PixelRect);

    /// Draw `text` in `color`, centered on the pixel at `center`
    fn render_text(&mut self, text: &str, color: Color, center: (i32, i32));
}

/// A persistent, low-resolution picture of the play field.
///
/// The field is divided into square dots of [`DOT_SIZE`][consts::DOT_SIZE]
/// pixels; filling a rectangle paints every dot the rectangle touches.  When
/// rendered as a widget, each terminal cell shows two vertically-stacked dots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Framebuffer {
    width: i32,
    height: i32,
    cols: usize,
    rows: usize,
    dots: Vec<Color>,
    labels: Vec<Label>,
}

impl Framebuffer {
    /// Create a blank framebuffer covering a field of `width` × `height`
    /// pixels
    pub(crate) fn new(width: i32, height: i32) -> Framebuffer {
        let width = width.max(0);
        let height = height.max(0);
        let cols = dots_ceil(width);
        let rows = dots_ceil(height);
        Framebuffer {
            width,
            height,
            cols,
            rows,
            dots: vec![consts::BLANK_COLOR; cols * rows],
            labels: Vec::new(),
        }
    }

    /// Return the colour of the dot at column `col` & row `row`.  Dots outside
    /// the field are blank.
    pub(crate) fn dot(&self, col: usize, row: usize) -> Color {
        if col < self.cols && row < self.rows {
            self.dots[row * self.cols + col]
        } else {
            consts::BLANK_COLOR
        }
    }

    /// Size of the terminal area needed to show the whole field
    pub(crate) fn terminal_size(&self) -> Size {
        Size {
            width: u16::try_from(self.cols).unwrap_or(u16::MAX),
            height: u16::try_from(self.rows.div_ceil(2)).unwrap_or(u16::MAX),
        }
    }
}

#[cfg(test)]
impl Framebuffer {
    /// Return the dot containing the pixel at (`x`, `y`)
    pub(crate) fn dot_at(&self, x: i32, y: i32) -> Color {
        self.dot(dots_floor(x), dots_floor(y))
    }

    /// Return the text drawn on the surface so far
    pub(crate) fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl Surface for Framebuffer {
    fn fill_rect(&mut self, color: Color, rect: PixelRect) {
        let cols = dot_span(rect.x, rect.width, self.width);
        let rows = dot_span(rect.y, rect.height, self.height);
        for row in rows {
            for col in cols.clone() {
                if let Some(dot) = self.dots.get_mut(row * self.cols + col) {
                    *dot = color;
                }
            }
        }
    }

    fn render_text(&mut self, text: &str, color: Color, center: (i32, i32)) {
        self.labels.push(Label {
            text: text.to_owned(),
            color,
            center,
        });
    }
}

impl Widget for &Framebuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.terminal_size());
        for y in 0..display.height {
            for x in 0..display.width {
                let col = usize::from(x);
                let row = usize::from(y) * 2;
                let top = self.dot(col, row);
                let bottom = self.dot(col, row + 1);
                let Some(cx) = display.x.checked_add(x) else {
                    continue;
                };
                let Some(cy) = display.y.checked_add(y) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((cx, cy)) {
                    cell.set_char(consts::HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
        for label in &self.labels {
            let width = u16::try_from(label.text.width()).unwrap_or(u16::MAX);
            let (cx, cy) = label.center;
            let col = u16::try_from(dots_floor(cx)).unwrap_or(u16::MAX);
            let row = u16::try_from(dots_floor(cy) / 2).unwrap_or(u16::MAX);
            let label_area = Rect::new(
                display.x.saturating_add(col.saturating_sub(width / 2)),
                display.y.saturating_add(row),
                width,
                1,
            )
            .intersection(display);
            Span::styled(
                label.text.as_str(),
                consts::LABEL_STYLE.patch(Style::new().fg(label.color)),
            )
            .render(label_area, buf);
        }
    }
}

/// A piece of text drawn on a [`Framebuffer`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Label {
    pub(crate) text: String,
    pub(crate) color: Color,
    pub(crate) center: (i32, i32),
}

/// Range of dots touched by the pixels from `start` to `start + len`, clipped
/// to `0..limit`
fn dot_span(start: i32, len: i32, limit: i32) -> Range<usize> {
    let end = start.saturating_add(len).clamp(0, limit);
    let start = start.clamp(0, limit);
    if end <= start {
        return 0..0;
    }
    dots_floor(start)..dots_ceil(end)
}

/// Index of the dot containing pixel coordinate `px`
fn dots_floor(px: i32) -> usize {
    usize::try_from(px.max(0) / consts::DOT_SIZE).unwrap_or(0)
}

/// Number of dots needed to cover `px` pixels
fn dots_ceil(px: i32) -> usize {
    usize::try_from(px.max(0).unsigned_abs().div_ceil(consts::DOT_SIZE.unsigned_abs()))
        .unwrap_or(0)
}
