//! Geometry shared by the snake, the food, and the play field
use super::cell::Cell;
use super::direction::Direction;
use crate::consts;

/// Return a new snake segment one step from `cell` in `direction`.  A step is
/// one segment's length plus the gap between segments.
pub(crate) fn adjacent(cell: &Cell, direction: Direction) -> Cell {
    let step = consts::SNAKE_SQUARE_SIZE + consts::SEGMENT_GAP;
    let (dx, dy) = direction.delta();
    Cell::segment(cell.x + dx * step, cell.y + dy * step)
}

/// Test whether two cells intersect.  Cells whose edges merely touch count as
/// overlapping.
pub(crate) fn overlaps(a: &Cell, b: &Cell) -> bool {
    !(a.edge(Direction::Right) < b.edge(Direction::Left)
        || a.edge(Direction::Left) > b.edge(Direction::Right)
        || a.edge(Direction::Down) < b.edge(Direction::Up)
        || a.edge(Direction::Up) > b.edge(Direction::Down))
}

/// Test whether `cell` lies strictly inside a play field whose inner
/// dimensions are `field_height` × `field_width`.  Touching the border is out
/// of bounds.
pub(crate) fn in_bounds(cell: &Cell, field_height: i32, field_width: i32) -> bool {
    cell.edge(Direction::Left) > 0
        && cell.edge(Direction::Up) > 0
        && cell.edge(Direction::Right) < field_width
        && cell.edge(Direction::Down) < field_height
}
