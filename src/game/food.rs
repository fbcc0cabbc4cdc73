use super::cell::Cell;
use super::field::Field;
use crate::consts;
use crate::surface::Surface;
use rand::Rng;

/// A piece of food waiting to be eaten
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) cell: Cell,
}

impl Food {
    /// Place a piece of food at a uniformly random position inside `field`,
    /// at least one food-width away from the top & left edges and strictly
    /// clear of the inner bottom & right edges, and draw it.
    ///
    /// Each coordinate is drawn from `FOOD_SIZE..inner - FOOD_SIZE`.  The
    /// upper bound is exclusive so that the food never touches the inner
    /// boundary.
    ///
    /// The snake's body is not taken into account; food may appear on top of
    /// it.
    pub(super) fn place<R: Rng, S: Surface + ?Sized>(
        rng: &mut R,
        surface: &mut S,
        field: &Field,
    ) -> Food {
        let size = consts::FOOD_SIZE;
        let x = rng.random_range(size..field.inner_width() - size);
        let y = rng.random_range(size..field.inner_height() - size);
        let food = Food {
            cell: Cell::food(x, y),
        };
        food.cell.draw(surface);
        food
    }

    pub(super) fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Remove the food from the surface
    pub(super) fn erase<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.cell.erase(surface);
    }
}
