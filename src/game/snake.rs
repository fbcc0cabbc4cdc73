use super::cell::Cell;
use super::collision::{adjacent, overlaps};
use super::direction::Direction;
use crate::surface::Surface;
use std::collections::VecDeque;

/// The snake: a queue of segments, head at the front, plus its heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells making up the snake, head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently heading
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake of `length` segments heading in `direction`, with its
    /// head at `head` and each further segment trailing behind it, and draw
    /// it.
    pub(super) fn spawn<S: Surface + ?Sized>(
        surface: &mut S,
        head: Cell,
        length: usize,
        direction: Direction,
    ) -> Snake {
        let mut body = VecDeque::from([head]);
        let mut tail = head;
        for _ in 1..length {
            tail = adjacent(&tail, direction.opposite());
            body.push_back(tail);
        }
        let snake = Snake { body, direction };
        snake.redraw(surface);
        snake
    }

    /// Return the snake's head, or `None` if the body is empty
    pub(super) fn head(&self) -> Option<&Cell> {
        self.body.front()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    /// Change the snake's heading without moving it
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the snake one step, in `direction` if given (which then becomes
    /// the new heading) or else in the current heading.  The length is
    /// unchanged: a new head is drawn and the tail is erased.
    pub(super) fn update<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        direction: Option<Direction>,
    ) {
        if let Some(d) = direction {
            self.direction = d;
        }
        if self.body.is_empty() {
            return;
        }
        self.push_head(surface);
        if let Some(tail) = self.body.pop_back() {
            tail.erase(surface);
        }
    }

    /// Extend the snake by one segment in its current heading, leaving the
    /// tail in place
    pub(super) fn grow<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.push_head(surface);
    }

    /// Draw every segment again, e.g. after something else was erased on top
    /// of the snake
    pub(super) fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cell in &self.body {
            cell.draw(surface);
        }
    }

    /// Test whether the snake's head overlaps any other part of its body
    pub(super) fn bites(&self) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        self.body.iter().skip(1).any(|cell| overlaps(head, cell))
    }

    /// Add and draw a new head one step ahead of the current one.  Does
    /// nothing if the body is empty.
    fn push_head<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Some(head) = self.head() else {
            return;
        };
        let new_head = adjacent(head, self.direction);
        new_head.draw(surface);
        self.body.push_front(new_head);
    }
}
