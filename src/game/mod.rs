mod cell;
mod collision;
mod direction;
mod field;
mod food;
mod snake;
pub(crate) use self::field::Field;
use self::cell::Cell;
use self::collision::{in_bounds, overlaps};
use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use crate::command::Command;
use crate::consts;
use crate::surface::Surface;
use crossterm::event::KeyEvent;
use rand::Rng;

/// Gameplay settings fixed for the lifetime of a game
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct GameOptions {
    pub(crate) field: Field,

    /// Whether each direction key moves the snake immediately in addition to
    /// the regular move made every tick
    pub(crate) double_move: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: GameOptions,
    snake: Snake,
    food: Food,
    state: GameState,
}

impl<R: Rng> Game<R> {
    /// Start a new game, drawing the field's border, the snake, and the first
    /// piece of food onto `surface`
    pub(crate) fn new<S: Surface + ?Sized>(
        options: GameOptions,
        mut rng: R,
        surface: &mut S,
    ) -> Game<R> {
        options.field.draw_border(surface);
        let (x, y) = consts::SNAKE_START;
        let snake = Snake::spawn(
            surface,
            Cell::segment(x, y),
            consts::INITIAL_SNAKE_LENGTH,
            Direction::Right,
        );
        let food = Food::place(&mut rng, surface, &options.field);
        tracing::info!(
            width = options.field.width(),
            height = options.field.height(),
            double_move = options.double_move,
            "Starting new game"
        );
        Game {
            rng,
            options,
            snake,
            food,
            state: GameState::Alive,
        }
    }

    /// Run one iteration of the game loop, handling the key presses in `keys`
    /// received since the previous tick.
    ///
    /// In order: if the snake has left the field or bitten itself, show
    /// "GAME OVER" and stop; if the snake's head is on the food, eat it; apply
    /// the key presses; finally, move the snake one step.
    pub(crate) fn tick<S, I>(&mut self, surface: &mut S, keys: I) -> Tick
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = KeyEvent>,
    {
        if self.state == GameState::Dead {
            return Tick::GameOver;
        }
        let head = *self.head();
        let field = self.options.field;
        let out_of_bounds = !in_bounds(&head, field.inner_height(), field.inner_width());
        if out_of_bounds || self.snake.bites() {
            tracing::info!(
                length = self.snake.len(),
                head = ?head.position(),
                heading = ?self.snake.direction(),
                reason = if out_of_bounds { "hit wall" } else { "bit itself" },
                "Game over"
            );
            self.state = GameState::Dead;
            surface.render_text(consts::GAME_OVER_TEXT, consts::GAME_OVER_COLOR, field.center());
            return Tick::GameOver;
        }

        if overlaps(&head, self.food.cell()) {
            self.food.erase(surface);
            // Erasing works on whole dots, so it can take part of the snake
            // with it
            self.snake.redraw(surface);
            self.snake.grow(surface);
            self.food = Food::place(&mut self.rng, surface, &field);
            tracing::debug!(
                length = self.snake.len(),
                food = ?self.food.cell().position(),
                "Snake ate food"
            );
        }

        for ev in keys {
            let direction = match Command::from_key_event(ev) {
                Some(Command::Quit) => {
                    tracing::info!("Quit requested");
                    return Tick::Quit;
                }
                Some(Command::Up) => Direction::Up,
                Some(Command::Down) => Direction::Down,
                Some(Command::Left) => Direction::Left,
                Some(Command::Right) => Direction::Right,
                None => continue,
            };
            tracing::debug!(?direction, "Turning");
            if self.options.double_move {
                self.snake.update(surface, Some(direction));
            } else {
                self.snake.turn(direction);
            }
        }

        self.snake.update(surface, None);
        Tick::Running
    }
}

impl<R> Game<R> {
    fn head(&self) -> &Cell {
        self.snake.head().expect("snake body should never be empty")
    }
}

/// Outcome of a single [`Game::tick`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game goes on
    Running,
    /// The snake has died and "GAME OVER" has been drawn
    GameOver,
    /// The player asked to quit
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Alive,
    Dead,
}
