use crate::clock::Clock;
use crate::config::Config;
use crate::game::{Game, GameOptions, Tick};
use crate::input::EventSource;
use crate::surface::Framebuffer;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

/// Everything the game loop needs from the outside world, created once at
/// startup
#[derive(Debug)]
pub(crate) struct Context<B: Backend, E> {
    terminal: Terminal<B>,
    screen: Framebuffer,
    events: E,
    clock: Clock,
}

impl<B: Backend, E: EventSource> Context<B, E> {
    /// Create a context that draws a play field of the size given in
    /// `options` on `terminal` and reads keys from `events`
    pub(crate) fn new(terminal: Terminal<B>, events: E, options: &GameOptions) -> Self {
        Context {
            terminal,
            screen: Framebuffer::new(options.field.width(), options.field.height()),
            events,
            clock: Clock::default(),
        }
    }

    /// Show everything drawn so far on the terminal
    fn present(&mut self) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(&self.screen, frame.area()))?;
        Ok(())
    }
}

/// How a game came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    GameOver,
    Quit,
}

#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    options: GameOptions,
    tick_rate: NonZeroU32,
    game_over_delay: Duration,
    rng: R,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        App {
            options: config.game_options(),
            tick_rate: config.tick_rate,
            game_over_delay: config.game_over_delay(),
            rng,
        }
    }

    pub(crate) fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Play one game to its end, redrawing the terminal after every tick
    pub(crate) fn run<B: Backend, E: EventSource>(
        self,
        ctx: &mut Context<B, E>,
    ) -> io::Result<Ending> {
        let mut game = Game::new(self.options, self.rng, &mut ctx.screen);
        ctx.present()?;
        loop {
            let elapsed = ctx.clock.tick(self.tick_rate);
            tracing::trace!(?elapsed, "Tick");
            let keys = ctx.events.poll_events()?;
            match game.tick(&mut ctx.screen, keys) {
                Tick::Running => ctx.present()?,
                Tick::GameOver => {
                    ctx.present()?;
                    thread::sleep(self.game_over_delay);
                    return Ok(Ending::GameOver);
                }
                Tick::Quit => return Ok(Ending::Quit),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// Hands out one batch of key presses per tick, then nothing
    #[derive(Debug, Default)]
    struct ScriptedEvents(VecDeque<Vec<KeyEvent>>);

    impl EventSource for ScriptedEvents {
        fn poll_events(&mut self) -> io::Result<Vec<KeyEvent>> {
            Ok(self.0.pop_front().unwrap_or_default())
        }
    }

    fn fast_config() -> Config {
        Config {
            tick_rate: NonZeroU32::new(1000).expect("rate should be nonzero"),
            game_over_delay_ms: 0,
            ..Config::default()
        }
    }

    fn screen_text(ctx: &Context<TestBackend, ScriptedEvents>) -> String {
        ctx.terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn run(script: Vec<Vec<KeyEvent>>) -> (Ending, Context<TestBackend, ScriptedEvents>) {
        let config = fast_config();
        let app = App::new(&config, ChaCha12Rng::seed_from_u64(RNG_SEED));
        let terminal = Terminal::new(TestBackend::new(80, 24)).expect("should create terminal");
        let mut ctx = Context::new(terminal, ScriptedEvents(script.into()), app.options());
        let ending = app.run(&mut ctx).expect("game should run");
        (ending, ctx)
    }

    #[test]
    fn quit_right_away() {
        let (ending, ctx) = run(vec![vec![KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )]]);
        assert_eq!(ending, Ending::Quit);
        assert!(!screen_text(&ctx).contains("GAME OVER"));
        assert!(screen_text(&ctx).contains('▀'));
    }

    #[test]
    fn quit_later() {
        let script = vec![
            Vec::new(),
            vec![KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)],
            Vec::new(),
            vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)],
        ];
        let (ending, _) = run(script);
        assert_eq!(ending, Ending::Quit);
    }

    #[test]
    fn run_into_wall() {
        let (ending, ctx) = run(Vec::new());
        assert_eq!(ending, Ending::GameOver);
        assert!(screen_text(&ctx).contains("GAME OVER"));
    }

    #[test]
    fn reverse_into_self() {
        let script = vec![vec![KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)]];
        let (ending, ctx) = run(script);
        assert_eq!(ending, Ending::GameOver);
        assert!(screen_text(&ctx).contains("GAME OVER"));
    }
}
