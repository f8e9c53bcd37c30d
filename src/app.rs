use crate::command::Command;
use crate::config::Config;
use crate::game::{Game, Tick};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// The terminal front-end: draws the game, feeds it key presses, and ticks it
/// at a fixed period.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    ticker: Ticker,
    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Self {
        App::with_game(Game::new(config.grid), config.tick_period)
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn with_game(game: Game<R>, tick_period: Duration) -> App<R> {
        App {
            game,
            ticker: Ticker::new(tick_period),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.game.start();
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        info!(
            best_score = self.game.best_score(),
            deaths = self.game.deaths(),
            "Quitting"
        );
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.game, frame.area());
    }

    /// Wait for either the next tick or the next input event, whichever
    /// comes first, and handle it.  While the game is not running, only
    /// input events are waited for.
    fn process_input(&mut self) -> io::Result<()> {
        if self.game.is_running() {
            let wait = self.ticker.remaining(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick(Instant::now());
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        let outcome = self.game.tick();
        self.ticker.ticked(now);
        if outcome == Tick::Won {
            self.ticker.reset();
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Move(direction) => self.game.set_direction(direction),
            Command::Restart => {
                info!("Restart requested");
                self.game.restart();
                self.ticker.reset();
            }
        }
    }
}

/// Keeps track of when the next tick is due.
///
/// Ticks are scheduled a fixed period apart.  If the driver falls more than
/// a whole period behind, the schedule restarts from the late tick instead of
/// firing a burst of catch-up ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    fn new(period: Duration) -> Ticker {
        Ticker { period, next: None }
    }

    /// Return how long remains until the next tick, starting the clock at
    /// `now` if it isn't already running
    fn remaining(&mut self, now: Instant) -> Duration {
        let next = *self.next.get_or_insert(now + self.period);
        next.saturating_duration_since(now)
    }

    /// Record that a tick was performed at `now`
    fn ticked(&mut self, now: Instant) {
        let due = self.next.unwrap_or(now) + self.period;
        self.next = Some(if due > now { due } else { now + self.period });
    }

    /// Stop the clock; the next call to `remaining()` starts a fresh period
    fn reset(&mut self) {
        self.next = None;
    }
}
