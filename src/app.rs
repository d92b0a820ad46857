use crate::clock::Clock;
use crate::command::Command;
use crate::game::Game;
use crate::sound::Chime;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The driver: owns the game and the tick clock, draws a snapshot after
/// every step, and applies player input strictly between ticks.
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    clock: Clock,
    chime: Box<dyn Chime>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, chime: Box<dyn Chime>) -> App<R> {
        App {
            game,
            clock: Clock::new(),
            chime,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            let snapshot = self.game.snapshot();
            terminal.draw(|frame| frame.render_widget(&snapshot, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever
    /// comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        let now = Instant::now();
        self.sync_clock(now);
        match self.clock.wait(now) {
            Some(wait) if wait.is_zero() || !poll(wait)? => {
                if self.clock.fire(Instant::now()) {
                    self.tick();
                }
            }
            _ => self.handle_event(read()?),
        }
        Ok(())
    }

    /// Keep a tick scheduled exactly while the game is running
    fn sync_clock(&mut self, now: Instant) {
        if self.game.running() {
            self.clock.arm(now, self.game.speed());
        } else {
            self.clock.cancel();
        }
    }

    fn tick(&mut self) {
        if self.game.tick().ate() {
            self.chime.play_eat();
        }
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.game.running() {
                self.game.toggle_pause();
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Turn(direction) => self.game.set_direction(direction),
            Command::Pause => self.game.toggle_pause(),
            Command::Start => {
                self.clock.cancel();
                self.game.start();
            }
        }
    }
}
