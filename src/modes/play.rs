use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};
use tracing::{debug, info};

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState, StepOutcome};
use crate::input::{InputHandler, KeyCommand};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Frames are drawn at a fixed rate regardless of how fast the game ticks
const RENDER_PERIOD: Duration = Duration::from_millis(33);

/// The interactive game session: owns the single [`GameState`], the tick and
/// render timers, and the keyboard stream, and multiplexes them on one task.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input: InputHandler,
    /// Direction accepted for the next tick; `Some` also acts as the lock
    /// that limits steering to one change per tick.
    pending: Option<Direction>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            pending: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the session, then restore the terminal whatever happened
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        // interval_at rather than interval: the first tick should come one
        // full period from now, not immediately.
        let mut tick_period = self.engine.tick_interval(&self.state);
        let mut tick_timer = interval_at(Instant::now() + tick_period, tick_period);
        let mut render_timer = interval(RENDER_PERIOD);

        info!(
            width = self.state.grid_width,
            height = self.state.grid_height,
            tick_ms = tick_period.as_millis() as u64,
            "session started"
        );

        loop {
            tokio::select! {
                // Keyboard
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game tick
                _ = tick_timer.tick() => {
                    if self.state.is_playing() {
                        self.advance_game();
                    }
                }

                // Frame
                _ = render_timer.tick() => {
                    self.stats.refresh_clock();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats, tick_period);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Speed follows score, so the timer is re-armed whenever they
            // diverge: after eating, and after a restart dropped the score
            // back to zero. Re-arming starts a whole fresh period; it never
            // fires an immediate catch-up step.
            let desired = self.engine.tick_interval(&self.state);
            if desired != tick_period {
                tick_period = desired;
                tick_timer = interval_at(Instant::now() + desired, desired);
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only key presses count; releases and repeats-as-releases don't
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.map(key) {
                KeyCommand::Turn(direction) => self.steer(direction),
                KeyCommand::Restart => self.restart(),
                KeyCommand::Quit => self.should_quit = true,
                KeyCommand::Ignored => {}
            }
        }
    }

    /// Accept at most one direction change per tick: once a turn is pending,
    /// later presses are dropped until the next step consumes it. Reverse
    /// turns are dropped outright. A press that repeats the current heading
    /// is accepted and so also consumes the per-tick slot.
    fn steer(&mut self, direction: Direction) {
        if self.pending.is_some() {
            return;
        }
        if direction.is_reverse_of(self.state.snake.direction) {
            return;
        }
        self.pending = Some(direction);
    }

    fn advance_game(&mut self) {
        let action = self
            .pending
            .take()
            .map(Action::Turn)
            .unwrap_or(Action::Coast);

        match self.engine.step(&mut self.state, action) {
            StepOutcome::Ate => {
                debug!(score = self.state.score, "food eaten");
            }
            StepOutcome::Ended(cause) => {
                self.stats.record_game(self.state.score);
                info!(
                    ?cause,
                    score = self.state.score,
                    ticks = self.state.ticks,
                    "game over"
                );
            }
            StepOutcome::Advanced => {}
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.pending = None;
        self.stats.restart_clock();
        info!(games_played = self.stats.games_played, "session restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
