use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{EndCause, GameState, GameStatus, Position, Snake},
};
use rand::Rng;
use std::time::Duration;

/// What a single step did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved one cell
    Advanced,
    /// The snake moved onto the food: grew by one, scored, food respawned
    Ate,
    /// The session is over (ended this step, or was over already)
    Ended(EndCause),
}

/// Drives a [`GameState`] one tick at a time
///
/// The engine owns the configuration and the RNG used for food placement;
/// all game state lives in the [`GameState`] value passed to [`step`].
///
/// [`step`]: GameEngine::step
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Tick interval matching the state's score; shrinks as the snake eats
    pub fn tick_interval(&self, state: &GameState) -> Duration {
        self.config.tick_interval(state.score)
    }

    /// A fresh session: snake at the board center heading right, random
    /// food, zero score.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);

        let mut state = GameState::new(snake, center, self.config.grid_width, self.config.grid_height);
        self.respawn_food(&mut state);
        state
    }

    /// Advance the game by one tick.
    ///
    /// Applies the action to the heading (reverse turns are ignored), slides
    /// the snake one cell, and resolves the collision / growth rules. On a
    /// collision the body is left exactly as it was; only the status and the
    /// tick counter change.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepOutcome {
        if let GameStatus::Over(cause) = state.status {
            return StepOutcome::Ended(cause);
        }

        if let Action::Turn(heading) = action {
            if !heading.is_reverse_of(state.snake.direction) {
                state.snake.direction = heading;
            }
        }

        let candidate = state.snake.head().stepped(state.snake.direction);

        // The candidate head is tested against the pre-move body, tail
        // included: that cell is still occupied when the head arrives.
        if let Some(cause) = self.collision(state, candidate) {
            state.status = GameStatus::Over(cause);
            state.ticks += 1;
            return StepOutcome::Ended(cause);
        }

        let ate = candidate == state.food;
        state.snake.advance(ate);
        state.ticks += 1;

        if ate {
            state.score += 1;
            self.respawn_food(state);
            if let GameStatus::Over(cause) = state.status {
                return StepOutcome::Ended(cause);
            }
            return StepOutcome::Ate;
        }

        StepOutcome::Advanced
    }

    fn collision(&self, state: &GameState, head: Position) -> Option<EndCause> {
        if !state.in_bounds(head) {
            return Some(EndCause::HitWall);
        }
        if state.snake.contains(head) {
            return Some(EndCause::HitSelf);
        }
        None
    }

    /// Put fresh food on a uniformly random free cell. When the snake has
    /// covered the whole board there is no free cell to sample, so the
    /// session ends as a win instead of the rejection loop spinning forever.
    fn respawn_food(&mut self, state: &mut GameState) {
        if state.snake.len() >= state.cell_count() {
            state.status = GameStatus::Over(EndCause::BoardCleared);
            return;
        }

        loop {
            let pos = Position::new(
                self.rng.gen_range(0..state.grid_width as i32),
                self.rng.gen_range(0..state.grid_height as i32),
            );
            if !state.snake.contains(pos) {
                state.food = pos;
                return;
            }
        }
    }
}
