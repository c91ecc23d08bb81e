use super::state::{GameState, Position};

/// What occupies a cell, for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// A width x height grid of [`Cell`]s derived from a [`GameState`]
///
/// This is the one bridge between game state and drawing: the renderer looks
/// at cells, never at the snake or the food directly. The grid is rebuilt
/// from scratch on every projection; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    width: usize,
    height: usize,
    /// Row-major, `y * width + x`
    cells: Vec<Cell>,
}

impl BoardView {
    /// Derive the display grid from a state: empty everywhere, then the
    /// snake overlaid cell by cell, then the food. Later overlays win, so
    /// food drawn onto a snake cell (impossible in states the engine
    /// produces, but representable) shows as food.
    pub fn project(state: &GameState) -> Self {
        let mut view = Self {
            width: state.grid_width,
            height: state.grid_height,
            cells: vec![Cell::Empty; state.grid_width * state.grid_height],
        };

        for &segment in &state.snake.body[1..] {
            view.set(segment, Cell::SnakeBody);
        }
        view.set(state.snake.head(), Cell::SnakeHead);
        view.set(state.food, Cell::Food);

        view
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y). Panics when out of range, like slice indexing.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "cell out of range");
        self.cells[y * self.width + x]
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        if pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
        {
            self.cells[pos.y as usize * self.width + pos.x as usize] = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameEngine, Snake};

    #[test]
    fn test_projection_dimensions() {
        let mut engine = GameEngine::new(GameConfig::new(12, 8));
        let state = engine.reset();
        let view = BoardView::project(&state);

        assert_eq!(view.width(), 12);
        assert_eq!(view.height(), 8);
    }

    #[test]
    fn test_projection_marks_exactly_the_occupied_cells() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let state = GameState::new(snake, Position::new(7, 7), 10, 10);
        let view = BoardView::project(&state);

        assert_eq!(view.cell(5, 5), Cell::SnakeHead);
        assert_eq!(view.cell(4, 5), Cell::SnakeBody);
        assert_eq!(view.cell(3, 5), Cell::SnakeBody);
        assert_eq!(view.cell(7, 7), Cell::Food);
        assert_eq!(view.cell(0, 0), Cell::Empty);
        assert_eq!(view.cell(6, 5), Cell::Empty);

        let mut counts = [0usize; 4];
        for y in 0..view.height() {
            for x in 0..view.width() {
                let idx = match view.cell(x, y) {
                    Cell::Empty => 0,
                    Cell::SnakeHead => 1,
                    Cell::SnakeBody => 2,
                    Cell::Food => 3,
                };
                counts[idx] += 1;
            }
        }
        assert_eq!(counts, [96, 1, 2, 1]);
    }

    #[test]
    fn test_projection_is_a_pure_function_of_state() {
        let mut engine = GameEngine::new(GameConfig::small());
        let state = engine.reset();

        assert_eq!(BoardView::project(&state), BoardView::project(&state));
    }

    #[test]
    fn test_food_overlay_wins_over_snake() {
        // The engine never produces this state, but the projection's
        // precedence is still defined: the food overlay is applied last.
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let state = GameState::new(snake, Position::new(4, 5), 10, 10);
        let view = BoardView::project(&state);

        assert_eq!(view.cell(4, 5), Cell::Food);
    }
}
