use super::action::Direction;

/// A cell coordinate on the board
///
/// Coordinates are signed so that a candidate head position one step past an
/// edge is representable; the bounds check happens after the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by (dx, dy)
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// This position shifted one cell in `direction`
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// The snake: body cells head-first, plus its current heading
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments; index 0 is the head
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Build a snake of `length` cells with its head at `head`, the body
    /// trailing away opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let backwards = direction.reversed();
        let mut body = Vec::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push(cell);
            cell = cell.stepped(backwards);
        }
        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        *self.body.last().expect("snake body is never empty")
    }

    /// True if any segment, head included, sits on `pos`.
    ///
    /// This is the collision test the step function uses for the candidate
    /// head: the pre-move body, tail still in place. Chasing the tail cell
    /// is therefore fatal.
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Slide the snake one cell along its heading. With `grow` the tail
    /// stays put and the snake gets one cell longer.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().stepped(self.direction);
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// The head left the board
    HitWall,
    /// The head ran into the body
    HitSelf,
    /// The snake covers the whole board; there is nowhere left to put food
    BoardCleared,
}

/// Session phase: live, or finished with a cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Over(EndCause),
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Number of steps executed this session
    pub ticks: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            ticks: 0,
            status: GameStatus::Playing,
        }
    }

    /// True while the session has not ended
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}
