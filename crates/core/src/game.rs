//! The game engine: grid, active/next pieces, score and the lock protocol.
//!
//! The engine is synchronous and untimed. An external driver forwards
//! discrete player commands and calls [`Game::tick`] on a fixed interval
//! for gravity; it reads state back out through the accessors every frame.
//!
//! A piece locks through exactly one protocol: lock the cells into the
//! grid, clear full rows, spawn the next piece. A spawn that collides
//! immediately ends the game; the inactive state is terminal and every
//! command becomes a no-op.

use blockfall_types::GameAction;

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::line_clear_score;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    active: bool,
    rng: SimpleRng,
}

impl Game {
    /// Create a game with an empty rows x cols grid and two random pieces.
    ///
    /// The seed fixes the whole piece sequence, so tests can reproduce a
    /// game exactly.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero (see [`Board::new`]).
    pub fn new(rows: u8, cols: u8, seed: u32) -> Self {
        let board = Board::new(rows, cols);
        let mut rng = SimpleRng::new(seed);
        let current = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);
        Self {
            board,
            current,
            next,
            score: 0,
            active: true,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for scenario setup in tests and benches.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The pre-generated piece shown in the preview box.
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// False once a spawn has collided; never becomes true again.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `piece` overlaps the grid's locked cells or leaves its
    /// bounds. Pure: reads only.
    ///
    /// There is no top-edge check; pieces enter at row 0 and only ever
    /// move down.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().iter().any(|&(dx, dy)| {
            let x = piece.x + dx;
            let y = piece.y + dy;
            y >= self.board.rows() as i8
                || x < 0
                || x >= self.board.cols() as i8
                || self.board.is_occupied(x, y)
        })
    }

    /// Promote `next` to `current` and draw a fresh `next`.
    ///
    /// A promoted piece that already collides ends the game.
    fn spawn_piece(&mut self) {
        self.current = self.next;
        self.next = Piece::spawn(&mut self.rng);
        if self.collides(&self.current) {
            self.active = false;
        }
    }

    /// The "piece landed" protocol: lock, clear, spawn.
    ///
    /// Callers must have moved `current` to its resting position first;
    /// the sequence is atomic from the driver's point of view.
    pub fn lock_current(&mut self) {
        if !self.active {
            return;
        }
        let cells = self.current.cells();
        self.board
            .lock_cells(cells, self.current.x, self.current.y, self.current.color);
        let cleared = self.board.clear_full_rows();
        self.score += line_clear_score(cleared.len());
        self.spawn_piece();
    }

    /// One step of gravity or soft drop. On collision the step is reverted
    /// and the piece locks — the only lock path besides [`Game::hard_drop`].
    pub fn move_down(&mut self) {
        if !self.active {
            return;
        }
        self.current.y += 1;
        if self.collides(&self.current) {
            self.current.y -= 1;
            self.lock_current();
        }
    }

    /// Shift one column; `dx` is -1 (left) or +1 (right). A blocked shift
    /// is reverted and never locks.
    pub fn move_side(&mut self, dx: i8) {
        if !self.active {
            return;
        }
        self.current.x += dx;
        if self.collides(&self.current) {
            self.current.x -= dx;
        }
    }

    /// Drop to the lowest legal row and lock there.
    ///
    /// Terminates because descending eventually exits the grid.
    pub fn hard_drop(&mut self) {
        if !self.active {
            return;
        }
        while !self.collides(&self.current) {
            self.current.y += 1;
        }
        self.current.y -= 1;
        self.lock_current();
    }

    /// Advance the current piece's rotation.
    ///
    /// Always succeeds, with no kick and no legality check; an overlap
    /// created against a wall or the stack is resolved by the next
    /// collision-checked command.
    pub fn rotate(&mut self) {
        if !self.active {
            return;
        }
        self.current.rotate();
    }

    pub fn move_left(&mut self) {
        self.move_side(-1);
    }

    pub fn move_right(&mut self) {
        self.move_side(1);
    }

    pub fn soft_drop(&mut self) {
        self.move_down();
    }

    /// Gravity. The driver calls this once per fixed interval.
    pub fn tick(&mut self) {
        self.move_down();
    }

    /// Dispatch a player command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }
}
