//! Core game engine - pure, deterministic, and testable.
//!
//! This crate contains the whole rule set of the game and nothing else:
//! no I/O, no timing, no rendering. It is driven entirely by synchronous
//! method calls from an external loop and is deterministic under a fixed
//! RNG seed.
//!
//! # Module structure
//!
//! - [`board`]: the rows x cols grid of locked color cells, full-row
//!   detection and compaction
//! - [`game`]: the [`Game`] engine - spawn, collision, the
//!   lock/clear/spawn protocol, player commands and the gravity tick
//! - [`piece`]: the value-semantics piece record
//! - [`rng`]: seedable LCG used for uniform shape/color draws
//! - [`scoring`]: the quadratic line-clear formula
//! - [`shapes`]: static rotation-layout tables for the seven families
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//!
//! let mut game = Game::new(20, 10, 12345);
//! game.move_left();
//! game.rotate();
//! game.hard_drop();
//!
//! assert!(game.board().cells().iter().any(|&c| c != 0));
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use shapes::{layout, layouts, rotation_count, Layout};
