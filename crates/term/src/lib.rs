//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: the view projects engine state
//! into a framebuffer of styled cells, and the renderer flushes frames to
//! the terminal's alternate screen. The view is pure and unit-tested; only
//! the renderer touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
