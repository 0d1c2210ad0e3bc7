//! Terminal input mapping (engine-facing).
//!
//! Maps `crossterm` key events into [`blockfall_types::GameAction`]
//! values. Each discrete key press produces at most one action; repetition
//! comes from the terminal's own auto-repeat.

pub mod map;

pub use map::{handle_key_event, should_quit};
