//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under the stable
//! `blockfall::{core,input,term,types}` paths used by the binary, the
//! integration tests, and the benchmarks.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
