//! Terminal Tic Tac Toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tictactoe::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tictactoe_core as core;
pub use tictactoe_input as input;
pub use tictactoe_term as term;
pub use tictactoe_types as types;
