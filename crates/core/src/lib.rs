//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the round state machine and the
//! celebration animation state. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: time only advances through explicit `tick` calls
//! - **Testable**: every rule and transition is unit tested
//! - **Portable**: can drive a terminal, a GUI or a headless harness
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid with move validation and win/draw detection
//! - [`session`]: turn order, turn countdown, scores and round lifecycle
//! - [`snapshot`]: flat read-only view of a session for renderers
//! - [`confetti`]: win celebration particles
//! - [`rng`]: deterministic LCG used by the confetti
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{RoundState, Session, SessionConfig};
//! use tictactoe_types::{Line, Player, RoundOutcome};
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//!
//! // Player One takes the top row while Player Two plays the middle.
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     session.handle_move(row, col).unwrap();
//! }
//! let outcome = session.handle_move(0, 2).unwrap();
//!
//! assert_eq!(outcome, RoundOutcome::Win { player: Player::One, line: Line::Row(0) });
//! assert_eq!(session.scores().player1, 1);
//! assert!(matches!(session.current_state(), RoundState::RoundOver { .. }));
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) every frame with the elapsed
//! milliseconds. Only the running total matters, so frame rate jitter never
//! changes when a turn expires or when the next round starts.

pub mod board;
pub mod confetti;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use confetti::{Confetti, CONFETTI_X_SCALE};
pub use rng::SimpleRng;
pub use session::{RoundState, Scores, Session, SessionConfig};
pub use snapshot::SessionSnapshot;
