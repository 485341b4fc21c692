//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and instead renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One geometry ([`BoardLayout`]) for both drawing and pointer hit-testing
//! - Redraw only what changed

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod render_throttle;
pub mod renderer;

pub use tictactoe_core as core;
pub use tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{player_color, EffectsView, GameView};
pub use layout::{BoardLayout, Hit, Rect, Viewport, CLOSE_LABEL, PANEL_HEIGHT};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
