//! Confetti module - the win celebration animation
//!
//! A burst of [`CONFETTI_PIECES`] pieces in the winner's color starts at the
//! top of the view and falls the full grid height in [`CONFETTI_STEPS`] fixed
//! steps over [`CONFETTI_FALL_MS`]. All pieces fall in lockstep; only their
//! horizontal positions are random.
//!
//! Positions are resolution independent: `x` is in thousandths of the view
//! width and the fall is reported as a step count, so the renderer scales
//! both to whatever terminal size it has.

use arrayvec::ArrayVec;

use crate::session::RoundState;
use crate::snapshot::SessionSnapshot;
use crate::types::{Player, CONFETTI_FALL_MS, CONFETTI_PIECES, CONFETTI_STEPS};
use crate::SimpleRng;

/// Horizontal extent of the view in confetti units.
pub const CONFETTI_X_SCALE: u16 = 1000;

#[derive(Debug, Clone)]
pub struct Confetti {
    rng: SimpleRng,
    color: Option<Player>,
    xs: ArrayVec<u16, CONFETTI_PIECES>,
    elapsed_ms: u32,
    /// Round the current burst belongs to (0 = none yet).
    round: u32,
}

impl Confetti {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            color: None,
            xs: ArrayVec::new(),
            elapsed_ms: 0,
            round: 0,
        }
    }

    /// Start a new burst for `winner`, replacing any current one.
    pub fn burst(&mut self, winner: Player) {
        self.xs.clear();
        for _ in 0..CONFETTI_PIECES {
            let x = self.rng.next_inclusive(0, CONFETTI_X_SCALE as u32) as u16;
            self.xs.push(x);
        }
        self.color = Some(winner);
        self.elapsed_ms = 0;
    }

    pub fn clear(&mut self) {
        self.xs.clear();
        self.color = None;
        self.elapsed_ms = 0;
    }

    /// Keep the animation in step with the session.
    ///
    /// Bursts once when a round is won and clears as soon as the next round
    /// starts.
    pub fn sync(&mut self, snap: &SessionSnapshot) {
        match snap.state {
            RoundState::RoundOver { outcome, .. } => {
                if let Some(player) = outcome.winner() {
                    if self.round != snap.round_number {
                        self.round = snap.round_number;
                        self.burst(player);
                    }
                }
            }
            RoundState::AwaitingMove { .. } => {
                if self.color.is_some() {
                    self.clear();
                }
            }
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.color.is_some() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms).min(CONFETTI_FALL_MS);
        }
    }

    pub fn is_active(&self) -> bool {
        self.color.is_some()
    }

    /// Still moving (as opposed to resting at the bottom or absent).
    pub fn is_falling(&self) -> bool {
        self.is_active() && self.elapsed_ms < CONFETTI_FALL_MS
    }

    pub fn color(&self) -> Option<Player> {
        self.color
    }

    /// Number of fixed steps fallen so far, `0..=CONFETTI_STEPS`.
    pub fn step(&self) -> u32 {
        self.elapsed_ms * CONFETTI_STEPS / CONFETTI_FALL_MS
    }

    pub fn pieces(&self) -> &[u16] {
        &self.xs
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new(1)
    }
}
