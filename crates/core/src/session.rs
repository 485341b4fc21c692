//! Session module - turn order, the turn countdown, scores and round lifecycle
//!
//! A [`Session`] lives for the whole process. It owns the board for the
//! current round and runs the round state machine:
//!
//! ```text
//!   AwaitingMove(p, t) --accepted move, round continues--> AwaitingMove(other p, budget)
//!   AwaitingMove(p, t) --countdown expires-------------->  AwaitingMove(other p, budget)
//!   AwaitingMove(p, t) --accepted move, win or draw----->  RoundOver(outcome, delay)
//!   RoundOver(o, d)    --delay elapses----------------->   AwaitingMove(Player One, budget)
//! ```
//!
//! All timing is driven by [`Session::tick`] and depends only on the total
//! elapsed time fed in, never on how it is split across calls.

use tracing::{debug, info, instrument};

use crate::{snapshot::SessionSnapshot, Board};
use crate::types::{
    ConfigError, MoveRejected, MoveResult, Player, RoundOutcome, ROUND_OVER_DELAY_MS,
    TURN_BUDGET_MS,
};

/// Controller timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Time each player gets to place a mark before forfeiting the turn.
    pub turn_budget_ms: u32,
    /// Celebration window between the end of a round and the next one.
    pub round_over_delay_ms: u32,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_budget_ms == 0 {
            return Err(ConfigError::ZeroTurnBudget);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_budget_ms: TURN_BUDGET_MS,
            round_over_delay_ms: ROUND_OVER_DELAY_MS,
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    AwaitingMove {
        active: Player,
        time_remaining_ms: u32,
    },
    RoundOver {
        outcome: RoundOutcome,
        resume_in_ms: u32,
    },
}

/// Cumulative round wins for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scores {
    pub player1: u32,
    pub player2: u32,
}

impl Scores {
    fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }
}

/// Round/session controller
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    config: SessionConfig,
    state: RoundState,
    scores: Scores,
    /// 1-based, increments every time the board is cleared for a new round.
    round_number: u32,
    /// Most recent accepted placement in this round.
    last_move: Option<(u8, u8)>,
    /// Turns lost to the countdown, across all rounds.
    forfeits: u32,
}

impl Session {
    /// Create a session with an empty board and Player One to move.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Caller guarantees `config` is valid.
    fn with_config(config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            state: RoundState::AwaitingMove {
                active: Player::One,
                time_remaining_ms: config.turn_budget_ms,
            },
            scores: Scores::default(),
            round_number: 1,
            last_move: None,
            forfeits: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_state(&self) -> RoundState {
        self.state
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    pub fn forfeits(&self) -> u32 {
        self.forfeits
    }

    /// Active player, or `None` while the round is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            RoundState::AwaitingMove { active, .. } => Some(active),
            RoundState::RoundOver { .. } => None,
        }
    }

    /// Place the active player's mark at (row, col).
    ///
    /// A rejected move changes nothing: not the board, not the turn, not the
    /// countdown.
    pub fn handle_move(&mut self, row: u8, col: u8) -> MoveResult {
        let RoundState::AwaitingMove { active, .. } = self.state else {
            debug!(row, col, "move ignored, round is over");
            return Err(MoveRejected::GameAlreadyOver);
        };

        if let Err(err) = self.board.place(row, col, active) {
            debug!(row, col, %err, "move rejected");
            return Err(err.into());
        }
        self.last_move = Some((row, col));

        let outcome = self.board.evaluate();
        match outcome {
            RoundOutcome::InProgress => {
                debug!(row, col, player = active.number(), "move accepted");
                self.state = RoundState::AwaitingMove {
                    active: active.other(),
                    time_remaining_ms: self.config.turn_budget_ms,
                };
            }
            RoundOutcome::Win { player, line } => {
                self.scores.increment(player);
                info!(
                    round = self.round_number,
                    winner = player.number(),
                    ?line,
                    player1 = self.scores.player1,
                    player2 = self.scores.player2,
                    "round won"
                );
                self.end_round(outcome);
            }
            RoundOutcome::Draw => {
                info!(round = self.round_number, "round drawn");
                self.end_round(outcome);
            }
        }

        Ok(outcome)
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        self.state = RoundState::RoundOver {
            outcome,
            resume_in_ms: self.config.round_over_delay_ms,
        };
    }

    /// Advance the clock by `elapsed_ms`.
    ///
    /// While awaiting a move this runs the turn countdown; every time it
    /// reaches zero the turn passes to the other player with a fresh budget.
    /// While the round is over it runs the celebration delay and then starts
    /// the next round. Time left over after a transition carries into the
    /// next state.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let mut elapsed = elapsed_ms;
        loop {
            match self.state {
                RoundState::AwaitingMove {
                    active,
                    time_remaining_ms,
                } => {
                    if elapsed < time_remaining_ms {
                        self.state = RoundState::AwaitingMove {
                            active,
                            time_remaining_ms: time_remaining_ms - elapsed,
                        };
                        return;
                    }

                    // First expiry, then however many whole budgets fit in the rest.
                    elapsed -= time_remaining_ms;
                    let budget = self.config.turn_budget_ms;
                    let extra = elapsed / budget;
                    elapsed %= budget;

                    let mut next = active.other();
                    if extra % 2 == 1 {
                        next = next.other();
                    }
                    self.forfeits = self.forfeits.wrapping_add(1).wrapping_add(extra);
                    debug!(
                        from = active.number(),
                        to = next.number(),
                        turns = 1 + extra,
                        "turn forfeited"
                    );
                    self.state = RoundState::AwaitingMove {
                        active: next,
                        time_remaining_ms: budget - elapsed,
                    };
                    return;
                }
                RoundState::RoundOver {
                    outcome,
                    resume_in_ms,
                } => {
                    if elapsed < resume_in_ms {
                        self.state = RoundState::RoundOver {
                            outcome,
                            resume_in_ms: resume_in_ms - elapsed,
                        };
                        return;
                    }
                    elapsed -= resume_in_ms;
                    self.start_next_round();
                }
            }
        }
    }

    /// Clear the board and hand the first move to Player One.
    ///
    /// Scores are kept.
    #[instrument(skip(self), fields(round = self.round_number + 1))]
    pub fn start_next_round(&mut self) {
        self.board.reset();
        self.last_move = None;
        self.round_number = self.round_number.wrapping_add(1);
        self.state = RoundState::AwaitingMove {
            active: Player::One,
            time_remaining_ms: self.config.turn_budget_ms,
        };
        info!("new round");
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.board = *self.board.cells();
        out.state = self.state;
        out.scores = self.scores;
        out.round_number = self.round_number;
        out.last_move = self.last_move;
        out.turn_budget_ms = self.config.turn_budget_ms;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}
