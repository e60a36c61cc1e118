//! Game session aggregate.
//!
//! One session owns a single game's round counter, remaining/burnt boards,
//! standing offer, status, and message journal. It is mutated exclusively
//! through the operations here; illegal transitions fail with typed errors
//! and never corrupt state.
//!
//! # Invariants
//!
//! - `remaining` and `burnt` are disjoint at all times
//! - `round` only increases
//! - an offer belongs to exactly the round it was computed in; replacing the
//!   board invalidates the standing offer
//! - status moves only forward (`Active` -> `Completed(_)`)
//! - the journal is append-only and insertion-ordered

use serde::Serialize;

use super::{GameError, GameOutcome, GameStatus, JournalEntry};
use crate::domain::foundation::{GameId, Timestamp};
use crate::domain::negotiation::OfferQuote;

/// The reference 21-amount prize board.
pub const DEFAULT_BOARD: [u64; 21] = [
    1, 5, 10, 25, 50, 100, 500, 1_000, 2_500, 5_000, 10_000, 25_000, 50_000, 75_000, 100_000,
    200_000, 300_000, 400_000, 500_000, 750_000, 1_000_000,
];

/// Game session aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    id: GameId,
    round: u32,
    remaining: Vec<u64>,
    burnt: Vec<u64>,
    selected: Option<u64>,
    current_offer: Option<OfferQuote>,
    final_amount: Option<u64>,
    status: GameStatus,
    journal: Vec<JournalEntry>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl GameSession {
    /// Creates a new active session in round 1 with the given board.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the board is empty
    pub fn new(id: GameId, board: Vec<u64>) -> Result<Self, GameError> {
        if board.is_empty() {
            return Err(GameError::invalid_state(
                "a game cannot start with an empty board",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            round: 1,
            remaining: board,
            burnt: Vec::new(),
            selected: None,
            current_offer: None,
            final_amount: None,
            status: GameStatus::Active,
            journal: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a new session with the reference board.
    pub fn with_default_board(id: GameId) -> Self {
        // DEFAULT_BOARD is non-empty, so new() cannot fail here.
        Self::new(id, DEFAULT_BOARD.to_vec()).unwrap_or_else(|_| unreachable!())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the current round (>= 1, monotone).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the amounts still in play.
    pub fn remaining(&self) -> &[u64] {
        &self.remaining
    }

    /// Returns the eliminated amounts.
    pub fn burnt(&self) -> &[u64] {
        &self.burnt
    }

    /// Returns the player's own box value, if declared.
    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Returns the standing offer, if one exists.
    pub fn current_offer(&self) -> Option<&OfferQuote> {
        self.current_offer.as_ref()
    }

    /// Returns the amount paid out, once a deal was accepted.
    pub fn final_amount(&self) -> Option<u64> {
        self.final_amount
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the journal in insertion order.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a journal entry. The journal is append-only; entries are
    /// never reordered or removed.
    pub fn append_entry(&mut self, entry: JournalEntry) {
        self.journal.push(entry);
        self.updated_at = Timestamp::now();
    }

    /// Records a freshly computed offer as the standing offer.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the game is no longer active
    pub fn record_offer(&mut self, quote: OfferQuote) -> Result<(), GameError> {
        self.ensure_active("record an offer")?;
        self.current_offer = Some(quote);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Accepts the standing offer and completes the game.
    ///
    /// The returned amount is immutable once accepted.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the game is no longer active
    /// - `InvalidState` if there is no standing offer
    pub fn accept_offer(&mut self) -> Result<u64, GameError> {
        self.ensure_active("accept an offer")?;

        let amount = self
            .current_offer
            .as_ref()
            .map(|quote| quote.amount)
            .ok_or_else(|| GameError::invalid_state("no standing offer to accept"))?;

        self.status = GameStatus::Completed(GameOutcome::Accepted);
        self.final_amount = Some(amount);
        self.updated_at = Timestamp::now();
        Ok(amount)
    }

    /// Rejects the standing offer, forfeiting further negotiation.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the game is no longer active
    pub fn reject_offer(&mut self) -> Result<(), GameError> {
        self.ensure_active("reject the deal")?;
        self.status = GameStatus::Completed(GameOutcome::Abandoned);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replaces the boards and round after boxes were opened.
    ///
    /// The standing offer is cleared: it was computed against the old board
    /// and a fresh turn must recompute it before another accept is valid.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the game is no longer active
    /// - `InvalidState` if the boards overlap, the new board is empty, or
    ///   the round would move backwards
    pub fn update_round_state(
        &mut self,
        remaining: Vec<u64>,
        burnt: Vec<u64>,
        round: u32,
        selected: Option<u64>,
    ) -> Result<(), GameError> {
        self.ensure_active("update the round state")?;

        if remaining.is_empty() {
            return Err(GameError::invalid_state(
                "the remaining board cannot be empty",
            ));
        }
        if round < self.round {
            return Err(GameError::invalid_state(format!(
                "round cannot move backwards ({} -> {})",
                self.round, round
            )));
        }
        if remaining.iter().any(|amount| burnt.contains(amount)) {
            return Err(GameError::invalid_state(
                "remaining and burnt boards must be disjoint",
            ));
        }

        self.remaining = remaining;
        self.burnt = burnt;
        self.round = round;
        self.selected = selected;
        self.current_offer = None;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Verifies the game still accepts player actions.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` carrying the current status if the game is in
    ///   a terminal state
    pub fn ensure_active(&self, action: &str) -> Result<(), GameError> {
        if self.status.is_active() {
            Ok(())
        } else {
            Err(GameError::invalid_transition(
                self.status,
                format!("cannot {} on a completed game", action),
            ))
        }
    }
}
