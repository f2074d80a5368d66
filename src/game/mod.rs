//! Table engine and state management.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::auth::UserId;
use crate::card::Card;
use crate::error::{LedgerError, SourceError};
use crate::ledger::{HistoryRecord, Ledger, Profile};
use crate::options::GameOptions;
use crate::outcome::{Outcome, RoundSummary};
use crate::source::CardSource;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameEvent, GamePhase, GameState};

/// A settled round's ledger payload awaiting a successful write.
#[derive(Debug, Clone)]
struct PendingWrite {
    /// Profile as of settlement.
    profile: Profile,
    /// The round's history record.
    record: HistoryRecord,
}

/// A single-seat blackjack table.
///
/// The table owns the state aggregate and drives it through the reducer in
/// [`GameState::apply`]; cards come from the [`CardSource`] and settled
/// rounds are persisted through the [`Ledger`]. Every operation takes
/// `&mut self`, so one transition (including its awaited draws) runs to
/// completion before the next is accepted; concurrent events cannot
/// interleave on the same table.
pub struct Game<S, L> {
    /// Table options.
    pub options: GameOptions,
    /// The state aggregate.
    state: GameState,
    /// Card supplier.
    source: S,
    /// Persistence backend.
    ledger: L,
    /// Signed-in user, if any.
    user: Option<UserId>,
    /// Cached profile for the signed-in user.
    profile: Option<Profile>,
    /// Settled round still waiting on the ledger.
    pending: Option<PendingWrite>,
    /// Summary of the most recently settled round.
    last_round: Option<RoundSummary>,
}

impl<S: CardSource, L: Ledger> Game<S, L> {
    /// Creates a table with a guest session (no profile loaded).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjtable::{Game, GameOptions, LocalShoe, MemoryLedger};
    ///
    /// let options = GameOptions::default();
    /// let shoe = LocalShoe::new(options.decks, 42);
    /// let game = Game::new(options, shoe, MemoryLedger::new());
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, source: S, ledger: L) -> Self {
        let state = GameState::new(options.starting_balance);
        Self {
            options,
            state,
            source,
            ledger,
            user: None,
            profile: None,
            pending: None,
            last_round: None,
        }
    }

    /// Signs a user in and adopts their stored profile.
    ///
    /// A missing profile is created with the starter values. The stored
    /// preferred bet is prefilled into the bet entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be read; the session stays as
    /// it was.
    pub async fn sign_in(&mut self, user_id: impl Into<UserId>) -> Result<(), LedgerError> {
        let user_id = user_id.into();
        let profile = self.ledger.load_profile(&user_id).await?;
        debug!(user = %user_id, balance = profile.balance, "profile loaded");

        self.state.apply(GameEvent::SetProfile {
            balance: profile.balance,
            wins: profile.wins,
            losses: profile.losses,
        });
        self.state
            .apply(GameEvent::UpdateBetInput(profile.last_bet.to_string()));
        self.user = Some(user_id);
        self.profile = Some(profile);
        Ok(())
    }

    /// Signs the current user out and returns to guest defaults.
    ///
    /// Any queued ledger write is dropped with the session.
    pub fn sign_out(&mut self) {
        if self.pending.is_some() {
            warn!("signing out with an unflushed ledger write");
        }
        self.user = None;
        self.profile = None;
        self.pending = None;
        self.state.apply(GameEvent::SetProfile {
            balance: self.options.starting_balance,
            wins: 0,
            losses: 0,
        });
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the current state aggregate.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Returns the summary of the most recently settled round.
    #[must_use]
    pub const fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the card source mutably.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the ledger mutably (for leaderboard queries and the like).
    pub const fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Returns whether a settled round still awaits a successful ledger
    /// write.
    #[must_use]
    pub const fn has_pending_write(&self) -> bool {
        self.pending.is_some()
    }

    /// Retries a queued ledger write.
    ///
    /// # Errors
    ///
    /// Returns the ledger error and keeps the write queued if it fails
    /// again.
    pub async fn flush_pending(&mut self) -> Result<(), LedgerError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let Some(user) = self.user.clone() else {
            return Ok(());
        };

        if let Err(err) = self.write_round(&user, &pending.profile, &pending.record).await {
            self.pending = Some(pending);
            return Err(err);
        }
        debug!(user = %user, "queued ledger write flushed");
        Ok(())
    }

    /// Writes a settled round: profile first, then the history append.
    async fn write_round(
        &mut self,
        user: &str,
        profile: &Profile,
        record: &HistoryRecord,
    ) -> Result<(), LedgerError> {
        self.ledger.save_profile(user, profile).await?;
        self.ledger.append_history(user, record).await?;
        Ok(())
    }

    /// Draws one card; the draw fully completes or delivers nothing.
    async fn draw_one(&mut self) -> Result<Card, SourceError> {
        let mut cards = self.source.draw(1).await?;
        cards.pop().ok_or(SourceError::ShortDraw {
            requested: 1,
            got: 0,
        })
    }

    /// Applies the settlement for `outcome` and persists it.
    async fn settle(
        &mut self,
        outcome: Outcome,
        player_value: u8,
        dealer_value: u8,
    ) -> RoundSummary {
        let bet = self.state.bet_amount;
        let (message, payout) = match outcome {
            Outcome::Win => (format!("You Won {}", bet * 2), bet * 2),
            Outcome::Loss => (format!("You Lost {bet}"), 0),
            Outcome::Tie => ("It's a Tie!".to_owned(), bet),
        };
        let balance = self.state.balance + payout;
        let wins = self.state.wins + u32::from(outcome == Outcome::Win);
        let losses = self.state.losses + u32::from(outcome == Outcome::Loss);

        let record = HistoryRecord {
            timestamp: unix_now(),
            final_balance: balance,
            bet_amount: bet,
            result: message.clone(),
            player_hand: self.state.player_hand.codes(),
            dealer_hand: self.state.dealer_hand.codes(),
        };

        self.state.apply(GameEvent::EndRound {
            message: message.clone(),
            balance,
            wins,
            losses,
        });
        info!(?outcome, bet, balance, "round settled");

        self.persist(balance, wins, losses, bet, record).await;

        let summary = RoundSummary {
            outcome,
            message,
            bet,
            payout,
            balance,
            player_value,
            dealer_value,
        };
        self.last_round = Some(summary.clone());
        summary
    }

    /// Persists a settled round, queuing the write on failure. The local
    /// settlement is never rolled back.
    async fn persist(&mut self, balance: u64, wins: u32, losses: u32, bet: u64, record: HistoryRecord) {
        let Some(user) = self.user.clone() else {
            return;
        };
        let Some(cached) = self.profile.as_mut() else {
            return;
        };
        cached.balance = balance;
        cached.wins = wins;
        cached.losses = losses;
        cached.last_bet = bet;
        let profile = cached.clone();

        if let Err(err) = self.write_round(&user, &profile, &record).await {
            warn!(%err, user = %user, "ledger write failed; queued for retry");
            self.pending = Some(PendingWrite { profile, record });
        }
    }
}

/// Seconds since the Unix epoch.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
