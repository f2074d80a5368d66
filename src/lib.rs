//! A single-seat blackjack table engine.
//!
//! The crate provides a [`Game`] state machine that drives a full round
//! (betting, dealing, player decisions, dealer auto-play, settlement) on
//! top of two pluggable collaborators: a [`CardSource`] that supplies
//! shuffled cards and a [`Ledger`] that persists balances and round
//! history.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Game, GameOptions, LocalShoe, MemoryLedger};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let options = GameOptions::default();
//! let shoe = LocalShoe::new(options.decks, 42);
//! let mut game = Game::new(options, shoe, MemoryLedger::new());
//!
//! game.sign_in("player-1").await?;
//! game.place_bet(100).await?;
//! let summary = game.stand().await?;
//! println!("{}", summary.message);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod auth;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod outcome;
pub mod source;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, card_value};
pub use error::{ActionError, BetError, InvalidCardCode, LedgerError, SourceError};
pub use game::{Game, GameEvent, GamePhase, GameState};
pub use hand::{DealerHand, Hand, evaluate_cards};
pub use ledger::{HistoryRecord, LeaderboardEntry, Ledger, MemoryLedger, Profile};
pub use options::{DealerRule, GameOptions};
pub use outcome::{Outcome, RoundSummary, resolve};
#[cfg(feature = "deck-api")]
pub use source::DeckApiSource;
pub use source::{CardSource, LocalShoe};
