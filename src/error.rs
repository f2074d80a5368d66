//! Error types for table operations.

use thiserror::Error;

/// A card code whose rank glyph is not recognized.
///
/// This is a data error from the card source, fatal to the evaluation that
/// found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card code `{code}`")]
pub struct InvalidCardCode {
    /// The offending code.
    pub code: String,
}

/// Errors from a card source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not be reached or refused the request.
    #[error("card source unavailable: {0}")]
    Unavailable(String),
    /// The source returned fewer cards than requested.
    #[error("card source returned {got} of {requested} requested cards")]
    ShortDraw {
        /// Cards requested.
        requested: usize,
        /// Cards actually returned.
        got: usize,
    },
}

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted between rounds.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount exceeds the current balance.
    #[error("bet exceeds balance")]
    InsufficientBalance,
    /// The opening deal failed; the deducted bet stands until reset.
    #[error("opening deal failed")]
    Draw(#[from] SourceError),
}

/// Errors that can occur during player actions and dealer play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current phase.
    #[error("invalid game state for this action")]
    InvalidState,
    /// A card draw failed; the round is aborted and must be reset.
    #[error("card draw failed")]
    Draw(#[from] SourceError),
    /// A drawn card carried a malformed code.
    #[error("malformed card in hand")]
    Card(#[from] InvalidCardCode),
}

/// Errors from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger could not be read.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
    /// A profile or history write failed. Local state is kept; the write is
    /// queued for retry, never rolled back.
    #[error("ledger write failed: {0}")]
    WriteFailed(String),
}
