use tracing::debug;

use crate::error::BetError;
use crate::ledger::Ledger;
use crate::source::CardSource;

use super::{Game, GameEvent, GamePhase};

impl<S: CardSource, L: Ledger> Game<S, L> {
    /// Places a bet and deals the opening hands.
    ///
    /// The bet is deducted atomically with validation, a fresh shoe is
    /// created, and two cards are dealt to each side. If the source fails
    /// after the deduction the deduction stands and the table stays in the
    /// betting phase with empty hands; the caller resets explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not accepting bets, the amount is
    /// zero or exceeds the balance (no state change in either case), or the
    /// card source fails.
    pub async fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if self.state.phase != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.state.balance {
            return Err(BetError::InsufficientBalance);
        }

        self.state.apply(GameEvent::PlaceBet(amount));
        debug!(amount, balance = self.state.balance, "bet placed");

        self.source.create_shoe().await?;
        let player_hand = self.source.draw(2).await?;
        let dealer_hand = self.source.draw(2).await?;

        self.state.apply(GameEvent::StartRound {
            player_hand,
            dealer_hand,
        });
        debug!("opening hands dealt");

        Ok(())
    }
}
