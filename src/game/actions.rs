use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::ledger::Ledger;
use crate::outcome::resolve;
use crate::source::CardSource;

use super::{Game, GameEvent, GamePhase};

impl<S: CardSource, L: Ledger> Game<S, L> {
    /// Player action: hit (draw a card).
    ///
    /// The card either fully joins the hand or, on a failed draw, the hand
    /// is untouched. A total over 21 settles the round as a loss on the
    /// spot; otherwise play continues.
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase, if the draw fails, or if
    /// a card in the hand carries a malformed code.
    pub async fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_one().await?;
        self.state.apply(GameEvent::PlayerDraws(card.clone()));
        debug!(code = %card.code, "player hits");

        let player = self.state.player_hand.value()?;
        let dealer = self.state.dealer_hand.visible_value()?;
        if let Some(outcome) = resolve(player, dealer, false) {
            self.settle(outcome, player, dealer).await;
        }

        Ok(card)
    }

    /// Mirrors the UI bet entry into the state aggregate.
    pub fn update_bet_input(&mut self, text: impl Into<String>) {
        self.state.apply(GameEvent::UpdateBetInput(text.into()));
    }

    /// Clears the round and returns to betting.
    ///
    /// Valid in any phase; it doubles as the abort after a failed deal or
    /// draw. Balance, wins and losses persist across resets; a deducted bet
    /// from an aborted round is not refunded. Calling this repeatedly is a
    /// no-op.
    pub fn reset(&mut self) {
        self.state.apply(GameEvent::Reset);
        debug!("round reset");
    }
}
