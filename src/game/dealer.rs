use tracing::debug;

use crate::error::ActionError;
use crate::ledger::Ledger;
use crate::outcome::{RoundSummary, resolve};
use crate::source::CardSource;

use super::{Game, GameEvent, GamePhase};

impl<S: CardSource, L: Ledger> Game<S, L> {
    /// Player action: stand. Reveals the hole card, plays out the dealer,
    /// and settles the round.
    ///
    /// The dealer draws one awaited card at a time, re-evaluating the full
    /// hand before each request, until the configured rule says stand or
    /// the hand busts. Draws are strictly sequential; each result is
    /// observed before the next request goes out.
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase, if a draw fails mid-play
    /// (the partial hand is kept and the round must be reset), or if a card
    /// carries a malformed code.
    #[expect(
        clippy::missing_panics_doc,
        reason = "ended rounds always resolve to an outcome"
    )]
    pub async fn stand(&mut self) -> Result<RoundSummary, ActionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(ActionError::InvalidState);
        }

        self.state.apply(GameEvent::DealerReveals);
        let player = self.state.player_hand.value()?;

        loop {
            let dealer = self.state.dealer_hand.value()?;
            if dealer > 21 {
                break;
            }
            if !self
                .options
                .dealer_rule
                .should_draw(dealer, player, self.options.dealer_stands_on)
            {
                break;
            }

            let card = self.draw_one().await?;
            debug!(code = %card.code, total = dealer, "dealer draws");
            self.state.apply(GameEvent::DealerDraws(card));
        }

        let dealer = self.state.dealer_hand.value()?;
        let outcome =
            resolve(player, dealer, true).expect("ended rounds always resolve to an outcome");

        Ok(self.settle(outcome, player, dealer).await)
    }
}
