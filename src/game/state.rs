//! Game phases, the state aggregate, and the event reducer.

use crate::card::Card;
use crate::hand::{DealerHand, Hand};

/// Game phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Accepting a bet for the next round.
    #[default]
    Betting,
    /// The player decides; the dealer's hole card stays hidden.
    Playing,
    /// The round is settled; waiting for a reset.
    GameOver,
}

/// Events accepted by the state reducer.
///
/// The machine operations validate guards, perform I/O, and then construct
/// these; [`GameState::apply`] is the single place where state mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Adopt a loaded profile's numbers.
    SetProfile {
        /// Stored balance.
        balance: u64,
        /// Stored win count.
        wins: u32,
        /// Stored loss count.
        losses: u32,
    },
    /// Mirror the bet entry field.
    UpdateBetInput(String),
    /// Deduct and record the bet.
    PlaceBet(u64),
    /// Adopt the opening hands and start play.
    StartRound {
        /// Player's two opening cards.
        player_hand: Vec<Card>,
        /// Dealer's two opening cards; hole hidden.
        dealer_hand: Vec<Card>,
    },
    /// Append a card to the player's hand.
    PlayerDraws(Card),
    /// Reveal the dealer's hole card.
    DealerReveals,
    /// Append a card to the dealer's hand.
    DealerDraws(Card),
    /// Settle the round.
    EndRound {
        /// Settlement message for the UI modal.
        message: String,
        /// Balance after settlement.
        balance: u64,
        /// Win count after settlement.
        wins: u32,
        /// Loss count after settlement.
        losses: u32,
    },
    /// Clear the round and return to betting.
    Reset,
}

/// The table's single mutable aggregate.
///
/// Balance, wins and losses mirror the ledger between persists; everything
/// else is round-scoped and cleared by [`GameEvent::Reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase.
    pub phase: GamePhase,
    /// Player's cards in draw order.
    pub player_hand: Hand,
    /// Dealer's cards in draw order; visibility lives on the hand itself.
    pub dealer_hand: DealerHand,
    /// The round's bet; zero between rounds.
    pub bet_amount: u64,
    /// Chips available to bet.
    pub balance: u64,
    /// Rounds won on this profile.
    pub wins: u32,
    /// Rounds lost on this profile.
    pub losses: u32,
    /// Settlement message for the UI modal.
    pub modal_message: Option<String>,
    /// Raw bet entry text mirrored from the UI.
    pub bet_input: String,
}

impl GameState {
    /// Creates fresh state with the given balance and no round in progress.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self {
            phase: GamePhase::Betting,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bet_amount: 0,
            balance,
            wins: 0,
            losses: 0,
            modal_message: None,
            bet_input: String::new(),
        }
    }

    /// Returns whether the dealer's hole card has been revealed this round.
    #[must_use]
    pub const fn dealer_card_visible(&self) -> bool {
        self.dealer_hand.is_hole_revealed()
    }

    /// Applies one event to the aggregate.
    ///
    /// This is the whole transition table; operations uphold the guards
    /// (bet bounds, phase checks) before constructing events.
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::SetProfile {
                balance,
                wins,
                losses,
            } => {
                self.balance = balance;
                self.wins = wins;
                self.losses = losses;
            }
            GameEvent::UpdateBetInput(text) => self.bet_input = text,
            GameEvent::PlaceBet(amount) => {
                self.balance = self.balance.saturating_sub(amount);
                self.bet_amount = amount;
            }
            GameEvent::StartRound {
                player_hand,
                dealer_hand,
            } => {
                self.player_hand = Hand::from_cards(player_hand);
                self.dealer_hand = DealerHand::from_cards(dealer_hand);
                self.phase = GamePhase::Playing;
            }
            GameEvent::PlayerDraws(card) => self.player_hand.add_card(card),
            GameEvent::DealerReveals => self.dealer_hand.reveal_hole(),
            GameEvent::DealerDraws(card) => self.dealer_hand.add_card(card),
            GameEvent::EndRound {
                message,
                balance,
                wins,
                losses,
            } => {
                self.phase = GamePhase::GameOver;
                self.modal_message = Some(message);
                self.balance = balance;
                self.wins = wins;
                self.losses = losses;
            }
            GameEvent::Reset => {
                self.phase = GamePhase::Betting;
                self.player_hand.clear();
                self.dealer_hand.clear();
                self.bet_amount = 0;
                self.modal_message = None;
                self.bet_input.clear();
            }
        }
    }
}
