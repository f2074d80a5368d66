//! Player and dealer hand representations.

use crate::card::{Card, card_value};
use crate::error::InvalidCardCode;

/// Evaluates the best blackjack total of the given cards.
///
/// Non-ace points are summed directly. With aces present, all but one count
/// as 1 and the last counts as 11 when that does not bust the hand, so the
/// result is the highest total that avoids busting where one is possible.
///
/// # Errors
///
/// Returns [`InvalidCardCode`] if any card carries an unknown rank glyph.
pub fn evaluate_cards(cards: &[Card]) -> Result<u8, InvalidCardCode> {
    let mut sum: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        let value = card_value(&card.code)?;
        if value.is_ace {
            aces += 1;
        } else {
            sum = sum.saturating_add(value.points);
        }
    }

    if aces == 0 {
        return Ok(sum);
    }

    let base = sum.saturating_add(aces - 1);
    let last = if base.saturating_add(11) <= 21 { 11 } else { 1 };
    Ok(base.saturating_add(last))
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from already-drawn cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card codes in draw order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.code.clone()).collect()
    }

    /// Calculates the value of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardCode`] if any card carries an unknown rank glyph.
    pub fn value(&self) -> Result<u8, InvalidCardCode> {
        evaluate_cards(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card in draw order is the up card; every later card stays
/// hidden from total calculation until the hole is revealed at the start of
/// dealer auto-play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Creates a hand from already-drawn cards, hole hidden.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card codes in draw order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.code.clone()).collect()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole is
    /// hidden).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardCode`] if any counted card carries an unknown
    /// rank glyph.
    pub fn visible_value(&self) -> Result<u8, InvalidCardCode> {
        if self.hole_revealed {
            self.value()
        } else {
            evaluate_cards(&self.cards[..self.cards.len().min(1)])
        }
    }

    /// Calculates the full value of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardCode`] if any card carries an unknown rank glyph.
    pub fn value(&self) -> Result<u8, InvalidCardCode> {
        evaluate_cards(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
