//! Card types and code parsing.

use serde::{Deserialize, Serialize};

use crate::error::InvalidCardCode;

/// A playing card as dealt by a card source.
///
/// Cards are identified by a compact rank+suit code such as `"AS"` or
/// `"0H"`; the face image URI is supplied by the source and passed through
/// untouched. A card never changes once drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank and suit code. The first character is the rank glyph:
    /// `'A'`, `'2'`..`'9'`, `'0'` (ten), `'J'`, `'Q'`, `'K'`.
    pub code: String,
    /// Face image URI.
    pub image: String,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: the code is not validated here; [`card_value`] reports a
    /// malformed code once the card is evaluated.
    #[must_use]
    pub fn new(code: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            image: image.into(),
        }
    }
}

/// Blackjack point value of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardValue {
    /// Points the card contributes directly. Zero for aces, whose value is
    /// resolved against the whole hand.
    pub points: u8,
    /// Whether the card is an ace.
    pub is_ace: bool,
}

/// Looks up the point value of a card code.
///
/// # Errors
///
/// Returns [`InvalidCardCode`] if the leading character is not a known rank
/// glyph.
pub fn card_value(code: &str) -> Result<CardValue, InvalidCardCode> {
    match code.chars().next() {
        Some('A') => Ok(CardValue {
            points: 0,
            is_ace: true,
        }),
        Some('K' | 'Q' | 'J' | '0') => Ok(CardValue {
            points: 10,
            is_ace: false,
        }),
        Some(digit @ '2'..='9') => Ok(CardValue {
            points: digit as u8 - b'0',
            is_ace: false,
        }),
        _ => Err(InvalidCardCode {
            code: code.to_owned(),
        }),
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
