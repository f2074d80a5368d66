//! Card sources: where a table draws its cards from.
//!
//! A [`CardSource`] hands out shuffled cards one request at a time.
//! [`LocalShoe`] shuffles offline with a seeded RNG; [`DeckApiSource`]
//! fronts a remote shuffled-deck HTTP service.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::SourceError;

/// An asynchronous supplier of shuffled cards.
///
/// `draw` returns exactly `count` cards or fails; a partial draw is
/// reported as [`SourceError::ShortDraw`] and delivers nothing.
pub trait CardSource {
    /// Builds (or rebuilds) a shuffled shoe for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a shoe.
    async fn create_shoe(&mut self) -> Result<(), SourceError>;

    /// Draws `count` cards from the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or cannot deliver the
    /// full count.
    async fn draw(&mut self, count: usize) -> Result<Vec<Card>, SourceError>;
}

/// Rank glyphs in deck order.
const RANKS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'J', 'Q', 'K',
];
/// Suit glyphs in deck order.
const SUITS: [char; 4] = ['S', 'H', 'D', 'C'];

/// An offline shoe shuffled with a seeded RNG.
///
/// Card codes and image URIs follow the remote deck service conventions,
/// so the two sources are interchangeable at the table.
#[derive(Debug, Clone)]
pub struct LocalShoe {
    /// Number of decks per shoe.
    decks: u8,
    /// Remaining cards, drawn from the back.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl LocalShoe {
    /// Creates a shoe with the given deck count and seed.
    ///
    /// The shoe is empty until [`CardSource::create_shoe`] fills it.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        Self {
            decks,
            cards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Creates and shuffles the cards for `decks` decks.
    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in SUITS {
                for rank in RANKS {
                    let code = format!("{rank}{suit}");
                    let image = format!("https://deckofcardsapi.com/static/img/{code}.png");
                    cards.push(Card::new(code, image));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }
}

impl CardSource for LocalShoe {
    async fn create_shoe(&mut self) -> Result<(), SourceError> {
        self.cards = Self::build(self.decks, &mut self.rng);
        Ok(())
    }

    async fn draw(&mut self, count: usize) -> Result<Vec<Card>, SourceError> {
        if self.cards.len() < count {
            return Err(SourceError::ShortDraw {
                requested: count,
                got: self.cards.len(),
            });
        }
        Ok(self.cards.split_off(self.cards.len() - count))
    }
}

/// Default base URL of the remote deck service.
#[cfg(feature = "deck-api")]
#[cfg_attr(docsrs, doc(cfg(feature = "deck-api")))]
pub const DECK_API_BASE: &str = "https://deckofcardsapi.com/api/deck";

/// Response to a shuffle request.
#[cfg(feature = "deck-api")]
#[derive(Debug, serde::Deserialize)]
struct ShuffleResponse {
    success: bool,
    deck_id: String,
}

/// Response to a draw request.
#[cfg(feature = "deck-api")]
#[derive(Debug, serde::Deserialize)]
struct DrawResponse {
    success: bool,
    cards: Vec<Card>,
}

/// Client for a remote shuffled-deck HTTP service.
///
/// A shoe is a remote deck created by `new/shuffle/?deck_count=N`; draws go
/// to `{deck_id}/draw/?count=N`. Transport failures, decode failures, and
/// rejected requests all surface as [`SourceError::Unavailable`].
#[cfg(feature = "deck-api")]
#[cfg_attr(docsrs, doc(cfg(feature = "deck-api")))]
#[derive(Debug, Clone)]
pub struct DeckApiSource {
    /// HTTP client, reused across requests.
    client: reqwest::Client,
    /// Service base URL.
    base: String,
    /// Number of decks per shoe.
    decks: u8,
    /// Identifier of the current remote deck, if one was created.
    deck_id: Option<String>,
}

#[cfg(feature = "deck-api")]
impl DeckApiSource {
    /// Creates a client against the public deck service.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        Self::with_base(DECK_API_BASE, decks)
    }

    /// Creates a client against a custom base URL.
    #[must_use]
    pub fn with_base(base: impl Into<String>, decks: u8) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
            decks,
            deck_id: None,
        }
    }

    /// Maps a transport or decode failure.
    fn unavailable(err: reqwest::Error) -> SourceError {
        SourceError::Unavailable(err.to_string())
    }
}

#[cfg(feature = "deck-api")]
impl CardSource for DeckApiSource {
    async fn create_shoe(&mut self) -> Result<(), SourceError> {
        let url = format!("{}/new/shuffle/?deck_count={}", self.base, self.decks);
        let response: ShuffleResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::unavailable)?
            .json()
            .await
            .map_err(Self::unavailable)?;

        if !response.success {
            return Err(SourceError::Unavailable("shuffle rejected".to_owned()));
        }

        self.deck_id = Some(response.deck_id);
        Ok(())
    }

    async fn draw(&mut self, count: usize) -> Result<Vec<Card>, SourceError> {
        if self.deck_id.is_none() {
            self.create_shoe().await?;
        }
        let deck_id = self
            .deck_id
            .clone()
            .ok_or_else(|| SourceError::Unavailable("no shoe created".to_owned()))?;

        let url = format!("{}/{deck_id}/draw/?count={count}", self.base);
        let response: DrawResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::unavailable)?
            .json()
            .await
            .map_err(Self::unavailable)?;

        if !response.success {
            return Err(SourceError::Unavailable("draw rejected".to_owned()));
        }
        if response.cards.len() != count {
            return Err(SourceError::ShortDraw {
                requested: count,
                got: response.cards.len(),
            });
        }

        Ok(response.cards)
    }
}

#[cfg(all(test, feature = "deck-api"))]
mod tests {
    use super::{DrawResponse, ShuffleResponse};

    #[test]
    fn decodes_shuffle_response() {
        let body = r#"{"success": true, "deck_id": "3p40paa87x90", "shuffled": true, "remaining": 52}"#;
        let response: ShuffleResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.deck_id, "3p40paa87x90");
    }

    #[test]
    fn decodes_draw_response_with_extra_fields() {
        let body = r#"{
            "success": true,
            "deck_id": "3p40paa87x90",
            "cards": [
                {
                    "code": "6H",
                    "image": "https://deckofcardsapi.com/static/img/6H.png",
                    "images": {"svg": "https://deckofcardsapi.com/static/img/6H.svg"},
                    "value": "6",
                    "suit": "HEARTS"
                }
            ],
            "remaining": 50
        }"#;
        let response: DrawResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.cards.len(), 1);
        assert_eq!(response.cards[0].code, "6H");
    }
}
