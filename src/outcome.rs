//! Round outcome resolution and settlement summaries.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Outcome of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Loss,
    /// Push (equal totals).
    Tie,
}

/// Decides the round outcome from the two totals.
///
/// Busts resolve immediately regardless of `round_ended`: a dealer bust is
/// a win even mid-auto-play, and a player bust is a loss before the dealer
/// ever acts. Totals are otherwise only compared once the round has ended;
/// `None` means the round continues.
#[must_use]
pub fn resolve(player_total: u8, dealer_total: u8, round_ended: bool) -> Option<Outcome> {
    if dealer_total > 21 {
        return Some(Outcome::Win);
    }
    if player_total > 21 {
        return Some(Outcome::Loss);
    }
    if !round_ended {
        return None;
    }
    Some(match player_total.cmp(&dealer_total) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Loss,
        Ordering::Equal => Outcome::Tie,
    })
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// User-facing settlement message.
    pub message: String,
    /// The round's bet.
    pub bet: u64,
    /// Amount returned to the balance (zero on a loss, the stake on a tie,
    /// twice the stake on a win).
    pub payout: u64,
    /// Balance after settlement.
    pub balance: u64,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
}
