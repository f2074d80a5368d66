//! Table configuration options.

/// Dealer auto-play rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealerRule {
    /// Dealer stands at a fixed total, independent of the player's hand
    /// (standard casino rule).
    #[default]
    FixedThreshold,
    /// Dealer keeps drawing while behind the player and under 21
    /// (informal house rule).
    ChasePlayer,
}

impl DealerRule {
    /// Returns whether the dealer draws another card at the given totals.
    ///
    /// `stands_on` only applies to [`DealerRule::FixedThreshold`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::DealerRule;
    ///
    /// assert!(DealerRule::FixedThreshold.should_draw(16, 20, 17));
    /// assert!(!DealerRule::FixedThreshold.should_draw(17, 20, 17));
    /// ```
    #[must_use]
    pub const fn should_draw(self, dealer_total: u8, player_total: u8, stands_on: u8) -> bool {
        match self {
            Self::FixedThreshold => dealer_total < stands_on,
            Self::ChasePlayer => dealer_total < player_total && dealer_total < 21,
        }
    }
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in a fresh shoe.
    pub decks: u8,
    /// Dealer auto-play rule.
    pub dealer_rule: DealerRule,
    /// Total at which the dealer stands under the fixed-threshold rule.
    pub dealer_stands_on: u8,
    /// Starting balance for sessions without a stored profile.
    pub starting_balance: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_rule: DealerRule::FixedThreshold,
            dealer_stands_on: 17,
            starting_balance: 2000,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the dealer auto-play rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealerRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_dealer_rule(DealerRule::ChasePlayer);
    /// assert_eq!(options.dealer_rule, DealerRule::ChasePlayer);
    /// ```
    #[must_use]
    pub const fn with_dealer_rule(mut self, rule: DealerRule) -> Self {
        self.dealer_rule = rule;
        self
    }

    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the starting balance for sessions without a stored profile.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }
}
