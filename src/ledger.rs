//! Ledger persistence: profiles, round history, and the leaderboard.
//!
//! The table treats its backing store as an abstract [`Ledger`]; the
//! balance, win and loss counters in [`GameState`](crate::GameState) are a
//! local cache of the stored profile between persists. [`MemoryLedger`]
//! backs tests and demos.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Balance written into a freshly created profile.
pub const DEFAULT_BALANCE: u64 = 2000;
/// Preferred bet written into a freshly created profile.
pub const DEFAULT_LAST_BET: u64 = 100;

/// A player profile as stored by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Chips available to bet.
    pub balance: u64,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Preferred bet, prefilled into the bet entry on the next session.
    pub last_bet: u64,
    /// Display name shown on the leaderboard.
    pub name: String,
}

impl Profile {
    /// The profile created on a user's first sign-in.
    #[must_use]
    pub fn starter(user_id: &str) -> Self {
        let short: String = user_id.chars().take(6).collect();
        Self {
            balance: DEFAULT_BALANCE,
            wins: 0,
            losses: 0,
            last_bet: DEFAULT_LAST_BET,
            name: format!("User_{short}"),
        }
    }
}

/// One settled round, appended to a player's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unix timestamp (seconds) of settlement.
    pub timestamp: u64,
    /// Balance after settlement.
    pub final_balance: u64,
    /// The round's bet.
    pub bet_amount: u64,
    /// The settlement message.
    pub result: String,
    /// Player card codes in draw order.
    pub player_hand: Vec<String>,
    /// Dealer card codes in draw order.
    pub dealer_hand: Vec<String>,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub balance: u64,
}

/// Backing store for profiles and round history.
pub trait Ledger {
    /// Loads the profile for `user_id`, creating and storing the starter
    /// profile if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn load_profile(&mut self, user_id: &str) -> Result<Profile, LedgerError>;

    /// Overwrites the stored profile for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; callers queue and retry.
    async fn save_profile(&mut self, user_id: &str, profile: &Profile) -> Result<(), LedgerError>;

    /// Appends a round record to the user's history. Records are append
    /// only; nothing ever rewrites them.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; callers queue and retry.
    async fn append_history(
        &mut self,
        user_id: &str,
        record: &HistoryRecord,
    ) -> Result<(), LedgerError>;

    /// Returns all known players ordered by balance, highest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, LedgerError>;
}

/// In-memory ledger for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    /// Stored profiles by user id.
    profiles: HashMap<String, Profile>,
    /// Round history by user id, oldest first.
    history: HashMap<String, Vec<HistoryRecord>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored history for a user, oldest first.
    #[must_use]
    pub fn history(&self, user_id: &str) -> &[HistoryRecord] {
        self.history.get(user_id).map_or(&[], Vec::as_slice)
    }

    /// Returns the stored profile for a user, if any.
    #[must_use]
    pub fn profile(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.get(user_id)
    }
}

impl Ledger for MemoryLedger {
    async fn load_profile(&mut self, user_id: &str) -> Result<Profile, LedgerError> {
        Ok(self
            .profiles
            .entry(user_id.to_owned())
            .or_insert_with(|| Profile::starter(user_id))
            .clone())
    }

    async fn save_profile(&mut self, user_id: &str, profile: &Profile) -> Result<(), LedgerError> {
        self.profiles.insert(user_id.to_owned(), profile.clone());
        Ok(())
    }

    async fn append_history(
        &mut self,
        user_id: &str,
        record: &HistoryRecord,
    ) -> Result<(), LedgerError> {
        self.history
            .entry(user_id.to_owned())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, LedgerError> {
        let mut rows: Vec<LeaderboardEntry> = self
            .profiles
            .iter()
            .map(|(id, profile)| LeaderboardEntry {
                id: id.clone(),
                name: profile.name.clone(),
                balance: profile.balance,
            })
            .collect();
        rows.sort_by(|a, b| b.balance.cmp(&a.balance));
        Ok(rows)
    }
}
