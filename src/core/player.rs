//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe identifier for whose ply it is. The search engine never
//! interprets player IDs beyond comparing them against the maximizing
//! player, so games with any number of seats can use it.

use serde::{Deserialize, Serialize};

/// Player identifier supporting up to 256 seats.
///
/// Games pick their own numbering. A game that stores tile owners in its
/// grid cells will usually reuse the same numbers for `PlayerId`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in a `player_count` seat rotation
    /// numbered from `first`.
    ///
    /// ```
    /// use minimax_engine::core::PlayerId;
    ///
    /// // Seats 1 and 2, as in a board whose cells use 0 for empty.
    /// assert_eq!(PlayerId::new(1).next_in(1, 2), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next_in(1, 2), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next_in(self, first: u8, player_count: u8) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        let offset = self.0.wrapping_sub(first) as u16;
        Self(first.wrapping_add(((offset + 1) % player_count as u16) as u8))
    }

    /// Iterate over all player IDs for a game with `player_count` players,
    /// numbered from zero.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}
