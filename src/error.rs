//! Error types for card and deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building or checking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not below [`NUM_RANKS`](crate::card::NUM_RANKS).
    #[error("rank {0} out of bounds")]
    RankOutOfRange(u8),
    /// Suit is not below [`NUM_SUITS`](crate::card::NUM_SUITS).
    #[error("suit {0} out of bounds")]
    SuitOutOfRange(u8),
    /// The value is not a card.
    #[error("value is not a card")]
    NotACard,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card is not in the deck.
    #[error("{0} not found in deck")]
    NotFound(Card),
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Position is past the top of the deck.
    #[error("index {index} out of bounds for deck of {len} cards")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}
