//! Playing cards and decks with optional `no_std` support.
//!
//! A [`Card`] is a validated `(rank, suit)` pair and a [`Deck`] is an ordered
//! pile of cards, bottom first. Decks can be filled with the French, Euchre
//! or Pinochle presets, dealt from the top, refilled from the bottom and
//! shuffled with a seeded generator.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Deck};
//!
//! let mut deck = Deck::with_seed(42);
//! deck.init_french_deck();
//! deck.shuffle();
//!
//! let top = deck.deal_next_card().unwrap();
//! assert_eq!(deck.len(), 51);
//! assert!(top.rank() < Card::num_ranks());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{
    Card, CardTuple, DECK_SIZE, EUCHRE_DECK_SIZE, EUCHRE_RANKS, NUM_RANKS, NUM_SUITS,
    PINOCHLE_DECK_SIZE, RANK_LABELS, SUIT_LABELS,
};
pub use deck::{Deck, DeckTuples};
pub use error::{CardError, DeckError};
pub use options::ValueOptions;
pub use shared::SharedDeck;
