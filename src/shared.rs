//! A deck that several owners can deal from.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::sync::Mutex;

/// A [`Deck`] behind a mutex, so table code can share one pile by reference.
///
/// Each method takes the lock for the duration of a single deck operation.
/// Use [`SharedDeck::with_deck`] to run several operations under one lock.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Runs `f` with exclusive access to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, SharedDeck};
    ///
    /// let shared = SharedDeck::new(Deck::with_seed(1));
    /// shared.with_deck(Deck::init_euchre_deck);
    /// assert_eq!(shared.len(), 24);
    /// ```
    pub fn with_deck<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        f(&mut *self.deck.lock())
    }

    /// Puts a card on top of the deck.
    pub fn append_card(&self, card: Card) {
        self.deck.lock().append_card(card);
    }

    /// Puts a card on the bottom of the deck.
    pub fn place_on_bottom(&self, card: Card) {
        self.deck.lock().place_on_bottom(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn deal_next_card(&self) -> Result<Card, DeckError> {
        self.deck.lock().deal_next_card()
    }

    /// Shuffles the deck with its own generator.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Consumes the wrapper and returns the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}
