//! Ordered piles of cards.
//!
//! Index 0 is the bottom of a deck and the last index is the top. Cards are
//! appended to and dealt from the top.

use core::fmt;
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, EUCHRE_RANKS, NUM_RANKS, NUM_SUITS};
use crate::error::DeckError;

/// Swaps cards at random positions `10n + U[0, 5n)` times.
fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    let len = cards.len();
    if len == 0 {
        return;
    }

    let swaps = len * 10 + rng.random_range(0..len * 5);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        cards.swap(a, b);
    }
}

/// An ordered pile of cards with its own shuffling generator.
#[derive(Clone)]
pub struct Deck {
    /// Cards from bottom to top.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck whose shuffles are seeded from the OS.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates an empty deck with the given shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let mut a = Deck::with_seed(7);
    /// let mut b = Deck::with_seed(7);
    /// a.init_french_deck();
    /// b.init_french_deck();
    /// a.shuffle();
    /// b.shuffle();
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an empty deck that shuffles with `rng`.
    #[must_use]
    pub const fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Vec::new(),
            rng,
        }
    }

    fn append_ranks(&mut self, ranks: impl IntoIterator<Item = u8>) {
        for rank in ranks {
            for suit in 0..NUM_SUITS {
                self.cards.push(Card::new_unchecked(rank, suit));
            }
        }
    }

    /// Appends the 52 cards of a French deck, rank by rank.
    pub fn init_french_deck(&mut self) {
        self.cards.reserve(DECK_SIZE);
        self.append_ranks(0..NUM_RANKS);
    }

    /// Appends the 24 cards of a Euchre deck: A, 9, 10, J, Q, K of each suit.
    pub fn init_euchre_deck(&mut self) {
        self.append_ranks(EUCHRE_RANKS);
    }

    /// Appends the 48 cards of a Pinochle deck, two Euchre sets.
    pub fn init_pinochle_deck(&mut self) {
        self.init_euchre_deck();
        self.init_euchre_deck();
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Replaces the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below the deck length.
    pub fn set(&mut self, index: usize, card: Card) -> Result<(), DeckError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfBounds { index, len })?;
        *slot = card;
        Ok(())
    }

    /// Returns the position of the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the deck.
    pub fn index_card(&self, card: Card) -> Result<usize, DeckError> {
        self.cards
            .iter()
            .position(|c| *c == card)
            .ok_or(DeckError::NotFound(card))
    }

    /// Removes and returns the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the deck.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, DeckError> {
        let index = self.index_card(card)?;
        Ok(self.cards.remove(index))
    }

    /// Removes `card` from this deck and puts it on top of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in this deck; `other` is left
    /// unchanged.
    pub fn move_card(&mut self, card: Card, other: &mut Self) -> Result<(), DeckError> {
        let card = self.remove_card(card)?;
        other.append_card(card);
        Ok(())
    }

    /// Puts a card on top of the deck.
    pub fn append_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Puts a card on the bottom of the deck.
    ///
    /// This shifts every card up by one, which is fine for games like War
    /// that return the discards to the bottom.
    pub fn place_on_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn deal_next_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Shuffles the deck with its own generator.
    pub fn shuffle(&mut self) {
        shuffle_cards(&mut self.cards, &mut self.rng);
    }

    /// Shuffles the deck with `rng` instead of the deck's generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_cards(&mut self.cards, rng);
    }

    /// Returns an adapter that formats the deck as a list of `(rank, suit)`
    /// tuples from bottom to top.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Deck};
    ///
    /// let mut deck = Deck::with_seed(0);
    /// deck.append_card(Card::new(0, 0).unwrap());
    /// deck.append_card(Card::new(12, 3).unwrap());
    /// assert_eq!(deck.display().to_string(), "[(A, Spades), (K, Hearts)]");
    /// assert_eq!(deck.to_string(), "['A of Spades', 'K of Hearts']");
    /// ```
    #[must_use]
    pub const fn display(&self) -> DeckTuples<'_> {
        DeckTuples(self)
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{card}'")?;
        }
        f.write_str("]")
    }
}

/// Formats a deck as a list of `(rank, suit)` tuples. Created by
/// [`Deck::display`].
#[derive(Debug, Clone, Copy)]
pub struct DeckTuples<'a>(&'a Deck);

impl fmt::Display for DeckTuples<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card.display())?;
        }
        f.write_str("]")
    }
}
