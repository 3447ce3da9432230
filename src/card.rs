//! Card type, label tables and deck size constants.

use core::any::Any;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::CardError;
use crate::options::ValueOptions;

/// Rank labels, indexed by rank.
pub const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Suit labels, indexed by suit.
pub const SUIT_LABELS: [&str; 4] = ["Spades", "Diamonds", "Clubs", "Hearts"];

/// Number of ranks in a French deck.
pub const NUM_RANKS: u8 = RANK_LABELS.len() as u8;

/// Number of suits in a French deck.
pub const NUM_SUITS: u8 = SUIT_LABELS.len() as u8;

/// Ranks used by Euchre and Pinochle: A, 9, 10, J, Q, K.
pub const EUCHRE_RANKS: [u8; 6] = [0, 8, 9, 10, 11, 12];

/// Number of cards in a French deck.
pub const DECK_SIZE: usize = NUM_RANKS as usize * NUM_SUITS as usize;

/// Number of cards in a Euchre deck.
pub const EUCHRE_DECK_SIZE: usize = EUCHRE_RANKS.len() * NUM_SUITS as usize;

/// Number of cards in a Pinochle deck.
pub const PINOCHLE_DECK_SIZE: usize = EUCHRE_DECK_SIZE * 2;

const ACE: u8 = 0;

fn label(labels: &[&'static str], index: u8) -> &'static str {
    labels.get(usize::from(index)).copied().unwrap_or("?")
}

/// A playing card identified by a zero-based rank and suit.
///
/// Cards compare and hash by `(rank, suit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: u8,
    suit: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns an error if `rank` is not below [`NUM_RANKS`] or `suit` is not
    /// below [`NUM_SUITS`].
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, CardError};
    ///
    /// let queen = Card::new(11, 1).unwrap();
    /// assert_eq!(queen.to_string(), "Q of Diamonds");
    /// assert_eq!(Card::new(0, 4), Err(CardError::SuitOutOfRange(4)));
    /// ```
    pub const fn new(rank: u8, suit: u8) -> Result<Self, CardError> {
        if rank >= NUM_RANKS {
            return Err(CardError::RankOutOfRange(rank));
        }
        if suit >= NUM_SUITS {
            return Err(CardError::SuitOutOfRange(suit));
        }
        Ok(Self { rank, suit })
    }

    pub(crate) const fn new_unchecked(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < NUM_RANKS && suit < NUM_SUITS);
        Self { rank, suit }
    }

    /// Returns the number of suits.
    #[must_use]
    pub const fn num_suits() -> u8 {
        NUM_SUITS
    }

    /// Returns the number of ranks in each suit.
    #[must_use]
    pub const fn num_ranks() -> u8 {
        NUM_RANKS
    }

    /// Returns `value` as a card, for callers holding dynamically typed values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotACard`] if `value` is not a [`Card`].
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, CardError};
    ///
    /// let card = Card::new(0, 0).unwrap();
    /// assert_eq!(Card::check(&card), Ok(&card));
    /// assert_eq!(Card::check(&(0_u8, 0_u8)), Err(CardError::NotACard));
    /// ```
    pub fn check(value: &dyn Any) -> Result<&Self, CardError> {
        value.downcast_ref::<Self>().ok_or(CardError::NotACard)
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> u8 {
        self.suit
    }

    /// Sets the rank.
    ///
    /// # Errors
    ///
    /// Returns an error if `rank` is not below [`NUM_RANKS`].
    pub const fn set_rank(&mut self, rank: u8) -> Result<(), CardError> {
        if rank >= NUM_RANKS {
            return Err(CardError::RankOutOfRange(rank));
        }
        self.rank = rank;
        Ok(())
    }

    /// Sets the suit.
    ///
    /// # Errors
    ///
    /// Returns an error if `suit` is not below [`NUM_SUITS`].
    pub const fn set_suit(&mut self, suit: u8) -> Result<(), CardError> {
        if suit >= NUM_SUITS {
            return Err(CardError::SuitOutOfRange(suit));
        }
        self.suit = suit;
        Ok(())
    }

    /// Returns the rank for index 0 and the suit for any other index.
    #[must_use]
    pub const fn get(&self, index: usize) -> u8 {
        if index == 0 { self.rank } else { self.suit }
    }

    /// Sets the rank for index 0 and the suit for any other index.
    ///
    /// Note: unlike [`Card::new`], the value is not range checked. Labels of
    /// out-of-range fields display as `?`.
    pub const fn set(&mut self, index: usize, item: u8) {
        if index == 0 {
            self.rank = item;
        } else {
            self.suit = item;
        }
    }

    /// Returns the rank label, such as `"10"` or `"K"`.
    #[must_use]
    pub fn rank_label(&self) -> &'static str {
        label(&RANK_LABELS, self.rank)
    }

    /// Returns the suit label, such as `"Hearts"`.
    #[must_use]
    pub fn suit_label(&self) -> &'static str {
        label(&SUIT_LABELS, self.suit)
    }

    /// Returns an adapter that formats the card as `(rank, suit)`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Card;
    ///
    /// let card = Card::new(9, 3).unwrap();
    /// assert_eq!(card.display().to_string(), "(10, Hearts)");
    /// ```
    #[must_use]
    pub const fn display(&self) -> CardTuple {
        CardTuple(*self)
    }

    /// Scores the card.
    ///
    /// Jacks, queens and kings score 10 when `face_cards_same` is set, then
    /// an ace scores 11 when `ace_high` is set. Otherwise a card scores its
    /// rank plus one.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, ValueOptions};
    ///
    /// let ace = Card::new(0, 2).unwrap();
    /// assert_eq!(ace.value(ValueOptions::default()), 1);
    /// assert_eq!(ace.value(ValueOptions::default().with_ace_high(true)), 11);
    /// ```
    #[must_use]
    pub const fn value(&self, options: ValueOptions) -> u8 {
        if options.face_cards_same && matches!(self.rank, 10..=12) {
            return 10;
        }
        if options.ace_high && self.rank == ACE {
            return 11;
        }
        self.rank.saturating_add(1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_label(), self.suit_label())
    }
}

impl Index<usize> for Card {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        if index == 0 { &self.rank } else { &self.suit }
    }
}

impl IndexMut<usize> for Card {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        if index == 0 {
            &mut self.rank
        } else {
            &mut self.suit
        }
    }
}

impl TryFrom<(u8, u8)> for Card {
    type Error = CardError;

    fn try_from((rank, suit): (u8, u8)) -> Result<Self, CardError> {
        Self::new(rank, suit)
    }
}

impl From<Card> for (u8, u8) {
    fn from(card: Card) -> Self {
        (card.rank, card.suit)
    }
}

/// Formats a card as `(rank, suit)`. Created by [`Card::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTuple(Card);

impl fmt::Display for CardTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.rank_label(), self.0.suit_label())
    }
}
