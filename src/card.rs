//! Card types and the 52-card catalog.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Value an Ace counts for before it is resolved.
pub const ACE_HIGH: u8 = 11;

/// Value of an Ace after it has been demoted.
pub const ACE_LOW: u8 = 1;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits, in catalog order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Returns the lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Ace.
    Ace,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, in catalog order (index 2 through 14).
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Ace,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Maps a catalog index to a rank.
    ///
    /// Indices 2..=10 are the number cards, 11 is the Ace, 12 the Jack,
    /// 13 the Queen and 14 the King. Anything else yields `None`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            2..=14 => Some(Self::ALL[(index - 2) as usize]),
            _ => None,
        }
    }

    /// Returns the catalog index of the rank (2 through 14).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Ace => 11,
            Self::Jack => 12,
            Self::Queen => 13,
            Self::King => 14,
        }
    }

    /// Returns the display label, e.g. `"7"` or `"Queen"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Ace => "Ace",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the value a fresh card of this rank counts for.
    ///
    /// Faces count 10 and an Ace starts at [`ACE_HIGH`].
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Ace => ACE_HIGH,
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.index(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Cards are plain values. The only card whose value can differ from
/// [`Rank::base_value`] is an Ace that scoring has demoted to [`ACE_LOW`];
/// that happens on a copy returned by [`crate::score::score`], never on the
/// card that was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    value: u8,
}

impl Card {
    /// Creates a new card with its base value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            value: rank.base_value(),
        }
    }

    /// Returns the value the card currently counts for.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns whether the card is an Ace still counted as [`ACE_HIGH`].
    #[must_use]
    pub const fn is_high_ace(&self) -> bool {
        self.is_ace() && self.value == ACE_HIGH
    }

    /// Returns a copy of the card with an Ace counted as [`ACE_LOW`].
    ///
    /// Non-Ace cards are returned unchanged.
    #[must_use]
    pub const fn demoted(self) -> Self {
        if self.is_ace() {
            Self {
                value: ACE_LOW,
                ..self
            }
        } else {
            self
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Builds the 52-card catalog, one card per rank and suit.
///
/// The result is the same on every call.
///
/// ```
/// use bjrules::{DECK_SIZE, card::build_deck};
///
/// assert_eq!(build_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
