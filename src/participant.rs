//! Named participants and the hands they hold.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, ScoreError};
use crate::options::AceResolution;
use crate::score::{Score, score};

/// Which seat a participant occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The house.
    Dealer,
    /// The single player.
    Player,
}

impl Role {
    /// Returns the participant name, `"dealer"` or `"player"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant and their hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Vec<Card>,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            hand: Vec::new(),
        }
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.role.name()
    }

    /// Returns the cards in the hand, with Ace values as last resolved.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Draws a card from `deck`, appends it to the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) -> Result<Card, DrawError> {
        let card = deck.draw(rng)?;
        self.hand.push(card);
        log::debug!("{} draws {card}", self.role);
        Ok(card)
    }

    /// Scores the hand and keeps the resolved Ace values.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidHandShape`] if the hand is empty.
    pub fn rescore<R: Rng + ?Sized>(
        &mut self,
        aces: AceResolution,
        rng: &mut R,
    ) -> Result<Score, ScoreError> {
        let scored = score(&self.hand, aces, rng)?;
        self.hand = scored.cards;
        log::debug!("{} scores {}", self.role, scored.score);
        Ok(scored.score)
    }

    /// Returns the score of the hand as last resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidHandShape`] if the hand is empty.
    pub fn current_score(&self) -> Result<Score, ScoreError> {
        Score::of_resolved(&self.hand)
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.first().copied()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s hand is ", self.role)?;
        for (index, card) in self.hand.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(card.rank.label())?;
        }
        let total = Score::of_resolved(&self.hand).map_or(0, |score| score.total);
        write!(f, " ({total})")
    }
}

/// The two seats at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The player.
    pub player: Participant,
    /// The dealer.
    pub dealer: Participant,
}

impl Table {
    /// Creates a table with empty hands.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Participant::new(Role::Player),
            dealer: Participant::new(Role::Dealer),
        }
    }

    /// Returns the participant in the given seat.
    #[must_use]
    pub const fn get(&self, role: Role) -> &Participant {
        match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        }
    }

    /// Returns the participant in the given seat mutably.
    pub const fn get_mut(&mut self, role: Role) -> &mut Participant {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    /// Clears both hands.
    pub fn clear(&mut self) {
        self.player.clear();
        self.dealer.clear();
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
