//! Draw sources built on the card catalog.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, build_deck};
use crate::error::DrawError;
use crate::options::DrawMode;

/// A source of cards for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards. Non-replacing decks draw from the end.
    cards: Vec<Card>,
    mode: DrawMode,
}

impl Deck {
    /// Creates a deck that draws uniformly from the full catalog and never
    /// removes a card.
    #[must_use]
    pub fn with_replacement() -> Self {
        Self {
            cards: build_deck(),
            mode: DrawMode::WithReplacement,
        }
    }

    /// Creates a shuffled deck that removes cards as they are drawn.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = build_deck();
        cards.shuffle(rng);
        Self {
            cards,
            mode: DrawMode::Shuffled,
        }
    }

    /// Creates a deck that yields `draws` in order, then runs out.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            mode: DrawMode::Shuffled,
        }
    }

    /// Creates a fresh deck for the given mode.
    #[must_use]
    pub fn for_mode<R: Rng + ?Sized>(mode: DrawMode, rng: &mut R) -> Self {
        match mode {
            DrawMode::WithReplacement => Self::with_replacement(),
            DrawMode::Shuffled => Self::shuffled(rng),
        }
    }

    /// Draws a card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        match self.mode {
            DrawMode::WithReplacement => {
                if self.cards.is_empty() {
                    return Err(DrawError::EmptyDeck);
                }
                let index = rng.random_range(0..self.cards.len());
                Ok(self.cards[index])
            }
            DrawMode::Shuffled => self.cards.pop().ok_or(DrawError::EmptyDeck),
        }
    }

    /// Returns how cards are drawn from this deck.
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns the number of cards left to draw from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
