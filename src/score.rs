//! Hand scoring with soft/hard Ace resolution.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::{ACE_HIGH, ACE_LOW, Card};
use crate::error::ScoreError;
use crate::options::AceResolution;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// The total of a hand and whether an Ace in it still counts 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Sum of the card values.
    pub total: u8,
    /// Whether the hand is soft.
    pub is_soft: bool,
}

impl Score {
    /// Reads the score of an already resolved hand.
    ///
    /// Card values are summed as they are; no Ace is demoted.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidHandShape`] if the hand is empty.
    pub fn of_resolved(cards: &[Card]) -> Result<Self, ScoreError> {
        if cards.is_empty() {
            return Err(ScoreError::InvalidHandShape);
        }
        Ok(Self::sum(cards))
    }

    fn sum(cards: &[Card]) -> Self {
        let total = cards
            .iter()
            .fold(0u8, |acc, card| acc.saturating_add(card.value()));
        let is_soft = total <= BLACKJACK && cards.iter().any(Card::is_high_ace);
        Self { total, is_soft }
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether the total is exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.total == BLACKJACK
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// A scored hand: the resolved cards and their score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    /// The hand with Ace values fixed by this scoring pass.
    pub cards: Vec<Card>,
    /// The score of `cards`.
    pub score: Score,
}

/// Scores a hand, resolving Aces.
///
/// A single card is a hand of length one. The input is never modified: Ace
/// demotions are applied to the returned [`Scored::cards`], which callers
/// keep in place of the original hand so later passes see the same values.
///
/// - With no Ace the total is the plain sum and the hand is hard.
/// - An Ace counts 11 unless that busts the hand, in which case it is
///   demoted to 1. Which Aces may be demoted is set by `aces`.
/// - An opening hand of two fresh Aces is settled by a coin flip: either both
///   count 1 (hard 2) or the first counts 1 and the second 11 (soft 12).
///
/// # Errors
///
/// Returns [`ScoreError::InvalidHandShape`] if the hand is empty.
///
/// # Example
///
/// ```
/// use bjrules::{AceResolution, Card, Rank, Suit, score};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Nine),
///     Card::new(Suit::Clubs, Rank::Five),
/// ];
/// let scored = score(&hand, AceResolution::FirstAceOnly, &mut rng).unwrap();
/// assert_eq!(scored.score.total, 15);
/// assert!(!scored.score.is_soft);
/// assert_eq!(scored.cards[0].value(), 1);
/// ```
pub fn score<R: Rng + ?Sized>(
    hand: &[Card],
    aces: AceResolution,
    rng: &mut R,
) -> Result<Scored, ScoreError> {
    if hand.is_empty() {
        return Err(ScoreError::InvalidHandShape);
    }

    let mut cards = hand.to_vec();

    if cards.len() == 2 && cards.iter().all(Card::is_high_ace) {
        cards[0] = cards[0].demoted();
        if rng.random_bool(0.5) {
            cards[1] = cards[1].demoted();
        }
        log::trace!("two-ace opening hand resolved to {}", Score::sum(&cards));
    } else {
        match aces {
            AceResolution::FirstAceOnly => {
                if Score::sum(&cards).is_bust() {
                    let first = cards.iter_mut().find(|card| card.is_ace());
                    if let Some(ace) = first.filter(|ace| ace.is_high_ace()) {
                        *ace = ace.demoted();
                        log::trace!("demoted first ace to 1");
                    }
                }
            }
            AceResolution::AllAces => {
                let mut total = Score::sum(&cards).total;
                for ace in cards.iter_mut().filter(|card| card.is_high_ace()) {
                    if total <= BLACKJACK {
                        break;
                    }
                    *ace = ace.demoted();
                    total -= ACE_HIGH - ACE_LOW;
                    log::trace!("demoted ace, hand now {total}");
                }
            }
        }
    }

    let score = Score::sum(&cards);
    Ok(Scored { cards, score })
}
