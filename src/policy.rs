//! Drawing decisions for the dealer and the player.

extern crate alloc;

use alloc::string::String;

use rand::Rng;

use crate::card::Card;
use crate::error::PolicyError;
use crate::options::GameOptions;
use crate::score::{Score, score};

/// Highest total the dealer always draws on.
const DEALER_DRAWS_THROUGH: u8 = 16;

/// Total at which a soft hand may still make the dealer draw.
const SOFT_SEVENTEEN: u8 = 17;

/// Returns whether the dealer draws on `score`.
///
/// The dealer draws on 16 or less and on soft 17 unless `stand_on_soft_17`.
/// Every other total stands, including 21 and any bust.
#[must_use]
pub const fn dealer_draws_on(score: Score, stand_on_soft_17: bool) -> bool {
    if score.total <= DEALER_DRAWS_THROUGH {
        return true;
    }
    score.total == SOFT_SEVENTEEN && score.is_soft && !stand_on_soft_17
}

/// Scores `hand` and decides whether the dealer must draw again.
///
/// Scoring a hand of two fresh Aces flips a coin, so `rng` is needed.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidPolicyInput`] if the hand is empty.
pub fn dealer_should_draw<R: Rng + ?Sized>(
    hand: &[Card],
    options: &GameOptions,
    rng: &mut R,
) -> Result<bool, PolicyError> {
    let scored = score(hand, options.ace_resolution, rng)?;
    Ok(dealer_draws_on(scored.score, options.stand_on_soft_17))
}

/// Decides whether the player takes another card.
///
/// The engine never asks about a bust hand or a hand of 21.
pub trait PlayerStrategy {
    /// Returns `true` to draw, `false` to stand.
    fn should_draw(&mut self, score: Score, dealer_up: Card) -> bool;
}

/// Draws while the total is below the given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandAt(pub u8);

impl PlayerStrategy for StandAt {
    fn should_draw(&mut self, score: Score, _dealer_up: Card) -> bool {
        score.total < self.0
    }
}

/// A strategy backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> PlayerStrategy for FromFn<F>
where
    F: FnMut(Score, Card) -> bool,
{
    fn should_draw(&mut self, score: Score, dealer_up: Card) -> bool {
        (self.0)(score, dealer_up)
    }
}

/// Wraps a closure as a [`PlayerStrategy`].
///
/// ```
/// use bjrules::policy::{PlayerStrategy, from_fn};
/// use bjrules::{Card, Rank, Score, Suit};
///
/// let mut cautious = from_fn(|score: Score, _up: Card| score.total < 12);
/// let up = Card::new(Suit::Clubs, Rank::Six);
/// assert!(!cautious.should_draw(Score { total: 13, is_soft: false }, up));
/// ```
#[must_use]
pub const fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(Score, Card) -> bool,
{
    FromFn(f)
}

/// Formats the question put to a player deciding whether to draw.
#[must_use]
pub fn draw_prompt(score: Score, dealer_up: Card) -> String {
    alloc::format!(
        "Dealer showing {}, your count is {}.  Draw card?",
        dealer_up.rank,
        score.total
    )
}
