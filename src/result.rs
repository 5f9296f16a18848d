//! Round outcomes and the final comparison of totals.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::score::BLACKJACK;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer wins without playing.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Dealer finished on exactly 21; the player loses.
    DealerBlackjack,
    /// Equal totals.
    Tie,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
}

/// Who takes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
    /// Nobody.
    Push,
}

impl Outcome {
    /// Returns who takes the round.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::DealerBust | Self::PlayerWins => Winner::Player,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWins => Winner::Dealer,
            Self::Tie => Winner::Push,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
            Self::Push => "tie",
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "You went over 21 - you lose!",
            Self::DealerBust => "Dealer went over 21 - you win!",
            Self::DealerBlackjack => "Dealer has 21 - you lose!",
            Self::Tie => "tie",
            Self::PlayerWins => "player wins",
            Self::DealerWins => "dealer wins",
        })
    }
}

/// Both final totals and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// The verdict.
    pub outcome: Outcome,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::PlayerBust | Outcome::DealerBust | Outcome::DealerBlackjack => {
                write!(f, "{}", self.outcome)
            }
            Outcome::Tie | Outcome::PlayerWins | Outcome::DealerWins => write!(
                f,
                "player score: {}, dealer score: {}, winner: {}",
                self.player_total,
                self.dealer_total,
                self.outcome.winner()
            ),
        }
    }
}

/// Compares two final totals.
///
/// A player bust is checked first, so it decides the round even when the
/// dealer is also over 21. A dealer on exactly 21 is compared like any other
/// total here; the orchestrator reports it as [`Outcome::DealerBlackjack`]
/// before reaching this function.
///
/// ```
/// use bjrules::{Outcome, resolve};
///
/// assert_eq!(resolve(20, 19).outcome, Outcome::PlayerWins);
/// assert_eq!(resolve(20, 20).outcome, Outcome::Tie);
/// assert_eq!(resolve(22, 19).outcome, Outcome::PlayerBust);
/// ```
#[must_use]
pub const fn resolve(player_total: u8, dealer_total: u8) -> Resolution {
    let outcome = if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerWins
    } else if player_total < dealer_total {
        Outcome::DealerWins
    } else {
        Outcome::Tie
    };

    Resolution {
        player_total,
        dealer_total,
        outcome,
    }
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand.
    pub player_hand: Vec<Card>,
    /// The dealer's final hand.
    pub dealer_hand: Vec<Card>,
    /// Final totals and verdict.
    pub resolution: Resolution,
}

impl RoundResult {
    /// Returns the verdict.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.resolution.outcome
    }
}
