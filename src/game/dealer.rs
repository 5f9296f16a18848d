use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::participant::Role;
use crate::policy::dealer_draws_on;
use crate::result::{Outcome, Resolution, RoundResult, resolve};
use crate::score::BLACKJACK;

use super::{Game, RoundPhase};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while below 21 and the dealer policy asks for a card:
    /// on 16 or less, and on soft 17 unless `stand_on_soft_17` is set.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_turn(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        let mut score = self.rescore(Role::Dealer)?;

        while score.total < BLACKJACK && dealer_draws_on(score, self.options.stand_on_soft_17) {
            let card = self.draw_for(Role::Dealer)?;
            drawn_cards.push(card);
            score = self.rescore(Role::Dealer)?;
        }

        log::debug!("dealer finishes on {score}");
        self.phase = RoundPhase::RoundOver;
        Ok(drawn_cards)
    }

    /// Resolves the finished round.
    ///
    /// A player bust loses outright. Otherwise a dealer on exactly 21 wins
    /// even against a player 21, a dealer bust loses, and any other pair of
    /// totals is compared by [`resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn showdown(&self) -> Result<RoundResult, RoundError> {
        if self.phase != RoundPhase::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let player_total = self.table.player.current_score()?.total;
        let dealer_total = self.table.dealer.current_score()?.total;

        let resolution = if self.player_bust {
            Resolution {
                player_total,
                dealer_total,
                outcome: Outcome::PlayerBust,
            }
        } else if dealer_total == BLACKJACK {
            Resolution {
                player_total,
                dealer_total,
                outcome: Outcome::DealerBlackjack,
            }
        } else if dealer_total > BLACKJACK {
            Resolution {
                player_total,
                dealer_total,
                outcome: Outcome::DealerBust,
            }
        } else {
            resolve(player_total, dealer_total)
        };

        log::info!("round over: {resolution}");

        Ok(RoundResult {
            player_hand: self.table.player.hand().to_vec(),
            dealer_hand: self.table.dealer.hand().to_vec(),
            resolution,
        })
    }
}
