use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::participant::Role;
use crate::policy::PlayerStrategy;

use super::{Game, RoundPhase};

impl Game {
    /// Plays the player's turn.
    ///
    /// The hand is rescored after every card. A bust ends the round at once;
    /// 21 stands; otherwise `strategy` decides whether to draw again, seeing
    /// the dealer's up card.
    ///
    /// Returns the cards drawn during the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// runs out.
    pub fn player_turn<S>(&mut self, strategy: &mut S) -> Result<Vec<Card>, RoundError>
    where
        S: PlayerStrategy + ?Sized,
    {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let up_card = self.table.dealer.up_card().ok_or(RoundError::InvalidState)?;
        let mut drawn = Vec::new();

        loop {
            let score = self.rescore(Role::Player)?;

            if score.is_bust() {
                log::debug!("player busts with {}", score.total);
                // The dealer never plays, but its opening hand still gets a total.
                self.rescore(Role::Dealer)?;
                self.player_bust = true;
                self.phase = RoundPhase::RoundOver;
                return Ok(drawn);
            }

            if score.is_twenty_one() || !strategy.should_draw(score, up_card) {
                log::debug!("player stands on {score}");
                break;
            }

            drawn.push(self.draw_for(Role::Player)?);
        }

        self.phase = RoundPhase::DealerTurn;
        Ok(drawn)
    }
}
