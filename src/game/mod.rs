//! Round orchestration.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{PolicyError, RoundError};
use crate::options::{DrawMode, GameOptions};
use crate::participant::{Participant, Role, Table};
use crate::policy::{self, PlayerStrategy, StandAt};
use crate::result::RoundResult;
use crate::score::Score;

mod dealer;
mod player;
pub mod state;

pub use state::RoundPhase;

/// A single-player blackjack game.
///
/// The game owns the deck, both participants and the random number
/// generator, so two games built with the same options and seed play
/// identical rounds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards to draw from.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Player and dealer.
    table: Table,
    /// Current round phase.
    phase: RoundPhase,
    /// Set when the player busts, so the dealer never plays.
    player_bust: bool,
    /// Random number generator for draws, shuffles and the two-Ace flip.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.play_round().unwrap();
    /// assert!(!result.player_hand.is_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::for_mode(options.draw_mode, &mut rng);

        Self {
            deck,
            options,
            table: Table::new(),
            phase: RoundPhase::Waiting,
            player_bust: false,
            rng,
        }
    }

    /// Replaces the deck with a fresh one for the configured draw mode.
    pub fn reshuffle(&mut self) {
        self.deck = Deck::for_mode(self.options.draw_mode, &mut self.rng);
        log::debug!("deck reshuffled, {} cards", self.deck.len());
    }

    /// Returns whether the deck is below the reshuffle threshold.
    ///
    /// Decks drawn with replacement never need reshuffling.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.options.draw_mode == DrawMode::Shuffled
            && self.deck.len() < self.options.reshuffle_below
    }

    /// Reshuffles if needed. Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.table.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.table.dealer
    }

    /// Decides whether the dealer would draw on `hand` under this game's rules.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPolicyInput`] if the hand is empty.
    pub fn dealer_should_draw(&mut self, hand: &[Card]) -> Result<bool, PolicyError> {
        policy::dealer_should_draw(hand, &self.options, &mut self.rng)
    }

    /// Draws one card for `role`.
    fn draw_for(&mut self, role: Role) -> Result<Card, RoundError> {
        let card = self
            .table
            .get_mut(role)
            .draw(&mut self.deck, &mut self.rng)?;
        Ok(card)
    }

    /// Rescores the hand in `role`'s seat, keeping resolved Ace values.
    fn rescore(&mut self, role: Role) -> Result<Score, RoundError> {
        let score = self
            .table
            .get_mut(role)
            .rescore(self.options.ace_resolution, &mut self.rng)?;
        Ok(score)
    }

    /// Deals the opening hands: player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck runs
    /// out.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Waiting {
            return Err(RoundError::InvalidState);
        }

        for role in [Role::Player, Role::Dealer, Role::Player, Role::Dealer] {
            self.draw_for(role)?;
        }

        self.phase = RoundPhase::PlayerTurn;
        Ok(())
    }

    /// Plays a full round with the default strategy, standing at
    /// [`GameOptions::player_stands_at`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out mid-round.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        let mut strategy = StandAt(self.options.player_stands_at);
        self.play_round_with(&mut strategy)
    }

    /// Plays a full round, asking `strategy` whether the player draws.
    ///
    /// Any round in progress is discarded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out mid-round.
    pub fn play_round_with<S>(&mut self, strategy: &mut S) -> Result<RoundResult, RoundError>
    where
        S: PlayerStrategy + ?Sized,
    {
        self.clear_round();
        self.check_and_reshuffle();

        self.deal()?;
        self.player_turn(strategy)?;
        if self.phase == RoundPhase::DealerTurn {
            self.dealer_turn()?;
        }
        self.showdown()
    }

    /// Clears both hands and returns to [`RoundPhase::Waiting`].
    pub fn clear_round(&mut self) {
        self.table.clear();
        self.player_bust = false;
        self.phase = RoundPhase::Waiting;
    }
}
