//! Game configuration options.

/// How Aces beyond the two-Ace opening hand are demoted when a hand busts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceResolution {
    /// Only the first Ace in the hand is ever demoted to 1.
    ///
    /// Three fresh Aces and a 9 therefore stay bust at 32, although demoting
    /// the other two Aces would bring the hand to 12.
    #[default]
    FirstAceOnly,
    /// Aces are demoted in hand order until the hand no longer busts.
    AllAces,
}

/// How cards are drawn from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawMode {
    /// Each draw picks a random card from the full catalog and leaves it in
    /// place, so the deck never runs out.
    #[default]
    WithReplacement,
    /// The catalog is shuffled and cards are removed as they are drawn.
    Shuffled,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::{AceResolution, DrawMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_draw_mode(DrawMode::Shuffled)
///     .with_ace_resolution(AceResolution::AllAces)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Ace demotion rule used by scoring.
    pub ace_resolution: AceResolution,
    /// How cards are drawn.
    pub draw_mode: DrawMode,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Total at which the default player strategy stops drawing.
    pub player_stands_at: u8,
    /// Reshuffle a non-replacing deck before a round when fewer cards remain.
    /// 0 to disable reshuffling.
    pub reshuffle_below: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ace_resolution: AceResolution::FirstAceOnly,
            draw_mode: DrawMode::WithReplacement,
            stand_on_soft_17: false,
            player_stands_at: 17,
            reshuffle_below: 15,
        }
    }
}

impl GameOptions {
    /// Sets the Ace demotion rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{AceResolution, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_resolution(AceResolution::AllAces);
    /// assert_eq!(options.ace_resolution, AceResolution::AllAces);
    /// ```
    #[must_use]
    pub const fn with_ace_resolution(mut self, resolution: AceResolution) -> Self {
        self.ace_resolution = resolution;
        self
    }

    /// Sets how cards are drawn.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{DrawMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_draw_mode(DrawMode::Shuffled);
    /// assert_eq!(options.draw_mode, DrawMode::Shuffled);
    /// ```
    #[must_use]
    pub const fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(true);
    /// assert_eq!(options.stand_on_soft_17, true);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the total at which the default player strategy stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_stands_at(15);
    /// assert_eq!(options.player_stands_at, 15);
    /// ```
    #[must_use]
    pub const fn with_player_stands_at(mut self, total: u8) -> Self {
        self.player_stands_at = total;
        self
    }

    /// Sets the reshuffle threshold for non-replacing decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_below(0);
    /// assert_eq!(options.reshuffle_below, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }
}
