//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The hand holds no cards.
    #[error("hand must contain at least one card")]
    InvalidHandShape,
}

/// Errors that can occur while consulting the dealer policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The dealer hand could not be scored.
    #[error("dealer policy requires a non-empty hand")]
    InvalidPolicyInput,
}

impl From<ScoreError> for PolicyError {
    fn from(_: ScoreError) -> Self {
        Self::InvalidPolicyInput
    }
}

/// Errors that can occur while drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round phase for this step.
    #[error("invalid round phase for this step")]
    InvalidState,
    /// A card could not be drawn.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A hand could not be scored.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// The dealer policy rejected its input.
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
