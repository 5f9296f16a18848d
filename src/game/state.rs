//! Round phase types.

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No cards dealt yet.
    Waiting,
    /// Player is drawing.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be resolved.
    RoundOver,
}
