//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate scores hands (including soft/hard Ace handling), applies the
//! dealer drawing policy, resolves the winner, and runs whole rounds through
//! [`Game`]. All randomness comes from a seeded generator, so rounds are
//! reproducible.
//!
//! # Example
//!
//! ```
//! use bjrules::{Game, GameOptions, Winner};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play_round().unwrap();
//! let again = Game::new(GameOptions::default(), 42).play_round().unwrap();
//! assert_eq!(result, again);
//! let _ = result.outcome().winner() == Winner::Player;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod participant;
pub mod policy;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, build_deck};
pub use deck::Deck;
pub use error::{DrawError, PolicyError, RoundError, ScoreError};
pub use game::{Game, RoundPhase};
pub use options::{AceResolution, DrawMode, GameOptions};
pub use participant::{Participant, Role, Table};
pub use policy::{PlayerStrategy, StandAt, dealer_should_draw};
pub use result::{Outcome, Resolution, RoundResult, Winner, resolve};
pub use score::{Score, Scored, score};
