//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while dealing.
///
/// Both variants are recoverable: the deck is left untouched, so the caller
/// can reset or reshuffle and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("cannot deal from an empty deck; reset or reshuffle the deck first")]
    EmptyDeck,
    /// Fewer cards are left than were requested.
    #[error(
        "cannot deal {requested} cards, only {remaining} left; reset or reshuffle the deck first"
    )]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}
