//! A standard 52-card deck with seedable shuffling and dealing, with
//! optional `no_std` support.
//!
//! The crate provides a [`Deck`] that owns its cards and its own random
//! generator. Dealing takes cards off the top; shuffling is an in-place
//! Fisher-Yates pass over whatever cards are left. The same seed and the
//! same sequence of calls always yield the same cards.
//!
//! # Example
//!
//! ```
//! use carddeck::{DealError, Deck};
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle(false);
//!
//! let hand = deck.deal_n_cards(5)?;
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count_cards(), 47);
//! # Ok::<(), DealError>(())
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
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use options::{DEFAULT_SEED, DeckOptions, RandomRemoval};
pub use shared::SharedDeck;
