//! The deck engine: reset, shuffle and dealing.

use alloc::vec::Vec;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::options::{DeckOptions, RandomRemoval};

/// A standard 52-card deck.
///
/// The last card of the sequence is the top of the deck. Each deck owns its
/// own seeded generator, so a given seed and call sequence always produces
/// the same shuffles and random deals.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, top last.
    cards: Vec<Card>,
    /// Options the deck was created with.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_options(DeckOptions::default())
    }
}

impl Deck {
    /// Creates a new, ordered deck whose generator is seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.count_cards(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(DeckOptions::default().with_seed(seed))
    }

    /// Creates a new, ordered deck from the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            options,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        };
        deck.reset();
        deck
    }

    /// Discards the current contents and rebuilds the full deck, ordered by
    /// suit and then by rank.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
        log::debug!("deck reset to {} cards", self.cards.len());
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn count_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards left in the deck, top last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the options the deck was created with.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Shuffles the deck in place with the Fisher-Yates algorithm.
    ///
    /// When `reset` is true the full deck is rebuilt first; otherwise only
    /// the cards still in the deck are shuffled. A deck with fewer than two
    /// cards is left as is and the generator is not advanced.
    pub fn shuffle(&mut self, reset: bool) {
        if reset {
            self.reset();
        }

        let n = self.cards.len();
        for i in (1..n).rev() {
            let j = self.rng.random_range(0..=i);
            if i != j {
                self.cards.swap(i, j);
            }
        }
        log::debug!("shuffled {n} cards");
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_one_card(&mut self) -> Result<Card, DealError> {
        let Some(card) = self.cards.pop() else {
            log::debug!("refused to deal from an empty deck");
            return Err(DealError::EmptyDeck);
        };
        log::trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Deals the top `n` cards, top-most first.
    ///
    /// Dealing zero cards returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `n` cards are
    /// left. No cards are dealt in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DealError, Deck};
    ///
    /// let mut deck = Deck::default();
    /// assert_eq!(deck.deal_n_cards(12).map(|cards| cards.len()), Ok(12));
    /// assert_eq!(
    ///     deck.deal_n_cards(41),
    ///     Err(DealError::InsufficientCards { requested: 41, remaining: 40 })
    /// );
    /// assert_eq!(deck.count_cards(), 40);
    /// ```
    pub fn deal_n_cards(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if n > remaining {
            log::debug!("refused to deal {n} cards, only {remaining} left");
            return Err(DealError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let dealt: Vec<Card> = self.cards.drain(remaining - n..).rev().collect();
        log::trace!("dealt {n} cards, {} left", self.cards.len());
        Ok(dealt)
    }

    /// Deals a card chosen uniformly at random from the cards left.
    ///
    /// How the gap is closed depends on [`DeckOptions::random_removal`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_random_card(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            log::debug!("refused to deal a random card from an empty deck");
            return Err(DealError::EmptyDeck);
        }

        let index = self.rng.random_range(0..self.cards.len());
        let card = match self.options.random_removal {
            RandomRemoval::Preserve => self.cards.remove(index),
            RandomRemoval::SwapRemove => self.cards.swap_remove(index),
        };
        log::trace!("dealt {card} from position {index}, {} left", self.cards.len());
        Ok(card)
    }

    /// Prints every card in the deck to stdout, bottom first.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
