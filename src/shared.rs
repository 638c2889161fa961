//! A deck behind a lock, for callers that share one deck between threads.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::DeckOptions;
use crate::sync::Mutex;

/// A [`Deck`] guarded by a mutex.
///
/// Every method takes the lock for the duration of one deck operation, so
/// operations from different threads are serialized. Use
/// [`SharedDeck::with_deck`] to run several operations under a single lock.
///
/// With the `std` feature the lock is `std::sync::Mutex`; with only `alloc`
/// it is a spin lock.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl Default for SharedDeck {
    fn default() -> Self {
        Self::from(Deck::default())
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }
}

impl SharedDeck {
    /// Creates a new, ordered shared deck whose generator is seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from(Deck::new(seed))
    }

    /// Creates a new, ordered shared deck from the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        Self::from(Deck::with_options(options))
    }

    /// Runs `f` with exclusive access to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::SharedDeck;
    ///
    /// let deck = SharedDeck::new(7);
    /// let hands = deck.with_deck(|deck| {
    ///     deck.shuffle(true);
    ///     (deck.deal_n_cards(2), deck.deal_n_cards(2))
    /// });
    /// assert!(hands.0.is_ok() && hands.1.is_ok());
    /// assert_eq!(deck.count_cards(), 48);
    /// ```
    pub fn with_deck<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        f(&mut *self.deck.lock())
    }

    /// Rebuilds the full, ordered deck. See [`Deck::reset`].
    pub fn reset(&self) {
        self.deck.lock().reset();
    }

    /// Shuffles the deck. See [`Deck::shuffle`].
    pub fn shuffle(&self, reset: bool) {
        self.deck.lock().shuffle(reset);
    }

    /// Returns the number of cards left in the deck.
    pub fn count_cards(&self) -> usize {
        self.deck.lock().count_cards()
    }

    /// Returns a copy of the cards left in the deck, top last.
    pub fn cards(&self) -> Vec<Card> {
        self.deck.lock().cards().to_vec()
    }

    /// Deals the top card. See [`Deck::deal_one_card`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_one_card(&self) -> Result<Card, DealError> {
        self.deck.lock().deal_one_card()
    }

    /// Deals the top `n` cards. See [`Deck::deal_n_cards`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `n` cards are left.
    pub fn deal_n_cards(&self, n: usize) -> Result<Vec<Card>, DealError> {
        self.deck.lock().deal_n_cards(n)
    }

    /// Deals a random card. See [`Deck::deal_random_card`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_random_card(&self) -> Result<Card, DealError> {
        self.deck.lock().deal_random_card()
    }

    /// Consumes the shared deck and returns the inner deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}
