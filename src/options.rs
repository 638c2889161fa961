//! Deck configuration options.

/// How [`Deck::deal_random_card`](crate::Deck::deal_random_card) closes the
/// gap left by the dealt card.
///
/// Either way exactly one index is drawn from the deck's generator, so the
/// chosen card is uniform over the cards that remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RandomRemoval {
    /// Shift the cards above the gap down by one. Keeps the relative order
    /// of the remaining cards, costs O(n).
    #[default]
    Preserve,
    /// Move the top card into the gap. O(1), but the top card changes.
    SwapRemove,
}

/// Default seed for a deck's random generator.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carddeck::{DeckOptions, RandomRemoval};
///
/// let options = DeckOptions::default()
///     .with_seed(7)
///     .with_random_removal(RandomRemoval::SwapRemove);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Seed for the deck's random generator.
    pub seed: u64,
    /// Removal strategy for random deals.
    pub random_removal: RandomRemoval,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            random_removal: RandomRemoval::Preserve,
        }
    }
}

impl DeckOptions {
    /// Sets the seed.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(1234);
    /// assert_eq!(options.seed, 1234);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the removal strategy for random deals.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DeckOptions, RandomRemoval};
    ///
    /// let options = DeckOptions::default().with_random_removal(RandomRemoval::SwapRemove);
    /// assert_eq!(options.random_removal, RandomRemoval::SwapRemove);
    /// ```
    #[must_use]
    pub const fn with_random_removal(mut self, removal: RandomRemoval) -> Self {
        self.random_removal = removal;
        self
    }
}
