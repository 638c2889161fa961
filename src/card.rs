//! Card types.

use alloc::string::{String, ToString};
use core::fmt;

/// Card suit.
///
/// The discriminant is the suit's ordinal and fixes the order in which a
/// fresh deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Hearts.
    Hearts = 1,
    /// Spades.
    Spades = 2,
    /// Clubs.
    Clubs = 3,
    /// Diamonds.
    Diamonds = 4,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Returns the ordinal of the suit (1..=4).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a suit by its ordinal.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Hearts),
            2 => Some(Self::Spades),
            3 => Some(Self::Clubs),
            4 => Some(Self::Diamonds),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Hearts => "HEARTS",
            Self::Spades => "SPADES",
            Self::Clubs => "CLUBS",
            Self::Diamonds => "DIAMONDS",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card rank, ordered from ace (1) to king (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks in ordinal order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordinal of the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by its ordinal.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value == 0 || value > 13 {
            return None;
        }
        Some(Self::ALL[value as usize - 1])
    }

    /// Returns the signed difference `self - other` between two ordinals.
    ///
    /// ```
    /// use carddeck::Rank;
    ///
    /// assert_eq!(Rank::King.distance(Rank::Ace), 12);
    /// assert_eq!(Rank::Ace.distance(Rank::Two), -1);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "ordinals are at most 13")]
    pub const fn distance(self, other: Self) -> i8 {
        self.value() as i8 - other.value() as i8
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the display name, e.g. `"KING of DIAMONDS"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
