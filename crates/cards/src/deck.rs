// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[cfg(feature = "parallel")]
mod parallel;

/// Number of ranks in each suit.
const NUM_RANKS: u8 = 13;

/// Errors returned when decoding a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card code is not in `0..52`.
    #[error("invalid card code {0}, expected a code in 0..52")]
    InvalidCode(u8),
    /// The card text is not a rank followed by a suit.
    #[error("invalid card '{0}', expected a rank and a suit like AS or 10h")]
    InvalidString(String),
}

/// A Poker card.
///
/// A card is represented by a single code in `0..52` with the following format:
///
/// ```text
///   code = rank + 13 * suit
///   rank = code % 13  (deuce=0,trey=1,four=2,...,king=11,ace=12)
///   suit = code / 13  (spades=0,diamonds=1,hearts=2,clubs=3)
/// ```
///
/// A card serializes as its code and deserialization rejects codes outside
/// of `0..52`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card(rank as u8 + NUM_RANKS * suit as u8)
    }

    /// Create a card from its code, returns `None` if the code is not in `0..52`.
    pub fn from_code(code: u8) -> Option<Card> {
        ((code as usize) < Deck::SIZE).then_some(Card(code))
    }

    /// This card code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 / NUM_RANKS) as usize]
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 % NUM_RANKS) as usize]
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Card::from_code(code).ok_or(CardError::InvalidCode(code))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidString(s.to_string());

        let mut chars = s.trim().chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(invalid)?;

        let rank = match chars.as_str() {
            "10" => Some(Rank::Ten),
            r => {
                let mut rank_chars = r.chars();
                match (rank_chars.next(), rank_chars.next()) {
                    (Some(c), None) => Rank::from_char(c),
                    _ => None,
                }
            }
        }
        .ok_or_else(invalid)?;

        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks indexed by their numeric value.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank numeric value, deuce is 0 and ace is 12.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    /// All suits indexed by their numeric value.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// Calls the `f` closure for each k-cards subset of `cards`.
///
/// Subsets are generated in lexicographic order of the card positions, the
/// closure is not called if k is 0 or greater than the number of cards.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    let n = cards.len();
    if k == 0 || k > n {
        return;
    }

    let mut pos = (0..k).collect::<Vec<_>>();
    let mut h = cards[..k].to_vec();

    loop {
        f(&h);

        // Find the rightmost position that can still move right.
        let Some(j) = (0..k).rev().find(|&j| pos[j] < j + n - k) else {
            return;
        };

        pos[j] += 1;
        for i in (j + 1)..k {
            pos[i] = pos[i - 1] + 1;
        }

        for (i, &p) in pos.iter().enumerate().skip(j) {
            h[i] = cards[p];
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut rng = rand::rng();
        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(&mut rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
