// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category detectors.
//!
//! Each detector looks for one category in the grouped cards and returns the
//! value and the cards combination that make the category, or `None` if the
//! category is not in the cards. Detectors don't check for stronger categories,
//! the evaluator calls them from the strongest to the weakest.
use std::cmp::Reverse;

use jokbo_cards::{Card, Rank, Suit};

use super::{
    Evaluation,
    value::{HandCategory, HandValue, pack_ranks},
};

/// Number of cards in a poker hand.
const HAND_SIZE: usize = 5;

/// Five consecutive ranks bits.
const RUN_MASK: u16 = 0b1_1111;

/// The ranks of a royal flush.
const ROYAL_RANKS: [Rank; HAND_SIZE] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

/// The input cards grouped for the detectors.
pub(crate) struct Grouped {
    /// Cards by descending rank, cards with the same rank by ascending suit.
    cards: Vec<Card>,
    /// Number of cards for each rank.
    counts: [u8; 13],
    /// Bit `code` is set for each card.
    mask: u64,
}

impl Grouped {
    pub(crate) fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| (Reverse(c.rank()), c.suit()));

        let mut counts = [0u8; 13];
        let mut mask = 0u64;
        for card in &sorted {
            counts[card.rank().index()] += 1;
            mask |= 1 << card.code();
        }

        Self {
            cards: sorted,
            counts,
            mask,
        }
    }

    fn contains(&self, card: Card) -> bool {
        self.mask & (1 << card.code()) != 0
    }

    /// Ranks held at least `min` times, from ace down.
    fn ranks_with(&self, min: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |r| self.counts[r.index()] >= min)
    }

    fn of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.rank() == rank)
    }

    fn of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit() == suit)
    }

    /// The highest `n` cards with a rank not in `skip`.
    fn kickers(&self, skip: &[Rank], n: usize) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| !skip.contains(&c.rank()))
            .take(n)
            .collect()
    }

    /// A bit for each rank in the suit, or in any suit if `suit` is `None`.
    fn rank_mask(&self, suit: Option<Suit>) -> u16 {
        self.cards
            .iter()
            .filter(|c| suit.is_none_or(|s| c.suit() == s))
            .fold(0, |m, c| m | 1 << c.rank().index())
    }

    /// The five cards of a run ending at `high`, highest first.
    fn run_cards(&self, high: Rank, suit: Option<Suit>) -> Vec<Card> {
        let low = high.index() + 1 - HAND_SIZE;
        (low..=high.index())
            .rev()
            .filter_map(|idx| {
                let rank = Rank::ALL[idx];
                match suit {
                    Some(suit) => Some(Card::new(rank, suit)),
                    None => self.of_rank(rank).next(),
                }
            })
            .collect()
    }

    /// Builds the evaluation for a hand made of rank groups and kickers.
    ///
    /// The groups are given in priority order as (rank, cards) pairs, the
    /// kickers are the highest cards with a rank not in any group.
    fn with_kickers(
        &self,
        category: HandCategory,
        groups: &[(Rank, usize)],
        num_kickers: usize,
    ) -> Evaluation {
        let group_ranks = groups.iter().map(|&(rank, _)| rank).collect::<Vec<_>>();
        let kickers = self.kickers(&group_ranks, num_kickers);

        let ranks = group_ranks
            .iter()
            .copied()
            .chain(kickers.iter().map(Card::rank));
        let payload = pack_ranks(ranks, (groups.len() + num_kickers) as u32);

        let mut combination = Vec::with_capacity(HAND_SIZE);
        for &(rank, n) in groups {
            combination.extend(self.of_rank(rank).take(n));
        }
        combination.extend(kickers);

        Evaluation::new(HandValue::new(category, payload), combination)
    }
}

/// The highest rank ending five consecutive ranks in `ranks`.
///
/// The ace only plays high, there is no five-high straight.
fn highest_run(ranks: u16) -> Option<Rank> {
    ((HAND_SIZE - 1)..Rank::ALL.len())
        .rev()
        .find(|&high| (ranks >> (high + 1 - HAND_SIZE)) & RUN_MASK == RUN_MASK)
        .map(|high| Rank::ALL[high])
}

pub(crate) fn royal_flush(g: &Grouped) -> Option<Evaluation> {
    Suit::suits().find_map(|suit| {
        let cards = ROYAL_RANKS.map(|rank| Card::new(rank, suit));
        cards.iter().all(|&c| g.contains(c)).then(|| {
            Evaluation::new(HandValue::new(HandCategory::RoyalFlush, 0), cards.to_vec())
        })
    })
}

pub(crate) fn straight_flush(g: &Grouped) -> Option<Evaluation> {
    let (high, suit) = Suit::suits()
        .filter_map(|suit| highest_run(g.rank_mask(Some(suit))).map(|high| (high, suit)))
        .max_by_key(|&(high, _)| high)?;

    // The run end rank plus four, plus one.
    let payload = (high.index() + HAND_SIZE) as u64;
    Some(Evaluation::new(
        HandValue::new(HandCategory::StraightFlush, payload),
        g.run_cards(high, Some(suit)),
    ))
}

pub(crate) fn four_of_a_kind(g: &Grouped) -> Option<Evaluation> {
    let quads = g.ranks_with(4).next()?;
    Some(g.with_kickers(HandCategory::FourOfAKind, &[(quads, 4)], 1))
}

pub(crate) fn full_house(g: &Grouped) -> Option<Evaluation> {
    let trips = g.ranks_with(3).next()?;
    // A second set of trips plays as the pair.
    let pair = g.ranks_with(2).find(|&r| r != trips)?;
    Some(g.with_kickers(HandCategory::FullHouse, &[(trips, 3), (pair, 2)], 0))
}

pub(crate) fn flush(g: &Grouped) -> Option<Evaluation> {
    Suit::suits()
        .filter_map(|suit| {
            let cards = g.of_suit(suit).take(HAND_SIZE).collect::<Vec<_>>();
            (cards.len() == HAND_SIZE).then(|| {
                let payload = pack_ranks(cards.iter().map(Card::rank), HAND_SIZE as u32);
                Evaluation::new(HandValue::new(HandCategory::Flush, payload), cards)
            })
        })
        .max_by_key(Evaluation::value)
}

pub(crate) fn straight(g: &Grouped) -> Option<Evaluation> {
    let high = highest_run(g.rank_mask(None))?;
    Some(Evaluation::new(
        HandValue::new(HandCategory::Straight, high.index() as u64),
        g.run_cards(high, None),
    ))
}

pub(crate) fn three_of_a_kind(g: &Grouped) -> Option<Evaluation> {
    let trips = g.ranks_with(3).next()?;
    Some(g.with_kickers(HandCategory::ThreeOfAKind, &[(trips, 3)], 2))
}

pub(crate) fn two_pair(g: &Grouped) -> Option<Evaluation> {
    let mut pairs = g.ranks_with(2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    Some(g.with_kickers(HandCategory::TwoPair, &[(high, 2), (low, 2)], 1))
}

pub(crate) fn one_pair(g: &Grouped) -> Option<Evaluation> {
    let pair = g.ranks_with(2).next()?;
    Some(g.with_kickers(HandCategory::OnePair, &[(pair, 2)], 3))
}

pub(crate) fn high_card(g: &Grouped) -> Evaluation {
    g.with_kickers(HandCategory::HighCard, &[], HAND_SIZE)
}
