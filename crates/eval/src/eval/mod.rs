// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator finds the best five cards poker hand in a set of cards by
//! trying each category detector from the strongest category (royal flush) to
//! the weakest (high card) and keeping the first one that matches.
//!
//! The result is an [Evaluation] with a [HandValue], a single integer that can
//! be compared directly with other players values, and the cards combination
//! that makes the hand, useful for UIs to show a winning hand.
//!
//! The ace always plays high, A-2-3-4-5 is not a straight.
use log::trace;
use serde::{Deserialize, Serialize};

use jokbo_cards::Card;

mod detect;
mod value;

pub use value::{CATEGORY_BAND, HandCategory, HandValue, InvalidValue};

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    value: HandValue,
    combination: Vec<Card>,
}

impl Evaluation {
    pub(crate) fn new(value: HandValue, combination: Vec<Card>) -> Self {
        Self { value, combination }
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.value.category()
    }

    /// The cards that make the hand.
    ///
    /// Cards are ordered by their role in the hand, the defining groups first
    /// (quads, trips, pairs) then kickers from the highest, straights and
    /// flushes from the highest card.
    pub fn combination(&self) -> &[Card] {
        &self.combination
    }

    /// Splits the evaluation into its value and combination.
    pub fn into_parts(self) -> (HandValue, Vec<Card>) {
        (self.value, self.combination)
    }
}

type Detector = fn(&detect::Grouped) -> Option<Evaluation>;

/// Detectors from the strongest to the weakest category, high card is the
/// fallback when none matches.
const DETECTORS: [Detector; 9] = [
    detect::royal_flush,
    detect::straight_flush,
    detect::four_of_a_kind,
    detect::full_house,
    detect::flush,
    detect::straight,
    detect::three_of_a_kind,
    detect::two_pair,
    detect::one_pair,
];

/// Evaluates the best five cards hand in `cards`.
///
/// The cards must not contain duplicates, with fewer than five cards the
/// missing cards count as lower than any rank. Use [Hand](crate::Hand) to
/// validate cards before evaluation.
pub fn evaluate(cards: &[Card]) -> Evaluation {
    let grouped = detect::Grouped::new(cards);
    let eval = DETECTORS
        .iter()
        .find_map(|detect| detect(&grouped))
        .unwrap_or_else(|| detect::high_card(&grouped));

    trace!(
        "Evaluated {cards:?} as {} {} {:?}",
        eval.category(),
        eval.value(),
        eval.combination()
    );

    eval
}

impl HandValue {
    /// Evaluates the best five cards hand in `cards` and returns its value.
    pub fn eval(cards: &[Card]) -> HandValue {
        evaluate(cards).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use jokbo_cards::{Deck, Rank, for_each_subset};
    use rand::prelude::*;
    use std::thread;

    fn codes(codes: &[u8]) -> Vec<Card> {
        codes.iter().map(|&c| Card::from_code(c).unwrap()).collect()
    }

    fn combination_codes(eval: &Evaluation) -> Vec<u8> {
        eval.combination().iter().map(|c| c.code()).collect()
    }

    /// Categorizes exactly five cards counting ranks and suits.
    fn five_cards_category(five: &[Card]) -> HandCategory {
        assert_eq!(five.len(), 5);

        let mut counts = [0; 13];
        for c in five {
            counts[c.rank().index()] += 1;
        }

        let mut groups = counts.into_iter().filter(|&n| n > 0).collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let mut ranks = five.iter().map(|c| c.rank().index()).collect::<Vec<_>>();
        ranks.sort_unstable();

        let is_flush = five.iter().all(|c| c.suit() == five[0].suit());
        let is_straight = groups.len() == 5 && ranks[4] - ranks[0] == 4;

        match (is_straight, is_flush, groups.as_slice()) {
            (true, true, _) if ranks[0] == Rank::Ten.index() => HandCategory::RoyalFlush,
            (true, true, _) => HandCategory::StraightFlush,
            (_, _, [4, ..]) => HandCategory::FourOfAKind,
            (_, _, [3, 2]) => HandCategory::FullHouse,
            (_, true, _) => HandCategory::Flush,
            (true, _, _) => HandCategory::Straight,
            (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
            (_, _, [2, 2, ..]) => HandCategory::TwoPair,
            (_, _, [2, ..]) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }

    fn random_hands(seed: u64, count: usize) -> Vec<Vec<Card>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let k = rng.random_range(5..=9);
                Deck::new_and_shuffled(&mut rng).into_iter().take(k).collect()
            })
            .collect()
    }

    #[test]
    fn royal_flush() {
        let eval = evaluate(&codes(&[12, 11, 10, 9, 8]));
        assert_eq!(eval.category(), HandCategory::RoyalFlush);
        assert_eq!(eval.value().raw(), 90_000_000_000);
        assert_eq!(combination_codes(&eval), [12, 11, 10, 9, 8]);

        // Clubs royal with a lower straight flush in the same suit.
        let eval = evaluate(&codes(&[51, 50, 49, 48, 47, 46, 45]));
        assert_eq!(eval.value().raw(), 90_000_000_000);
    }

    #[test]
    fn four_of_a_kind() {
        let eval = evaluate(&codes(&[0, 13, 26, 39, 1]));
        assert_eq!(eval.category(), HandCategory::FourOfAKind);
        assert_eq!(eval.value().raw(), 70_000_000_102);
        assert_eq!(combination_codes(&eval), [0, 13, 26, 39, 1]);
    }

    #[test]
    fn two_pair() {
        let eval = evaluate(&codes(&[12, 12 + 13, 11, 11 + 13, 5]));
        assert_eq!(eval.category(), HandCategory::TwoPair);
        assert_eq!(
            eval.value().raw(),
            20_000_000_000 + 13 * 10_000 + 12 * 100 + 6
        );
        assert_eq!(combination_codes(&eval), [12, 25, 11, 24, 5]);
    }

    #[test]
    fn straight_flush() {
        let eval = evaluate(&codes(&[0, 1, 2, 3, 4]));
        assert_eq!(eval.category(), HandCategory::StraightFlush);
        assert_eq!(eval.value().raw(), 80_000_000_000 + 4 + 4 + 1);
        assert_eq!(combination_codes(&eval), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn flush_beats_straight() {
        // 2H 5H 7H 9H JH make a flush, 5H 6S 7H 8D 9H a straight.
        let eval = evaluate(&codes(&[26, 29, 31, 33, 35, 4, 19]));
        assert_eq!(eval.category(), HandCategory::Flush);
        assert_eq!(eval.value().raw(), 50_000_000_000 + 10_08_06_04_01);
        assert_eq!(combination_codes(&eval), [35, 33, 31, 29, 26]);
    }

    #[test]
    fn same_high_card_same_value() {
        // AS KD JH 9C 7S 4D 2H
        let v1 = evaluate(&codes(&[12, 24, 35, 46, 5, 15, 26]));
        // AD KS JC 9H 7D 3S 2C
        let v2 = evaluate(&codes(&[25, 11, 48, 33, 18, 1, 39]));

        assert_eq!(v1.category(), HandCategory::HighCard);
        assert_eq!(v1.value(), v2.value());
        assert_eq!(v1.value().raw(), 13_12_10_08_06);
        assert_ne!(v1.combination(), v2.combination());
    }

    #[test]
    fn no_wheel_straight() {
        // AS 2D 3H 4C 5S 9D is ace high.
        let eval = evaluate(&codes(&[12, 13, 27, 41, 3, 20]));
        assert_eq!(eval.category(), HandCategory::HighCard);

        // Suited A-2-3-4-5 is a flush.
        let eval = evaluate(&codes(&[12, 0, 1, 2, 3]));
        assert_eq!(eval.category(), HandCategory::Flush);
    }

    #[test]
    fn kickers_break_ties() {
        // Pair of eights with A-K-4 against A-Q-J kickers.
        let v1 = HandValue::eval(&codes(&[6, 19, 12, 24, 2, 40, 13]));
        let v2 = HandValue::eval(&codes(&[32, 45, 25, 10, 48, 13, 27]));
        assert_eq!(v1.category(), HandCategory::OnePair);
        assert_eq!(v2.category(), HandCategory::OnePair);
        assert!(v1 > v2);

        // Same two pair, the kicker decides.
        let v1 = HandValue::eval(&codes(&[12, 25, 0, 13, 9]));
        let v2 = HandValue::eval(&codes(&[38, 51, 26, 39, 8]));
        assert!(v1 > v2);

        // Trips beat two pair.
        let v3 = HandValue::eval(&codes(&[0, 13, 26, 4, 6]));
        assert!(v3 > v1);
    }

    #[test]
    fn category_ordering() {
        let hands: [&[u8]; 10] = [
            &[12, 24, 35, 46, 5],     // high card
            &[0, 13, 4, 19, 33],      // one pair
            &[0, 13, 4, 17, 33],      // two pair
            &[0, 13, 26, 4, 19],      // three of a kind
            &[0, 14, 28, 42, 4],      // straight
            &[0, 2, 4, 6, 8],         // flush
            &[0, 13, 26, 4, 17],      // full house
            &[0, 13, 26, 39, 4],      // four of a kind
            &[13, 14, 15, 16, 17],    // straight flush
            &[34, 35, 36, 37, 38],    // royal flush
        ];

        let evals = hands
            .iter()
            .map(|h| evaluate(&codes(h)))
            .collect::<Vec<_>>();

        for (eval, category) in evals.iter().zip(HandCategory::categories()) {
            assert_eq!(eval.category(), category);
        }

        assert!(evals.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(7);

        for mut hand in random_hands(11, 500) {
            let expected = evaluate(&hand);
            let expected_cards = expected.combination().iter().collect::<HashSet<_>>();

            for _ in 0..4 {
                hand.shuffle(&mut rng);
                let eval = evaluate(&hand);
                assert_eq!(eval.value(), expected.value());
                assert_eq!(eval.combination().iter().collect::<HashSet<_>>(), expected_cards);
            }
        }
    }

    #[test]
    fn best_of_all_five_cards_subsets() {
        for hand in random_hands(0x6a6f6b626f, 3_000) {
            let eval = evaluate(&hand);

            let mut best_value = None;
            let mut best_category = None;
            for_each_subset(&hand, 5, |five| {
                best_value = best_value.max(Some(HandValue::eval(five)));
                best_category = best_category.max(Some(five_cards_category(five)));
            });

            assert_eq!(Some(eval.value()), best_value, "{hand:?}");
            assert_eq!(Some(eval.category()), best_category, "{hand:?}");

            // The combination alone makes the same hand.
            let combination = eval.combination();
            assert_eq!(combination.len(), 5);
            assert!(combination.iter().all(|c| hand.contains(c)));
            assert_eq!(combination.iter().collect::<HashSet<_>>().len(), 5);
            assert_eq!(five_cards_category(combination), eval.category());
            assert_eq!(HandValue::eval(combination), eval.value());
        }
    }

    // This takes a while to run in debug mode as it goes through 2.6M hands.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 10];
        Deck::default().for_each(5, |hand| {
            let eval = evaluate(hand);
            assert_eq!(eval.category(), five_cards_category(hand));
            counts[eval.category() as usize] += 1;
        });

        // Without A-2-3-4-5 straights the wheels move to flush and high card.
        assert_eq!(
            counts,
            [
                1_303_560, 1_098_240, 123_552, 54_912, 9_180, 5_112, 3_744, 624, 32, 4
            ]
        );
    }

    #[test]
    fn concurrent_evaluation() {
        let hands = random_hands(42, 1_000);
        let expected = hands.iter().map(|h| evaluate(h)).collect::<Vec<_>>();

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for (hand, expected) in hands.iter().zip(&expected) {
                        assert_eq!(&evaluate(hand), expected);
                    }
                });
            }
        });
    }

    #[test]
    fn fewer_than_five_cards() {
        let eval = evaluate(&codes(&[12, 25]));
        assert_eq!(eval.category(), HandCategory::OnePair);
        assert_eq!(eval.value().raw(), 10_000_000_000 + 13_00_00_00);

        let eval = evaluate(&[]);
        assert_eq!(eval.category(), HandCategory::HighCard);
        assert!(eval.combination().is_empty());
    }
}
