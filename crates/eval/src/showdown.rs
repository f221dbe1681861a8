// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown helpers for comparing players hands.
use log::debug;

use crate::eval::Evaluation;

/// Returns the indices of the hands with the highest value.
///
/// More than one index means the best hands tie, splitting the pot is left to
/// the caller. Returns an empty vector if there are no hands.
pub fn winners(evaluations: &[Evaluation]) -> Vec<usize> {
    let Some(best) = evaluations.iter().map(Evaluation::value).max() else {
        return Vec::new();
    };

    let winners = evaluations
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value() == best)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    debug!(
        "Showdown of {} hands won by {winners:?} with {} {best}",
        evaluations.len(),
        best.category(),
    );

    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;

    fn eval(hand: &str) -> Evaluation {
        hand.parse::<Hand>().unwrap().evaluate()
    }

    #[test]
    fn single_winner() {
        let board = "2S 7D 9H JC QS";
        let hands = [
            eval(&format!("AS AD {board}")),
            eval(&format!("KS KD {board}")),
            eval(&format!("9S 9D {board}")),
        ];
        assert_eq!(winners(&hands), [2]);
    }

    #[test]
    fn split_pot() {
        // The board plays for both players.
        let board = "TS JD QH KC AS";
        let hands = [
            eval(&format!("2D 3C {board}")),
            eval(&format!("4H 5S {board}")),
            eval(&format!("2C 2H {board}")),
        ];
        assert_eq!(winners(&hands), [0, 1, 2]);

        let board = "AS AD 7H 7C 2S";
        let hands = [
            eval(&format!("KD 3C {board}")),
            eval(&format!("QH 4S {board}")),
            eval(&format!("KH 5S {board}")),
        ];
        assert_eq!(winners(&hands), [0, 2]);
    }

    #[test]
    fn no_hands() {
        assert!(winners(&[]).is_empty());
    }
}
