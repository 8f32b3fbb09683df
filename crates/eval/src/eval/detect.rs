// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each detector checks if a collection of cards contains a poker category and
//! returns the card that represents the category for tie breaking, or `None` if
//! the category is not in the cards. Detectors bucket the cards by rank or suit
//! and scan the buckets from the strongest to the weakest.
//!
//! When a bucket holds more than one card the representative is the greatest
//! card in the bucket so that results do not depend on the cards order.
use showdown_cards::{Card, Rank, Suit};

/// Number of rank buckets, from the Deuce to the Ace.
const RANKS: usize = 13;

/// Number of straight slots, the Ace takes both the first and the last slot.
const STRAIGHT_SLOTS: usize = 14;

/// Length of a straight.
const STRAIGHT_LEN: usize = 5;

/// Minimum number of same suit cards in a flush.
const FLUSH_LEN: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: usize,
    top: Option<Card>,
}

impl Bucket {
    fn add(&mut self, card: Card) {
        self.count += 1;
        self.top = Some(self.top.map_or(card, |top| top.max(card)));
    }
}

/// Buckets cards by rank, the Ace goes in the last bucket.
fn rank_buckets(cards: &[Card]) -> [Bucket; RANKS] {
    let mut buckets = [Bucket::default(); RANKS];
    for &card in cards {
        buckets[card.rank() as usize].add(card);
    }

    buckets
}

fn suit_buckets(cards: &[Card]) -> [Bucket; Suit::COUNT] {
    let mut buckets = [Bucket::default(); Suit::COUNT];
    for &card in cards {
        buckets[card.suit().index()].add(card);
    }

    buckets
}

/// Finds the highest rank with at least `n` cards.
pub fn repeat(n: usize, cards: &[Card]) -> Option<Card> {
    rank_buckets(cards)
        .into_iter()
        .rev()
        .filter(|b| b.count >= n)
        .find_map(|b| b.top)
}

/// Four cards of the same rank.
pub fn four_of_a_kind(cards: &[Card]) -> Option<Card> {
    repeat(4, cards)
}

/// Three cards of the same rank.
pub fn three_of_a_kind(cards: &[Card]) -> Option<Card> {
    repeat(3, cards)
}

/// Two cards of the same rank.
pub fn one_pair(cards: &[Card]) -> Option<Card> {
    repeat(2, cards)
}

/// Two pairs of different ranks, returns a card of the higher pair.
pub fn two_pair(cards: &[Card]) -> Option<Card> {
    let mut pairs = rank_buckets(cards)
        .into_iter()
        .rev()
        .filter(|b| b.count >= 2)
        .filter_map(|b| b.top);

    let high = pairs.next()?;
    pairs.next().map(|_| high)
}

/// Five cards in sequence, returns the top card of the highest sequence.
///
/// The Ace plays both below the Deuce in the wheel (A-2-3-4-5) and above the
/// King in Broadway (T-J-Q-K-A).
pub fn straight(cards: &[Card]) -> Option<Card> {
    // Slot 0 is the Ace, slots 1..=12 Deuce to King, slot 13 the Ace again.
    let mut slots: [Option<Card>; STRAIGHT_SLOTS] = [None; STRAIGHT_SLOTS];
    let mut place = |slot: usize, card: Card| {
        slots[slot] = Some(slots[slot].map_or(card, |top: Card| top.max(card)));
    };

    for &card in cards {
        let slot = usize::from(card.rank().value()) - 1;
        place(slot, card);

        if card.rank() == Rank::Ace {
            place(STRAIGHT_SLOTS - 1, card);
        }
    }

    (STRAIGHT_LEN - 1..STRAIGHT_SLOTS)
        .rev()
        .find(|&top| {
            slots[top + 1 - STRAIGHT_LEN..=top]
                .iter()
                .all(Option::is_some)
        })
        .and_then(|top| slots[top])
}

/// Five cards of the same suit, returns the highest card of the suit.
pub fn flush(cards: &[Card]) -> Option<Card> {
    suit_buckets(cards)
        .into_iter()
        .filter(|b| b.count >= FLUSH_LEN)
        .filter_map(|b| b.top)
        .max()
}

/// Three of a kind and a pair, returns a card of the three of a kind.
pub fn full_house(cards: &[Card]) -> Option<Card> {
    let trips = three_of_a_kind(cards)?;
    let rest = cards
        .iter()
        .copied()
        .filter(|c| c.rank() != trips.rank())
        .collect::<Vec<_>>();

    one_pair(&rest).map(|_| trips)
}

/// A straight with all cards of the flush suit.
pub fn straight_flush(cards: &[Card]) -> Option<Card> {
    let suit = flush(cards)?.suit();
    let suited = cards
        .iter()
        .copied()
        .filter(|c| c.suit() == suit)
        .collect::<Vec<_>>();

    straight(&suited)
}

/// An Ace high straight flush.
pub fn royal_flush(cards: &[Card]) -> Option<Card> {
    straight_flush(cards).filter(|c| c.rank() == Rank::Ace)
}

/// The highest card.
pub fn high_card(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Hand;

    fn cards(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn repeat_scans_from_the_ace() {
        let hand = cards("2S 2H KD KC AS AH 7C");
        assert_eq!(one_pair(&hand), Some(card("AH")));
        assert_eq!(three_of_a_kind(&hand), None);

        let hand = cards("9S 9H 9D 4C 4S 4H KD");
        assert_eq!(three_of_a_kind(&hand), Some(card("9D")));
        assert_eq!(repeat(1, &hand), Some(card("KD")));

        let hand = cards("QS QH QD QC 3S");
        assert_eq!(four_of_a_kind(&hand), Some(card("QD")));
        assert_eq!(repeat(5, &hand), None);

        assert_eq!(repeat(2, &[]), None);
    }

    #[test]
    fn two_pair_returns_higher_pair() {
        assert_eq!(two_pair(&cards("3S 3H JD JC 8S")), Some(card("JD")));
        assert_eq!(two_pair(&cards("AS AH 2D 2C 8S KS KD")), Some(card("AH")));
        assert_eq!(two_pair(&cards("3S 3H 3D JC 8S")), None);
        assert_eq!(two_pair(&cards("3S 3H 3D 3C 8S")), None);
        assert_eq!(two_pair(&cards("3S 4H 5D 6C 8S")), None);
    }

    #[test]
    fn straight_top_card() {
        assert_eq!(straight(&cards("5S 6H 7D 8C 9S")), Some(card("9S")));
        assert_eq!(straight(&cards("TS JH QD KC AS")), Some(card("AS")));
        assert_eq!(straight(&cards("2S 3H 4C 5D AS")), Some(card("5D")));
        // The highest sequence wins when there are six or seven in a row.
        assert_eq!(
            straight(&cards("AS 2H 3C 4D 5S 6H 7C")),
            Some(card("7C"))
        );
        // Duplicate ranks do not break the sequence.
        assert_eq!(
            straight(&cards("8S 8H 9C TD JS QH 2C")),
            Some(card("QH"))
        );
    }

    #[test]
    fn straight_needs_five_in_a_row() {
        assert_eq!(straight(&cards("QS KH AC 2D 3S")), None);
        assert_eq!(straight(&cards("2S 3H 4C 5D 7S 8H 9C")), None);
        assert_eq!(straight(&cards("2S 3H 4C 5D")), None);
        assert_eq!(straight(&[]), None);
    }

    #[test]
    fn flush_highest_card() {
        assert_eq!(flush(&cards("2H 7H 9H JH 4H")), Some(card("JH")));
        assert_eq!(flush(&cards("2H 7H 9H JH 4H AH KS")), Some(card("AH")));
        assert_eq!(flush(&cards("2H 7H 9H JH 4S AD KS")), None);
        assert_eq!(flush(&cards("2H 7H 9H JH")), None);
    }

    #[test]
    fn full_house_needs_a_pair_outside_the_trips() {
        assert_eq!(full_house(&cards("8S 8H 8D 4C 4S")), Some(card("8D")));
        assert_eq!(full_house(&cards("8S 8H 8D KC KS KH 2C")), Some(card("KC")));
        assert_eq!(full_house(&cards("8S 8H 8D 4C 5S 6H")), None);
        assert_eq!(full_house(&cards("8S 8H 8D 8C 5S 6H")), None);
        assert_eq!(full_house(&cards("8S 8H 4C 4S")), None);
    }

    #[test]
    fn straight_flush_uses_flush_suit_only() {
        assert_eq!(
            straight_flush(&cards("5H 6H 7H 8H 9H 2C")),
            Some(card("9H"))
        );
        assert_eq!(
            straight_flush(&cards("AD 2D 3D 4D 5D KC")),
            Some(card("5D"))
        );
        // A straight and a flush that do not overlap.
        assert_eq!(straight_flush(&cards("5H 6H 7H 8H 9C JH")), None);
        assert_eq!(straight_flush(&cards("5H 6C 7H 8H 9H")), None);
    }

    #[test]
    fn royal_flush_is_ace_high() {
        assert_eq!(royal_flush(&cards("TS JS QS KS AS")), Some(card("AS")));
        assert_eq!(royal_flush(&cards("9S TS JS QS KS 2H AH")), None);
        // The wheel straight flush is not royal.
        assert_eq!(royal_flush(&cards("AS 2S 3S 4S 5S")), None);
    }

    #[test]
    fn high_card_is_ace_high() {
        assert_eq!(high_card(&cards("2S KH AC 9D")), Some(card("AC")));
        assert_eq!(high_card(&cards("2S")), Some(card("2S")));
        assert_eq!(high_card(&[]), None);
    }

    #[test]
    fn representative_does_not_depend_on_order() {
        let mut hand = cards("7C 7S 7H 2D 2S").to_vec();
        let trips = three_of_a_kind(&hand);
        hand.reverse();
        assert_eq!(three_of_a_kind(&hand), trips);
        assert_eq!(trips, Some(card("7C")));
    }
}
