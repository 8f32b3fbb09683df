// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a card from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input has no card in it.
    #[error("empty card string")]
    Empty,
    /// The rank part is not one of 2-9, T, 10, J, Q, K, A.
    #[error("invalid card rank {0:?}")]
    InvalidRank(String),
    /// The suit part is not one of S, H, C, D or their symbols.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
}

/// A Poker card.
///
/// Cards are ordered by rank first, with the Ace as the highest rank, and then
/// by suit so that the order is total and consistent with equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.char_indices();

        // The suit is the last char, everything before it is the rank.
        let (suit_pos, suit_char) = chars.next_back().ok_or(ParseCardError::Empty)?;
        if suit_pos == 0 {
            return Err(ParseCardError::InvalidRank(s.to_string()));
        }

        let rank = s[..suit_pos].parse::<Rank>()?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit(suit_char))?;

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// Ranks are ordered from the Deuce up to the Ace, ordinary comparisons treat
/// the Ace as the highest card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
    /// Returns all ranks from the Deuce to the Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face value of this rank in 1..=13 with the Ace as 1.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => *r as u8 + 2,
        }
    }

    /// The magnitude of this rank in 2..=14 with the Ace as 14.
    pub fn high_value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank for a face value in 1..=13, 1 is the Ace.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 => Some(Rank::Ace),
            2..=13 => Rank::ranks().nth(usize::from(value - 2)),
            _ => None,
        }
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

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" | "1" => Rank::Ace,
            "" => return Err(ParseCardError::Empty),
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds].into_iter()
    }

    /// Index of this suit in 0..4.
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'S' | 's' | '♠' => Some(Suit::Spades),
            'H' | 'h' | '♥' => Some(Suit::Hearts),
            'C' | 'c' | '♣' => Some(Suit::Clubs),
            'D' | 'd' | '♦' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, leaves the deck untouched if it has fewer than `n` cards.
    pub fn deal_many(&mut self, n: usize) -> Option<Vec<Card>> {
        let len = self.cards.len();
        if n > len {
            return None;
        }

        let mut dealt = self.cards.split_off(len - n);
        dealt.reverse();
        Some(dealt)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Moves all the cards from `other` at the bottom of this deck.
    pub fn merge(&mut self, other: &mut Deck) {
        let mut cards = std::mem::take(&mut other.cards);
        cards.append(&mut self.cards);
        self.cards = cards;
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

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_cards_are_unique() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("as".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("T♣".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(" 2♦ ".parse(), Ok(Card::new(Rank::Deuce, Suit::Diamonds)));

        // Every card parses back from its display form.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn card_from_invalid_string() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("S".to_string()))
        );
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert_eq!(
            "11S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("11".to_string()))
        );
    }

    #[test]
    fn ace_is_highest() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Spades);
        let deuce = Card::new(Rank::Deuce, Suit::Spades);
        assert!(ace > king);
        assert!(king > deuce);
        assert_eq!(Rank::ranks().max(), Some(Rank::Ace));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ace.high_value(), 14);
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::King.high_value(), 13);

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn deck_deal_many() {
        let mut deck = Deck::default();
        let top = Card::new(Rank::Ace, Suit::Diamonds);
        let next = Card::new(Rank::King, Suit::Diamonds);

        let dealt = deck.deal_many(2).unwrap();
        assert_eq!(dealt, vec![top, next]);
        assert_eq!(deck.count(), Deck::SIZE - 2);

        assert_eq!(deck.deal_many(Deck::SIZE), None);
        assert_eq!(deck.count(), Deck::SIZE - 2);
    }

    #[test]
    fn deck_remove_and_merge() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        deck.remove(ad);
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let mut pile = Deck::from_iter([ad]);
        deck.merge(&mut pile);
        assert!(pile.is_empty());
        assert_eq!(deck.count(), Deck::SIZE);

        // Merged cards go at the bottom.
        let cards = deck.into_iter().collect::<Vec<_>>();
        assert_eq!(cards[0], ad);
    }
}
