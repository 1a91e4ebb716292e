use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
/// Верх колоды — последний элемент.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Сдать верхнюю карту в `target` рубашкой вверх или вниз.
    pub fn deal(&mut self, target: &mut Pile, face_up: bool) -> Option<Card> {
        let card = self.draw_one()?;
        target.push(card, face_up);
        Some(card)
    }
}

/// Карта в стопке вместе с её положением (открыта / закрыта).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealtCard {
    pub card: Card,
    pub face_up: bool,
}

/// Стопка карт: рука игрока, борд, сброс (burns).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    dealt: Vec<DealtCard>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Стопка из открытых карт (удобно для тестов и оценки рук).
    pub fn face_up(cards: &[Card]) -> Self {
        Self {
            dealt: cards
                .iter()
                .map(|&card| DealtCard { card, face_up: true })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dealt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dealt.is_empty()
    }

    pub fn push(&mut self, card: Card, face_up: bool) {
        self.dealt.push(DealtCard { card, face_up });
    }

    pub fn clear(&mut self) {
        self.dealt.clear();
    }

    pub fn dealt(&self) -> &[DealtCard] {
        &self.dealt
    }

    pub fn cards(&self) -> Vec<Card> {
        self.dealt.iter().map(|d| d.card).collect()
    }

    /// Только открытые карты — то, что видно за столом.
    pub fn face_up_cards(&self) -> Vec<Card> {
        self.dealt
            .iter()
            .filter(|d| d.face_up)
            .map(|d| d.card)
            .collect()
    }

    /// Открыть все карты (шоудаун).
    pub fn reveal(&mut self) {
        for d in self.dealt.iter_mut() {
            d.face_up = true;
        }
    }

    /// Новая стопка: сначала карты self, затем other.
    pub fn concat(&self, other: &Pile) -> Pile {
        let mut dealt = Vec::with_capacity(self.len() + other.len());
        dealt.extend_from_slice(&self.dealt);
        dealt.extend_from_slice(&other.dealt);
        Pile { dealt }
    }

    pub fn counts_by_rank(&self) -> BTreeMap<Rank, usize> {
        counts_by_rank(&self.cards())
    }

    pub fn counts_by_suit(&self) -> BTreeMap<Suit, usize> {
        counts_by_suit(&self.cards())
    }
}

/// Сколько карт каждого ранга.
pub fn counts_by_rank(cards: &[Card]) -> BTreeMap<Rank, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Сколько карт каждой масти.
pub fn counts_by_suit(cards: &[Card]) -> BTreeMap<Suit, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.suit).or_insert(0) += 1;
    }
    counts
}
