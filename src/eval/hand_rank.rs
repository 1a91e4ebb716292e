use core::cmp::Ordering;
use core::fmt;

use crate::domain::card::Rank;
use crate::domain::hand::{HandRank, RankedHand};

impl HandRank {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL: [HandRank; 10] = [
        HandRank::RoyalFlush,
        HandRank::StraightFlush,
        HandRank::FourOfAKind,
        HandRank::FullHouse,
        HandRank::Flush,
        HandRank::Straight,
        HandRank::ThreeOfAKind,
        HandRank::TwoPair,
        HandRank::OnePair,
        HandRank::HighCard,
    ];

    /// Человеческое название категории.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal flush",
            HandRank::StraightFlush => "Straight flush",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::FullHouse => "Full house",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::TwoPair => "Two pair",
            HandRank::OnePair => "One pair",
            HandRank::HighCard => "High card",
        }
    }

    /// Сильнее ли эта категория (меньшее значение enum = сильнее).
    pub fn beats(&self, other: &HandRank) -> bool {
        self < other
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RankedHand {
    /// Ранги карт тай-брейка в порядке сравнения.
    pub fn tiebreak_ranks(&self) -> [Rank; 5] {
        self.cards.map(|c| c.rank)
    }

    /// Сравнение силы: `Greater` — self сильнее.
    ///
    /// Сначала категория, затем ранги тай-брейка по очереди.
    /// Масти не участвуют, поэтому равные по силе руки дают `Equal`.
    pub fn compare(&self, other: &RankedHand) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.tiebreak_ranks().cmp(&other.tiebreak_ranks()))
    }

    pub fn beats(&self, other: &RankedHand) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn ties(&self, other: &RankedHand) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl fmt::Display for RankedHand {
    /// Формат: `Royal flush: As Ks Qs Js Ts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for c in &self.cards {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}
