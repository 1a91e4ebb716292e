use core::cmp::Ordering;

use thiserror::Error;

use crate::domain::card::{Card, Rank};
use crate::domain::deck::{counts_by_rank, counts_by_suit};
use crate::domain::hand::{HandRank, RankedHand};

use super::lookup_tables::{detect_straight, mask_of, straight_ranks};

/// Ошибки оценки руки.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("rank_hand ожидает от 5 до 7 карт, получено {0}")]
    InvalidCardCount(usize),

    #[error("Карта {0} встречается дважды")]
    DuplicateCard(Card),

    /// Нарушен инвариант поиска (стрит/кикеры не нашли ожидаемую карту).
    #[error("Внутренняя ошибка оценки руки: {0}")]
    HandEvaluationInternal(String),
}

/// Главная функция: лучшая 5-карточная рука из 5–7 карт (борд + карманные).
///
/// Результат не зависит от порядка входных карт.
pub fn rank_hand(cards: &[Card]) -> Result<RankedHand, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidCardCount(cards.len()));
    }

    // Канонический порядок: ранг по убыванию, затем масть по убыванию.
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank).then_with(|| b.suit.cmp(&a.suit)));
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(EvalError::DuplicateCard(w[0]));
    }

    // Флеш-кандидат: масть, которой 5+ карт (в 7 картах такая максимум одна).
    let flush_cards: Vec<Card> = counts_by_suit(&sorted)
        .into_iter()
        .find(|&(_, n)| n >= 5)
        .map(|(suit, _)| sorted.iter().filter(|c| c.suit == suit).copied().collect())
        .unwrap_or_default();

    if !flush_cards.is_empty() {
        if let Some(run) = find_straight(&flush_cards)? {
            let rank = if run[0].rank == Rank::Ace {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            };
            return Ok(RankedHand { rank, cards: run });
        }
    }

    let groups = rank_groups(&sorted);
    let top = groups[0].len();
    let second = groups.get(1).map_or(0, Vec::len);

    // Four of a kind: каре + лучший кикер.
    if top == 4 {
        let hand = with_kickers(&sorted, groups[0].clone(), &[groups[0][0].rank])?;
        return Ok(RankedHand {
            rank: HandRank::FourOfAKind,
            cards: hand,
        });
    }

    // Full house: тройка + две карты следующей группы (пара или вторая тройка).
    if top == 3 && second >= 2 {
        let mut hand = groups[0].clone();
        hand.extend_from_slice(&groups[1][..2]);
        return Ok(RankedHand {
            rank: HandRank::FullHouse,
            cards: to_five(hand)?,
        });
    }

    if !flush_cards.is_empty() {
        return Ok(RankedHand {
            rank: HandRank::Flush,
            cards: to_five(flush_cards[..5].to_vec())?,
        });
    }

    if let Some(run) = find_straight(&sorted)? {
        return Ok(RankedHand {
            rank: HandRank::Straight,
            cards: run,
        });
    }

    let (rank, hand) = match (top, second) {
        (3, _) => (
            HandRank::ThreeOfAKind,
            with_kickers(&sorted, groups[0].clone(), &[groups[0][0].rank])?,
        ),
        (2, 2) => {
            let mut pairs = groups[0].clone();
            pairs.extend_from_slice(&groups[1]);
            (
                HandRank::TwoPair,
                with_kickers(&sorted, pairs, &[groups[0][0].rank, groups[1][0].rank])?,
            )
        }
        (2, _) => (
            HandRank::OnePair,
            with_kickers(&sorted, groups[0].clone(), &[groups[0][0].rank])?,
        ),
        _ => (HandRank::HighCard, to_five(sorted[..5].to_vec())?),
    };

    Ok(RankedHand { rank, cards: hand })
}

/// Сравнить две руки: `Greater` — первая сильнее.
pub fn compare_hands(a: &RankedHand, b: &RankedHand) -> Ordering {
    a.compare(b)
}

/// Группы карт одного ранга, отсортированные по (размер desc, ранг desc).
/// Внутри группы карты идут в каноническом порядке `sorted`.
fn rank_groups(sorted: &[Card]) -> Vec<Vec<Card>> {
    let mut counts: Vec<(Rank, usize)> = counts_by_rank(sorted).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    counts
        .into_iter()
        .map(|(rank, _)| sorted.iter().filter(|c| c.rank == rank).copied().collect())
        .collect()
}

/// Стрит среди карт (отсортированных канонически).
///
/// Ранги сначала дедуплицируются маской; для каждого ранга стрита берётся
/// первая карта этого ранга в каноническом порядке.
fn find_straight(sorted: &[Card]) -> Result<Option<[Card; 5]>, EvalError> {
    let Some(high) = detect_straight(mask_of(sorted)) else {
        return Ok(None);
    };

    let mut run = Vec::with_capacity(5);
    for rank in straight_ranks(high) {
        let card = sorted.iter().find(|c| c.rank == rank).ok_or_else(|| {
            EvalError::HandEvaluationInternal(format!("стрит до {high}: нет карты ранга {rank}"))
        })?;
        run.push(*card);
    }

    to_five(run).map(Some)
}

/// Дополнить `hand` старшими кикерами, ранги которых не входят в `used`.
fn with_kickers(sorted: &[Card], mut hand: Vec<Card>, used: &[Rank]) -> Result<[Card; 5], EvalError> {
    for card in sorted.iter().filter(|c| !used.contains(&c.rank)) {
        if hand.len() == 5 {
            break;
        }
        hand.push(*card);
    }
    to_five(hand)
}

fn to_five(cards: Vec<Card>) -> Result<[Card; 5], EvalError> {
    let n = cards.len();
    <[Card; 5]>::try_from(cards).map_err(|_| {
        EvalError::HandEvaluationInternal(format!("ожидалось 5 карт, собрано {n}"))
    })
}
