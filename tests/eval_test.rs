//! Hand evaluator tests.
//!
//! Проверяем:
//! - распознавание всех категорий;
//! - тай-брейки (кикеры, стрит с тузом внизу);
//! - независимость от порядка карт;
//! - ошибки на некорректном вводе.

mod common;

use std::cmp::Ordering;

use holdem_table::domain::{HandRank, Rank, Suit};
use holdem_table::eval::lookup_tables::{detect_straight, mask_of};
use holdem_table::eval::{compare_hands, rank_hand, EvalError};

use common::{c, cards};

fn rank_of(s: &str) -> HandRank {
    rank_hand(&cards(s)).unwrap().rank
}

fn ranks(s: &str) -> Vec<Rank> {
    rank_hand(&cards(s)).unwrap().tiebreak_ranks().to_vec()
}

#[test]
fn royal_flush_is_detected() {
    let hand = rank_hand(&cards("As Ks Qs Js Ts 2h 3d")).unwrap();
    assert_eq!(hand.rank, HandRank::RoyalFlush);
    assert_eq!(
        hand.cards,
        [
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
        ]
    );
    assert_eq!(hand.to_string(), "Royal flush: As Ks Qs Js Ts");
}

#[test]
fn wheel_is_a_five_high_straight() {
    let hand = rank_hand(&cards("Ah 2c 3d 4s 5h 9c Kd")).unwrap();
    assert_eq!(hand.rank, HandRank::Straight);
    assert_eq!(hand.cards[0].rank, Rank::Five);
    assert_eq!(
        hand.tiebreak_ranks(),
        [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
    );

    // Шестёрка-хай бьёт колесо.
    let six_high = rank_hand(&cards("2c 3d 4s 5h 6c 9c Kd")).unwrap();
    assert_eq!(compare_hands(&six_high, &hand), Ordering::Greater);
}

#[test]
fn steel_wheel_is_straight_flush() {
    let hand = rank_hand(&cards("Ad 2d 3d 4d 5d Kc Qh")).unwrap();
    assert_eq!(hand.rank, HandRank::StraightFlush);
    assert_eq!(hand.cards[0].rank, Rank::Five);
}

#[test]
fn every_category_is_recognised() {
    let examples = [
        ("As Ks Qs Js Ts 2h 3d", HandRank::RoyalFlush),
        ("9h 8h 7h 6h 5h Ac Ad", HandRank::StraightFlush),
        ("Qc Qd Qh Qs 2c 3d 4h", HandRank::FourOfAKind),
        ("Jc Jd Jh 4s 4c 2d 9h", HandRank::FullHouse),
        ("Ac 9c 7c 4c 2c Kd Qh", HandRank::Flush),
        ("Tc 9d 8h 7s 6c 2d 2h", HandRank::Straight),
        ("7c 7d 7h Ks 2c 4d 9h", HandRank::ThreeOfAKind),
        ("Ac Ad 8h 8s 2c 4d 9h", HandRank::TwoPair),
        ("Kc Kd 8h 6s 2c 4d 9h", HandRank::OnePair),
        ("Ac Jd 8h 6s 2c 4d 9h", HandRank::HighCard),
    ];

    for (s, expected) in examples {
        assert_eq!(rank_of(s), expected, "{s}");
    }
}

#[test]
fn categories_are_strictly_ordered() {
    let ladder = [
        "As Ks Qs Js Ts 2h 3d",
        "9h 8h 7h 6h 5h Ac Ad",
        "Qc Qd Qh Qs 2c 3d 4h",
        "Jc Jd Jh 4s 4c 2d 9h",
        "Ac 9c 7c 4c 2c Kd Qh",
        "Tc 9d 8h 7s 6c 2d 2h",
        "7c 7d 7h Ks 2c 4d 9h",
        "Ac Ad 8h 8s 2c 4d 9h",
        "Kc Kd 8h 6s 2c 4d 9h",
        "Ac Jd 8h 6s 2c 4d 9h",
    ];

    let hands: Vec<_> = ladder.iter().map(|s| rank_hand(&cards(s)).unwrap()).collect();
    for pair in hands.windows(2) {
        assert!(pair[0].beats(&pair[1]), "{} должна бить {}", pair[0], pair[1]);
        assert!(!pair[1].beats(&pair[0]));
    }
}

#[test]
fn result_does_not_depend_on_card_order() {
    let base = cards("Ac Ad 8h 8s 2c 4d 9h");
    let expected = rank_hand(&base).unwrap();

    let mut rotated = base.clone();
    for _ in 0..base.len() {
        rotated.rotate_left(1);
        assert_eq!(rank_hand(&rotated).unwrap(), expected);
    }

    let mut reversed = base;
    reversed.reverse();
    assert_eq!(rank_hand(&reversed).unwrap(), expected);
}

#[test]
fn straight_with_paired_ranks_is_found() {
    // Две шестёрки и две семёрки не ломают поиск стрита.
    let hand = rank_hand(&cards("4c 5d 6h 6s 7c 7d 8h")).unwrap();
    assert_eq!(hand.rank, HandRank::Straight);
    assert_eq!(
        hand.tiebreak_ranks(),
        [Rank::Eight, Rank::Seven, Rank::Six, Rank::Five, Rank::Four]
    );

    let mask = mask_of(&cards("4c 5d 6h 6s 7c 7d 8h"));
    assert_eq!(detect_straight(mask), Some(Rank::Eight));
}

#[test]
fn kickers_break_ties() {
    assert_eq!(
        ranks("Kc Kd 8h 6s 2c 4d 9h"),
        vec![Rank::King, Rank::King, Rank::Nine, Rank::Eight, Rank::Six]
    );

    let better = rank_hand(&cards("Kc Kd Ah 6s 2c 4d 9h")).unwrap();
    let worse = rank_hand(&cards("Ks Kh Qh 6d 2d 4c 9c")).unwrap();
    assert!(better.beats(&worse));

    // Третья пара — кандидат в кикер.
    assert_eq!(
        ranks("Ac Ad 8h 8s 5c 5d 2h"),
        vec![Rank::Ace, Rank::Ace, Rank::Eight, Rank::Eight, Rank::Five]
    );
}

#[test]
fn full_house_from_two_trips() {
    let hand = rank_hand(&cards("9c 9d 9h 4s 4c 4d Ah")).unwrap();
    assert_eq!(hand.rank, HandRank::FullHouse);
    assert_eq!(
        hand.tiebreak_ranks(),
        [Rank::Nine, Rank::Nine, Rank::Nine, Rank::Four, Rank::Four]
    );
}

#[test]
fn same_strength_different_suits_ties() {
    let a = rank_hand(&cards("Ac Kd 8h 6s 2c 4d 9h")).unwrap();
    let b = rank_hand(&cards("Ad Kc 8s 6h 2d 4c 9c")).unwrap();
    assert!(a.ties(&b));
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn five_and_six_card_inputs_work() {
    assert_eq!(rank_of("2c 3d 4h 5s 6c"), HandRank::Straight);
    assert_eq!(rank_of("2c 2d 4h 5s 6c Kd"), HandRank::OnePair);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        rank_hand(&cards("2c 3d 4h 5s")),
        Err(EvalError::InvalidCardCount(4))
    );
    assert_eq!(
        rank_hand(&cards("2c 3d 4h 5s 6c 7d 8h 9s")),
        Err(EvalError::InvalidCardCount(8))
    );
    assert_eq!(
        rank_hand(&cards("2c 2c 4h 5s 6c")),
        Err(EvalError::DuplicateCard(c(Rank::Two, Suit::Clubs)))
    );
}
