//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основная функция:
//!   `rank_hand(cards) -> RankedHand` (категория + 5 карт тай-брейка)

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{compare_hands, rank_hand, EvalError};
