use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, RoundId};

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// Категория руки. Меньшее значение = более сильная рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandRank {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOfAKind = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOfAKind = 7,
    TwoPair = 8,
    OnePair = 9,
    HighCard = 10,
}

/// Лучшая 5-карточная рука: категория + карты для тай-брейка
/// (от старшей значимой к младшей).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHand {
    pub rank: HandRank,
    pub cards: [Card; 5],
}

/// Выплата одного банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    /// 0 — основной банк, дальше сайд-поты.
    pub pot_index: usize,
    pub amount: Chips,
    /// Кто и сколько получил из этого банка.
    pub winners: Vec<(PlayerId, Chips)>,
}

/// Результат конкретного игрока в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub player_id: PlayerId,
    /// Итоговая рука (если дошёл до шоудауна и вскрылся).
    pub hand: Option<RankedHand>,
    /// Сколько всего внёс в банки за раунд.
    pub contributed: Chips,
    /// Сколько выиграл из банков.
    pub won: Chips,
    /// Является ли игрок победителем (включая сплит).
    pub is_winner: bool,
}

/// Краткое описание завершённого раунда. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub round_id: RoundId,
    pub street_reached: Street,
    pub board: Vec<Card>,
    /// Банки в порядке main → side1 → side2 …
    pub pots: Vec<Chips>,
    pub total_pot: Chips,
    pub awards: Vec<PotAward>,
    /// В порядке мест, начиная с дилера.
    pub results: Vec<PlayerHandResult>,
}
