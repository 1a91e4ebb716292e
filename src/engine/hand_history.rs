use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{RankedHand, Street};
use crate::domain::{PlayerId, RoundId};
use crate::engine::actions::PlayerActionKind;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новый раунд начался.
    RoundStarted {
        round_id: RoundId,
        dealer: PlayerId,
        players: Vec<PlayerId>,
    },

    /// Игрок пропускает раунд (мало фишек и нет докупки).
    PlayerSatOut { player_id: PlayerId, stack: Chips },

    /// Игроку докупили стек перед раундом.
    StackToppedUp { player_id: PlayerId, stack: Chips },

    /// Блайнды (фактически поставленные суммы, с учётом all-in).
    BlindsPosted {
        small_blind: (PlayerId, Chips),
        big_blind: (PlayerId, Chips),
    },

    /// Игрок получил карманную карту (закрытую).
    HoleCardDealt { player_id: PlayerId },

    /// Карта ушла в сброс.
    CardBurned,

    /// Открыты общие карты на борде (весь борд после открытия).
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        action: PlayerActionKind,
        committed: Chips,
        new_stack: Chips,
        all_in: bool,
    },

    /// Ставки улицы собраны в банк.
    BetsCollected { pot_index: usize, amount: Chips },

    /// Банк закрыт all-in'ом этих игроков.
    PotCapped {
        pot_index: usize,
        players: Vec<PlayerId>,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        hand: RankedHand,
    },

    /// Выплата из банка.
    PotAwarded {
        pot_index: usize,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раунд прерван, вклады возвращены.
    RoundAbandoned,

    /// Раунд завершён.
    RoundFinished { round_id: RoundId },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &HandEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}
