use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;

/// Состояние раунда ставок (на конкретной улице).
///
/// Позиции — индексы игроков раунда (0 = дилер).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая целевая ставка, до которой должны дотянуться игроки (`last_call`).
    pub last_call: Chips,
    /// Улица, к которой относится этот раунд.
    pub street: Street,
    /// Очередь ходящих (по кругу), кто ещё должен сделать действие на этой улице.
    pub to_act: Vec<usize>,
    /// Сколько действий уже применено на улице.
    pub actions_taken: usize,
}

impl BettingState {
    pub fn new(street: Street, last_call: Chips) -> Self {
        Self {
            last_call,
            street,
            to_act: Vec::new(),
            actions_taken: 0,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.to_act.first().copied()
    }

    /// Удалить позицию из очереди to_act, если она там есть.
    pub fn mark_acted(&mut self, pos: usize) {
        self.to_act.retain(|p| *p != pos);
        self.actions_taken += 1;
    }

    /// Обновить состояние после рейза:
    /// новая цель, очередь формирует engine.
    pub fn on_raise(&mut self, new_call: Chips, new_to_act: Vec<usize>) {
        self.last_call = new_call;
        self.to_act = new_to_act;
    }

    /// Раунд ставок завершён, когда очередь пуста.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
