use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::deck::Pile;
use crate::domain::PlayerId;

/// Ошибки операций с фишками игрока.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Недостаточно банкролла у игрока {player_id}: есть {bankroll}, нужно {requested}")]
    InsufficientBankroll {
        player_id: PlayerId,
        bankroll: Chips,
        requested: Chips,
    },
}

/// Игрок за столом.
///
/// `bankroll` и `stack` живут между раундами, а `hand`, `folded`, `all_in`,
/// `current_bet` и `last_pot_index` сбрасываются в начале каждого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Резерв вне стола.
    pub bankroll: Chips,
    /// Фишки на столе.
    pub stack: Chips,
    /// Карманные карты (0–2 в течение раунда).
    pub hand: Pile,
    /// Сидит за столом и участвует в раундах.
    pub active: bool,
    pub folded: bool,
    pub all_in: bool,
    /// Вклад на текущей улице (ещё не собран в банк).
    pub current_bet: Chips,
    /// Индекс последнего банка, на который игрок имеет право
    /// (None — игрок не упирался в all-in).
    pub last_pot_index: Option<usize>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, bankroll: Chips) -> Self {
        Self {
            id: id.into(),
            bankroll,
            stack: Chips::ZERO,
            hand: Pile::new(),
            active: true,
            folded: false,
            all_in: false,
            current_bet: Chips::ZERO,
            last_pot_index: None,
        }
    }

    pub fn with_stack(mut self, stack: Chips) -> Self {
        self.stack = stack;
        self
    }

    /// Перенести фишки из банкролла в стек.
    pub fn shift_to_stack(&mut self, amount: Chips) -> Result<(), PlayerError> {
        let rest = self
            .bankroll
            .try_sub(amount)
            .map_err(|_| PlayerError::InsufficientBankroll {
                player_id: self.id.clone(),
                bankroll: self.bankroll,
                requested: amount,
            })?;
        self.bankroll = rest;
        self.stack += amount;
        Ok(())
    }

    /// Вернуть стек в банкролл и снова выставить `amount` (не больше, чем есть).
    /// Возвращает итоговый стек.
    pub fn make_stack_of(&mut self, amount: Chips) -> Chips {
        self.bankroll += self.stack;
        self.stack.clear();
        let amount = amount.min(self.bankroll);
        // amount <= bankroll, перенос не может упасть
        self.bankroll = self.bankroll.saturating_sub(amount);
        self.stack = amount;
        self.stack
    }

    /// Довести `current_bet` до `amount`.
    ///
    /// Если стека не хватает — ставится весь стек и игрок уходит в all-in.
    /// Возвращает сколько фишек реально ушло со стека.
    pub fn bet(&mut self, amount: Chips) -> Chips {
        let mut net = amount.saturating_sub(self.current_bet);
        if net >= self.stack {
            net = self.stack;
            self.all_in = true;
        }
        self.stack = self.stack.saturating_sub(net);
        self.current_bet += net;
        net
    }

    /// Сброс состояния перед новым раундом.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.all_in = false;
        self.current_bet = Chips::ZERO;
        self.last_pot_index = None;
    }

    /// Игрок ещё претендует на банк.
    pub fn is_contender(&self) -> bool {
        self.active && !self.folded
    }

    /// Игрок может делать ставки.
    pub fn can_act(&self) -> bool {
        self.is_contender() && !self.all_in
    }

    /// Может ли игрок претендовать на банк с индексом `pot_index`.
    pub fn is_eligible_for(&self, pot_index: usize) -> bool {
        self.is_contender() && self.last_pot_index.map_or(true, |cap| pot_index <= cap)
    }

    /// Все фишки игрока: стек + банкролл.
    pub fn total_chips(&self) -> Chips {
        self.stack + self.bankroll
    }
}
