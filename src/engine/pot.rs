use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банки раунда: `[0]` — основной, дальше сайд-поты.
///
/// Банк закрывается, когда в него упёрся чей-то all-in; новые фишки
/// после этого идут в следующий банк.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pots {
    amounts: Vec<Chips>,
    closed: Vec<bool>,
}

impl Default for Pots {
    fn default() -> Self {
        Self::new()
    }
}

impl Pots {
    pub fn new() -> Self {
        Self {
            amounts: vec![Chips::ZERO],
            closed: vec![false],
        }
    }

    pub fn amounts(&self) -> &[Chips] {
        &self.amounts
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }

    pub fn main(&self) -> Chips {
        self.amounts.first().copied().unwrap_or(Chips::ZERO)
    }

    pub fn total(&self) -> Chips {
        self.amounts.iter().sum()
    }

    /// Индекс банка, куда сейчас идут фишки (открывает новый, если последний закрыт).
    pub fn open_index(&mut self) -> usize {
        self.closed.resize(self.amounts.len(), false);
        match self.amounts.len().checked_sub(1) {
            Some(last) if !self.closed[last] => last,
            _ => {
                self.amounts.push(Chips::ZERO);
                self.closed.push(false);
                self.amounts.len() - 1
            }
        }
    }

    pub fn add(&mut self, index: usize, amount: Chips) {
        if let Some(pot) = self.amounts.get_mut(index) {
            *pot += amount;
        }
    }

    pub fn close(&mut self, index: usize) {
        if let Some(c) = self.closed.get_mut(index) {
            *c = true;
        }
    }

    pub fn is_closed(&self, index: usize) -> bool {
        self.closed.get(index).copied().unwrap_or(false)
    }

    /// Забрать фишки банка (при выплате).
    pub fn take(&mut self, index: usize) -> Chips {
        match self.amounts.get_mut(index) {
            Some(pot) => std::mem::take(pot),
            None => Chips::ZERO,
        }
    }
}
