use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, PlayerId, Street};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    /// Уравнять `last_call` (если уравнивать нечего — это check).
    Call,
    /// Довести свою ставку на улице до указанной суммы (не меньше `last_call`).
    Raise(Chips),
}

/// Что видит игрок, когда от него ждут решения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnContext {
    pub player_id: PlayerId,
    pub street: Street,
    pub stack: Chips,
    pub current_bet: Chips,
    pub last_call: Chips,
    /// Сколько нужно доплатить до колла.
    pub to_call: Chips,
    /// Банки + ставки на текущей улице.
    pub pot_total: Chips,
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    /// Предыдущее действие этого хода, которое было отклонено.
    pub rejected: Option<PlayerActionKind>,
}

/// Внешний источник решений (UI, CLI, бот, тест).
///
/// Раунд вызывает его на каждом ходу и применяет ответ; некорректный рейз
/// отклоняется и у того же игрока запрашивается новое решение.
pub trait ActionSource {
    fn decide(&mut self, turn: &TurnContext) -> PlayerActionKind;
}

impl<F> ActionSource for F
where
    F: FnMut(&TurnContext) -> PlayerActionKind,
{
    fn decide(&mut self, turn: &TurnContext) -> PlayerActionKind {
        self(turn)
    }
}
