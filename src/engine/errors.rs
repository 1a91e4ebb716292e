use crate::domain::{Chips, ChipsError, PlayerError, PlayerId, TableError};
use crate::engine::round::RoundState;
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки движка покера.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недостаточно активных игроков для раунда: {0}")]
    InsufficientPlayers(usize),

    #[error("Рейз {amount} меньше текущего колла {last_call}")]
    InvalidRaise { amount: Chips, last_call: Chips },

    /// Банк, на который никто не может претендовать.
    #[error("Банк {0} некому отдать")]
    UnclaimedPot(usize),

    #[error("Нет игрока, от которого ждём действие")]
    NoPendingAction,

    #[error("Операция недопустима в состоянии {0:?}")]
    OutOfOrder(RoundState),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Игрок {0} слишком долго присылает некорректные действия")]
    TooManyRejections(PlayerId),

    /// Фишки появились или исчезли — раунд прерывается.
    #[error("Нарушено сохранение фишек: ожидалось {expected}, найдено {found}")]
    ChipConservation { expected: Chips, found: Chips },

    #[error(transparent)]
    Chips(#[from] ChipsError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    HandEvaluation(#[from] EvalError),
}
