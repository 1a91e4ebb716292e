//! Движок раунда: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `Round`
//! Основные операции:
//!   - `Round::new` – снимок активных игроков и раздача карманных карт
//!   - `post_blinds` / `betting_round` / `open_flop` / `open_turn` / `open_river`
//!   - `showdown` – вскрытие и выплата банков
//!   - `play` – весь раунд целиком с внешним `ActionSource`

pub mod actions;
pub mod betting;
pub mod errors;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod round;
pub mod side_pots;
pub mod validation;

pub use actions::{ActionSource, PlayerActionKind, TurnContext};
pub use errors::EngineError;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pots;
pub use round::{new_shuffled_deck, Round, RoundState, StreetStatus};
pub use side_pots::{layer_street_bets, BetLayer, StreetBet};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
