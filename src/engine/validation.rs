use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок выполнить это действие при текущем `last_call`.
///
/// Ничего не меняет: отклонённое действие не трогает состояние раунда.
pub fn validate_action(
    player: &Player,
    action: &PlayerActionKind,
    last_call: Chips,
) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::IllegalAction);
    }

    match action {
        PlayerActionKind::Fold | PlayerActionKind::Call => Ok(()),
        PlayerActionKind::Raise(amount) => {
            if *amount < last_call {
                Err(EngineError::InvalidRaise {
                    amount: *amount,
                    last_call,
                })
            } else {
                Ok(())
            }
        }
    }
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn diff_to_call(player: &Player, last_call: Chips) -> Chips {
    last_call.saturating_sub(player.current_bet)
}
