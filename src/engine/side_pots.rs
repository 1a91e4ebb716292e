use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Ставка одной позиции на закрывающейся улице.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreetBet {
    pub amount: Chips,
    pub all_in: bool,
    /// Сфолдившие фишки остаются в банке, но на банк не претендуют.
    pub folded: bool,
}

impl StreetBet {
    pub fn live(amount: Chips) -> Self {
        Self {
            amount,
            all_in: false,
            folded: false,
        }
    }

    pub fn all_in(amount: Chips) -> Self {
        Self {
            amount,
            all_in: true,
            folded: false,
        }
    }

    pub fn folded(amount: Chips) -> Self {
        Self {
            amount,
            all_in: false,
            folded: true,
        }
    }
}

/// Слой банка: фишки, собранные до очередного уровня all-in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLayer {
    pub amount: Chips,
    /// Позиции, внёсшие фишки в этот слой.
    pub contributors: Vec<usize>,
    /// Позиции, чей all-in закончился на этом слое: дальше они не претендуют.
    pub capped: Vec<usize>,
}

/// Разложить ставки улицы на слои.
///
/// Уровни — различные суммы all-in (живых игроков), по возрастанию.
/// На каждом уровне каждый, у кого ещё осталась ставка, отдаёт
/// `уровень - предыдущий уровень` (или сколько осталось). Всё, что выше
/// последнего уровня, идёт одним слоем без ограничений.
///
/// Сумма слоёв всегда равна сумме ставок.
pub fn layer_street_bets(bets: &[StreetBet]) -> Vec<BetLayer> {
    let mut levels: Vec<Chips> = bets
        .iter()
        .filter(|b| b.all_in && !b.folded && !b.amount.is_zero())
        .map(|b| b.amount)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut remaining: Vec<Chips> = bets.iter().map(|b| b.amount).collect();
    let mut layers = Vec::with_capacity(levels.len() + 1);
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let step = level.saturating_sub(prev_level);
        let mut layer = BetLayer {
            amount: Chips::ZERO,
            contributors: Vec::new(),
            capped: Vec::new(),
        };

        for (pos, rem) in remaining.iter_mut().enumerate() {
            if rem.is_zero() {
                continue;
            }
            let take = (*rem).min(step);
            *rem = rem.saturating_sub(take);
            layer.amount += take;
            layer.contributors.push(pos);

            let bet = &bets[pos];
            if rem.is_zero() && bet.all_in && !bet.folded {
                layer.capped.push(pos);
            }
        }

        layers.push(layer);
        prev_level = level;
    }

    let rest: Vec<usize> = remaining
        .iter()
        .enumerate()
        .filter(|(_, rem)| !rem.is_zero())
        .map(|(pos, _)| pos)
        .collect();
    if !rest.is_empty() {
        layers.push(BetLayer {
            amount: rest.iter().map(|&pos| remaining[pos]).sum(),
            contributors: rest,
            capped: Vec::new(),
        });
    }

    layers
}
