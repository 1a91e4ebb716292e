use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Индекс места за столом (позиция в `Table::players`).
pub type SeatIndex = usize;

/// Рекомендуемый лимит мест.
pub const DEFAULT_SIZE_LIMIT: usize = 10;
/// Жёсткий лимит: 22 * 2 карманные + 5 борд + 3 сброса = 52.
pub const MAX_SIZE_LIMIT: usize = 22;
/// min_buyin = 10 * blind по умолчанию.
pub const DEFAULT_BLIND_TO_MIN_BUYIN: u64 = 10;
/// max_buyin = 50 * blind по умолчанию.
pub const DEFAULT_BLIND_TO_MAX_BUYIN: u64 = 50;

/// Ошибки создания стола и работы с игроками.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Стол переполнен: {players} игроков при лимите {limit}")]
    TableFull { players: usize, limit: usize },

    #[error("Недопустимый лимит мест {0} (максимум {MAX_SIZE_LIMIT})")]
    InvalidSizeLimit(usize),

    #[error("min_buyin ({min}) больше max_buyin ({max})")]
    InvalidBuyinRange { min: Chips, max: Chips },

    #[error("Игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("Игрок {0} уже сидит за столом")]
    DuplicatePlayer(PlayerId),

    #[error("Нельзя создать стол без игроков")]
    NoPlayers,

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(String),
}

/// Правила стола. Всё, кроме блайнда, можно не указывать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Малый блайнд; большой = 2 * blind_amount.
    pub blind_amount: Chips,
    pub min_buyin: Option<Chips>,
    pub max_buyin: Option<Chips>,
    /// Порог стека, ниже (или равно) которого игрок докупается или пропускает раунд.
    pub low_chips_amount: Option<Chips>,
    pub size_limit: Option<usize>,
    /// Кто сидит на кнопке в первом раунде (по умолчанию первый игрок).
    pub initial_dealer_id: Option<PlayerId>,
    /// Перед каждым раундом доводить стек до max_buyin.
    pub auto_top_up: bool,
    /// При низком стеке автоматически докупаться до max_buyin.
    pub auto_buyin_atmax: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            blind_amount: Chips(10),
            min_buyin: None,
            max_buyin: None,
            low_chips_amount: None,
            size_limit: None,
            initial_dealer_id: None,
            auto_top_up: false,
            auto_buyin_atmax: false,
        }
    }
}

impl TableConfig {
    pub fn with_blind(blind_amount: Chips) -> Self {
        Self {
            blind_amount,
            ..Self::default()
        }
    }

    /// Прочитать правила стола из JSON; отсутствующие поля берутся по умолчанию.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(|e| TableError::InvalidConfig(e.to_string()))
    }
}

/// Стол: игроки с постоянными стеками и правила бай-ина.
///
/// Порядок мест фиксирован; кнопка дилера двигается смещением `button`,
/// сам вектор игроков никогда не переставляется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub players: Vec<Player>,
    pub player_map: HashMap<PlayerId, SeatIndex>,
    /// Место дилера в `players`.
    pub button: SeatIndex,
    pub blind_amount: Chips,
    pub min_buyin: Chips,
    pub max_buyin: Chips,
    pub low_chips_amount: Chips,
    pub size_limit: usize,
    pub auto_top_up: bool,
    pub auto_buyin_atmax: bool,
    pub round_count: u64,
}

impl Table {
    /// Посадить игроков и сразу выдать им стеки (`init_active_player_stack_forced`).
    pub fn new(players: Vec<Player>, config: TableConfig) -> Result<Self, TableError> {
        let size_limit = config.size_limit.unwrap_or(DEFAULT_SIZE_LIMIT);
        if size_limit == 0 || size_limit > MAX_SIZE_LIMIT {
            return Err(TableError::InvalidSizeLimit(size_limit));
        }

        let min_buyin = config
            .min_buyin
            .unwrap_or(config.blind_amount * DEFAULT_BLIND_TO_MIN_BUYIN);
        let max_buyin = config
            .max_buyin
            .unwrap_or(config.blind_amount * DEFAULT_BLIND_TO_MAX_BUYIN);
        if min_buyin > max_buyin {
            return Err(TableError::InvalidBuyinRange {
                min: min_buyin,
                max: max_buyin,
            });
        }

        if players.is_empty() {
            return Err(TableError::NoPlayers);
        }
        if players.len() > size_limit {
            return Err(TableError::TableFull {
                players: players.len(),
                limit: size_limit,
            });
        }

        let mut player_map = HashMap::with_capacity(players.len());
        for (seat, p) in players.iter().enumerate() {
            if player_map.insert(p.id.clone(), seat).is_some() {
                return Err(TableError::DuplicatePlayer(p.id.clone()));
            }
        }

        let button = match &config.initial_dealer_id {
            None => 0,
            Some(id) => *player_map
                .get(id)
                .ok_or_else(|| TableError::UnknownPlayer(id.clone()))?,
        };

        let mut table = Self {
            players,
            player_map,
            button,
            blind_amount: config.blind_amount,
            min_buyin,
            max_buyin,
            low_chips_amount: config.low_chips_amount.unwrap_or(Chips::ZERO),
            size_limit,
            auto_top_up: config.auto_top_up,
            auto_buyin_atmax: config.auto_buyin_atmax,
            round_count: 0,
        };
        table.init_active_player_stack_forced();

        log::info!(
            "table created: {} players, blind {}, buy-in {}..{}",
            table.players.len(),
            table.blind_amount,
            table.min_buyin,
            table.max_buyin
        );

        Ok(table)
    }

    /// Каждый игрок садится со стеком min(max_buyin, bankroll).
    pub fn init_active_player_stack_forced(&mut self) {
        let max_buyin = self.max_buyin;
        for p in self.players.iter_mut() {
            let amount = max_buyin.min(p.bankroll);
            p.make_stack_of(amount);
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn seat_of(&self, id: &str) -> Option<SeatIndex> {
        self.player_map.get(id).copied()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.seat_of(id).map(|seat| &self.players[seat])
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        let seat = self.seat_of(id)?;
        self.players.get_mut(seat)
    }

    /// Места по кругу, начиная с дилера.
    pub fn seating_order(&self) -> Vec<SeatIndex> {
        crate::engine::positions::cyclic_from(self.players.len(), self.button).collect()
    }

    pub fn dealer(&self) -> &Player {
        &self.players[self.button]
    }

    /// Кнопка переходит к следующему месту по кругу.
    pub fn advance_button(&mut self) {
        if !self.players.is_empty() {
            self.button = (self.button + 1) % self.players.len();
        }
    }

    /// Вернуть пропускавшего игрока в игру. Стек проверится в начале раунда.
    pub fn sit_in(&mut self, id: &str) -> Result<(), TableError> {
        let p = self
            .player_mut(id)
            .ok_or_else(|| TableError::UnknownPlayer(id.to_string()))?;
        p.active = true;
        Ok(())
    }

    pub fn big_blind(&self) -> Chips {
        self.blind_amount * 2
    }

    /// Все фишки игроков стола (стеки + банкроллы).
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(Player::total_chips).sum()
    }
}
