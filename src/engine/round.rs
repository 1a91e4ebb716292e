use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::deck::{Deck, Pile};
use crate::domain::hand::{HandSummary, PlayerHandResult, PotAward, RankedHand, Street};
use crate::domain::player::Player;
use crate::domain::table::{SeatIndex, Table};
use crate::domain::{PlayerId, RoundId};
use crate::engine::actions::{ActionSource, PlayerActionKind, TurnContext};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    big_blind_position, clockwise_from_dealer, cyclic_from, postflop_start, preflop_start,
    small_blind_position,
};
use crate::engine::pot::Pots;
use crate::engine::side_pots::{layer_street_bets, StreetBet};
use crate::engine::validation::{diff_to_call, validate_action};
use crate::engine::RandomSource;
use crate::eval::{rank_hand, EvalError};

/// Сколько раз подряд можно прислать некорректный рейз на одном ходу.
pub const MAX_REJECTIONS_PER_TURN: usize = 64;

/// Состояние раунда. Переходы — только явными вызовами методов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundState {
    Dealing,
    PreflopBetting,
    Flop,
    FlopBetting,
    Turn,
    TurnBetting,
    River,
    RiverBetting,
    Showdown,
    Settled,
}

impl RoundState {
    pub fn is_betting(self) -> bool {
        matches!(
            self,
            RoundState::PreflopBetting
                | RoundState::FlopBetting
                | RoundState::TurnBetting
                | RoundState::RiverBetting
        )
    }

    pub fn street(self) -> Street {
        match self {
            RoundState::Dealing | RoundState::PreflopBetting | RoundState::Flop => Street::Preflop,
            RoundState::FlopBetting | RoundState::Turn => Street::Flop,
            RoundState::TurnBetting | RoundState::River => Street::Turn,
            RoundState::RiverBetting => Street::River,
            RoundState::Showdown | RoundState::Settled => Street::Showdown,
        }
    }
}

/// Результат шага ставок.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreetStatus {
    /// Ждём действие этого игрока.
    AwaitingAction(PlayerId),
    /// Улица закрыта, ставки собраны в банки.
    StreetClosed,
    /// Остался один претендент — дальше только шоудаун без вскрытия.
    RoundOver,
}

/// Новая перемешанная колода на 52 карты.
pub fn new_shuffled_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    deck
}

/// Один раунд (раздача) за столом.
///
/// Раунд заимствует стол на всё время жизни и единолично владеет
/// колодой и банками. Игроки адресуются позицией от дилера:
/// `players[0]` — дилер, `players[1]` — малый блайнд.
pub struct Round<'t> {
    table: &'t mut Table,
    id: RoundId,
    deck: Deck,
    /// Места участников в порядке от дилера.
    players: Vec<SeatIndex>,
    community_cards: Pile,
    burns: Pile,
    pots: Pots,
    betting: BettingState,
    /// Ставки сфолдивших на текущей улице (остаются в банке).
    folded_bets: Vec<Chips>,
    /// Сколько всего внёс каждый участник за раунд.
    contributions: Vec<Chips>,
    state: RoundState,
    history: HandHistory,
    /// Сумма фишек участников на старте; должна сохраняться.
    expected_total: Chips,
}

impl<'t> Round<'t> {
    /// Начать раунд: отобрать активных игроков и раздать по 2 закрытые карты.
    pub fn new<R: RandomSource>(table: &'t mut Table, rng: &mut R) -> Result<Self, EngineError> {
        let id = table.round_count + 1;
        let deck = new_shuffled_deck(rng);
        let mut history = HandHistory::new();

        let players = snapshot_active_players(table, &mut history);
        if players.len() < 2 {
            return Err(EngineError::InsufficientPlayers(players.len()));
        }

        let expected_total: Chips = players
            .iter()
            .map(|&seat| table.players[seat].total_chips())
            .sum();

        history.push(HandEventKind::RoundStarted {
            round_id: id,
            dealer: table.players[players[0]].id.clone(),
            players: players
                .iter()
                .map(|&seat| table.players[seat].id.clone())
                .collect(),
        });
        log::info!(
            "round {id} started: {} players, dealer {}",
            players.len(),
            table.players[players[0]].id
        );

        let n = players.len();
        let mut round = Self {
            table,
            id,
            deck,
            players,
            community_cards: Pile::new(),
            burns: Pile::new(),
            pots: Pots::new(),
            betting: BettingState::new(Street::Preflop, Chips::ZERO),
            folded_bets: vec![Chips::ZERO; n],
            contributions: vec![Chips::ZERO; n],
            state: RoundState::Dealing,
            history,
            expected_total,
        };
        round.deal_hole_cards()?;
        Ok(round)
    }

    // ---------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// Участники раунда в порядке от дилера.
    pub fn players(&self) -> Vec<&Player> {
        self.players
            .iter()
            .map(|&seat| &self.table.players[seat])
            .collect()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players().into_iter().map(|p| p.id.clone()).collect()
    }

    pub fn community_cards(&self) -> &Pile {
        &self.community_cards
    }

    pub fn burns(&self) -> &Pile {
        &self.burns
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn pots(&self) -> &[Chips] {
        self.pots.amounts()
    }

    pub fn last_call(&self) -> Chips {
        self.betting.last_call
    }

    pub fn contributions(&self) -> &[Chips] {
        &self.contributions
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Чей сейчас ход.
    pub fn current_actor(&self) -> Option<&str> {
        if !self.state.is_betting() {
            return None;
        }
        self.betting
            .current()
            .map(|pos| self.player(pos).id.as_str())
    }

    /// Фишки в игре: банки + ставки текущей улицы.
    pub fn pot_total(&self) -> Chips {
        let in_flight: Chips = (0..self.players.len())
            .map(|pos| self.player(pos).current_bet + self.folded_bets[pos])
            .sum();
        self.pots.total() + in_flight
    }

    /// Стеки + банкроллы участников + все банки + ставки в полёте.
    pub fn total_chips(&self) -> Chips {
        let players: Chips = (0..self.players.len())
            .map(|pos| self.player(pos).total_chips())
            .sum();
        players + self.pot_total()
    }

    /// Стартовая позиция ставок по умолчанию для текущей улицы.
    pub fn default_start(&self) -> usize {
        let n = self.players.len();
        if self.state == RoundState::PreflopBetting {
            preflop_start(n)
        } else {
            postflop_start(n)
        }
    }

    /// Что видит текущий игрок.
    pub fn turn_context(&self) -> Result<TurnContext, EngineError> {
        let pos = self.pending_position()?;
        let p = self.player(pos);
        Ok(TurnContext {
            player_id: p.id.clone(),
            street: self.betting.street,
            stack: p.stack,
            current_bet: p.current_bet,
            last_call: self.betting.last_call,
            to_call: diff_to_call(p, self.betting.last_call),
            pot_total: self.pot_total(),
            hole_cards: p.hand.cards(),
            community_cards: self.community_cards.face_up_cards(),
            rejected: None,
        })
    }

    // ---------------------------------------------------------------
    // Переходы состояния
    // ---------------------------------------------------------------

    /// Малый блайнд = blind_amount, большой = 2 * blind_amount.
    /// Короткий стек ставит сколько есть (all-in).
    pub fn post_blinds(&mut self) -> Result<(), EngineError> {
        self.expect_state(RoundState::Dealing)?;

        let n = self.players.len();
        let blind = self.table.blind_amount;
        let (sb_pos, bb_pos) = (small_blind_position(n), big_blind_position(n));

        let sb = self.commit(sb_pos, blind);
        let bb = self.commit(bb_pos, blind * 2);
        let last_call = self.player(sb_pos).current_bet.max(self.player(bb_pos).current_bet);

        self.betting = BettingState::new(Street::Preflop, last_call);

        let event = HandEventKind::BlindsPosted {
            small_blind: (self.player(sb_pos).id.clone(), sb),
            big_blind: (self.player(bb_pos).id.clone(), bb),
        };
        self.history.push(event);
        log::debug!("round {}: blinds posted {sb} / {bb}", self.id);

        self.state = RoundState::PreflopBetting;
        self.check_conservation()
    }

    /// Открыть очередь ставок на текущей улице, начиная с позиции `start`.
    ///
    /// Если на улице уже были действия, очередь не пересобирается.
    pub fn begin_betting(&mut self, start: usize) -> Result<StreetStatus, EngineError> {
        if !self.state.is_betting() {
            return Err(EngineError::OutOfOrder(self.state));
        }
        if self.betting.actions_taken > 0 {
            return self.status();
        }

        let n = self.players.len();
        let mut to_act: Vec<usize> = cyclic_from(n, start)
            .filter(|&pos| self.player(pos).can_act())
            .collect();
        if self.nobody_to_bet_against() {
            to_act.clear();
        }

        self.betting.to_act = to_act;
        self.status()
    }

    /// Применить решение текущего игрока.
    ///
    /// `InvalidRaise` и другие ошибки валидации не меняют состояние.
    pub fn apply(&mut self, kind: PlayerActionKind) -> Result<StreetStatus, EngineError> {
        if !self.state.is_betting() {
            return Err(EngineError::OutOfOrder(self.state));
        }
        let pos = self.pending_position()?;
        let last_call = self.betting.last_call;
        validate_action(self.player(pos), &kind, last_call)?;

        let committed = match kind {
            PlayerActionKind::Fold => {
                let p = self.player_mut(pos);
                p.folded = true;
                let bet = std::mem::take(&mut p.current_bet);
                self.folded_bets[pos] += bet;
                Chips::ZERO
            }
            PlayerActionKind::Call => self.commit(pos, last_call),
            PlayerActionKind::Raise(amount) => {
                let committed = self.commit(pos, amount);
                let new_bet = self.player(pos).current_bet;
                if new_bet > last_call {
                    let queue = self.queue_after(pos);
                    self.betting.on_raise(new_bet, queue);
                }
                committed
            }
        };
        self.betting.mark_acted(pos);

        let p = self.player(pos);
        log::debug!(
            "round {}: {} {:?} (+{}), stack {}",
            self.id,
            p.id,
            kind,
            committed,
            p.stack
        );
        let event = HandEventKind::PlayerActed {
            player_id: p.id.clone(),
            action: kind,
            committed,
            new_stack: p.stack,
            all_in: p.all_in,
        };
        self.history.push(event);
        self.check_conservation()?;

        if self.nobody_to_bet_against() {
            self.betting.to_act.clear();
        }
        self.status()
    }

    /// Прогнать улицу ставок целиком, спрашивая решения у `source`.
    ///
    /// Некорректный рейз отклоняется и тот же игрок спрашивается снова.
    pub fn betting_round<S: ActionSource + ?Sized>(
        &mut self,
        start: usize,
        source: &mut S,
    ) -> Result<StreetStatus, EngineError> {
        let mut status = self.begin_betting(start)?;

        while let StreetStatus::AwaitingAction(player_id) = status {
            let mut turn = self.turn_context()?;
            let mut rejections = 0;
            status = loop {
                let kind = source.decide(&turn);
                match self.apply(kind) {
                    Err(EngineError::InvalidRaise { amount, last_call }) => {
                        rejections += 1;
                        log::debug!(
                            "round {}: {player_id} raise {amount} < {last_call}, asking again",
                            self.id
                        );
                        if rejections >= MAX_REJECTIONS_PER_TURN {
                            return Err(EngineError::TooManyRejections(player_id));
                        }
                        turn.rejected = Some(kind);
                    }
                    other => break other?,
                }
            };
        }

        Ok(status)
    }

    /// Сжечь карту и открыть флоп (3 карты).
    pub fn open_flop(&mut self) -> Result<(), EngineError> {
        self.open_board(RoundState::Flop, 3, Street::Flop, RoundState::FlopBetting)
    }

    /// Сжечь карту и открыть тёрн.
    pub fn open_turn(&mut self) -> Result<(), EngineError> {
        self.open_board(RoundState::Turn, 1, Street::Turn, RoundState::TurnBetting)
    }

    /// Сжечь карту и открыть ривер.
    pub fn open_river(&mut self) -> Result<(), EngineError> {
        self.open_board(RoundState::River, 1, Street::River, RoundState::RiverBetting)
    }

    /// Вскрытие и выплата всех банков.
    ///
    /// Банк получает лучшая рука среди тех, кто на него претендует;
    /// при равенстве банк делится поровну, лишние фишки раздаются по одной
    /// по часовой стрелке от дилера.
    pub fn showdown(&mut self) -> Result<HandSummary, EngineError> {
        self.expect_state(RoundState::Showdown)?;

        let n = self.players.len();
        let contenders: Vec<usize> = (0..n)
            .filter(|&pos| self.player(pos).is_contender())
            .collect();

        let mut hands: Vec<Option<RankedHand>> = vec![None; n];
        if contenders.len() > 1 {
            for &pos in &contenders {
                let seat = self.players[pos];
                let p = &mut self.table.players[seat];
                p.hand.reveal();
                let cards = self.community_cards.concat(&p.hand).cards();
                let hand = rank_hand(&cards)?;
                hands[pos] = Some(hand);
                self.history.push(HandEventKind::ShowdownReveal {
                    player_id: p.id.clone(),
                    hole_cards: p.hand.cards(),
                    hand,
                });
                log::debug!("round {}: {} shows {}", self.id, p.id, hand);
            }
        }

        let pots_before = self.pots.amounts().to_vec();

        // Претенденты на каждый банк. Игрок, упёршийся в all-in раньше,
        // на поздние банки не претендует ни при каких условиях.
        let mut claims = Vec::with_capacity(pots_before.len());
        for (idx, amount) in pots_before.iter().enumerate() {
            let eligible: Vec<usize> = contenders
                .iter()
                .copied()
                .filter(|&pos| self.player(pos).is_eligible_for(idx))
                .collect();
            if eligible.is_empty() && !amount.is_zero() {
                log::error!("round {}: pot {idx} ({amount}) has no eligible player", self.id);
                return Err(EngineError::UnclaimedPot(idx));
            }
            claims.push(eligible);
        }

        let mut won = vec![Chips::ZERO; n];
        let mut awards = Vec::new();

        for (idx, eligible) in claims.iter().enumerate() {
            let amount = self.pots.take(idx);
            if amount.is_zero() {
                continue;
            }

            let winners = best_hands(eligible, &hands)?;
            let mut award = PotAward {
                pot_index: idx,
                amount,
                winners: Vec::with_capacity(winners.len()),
            };
            for (pos, share) in split_pot(amount, &winners, n) {
                let p = self.player_mut(pos);
                p.stack += share;
                let player_id = p.id.clone();
                won[pos] += share;
                self.history.push(HandEventKind::PotAwarded {
                    pot_index: idx,
                    player_id: player_id.clone(),
                    amount: share,
                });
                award.winners.push((player_id, share));
            }
            awards.push(award);
        }

        let street_reached = if contenders.len() > 1 {
            Street::Showdown
        } else {
            self.board_street()
        };

        let results = (0..n)
            .map(|pos| PlayerHandResult {
                player_id: self.player(pos).id.clone(),
                hand: hands[pos],
                contributed: self.contributions[pos],
                won: won[pos],
                is_winner: !won[pos].is_zero(),
            })
            .collect();

        self.finish_round();
        self.check_conservation()?;

        Ok(HandSummary {
            round_id: self.id,
            street_reached,
            board: self.community_cards.cards(),
            total_pot: pots_before.iter().sum(),
            pots: pots_before,
            awards,
            results,
        })
    }

    /// Прервать раунд: вернуть каждому всё, что он внёс.
    pub fn abandon(&mut self) -> Result<(), EngineError> {
        if self.state == RoundState::Settled {
            return Err(EngineError::OutOfOrder(self.state));
        }

        for pos in 0..self.players.len() {
            let refund = std::mem::take(&mut self.contributions[pos]);
            self.folded_bets[pos] = Chips::ZERO;
            let p = self.player_mut(pos);
            p.current_bet = Chips::ZERO;
            p.stack += refund;
        }
        self.pots = Pots::new();
        self.betting.to_act.clear();

        self.history.push(HandEventKind::RoundAbandoned);
        log::info!("round {} abandoned, contributions refunded", self.id);

        self.finish_round();
        self.check_conservation()
    }

    /// Сыграть раунд до конца, спрашивая решения у `source`.
    pub fn play<S: ActionSource + ?Sized>(&mut self, source: &mut S) -> Result<HandSummary, EngineError> {
        if self.state == RoundState::Dealing {
            self.post_blinds()?;
        }
        loop {
            match self.state {
                RoundState::PreflopBetting
                | RoundState::FlopBetting
                | RoundState::TurnBetting
                | RoundState::RiverBetting => {
                    let start = self.default_start();
                    self.betting_round(start, source)?;
                }
                RoundState::Flop => self.open_flop()?,
                RoundState::Turn => self.open_turn()?,
                RoundState::River => self.open_river()?,
                RoundState::Showdown => return self.showdown(),
                RoundState::Dealing | RoundState::Settled => {
                    return Err(EngineError::OutOfOrder(self.state))
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------

    fn player(&self, pos: usize) -> &Player {
        &self.table.players[self.players[pos]]
    }

    fn player_mut(&mut self, pos: usize) -> &mut Player {
        &mut self.table.players[self.players[pos]]
    }

    fn expect_state(&self, expected: RoundState) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::OutOfOrder(self.state))
        }
    }

    fn pending_position(&self) -> Result<usize, EngineError> {
        self.betting.current().ok_or(EngineError::NoPendingAction)
    }

    fn contender_count(&self) -> usize {
        (0..self.players.len())
            .filter(|&pos| self.player(pos).is_contender())
            .count()
    }

    /// Поставить до `amount` (с all-in cap) и учесть вклад.
    fn commit(&mut self, pos: usize, amount: Chips) -> Chips {
        let net = self.player_mut(pos).bet(amount);
        self.contributions[pos] += net;
        net
    }

    /// Очередь после рейза: все, кто может ставить, по кругу после рейзера.
    fn queue_after(&self, raiser: usize) -> Vec<usize> {
        let n = self.players.len();
        cyclic_from(n, raiser + 1)
            .filter(|&pos| pos != raiser && self.player(pos).can_act())
            .collect()
    }

    /// Текущий статус; пустая очередь закрывает улицу.
    fn status(&mut self) -> Result<StreetStatus, EngineError> {
        if self.betting.is_round_complete() {
            return self.close_street();
        }
        let pos = self.pending_position()?;
        Ok(StreetStatus::AwaitingAction(self.player(pos).id.clone()))
    }

    /// Спорить некому: остался один претендент, либо ходить может меньше
    /// двух игроков и никто из них не должен доплачивать (all-in ран-аут).
    fn nobody_to_bet_against(&self) -> bool {
        if self.contender_count() < 2 {
            return true;
        }
        let actors: Vec<&Player> = (0..self.players.len())
            .map(|pos| self.player(pos))
            .filter(|p| p.can_act())
            .collect();
        let owes = actors
            .iter()
            .any(|p| p.current_bet < self.betting.last_call);
        actors.len() < 2 && !owes
    }

    /// Собрать ставки улицы в банки и перейти к следующему состоянию.
    fn close_street(&mut self) -> Result<StreetStatus, EngineError> {
        self.collect_bets();
        self.check_conservation()?;

        if self.contender_count() < 2 {
            self.state = RoundState::Showdown;
            return Ok(StreetStatus::RoundOver);
        }

        self.state = match self.state {
            RoundState::PreflopBetting => RoundState::Flop,
            RoundState::FlopBetting => RoundState::Turn,
            RoundState::TurnBetting => RoundState::River,
            RoundState::RiverBetting => RoundState::Showdown,
            other => return Err(EngineError::OutOfOrder(other)),
        };
        Ok(StreetStatus::StreetClosed)
    }

    /// Разложить ставки улицы по слоям all-in и положить их в банки.
    fn collect_bets(&mut self) {
        let n = self.players.len();
        let bets: Vec<StreetBet> = (0..n)
            .map(|pos| {
                let p = self.player(pos);
                StreetBet {
                    amount: p.current_bet + self.folded_bets[pos],
                    all_in: p.all_in,
                    folded: p.folded,
                }
            })
            .collect();

        for layer in layer_street_bets(&bets) {
            let idx = self.pots.open_index();
            self.pots.add(idx, layer.amount);
            self.history.push(HandEventKind::BetsCollected {
                pot_index: idx,
                amount: layer.amount,
            });

            if !layer.capped.is_empty() {
                self.pots.close(idx);
                let mut capped_ids = Vec::with_capacity(layer.capped.len());
                for &pos in &layer.capped {
                    let p = self.player_mut(pos);
                    p.last_pot_index = Some(idx);
                    capped_ids.push(p.id.clone());
                }
                log::debug!("round {}: pot {idx} capped by {capped_ids:?}", self.id);
                self.history.push(HandEventKind::PotCapped {
                    pot_index: idx,
                    players: capped_ids,
                });
            }
        }

        for pos in 0..n {
            self.folded_bets[pos] = Chips::ZERO;
            self.player_mut(pos).current_bet = Chips::ZERO;
        }
        self.betting.last_call = Chips::ZERO;
        self.betting.to_act.clear();
    }

    /// Раздача по одной карте по кругу, два прохода, начиная с дилера.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        for _pass in 0..2 {
            for &seat in &self.players {
                let p = &mut self.table.players[seat];
                self.deck
                    .deal(&mut p.hand, false)
                    .ok_or(EngineError::DeckExhausted)?;
                self.history.push(HandEventKind::HoleCardDealt {
                    player_id: p.id.clone(),
                });
            }
        }
        Ok(())
    }

    fn burn_card(&mut self) -> Result<(), EngineError> {
        self.deck
            .deal(&mut self.burns, false)
            .ok_or(EngineError::DeckExhausted)?;
        self.history.push(HandEventKind::CardBurned);
        Ok(())
    }

    fn open_board(
        &mut self,
        expected: RoundState,
        count: usize,
        street: Street,
        next: RoundState,
    ) -> Result<(), EngineError> {
        self.expect_state(expected)?;
        self.burn_card()?;
        for _ in 0..count {
            self.deck
                .deal(&mut self.community_cards, true)
                .ok_or(EngineError::DeckExhausted)?;
        }

        let cards = self.community_cards.cards();
        log::debug!(
            "round {}: {street:?} {}",
            self.id,
            cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );
        self.history.push(HandEventKind::BoardDealt { street, cards });

        self.betting = BettingState::new(street, Chips::ZERO);
        self.state = next;
        Ok(())
    }

    fn board_street(&self) -> Street {
        match self.community_cards.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    fn finish_round(&mut self) {
        self.state = RoundState::Settled;
        self.table.round_count += 1;
        self.table.advance_button();
        self.history.push(HandEventKind::RoundFinished { round_id: self.id });
        log::info!("round {} settled", self.id);
    }

    /// Фишки не должны появляться и исчезать. Нарушение — фатально для раунда.
    fn check_conservation(&self) -> Result<(), EngineError> {
        let found = self.total_chips();
        if found != self.expected_total {
            log::error!(
                "round {}: chip conservation violated, expected {}, found {}",
                self.id,
                self.expected_total,
                found
            );
            return Err(EngineError::ChipConservation {
                expected: self.expected_total,
                found,
            });
        }
        Ok(())
    }
}

/// Отобрать игроков на раунд (от дилера по кругу).
///
/// Низкий стек (`<= low_chips_amount`) либо докупается до max_buyin
/// (если стол разрешает и хватает на min_buyin), либо игрок пропускает раунд.
fn snapshot_active_players(table: &mut Table, history: &mut HandHistory) -> Vec<SeatIndex> {
    let (min_buyin, max_buyin, low) = (table.min_buyin, table.max_buyin, table.low_chips_amount);
    let (auto_top_up, auto_buyin) = (table.auto_top_up, table.auto_buyin_atmax);

    let order = table.seating_order();
    let mut active = Vec::with_capacity(order.len());

    for seat in order {
        let p = &mut table.players[seat];
        p.reset_for_round();
        if !p.active {
            continue;
        }

        if auto_top_up && p.stack < max_buyin {
            let target = max_buyin.min(p.total_chips());
            if target > p.stack {
                p.make_stack_of(target);
                history.push(HandEventKind::StackToppedUp {
                    player_id: p.id.clone(),
                    stack: p.stack,
                });
            }
        }

        if p.stack <= low && auto_buyin && p.total_chips() >= min_buyin {
            p.make_stack_of(max_buyin.min(p.total_chips()));
            history.push(HandEventKind::StackToppedUp {
                player_id: p.id.clone(),
                stack: p.stack,
            });
        }

        if p.stack <= low {
            p.active = false;
            log::debug!("{} sits out with {}", p.id, p.stack);
            history.push(HandEventKind::PlayerSatOut {
                player_id: p.id.clone(),
                stack: p.stack,
            });
            continue;
        }

        active.push(seat);
    }

    active
}

/// Позиции с лучшей рукой среди `eligible`.
fn best_hands(eligible: &[usize], hands: &[Option<RankedHand>]) -> Result<Vec<usize>, EngineError> {
    if eligible.len() == 1 {
        return Ok(eligible.to_vec());
    }

    let mut best: Option<RankedHand> = None;
    let mut winners = Vec::new();
    for &pos in eligible {
        let hand = hands[pos].ok_or_else(|| {
            EvalError::HandEvaluationInternal(format!("нет оценённой руки для позиции {pos}"))
        })?;
        match best.map(|b| hand.compare(&b)) {
            None | Some(Ordering::Greater) => {
                best = Some(hand);
                winners.clear();
                winners.push(pos);
            }
            Some(Ordering::Equal) => winners.push(pos),
            Some(Ordering::Less) => {}
        }
    }
    Ok(winners)
}

/// Поделить банк между победителями; остаток — по фишке по часовой от дилера.
fn split_pot(amount: Chips, winners: &[usize], n: usize) -> Vec<(usize, Chips)> {
    let (share, remainder) = amount.split(winners.len() as u64);
    let mut extra = remainder.amount();

    clockwise_from_dealer(n)
        .filter(|pos| winners.contains(pos))
        .map(|pos| {
            let mut prize = share;
            if extra > 0 {
                prize += Chips(1);
                extra -= 1;
            }
            (pos, prize)
        })
        .collect()
}
