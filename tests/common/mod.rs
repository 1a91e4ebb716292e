//! Общие утилиты для интеграционных тестов.

#![allow(dead_code)]

use holdem_table::domain::{parse_cards, Card, Chips, Player, Rank, Suit, Table, TableConfig};
use holdem_table::engine::RandomSource;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Короткая запись карты: c(Rank::Ace, Suit::Spades).
pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Карты из строки вида "As Kd 7h".
pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card list")
}

/// Игроки p0..p{n-1} с одинаковым банкроллом.
pub fn players(n: usize, bankroll: u64) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{i}"), Chips(bankroll)))
        .collect()
}

/// Стол с блайндом 10 (buy-in 100..500).
pub fn table(n: usize, bankroll: u64) -> Table {
    Table::new(players(n, bankroll), TableConfig::default()).expect("valid table")
}

/// RNG, который ничего не мешает: колода остаётся в стандартном порядке.
#[derive(Default)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

/// Индекс карты в `Deck::standard_52()`.
fn standard_index(card: Card) -> usize {
    let suit = Suit::ALL
        .iter()
        .position(|s| *s == card.suit)
        .expect("known suit");
    suit * 13 + (card.rank.value() as usize - 2)
}

/// "Подтасованная" колода: карты сходят сверху ровно в заданном порядке.
pub struct StackedDeck {
    /// order[i] — индекс стандартной карты, которая окажется на месте i.
    order: Vec<usize>,
}

impl StackedDeck {
    /// `draws` — порядок, в котором карты уйдут из колоды.
    pub fn from_draws(draws: &[Card]) -> Self {
        let on_top: Vec<usize> = draws.iter().map(|&c| standard_index(c)).collect();
        let mut order: Vec<usize> = (0..52).filter(|i| !on_top.contains(i)).collect();
        // Верх колоды — конец вектора.
        order.extend(on_top.iter().rev());
        Self { order }
    }

    /// Раздача по позициям от дилера: `holes[pos] = "Ah Kh"`, `board` — 5 карт.
    /// Сжигаемые карты берутся из оставшихся.
    pub fn for_hand(holes: &[&str], board: &str) -> Self {
        let holes: Vec<Vec<Card>> = holes.iter().map(|h| cards(h)).collect();
        let board = cards(board);
        let n = holes.len();

        let mut used: Vec<Card> = holes.iter().flatten().copied().collect();
        used.extend(board.iter().copied());
        let mut spare = holdem_table::domain::Deck::standard_52()
            .cards
            .into_iter()
            .filter(|c| !used.contains(c));
        let mut burn = || spare.next().expect("spare card");

        let mut draws = Vec::with_capacity(2 * n + 8);
        for pass in 0..2 {
            for hole in &holes {
                draws.push(hole[pass]);
            }
        }
        draws.push(burn());
        draws.extend(&board[..3]);
        draws.push(burn());
        draws.push(board[3]);
        draws.push(burn());
        draws.push(board[4]);

        Self::from_draws(&draws)
    }
}

impl RandomSource for StackedDeck {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        // at[i] — какой исходный элемент сейчас на месте i, pos — обратное.
        let n = slice.len();
        let mut at: Vec<usize> = (0..n).collect();
        let mut pos: Vec<usize> = (0..n).collect();
        for i in 0..n {
            let want = self.order[i];
            let j = pos[want];
            let other = at[i];
            slice.swap(i, j);
            at.swap(i, j);
            pos[want] = i;
            pos[other] = j;
        }
    }
}
