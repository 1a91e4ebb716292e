//! Обход мест по кругу.
//!
//! Позиции в раунде считаются от дилера: 0 = дилер, 1 = малый блайнд,
//! 2 (mod n) = большой блайнд.

/// Индексы 0..len по кругу, начиная с `start` (один полный оборот).
pub fn cyclic_from(len: usize, start: usize) -> impl Iterator<Item = usize> {
    let start = if len == 0 { 0 } else { start % len };
    (0..len).map(move |i| (start + i) % len)
}

/// Следующая позиция по кругу.
pub fn next_position(len: usize, pos: usize) -> usize {
    if len == 0 {
        0
    } else {
        (pos + 1) % len
    }
}

pub fn small_blind_position(len: usize) -> usize {
    1 % len.max(1)
}

pub fn big_blind_position(len: usize) -> usize {
    2 % len.max(1)
}

/// Первый ход префлопа — следующий за большим блайндом.
pub fn preflop_start(len: usize) -> usize {
    next_position(len, big_blind_position(len))
}

/// Постфлоп начинается со следующего за дилером.
pub fn postflop_start(len: usize) -> usize {
    next_position(len, 0)
}

/// Порядок раздачи остатка при сплите: по часовой от дилера (1, 2, …, 0).
pub fn clockwise_from_dealer(len: usize) -> impl Iterator<Item = usize> {
    cyclic_from(len, postflop_start(len))
}
