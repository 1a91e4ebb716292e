//! Side pot tests: раскладка ставок улицы по слоям all-in и банки.
//!
//! Здесь мы проверяем:
//! - уровни all-in берутся как приращения, а не абсолютные суммы;
//! - сфолдившие фишки остаются в банке;
//! - сумма слоёв всегда равна сумме ставок;
//! - закрытый банк не принимает новых фишек.

use holdem_table::domain::Chips;
use holdem_table::engine::{layer_street_bets, Pots, StreetBet};

fn total(bets: &[StreetBet]) -> Chips {
    bets.iter().map(|b| b.amount).sum()
}

/// Нет all-in — один слой на всех.
#[test]
fn no_all_in_gives_single_layer() {
    let bets = [
        StreetBet::live(Chips(40)),
        StreetBet::live(Chips(40)),
        StreetBet::folded(Chips(10)),
    ];
    let layers = layer_street_bets(&bets);

    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].amount, Chips(90));
    assert_eq!(layers[0].contributors, vec![0, 1, 2]);
    assert!(layers[0].capped.is_empty());
}

/// 50 all-in, 100 all-in, двое по 200: три слоя на 550.
#[test]
fn stacked_all_ins_make_incremental_layers() {
    let bets = [
        StreetBet::all_in(Chips(50)),
        StreetBet::all_in(Chips(100)),
        StreetBet::live(Chips(200)),
        StreetBet::live(Chips(200)),
    ];
    let layers = layer_street_bets(&bets);

    let amounts: Vec<u64> = layers.iter().map(|l| l.amount.0).collect();
    assert_eq!(amounts, vec![200, 150, 200]);
    assert_eq!(layers.iter().map(|l| l.amount).sum::<Chips>(), total(&bets));

    assert_eq!(layers[0].capped, vec![0]);
    assert_eq!(layers[1].contributors, vec![1, 2, 3]);
    assert_eq!(layers[1].capped, vec![1]);
    assert_eq!(layers[2].contributors, vec![2, 3]);
    assert!(layers[2].capped.is_empty());
}

/// Фолд выше уровня all-in: излишек уходит в следующий слой.
#[test]
fn folded_chips_are_split_across_layers() {
    let bets = [
        StreetBet::folded(Chips(80)),
        StreetBet::all_in(Chips(50)),
        StreetBet::live(Chips(100)),
    ];
    let layers = layer_street_bets(&bets);

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].amount, Chips(150));
    assert_eq!(layers[0].capped, vec![1]);
    assert_eq!(layers[1].amount, Chips(80));
    assert_eq!(layers[1].contributors, vec![0, 2]);
}

/// Одинаковые all-in дают один уровень и закрывают банк обоих.
#[test]
fn equal_all_ins_share_one_level() {
    let bets = [
        StreetBet::all_in(Chips(100)),
        StreetBet::all_in(Chips(100)),
        StreetBet::live(Chips(100)),
    ];
    let layers = layer_street_bets(&bets);

    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].amount, Chips(300));
    assert_eq!(layers[0].capped, vec![0, 1]);
}

/// Игрок, ушедший в all-in на прошлой улице, ставит 0 и не создаёт уровень.
#[test]
fn zero_all_in_is_ignored() {
    let bets = [
        StreetBet::all_in(Chips::ZERO),
        StreetBet::live(Chips(60)),
        StreetBet::live(Chips(60)),
    ];
    let layers = layer_street_bets(&bets);

    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].amount, Chips(120));
    assert_eq!(layers[0].contributors, vec![1, 2]);
}

#[test]
fn empty_street_has_no_layers() {
    let bets = [StreetBet::live(Chips::ZERO), StreetBet::live(Chips::ZERO)];
    assert!(layer_street_bets(&bets).is_empty());
}

#[test]
fn closed_pot_opens_the_next_one() {
    let mut pots = Pots::new();
    assert_eq!(pots.len(), 1);
    assert!(pots.is_empty());

    let idx = pots.open_index();
    assert_eq!(idx, 0);
    pots.add(idx, Chips(300));
    pots.close(idx);
    assert!(pots.is_closed(0));

    let idx = pots.open_index();
    assert_eq!(idx, 1);
    pots.add(idx, Chips(120));
    // Открытый банк переиспользуется.
    assert_eq!(pots.open_index(), 1);

    assert_eq!(pots.amounts(), &[Chips(300), Chips(120)]);
    assert_eq!(pots.main(), Chips(300));
    assert_eq!(pots.total(), Chips(420));

    assert_eq!(pots.take(0), Chips(300));
    assert_eq!(pots.total(), Chips(120));
}

#[test]
fn deserialized_empty_pots_stay_usable() {
    let mut pots: Pots = serde_json::from_str(r#"{ "amounts": [], "closed": [] }"#).unwrap();
    assert_eq!(pots.main(), Chips::ZERO);
    assert!(pots.is_empty());

    assert_eq!(pots.open_index(), 0);
    pots.add(0, Chips(40));
    assert_eq!(pots.main(), Chips(40));

    // Флагов меньше, чем банков: недостающие считаются открытыми.
    let mut pots: Pots =
        serde_json::from_str(r#"{ "amounts": [70, 30], "closed": [true] }"#).unwrap();
    assert_eq!(pots.open_index(), 1);
    assert_eq!(pots.amounts(), &[Chips(70), Chips(30)]);
}
