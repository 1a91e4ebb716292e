//! Техасский холдем за одним столом.
//!
//! - `domain` — карты, фишки, игроки, стол;
//! - `eval` — оценка лучшей 5-карточной руки из 5–7 карт;
//! - `engine` — раунд: блайнды, ставки, сайд-поты, шоудаун;
//! - `infra` — RNG для тасовки колоды.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
