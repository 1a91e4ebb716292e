use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами.
///
/// Отрицательных значений не бывает: вычитание, которое ушло бы в минус,
/// возвращает ошибку (`try_sub`), а не обрезается молча.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

/// Ошибки арифметики фишек.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChipsError {
    #[error("Отрицательное количество фишек: {have} - {take}")]
    NegativeAmount { have: Chips, take: Chips },
}

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub const fn new(amount: u64) -> Self {
        Chips(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Вычитание с проверкой: результат не может быть меньше нуля.
    pub fn try_sub(self, other: Chips) -> Result<Chips, ChipsError> {
        self.0
            .checked_sub(other.0)
            .map(Chips)
            .ok_or(ChipsError::NegativeAmount {
                have: self,
                take: other,
            })
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    /// Только для расчёта размера ставки (all-in cap).
    pub fn saturating_sub(self, other: Chips) -> Chips {
        Chips(self.0.saturating_sub(other.0))
    }

    /// Разделить на `ways` равных долей: (доля, остаток).
    pub fn split(self, ways: u64) -> (Chips, Chips) {
        if ways == 0 {
            return (Chips::ZERO, self);
        }
        (Chips(self.0 / ways), Chips(self.0 % ways))
    }

    /// Обнулить (стек уходит в банкролл при top-up).
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 += rhs.0;
    }
}

impl Mul<u64> for Chips {
    type Output = Chips;

    fn mul(self, rhs: u64) -> Self::Output {
        Chips(self.0 * rhs)
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Chips> for Chips {
    fn sum<I: Iterator<Item = &'a Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + *c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chips", self.0)
    }
}
