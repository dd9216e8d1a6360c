//! Core domain types.
//!
//! Цель:
//! - запретить "голые" f64 в логике индикаторов
//! - цена и время не путаются между собой

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Цена (или ценовое расстояние: ATR, ширина полосы)
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(pub f64);

/// Время в миллисекундах (unix epoch)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(pub i64);

impl Price {
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Середина между двумя ценами (hl2)
    pub fn midpoint(a: Price, b: Price) -> Price {
        Price((a.0 + b.0) / 2.0)
    }

    pub fn max(self, other: Price) -> Price {
        Price(self.0.max(other.0))
    }

    pub fn min(self, other: Price) -> Price {
        Price(self.0.min(other.0))
    }
}

//
// --- Arithmetic (строго минимально) -----------------------------------------
//

impl Add for Price {
    type Output = Price;
    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;
    fn sub(self, rhs: Price) -> Price {
        Price(self.0 - rhs.0)
    }
}

/// Масштабирование (multiplier * ATR)
impl Mul<f64> for Price {
    type Output = Price;
    fn mul(self, k: f64) -> Price {
        Price(self.0 * k)
    }
}

//
// --- Display (для логов / csv) ----------------------------------------------
//

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
