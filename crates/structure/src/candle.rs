use core_types::types::{Price, TimestampMs};

/// Одна свеча (бар) ряда. open не участвует в расчётах, хранится ради csv.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candle {
    pub ts: TimestampMs,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Candle {
    /// hl2
    pub fn mid(&self) -> Price {
        Price::midpoint(self.high, self.low)
    }
}

/// Оставить свечи в окне [from, to] (обе границы включительно).
/// Ряд уже отсортирован по времени, поэтому порядок сохраняется.
pub fn filter_range(
    candles: &[Candle],
    from: Option<TimestampMs>,
    to: Option<TimestampMs>,
) -> Vec<Candle> {
    candles
        .iter()
        .filter(|c| from.is_none_or(|f| c.ts >= f))
        .filter(|c| to.is_none_or(|t| c.ts <= t))
        .copied()
        .collect()
}
