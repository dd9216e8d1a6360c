use core_types::types::Price;

use crate::candle::Candle;

/// Сырые полосы SuperTrend до state machine и маски.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBands {
    pub lower: Vec<Price>,
    pub upper: Vec<Price>,
}

impl RawBands {
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// hl2 -/+ multiplier * ATR на каждой свече.
/// `volatility` должен быть той же длины, что и `candles`.
pub fn build_raw_bands(candles: &[Candle], volatility: &[Price], multiplier: f64) -> RawBands {
    debug_assert_eq!(candles.len(), volatility.len());

    let (lower, upper) = candles
        .iter()
        .zip(volatility)
        .map(|(c, &atr)| {
            let mid = c.mid();
            let offset = atr * multiplier;
            (mid - offset, mid + offset)
        })
        .unzip();

    RawBands { lower, upper }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::types::TimestampMs;

    #[test]
    fn bands_are_symmetric_around_mid() {
        let candles = vec![
            Candle {
                ts: TimestampMs(0),
                open: Price(9.0),
                high: Price(10.0),
                low: Price(8.0),
                close: Price(9.0),
            },
            Candle {
                ts: TimestampMs(1),
                open: Price(9.0),
                high: Price(12.0),
                low: Price(9.0),
                close: Price(11.0),
            },
        ];

        let raw = build_raw_bands(&candles, &[Price(2.0), Price(1.0)], 3.0);

        assert_eq!(raw.len(), 2);
        assert_eq!(raw.lower, vec![Price(3.0), Price(7.5)]);
        assert_eq!(raw.upper, vec![Price(15.0), Price(13.5)]);
    }
}
