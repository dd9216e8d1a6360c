use core_types::types::TimestampMs;
use thiserror::Error;

use crate::candle::Candle;

/// Нарушение инварианта входного ряда (индекс = позиция свечи)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("non-finite price at candle {index}")]
    NonFinitePrice { index: usize },
    #[error("low above high at candle {index}")]
    LowAboveHigh { index: usize },
    #[error("timestamp {ts} at candle {index} is not after {prev}")]
    NotIncreasing {
        index: usize,
        prev: TimestampMs,
        ts: TimestampMs,
    },
}

/// Проверка ряда: конечные цены, low <= high, ts строго растёт.
/// Пустой ряд здесь не ошибка, это решает вызывающий.
pub fn validate_series(candles: &[Candle]) -> Result<(), SeriesError> {
    let mut prev_ts: Option<TimestampMs> = None;

    for (index, c) in candles.iter().enumerate() {
        if ![c.open, c.high, c.low, c.close].iter().all(|p| p.is_finite()) {
            return Err(SeriesError::NonFinitePrice { index });
        }

        if c.low > c.high {
            return Err(SeriesError::LowAboveHigh { index });
        }

        if let Some(prev) = prev_ts {
            if c.ts <= prev {
                return Err(SeriesError::NotIncreasing {
                    index,
                    prev,
                    ts: c.ts,
                });
            }
        }
        prev_ts = Some(c.ts);
    }

    Ok(())
}
