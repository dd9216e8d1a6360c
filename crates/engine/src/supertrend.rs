//! SuperTrend: ATR -> сырые полосы -> trend state machine -> маска.
//!
//! Классификация и маска намеренно разнесены: первая — последовательный
//! проход (каждая свеча зависит от предыдущей), вторая — поэлементная.

use core_types::types::Price;
use state_machine::trend_cause::TrendCause;
use state_machine::trend_state::TrendState;
use state_machine::trend_transition::{TrendCarry, trend_transition};
use structure::atr::compute_volatility;
use structure::bands::{RawBands, build_raw_bands};
use structure::candle::Candle;
use structure::validate::validate_series;
use tracing::debug;

use crate::error::{ParamError, SuperTrendError};
use crate::params::SuperTrendParams;

/// Результат state machine на одной свече (до маски)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrendRow {
    pub trend: TrendState,
    /// None только у первой свечи
    pub cause: Option<TrendCause>,
    pub lower: Price,
    pub upper: Price,
}

impl From<TrendCarry> for TrendRow {
    fn from(carry: TrendCarry) -> Self {
        Self {
            trend: carry.trend,
            cause: None,
            lower: carry.lower,
            upper: carry.upper,
        }
    }
}

/// Итоговые ряды, выровненные по свечам входа
#[derive(Debug, Clone, PartialEq)]
pub struct SuperTrend {
    pub is_up_trend: Vec<bool>,
    pub lower_band: Vec<Option<Price>>,
    pub upper_band: Vec<Option<Price>>,
}

impl SuperTrend {
    pub fn len(&self) -> usize {
        self.is_up_trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_up_trend.is_empty()
    }

    /// Сколько раз флаг тренда поменялся относительно предыдущей свечи
    pub fn flips(&self) -> usize {
        self.is_up_trend.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Активная полоса (та, что не замаскирована). None за пределами ряда.
    pub fn active_band(&self, i: usize) -> Option<Price> {
        let lower = self.lower_band.get(i).copied().flatten();
        let upper = self.upper_band.get(i).copied().flatten();
        lower.or(upper)
    }
}

/// Один левый-направо проход. Аккумулятор — `TrendCarry` предыдущей свечи.
pub fn classify_trend(candles: &[Candle], raw: &RawBands) -> Vec<TrendRow> {
    debug_assert_eq!(candles.len(), raw.len());

    let Some((&lower0, &upper0)) = raw.lower.first().zip(raw.upper.first()) else {
        return Vec::new();
    };

    let seed = TrendCarry::seed(lower0, upper0);

    let steps = candles
        .iter()
        .zip(raw.lower.iter().zip(&raw.upper))
        .enumerate()
        .skip(1)
        .scan(seed, |prev, (i, (c, (&lo, &up)))| {
            let (next, cause) = trend_transition(*prev, c.close, lo, up);

            if cause != TrendCause::Persist && next.trend != prev.trend {
                debug!(index = i, ts = c.ts.0, ?cause, trend = ?next.trend, "trend flip");
            }

            *prev = next;
            Some(TrendRow {
                cause: Some(cause),
                ..TrendRow::from(next)
            })
        });

    std::iter::once(TrendRow::from(seed)).chain(steps).collect()
}

/// Убрать полосу с неактивной стороны: в Up остаётся lower, в Down — upper.
pub fn mask_bands(rows: &[TrendRow]) -> (Vec<Option<Price>>, Vec<Option<Price>>) {
    rows.iter()
        .map(|r| match r.trend {
            TrendState::Up => (Some(r.lower), None),
            TrendState::Down => (None, Some(r.upper)),
        })
        .unzip()
}

/// Полный расчёт. Сначала проверяются параметры и ряд, частичного результата
/// при ошибке не бывает.
pub fn make_super_trend(
    candles: &[Candle],
    params: SuperTrendParams,
) -> Result<SuperTrend, SuperTrendError> {
    params.validate()?;
    if candles.is_empty() {
        return Err(ParamError::EmptySeries.into());
    }
    validate_series(candles)?;

    let atr = compute_volatility(candles, params.look_back);
    let raw = build_raw_bands(candles, &atr, params.multiplier);
    let rows = classify_trend(candles, &raw);
    let (lower_band, upper_band) = mask_bands(&rows);

    let st = SuperTrend {
        is_up_trend: rows.iter().map(|r| r.trend.is_up()).collect(),
        lower_band,
        upper_band,
    };

    debug!(
        candles = candles.len(),
        look_back = params.look_back,
        multiplier = params.multiplier,
        flips = st.flips(),
        "supertrend computed"
    );

    Ok(st)
}
