use core_types::types::Price;
use tracing::trace;

use crate::trend_cause::TrendCause;
use crate::trend_state::TrendState;

/// Состояние, которое переносится со свечи на свечу
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrendCarry {
    pub trend: TrendState,
    pub lower: Price,
    pub upper: Price,
}

impl TrendCarry {
    /// Первая свеча: предыдущей нет, тренд по умолчанию Down, полосы сырые.
    pub fn seed(lower_raw: Price, upper_raw: Price) -> Self {
        Self {
            trend: TrendState::default(),
            lower: lower_raw,
            upper: upper_raw,
        }
    }
}

/// Один шаг trend state machine.
///
/// - пробой вверх/вниз -> новый тренд, полосы сырые
/// - иначе тренд сохраняется, а полоса на его стороне не откатывается
///   назад: support в Up только растёт, resistance в Down только падает
pub fn trend_transition(
    prev: TrendCarry,
    close: Price,
    lower_raw: Price,
    upper_raw: Price,
) -> (TrendCarry, TrendCause) {
    let (next, cause) = if close > prev.upper {
        (
            TrendCarry {
                trend: TrendState::Up,
                lower: lower_raw,
                upper: upper_raw,
            },
            TrendCause::BreakoutUp,
        )
    } else if close < prev.lower {
        (
            TrendCarry {
                trend: TrendState::Down,
                lower: lower_raw,
                upper: upper_raw,
            },
            TrendCause::BreakoutDown,
        )
    } else {
        let next = match prev.trend {
            TrendState::Up => TrendCarry {
                trend: TrendState::Up,
                lower: lower_raw.max(prev.lower),
                upper: upper_raw,
            },
            TrendState::Down => TrendCarry {
                trend: TrendState::Down,
                lower: lower_raw,
                upper: upper_raw.min(prev.upper),
            },
        };
        (next, TrendCause::Persist)
    };

    trace!(
        close = close.0,
        prev_lower = prev.lower.0,
        prev_upper = prev.upper.0,
        ?cause,
        trend = ?next.trend,
        "trend step"
    );

    (next, cause)
}
