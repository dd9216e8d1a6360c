use core_types::types::Price;

use crate::trend_cause::TrendCause;
use crate::trend_state::TrendState;
use crate::trend_transition::{TrendCarry, trend_transition};

fn carry(trend: TrendState, lower: f64, upper: f64) -> TrendCarry {
    TrendCarry {
        trend,
        lower: Price(lower),
        upper: Price(upper),
    }
}

#[test]
fn close_above_prev_upper_flips_up_with_raw_bands() {
    let (next, cause) = trend_transition(
        carry(TrendState::Down, 90.0, 110.0),
        Price(111.0),
        Price(95.0),
        Price(120.0),
    );

    assert_eq!(cause, TrendCause::BreakoutUp);
    assert_eq!(next, carry(TrendState::Up, 95.0, 120.0));
}

#[test]
fn close_below_prev_lower_flips_down_with_raw_bands() {
    let (next, cause) = trend_transition(
        carry(TrendState::Up, 90.0, 110.0),
        Price(89.0),
        Price(80.0),
        Price(100.0),
    );

    assert_eq!(cause, TrendCause::BreakoutDown);
    assert_eq!(next, carry(TrendState::Down, 80.0, 100.0));
}

#[test]
fn breakout_in_same_direction_does_not_clamp() {
    // уже Down, close ниже lower: полосы берутся сырые, upper может вырасти
    let (next, cause) = trend_transition(
        carry(TrendState::Down, 90.0, 110.0),
        Price(85.0),
        Price(70.0),
        Price(115.0),
    );

    assert_eq!(cause, TrendCause::BreakoutDown);
    assert_eq!(next, carry(TrendState::Down, 70.0, 115.0));
}

#[test]
fn touching_a_band_is_not_a_breakout() {
    let (next, cause) = trend_transition(
        carry(TrendState::Down, 7.0, 11.0),
        Price(11.0),
        Price(7.5),
        Price(13.0),
    );

    assert_eq!(cause, TrendCause::Persist);
    assert_eq!(next.trend, TrendState::Down);
}

#[test]
fn uptrend_support_never_ratchets_down() {
    let (next, cause) = trend_transition(
        carry(TrendState::Up, 100.0, 130.0),
        Price(105.0),
        Price(98.0),
        Price(125.0),
    );

    assert_eq!(cause, TrendCause::Persist);
    assert_eq!(next, carry(TrendState::Up, 100.0, 125.0));

    let (next, _) = trend_transition(next, Price(106.0), Price(101.0), Price(127.0));
    assert_eq!(next, carry(TrendState::Up, 101.0, 127.0));
}

#[test]
fn downtrend_resistance_never_ratchets_up() {
    let (next, cause) = trend_transition(
        carry(TrendState::Down, 90.0, 110.0),
        Price(100.0),
        Price(88.0),
        Price(112.0),
    );

    assert_eq!(cause, TrendCause::Persist);
    assert_eq!(next, carry(TrendState::Down, 88.0, 110.0));

    let (next, _) = trend_transition(next, Price(100.0), Price(85.0), Price(108.0));
    assert_eq!(next, carry(TrendState::Down, 85.0, 108.0));
}
