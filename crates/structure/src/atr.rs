use core_types::types::Price;

use crate::candle::Candle;

/// True Range для одной свечи.
/// Первая свеча ряда не имеет prev_close -> просто high - low.
pub fn true_range(prev_close: Option<Price>, candle: &Candle) -> Price {
    let hl = candle.high.0 - candle.low.0;

    let Some(prev_close) = prev_close else {
        return Price(hl);
    };

    let hc = (candle.high.0 - prev_close.0).abs();
    let lc = (candle.low.0 - prev_close.0).abs();

    Price(hl.max(hc).max(lc))
}

/// Экспоненциально взвешенное среднее с поправкой на смещение.
///
/// Центр масс `com`, затухание alpha = 1 / (com + 1). Вес отсчёта с лагом k
/// равен (1 - alpha)^k, сумма делится на сумму весов, поэтому первое же
/// значение даёт валидный результат (без прогрева и без NaN).
#[derive(Debug, Copy, Clone)]
pub struct EwmMean {
    decay: f64,
    num: f64,
    den: f64,
}

impl EwmMean {
    pub fn new(com: usize) -> Self {
        let alpha = 1.0 / (com as f64 + 1.0);
        Self {
            decay: 1.0 - alpha,
            num: 0.0,
            den: 0.0,
        }
    }

    pub fn update(&mut self, x: f64) -> f64 {
        self.num = x + self.decay * self.num;
        self.den = 1.0 + self.decay * self.den;
        self.num / self.den
    }
}

/// ATR на каждой свече ряда: EWM(com = look_back) от true range.
/// Длина результата == длине ряда.
pub fn compute_volatility(candles: &[Candle], look_back: usize) -> Vec<Price> {
    let mut ewm = EwmMean::new(look_back);
    let mut prev_close = None;

    candles
        .iter()
        .map(|c| {
            let tr = true_range(prev_close, c);
            prev_close = Some(c.close);
            Price(ewm.update(tr.0))
        })
        .collect()
}
