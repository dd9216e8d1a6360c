use crate::error::ParamError;

/// Параметры SuperTrend
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SuperTrendParams {
    /// центр масс EWM для ATR (например 10)
    pub look_back: usize,
    /// ширина полосы в ATR (например 3.0)
    pub multiplier: f64,
}

impl Default for SuperTrendParams {
    fn default() -> Self {
        Self {
            look_back: 10,
            multiplier: 3.0,
        }
    }
}

impl SuperTrendParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.look_back < 1 {
            return Err(ParamError::LookBackTooShort);
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(ParamError::NonPositiveMultiplier(self.multiplier));
        }
        Ok(())
    }
}
