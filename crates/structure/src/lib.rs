pub mod atr;
pub mod bands;
pub mod candle;
pub mod validate;

pub use atr::{EwmMean, compute_volatility};
pub use bands::{RawBands, build_raw_bands};
pub use candle::Candle;
pub use validate::{SeriesError, validate_series};
