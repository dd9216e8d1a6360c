pub mod error;
pub mod io;
pub mod params;
pub mod supertrend;

pub use error::{ParamError, SuperTrendError};
pub use params::SuperTrendParams;
pub use supertrend::{SuperTrend, TrendRow, classify_trend, make_super_trend, mask_bands};
pub use structure::atr::compute_volatility;
pub use structure::bands::{RawBands, build_raw_bands};
