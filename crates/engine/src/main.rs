use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use clap::Parser;
use tracing::info;

use core_types::types::TimestampMs;
use structure::candle::filter_range;
use supertrend::io::{read_candles, write_bands};
use supertrend::{SuperTrendParams, make_super_trend};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Parser, Debug)]
#[command(about = "SuperTrend bands over a CSV of candles")]
struct Args {
    /// csv с колонками ts,open,high,low,close (ts в мс, по возрастанию)
    #[arg(long)]
    input: PathBuf,
    /// куда писать результат; без флага — stdout
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    look_back: usize,
    #[arg(long, default_value_t = 3.0)]
    multiplier: f64,

    /// YYYY-MM-DD, UTC, включительно
    #[arg(long)]
    start: Option<String>,
    /// YYYY-MM-DD, UTC, включительно до конца дня
    #[arg(long)]
    end: Option<String>,
}

fn date_to_ms(date: &str) -> Result<i64> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("bad date: {}", date))?;
    let midnight = d
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("bad date: {}", date))?;
    Ok(Utc.from_utc_datetime(&midnight).timestamp_millis())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supertrend=info".into()),
        )
        .init();

    let args = Args::parse();

    let from = args.start.as_deref().map(date_to_ms).transpose()?;
    let to = args
        .end
        .as_deref()
        .map(date_to_ms)
        .transpose()?
        .map(|ms| ms + DAY_MS - 1);
    if let (Some(f), Some(t)) = (from, to) {
        if f > t {
            anyhow::bail!("start must not be after end");
        }
    }

    let file = File::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let candles = read_candles(BufReader::new(file)).context("read candles failed")?;
    let candles = filter_range(&candles, from.map(TimestampMs), to.map(TimestampMs));

    let params = SuperTrendParams {
        look_back: args.look_back,
        multiplier: args.multiplier,
    };
    let st = make_super_trend(&candles, params).context("supertrend failed")?;

    match &args.out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_bands(BufWriter::new(file), &candles, &st).context("write bands failed")?;
        }
        None => write_bands(io::stdout().lock(), &candles, &st).context("write bands failed")?,
    }

    let last_up = st.is_up_trend.last().copied().unwrap_or(false);
    info!(
        candles = candles.len(),
        look_back = params.look_back,
        multiplier = params.multiplier,
        flips = st.flips(),
        trend = if last_up { "up" } else { "down" },
        "supertrend done"
    );

    Ok(())
}
