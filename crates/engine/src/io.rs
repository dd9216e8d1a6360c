//! CSV вход/выход: свечи `ts,open,high,low,close` (ts в мс), результат
//! `ts,close,is_up_trend,lower_band,upper_band` (пустая ячейка = полосы нет).

use std::io::{Read, Write};

use anyhow::{Context, Result};
use core_types::types::{Price, TimestampMs};
use structure::candle::Candle;

use crate::supertrend::SuperTrend;

#[derive(serde::Serialize, serde::Deserialize)]
struct CandleRow {
    ts: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

#[derive(serde::Serialize)]
struct BandRow {
    ts: i64,
    close: f64,
    is_up_trend: bool,
    lower_band: Option<f64>,
    upper_band: Option<f64>,
}

pub fn read_candles<R: Read>(rdr: R) -> Result<Vec<Candle>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let mut out = Vec::new();

    for (i, r) in rdr.deserialize::<CandleRow>().enumerate() {
        let row = r.with_context(|| format!("bad candle row {}", i + 1))?;
        out.push(Candle {
            ts: TimestampMs(row.ts),
            open: Price(row.open),
            high: Price(row.high),
            low: Price(row.low),
            close: Price(row.close),
        });
    }

    Ok(out)
}

pub fn write_bands<W: Write>(wtr: W, candles: &[Candle], st: &SuperTrend) -> Result<()> {
    anyhow::ensure!(
        candles.len() == st.len(),
        "candles/bands length mismatch: {} vs {}",
        candles.len(),
        st.len()
    );

    let mut wtr = csv::Writer::from_writer(wtr);
    for (i, c) in candles.iter().enumerate() {
        wtr.serialize(BandRow {
            ts: c.ts.0,
            close: c.close.0,
            is_up_trend: st.is_up_trend[i],
            lower_band: st.lower_band[i].map(|p| p.0),
            upper_band: st.upper_band[i].map(|p| p.0),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_candles() {
        let data = "ts,open,high,low,close\n\
                    1000,9,10,8,9\n\
                    2000,9.5,12,9,11\n";

        let candles = read_candles(data.as_bytes()).unwrap();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].ts, TimestampMs(2000));
        assert_eq!(candles[1].high, Price(12.0));
        assert_eq!(candles[1].close, Price(11.0));
    }

    #[test]
    fn reports_bad_row() {
        let data = "ts,open,high,low,close\n1000,9,10,8,9\n2000,x,12,9,11\n";

        let err = read_candles(data.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("row 2"), "{err}");
    }

    #[test]
    fn writes_gaps_for_masked_bands() {
        let candles = read_candles("ts,open,high,low,close\n1,9,10,8,9\n2,19,20,18,19\n".as_bytes())
            .unwrap();
        let st = SuperTrend {
            is_up_trend: vec![false, true],
            lower_band: vec![None, Some(Price(11.0))],
            upper_band: vec![Some(Price(15.0)), None],
        };

        let mut out = Vec::new();
        write_bands(&mut out, &candles, &st).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ts,close,is_up_trend,lower_band,upper_band\n\
             1,9.0,false,,15.0\n\
             2,19.0,true,11.0,\n"
        );
    }

    #[test]
    fn refuses_misaligned_output() {
        let candles = read_candles("ts,open,high,low,close\n1,9,10,8,9\n".as_bytes()).unwrap();
        let st = SuperTrend {
            is_up_trend: vec![],
            lower_band: vec![],
            upper_band: vec![],
        };

        assert!(write_bands(Vec::new(), &candles, &st).is_err());
    }
}
