use chrono::NaiveDate;
use deal_core::{Timestamp, DAY_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PriceError {
    #[error("price history is empty")]
    EmptyHistory,
    #[error("price history out of order at {period}")]
    Unordered { period: String },
    #[error("negative price {price} at {period}")]
    NegativePrice { period: String, price: f64 },
    #[error("current price {current} exceeds original price {original}")]
    PriceAboveOriginal { current: f64, original: f64 },
}

/// One monthly observation, `period` formatted `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub period: String,
    pub price: f64,
}

impl PriceRecord {
    pub fn new(period: impl Into<String>, price: f64) -> Self {
        Self {
            period: period.into(),
            price,
        }
    }

    /// Start of the month in UTC, or `None` when the period is not `YYYY-MM`.
    pub fn start_ms(&self) -> Option<Timestamp> {
        period_start_ms(&self.period)
    }
}

/// Parse a `YYYY-MM` period into the UTC timestamp of its first day.
pub fn period_start_ms(period: &str) -> Option<Timestamp> {
    let (year, month) = period.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

/// Non-empty, chronologically ordered price series. Serialized as a bare array;
/// deserializing goes through [`PriceHistory::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceRecord>", into = "Vec<PriceRecord>")]
pub struct PriceHistory {
    records: Vec<PriceRecord>,
}

impl PriceHistory {
    pub fn new(records: Vec<PriceRecord>) -> Result<Self, PriceError> {
        if records.is_empty() {
            return Err(PriceError::EmptyHistory);
        }
        for r in &records {
            if r.price < 0.0 {
                return Err(PriceError::NegativePrice {
                    period: r.period.clone(),
                    price: r.price,
                });
            }
        }
        // YYYY-MM sorts lexicographically in calendar order.
        for pair in records.windows(2) {
            if pair[1].period <= pair[0].period {
                return Err(PriceError::Unordered {
                    period: pair[1].period.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }
}

impl TryFrom<Vec<PriceRecord>> for PriceHistory {
    type Error = PriceError;

    fn try_from(records: Vec<PriceRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<PriceHistory> for Vec<PriceRecord> {
    fn from(history: PriceHistory) -> Self {
        history.records
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceStats {
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Highest, lowest and mean price; the mean is rounded to cents.
pub fn compute_stats(history: &[PriceRecord]) -> Result<PriceStats, PriceError> {
    let first = history.first().ok_or(PriceError::EmptyHistory)?;
    let mut highest = first.price;
    let mut lowest = first.price;
    let mut sum = 0.0;
    for r in history {
        highest = highest.max(r.price);
        lowest = lowest.min(r.price);
        sum += r.price;
    }
    Ok(PriceStats {
        highest,
        lowest,
        average: round_cents(sum / history.len() as f64),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyAdvice {
    Yes,
    Okay,
    Wait,
    Skip,
}

impl BuyAdvice {
    /// Meter order, worst to best.
    pub const SCALE: [BuyAdvice; 4] = [
        BuyAdvice::Skip,
        BuyAdvice::Wait,
        BuyAdvice::Okay,
        BuyAdvice::Yes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BuyAdvice::Yes => "Yes",
            BuyAdvice::Okay => "Okay",
            BuyAdvice::Wait => "Wait",
            BuyAdvice::Skip => "Skip",
        }
    }

    /// Fill fraction of the advice meter.
    pub fn meter_fraction(&self) -> f64 {
        match self {
            BuyAdvice::Skip => 0.25,
            BuyAdvice::Wait => 0.5,
            BuyAdvice::Okay => 0.75,
            BuyAdvice::Yes => 1.0,
        }
    }

    pub fn tone_class(&self) -> &'static str {
        match self {
            BuyAdvice::Skip => "advice-skip",
            BuyAdvice::Wait => "advice-wait",
            BuyAdvice::Okay => "advice-okay",
            BuyAdvice::Yes => "advice-yes",
        }
    }
}

/// Classify purchase timing. Checks run in order and the first match wins, so a
/// price that is both near the low and near the high (flat history) is `Yes`.
pub fn classify_buy_advice(current: f64, lowest: f64, highest: f64, average: f64) -> BuyAdvice {
    if current <= lowest * 1.05 {
        BuyAdvice::Yes
    } else if current >= highest * 0.95 {
        BuyAdvice::Skip
    } else if current > average {
        BuyAdvice::Wait
    } else {
        BuyAdvice::Okay
    }
}

/// Chart window. Month spans use a fixed day count (180/90/30 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryWindow {
    #[default]
    All,
    SixMonths,
    ThreeMonths,
    OneMonth,
}

impl HistoryWindow {
    pub const ALL: [HistoryWindow; 4] = [
        HistoryWindow::All,
        HistoryWindow::SixMonths,
        HistoryWindow::ThreeMonths,
        HistoryWindow::OneMonth,
    ];

    pub fn days(&self) -> Option<i64> {
        match self {
            HistoryWindow::All => None,
            HistoryWindow::SixMonths => Some(180),
            HistoryWindow::ThreeMonths => Some(90),
            HistoryWindow::OneMonth => Some(30),
        }
    }

    pub fn lookback_ms(&self) -> Option<i64> {
        self.days().map(|d| d * DAY_MS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryWindow::All => "All",
            HistoryWindow::SixMonths => "6M",
            HistoryWindow::ThreeMonths => "3M",
            HistoryWindow::OneMonth => "1M",
        }
    }
}

/// Keep the records whose period started no more than the window's lookback before `now`.
/// `All` returns everything; unparseable periods never fall inside a bounded window.
pub fn window_history(
    history: &[PriceRecord],
    window: HistoryWindow,
    now: Timestamp,
) -> Vec<PriceRecord> {
    let Some(lookback) = window.lookback_ms() else {
        return history.to_vec();
    };
    history
        .iter()
        .filter(|r| match r.start_ms() {
            Some(start) => now - start <= lookback,
            None => {
                tracing::debug!(period = %r.period, "skipping unparseable period");
                false
            }
        })
        .cloned()
        .collect()
}

/// Product shown on the price-history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub title: String,
    pub image_url: String,
    pub current_price: f64,
    pub original_price: f64,
    pub discount_percent: u8,
    pub highest_price: f64,
    pub lowest_price: f64,
    pub average_price: f64,
    pub price_history: PriceHistory,
}

impl ProductSnapshot {
    /// Sample product. No lookup is performed, so every URL resolves to the same snapshot.
    pub fn sample_for(product_url: Option<&str>) -> Self {
        tracing::debug!(url = product_url.unwrap_or(""), "resolving sample snapshot");
        let records = vec![
            PriceRecord::new("2023-10", 399.99),
            PriceRecord::new("2023-11", 379.99),
            PriceRecord::new("2023-12", 349.99),
            PriceRecord::new("2024-01", 299.99),
            PriceRecord::new("2024-02", 279.99),
            PriceRecord::new("2024-03", 299.99),
        ];
        Self {
            title: "Sony WH-1000XM4 Wireless Noise Cancelling Headphones".into(),
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80".into(),
            current_price: 299.99,
            original_price: 399.99,
            discount_percent: 25,
            highest_price: 399.99,
            lowest_price: 249.99,
            average_price: 324.99,
            price_history: PriceHistory { records },
        }
    }

    pub fn validate(&self) -> Result<(), PriceError> {
        if self.current_price > self.original_price {
            return Err(PriceError::PriceAboveOriginal {
                current: self.current_price,
                original: self.original_price,
            });
        }
        PriceHistory::new(self.price_history.records().to_vec()).map(|_| ())
    }

    /// Recorded all-time extremes and average (may reach beyond the charted months).
    pub fn recorded_stats(&self) -> PriceStats {
        PriceStats {
            highest: self.highest_price,
            lowest: self.lowest_price,
            average: self.average_price,
        }
    }

    pub fn advice(&self) -> BuyAdvice {
        classify_buy_advice(
            self.current_price,
            self.lowest_price,
            self.highest_price,
            self.average_price,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PriceRecord> {
        ProductSnapshot::sample_for(None)
            .price_history
            .records()
            .to_vec()
    }

    fn mid_march_2024() -> Timestamp {
        period_start_ms("2024-03").unwrap() + 14 * DAY_MS
    }

    #[test]
    fn stats_over_sample_series() {
        let stats = compute_stats(&sample_records()).unwrap();
        assert_eq!(stats.highest, 399.99);
        assert_eq!(stats.lowest, 279.99);
        // 2009.94 / 6
        assert!((stats.average - 334.99).abs() < 1e-9);
    }

    #[test]
    fn stats_on_empty_history_fail() {
        assert_eq!(compute_stats(&[]), Err(PriceError::EmptyHistory));
        assert_eq!(PriceHistory::new(Vec::new()), Err(PriceError::EmptyHistory));
    }

    #[test]
    fn average_is_rounded_to_cents() {
        let recs = vec![
            PriceRecord::new("2024-01", 10.0),
            PriceRecord::new("2024-02", 10.0),
            PriceRecord::new("2024-03", 10.01),
        ];
        let stats = compute_stats(&recs).unwrap();
        assert_eq!(stats.average, 10.0);
    }

    #[test]
    fn advice_follows_ordered_thresholds() {
        assert_eq!(classify_buy_advice(299.99, 249.99, 399.99, 324.99), BuyAdvice::Okay);
        assert_eq!(classify_buy_advice(250.00, 249.99, 399.99, 324.99), BuyAdvice::Yes);
        assert_eq!(classify_buy_advice(390.00, 249.99, 399.99, 324.99), BuyAdvice::Skip);
        assert_eq!(classify_buy_advice(330.00, 249.99, 399.99, 324.99), BuyAdvice::Wait);
        assert_eq!(classify_buy_advice(324.99, 249.99, 399.99, 324.99), BuyAdvice::Okay);
    }

    #[test]
    fn flat_history_prefers_yes() {
        assert_eq!(classify_buy_advice(100.0, 100.0, 100.0, 100.0), BuyAdvice::Yes);
    }

    #[test]
    fn one_month_window_is_deterministic() {
        let recs = sample_records();
        let out = window_history(&recs, HistoryWindow::OneMonth, mid_march_2024());
        assert_eq!(out, vec![PriceRecord::new("2024-03", 299.99)]);

        // Long after the series ends nothing is recent enough.
        let later = period_start_ms("2026-10").unwrap();
        assert!(window_history(&recs, HistoryWindow::OneMonth, later).is_empty());
    }

    #[test]
    fn windows_use_fixed_day_counts() {
        let recs = sample_records();
        let now = mid_march_2024();
        let three = window_history(&recs, HistoryWindow::ThreeMonths, now);
        assert_eq!(
            three.iter().map(|r| r.period.as_str()).collect::<Vec<_>>(),
            vec!["2024-01", "2024-02", "2024-03"]
        );
        assert_eq!(window_history(&recs, HistoryWindow::SixMonths, now).len(), 6);
        assert_eq!(window_history(&recs, HistoryWindow::All, 0), recs);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let recs = vec![PriceRecord::new("2024-01", 5.0)];
        let start = period_start_ms("2024-01").unwrap();
        assert_eq!(
            window_history(&recs, HistoryWindow::OneMonth, start + 30 * DAY_MS).len(),
            1
        );
        assert!(window_history(&recs, HistoryWindow::OneMonth, start + 30 * DAY_MS + 1).is_empty());
    }

    #[test]
    fn unparseable_periods_only_survive_all() {
        let recs = vec![PriceRecord::new("last spring", 5.0)];
        assert!(window_history(&recs, HistoryWindow::SixMonths, mid_march_2024()).is_empty());
        assert_eq!(window_history(&recs, HistoryWindow::All, mid_march_2024()).len(), 1);
        assert_eq!(period_start_ms("2024-13"), None);
        assert_eq!(period_start_ms("24-01"), None);
    }

    #[test]
    fn history_rejects_out_of_order_periods() {
        let err = PriceHistory::new(vec![
            PriceRecord::new("2024-02", 1.0),
            PriceRecord::new("2024-01", 1.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PriceError::Unordered {
                period: "2024-01".into()
            }
        );
    }

    #[test]
    fn sample_snapshot_is_valid_and_url_independent() {
        let a = ProductSnapshot::sample_for(Some("https://shop.example/item/1"));
        let b = ProductSnapshot::sample_for(None);
        assert_eq!(a, b);
        a.validate().unwrap();
        assert_eq!(a.advice(), BuyAdvice::Okay);
        assert_eq!(a.recorded_stats().lowest, 249.99);
        assert_eq!(
            compute_stats(a.price_history.records()).map(|s| s.lowest),
            Ok(279.99)
        );
    }

    #[test]
    fn advice_meter_is_monotonic() {
        let fractions: Vec<f64> = BuyAdvice::SCALE.iter().map(|a| a.meter_fraction()).collect();
        assert!(fractions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BuyAdvice::Yes.meter_fraction(), 1.0);
    }

    #[test]
    fn history_rejects_negative_prices() {
        assert_eq!(
            PriceHistory::new(vec![
                PriceRecord::new("2024-01", 10.0),
                PriceRecord::new("2024-02", -1.0),
            ]),
            Err(PriceError::NegativePrice {
                period: "2024-02".into(),
                price: -1.0
            })
        );
    }

    #[test]
    fn snapshot_rejects_current_above_original() {
        let mut snap = ProductSnapshot::sample_for(None);
        snap.current_price = 450.0;
        assert_eq!(
            snap.validate(),
            Err(PriceError::PriceAboveOriginal {
                current: 450.0,
                original: 399.99
            })
        );
    }

    #[test]
    fn history_deserialization_is_validated() {
        assert!(serde_json::from_str::<PriceHistory>("[]").is_err());
        let unordered = r#"[{"period":"2024-02","price":1.0},{"period":"2024-01","price":1.0}]"#;
        assert!(serde_json::from_str::<PriceHistory>(unordered).is_err());

        let ok: PriceHistory =
            serde_json::from_str(r#"[{"period":"2024-01","price":1.0}]"#).unwrap();
        assert_eq!(ok.records().len(), 1);

        let mut json = serde_json::to_value(ProductSnapshot::sample_for(None)).unwrap();
        json["priceHistory"] = serde_json::json!([]);
        assert!(serde_json::from_value::<ProductSnapshot>(json).is_err());
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_string(&ProductSnapshot::sample_for(None)).unwrap();
        assert!(json.contains("\"currentPrice\":299.99"));
        assert!(json.contains("\"period\":\"2023-10\""));
    }
}
