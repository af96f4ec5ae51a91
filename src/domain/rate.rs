// Rate series domain models
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl Granularity {
    /// Key holding the records inside the upstream `data` object
    pub fn payload_key(&self) -> &'static str {
        match self {
            Granularity::Daily => "rates",
            Granularity::Monthly => "monthly_rates",
            Granularity::Yearly => "yearly_rates",
        }
    }

    pub fn label_field(&self) -> &'static str {
        match self {
            Granularity::Daily => "date",
            Granularity::Monthly => "month",
            Granularity::Yearly => "year",
        }
    }

    pub fn value_field(&self) -> &'static str {
        match self {
            Granularity::Daily => "rate",
            Granularity::Monthly | Granularity::Yearly => "average_rate",
        }
    }

    pub fn trend_label(&self) -> &'static str {
        match self {
            Granularity::Daily => "日汇率走势",
            Granularity::Monthly => "月平均汇率走势",
            Granularity::Yearly => "年平均汇率走势",
        }
    }
}

/// Anything that can be plotted as one (label, value) pair
pub trait SeriesPoint {
    fn label(&self) -> String;
    fn value(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    pub id: Option<i64>,
    pub currency_code: String,
    pub date: NaiveDate,
    pub rate: f64,
}

impl RatePoint {
    pub fn new(currency_code: impl Into<String>, date: NaiveDate, rate: f64) -> Self {
        Self {
            id: None,
            currency_code: currency_code.into(),
            date,
            rate,
        }
    }

    /// Read a daily record. Returns None for a missing field or a non-positive rate.
    pub fn from_record(record: &Map<String, Value>, fallback_code: &str) -> Option<Self> {
        let granularity = Granularity::Daily;
        let date = record
            .get(granularity.label_field())
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())?;
        let rate = positive(record.get(granularity.value_field()))?;
        let currency_code = record
            .get("currency_code")
            .and_then(Value::as_str)
            .unwrap_or(fallback_code)
            .to_string();

        let mut point = Self::new(currency_code, date, rate);
        point.id = record.get("id").and_then(Value::as_i64);
        Some(point)
    }
}

impl SeriesPoint for RatePoint {
    fn label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    fn value(&self) -> f64 {
        self.rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRatePoint {
    pub period: String,
    pub average_rate: f64,
}

impl AggregatedRatePoint {
    pub fn new(period: impl Into<String>, average_rate: f64) -> Self {
        Self {
            period: period.into(),
            average_rate,
        }
    }

    /// Read a monthly (`month`) or yearly (`year`) record
    pub fn from_record(record: &Map<String, Value>, granularity: Granularity) -> Option<Self> {
        let period = match record.get(granularity.label_field())? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let average_rate = positive(record.get(granularity.value_field()))?;
        Some(Self::new(period, average_rate))
    }
}

impl SeriesPoint for AggregatedRatePoint {
    fn label(&self) -> String {
        self.period.clone()
    }

    fn value(&self) -> f64 {
        self.average_rate
    }
}

fn positive(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| *v > 0.0)
}

/// One query result. Points keep the order the upstream returned them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSeries<P> {
    pub currency_code: String,
    pub granularity: Granularity,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub points: Vec<P>,
}

pub type DailySeries = RateSeries<RatePoint>;
pub type AggregatedSeries = RateSeries<AggregatedRatePoint>;

impl<P> RateSeries<P> {
    pub fn new(currency_code: impl Into<String>, granularity: Granularity, points: Vec<P>) -> Self {
        Self {
            currency_code: currency_code.into(),
            granularity,
            start_date: None,
            end_date: None,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
