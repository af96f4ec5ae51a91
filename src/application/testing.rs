// In-memory repository for service and handler tests
use crate::application::rate_repository::RateRepository;
use crate::domain::currency::CurrencyDescriptor;
use crate::domain::date_range::DateRange;
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::rate::{
    AggregatedRatePoint, AggregatedSeries, DailySeries, Granularity, RatePoint, RateSeries,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: &'static str,
    pub currency_code: String,
    pub range: DateRange,
}

#[derive(Default)]
pub struct FakeRepository {
    pub currencies: Vec<CurrencyDescriptor>,
    pub daily: HashMap<String, Vec<RatePoint>>,
    pub monthly: HashMap<String, Vec<AggregatedRatePoint>>,
    pub yearly: HashMap<String, Vec<AggregatedRatePoint>>,
    pub offline: bool,
    pub calls: Mutex<Vec<RecordedCall>>,
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currencies(mut self, codes: &[&str]) -> Self {
        self.currencies = codes.iter().map(|c| CurrencyDescriptor::new(*c, "")).collect();
        self
    }

    pub fn with_daily(mut self, code: &str, points: &[(&str, f64)]) -> Self {
        let points = points
            .iter()
            .map(|(date, rate)| RatePoint::new(code, day(date), *rate))
            .collect();
        self.daily.insert(code.to_string(), points);
        self
    }

    pub fn with_monthly(mut self, code: &str, points: &[(&str, f64)]) -> Self {
        let points = points
            .iter()
            .map(|(period, rate)| AggregatedRatePoint::new(*period, *rate))
            .collect();
        self.monthly.insert(code.to_string(), points);
        self
    }

    pub fn with_yearly(mut self, code: &str, points: &[(&str, f64)]) -> Self {
        let points = points
            .iter()
            .map(|(period, rate)| AggregatedRatePoint::new(*period, *rate))
            .collect();
        self.yearly.insert(code.to_string(), points);
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, currency_code: &str, range: DateRange) -> DashboardResult<()> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint,
            currency_code: currency_code.to_string(),
            range,
        });
        if self.offline {
            return Err(DashboardError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

fn in_range(range: &DateRange, date: NaiveDate) -> bool {
    range.start.is_none_or(|s| date >= s) && range.end.is_none_or(|e| date <= e)
}

fn aggregated(
    source: &HashMap<String, Vec<AggregatedRatePoint>>,
    code: &str,
    granularity: Granularity,
    range: DateRange,
) -> AggregatedSeries {
    let mut series = RateSeries::new(
        code,
        granularity,
        source.get(code).cloned().unwrap_or_default(),
    );
    series.start_date = range.start;
    series.end_date = range.end;
    series
}

#[async_trait]
impl RateRepository for FakeRepository {
    async fn list_currencies(&self) -> DashboardResult<Vec<CurrencyDescriptor>> {
        self.record("currencies", "", DateRange::default())?;
        Ok(self.currencies.clone())
    }

    async fn get_daily_rates(&self, currency_code: &str, range: DateRange) -> DashboardResult<DailySeries> {
        self.record("daily", currency_code, range)?;
        let points = self
            .daily
            .get(currency_code)
            .map(|points| points.iter().filter(|p| in_range(&range, p.date)).cloned().collect())
            .unwrap_or_default();
        let mut series = RateSeries::new(currency_code, Granularity::Daily, points);
        series.start_date = range.start;
        series.end_date = range.end;
        Ok(series)
    }

    async fn get_monthly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries> {
        self.record("monthly", currency_code, range)?;
        Ok(aggregated(&self.monthly, currency_code, Granularity::Monthly, range))
    }

    async fn get_yearly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries> {
        self.record("yearly", currency_code, range)?;
        Ok(aggregated(&self.yearly, currency_code, Granularity::Yearly, range))
    }
}
