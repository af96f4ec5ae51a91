// Rate table shown by the query view
use super::rate::{DailySeries, DATE_FORMAT};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRow {
    pub id: Option<i64>,
    pub date: String,
    pub currency_code: String,
    /// Rate fixed to 4 decimals
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    pub title: String,
    pub currency_code: String,
    pub record_count: usize,
    pub rows: Vec<RateRow>,
}

impl RateTable {
    pub fn from_series(series: &DailySeries, base_currency: &str) -> Self {
        let rows = series
            .points
            .iter()
            .map(|p| RateRow {
                id: p.id,
                date: p.date.format(DATE_FORMAT).to_string(),
                currency_code: p.currency_code.clone(),
                rate: format!("{:.4}", p.rate),
            })
            .collect::<Vec<_>>();

        Self {
            title: format!("{}/{} 汇率数据", series.currency_code, base_currency),
            currency_code: series.currency_code.clone(),
            record_count: rows.len(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate::{Granularity, RatePoint, RateSeries};
    use chrono::NaiveDate;

    #[test]
    fn test_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = RateSeries::new(
            "USD",
            Granularity::Daily,
            vec![RatePoint::new("USD", date, 7.123456)],
        );
        let table = RateTable::from_series(&series, "CNY");
        assert_eq!(table.title, "USD/CNY 汇率数据");
        assert_eq!(table.record_count, 1);
        assert_eq!(table.rows[0].rate, "7.1235");
        assert_eq!(table.rows[0].date, "2024-01-01");
    }
}
