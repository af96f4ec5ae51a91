// CSV export of a daily rate series
use super::error::{DashboardError, DashboardResult};
use super::rate::{DailySeries, DATE_FORMAT};
use bytes::Bytes;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_HEADER: [&str; 3] = ["日期", "货币代码", "汇率"];
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub fn export_filename(currency_code: &str) -> String {
    format!("{}_rates.csv", currency_code)
}

/// A ready-to-download CSV artifact
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub body: Bytes,
}

/// Serialize the series in its own order. An empty series produces no file.
pub fn export(series: &DailySeries) -> DashboardResult<Option<CsvExport>> {
    if series.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for point in &series.points {
        let code = if point.currency_code.is_empty() {
            &series.currency_code
        } else {
            &point.currency_code
        };
        writer
            .write_record([
                point.date.format(DATE_FORMAT).to_string(),
                code.clone(),
                point.rate.to_string(),
            ])
            .map_err(csv_error)?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| DashboardError::Internal(format!("CSV flush failed: {}", e)))?;

    Ok(Some(CsvExport {
        filename: export_filename(&series.currency_code),
        body: Bytes::from(body),
    }))
}

fn csv_error(e: csv::Error) -> DashboardError {
    DashboardError::Internal(format!("CSV write failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate::{Granularity, RatePoint, RateSeries};
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_row_export() {
        let series = RateSeries::new(
            "USD",
            Granularity::Daily,
            vec![RatePoint::new("USD", day("2024-01-01"), 7.1)],
        );
        let export = export(&series).unwrap().unwrap();
        assert_eq!(export.filename, "USD_rates.csv");

        let text = String::from_utf8(export.body.to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["日期,货币代码,汇率", "2024-01-01,USD,7.1"]);
    }

    #[test]
    fn test_rows_follow_series_order() {
        let series = RateSeries::new(
            "EUR",
            Granularity::Daily,
            vec![
                RatePoint::new("EUR", day("2024-01-02"), 7.81),
                RatePoint::new("", day("2024-01-01"), 7.8),
            ],
        );
        let export = export(&series).unwrap().unwrap();
        let text = String::from_utf8(export.body.to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-01-02,EUR,7.81");
        assert_eq!(lines[2], "2024-01-01,EUR,7.8");
    }

    #[test]
    fn test_empty_series_produces_nothing() {
        let series: DailySeries = RateSeries::new("USD", Granularity::Daily, vec![]);
        assert_eq!(export(&series).unwrap(), None);
    }
}
