// Query date ranges and the quick-pick presets
use super::error::{DashboardError, DashboardResult};
use super::rate::DATE_FORMAT;
use chrono::{Days, Months, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

/// Optional bounds; a missing bound is left to the upstream's default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Single-day range used to look up today's rate
    pub fn day(date: NaiveDate) -> Self {
        Self::new(Some(date), Some(date))
    }

    /// Combine explicit bounds with an optional preset. Explicit bounds win.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        preset: Option<&str>,
        today: NaiveDate,
    ) -> DashboardResult<Self> {
        let mut range = match preset.filter(|p| !p.is_empty()) {
            Some(p) => p.parse::<RangePreset>()?.resolve(today),
            None => Self::default(),
        };

        if let Some(start) = parse_bound(start)? {
            range.start = Some(start);
        }
        if let Some(end) = parse_bound(end)? {
            range.end = Some(end);
        }

        if let (Some(start), Some(end)) = (range.start, range.end) {
            if start > end {
                return Err(DashboardError::Validation(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }

        Ok(range)
    }

    /// Upstream query parameters, omitting absent bounds
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("start_date", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end {
            params.push(("end_date", end.format(DATE_FORMAT).to_string()));
        }
        params
    }
}

fn parse_bound(value: Option<&str>) -> DashboardResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                DashboardError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", v))
            }),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Last7Days,
    Last30Days,
    Last3Months,
    LastYear,
    Last3Years,
}

impl RangePreset {
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        let start = match self {
            RangePreset::Last7Days => today.checked_sub_days(Days::new(7)),
            RangePreset::Last30Days => today.checked_sub_days(Days::new(30)),
            RangePreset::Last3Months => today.checked_sub_months(Months::new(3)),
            RangePreset::LastYear => today.checked_sub_months(Months::new(12)),
            RangePreset::Last3Years => today.checked_sub_months(Months::new(36)),
        };
        DateRange::new(start, Some(today))
    }
}

impl FromStr for RangePreset {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(RangePreset::Last7Days),
            "30d" => Ok(RangePreset::Last30Days),
            "3m" => Ok(RangePreset::Last3Months),
            "1y" => Ok(RangePreset::LastYear),
            "3y" => Ok(RangePreset::Last3Years),
            other => Err(DashboardError::Validation(format!(
                "unknown range '{}', expected one of 7d, 30d, 3m, 1y, 3y",
                other
            ))),
        }
    }
}
