// Change between the two most recent observations of a daily series
use super::rate::RatePoint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateChange {
    pub current: f64,
    pub previous: f64,
    /// Percent change since the prior point, rounded to 2 decimals
    pub change_pct: f64,
    pub is_increase: bool,
}

impl RateChange {
    pub fn neutral() -> Self {
        Self {
            current: 0.0,
            previous: 0.0,
            change_pct: 0.0,
            is_increase: false,
        }
    }

    /// Fewer than two points yields the neutral result instead of an error.
    /// The input slice keeps its order; sorting happens on a copy.
    pub fn calculate(points: &[RatePoint]) -> Self {
        if points.len() < 2 {
            return Self::neutral();
        }

        let mut newest_first: Vec<&RatePoint> = points.iter().collect();
        newest_first.sort_by(|a, b| b.date.cmp(&a.date));

        let current = newest_first[0].rate;
        let previous = newest_first[1].rate;

        Self {
            current,
            previous,
            change_pct: round_to((current - previous) / previous * 100.0, 2),
            is_increase: current > previous,
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
