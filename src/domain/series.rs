// Series shaping - Turn rate records into chart-ready label/value columns
use super::rate::{Granularity, SeriesPoint};
use serde::Serialize;

pub const NO_DATA_MESSAGE: &str = "暂无数据";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Split points into parallel label/value columns, preserving input order
pub fn shape<P: SeriesPoint>(points: &[P]) -> ShapedSeries {
    let (labels, values): (Vec<String>, Vec<f64>) = points.iter().map(|p| (p.label(), p.value())).unzip();
    ShapedSeries { labels, values }
}

pub fn chart_title(currency_code: &str, base_currency: &str, granularity: Granularity) -> String {
    format!("{}/{} {}", currency_code, base_currency, granularity.trend_label())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisInterval {
    /// Let the renderer thin out labels
    Auto,
    /// Show every label
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisStyle {
    pub label_rotate: u16,
    pub interval: AxisInterval,
}

impl AxisStyle {
    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Daily => Self {
                label_rotate: 45,
                interval: AxisInterval::Auto,
            },
            Granularity::Monthly | Granularity::Yearly => Self {
                label_rotate: 0,
                interval: AxisInterval::All,
            },
        }
    }
}

/// Extremes and mean of a shaped series, drawn as chart markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub max: f64,
    pub max_label: String,
    pub min: f64,
    pub min_label: String,
    pub average: f64,
}

pub fn summarize(series: &ShapedSeries) -> Option<SeriesSummary> {
    if series.values.is_empty() {
        return None;
    }

    let mut max_idx = 0;
    let mut min_idx = 0;
    let mut sum = 0.0;

    for (idx, value) in series.values.iter().enumerate() {
        if *value > series.values[max_idx] {
            max_idx = idx;
        }
        if *value < series.values[min_idx] {
            min_idx = idx;
        }
        sum += value;
    }

    Some(SeriesSummary {
        max: series.values[max_idx],
        max_label: series.labels[max_idx].clone(),
        min: series.values[min_idx],
        min_label: series.labels[min_idx].clone(),
        average: sum / series.values.len() as f64,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    Ready {
        title: String,
        granularity: Granularity,
        axis: AxisStyle,
        labels: Vec<String>,
        values: Vec<f64>,
        summary: SeriesSummary,
    },
    NoData {
        title: String,
        granularity: Granularity,
        message: String,
    },
}

impl ChartView {
    pub fn build<P: SeriesPoint>(
        currency_code: &str,
        base_currency: &str,
        granularity: Granularity,
        points: &[P],
    ) -> Self {
        let title = chart_title(currency_code, base_currency, granularity);
        let shaped = shape(points);

        match summarize(&shaped) {
            Some(summary) => ChartView::Ready {
                title,
                granularity,
                axis: AxisStyle::for_granularity(granularity),
                labels: shaped.labels,
                values: shaped.values,
                summary,
            },
            None => ChartView::NoData {
                title,
                granularity,
                message: NO_DATA_MESSAGE.to_string(),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartView::Ready { title, .. } | ChartView::NoData { title, .. } => title,
        }
    }
}
