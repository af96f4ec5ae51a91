// Dashboard domain model
use super::change::RateChange;
use super::currency::CurrencyDescriptor;
use super::series::ChartView;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: &RateChange) -> Self {
        if change.is_increase { Trend::Up } else { Trend::Down }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: u32,
    /// `value` formatted to `precision` decimals
    pub display: String,
    pub trend: Option<Trend>,
}

impl TileData {
    pub fn new(id: &str, title: String, unit: &str, value: f64, precision: u32) -> Self {
        let mut tile = Self {
            id: id.to_string(),
            title,
            unit: unit.to_string(),
            value,
            precision,
            display: String::new(),
            trend: None,
        };
        tile.display = tile.display_value();
        tile
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Value rounded to the tile's precision, as displayed
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.precision as usize, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub currency_code: String,
    pub tiles: Vec<TileData>,
    pub chart: ChartView,
    /// Options for the currency selector
    pub currencies: Vec<CurrencyDescriptor>,
}

impl Dashboard {
    pub fn new(
        currency_code: String,
        base_currency: &str,
        change: &RateChange,
        currencies: Vec<CurrencyDescriptor>,
        chart: ChartView,
    ) -> Self {
        let trend = Trend::from_change(change);
        let tiles = vec![
            TileData::new(
                "current",
                format!("{}/{} 当前汇率", currency_code, base_currency),
                "",
                change.current,
                4,
            )
            .with_trend(trend),
            TileData::new("change", "24小时变化".to_string(), "%", change.change_pct, 2)
                .with_trend(trend),
            TileData::new(
                "currencies",
                "支持货币数量".to_string(),
                "",
                currencies.len() as f64,
                0,
            ),
        ];

        Self {
            currency_code,
            tiles,
            chart,
            currencies,
        }
    }
}
