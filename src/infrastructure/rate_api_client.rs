// Rate API client - reqwest adapter for the upstream rate service
use crate::application::rate_repository::RateRepository;
use crate::domain::currency::CurrencyDescriptor;
use crate::domain::date_range::DateRange;
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::rate::{
    AggregatedRatePoint, AggregatedSeries, DailySeries, Granularity, RatePoint, RateSeries,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct RateApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// The currency list arrives either enveloped under `data` or, from older
/// deployments, under `currencies`. Both normalize to one list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrencyListResponse {
    Enveloped {
        #[serde(default)]
        success: Option<bool>,
        data: Vec<CurrencyDescriptor>,
        #[serde(default)]
        error: Option<String>,
    },
    Legacy {
        currencies: Vec<CurrencyDescriptor>,
    },
}

impl CurrencyListResponse {
    fn into_currencies(self) -> DashboardResult<Vec<CurrencyDescriptor>> {
        let currencies = match self {
            CurrencyListResponse::Enveloped {
                success: Some(false),
                error,
                ..
            } => return Err(rejected(error)),
            CurrencyListResponse::Enveloped { data, .. } => data,
            CurrencyListResponse::Legacy { currencies } => currencies,
        };
        Ok(currencies
            .into_iter()
            .map(|c| CurrencyDescriptor::new(c.code, c.name))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SeriesEnvelope {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    data: Option<SeriesPayload>,
    #[serde(default)]
    error: Option<String>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SeriesPayload {
    #[serde(default)]
    currency_code: Option<String>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    /// Holds `rates`, `monthly_rates` or `yearly_rates`
    #[serde(flatten)]
    records: Map<String, Value>,
}

impl SeriesPayload {
    fn records(&self, granularity: Granularity) -> impl Iterator<Item = &Map<String, Value>> {
        self.records
            .get(granularity.payload_key())
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    fn into_series<P>(self, requested_code: &str, granularity: Granularity, points: Vec<P>) -> RateSeries<P> {
        let mut series = RateSeries::new(
            self.currency_code.unwrap_or_else(|| requested_code.to_string()),
            granularity,
            points,
        );
        series.start_date = self.start_date;
        series.end_date = self.end_date;
        series
    }
}

fn rejected(error: Option<String>) -> DashboardError {
    DashboardError::Network(format!(
        "upstream rejected the request: {}",
        error.unwrap_or_else(|| "no reason given".to_string())
    ))
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        DashboardError::Network(e.to_string())
    }
}

impl RateApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn rates_path(currency_code: &str, granularity: Granularity) -> String {
        let code = urlencoding::encode(currency_code);
        match granularity {
            Granularity::Daily => format!("rates/{}", code),
            Granularity::Monthly => format!("rates/{}/monthly", code),
            Granularity::Yearly => format!("rates/{}/yearly", code),
        }
    }

    /// Single GET; non-2xx responses become network errors
    async fn get_json<T: DeserializeOwned>(&self, path: &str, range: DateRange) -> DashboardResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Sending GET to {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&range.query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Rate API request to {} failed with status {}", url, status);
            return Err(DashboardError::Network(format!(
                "rate API returned {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            DashboardError::Network(format!("failed to parse rate API response: {}", e))
        })
    }

    async fn fetch_payload(
        &self,
        currency_code: &str,
        granularity: Granularity,
        range: DateRange,
    ) -> DashboardResult<SeriesPayload> {
        let path = Self::rates_path(currency_code, granularity);
        let envelope: SeriesEnvelope = self.get_json(&path, range).await?;

        if !envelope.success {
            return Err(rejected(envelope.error));
        }

        Ok(envelope.data.unwrap_or(SeriesPayload {
            currency_code: None,
            start_date: range.start,
            end_date: range.end,
            records: Map::new(),
        }))
    }

    async fn fetch_aggregated(
        &self,
        currency_code: &str,
        granularity: Granularity,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries> {
        let payload = self.fetch_payload(currency_code, granularity, range).await?;
        let points: Vec<AggregatedRatePoint> = payload
            .records(granularity)
            .filter_map(|record| {
                let point = AggregatedRatePoint::from_record(record, granularity);
                if point.is_none() {
                    tracing::warn!("Skipping malformed {:?} record for {}", granularity, currency_code);
                }
                point
            })
            .collect();
        Ok(payload.into_series(currency_code, granularity, points))
    }
}

#[async_trait]
impl RateRepository for RateApiClient {
    async fn list_currencies(&self) -> DashboardResult<Vec<CurrencyDescriptor>> {
        let response: CurrencyListResponse = self.get_json("currencies", DateRange::default()).await?;
        response.into_currencies()
    }

    async fn get_daily_rates(&self, currency_code: &str, range: DateRange) -> DashboardResult<DailySeries> {
        let payload = self.fetch_payload(currency_code, Granularity::Daily, range).await?;
        let fallback_code = payload.currency_code.clone().unwrap_or_else(|| currency_code.to_string());
        let points: Vec<RatePoint> = payload
            .records(Granularity::Daily)
            .filter_map(|record| {
                let point = RatePoint::from_record(record, &fallback_code);
                if point.is_none() {
                    tracing::warn!("Skipping malformed daily record for {}", currency_code);
                }
                point
            })
            .collect();
        Ok(payload.into_series(currency_code, Granularity::Daily, points))
    }

    async fn get_monthly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries> {
        self.fetch_aggregated(currency_code, Granularity::Monthly, range).await
    }

    async fn get_yearly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries> {
        self.fetch_aggregated(currency_code, Granularity::Yearly, range).await
    }
}
