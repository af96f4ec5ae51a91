// Converter service - Use case for the two-way currency calculator
use crate::application::rate_repository::RateRepository;
use crate::domain::conversion::ConversionState;
use crate::domain::date_range::DateRange;
use crate::domain::error::{DashboardError, DashboardResult};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

#[derive(Clone)]
pub struct ConverterService {
    repository: Arc<dyn RateRepository>,
    base_currency: String,
    default_currency: String,
}

impl ConverterService {
    pub fn new(
        repository: Arc<dyn RateRepository>,
        base_currency: String,
        default_currency: String,
    ) -> Self {
        Self {
            repository,
            base_currency,
            default_currency,
        }
    }

    pub fn initial_state(&self) -> ConversionState {
        ConversionState::new(&self.base_currency, &self.default_currency)
    }

    pub async fn convert(&self, state: ConversionState) -> DashboardResult<ConversionState> {
        self.convert_on(state, Local::now().date_naive()).await
    }

    /// Fetch the foreign currency's rate for `today` and compute the result.
    /// The rate is looked up again on every call.
    pub async fn convert_on(
        &self,
        state: ConversionState,
        today: NaiveDate,
    ) -> DashboardResult<ConversionState> {
        let state = state.normalized();
        state.validate_amount()?;
        if state.base_currency() != self.base_currency {
            return Err(DashboardError::Validation(format!(
                "conversions must involve {}",
                self.base_currency
            )));
        }

        let foreign = state.foreign_currency().to_string();
        let series = self
            .repository
            .get_daily_rates(&foreign, DateRange::day(today))
            .await?;

        let rate = series.points.first().map(|p| p.rate).ok_or_else(|| {
            DashboardError::DataUnavailable(format!("no {} rate published for {}", foreign, today))
        })?;

        tracing::debug!("Converting {} {} with rate {}", state.amount, state.from_currency, rate);
        state.apply_rate(rate)
    }
}
