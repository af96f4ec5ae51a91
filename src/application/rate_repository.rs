// Repository trait for exchange rate data access
use crate::domain::currency::CurrencyDescriptor;
use crate::domain::date_range::DateRange;
use crate::domain::error::DashboardResult;
use crate::domain::rate::{AggregatedSeries, DailySeries};
use async_trait::async_trait;

/// Read-only access to the rate API. Every call is a single upstream
/// request: no retries and no caching.
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// All supported currencies, whichever response shape the upstream used
    async fn list_currencies(&self) -> DashboardResult<Vec<CurrencyDescriptor>>;

    async fn get_daily_rates(&self, currency_code: &str, range: DateRange) -> DashboardResult<DailySeries>;

    async fn get_monthly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries>;

    async fn get_yearly_rates(
        &self,
        currency_code: &str,
        range: DateRange,
    ) -> DashboardResult<AggregatedSeries>;
}
