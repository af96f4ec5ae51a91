// Rate query service - Use case for the rate table and its CSV download
use crate::application::rate_repository::RateRepository;
use crate::domain::csv_export::{self, CsvExport};
use crate::domain::date_range::DateRange;
use crate::domain::error::DashboardResult;
use crate::domain::table::RateTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct RateQueryService {
    repository: Arc<dyn RateRepository>,
    base_currency: String,
}

impl RateQueryService {
    pub fn new(repository: Arc<dyn RateRepository>, base_currency: String) -> Self {
        Self {
            repository,
            base_currency,
        }
    }

    pub async fn query(&self, currency_code: &str, range: DateRange) -> DashboardResult<RateTable> {
        let series = self.repository.get_daily_rates(currency_code, range).await?;
        Ok(RateTable::from_series(&series, &self.base_currency))
    }

    /// Re-fetches the series; None when there is nothing to download
    pub async fn export(&self, currency_code: &str, range: DateRange) -> DashboardResult<Option<CsvExport>> {
        let series = self.repository.get_daily_rates(currency_code, range).await?;
        let export = csv_export::export(&series)?;

        match &export {
            Some(file) => tracing::info!("Exporting {} ({} bytes)", file.filename, file.body.len()),
            None => tracing::debug!("Nothing to export for {}", currency_code),
        }
        Ok(export)
    }
}
