// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::converter_service::ConverterService;
use crate::application::currency_service::CurrencyService;
use crate::application::dashboard_service::DashboardService;
use crate::application::rate_query_service::RateQueryService;
use crate::application::rate_repository::RateRepository;
use crate::infrastructure::config::CurrencySettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub currency_service: CurrencyService,
    pub dashboard_service: DashboardService,
    pub rate_query_service: RateQueryService,
    pub chart_service: ChartService,
    pub converter_service: ConverterService,
    pub default_currency: String,
}

impl AppState {
    pub fn new(repository: Arc<dyn RateRepository>, currency: &CurrencySettings) -> Self {
        let currency_service = CurrencyService::new(repository.clone(), currency.names.clone());

        Self {
            dashboard_service: DashboardService::new(
                repository.clone(),
                currency_service.clone(),
                currency.base.clone(),
            ),
            rate_query_service: RateQueryService::new(repository.clone(), currency.base.clone()),
            chart_service: ChartService::new(repository.clone(), currency.base.clone()),
            converter_service: ConverterService::new(
                repository,
                currency.base.clone(),
                currency.default.clone(),
            ),
            currency_service,
            default_currency: currency.default.clone(),
        }
    }
}
