// Dashboard service - Use case for the landing page tiles and trend chart
use crate::application::currency_service::CurrencyService;
use crate::application::rate_repository::RateRepository;
use crate::domain::change::RateChange;
use crate::domain::dashboard::Dashboard;
use crate::domain::date_range::DateRange;
use crate::domain::error::DashboardResult;
use crate::domain::rate::Granularity;
use crate::domain::series::ChartView;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn RateRepository>,
    currency_service: CurrencyService,
    base_currency: String,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn RateRepository>,
        currency_service: CurrencyService,
        base_currency: String,
    ) -> Self {
        Self {
            repository,
            currency_service,
            base_currency,
        }
    }

    pub async fn get_dashboard(&self, currency_code: &str) -> DashboardResult<Dashboard> {
        // Currencies first, then the selected series, one request at a time
        let currencies = self.currency_service.list_currencies().await?;

        // The upstream picks the default range
        let series = self
            .repository
            .get_daily_rates(currency_code, DateRange::default())
            .await?;

        tracing::debug!(
            "Dashboard for {}: {} daily points, {} currencies",
            currency_code,
            series.points.len(),
            currencies.len()
        );

        let change = RateChange::calculate(&series.points);
        let chart = ChartView::build(
            currency_code,
            &self.base_currency,
            Granularity::Daily,
            &series.points,
        );

        Ok(Dashboard::new(
            currency_code.to_string(),
            &self.base_currency,
            &change,
            currencies,
            chart,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeRepository;
    use crate::domain::error::DashboardError;
    use std::collections::HashMap;

    fn service(repo: Arc<FakeRepository>) -> DashboardService {
        let currency_service = CurrencyService::new(repo.clone(), HashMap::new());
        DashboardService::new(repo, currency_service, "CNY".to_string())
    }

    #[tokio::test]
    async fn test_dashboard_tiles_and_chart() {
        let repo = Arc::new(
            FakeRepository::new()
                .with_currencies(&["USD", "EUR", "JPY"])
                .with_daily("USD", &[("2024-01-01", 7.0), ("2024-01-02", 7.2)]),
        );
        let dashboard = service(repo.clone()).get_dashboard("USD").await.unwrap();

        assert_eq!(dashboard.tiles[0].value, 7.2);
        assert_eq!(dashboard.tiles[1].value, 2.86);
        assert_eq!(dashboard.tiles[2].value, 3.0);
        assert_eq!(dashboard.chart.title(), "USD/CNY 日汇率走势");
        match &dashboard.chart {
            ChartView::Ready { labels, .. } => assert_eq!(labels, &["2024-01-01", "2024-01-02"]),
            other => panic!("expected a chart, got {:?}", other),
        }

        let calls = repo.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].endpoint, "currencies");
        assert_eq!(calls[1].endpoint, "daily");
        assert_eq!(calls[1].range, DateRange::default());
    }

    #[tokio::test]
    async fn test_sparse_series_gives_neutral_tiles() {
        let repo = Arc::new(
            FakeRepository::new()
                .with_currencies(&["USD"])
                .with_daily("USD", &[("2024-01-01", 7.0)]),
        );
        let dashboard = service(repo).get_dashboard("USD").await.unwrap();
        assert_eq!(dashboard.tiles[0].value, 0.0);
        assert_eq!(dashboard.tiles[1].value, 0.0);
    }

    #[tokio::test]
    async fn test_unknown_currency_renders_no_data() {
        let repo = Arc::new(FakeRepository::new().with_currencies(&["USD"]));
        let dashboard = service(repo).get_dashboard("XYZ").await.unwrap();
        assert!(matches!(dashboard.chart, ChartView::NoData { .. }));
    }

    #[tokio::test]
    async fn test_offline_upstream() {
        let repo = Arc::new(FakeRepository::new().offline());
        assert!(matches!(
            service(repo).get_dashboard("USD").await,
            Err(DashboardError::Network(_))
        ));
    }
}
