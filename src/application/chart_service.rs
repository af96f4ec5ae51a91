// Chart service - Use case for the granularity-switchable trend chart
use crate::application::rate_repository::RateRepository;
use crate::domain::date_range::DateRange;
use crate::domain::error::DashboardResult;
use crate::domain::rate::Granularity;
use crate::domain::series::ChartView;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn RateRepository>,
    base_currency: String,
}

impl ChartService {
    pub fn new(repository: Arc<dyn RateRepository>, base_currency: String) -> Self {
        Self {
            repository,
            base_currency,
        }
    }

    pub async fn get_chart(
        &self,
        currency_code: &str,
        granularity: Granularity,
        range: DateRange,
    ) -> DashboardResult<ChartView> {
        let chart = match granularity {
            Granularity::Daily => {
                let series = self.repository.get_daily_rates(currency_code, range).await?;
                ChartView::build(currency_code, &self.base_currency, granularity, &series.points)
            }
            Granularity::Monthly => {
                let series = self.repository.get_monthly_rates(currency_code, range).await?;
                ChartView::build(currency_code, &self.base_currency, granularity, &series.points)
            }
            Granularity::Yearly => {
                let series = self.repository.get_yearly_rates(currency_code, range).await?;
                ChartView::build(currency_code, &self.base_currency, granularity, &series.points)
            }
        };

        tracing::debug!("Built chart '{}'", chart.title());
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeRepository;
    use crate::domain::series::AxisInterval;

    fn repo() -> Arc<FakeRepository> {
        Arc::new(
            FakeRepository::new()
                .with_daily("USD", &[("2024-01-02", 7.2), ("2024-01-01", 7.1)])
                .with_monthly("USD", &[("2024-01", 7.12), ("2024-02", 7.18)])
                .with_yearly("USD", &[("2023", 7.05)]),
        )
    }

    #[tokio::test]
    async fn test_each_granularity_hits_its_endpoint() {
        let repo = repo();
        let service = ChartService::new(repo.clone(), "CNY".to_string());

        for granularity in [Granularity::Daily, Granularity::Monthly, Granularity::Yearly] {
            service
                .get_chart("USD", granularity, DateRange::default())
                .await
                .unwrap();
        }

        let endpoints: Vec<_> = repo.calls().iter().map(|c| c.endpoint).collect();
        assert_eq!(endpoints, vec!["daily", "monthly", "yearly"]);
    }

    #[tokio::test]
    async fn test_monthly_chart() {
        let service = ChartService::new(repo(), "CNY".to_string());
        let chart = service
            .get_chart("USD", Granularity::Monthly, DateRange::default())
            .await
            .unwrap();

        match chart {
            ChartView::Ready {
                title,
                axis,
                labels,
                values,
                summary,
                ..
            } => {
                assert_eq!(title, "USD/CNY 月平均汇率走势");
                assert_eq!(axis.interval, AxisInterval::All);
                assert_eq!(labels, vec!["2024-01", "2024-02"]);
                assert_eq!(values, vec![7.12, 7.18]);
                assert_eq!(summary.max_label, "2024-02");
            }
            other => panic!("expected a chart, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_daily_chart_keeps_upstream_order() {
        let service = ChartService::new(repo(), "CNY".to_string());
        let chart = service
            .get_chart("USD", Granularity::Daily, DateRange::default())
            .await
            .unwrap();
        match chart {
            ChartView::Ready { labels, axis, .. } => {
                assert_eq!(labels, vec!["2024-01-02", "2024-01-01"]);
                assert_eq!(axis.label_rotate, 45);
            }
            other => panic!("expected a chart, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_yearly_is_no_data() {
        let service = ChartService::new(repo(), "CNY".to_string());
        let chart = service
            .get_chart("EUR", Granularity::Yearly, DateRange::default())
            .await
            .unwrap();
        assert!(matches!(chart, ChartView::NoData { .. }));
    }
}
