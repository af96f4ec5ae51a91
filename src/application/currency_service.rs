// Currency service - Use case for listing supported currencies
use crate::application::rate_repository::RateRepository;
use crate::domain::currency::CurrencyDescriptor;
use crate::domain::error::DashboardResult;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct CurrencyService {
    repository: Arc<dyn RateRepository>,
    names: HashMap<String, String>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn RateRepository>, names: HashMap<String, String>) -> Self {
        let names = names
            .into_iter()
            .map(|(code, name)| (code.to_uppercase(), name))
            .collect();
        Self { repository, names }
    }

    /// Fetched fresh on every call; names the upstream omits come from config
    pub async fn list_currencies(&self) -> DashboardResult<Vec<CurrencyDescriptor>> {
        let currencies = self.repository.list_currencies().await?;
        Ok(currencies
            .into_iter()
            .map(|c| c.with_fallback_name(&self.names))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeRepository;
    use crate::domain::error::DashboardError;

    #[tokio::test]
    async fn test_names_filled_from_config() {
        let repo = Arc::new(FakeRepository::new().with_currencies(&["USD", "THB"]));
        let mut names = HashMap::new();
        names.insert("usd".to_string(), "美元".to_string());
        let service = CurrencyService::new(repo.clone(), names);

        let currencies = service.list_currencies().await.unwrap();
        assert_eq!(currencies[0].display_label(), "USD - 美元");
        assert_eq!(currencies[1].display_label(), "THB");

        // no caching between calls
        service.list_currencies().await.unwrap();
        assert_eq!(repo.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let service = CurrencyService::new(Arc::new(FakeRepository::new().offline()), HashMap::new());
        assert!(matches!(
            service.list_currencies().await,
            Err(DashboardError::Network(_))
        ));
    }
}
