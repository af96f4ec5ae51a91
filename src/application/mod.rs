// Application layer - Use cases, one per dashboard view
pub mod chart_service;
pub mod converter_service;
pub mod currency_service;
pub mod dashboard_service;
pub mod rate_query_service;
pub mod rate_repository;

#[cfg(test)]
pub mod testing;
