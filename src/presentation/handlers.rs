// HTTP request handlers
use crate::domain::conversion::{ConversionState, ConversionView};
use crate::domain::currency::require_currency;
use crate::domain::date_range::DateRange;
use crate::domain::error::DashboardResult;
use crate::domain::rate::Granularity;
use crate::infrastructure::http_response::{csv_response, error_response, json_result};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SeqQuery {
    pub seq: Option<u64>,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub currency: Option<String>,
    pub seq: Option<u64>,
}

#[derive(Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Quick pick: 7d, 30d, 3m, 1y or 3y
    pub range: Option<String>,
    pub seq: Option<u64>,
}

impl RangeQuery {
    fn date_range(&self) -> DashboardResult<DateRange> {
        requested_range(&self.start_date, &self.end_date, &self.range)
    }
}

// Kept flat: serde_urlencoded cannot read `seq` as u64 through #[serde(flatten)]
#[derive(Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub granularity: Granularity,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub range: Option<String>,
    pub seq: Option<u64>,
}

impl ChartQuery {
    fn date_range(&self) -> DashboardResult<DateRange> {
        requested_range(&self.start_date, &self.end_date, &self.range)
    }
}

fn requested_range(
    start_date: &Option<String>,
    end_date: &Option<String>,
    range: &Option<String>,
) -> DashboardResult<DateRange> {
    DateRange::resolve(
        start_date.as_deref(),
        end_date.as_deref(),
        range.as_deref(),
        Local::now().date_naive(),
    )
}

#[derive(Deserialize)]
pub struct SelectQuery {
    pub currency: String,
    pub seq: Option<u64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_currencies(
    Query(query): Query<SeqQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    json_result(state.currency_service.list_currencies().await, query.seq)
}

pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = async {
        let code = require_currency(Some(
            query.currency.as_deref().unwrap_or(&state.default_currency),
        ))?;
        state.dashboard_service.get_dashboard(&code).await
    }
    .await;

    json_result(result, query.seq)
}

pub async fn query_rates(
    Path(code): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = async {
        let code = require_currency(Some(&code))?;
        let range = query.date_range()?;
        state.rate_query_service.query(&code, range).await
    }
    .await;

    json_result(result, query.seq)
}

/// Download the queried series as `{code}_rates.csv`
pub async fn export_rates(
    Path(code): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = async {
        let code = require_currency(Some(&code))?;
        let range = query.date_range()?;
        state.rate_query_service.export(&code, range).await
    }
    .await;

    match result {
        Ok(export) => csv_response(export),
        Err(e) => error_response(e, query.seq),
    }
}

pub async fn get_chart(
    Path(code): Path<String>,
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = async {
        let code = require_currency(Some(&code))?;
        let range = query.date_range()?;
        state
            .chart_service
            .get_chart(&code, query.granularity, range)
            .await
    }
    .await;

    json_result(result, query.seq)
}

pub async fn initial_conversion(
    Query(query): Query<SeqQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let view = ConversionView::from(state.converter_service.initial_state());
    json_result(Ok(view), query.seq)
}

/// Fetches today's rate and returns the next calculator state
pub async fn convert(
    Query(query): Query<SeqQuery>,
    State(state): State<Arc<AppState>>,
    Json(conversion): Json<ConversionState>,
) -> Response {
    let result = state
        .converter_service
        .convert(conversion)
        .await
        .map(ConversionView::from);
    json_result(result, query.seq)
}

pub async fn toggle_direction(
    Query(query): Query<SeqQuery>,
    Json(conversion): Json<ConversionState>,
) -> Response {
    json_result(Ok(ConversionView::from(conversion.toggle_direction())), query.seq)
}

pub async fn swap_currencies(
    Query(query): Query<SeqQuery>,
    Json(conversion): Json<ConversionState>,
) -> Response {
    json_result(Ok(ConversionView::from(conversion.swap_currencies())), query.seq)
}

pub async fn select_currency(
    Query(query): Query<SelectQuery>,
    Json(conversion): Json<ConversionState>,
) -> Response {
    let result = conversion
        .select_foreign(&query.currency)
        .map(ConversionView::from);
    json_result(result, query.seq)
}
