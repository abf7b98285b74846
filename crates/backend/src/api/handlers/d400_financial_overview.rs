use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d400_financial_overview::{ErrorResponse, FinancialOverviewResponse};
use contracts::shared::indicators::IndicatorCatalogResponse;

use crate::dashboards::d400_financial_overview::{service, DashboardError};
use crate::routes::AppState;
use crate::shared::indicators::metadata;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// GET /api/d400/financial_overview
///
/// Re-reads both CSV sources on every call; the refresh button relies on that.
pub async fn get_financial_overview(
    State(state): State<AppState>,
) -> Result<Json<FinancialOverviewResponse>, ApiError> {
    tracing::info!("D400 Dashboard: Computing financial overview");

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || service::get_financial_overview(&config))
        .await
        .map_err(|e| {
            tracing::error!("D400 Dashboard: Overview task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    kind: "internal".into(),
                    message: e.to_string(),
                }),
            )
        })?;

    match result {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: Returning {} indicators, {} sales categories, {} expense categories",
                response.indicators.len(),
                response.metrics.sales_by_category.len(),
                response.metrics.expenses_by_category.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to compute overview: {}", e);
            Err(error_response(&e))
        }
    }
}

/// GET /api/d400/indicators/meta
///
/// Returns the catalogue of indicators and the sets shown on each tab.
pub async fn get_indicator_catalog(State(state): State<AppState>) -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog(&state.config.display.currency))
}

fn error_status(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::SourceNotFound(_) => StatusCode::NOT_FOUND,
        DashboardError::Csv { .. } | DashboardError::InvalidDate { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DashboardError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &DashboardError) -> ApiError {
    (
        error_status(error),
        Json(ErrorResponse {
            kind: error.kind().to_string(),
            message: error.to_string(),
        }),
    )
}
