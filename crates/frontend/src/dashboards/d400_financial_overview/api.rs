use crate::shared::api_utils::api_url;
use contracts::dashboards::d400_financial_overview::{ErrorResponse, FinancialOverviewResponse};
use contracts::shared::indicators::IndicatorCatalogResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d400";

/// Catalogue of indicators and the sets shown on each tab
pub async fn get_indicator_catalog() -> Result<IndicatorCatalogResponse, String> {
    get_json(&format!("{}/indicators/meta", API_BASE)).await
}

/// Recompute the whole dashboard from the current CSV files
pub async fn get_financial_overview() -> Result<FinancialOverviewResponse, String> {
    get_json(&format!("{}/financial_overview", API_BASE)).await
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// The server's own message when the body is an `ErrorResponse`
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(err) => err.message,
            Err(_) => format!("HTTP error: {}", status),
        },
        Err(_) => format!("HTTP error: {}", status),
    }
}
