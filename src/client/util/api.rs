//! Calls to the shipping API from the browser.
//!
//! Failures are logged with their cause; callers only get the fixed message shown to the user.

use dioxus_logger::tracing;

use crate::model::{
    api::{CHECK_COSTS_FAILED, FETCH_CITIES_FAILED},
    shipping::{CityDto, CostRequestDto, ServiceCostDto},
};

/// Retrieve the provider's city list from `GET /api/cities`
pub async fn fetch_cities() -> Result<Vec<CityDto>, String> {
    with_fixed_message(request_cities().await, FETCH_CITIES_FAILED)
}

/// Request shipping costs from `POST /api/check-costs`
///
/// Returns the services of the first courier in the provider's answer, empty when the
/// provider quoted no courier.
pub async fn check_costs(request: &CostRequestDto) -> Result<Vec<ServiceCostDto>, String> {
    with_fixed_message(request_costs(request).await, CHECK_COSTS_FAILED)
}

/// Logs the cause of a failure and replaces it with `message`
fn with_fixed_message<T>(result: Result<T, String>, message: &'static str) -> Result<T, String> {
    result.map_err(|err| {
        tracing::error!("{}: {}", message, err);
        message.to_string()
    })
}

#[cfg(feature = "web")]
async fn request_cities() -> Result<Vec<CityDto>, String> {
    use reqwasm::http::Request;

    use crate::model::shipping::CitiesResponse;

    let response = Request::get("/api/cities")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let cities = response
                .json::<CitiesResponse>()
                .await
                .map_err(|e| format!("Failed to parse city list: {}", e))?;
            Ok(cities.into_results())
        }
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
async fn request_costs(request: &CostRequestDto) -> Result<Vec<ServiceCostDto>, String> {
    use reqwasm::http::Request;

    use crate::model::shipping::CostsResponse;

    let body =
        serde_json::to_string(request).map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::post("/api/check-costs")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let costs = response
                .json::<CostsResponse>()
                .await
                .map_err(|e| format!("Failed to parse shipping costs: {}", e))?;
            Ok(costs.into_services().unwrap_or_default())
        }
        _ => Err(error_message(response).await),
    }
}

/// Status and server message of a failed response
#[cfg(feature = "web")]
async fn error_message(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    let status = response.status();

    match response.json::<ErrorDto>().await {
        Ok(error_dto) => format!("Request failed with status {}: {}", status, error_dto.error),
        Err(_) => format!("Request failed with status {}", status),
    }
}

#[cfg(not(feature = "web"))]
async fn request_cities() -> Result<Vec<CityDto>, String> {
    Err("the city list can only be fetched from the browser".to_string())
}

#[cfg(not(feature = "web"))]
async fn request_costs(_request: &CostRequestDto) -> Result<Vec<ServiceCostDto>, String> {
    Err("shipping costs can only be checked from the browser".to_string())
}
