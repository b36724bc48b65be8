use serde::{Deserialize, Serialize};

/// Message returned by `GET /api/cities` whenever the city list cannot be relayed
pub const FETCH_CITIES_FAILED: &str = "Failed to fetch cities";

/// Message returned by `POST /api/check-costs` whenever the cost lookup cannot be relayed
pub const CHECK_COSTS_FAILED: &str = "Failed to check costs";

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
