//! Cost query as relayed to the provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/check-costs` as forwarded to RajaOngkir
///
/// The four fields must be present but their values are passed on untouched, so a numeric
/// city ID or a weight sent as a string reaches the provider exactly as the caller wrote it.
/// The browser form sends a typed `CostRequestDto`, which always fits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostQuery {
    /// Origin city ID
    pub origin: Value,
    /// Destination city ID
    pub destination: Value,
    /// Parcel weight in grams
    pub weight: Value,
    /// Courier code
    pub courier: Value,
}
