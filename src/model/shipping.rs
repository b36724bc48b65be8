use serde::{Deserialize, Serialize};

/// Body of `POST /api/check-costs`, forwarded unchanged to the provider's cost lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CostRequestDto {
    /// Provider city ID of the origin
    pub origin: String,
    /// Provider city ID of the destination
    pub destination: String,
    /// Parcel weight in grams
    pub weight: u32,
    /// Courier code, e.g. `jne`
    pub courier: String,
}

/// Provider response wrapper, every RajaOngkir payload is nested under `rajaongkir.results`
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderEnvelope<T> {
    pub rajaongkir: ProviderPayload<T>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProviderPayload<T> {
    pub results: T,
}

impl<T> ProviderEnvelope<T> {
    pub fn into_results(self) -> T {
        self.rajaongkir.results
    }
}

pub type CitiesResponse = ProviderEnvelope<Vec<CityDto>>;
pub type CostsResponse = ProviderEnvelope<Vec<CourierCostsDto>>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CityDto {
    pub city_id: String,
    pub city_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CourierCostsDto {
    pub code: String,
    pub name: String,
    pub costs: Vec<ServiceCostDto>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceCostDto {
    pub service: String,
    #[serde(default)]
    pub description: String,
    pub cost: Vec<CostDetailDto>,
}

impl ServiceCostDto {
    /// The quote shown for a service, the provider lists the primary quote first
    pub fn quote(&self) -> Option<&CostDetailDto> {
        self.cost.first()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CostDetailDto {
    pub value: u64,
    /// Estimated delivery time in days, e.g. `"2-3"`
    pub etd: String,
    #[serde(default)]
    pub note: String,
}

impl CostsResponse {
    /// Services of the first courier in the response
    ///
    /// Returns `None` when the provider returned no courier at all.
    pub fn into_services(self) -> Option<Vec<ServiceCostDto>> {
        self.into_results()
            .into_iter()
            .next()
            .map(|courier| courier.costs)
    }
}

/// Couriers offered by the shipping query form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Courier {
    Jne,
    Pos,
    Tiki,
}

impl Courier {
    pub const ALL: [Courier; 3] = [Courier::Jne, Courier::Pos, Courier::Tiki];

    /// Code understood by the provider's cost lookup
    pub fn code(&self) -> &'static str {
        match self {
            Courier::Jne => "jne",
            Courier::Pos => "pos",
            Courier::Tiki => "tiki",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Courier::Jne => "JNE",
            Courier::Pos => "POS Indonesia",
            Courier::Tiki => "TIKI",
        }
    }
}

/// Formats a price in rupiah with `.` as the thousands separator, e.g. `Rp15.000`
pub fn format_rupiah(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("Rp{}", grouped)
}
