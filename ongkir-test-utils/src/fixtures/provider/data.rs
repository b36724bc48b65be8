//! Sample RajaOngkir payloads.
//!
//! Bodies are kept as raw strings so tests can compare relayed responses byte for byte.

/// City list as returned by `GET /city`
pub fn city_list_body() -> String {
    r#"{"rajaongkir":{"query":[],"status":{"code":200,"description":"OK"},"results":[{"city_id":"23","province_id":"9","province":"Jawa Barat","type":"Kota","city_name":"Bandung","postal_code":"40111"},{"city_id":"114","province_id":"1","province":"Bali","type":"Kota","city_name":"Denpasar","postal_code":"80227"},{"city_id":"501","province_id":"5","province":"DI Yogyakarta","type":"Kota","city_name":"Yogyakarta","postal_code":"55111"}]}}"#
        .to_string()
}

/// Cost quote as returned by `POST /cost` for JNE from Yogyakarta to Denpasar
pub fn cost_body() -> String {
    r#"{"rajaongkir":{"query":{"origin":"501","destination":"114","weight":1700,"courier":"jne"},"status":{"code":200,"description":"OK"},"results":[{"code":"jne","name":"Jalur Nugraha Ekakurir (JNE)","costs":[{"service":"OKE","description":"Ongkos Kirim Ekonomis","cost":[{"value":38000,"etd":"4-5","note":""}]},{"service":"REG","description":"Layanan Reguler","cost":[{"value":44000,"etd":"2-3","note":""}]}]}]}}"#
        .to_string()
}

/// Error payload RajaOngkir sends along with a non-success status
pub fn provider_error_body(status: usize, description: &str) -> String {
    serde_json::json!({
        "rajaongkir": {
            "status": { "code": status, "description": description }
        }
    })
    .to_string()
}
