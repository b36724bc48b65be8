//! Service layer between the HTTP controllers and the RajaOngkir client.

pub mod shipping;
