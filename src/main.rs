#![allow(non_snake_case)]

mod client;

use ongkir::model;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use ongkir::server::{config::Config, model::app::AppState, router, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let provider = match startup::build_provider_client(&config) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::error!("Failed to build RajaOngkir client: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(provider_url = %config.provider_url, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = router::routes().with_state(AppState { provider });
        router = router.merge(server_routes);

        Ok(router::with_access_gate(router))
    })
}
