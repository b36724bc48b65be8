use dioxus::prelude::*;

use crate::model::shipping::{format_rupiah, ServiceCostDto};

#[component]
pub fn ShippingResults(services: Vec<ServiceCostDto>) -> Element {
    rsx!(
        div {
            class: "card shadow-sm w-full max-w-196",
            div {
                class: "card-body",
                h2 { class: "card-title", "Available Services" }
                if services.is_empty() {
                    p { "No services are available for this route." }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-md",
                            thead {
                                tr {
                                    th { "Service" }
                                    th { "Estimated Days" }
                                    th { "Price" }
                                }
                            }
                            tbody {
                                {services.iter().map(|s| {
                                    let quote = s.quote();
                                    let etd = quote.map(|q| q.etd.clone()).unwrap_or_default();
                                    let price = quote.map(|q| format_rupiah(q.value)).unwrap_or_default();

                                    rsx! {
                                        tr { key: "{s.service}",
                                            td {
                                                p { class: "font-semibold", "{s.service}" }
                                                p { class: "text-xs", "{s.description}" }
                                            }
                                            td { "{etd}" }
                                            td { "{price}" }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}
