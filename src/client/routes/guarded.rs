use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{LogoutButton, Page, ShippingForm, ShippingResults},
        store::toast::{notify, ToastKind, ToastState},
        util::api::fetch_cities,
    },
    model::shipping::{CityDto, ServiceCostDto},
};

#[component]
pub fn Guarded() -> Element {
    let toasts = use_context::<Signal<ToastState>>();
    let mut cities = use_signal(Vec::<CityDto>::new);
    let mut services = use_signal(|| None::<Vec<ServiceCostDto>>);

    // Load the city list once on mount
    use_effect(move || {
        spawn(async move {
            match fetch_cities().await {
                Ok(list) => cities.set(list),
                Err(message) => notify(toasts, ToastKind::Error, message),
            }
        });
    });

    rsx!(
        Title { "Check Costs | Ongkir" }
        Page { class: "flex flex-col items-center gap-4",
            div { class: "w-full max-w-196 flex justify-end",
                LogoutButton {}
            }
            ShippingForm {
                cities: cities(),
                on_quote: move |quoted: Vec<ServiceCostDto>| services.set(Some(quoted)),
            }
            if let Some(quoted) = services() {
                ShippingResults { services: quoted }
            }
        }
    )
}
