use dioxus::prelude::*;

use crate::{
    client::{
        store::toast::{notify, ToastKind, ToastState},
        util::api::check_costs,
    },
    model::{
        form::{self, ShippingFormErrors},
        shipping::{CityDto, Courier, ServiceCostDto},
    },
};

/// Origin/destination/weight/courier query
///
/// Each valid submission makes exactly one `POST /api/check-costs` call and hands the quoted
/// services to `on_quote`.
#[component]
pub fn ShippingForm(cities: Vec<CityDto>, on_quote: EventHandler<Vec<ServiceCostDto>>) -> Element {
    let toasts = use_context::<Signal<ToastState>>();
    let mut fields = use_signal(form::ShippingForm::default);
    let mut errors = use_signal(ShippingFormErrors::default);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if loading() {
            return;
        }

        let request = match fields.read().validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        errors.set(ShippingFormErrors::default());
        loading.set(true);

        spawn(async move {
            match check_costs(&request).await {
                Ok(services) => on_quote.call(services),
                Err(message) => notify(toasts, ToastKind::Error, message),
            }

            loading.set(false);
        });
    };

    rsx!(
        form {
            class: "card shadow-sm w-full max-w-196",
            novalidate: true,
            onsubmit,
            div { class: "card-body",
                h2 { class: "card-title", "Check Shipping Costs" }
                fieldset { class: "fieldset",
                    label { class: "label", r#for: "origin", "Origin" }
                    select {
                        id: "origin",
                        class: "select w-full",
                        value: "{fields.read().origin}",
                        onchange: move |evt| fields.write().origin = evt.value(),
                        CityOptions { cities: cities.clone(), placeholder: "Select origin city" }
                    }
                    if let Some(message) = errors.read().origin {
                        p { class: "text-error text-sm", "{message}" }
                    }

                    label { class: "label", r#for: "destination", "Destination" }
                    select {
                        id: "destination",
                        class: "select w-full",
                        value: "{fields.read().destination}",
                        onchange: move |evt| fields.write().destination = evt.value(),
                        CityOptions { cities: cities.clone(), placeholder: "Select destination city" }
                    }
                    if let Some(message) = errors.read().destination {
                        p { class: "text-error text-sm", "{message}" }
                    }

                    label { class: "label", r#for: "weight", "Weight (grams)" }
                    input {
                        id: "weight",
                        class: "input w-full",
                        r#type: "number",
                        min: "1",
                        value: "{fields.read().weight}",
                        oninput: move |evt| fields.write().weight = evt.value(),
                    }
                    if let Some(message) = errors.read().weight {
                        p { class: "text-error text-sm", "{message}" }
                    }

                    label { class: "label", r#for: "courier", "Courier" }
                    select {
                        id: "courier",
                        class: "select w-full",
                        value: "{fields.read().courier}",
                        onchange: move |evt| fields.write().courier = evt.value(),
                        option { value: "", disabled: true, "Select courier" }
                        for courier in Courier::ALL {
                            option { key: "{courier.code()}", value: courier.code(), "{courier.label()}" }
                        }
                    }
                    if let Some(message) = errors.read().courier {
                        p { class: "text-error text-sm", "{message}" }
                    }
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary w-36",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            span { class: "loading loading-spinner" }
                        } else {
                            "Check Costs"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn CityOptions(cities: Vec<CityDto>, placeholder: &'static str) -> Element {
    rsx!(
        option { value: "", disabled: true, "{placeholder}" }
        for city in cities.iter() {
            option { key: "{city.city_id}", value: "{city.city_id}", "{city.city_name}" }
        }
    )
}
