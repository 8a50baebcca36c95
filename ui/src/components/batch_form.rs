use chrono::Datelike;
use dioxus::prelude::*;

use dirikita_common::batch::{BatchForm, SeedUnit};
use dirikita_common::calendar::{format_long, parse_date, today};
use dirikita_common::produce::stat_or_dash;

use super::app::Route;
use super::shared_state::use_shared_state;

/// "Register Planting" page.
#[component]
pub fn BatchFormView() -> Element {
    let mut shared_state = use_shared_state();
    let nav = use_navigator();
    let home = shared_state.read().fixtures.home_location.clone();
    let mut form = use_signal(move || BatchForm::new(home));
    let mut error = use_signal(|| None::<String>);

    let crops = shared_state.read().fixtures.crops.clone();
    let state = form.read();
    let selected_crop = state.crop.as_ref().map(|c| c.id.clone());
    let est_harvest = stat_or_dash(state.est_harvest_date().map(format_long));
    let planted = state
        .planted_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let location = state.location.clone();
    let plot_name = state.plot_name.clone();
    let land_area = state.land_area.clone();
    let seed_variety = state.seed_variety.clone();
    let seed_source = state.seed_source.clone();
    let seed_quantity = state.seed_quantity.clone();
    let seed_unit = state.seed_unit;
    let base_fertilizer = state.base_fertilizer.clone();
    let personnel = state.personnel.clone();
    drop(state);

    let submit = move |_| {
        let id = shared_state.read().next_batch_id(today().year());
        match form.read().submit(id) {
            Ok(batch) => {
                tracing::info!(batch = %batch.id, crop = %batch.crop, "planting registered");
                shared_state.write().register(batch);
                nav.push(Route::ManageBatch {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "batch-form",
            h2 { "Register Planting" }

            div { class: "crop-picker",
                for crop in crops {
                    button {
                        key: "{crop.id}",
                        class: if selected_crop.as_deref() == Some(crop.id.as_str()) { "crop active" } else { "crop" },
                        onclick: {
                            let crop = crop.clone();
                            move |_| {
                                form.write().select_crop(&crop);
                                error.set(None);
                            }
                        },
                        img { src: "{crop.image}", alt: "{crop.name}" }
                        span { "{crop.name}" }
                        span { class: "days", "{crop.days_to_harvest} days" }
                    }
                }
            }

            div { class: "form-group",
                label { "Date planted:" }
                input {
                    r#type: "date",
                    value: "{planted}",
                    oninput: move |evt| {
                        let date = parse_date(&evt.value()).ok();
                        form.write().set_planted_date(date);
                        error.set(None);
                    },
                }
                p { class: "projection", "Estimated harvest: {est_harvest}" }
            }

            div { class: "form-group",
                label { "Location:" }
                input {
                    r#type: "text",
                    value: "{location}",
                    oninput: move |evt| form.write().location = evt.value(),
                }
            }
            div { class: "form-group",
                label { "Plot name:" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Plot A-4",
                    value: "{plot_name}",
                    oninput: move |evt| form.write().plot_name = evt.value(),
                }
            }
            div { class: "form-group",
                label { "Land area:" }
                input {
                    r#type: "text",
                    placeholder: "e.g. 0.5 ha",
                    value: "{land_area}",
                    oninput: move |evt| form.write().land_area = evt.value(),
                }
            }
            div { class: "form-group",
                label { "Seed variety:" }
                input {
                    r#type: "text",
                    value: "{seed_variety}",
                    oninput: move |evt| form.write().seed_variety = evt.value(),
                }
            }
            div { class: "form-group",
                label { "Seed source:" }
                input {
                    r#type: "text",
                    value: "{seed_source}",
                    oninput: move |evt| form.write().seed_source = evt.value(),
                }
            }
            div { class: "form-group seed-quantity",
                label { "Seed quantity:" }
                input {
                    r#type: "text",
                    value: "{seed_quantity}",
                    oninput: move |evt| form.write().seed_quantity = evt.value(),
                }
                select {
                    value: "{seed_unit.as_str()}",
                    onchange: move |evt| {
                        if let Ok(unit) = evt.value().parse::<SeedUnit>() {
                            form.write().seed_unit = unit;
                        }
                    },
                    for unit in SeedUnit::all().iter().copied() {
                        option { value: "{unit.as_str()}", "{unit.as_str()}" }
                    }
                }
            }
            div { class: "form-group",
                label { "Base fertilizer:" }
                input {
                    r#type: "text",
                    value: "{base_fertilizer}",
                    oninput: move |evt| form.write().base_fertilizer = evt.value(),
                }
            }
            div { class: "form-group",
                label { "Personnel:" }
                input {
                    r#type: "text",
                    value: "{personnel}",
                    oninput: move |evt| form.write().personnel = evt.value(),
                }
            }

            if let Some(err) = error.read().as_ref() {
                span { class: "field-error", "{err}" }
            }
            button { class: "primary", onclick: submit, "Register Batch" }
        }
    }
}
