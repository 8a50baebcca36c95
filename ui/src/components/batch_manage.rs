use dioxus::prelude::*;

use dirikita_common::analytics::{CropScience, PriceBars};
use dirikita_common::batch::{HarvestReason, StageCard};
use dirikita_common::calendar::format_long;
use dirikita_common::currency::format_kg;
use dirikita_common::produce::stat_or_dash;

use super::shared_state::use_shared_state;

/// Stage swiper and details of the managed batch.
#[component]
pub fn BatchManageView() -> Element {
    let mut shared_state = use_shared_state();

    let shared = shared_state.read();
    let manager = &shared.batch;
    let batch = manager.batch.clone();
    let stages: Vec<StageCard> = manager.stages();
    drop(shared);

    let status_tone = batch.status.tone().badge_classes();
    let planted = format_long(batch.planted_date);
    let harvest = format_long(batch.est_harvest_date);
    let quantity = stat_or_dash(batch.planted_qty_kg.map(format_kg));
    let reason = batch.harvest_reason;
    let expenses = batch.expenses.segments();
    let has_expenses = batch.expenses.total() > 0;
    let trend = batch.analytics.trend_polyline();
    let price_bars = batch.analytics.price_bars();
    let science = batch.science.clone();

    rsx! {
        div { class: "batch-manage",
            div { class: "batch-header",
                h2 { "{batch.crop}" }
                span { class: "batch-id", "{batch.id}" }
                span { class: "badge {status_tone}", "{batch.status.label()}" }
            }

            div { class: "stage-swiper",
                for stage in stages {
                    div {
                        key: "{stage.status}",
                        class: if stage.active { "stage active" } else { "stage" },
                        button {
                            onclick: move |_| {
                                shared_state.write().batch.set_status(stage.status);
                            },
                            "{stage.status.label()}"
                        }
                        if stage.active && stage.shows_harvest_reason {
                            select {
                                value: "{reason.as_str()}",
                                onchange: move |evt| {
                                    if let Ok(reason) = evt.value().parse::<HarvestReason>() {
                                        shared_state.write().batch.set_harvest_reason(reason);
                                    }
                                },
                                for choice in HarvestReason::all().iter().copied() {
                                    option { value: "{choice.as_str()}", "{choice.label()}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "batch-details",
                p { "Planted: {planted}" }
                p { "Estimated harvest: {harvest}" }
                p { "Planted quantity: {quantity}" }
            }

            div { class: "batch-personnel",
                h3 { "Personnel" }
                p { "Planted by: {batch.personnel.planted_by}" }
                p { "Supervisor: {batch.personnel.supervisor}" }
                p { "Harvest crew: {batch.personnel.harvest_crew}" }
            }

            div { class: "batch-inputs",
                h3 { "Inputs" }
                p { "Seed source: {batch.inputs.seed_source}" }
                p { "Seed type: {batch.inputs.seed_type}" }
                p { "Fertilizer: {batch.inputs.fertilizer}" }
            }

            if !trend.is_empty() {
                div { class: "sales-trend",
                    h3 { "Sales Trend" }
                    svg {
                        view_box: "0 0 100 100",
                        preserve_aspect_ratio: "none",
                        polyline {
                            fill: "none",
                            stroke_width: "3",
                            points: "{trend}",
                            class: "stroke-emerald-500",
                        }
                    }
                    div { class: "axis",
                        span { "Planting" }
                        span { "Harvest" }
                        span { "Sold" }
                    }
                }
            }

            if !price_bars.is_empty() {
                PriceCheck { bars: price_bars }
            }

            if has_expenses {
                div { class: "batch-expenses",
                    h3 { "Expenses Breakdown" }
                    div { class: "stacked-bar",
                        for (label, pct, tone) in expenses {
                            div {
                                key: "{label}",
                                class: "segment {tone.fill_class()}",
                                style: "width: {pct}%",
                                title: "{label} {pct}%",
                            }
                        }
                    }
                }
            }

            if let Some(science) = science {
                ScienceNotes { crop: batch.crop.clone(), science }
            }
        }
    }
}

#[component]
fn PriceCheck(bars: Vec<PriceBars>) -> Element {
    rsx! {
        div { class: "price-check",
            h3 { "Price Check" }
            div { class: "legend",
                span { class: "market", "Market" }
                span { class: "mine", "My Price" }
            }
            div { class: "bars",
                for month in bars {
                    div { key: "{month.month}", class: "month",
                        div { class: "pair",
                            div {
                                class: "bar market",
                                style: "height: {month.market_height}%",
                                title: "Market ₱{month.market}",
                            }
                            div {
                                class: "bar mine",
                                style: "height: {month.mine_height}%",
                                title: "Mine ₱{month.mine}",
                            }
                        }
                        span { "{month.month}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ScienceNotes(crop: String, science: CropScience) -> Element {
    rsx! {
        section { class: "science",
            h3 { "Scientific Data: {crop}" }
            p { class: "variety", "{science.variety} · " i { "{science.scientific_name}" } }
            div { class: "conditions",
                span { "pH: {science.soil_ph}" }
                span { "{science.temperature}" }
            }
            p { "{science.description}" }
            if !science.tips.is_empty() {
                p { class: "tips-title", "Pro Tips" }
                ul {
                    for tip in science.tips.iter() {
                        li { "{tip}" }
                    }
                }
            }
        }
    }
}
