use dioxus::prelude::*;

use dirikita_common::currency::format_kg;
use dirikita_common::produce::{
    stat_or_dash, total_revenue, ProduceItem, ProduceListState, ProduceView,
};

use super::app::Route;
use super::shared_state::use_shared_state;

#[component]
pub fn ProduceList() -> Element {
    let shared_state = use_shared_state();
    let nav = use_navigator();
    let mut list = use_signal(ProduceListState::default);

    let shared = shared_state.read();
    let state = list.read();
    let items: Vec<ProduceItem> = state
        .visible(&shared.fixtures.produce)
        .into_iter()
        .cloned()
        .collect();
    let revenue = total_revenue(&shared.fixtures.produce);
    let view = state.view;
    drop(state);
    drop(shared);

    rsx! {
        div { class: "produce-view",
            div { class: "produce-header",
                h2 { "My Produce" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::NewBatch {}); },
                    "+ Register Planting"
                }
            }
            div { class: "tabs",
                button {
                    class: if view == ProduceView::Active { "tab active" } else { "tab" },
                    onclick: move |_| list.write().select(ProduceView::Active),
                    "Active"
                }
                button {
                    class: if view == ProduceView::History { "tab active" } else { "tab" },
                    onclick: move |_| list.write().select(ProduceView::History),
                    "History"
                }
            }
            if view == ProduceView::History {
                p { class: "revenue", "Total revenue: {revenue}" }
            }
            if items.is_empty() {
                p { class: "empty-state", "Nothing to show." }
            }
            for item in items {
                ProduceCard { key: "{item.id}", item }
            }
        }
    }
}

#[component]
fn ProduceCard(item: ProduceItem) -> Element {
    let nav = use_navigator();
    let tone = item.status.tone().badge_classes();
    let quantity = stat_or_dash(item.display_quantity().map(format_kg));
    let price = stat_or_dash(item.display_price());
    let date_label = if item.is_sold() {
        item.sold_date.clone().map(|d| format!("Sold {d}"))
    } else {
        item.planted_date.clone().map(|d| format!("Planted {d}"))
    };

    rsx! {
        div { class: "produce-card",
            onclick: move |_| { nav.push(Route::ManageBatch {}); },
            h3 { "{item.name}" }
            span { class: "badge {tone}", "{item.status.label()}" }
            div { class: "stats",
                span { "{quantity}" }
                span { "{price}/kg" }
            }
            if let Some(days) = item.days_until_harvest {
                p { class: "harvest-countdown", "Harvest in {days} days" }
            }
            if let Some(label) = date_label {
                p { class: "date", "{label}" }
            }
        }
    }
}
