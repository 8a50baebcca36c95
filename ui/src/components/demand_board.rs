use dioxus::prelude::*;

use dirikita_common::calendar::{format_month, parse_month, today};
use dirikita_common::currency::format_kg;
use dirikita_common::demand::{known_locations, DemandBoardState, PledgeMode, ServeLocation};

use super::shared_state::use_shared_state;

/// One rendered card, detached from the fixture borrow.
#[derive(Clone, PartialEq)]
struct CardView {
    id: String,
    name: String,
    image: String,
    status_label: &'static str,
    status_classes: &'static str,
    location: String,
    suggested: String,
    my_pledge: String,
    pledged: String,
    total: String,
    percent: u64,
    fill_class: &'static str,
    oversupplied: bool,
    action_label: &'static str,
    action_enabled: bool,
}

#[component]
pub fn DemandBoard() -> Element {
    let shared_state = use_shared_state();
    let now = today();
    let mut board = use_signal(move || DemandBoardState::new(now));

    let shared = shared_state.read();
    let state = board.read();
    let items = &shared.fixtures.demand;
    let mode = state.pledge_mode(now);
    let cards: Vec<CardView> = state
        .cards(items, now)
        .into_iter()
        .map(|card| CardView {
            id: card.item.id.clone(),
            name: card.item.name.clone(),
            image: card.item.image.clone(),
            status_label: card.item.status.label(),
            status_classes: card.item.status.tone().badge_classes(),
            location: card.location.location.clone(),
            suggested: format_kg(card.location.suggested_amount),
            my_pledge: format_kg(card.location.my_pledge),
            pledged: format_kg(card.saturation.pledged),
            total: format_kg(card.saturation.ceiling),
            percent: card.saturation.percent(),
            fill_class: card.saturation.band().tone().fill_class(),
            oversupplied: card.saturation.is_oversupplied(),
            action_label: card.action.label,
            action_enabled: card.action.enabled,
        })
        .collect();
    let active = state.active(items).map(|item| item.name.clone());
    let locations = known_locations(items);
    let search = state.search.clone();
    let serve_value = match &state.serve_location {
        ServeLocation::All => "all".to_string(),
        ServeLocation::Named(name) => name.clone(),
    };
    let month = format_month(state.month);
    let expanded = state.filter_expanded;
    drop(state);
    drop(shared);

    let mode_classes = mode.tone().badge_classes();

    rsx! {
        div { class: "demand-board",
            div { class: "board-header",
                h2 { "Market Demand" }
                span { class: "badge {mode_classes}", "{mode.label()}" }
                button {
                    onclick: move |_| board.write().toggle_filters(),
                    if expanded { "Hide Filters" } else { "Filters" }
                }
            }

            if expanded {
                div { class: "board-filters",
                    input {
                        r#type: "search",
                        placeholder: "Search produce...",
                        value: "{search}",
                        oninput: move |evt| board.write().search = evt.value(),
                    }
                    select {
                        value: "{serve_value}",
                        onchange: move |evt| {
                            let serve: ServeLocation = evt.value().parse().unwrap_or_default();
                            board.write().serve_location = serve;
                        },
                        option { value: "all", "All Locations" }
                        for name in locations {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                    input {
                        r#type: "month",
                        value: "{month}",
                        onchange: move |evt| match parse_month(&evt.value()) {
                            Ok(month) => board.write().set_month(month),
                            Err(e) => tracing::debug!("ignoring month input: {e}"),
                        },
                    }
                }
            }

            if mode == PledgeMode::FuturePledge {
                p { class: "mode-note",
                    "Pledging for {month}. Buyers reserve supply against your pledge."
                }
            }

            if cards.is_empty() {
                p { class: "empty-state", "No demand listed for that location." }
            }
            for card in cards {
                DemandCardView { key: "{card.id}", card, board }
            }

            if let Some(name) = active {
                div { class: "sheet demand-actions",
                    h3 { "{name}" }
                    p { "Pledges are matched with buyers in your serve location." }
                    button {
                        onclick: move |_| board.write().close_actions(),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn DemandCardView(card: CardView, board: Signal<DemandBoardState>) -> Element {
    let mut board = board;
    let id = card.id.clone();
    let bar_style = format!("width: {}%", card.percent);

    rsx! {
        div { class: "demand-card",
            img { src: "{card.image}", alt: "{card.name}" }
            div { class: "demand-card-body",
                h3 { "{card.name}" }
                span { class: "badge {card.status_classes}", "{card.status_label}" }
                p { class: "location", "{card.location}" }
                div { class: "saturation",
                    div { class: "bar",
                        div { class: "fill {card.fill_class}", style: "{bar_style}" }
                    }
                    span { "{card.percent}% saturated" }
                    if card.oversupplied {
                        span { class: "warning", "Oversupplied" }
                    }
                }
                p { class: "volumes", "{card.pledged} pledged of {card.total}" }
                p { class: "suggested", "Suggested pledge: {card.suggested} · your last: {card.my_pledge}" }
                button {
                    class: "primary",
                    disabled: !card.action_enabled,
                    onclick: move |_| board.write().open_actions(&id),
                    "{card.action_label}"
                }
            }
        }
    }
}
