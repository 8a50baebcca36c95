use dioxus::prelude::*;

use dirikita_common::activity::{ActivityFeedState, ActivityFilter, ActivityItem};

use super::shared_state::use_shared_state;

#[component]
pub fn ActivityFeed() -> Element {
    let shared_state = use_shared_state();
    let mut feed = use_signal(ActivityFeedState::default);

    let shared = shared_state.read();
    let state = feed.read();
    let view = state.view(&shared.fixtures.activities);
    let latest: Vec<ActivityItem> = view.latest.into_iter().cloned().collect();
    let earlier: Vec<ActivityItem> = view.earlier.into_iter().cloned().collect();
    let active = state.filter;
    drop(state);
    drop(shared);

    rsx! {
        div { class: "activity-feed",
            h2 { "Activity" }
            div { class: "tabs",
                for (filter, label) in ActivityFilter::tabs() {
                    button {
                        key: "{filter}",
                        class: if filter == active { "tab active" } else { "tab" },
                        onclick: move |_| feed.write().select(filter),
                        "{label}"
                    }
                }
            }
            if latest.is_empty() {
                p { class: "empty-state", "Nothing here yet." }
            } else {
                h3 { "Latest" }
                for item in latest {
                    ActivityCard { key: "{item.id}", item }
                }
            }
            if !earlier.is_empty() {
                h3 { "Earlier" }
                for item in earlier {
                    ActivityCard { key: "{item.id}", item }
                }
            }
        }
    }
}

#[component]
fn ActivityCard(item: ActivityItem) -> Element {
    let tone = item.kind.tone().badge_classes();
    let unread = if item.is_read { "" } else { " unread" };

    rsx! {
        div { class: "activity-card{unread}",
            span { class: "badge {tone}", "{item.kind.as_str()}" }
            h4 { "{item.title}" }
            p { "{item.description}" }
            span { class: "timestamp", "{item.timestamp}" }
            if let Some(change) = &item.metadata.price_change {
                span { class: "price-change", "{change}" }
            }
            if let Some(location) = &item.metadata.location {
                span { class: "location", "{location}" }
            }
            if let Some(action) = &item.metadata.action_label {
                button { class: "link", "{action}" }
            }
        }
    }
}
