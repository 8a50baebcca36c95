use dioxus::prelude::*;

use dirikita_common::currency::{format_kg, group_thousands};
use dirikita_common::feedback::{
    DonationCampaign, FeedbackItem, RatingSummary, ThankYouState, ThankYouTab,
};

use super::shared_state::use_shared_state;

/// "Impact & Rewards": customer thank-you notes and donation drives.
#[component]
pub fn ThankYouView() -> Element {
    let shared_state = use_shared_state();
    let mut tabs = use_signal(ThankYouState::default);

    let shared = shared_state.read();
    let stats = shared.fixtures.impact;
    let ratings = RatingSummary::of(&shared.fixtures.feedback);
    let feedback = shared.fixtures.feedback.clone();
    let campaigns = shared.fixtures.campaigns.clone();
    drop(shared);

    let tab = tabs.read().tab;
    let points = group_thousands(stats.ani_points);
    let families = group_thousands(stats.families_fed);
    let donated = format_kg(stats.donated_kg);
    let average = ratings
        .average
        .map(|avg| format!("{avg:.1}★ from {} reviews", ratings.count))
        .unwrap_or_else(|| "No reviews yet".to_string());

    rsx! {
        div { class: "thank-you",
            div { class: "impact-stats",
                div { span { class: "value", "{points}" } span { "Ani Points" } }
                div { span { class: "value", "{families}" } span { "Families fed" } }
                div { span { class: "value", "{donated}" } span { "Donated" } }
            }
            div { class: "tabs",
                button {
                    class: if tab == ThankYouTab::Feedback { "tab active" } else { "tab" },
                    onclick: move |_| tabs.write().select(ThankYouTab::Feedback),
                    "Thank You Notes"
                }
                button {
                    class: if tab == ThankYouTab::Donate { "tab active" } else { "tab" },
                    onclick: move |_| tabs.write().select(ThankYouTab::Donate),
                    "Donate Surplus"
                }
            }
            {match tab {
                ThankYouTab::Feedback => rsx! {
                    p { class: "rating-summary", "{average}" }
                    for item in feedback {
                        FeedbackCard { key: "{item.id}", item }
                    }
                },
                ThankYouTab::Donate => rsx! {
                    for campaign in campaigns {
                        CampaignCard { key: "{campaign.id}", campaign }
                    }
                },
            }}
        }
    }
}

#[component]
fn FeedbackCard(item: FeedbackItem) -> Element {
    let stars = "★".repeat(item.rating.min(5) as usize);

    rsx! {
        div { class: "feedback-card",
            if item.kind.has_media() {
                if let Some(url) = &item.media_url {
                    img { class: "media", src: "{url}" }
                } else {
                    div { class: "media placeholder" }
                }
            }
            p { class: "message", "\"{item.message}\"" }
            span { class: "stars", "{stars}" }
            p { class: "meta", "{item.customer_location} · {item.date}" }
            p { class: "trace", "{item.product_name} · {item.batch_id}" }
        }
    }
}

#[component]
fn CampaignCard(campaign: DonationCampaign) -> Element {
    let tone = campaign.urgency.tone();
    let progress = campaign.progress();

    rsx! {
        div { class: "campaign-card",
            span { class: "badge {tone.badge_classes()}", "{campaign.target}" }
            h4 { "{campaign.title}" }
            p { "{campaign.beneficiary}" }
            div { class: "bar",
                div { class: "fill {tone.fill_class()}", style: "width: {progress}%" }
            }
            span { "{progress}% collected" }
            button { class: "primary", "Donate Surplus" }
        }
    }
}
