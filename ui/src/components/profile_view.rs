use dioxus::prelude::*;

use dirikita_common::currency::format_kg;
use dirikita_common::profile::PledgedCrop;

use super::shared_state::use_shared_state;

#[component]
pub fn ProfileView() -> Element {
    let shared_state = use_shared_state();
    let profile = shared_state.read().fixtures.profile.clone();
    let total = format_kg(profile.total_pledged());
    let rating = format!("{:.1}", profile.rating);

    rsx! {
        div { class: "profile-view",
            if !profile.cover_image.is_empty() {
                img { class: "cover", src: "{profile.cover_image}" }
            }
            div { class: "profile-header",
                h2 { "{profile.name}" }
                if profile.verified {
                    span { class: "badge verified", "Verified Farmer" }
                }
                p { class: "location", "{profile.location}" }
            }
            div { class: "profile-stats",
                div { span { class: "value", "{profile.years_farming}" } span { "Years farming" } }
                div { span { class: "value", "{rating}★" } span { "Rating" } }
                div { span { class: "value", "{total}" } span { "Pledged" } }
            }
            p { class: "bio", "{profile.bio}" }
            p { class: "joined", "Member since {profile.joined_date}" }

            h3 { "Active Pledges" }
            for pledge in profile.active_pledges.iter().cloned() {
                PledgeCard { key: "{pledge.id}", pledge }
            }
        }
    }
}

#[component]
fn PledgeCard(pledge: PledgedCrop) -> Element {
    let tone = pledge.status.tone();
    let progress = pledge.progress();
    let amount = format_kg(pledge.pledged_amount);

    rsx! {
        div { class: "pledge-card",
            h4 { "{pledge.name}" }
            span { class: "badge {tone.badge_classes()}", "{pledge.status.label()}" }
            p { "{amount} · harvest {pledge.harvest_date}" }
            div { class: "bar",
                div { class: "fill {tone.fill_class()}", style: "width: {progress}%" }
            }
            span { class: "progress", "{progress}% grown" }
        }
    }
}
