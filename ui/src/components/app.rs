use dioxus::prelude::*;

use dirikita_common::activity::unread_count;

use super::activity_feed::ActivityFeed;
use super::batch_form::BatchFormView;
use super::batch_manage::BatchManageView;
use super::demand_board::DemandBoard;
use super::produce_view::ProduceList;
use super::profile_view::ProfileView;
use super::programs_view::ProgramsView;
use super::shared_state::{use_shared_state, SharedState};
use super::shop_view::ShopView;
use super::thank_you::ThankYouView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Shop {},
    #[route("/demand")]
    Demand {},
    #[route("/activity")]
    Activity {},
    #[route("/programs")]
    Programs {},
    #[route("/produce")]
    Produce {},
    #[route("/batch/new")]
    NewBatch {},
    #[route("/batch")]
    ManageBatch {},
    #[route("/profile")]
    Profile {},
    #[route("/impact")]
    Impact {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SharedState::new()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let shared_state = use_shared_state();
    let nav = use_navigator();

    let unread = unread_count(&shared_state.read().fixtures.activities);

    rsx! {
        div { class: "dirikita-app",
            header { class: "app-header",
                h1 { "Dirikita" }
                p { "Direct from the farm" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Shop {}); },
                        "Shop"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Demand {}); },
                        "Demand"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Produce {}); },
                        "My Produce"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Activity {}); },
                        "Activity"
                        if unread > 0 {
                            span { class: "badge", " {unread}" }
                        }
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Programs {}); },
                        "Programs"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Impact {}); },
                        "Impact"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Profile {}); },
                        "Profile"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Shop() -> Element {
    rsx! { ShopView {} }
}

#[component]
fn Demand() -> Element {
    rsx! { DemandBoard {} }
}

#[component]
fn Activity() -> Element {
    rsx! { ActivityFeed {} }
}

#[component]
fn Programs() -> Element {
    rsx! { ProgramsView {} }
}

#[component]
fn Produce() -> Element {
    rsx! { ProduceList {} }
}

#[component]
fn NewBatch() -> Element {
    rsx! { BatchFormView {} }
}

#[component]
fn ManageBatch() -> Element {
    rsx! { BatchManageView {} }
}

#[component]
fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
fn Impact() -> Element {
    rsx! { ThankYouView {} }
}
