use dioxus::prelude::*;

use dirikita_common::program::{Program, ProgramFilter, ProgramsState};

use super::shared_state::use_shared_state;

#[component]
pub fn ProgramsView() -> Element {
    let shared_state = use_shared_state();
    let mut programs_state = use_signal(ProgramsState::default);

    let shared = shared_state.read();
    let state = programs_state.read();
    let programs: Vec<Program> = state
        .filtered(&shared.fixtures.programs)
        .into_iter()
        .cloned()
        .collect();
    let active = state.filter;
    drop(state);
    drop(shared);

    rsx! {
        div { class: "programs-view",
            h2 { "Farmer Programs" }
            div { class: "category-chips",
                for option in ProgramFilter::options() {
                    button {
                        key: "{option}",
                        class: if option == active { "chip active" } else { "chip" },
                        onclick: move |_| programs_state.write().select(option),
                        "{option}"
                    }
                }
            }
            if programs.is_empty() {
                p { class: "empty-state", "No programs in this category." }
            }
            for program in programs {
                ProgramCard { key: "{program.id}", program }
            }
        }
    }
}

#[component]
fn ProgramCard(program: Program) -> Element {
    let tone = program.accent.tone().badge_classes();

    rsx! {
        div { class: "program-card {tone}",
            if program.is_popular {
                span { class: "badge popular", "Popular" }
            }
            h3 { "{program.title}" }
            p { "{program.description}" }
            div { class: "tags",
                for tag in program.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
            button { class: "primary", "{program.action_label}" }
        }
    }
}
