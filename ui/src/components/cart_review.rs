use dioxus::prelude::*;

use dirikita_common::cart::ShopState;
use dirikita_common::checkout::{DeliveryMethod, PickupPoint, PickupStatus};

use super::shared_state::use_shared_state;

/// Bottom sheet listing the cart lines with the checkout summary.
#[component]
pub fn CartReview(shop: Signal<ShopState>) -> Element {
    let mut shop = shop;
    let shared_state = use_shared_state();
    let mut placed = use_signal(|| false);

    let shared = shared_state.read();
    let state = shop.read();
    // (id, name, quantity, line total)
    let lines: Vec<(String, String, u32, String)> = state
        .cart
        .lines(&shared.fixtures.products)
        .into_iter()
        .map(|line| {
            (
                line.product.id.to_string(),
                line.product.name.clone(),
                line.quantity,
                line.line_total.to_string(),
            )
        })
        .collect();
    let summary = state.summary(&shared.fixtures.products);
    let selected = state
        .checkout
        .selected_pickup(&shared.fixtures.pickup_points)
        .map(|p| p.id.clone());
    let points: Vec<(PickupPoint, bool)> = shared
        .fixtures
        .pickup_points
        .iter()
        .map(|p| (p.clone(), selected.as_deref() == Some(p.id.as_str())))
        .collect();
    drop(state);
    drop(shared);

    if *placed.read() {
        return rsx! {
            div { class: "sheet order-placed",
                h3 { "Order placed!" }
                p { "Total paid: {summary.total}" }
                button {
                    onclick: move |_| {
                        placed.set(false);
                        shop.set(ShopState::new());
                    },
                    "Back to Shop"
                }
            }
        };
    }

    let is_pickup = summary.method == DeliveryMethod::Pickup;
    let (order_total, order_method) = (summary.total, summary.method);
    let fee_label = if summary.is_free_delivery() {
        "Free".to_string()
    } else {
        summary.fee.to_string()
    };

    rsx! {
        div { class: "sheet cart-review",
            div { class: "sheet-header",
                h3 { "Your Cart ({summary.line_count})" }
                button {
                    onclick: move |_| shop.write().close_review(),
                    "Close"
                }
            }
            for (id, name, quantity, total) in lines {
                div { class: "cart-line", key: "{id}",
                    span { "{quantity} × {name}" }
                    span { "{total}" }
                }
            }

            div { class: "method-toggle",
                for method in [DeliveryMethod::Delivery, DeliveryMethod::Pickup] {
                    button {
                        class: if method == summary.method { "toggle active" } else { "toggle" },
                        onclick: move |_| shop.write().checkout.set_method(method),
                        "{method.label()}"
                    }
                }
            }

            if is_pickup {
                div { class: "pickup-points",
                    for (point, selected) in points {
                        PickupOption { key: "{point.id}", point, selected, shop }
                    }
                }
            }

            div { class: "summary",
                p { "Subtotal: {summary.subtotal}" }
                p { "{summary.method.label()}: {fee_label}" }
                p { class: "total", "Total: {summary.total}" }
            }
            button {
                class: "primary",
                onclick: move |_| {
                    tracing::info!(total = %order_total, method = %order_method, "order confirmed");
                    placed.set(true);
                },
                "{summary.confirm_label()}"
            }
        }
    }
}

#[component]
fn PickupOption(point: PickupPoint, selected: bool, shop: Signal<ShopState>) -> Element {
    let mut shop = shop;
    let shared_state = use_shared_state();
    let full = point.status == PickupStatus::Full;
    let id = point.id.clone();

    rsx! {
        label { class: if selected { "pickup-point selected" } else { "pickup-point" },
            input {
                r#type: "radio",
                name: "pickup",
                checked: selected,
                disabled: full,
                onchange: move |_| {
                    let points = shared_state.read().fixtures.pickup_points.clone();
                    shop.write().checkout.select_pickup(&points, &id);
                },
            }
            span { class: "name", "{point.name}" }
            span { class: "distance", "{point.distance}" }
            span { class: "ready", "Ready in {point.ready_time}" }
            if full {
                span { class: "badge", "Full" }
            }
        }
    }
}
