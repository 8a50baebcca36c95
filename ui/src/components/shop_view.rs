use dioxus::prelude::*;

use dirikita_common::cart::ShopState;
use dirikita_common::catalog::{CategoryFilter, SortKey};
use dirikita_common::product::{Product, ProductId};

use super::cart_review::CartReview;
use super::shared_state::use_shared_state;

#[component]
pub fn ShopView() -> Element {
    let shared_state = use_shared_state();
    let mut shop = use_signal(ShopState::new);

    let shared = shared_state.read();
    let state = shop.read();
    let products: Vec<Product> = state
        .visible_products(&shared.fixtures.products)
        .into_iter()
        .cloned()
        .collect();
    let breakdown = state.breakdown_product(&shared.fixtures.products).cloned();
    let item_count = state.cart.total_items();
    let cart_total = state.cart.total_price(&shared.fixtures.products);
    let review_open = state.is_review_open();
    let query_text = state.query.text.clone();
    let active_category = state.query.category;
    let active_sort = state.query.sort;
    drop(state);
    drop(shared);

    rsx! {
        div { class: "shop-view",
            div { class: "shop-filters",
                input {
                    r#type: "search",
                    placeholder: "Search produce or farmers...",
                    value: "{query_text}",
                    oninput: move |evt| shop.write().query.text = evt.value(),
                }
                div { class: "category-chips",
                    for option in CategoryFilter::options() {
                        button {
                            key: "{option}",
                            class: if option == active_category { "chip active" } else { "chip" },
                            onclick: move |_| shop.write().query.category = option,
                            "{option}"
                        }
                    }
                }
                select {
                    value: "{active_sort.as_str()}",
                    onchange: move |evt| {
                        if let Ok(sort) = evt.value().parse::<SortKey>() {
                            shop.write().query.sort = sort;
                        }
                    },
                    for sort in SortKey::all().iter().copied() {
                        option { value: "{sort.as_str()}", "{sort.label()}" }
                    }
                }
            }

            div { class: "product-grid",
                if products.is_empty() {
                    p { class: "empty-state", "No produce matches your search." }
                } else {
                    for product in products {
                        ProductCard { key: "{product.id}", product, shop }
                    }
                }
            }

            if let Some(product) = breakdown {
                div { class: "modal price-breakdown",
                    h3 { "Where your {product.price()} goes" }
                    p { "{product.name} from {product.farmer_name}" }
                    for share in product.breakdown_shares() {
                        div { class: "breakdown-row",
                            span { "{share.label}" }
                            span { "{share.amount}" }
                            span { class: "share", "{share.percent}%" }
                        }
                    }
                    button {
                        onclick: move |_| shop.write().hide_breakdown(),
                        "Close"
                    }
                }
            }

            if item_count > 0 {
                div { class: "cart-bar",
                    span { "{item_count} items · {cart_total}" }
                    button {
                        onclick: move |_| { shop.write().open_review(&shared_state.read().fixtures.products); },
                        "Review Cart"
                    }
                }
            }

            if review_open {
                CartReview { shop }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product, shop: Signal<ShopState>) -> Element {
    let mut shop = shop;
    let shared_state = use_shared_state();
    let quantity = shop.read().cart.quantity(&product.id);
    let id: ProductId = product.id.clone();
    let add_id = id.clone();
    let inc_id = id.clone();
    let remove_id = id.clone();
    let info_id = id;
    let rating = format!("{:.1}", product.rating);

    rsx! {
        div { class: "product-card",
            img { src: "{product.image}", alt: "{product.name}" }
            if product.is_popular {
                span { class: "badge popular", "Popular" }
            }
            h3 { "{product.name}" }
            p { class: "farmer", "{product.farmer_name} · {product.location}" }
            p { class: "rating", "★ {rating} ({product.orders} orders)" }
            p { class: "price", "{product.price()}/kg" }
            button {
                class: "link",
                onclick: move |_| shop.write().show_breakdown(info_id.clone()),
                "Where does my money go?"
            }
            if quantity == 0 {
                button {
                    onclick: move |_| { shop.write().adjust(&shared_state.read().fixtures.products, &add_id, 1); },
                    "Add to Cart"
                }
            } else {
                div { class: "stepper",
                    button {
                        onclick: move |_| { shop.write().adjust(&shared_state.read().fixtures.products, &remove_id, -1); },
                        "−"
                    }
                    span { "{quantity}" }
                    button {
                        onclick: move |_| { shop.write().adjust(&shared_state.read().fixtures.products, &inc_id, 1); },
                        "+"
                    }
                }
            }
        }
    }
}
