use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogQuery;
use crate::checkout::{CheckoutState, CheckoutSummary};
use crate::currency::Pesos;
use crate::product::{find_product, Product, ProductId};

/// Product quantities in the shopping basket.
///
/// A line exists only while its quantity is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<ProductId, u32>,
}

/// A cart line joined with its product, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub line_total: Pesos,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` units (negative to remove). The quantity never drops below
    /// zero, and a line that reaches zero is removed. Returns the new quantity.
    pub fn adjust(&mut self, id: &ProductId, delta: i64) -> u32 {
        let current = self.quantity(id) as i64;
        let next = current.saturating_add(delta).clamp(0, u32::MAX as i64) as u32;
        if next == 0 {
            self.lines.remove(id);
        } else {
            self.lines.insert(id.clone(), next);
        }
        next
    }

    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.lines.get(id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.values().map(|&q| q as u64).sum()
    }

    /// Sum of price × quantity. Lines whose product is not in `products` are
    /// ignored.
    pub fn total_price(&self, products: &[Product]) -> Pesos {
        self.lines(products).iter().map(|l| l.line_total).sum()
    }

    /// Lines joined with their products, in product-id order.
    pub fn lines<'a>(&self, products: &'a [Product]) -> Vec<CartLine<'a>> {
        self.lines
            .iter()
            .filter_map(|(id, &quantity)| {
                find_product(products, id).map(|product| CartLine {
                    product,
                    quantity,
                    line_total: Pesos(product.price.saturating_mul(quantity as u64)),
                })
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.lines.iter().map(|(id, &q)| (id, q))
    }
}

/// Page state of the consumer shop: catalog query, cart, review sheet and the
/// price-breakdown modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopState {
    pub query: CatalogQuery,
    pub cart: Cart,
    pub checkout: CheckoutState,
    review_open: bool,
    breakdown_for: Option<ProductId>,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change a cart line. The review sheet closes once no line resolves to a
    /// product in `products`.
    pub fn adjust(&mut self, products: &[Product], id: &ProductId, delta: i64) -> u32 {
        let qty = self.cart.adjust(id, delta);
        if self.review_open && !self.has_reviewable_lines(products) {
            tracing::debug!("no cart lines left, closing review");
            self.review_open = false;
        }
        qty
    }

    /// Open the review sheet. Refused (returns `false`) while no cart line
    /// resolves to a product.
    pub fn open_review(&mut self, products: &[Product]) -> bool {
        self.review_open = self.has_reviewable_lines(products);
        self.review_open
    }

    fn has_reviewable_lines(&self, products: &[Product]) -> bool {
        self.cart
            .iter()
            .any(|(id, _)| find_product(products, id).is_some())
    }

    pub fn close_review(&mut self) {
        self.review_open = false;
    }

    pub fn is_review_open(&self) -> bool {
        self.review_open
    }

    pub fn show_breakdown(&mut self, id: ProductId) {
        self.breakdown_for = Some(id);
    }

    pub fn hide_breakdown(&mut self) {
        self.breakdown_for = None;
    }

    pub fn breakdown_product<'a>(&self, products: &'a [Product]) -> Option<&'a Product> {
        self.breakdown_for
            .as_ref()
            .and_then(|id| find_product(products, id))
    }

    pub fn visible_products<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        self.query.apply(products)
    }

    pub fn summary(&self, products: &[Product]) -> CheckoutSummary {
        CheckoutSummary::compute(&self.cart, products, self.checkout.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_adjust_clamps_and_removes() {
        let mut cart = Cart::new();
        assert_eq!(cart.adjust(&id("1"), 2), 2);
        assert_eq!(cart.adjust(&id("1"), -5), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.quantity(&id("1")), 0);

        // removing from an absent line is a no-op
        assert_eq!(cart.adjust(&id("2"), -1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let fx = Fixtures::builtin();
        let mut cart = Cart::new();
        cart.adjust(&id("1"), 1);
        cart.adjust(&id("1"), 1);
        cart.adjust(&id("2"), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_price(&fx.products), Pesos(420));
    }

    #[test]
    fn test_unknown_product_ignored_in_price() {
        let fx = Fixtures::builtin();
        let mut cart = Cart::new();
        cart.adjust(&id("missing"), 3);
        cart.adjust(&id("4"), 2);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(&fx.products), Pesos(180));
        assert_eq!(cart.lines(&fx.products).len(), 1);
    }

    #[test]
    fn test_totals_saturate() {
        let mut products = Fixtures::builtin().products;
        products[0].price = u64::MAX / 2;
        let mut cart = Cart::new();
        cart.adjust(&id("1"), 3);
        cart.adjust(&id("2"), 1);
        assert_eq!(cart.lines(&products)[0].line_total, Pesos(u64::MAX));
        assert_eq!(cart.total_price(&products), Pesos(u64::MAX));

        assert_eq!(cart.adjust(&id("1"), i64::MAX), u32::MAX);
        assert_eq!(cart.adjust(&id("1"), i64::MIN), 0);
    }

    #[test]
    fn test_adjust_sequence_invariants() {
        let mut cart = Cart::new();
        let steps: [(&str, i64); 9] = [
            ("1", 3),
            ("2", 1),
            ("1", -1),
            ("3", 4),
            ("2", -2),
            ("3", -1),
            ("1", 10),
            ("4", -3),
            ("3", -3),
        ];
        for (pid, delta) in steps {
            cart.adjust(&id(pid), delta);
            let sum: u64 = cart.iter().map(|(_, q)| q as u64).sum();
            assert_eq!(cart.total_items(), sum);
            assert!(cart.iter().all(|(_, q)| q > 0));
        }
        assert_eq!(cart.quantity(&id("1")), 12);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_emptying_cart_closes_review() {
        let fx = Fixtures::builtin();
        let mut shop = ShopState::new();
        assert!(!shop.open_review(&fx.products));

        shop.adjust(&fx.products, &id("1"), 2);
        assert!(shop.open_review(&fx.products));
        shop.adjust(&fx.products, &id("1"), -2);
        assert!(shop.cart.is_empty());
        assert!(!shop.is_review_open());
    }

    #[test]
    fn test_review_stays_open_while_items_remain() {
        let fx = Fixtures::builtin();
        let mut shop = ShopState::new();
        shop.adjust(&fx.products, &id("1"), 1);
        shop.adjust(&fx.products, &id("2"), 1);
        shop.open_review(&fx.products);
        shop.adjust(&fx.products, &id("1"), -1);
        assert!(shop.is_review_open());
    }

    #[test]
    fn test_review_closes_when_only_unknown_lines_remain() {
        let fx = Fixtures::builtin();
        let mut shop = ShopState::new();
        shop.adjust(&fx.products, &id("missing"), 2);
        assert!(!shop.open_review(&fx.products));

        shop.adjust(&fx.products, &id("1"), 1);
        assert!(shop.open_review(&fx.products));
        shop.adjust(&fx.products, &id("1"), -1);
        assert!(!shop.cart.is_empty());
        assert!(!shop.is_review_open());
    }

    #[test]
    fn test_breakdown_modal() {
        let fx = Fixtures::builtin();
        let mut shop = ShopState::new();
        assert!(shop.breakdown_product(&fx.products).is_none());
        shop.show_breakdown(id("3"));
        assert_eq!(
            shop.breakdown_product(&fx.products).map(|p| p.name.as_str()),
            Some("Romaine Lettuce")
        );
        shop.hide_breakdown();
        assert!(shop.breakdown_product(&fx.products).is_none());
    }
}
