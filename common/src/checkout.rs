use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::currency::Pesos;
use crate::error::ParseError;
use crate::product::Product;

/// Flat delivery fee, in pesos.
pub const DELIVERY_FEE: Pesos = Pesos(45);

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryMethod {
    pub fn fee(self) -> Pesos {
        match self {
            DeliveryMethod::Delivery => DELIVERY_FEE,
            DeliveryMethod::Pickup => Pesos(0),
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            DeliveryMethod::Delivery => "Place Delivery Order",
            DeliveryMethod::Pickup => "Confirm Pickup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryMethod::Delivery => "Delivery",
            DeliveryMethod::Pickup => "Pickup",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeliveryMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(DeliveryMethod::Delivery),
            "pickup" => Ok(DeliveryMethod::Pickup),
            _ => Err(ParseError::unknown("delivery method", s, "delivery, pickup")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Available,
    Full,
}

/// A hub where customers collect pickup orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: String,
    pub name: String,
    /// Display label, e.g. "0.8 km".
    pub distance: String,
    /// Display label, e.g. "2 hours" or "Tomorrow".
    pub ready_time: String,
    pub status: PickupStatus,
}

/// Delivery toggle and pickup-point selection of the review sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutState {
    pub method: DeliveryMethod,
    /// Selected pickup point id; `None` means the first listed point.
    pub pickup_point: Option<String>,
}

impl CheckoutState {
    pub fn set_method(&mut self, method: DeliveryMethod) {
        self.method = method;
    }

    /// Select a pickup point by id. Unknown ids are ignored.
    pub fn select_pickup(&mut self, points: &[PickupPoint], id: &str) -> bool {
        if points.iter().any(|p| p.id == id) {
            self.pickup_point = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected_pickup<'a>(&self, points: &'a [PickupPoint]) -> Option<&'a PickupPoint> {
        match &self.pickup_point {
            Some(id) => points.iter().find(|p| &p.id == id).or_else(|| points.first()),
            None => points.first(),
        }
    }
}

/// Totals shown at the bottom of the review sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub method: DeliveryMethod,
    /// Distinct products selected.
    pub line_count: usize,
    pub subtotal: Pesos,
    pub fee: Pesos,
    pub total: Pesos,
}

impl CheckoutSummary {
    pub fn compute(cart: &Cart, products: &[Product], method: DeliveryMethod) -> Self {
        let subtotal = cart.total_price(products);
        let fee = method.fee();
        CheckoutSummary {
            method,
            line_count: cart.lines(products).len(),
            subtotal,
            fee,
            total: subtotal + fee,
        }
    }

    pub fn is_free_delivery(&self) -> bool {
        self.fee == Pesos(0)
    }

    pub fn confirm_label(&self) -> &'static str {
        self.method.confirm_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;
    use crate::product::ProductId;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.adjust(&ProductId::new("1"), 2);
        cart.adjust(&ProductId::new("2"), 1);
        cart
    }

    #[test]
    fn test_delivery_and_pickup_totals() {
        let fx = Fixtures::builtin();
        let cart = sample_cart();

        let delivery = CheckoutSummary::compute(&cart, &fx.products, DeliveryMethod::Delivery);
        assert_eq!(delivery.subtotal, Pesos(420));
        assert_eq!(delivery.fee, Pesos(45));
        assert_eq!(delivery.total, Pesos(465));
        assert_eq!(delivery.line_count, 2);
        assert_eq!(delivery.confirm_label(), "Place Delivery Order");

        let pickup = CheckoutSummary::compute(&cart, &fx.products, DeliveryMethod::Pickup);
        assert_eq!(pickup.total, pickup.subtotal);
        assert!(pickup.is_free_delivery());
        assert_eq!(pickup.confirm_label(), "Confirm Pickup");
    }

    #[test]
    fn test_pickup_selection_defaults_to_first() {
        let fx = Fixtures::builtin();
        let mut state = CheckoutState::default();
        assert_eq!(
            state.selected_pickup(&fx.pickup_points).map(|p| p.id.as_str()),
            Some("p1")
        );
        assert!(state.select_pickup(&fx.pickup_points, "p3"));
        assert_eq!(
            state.selected_pickup(&fx.pickup_points).map(|p| p.name.as_str()),
            Some("Guimbal Market Center")
        );
        assert!(!state.select_pickup(&fx.pickup_points, "nowhere"));
        assert_eq!(state.pickup_point.as_deref(), Some("p3"));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("Pickup".parse::<DeliveryMethod>(), Ok(DeliveryMethod::Pickup));
        assert!("courier".parse::<DeliveryMethod>().is_err());
    }
}
