use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::Pesos;
use crate::error::ParseError;
use crate::percent::rounded_percent;

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of fresh produce sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Root,
    Leafy,
    Fruit,
    Spice,
}

impl ProductCategory {
    pub fn all() -> &'static [ProductCategory] {
        &[
            ProductCategory::Root,
            ProductCategory::Leafy,
            ProductCategory::Fruit,
            ProductCategory::Spice,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Root => "root",
            ProductCategory::Leafy => "leafy",
            ProductCategory::Fruit => "fruit",
            ProductCategory::Spice => "spice",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Root => "Root",
            ProductCategory::Leafy => "Leafy",
            ProductCategory::Fruit => "Fruit",
            ProductCategory::Spice => "Spice",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(ProductCategory::Root),
            "leafy" => Ok(ProductCategory::Leafy),
            "fruit" => Ok(ProductCategory::Fruit),
            "spice" => Ok(ProductCategory::Spice),
            _ => Err(ParseError::unknown("category", s, "root, leafy, fruit, spice")),
        }
    }
}

/// Where each peso of the retail price goes.
///
/// The four parts are expected to add up to the product price. Nothing in the
/// shop enforces this; [`crate::fixtures::Fixtures::validate`] checks it when a
/// fixture bundle is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub farmer: u64,
    pub logistics: u64,
    pub packaging: u64,
    pub platform: u64,
}

/// One bar of the price transparency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownShare {
    pub label: &'static str,
    pub amount: Pesos,
    pub percent: u64,
}

impl PriceBreakdown {
    /// Total of the four parts, `None` if it does not fit in a `u64`.
    pub fn sum(&self) -> Option<u64> {
        self.farmer
            .checked_add(self.logistics)?
            .checked_add(self.packaging)?
            .checked_add(self.platform)
    }

    pub fn is_balanced(&self, price: u64) -> bool {
        self.sum() == Some(price)
    }

    /// Each component as a rounded share of `price`.
    pub fn shares(&self, price: u64) -> [BreakdownShare; 4] {
        let share = |label, amount| BreakdownShare {
            label,
            amount: Pesos(amount),
            percent: rounded_percent(amount, price),
        };
        [
            share("Farmer", self.farmer),
            share("Logistics", self.logistics),
            share("Packaging", self.packaging),
            share("Platform", self.platform),
        ]
    }
}

/// A product listing in the consumer shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub farmer_name: String,
    pub location: String,
    pub image: String,
    /// Retail price per kilogram, in whole pesos.
    pub price: u64,
    pub rating: f32,
    /// Number of orders placed so far; drives the "popular" sort.
    pub orders: u64,
    pub category: ProductCategory,
    pub breakdown: PriceBreakdown,
    #[serde(default)]
    pub is_popular: bool,
}

impl Product {
    pub fn price(&self) -> Pesos {
        Pesos(self.price)
    }

    pub fn breakdown_shares(&self) -> [BreakdownShare; 4] {
        self.breakdown.shares(self.price)
    }

    /// Case-insensitive substring match against name or farmer name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.farmer_name.to_lowercase().contains(&query)
    }
}

/// Look up a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrots() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Native Carrots".into(),
            farmer_name: "Mang Jose".into(),
            location: "Benguet".into(),
            image: String::new(),
            price: 120,
            rating: 4.8,
            orders: 1540,
            category: ProductCategory::Root,
            breakdown: PriceBreakdown {
                farmer: 85,
                logistics: 20,
                packaging: 10,
                platform: 5,
            },
            is_popular: true,
        }
    }

    #[test]
    fn test_breakdown_balanced() {
        let p = carrots();
        assert!(p.breakdown.is_balanced(p.price));
        assert!(!p.breakdown.is_balanced(p.price + 1));
    }

    #[test]
    fn test_breakdown_sum_overflow() {
        let mut p = carrots();
        p.breakdown.farmer = u64::MAX;
        assert_eq!(p.breakdown.sum(), None);
        assert!(!p.breakdown.is_balanced(p.price));
        assert!(!p.breakdown.is_balanced(u64::MAX));
    }

    #[test]
    fn test_breakdown_shares() {
        let shares = carrots().breakdown_shares();
        let percents: Vec<u64> = shares.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![71, 17, 8, 4]);
        assert_eq!(shares[0].label, "Farmer");
        assert_eq!(shares[0].amount, Pesos(85));
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let p = carrots();
        assert!(p.matches_query("CARROT"));
        assert!(p.matches_query("jose"));
        assert!(p.matches_query(""));
        assert!(!p.matches_query("onion"));
        // location is not searched
        assert!(!p.matches_query("benguet"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Leafy".parse::<ProductCategory>(), Ok(ProductCategory::Leafy));
        assert!("meat".parse::<ProductCategory>().is_err());
        for cat in ProductCategory::all() {
            assert_eq!(cat.as_str().parse::<ProductCategory>(), Ok(*cat));
        }
    }
}
