use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::product::{Product, ProductCategory};

/// Category selector of the shop: every category, or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// The chips shown above the product grid, in display order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProductCategory::all().iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<ProductCategory>()
            .map(CategoryFilter::Only)
            .map_err(|_| ParseError::unknown("category", s, "all, root, leafy, fruit, spice"))
    }
}

/// Ordering applied to the filtered product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most ordered first.
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Popular, SortKey::PriceLow, SortKey::PriceHigh]
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popular => "Most Popular",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "popular" => Ok(SortKey::Popular),
            "price_low" => Ok(SortKey::PriceLow),
            "price_high" => Ok(SortKey::PriceHigh),
            _ => Err(ParseError::unknown("sort key", s, "popular, price_low, price_high")),
        }
    }
}

/// Search box, category chip and sort selection of the shop page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Filter by text, then by category, then sort. The sort is stable, so ties
    /// keep catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products
            .iter()
            .filter(|p| p.matches_query(&self.text))
            .filter(|p| self.category.matches(p.category))
            .collect();

        match self.sort {
            SortKey::Popular => result.sort_by(|a, b| b.orders.cmp(&a.orders)),
            SortKey::PriceLow => result.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_query_is_popularity_order() {
        let fx = Fixtures::builtin();
        let result = CatalogQuery::default().apply(&fx.products);
        assert_eq!(
            names(&result),
            vec!["Red Onions", "Native Carrots", "Lakatan Banana", "Romaine Lettuce"]
        );
    }

    #[test]
    fn test_text_matches_name_or_farmer() {
        let fx = Fixtures::builtin();
        let q = CatalogQuery {
            text: "mARIA".into(),
            ..Default::default()
        };
        assert_eq!(names(&q.apply(&fx.products)), vec!["Red Onions"]);

        let q = CatalogQuery {
            text: "lettuce".into(),
            ..Default::default()
        };
        assert_eq!(names(&q.apply(&fx.products)), vec!["Romaine Lettuce"]);
    }

    #[test]
    fn test_category_restricts_after_text() {
        let fx = Fixtures::builtin();
        let q = CatalogQuery {
            text: "a".into(),
            category: CategoryFilter::Only(ProductCategory::Root),
            sort: SortKey::PriceLow,
        };
        assert_eq!(names(&q.apply(&fx.products)), vec!["Native Carrots", "Red Onions"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let fx = Fixtures::builtin();
        let q = CatalogQuery {
            category: CategoryFilter::Only(ProductCategory::Spice),
            ..Default::default()
        };
        assert!(q.apply(&fx.products).is_empty());
    }

    #[test]
    fn test_price_orders_are_reverses_without_ties() {
        let fx = Fixtures::builtin();
        let low = CatalogQuery {
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let high = CatalogQuery {
            sort: SortKey::PriceHigh,
            ..Default::default()
        };
        let mut ascending = names(&low.apply(&fx.products));
        ascending.reverse();
        assert_eq!(ascending, names(&high.apply(&fx.products)));
    }

    #[test]
    fn test_parse_filter_and_sort() {
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "fruit".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(ProductCategory::Fruit))
        );
        assert!("grain".parse::<CategoryFilter>().is_err());
        assert_eq!("price-high".parse::<SortKey>(), Ok(SortKey::PriceHigh));
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(CategoryFilter::options().len(), 5);
    }
}
