use serde::{Deserialize, Serialize};

use crate::currency::Pesos;
use crate::theme::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProduceStatus {
    Growing,
    PlantNow,
    InTransit,
    Sold,
    Idle,
}

impl ProduceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProduceStatus::Growing => "Growing",
            ProduceStatus::PlantNow => "Plant Now",
            ProduceStatus::InTransit => "In Transit",
            ProduceStatus::Sold => "Sold",
            ProduceStatus::Idle => "Idle",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ProduceStatus::Growing => Tone::Emerald,
            ProduceStatus::PlantNow => Tone::Amber,
            ProduceStatus::InTransit => Tone::Blue,
            ProduceStatus::Sold => Tone::Neutral,
            ProduceStatus::Idle => Tone::Neutral,
        }
    }
}

/// A crop or plot in the farmer's produce list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceItem {
    pub id: String,
    pub name: String,
    pub status: ProduceStatus,
    /// kg on hand, for growing or in-transit produce.
    #[serde(default)]
    pub current_amount: Option<u64>,
    /// kg harvested, for sold produce.
    #[serde(default)]
    pub total_yield: Option<u64>,
    /// ₱/kg of the previous sale.
    #[serde(default)]
    pub last_sale_price: Option<u64>,
    /// ₱/kg realised, for sold produce.
    #[serde(default)]
    pub sold_price: Option<u64>,
    #[serde(default)]
    pub days_until_harvest: Option<u32>,
    #[serde(default)]
    pub planted_date: Option<String>,
    #[serde(default)]
    pub sold_date: Option<String>,
}

impl ProduceItem {
    pub fn is_sold(&self) -> bool {
        self.status == ProduceStatus::Sold
    }

    /// Quantity stat: yield once sold, otherwise the amount on hand.
    pub fn display_quantity(&self) -> Option<u64> {
        let qty = if self.is_sold() {
            self.total_yield
        } else {
            self.current_amount
        };
        qty.filter(|&q| q > 0)
    }

    /// Price stat: realised price once sold, otherwise the last sale price.
    pub fn display_price(&self) -> Option<Pesos> {
        let price = if self.is_sold() {
            self.sold_price
        } else {
            self.last_sale_price
        };
        price.filter(|&p| p > 0).map(Pesos)
    }

    /// Yield × sold price, for sold produce.
    pub fn revenue(&self) -> Option<Pesos> {
        if !self.is_sold() {
            return None;
        }
        Some(Pesos(self.total_yield?.saturating_mul(self.sold_price?)))
    }
}

/// Render an optional stat, `--` when absent.
pub fn stat_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProduceView {
    #[default]
    Active,
    History,
}

/// View toggle of the produce list page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceListState {
    pub view: ProduceView,
}

impl ProduceListState {
    pub fn select(&mut self, view: ProduceView) {
        self.view = view;
    }

    /// Everything not yet sold.
    pub fn active<'a>(&self, items: &'a [ProduceItem]) -> Vec<&'a ProduceItem> {
        items.iter().filter(|i| !i.is_sold()).collect()
    }

    pub fn history<'a>(&self, items: &'a [ProduceItem]) -> Vec<&'a ProduceItem> {
        items.iter().filter(|i| i.is_sold()).collect()
    }

    pub fn visible<'a>(&self, items: &'a [ProduceItem]) -> Vec<&'a ProduceItem> {
        match self.view {
            ProduceView::Active => self.active(items),
            ProduceView::History => self.history(items),
        }
    }
}

/// Total realised revenue across sold produce.
pub fn total_revenue(items: &[ProduceItem]) -> Pesos {
    items.iter().filter_map(ProduceItem::revenue).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_active_and_history_partition() {
        let fx = Fixtures::builtin();
        let state = ProduceListState::default();
        let active = state.active(&fx.produce);
        let history = state.history(&fx.produce);
        assert_eq!(active.len() + history.len(), fx.produce.len());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name, "Iceberg Lettuce");
        assert_eq!(state.visible(&fx.produce).len(), 4);
    }

    #[test]
    fn test_display_stats() {
        let fx = Fixtures::builtin();
        let carrots = &fx.produce[0];
        assert_eq!(carrots.display_quantity(), Some(500));
        assert_eq!(carrots.display_price(), Some(Pesos(85)));

        let fallow = &fx.produce[2];
        assert_eq!(stat_or_dash(fallow.display_quantity()), "--");
        assert_eq!(stat_or_dash(fallow.display_price()), "--");

        let lettuce = &fx.produce[3];
        assert_eq!(lettuce.display_quantity(), Some(350));
        assert_eq!(lettuce.display_price(), Some(Pesos(140)));
        assert_eq!(stat_or_dash(lettuce.display_price()), "₱140");
    }

    #[test]
    fn test_revenue() {
        let fx = Fixtures::builtin();
        assert_eq!(fx.produce[3].revenue(), Some(Pesos(49_000)));
        assert_eq!(fx.produce[0].revenue(), None);
        assert_eq!(total_revenue(&fx.produce), Pesos(49_000));
    }

    #[test]
    fn test_revenue_saturates() {
        let fx = Fixtures::builtin();
        let mut lettuce = fx.produce[3].clone();
        lettuce.total_yield = Some(u64::MAX);
        assert_eq!(lettuce.revenue(), Some(Pesos(u64::MAX)));
        let items = vec![lettuce, fx.produce[3].clone()];
        assert_eq!(total_revenue(&items), Pesos(u64::MAX));
    }
}
