//! Batch analytics of the manage page: the sales trend line, the monthly price
//! check against the market, and agronomy notes for the crop.
//!
//! Chart geometry is expressed in whole percent of a 100×100 box so the UI can
//! feed it straight into SVG coordinates or CSS heights.

use serde::{Deserialize, Serialize};

use crate::percent::rounded_percent;

/// Market price and this farmer's price for one month, in pesos per kg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub market: u64,
    pub mine: u64,
}

/// Chart data recorded against a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnalytics {
    /// Sales samples from planting through to sale.
    #[serde(default)]
    pub sales_trend: Vec<u64>,
    #[serde(default)]
    pub price_check: Vec<PricePoint>,
}

/// Vertex of the trend line. `y` grows downwards, so the series maximum sits
/// at `y == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub x: u64,
    pub y: u64,
}

/// One month of the price check with bar heights in percent of the tallest
/// bar across both series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBars {
    pub month: String,
    pub market: u64,
    pub mine: u64,
    pub market_height: u64,
    pub mine_height: u64,
}

impl PriceBars {
    /// Positive when this farmer sells above the market.
    pub fn gap(&self) -> i128 {
        self.mine as i128 - self.market as i128
    }
}

impl BatchAnalytics {
    pub fn is_empty(&self) -> bool {
        self.sales_trend.is_empty() && self.price_check.is_empty()
    }

    /// Trend samples scaled against the series maximum. An all-zero series
    /// lies flat along the bottom edge.
    pub fn trend_points(&self) -> Vec<ChartPoint> {
        let max = self.sales_trend.iter().copied().max().unwrap_or(0);
        let last = self.sales_trend.len().saturating_sub(1) as u64;
        self.sales_trend
            .iter()
            .enumerate()
            .map(|(i, &value)| ChartPoint {
                x: if last == 0 { 0 } else { rounded_percent(i as u64, last) },
                y: 100 - rounded_percent(value, max).min(100),
            })
            .collect()
    }

    /// `points` attribute of an SVG polyline in a `0 0 100 100` viewBox.
    pub fn trend_polyline(&self) -> String {
        self.trend_points()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn price_bars(&self) -> Vec<PriceBars> {
        let max = self
            .price_check
            .iter()
            .map(|p| p.market.max(p.mine))
            .max()
            .unwrap_or(0);
        self.price_check
            .iter()
            .map(|p| PriceBars {
                month: p.month.clone(),
                market: p.market,
                mine: p.mine,
                market_height: rounded_percent(p.market, max),
                mine_height: rounded_percent(p.mine, max),
            })
            .collect()
    }
}

/// Growing conditions and tips for the batch's crop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropScience {
    pub variety: String,
    pub scientific_name: String,
    /// Display range, e.g. `6.0 - 6.8`.
    pub soil_ph: String,
    pub temperature: String,
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
}
