//! Planting batches: the registration form with its harvest-date projection,
//! and the stage tracker of an existing batch.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::{BatchAnalytics, CropScience};
use crate::error::ParseError;
use crate::theme::Tone;

/// A crop the farmer can register a planting for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropOption {
    pub id: String,
    pub name: String,
    pub image: String,
    pub days_to_harvest: u32,
}

impl CropOption {
    pub fn harvest_date(&self, planted: NaiveDate) -> NaiveDate {
        project_harvest_date(planted, self.days_to_harvest)
    }
}

/// Planted date plus a fixed number of calendar days.
pub fn project_harvest_date(planted: NaiveDate, days_to_harvest: u32) -> NaiveDate {
    planted
        .checked_add_days(Days::new(days_to_harvest as u64))
        .unwrap_or(NaiveDate::MAX)
}

/// Stage of a batch. Declaration order is the forward lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Growing,
    HarvestReady,
    Harvested,
    Sold,
}

impl BatchStatus {
    pub fn all() -> &'static [BatchStatus] {
        &[
            BatchStatus::Growing,
            BatchStatus::HarvestReady,
            BatchStatus::Harvested,
            BatchStatus::Sold,
        ]
    }

    /// Position in the lifecycle.
    pub fn ordinal(self) -> u8 {
        match self {
            BatchStatus::Growing => 0,
            BatchStatus::HarvestReady => 1,
            BatchStatus::Harvested => 2,
            BatchStatus::Sold => 3,
        }
    }

    /// True if moving from `self` to `next` goes backwards.
    pub fn is_regression_to(self, next: BatchStatus) -> bool {
        next.ordinal() < self.ordinal()
    }

    pub fn label(self) -> &'static str {
        match self {
            BatchStatus::Growing => "Growing",
            BatchStatus::HarvestReady => "Harvest Ready",
            BatchStatus::Harvested => "Harvested",
            BatchStatus::Sold => "Sold",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Growing => "growing",
            BatchStatus::HarvestReady => "harvest_ready",
            BatchStatus::Harvested => "harvested",
            BatchStatus::Sold => "sold",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            BatchStatus::Growing => Tone::Emerald,
            BatchStatus::HarvestReady => Tone::Amber,
            BatchStatus::Harvested => Tone::Blue,
            BatchStatus::Sold => Tone::Neutral,
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BatchStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "growing" => Ok(BatchStatus::Growing),
            "harvest_ready" => Ok(BatchStatus::HarvestReady),
            "harvested" => Ok(BatchStatus::Harvested),
            "sold" => Ok(BatchStatus::Sold),
            _ => Err(ParseError::unknown(
                "batch status",
                s,
                "growing, harvest_ready, harvested, sold",
            )),
        }
    }
}

/// Why a batch was harvested when it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestReason {
    #[default]
    Optimal,
    MarketHigh,
    WeatherRisk,
    DiseaseSalvage,
}

impl HarvestReason {
    pub fn all() -> &'static [HarvestReason] {
        &[
            HarvestReason::Optimal,
            HarvestReason::MarketHigh,
            HarvestReason::WeatherRisk,
            HarvestReason::DiseaseSalvage,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            HarvestReason::Optimal => "Perfect / Optimal Timing",
            HarvestReason::MarketHigh => "Market Price High (Early)",
            HarvestReason::WeatherRisk => "Disaster Avoidance (Typhoon)",
            HarvestReason::DiseaseSalvage => "Disease / Salvage",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HarvestReason::Optimal => "optimal",
            HarvestReason::MarketHigh => "market_high",
            HarvestReason::WeatherRisk => "weather_risk",
            HarvestReason::DiseaseSalvage => "disease_salvage",
        }
    }
}

impl FromStr for HarvestReason {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarvestReason::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| {
                ParseError::unknown(
                    "harvest reason",
                    s,
                    "optimal, market_high, weather_risk, disease_salvage",
                )
            })
    }
}

/// Unit of the seed quantity field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedUnit {
    Cans,
    Packets,
    Kg,
    #[default]
    Grams,
}

impl SeedUnit {
    pub fn all() -> &'static [SeedUnit] {
        &[SeedUnit::Cans, SeedUnit::Packets, SeedUnit::Kg, SeedUnit::Grams]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeedUnit::Cans => "cans",
            SeedUnit::Packets => "packets",
            SeedUnit::Kg => "kg",
            SeedUnit::Grams => "grams",
        }
    }
}

impl FromStr for SeedUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedUnit::all()
            .iter()
            .copied()
            .find(|u| u.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| ParseError::unknown("seed unit", s, "cans, packets, kg, grams"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    pub planted_by: String,
    pub supervisor: String,
    pub harvest_crew: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInputs {
    pub seed_source: String,
    pub seed_type: String,
    pub fertilizer: String,
}

/// Cost split of a batch, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShares {
    pub seeds: u8,
    pub labor: u8,
    pub fertilizer: u8,
    pub logistics: u8,
}

impl ExpenseShares {
    /// Segments of the stacked cost bar.
    pub fn segments(&self) -> [(&'static str, u8, Tone); 4] {
        [
            ("Seeds", self.seeds, Tone::Emerald),
            ("Labor", self.labor, Tone::Blue),
            ("Fertilizer", self.fertilizer, Tone::Amber),
            ("Logistics", self.logistics, Tone::Rose),
        ]
    }

    pub fn total(&self) -> u32 {
        self.seeds as u32 + self.labor as u32 + self.fertilizer as u32 + self.logistics as u32
    }
}

/// One planting-to-sale lifecycle of a crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceBatch {
    pub id: String,
    pub crop: String,
    pub status: BatchStatus,
    pub planted_date: NaiveDate,
    pub est_harvest_date: NaiveDate,
    /// Planted quantity in kg, when known.
    #[serde(default)]
    pub planted_qty_kg: Option<u64>,
    #[serde(default)]
    pub personnel: Personnel,
    #[serde(default)]
    pub inputs: BatchInputs,
    #[serde(default)]
    pub harvest_reason: HarvestReason,
    #[serde(default)]
    pub expenses: ExpenseShares,
    #[serde(default)]
    pub analytics: BatchAnalytics,
    #[serde(default)]
    pub science: Option<CropScience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchFormError {
    #[error("select a crop before registering the batch")]
    MissingCrop,
    #[error("enter the date planted before registering the batch")]
    MissingPlantedDate,
}

/// Field state of the "Register Planting" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchForm {
    pub crop: Option<CropOption>,
    pub location: String,
    pub plot_name: String,
    pub land_area: String,
    pub seed_variety: String,
    pub seed_source: String,
    pub seed_quantity: String,
    pub seed_unit: SeedUnit,
    pub base_fertilizer: String,
    pub personnel: String,
    planted_date: Option<NaiveDate>,
}

impl BatchForm {
    /// Empty form with the farmer's home location filled in.
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            location: default_location.into(),
            ..Default::default()
        }
    }

    pub fn select_crop(&mut self, crop: &CropOption) {
        self.crop = Some(crop.clone());
    }

    pub fn set_planted_date(&mut self, date: Option<NaiveDate>) {
        self.planted_date = date;
    }

    pub fn planted_date(&self) -> Option<NaiveDate> {
        self.planted_date
    }

    /// Projected harvest date, derived from the current crop and planted date.
    pub fn est_harvest_date(&self) -> Option<NaiveDate> {
        let crop = self.crop.as_ref()?;
        Some(crop.harvest_date(self.planted_date?))
    }

    /// Build the batch in `growing` status.
    pub fn submit(&self, id: impl Into<String>) -> Result<ProduceBatch, BatchFormError> {
        let crop = self.crop.as_ref().ok_or(BatchFormError::MissingCrop)?;
        let planted = self.planted_date.ok_or(BatchFormError::MissingPlantedDate)?;
        let batch = ProduceBatch {
            id: id.into(),
            crop: crop.name.clone(),
            status: BatchStatus::Growing,
            planted_date: planted,
            est_harvest_date: crop.harvest_date(planted),
            planted_qty_kg: None,
            personnel: Personnel {
                planted_by: self.personnel.trim().to_string(),
                ..Default::default()
            },
            inputs: BatchInputs {
                seed_source: self.seed_source.trim().to_string(),
                seed_type: self.seed_variety.trim().to_string(),
                fertilizer: self.base_fertilizer.trim().to_string(),
            },
            harvest_reason: HarvestReason::default(),
            expenses: ExpenseShares::default(),
            analytics: BatchAnalytics::default(),
            science: None,
        };
        tracing::debug!(batch = %batch.id, crop = %batch.crop, "registered planting");
        Ok(batch)
    }
}

/// One card of the stage swiper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCard {
    pub status: BatchStatus,
    pub active: bool,
    /// The harvest-reason selector sits on the harvest-ready card.
    pub shows_harvest_reason: bool,
}

/// Page state of the batch management view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchManager {
    pub batch: ProduceBatch,
}

impl BatchManager {
    pub fn new(batch: ProduceBatch) -> Self {
        Self { batch }
    }

    /// Move the batch to any stage. Backward jumps are allowed but reported;
    /// returns `true` for a regression.
    pub fn set_status(&mut self, next: BatchStatus) -> bool {
        let current = self.batch.status;
        let regression = current.is_regression_to(next);
        if regression {
            tracing::warn!(
                batch = %self.batch.id,
                from = current.as_str(),
                to = next.as_str(),
                "batch moved back a stage"
            );
        }
        self.batch.status = next;
        regression
    }

    pub fn set_harvest_reason(&mut self, reason: HarvestReason) {
        self.batch.harvest_reason = reason;
    }

    pub fn stages(&self) -> Vec<StageCard> {
        BatchStatus::all()
            .iter()
            .map(|&status| StageCard {
                status,
                active: status == self.batch.status,
                shows_harvest_reason: status == BatchStatus::HarvestReady,
            })
            .collect()
    }
}
