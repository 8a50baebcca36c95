//! Demand board: per-location demand listings, saturation bars and the
//! serve-location / pledge-month filters of the farmer's demand page.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::month_start;
use crate::percent::rounded_percent;
use crate::theme::Tone;

/// Days ahead beyond which a selected month counts as a future pledge.
pub const FUTURE_PLEDGE_DAYS: i64 = 30;

/// Percent above which a saturation bar turns amber.
pub const NEAR_FULL_PERCENT: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandStatus {
    /// Supply urgently needed.
    Critical,
    Sustain,
    /// Buyers are not taking more supply.
    Pause,
}

impl DemandStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DemandStatus::Critical => "critical",
            DemandStatus::Sustain => "sustain",
            DemandStatus::Pause => "pause",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandStatus::Critical => "Critical",
            DemandStatus::Sustain => "Sustain",
            DemandStatus::Pause => "Paused",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            DemandStatus::Critical => Tone::Red,
            DemandStatus::Sustain => Tone::Emerald,
            DemandStatus::Pause => Tone::Amber,
        }
    }
}

/// Demand figures for one item at one location, in kilograms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDemand {
    pub location: String,
    /// Pledge suggested to this farmer.
    pub suggested_amount: u64,
    /// This farmer's last pledge.
    pub my_pledge: u64,
    /// Total pledged by all farmers at this location.
    pub pledged_amount: u64,
    pub total_demand: u64,
    pub regional_demand: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: DemandStatus,
    pub nationwide_demand: u64,
    pub location_data: Vec<LocationDemand>,
}

impl DemandItem {
    /// Record shown for `serve`: the named location if listed, otherwise the
    /// first record.
    pub fn location_for(&self, serve: &ServeLocation) -> Option<&LocationDemand> {
        match serve {
            ServeLocation::All => self.location_data.first(),
            ServeLocation::Named(name) => self
                .location_data
                .iter()
                .find(|loc| &loc.location == name)
                .or_else(|| self.location_data.first()),
        }
    }

    pub fn serves_location_matching(&self, query: &str) -> bool {
        self.location_data
            .iter()
            .any(|loc| loc.location.to_lowercase().contains(query))
    }

    /// Board search: `query` (already lowercased) found in the item name, its
    /// status name or any location name.
    pub fn matches_search(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.status.as_str().contains(query)
            || self.serves_location_matching(query)
    }
}

/// Scope a saturation figure is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Location,
    Regional,
    Nationwide,
}

/// Colour band of a saturation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationBand {
    /// Room for more supply.
    Open,
    /// Above 80%.
    NearFull,
    /// 100% or more.
    Full,
}

impl SaturationBand {
    pub fn tone(self) -> Tone {
        match self {
            SaturationBand::Open => Tone::Emerald,
            SaturationBand::NearFull => Tone::Amber,
            SaturationBand::Full => Tone::Red,
        }
    }
}

/// Pledged quantity against a demand ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saturation {
    pub granularity: Granularity,
    pub pledged: u64,
    pub ceiling: u64,
}

impl Saturation {
    pub fn new(granularity: Granularity, pledged: u64, ceiling: u64) -> Self {
        Self {
            granularity,
            pledged,
            ceiling,
        }
    }

    /// Rounded percentage, unclamped. Values over 100 signal oversupply.
    pub fn raw_percent(&self) -> u64 {
        rounded_percent(self.pledged, self.ceiling)
    }

    /// Percentage for the bar, capped at 100.
    pub fn percent(&self) -> u64 {
        self.raw_percent().min(100)
    }

    /// `pledged / ceiling` as a float.
    pub fn ratio(&self) -> f64 {
        if self.ceiling == 0 {
            return if self.pledged > 0 { f64::INFINITY } else { 0.0 };
        }
        self.pledged as f64 / self.ceiling as f64
    }

    pub fn is_oversupplied(&self) -> bool {
        self.pledged > self.ceiling
    }

    pub fn band(&self) -> SaturationBand {
        let percent = self.percent();
        if percent >= 100 {
            SaturationBand::Full
        } else if percent > NEAR_FULL_PERCENT {
            SaturationBand::NearFull
        } else {
            SaturationBand::Open
        }
    }
}

/// The location a farmer chooses to view demand for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeLocation {
    #[default]
    All,
    Named(String),
}

impl ServeLocation {
    pub fn label(&self) -> &str {
        match self {
            ServeLocation::All => "All Locations",
            ServeLocation::Named(name) => name.as_str(),
        }
    }
}

impl FromStr for ServeLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(ServeLocation::All)
        } else {
            Ok(ServeLocation::Named(s.to_string()))
        }
    }
}

impl fmt::Display for ServeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the farmer is offering supply now or pledging ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PledgeMode {
    InstantOffer,
    FuturePledge,
}

impl PledgeMode {
    /// Future pledge when the first day of `month` is more than 30 days after
    /// `today`.
    pub fn for_month(month: NaiveDate, today: NaiveDate) -> Self {
        let days_ahead = (month_start(month) - today).num_days();
        if days_ahead > FUTURE_PLEDGE_DAYS {
            PledgeMode::FuturePledge
        } else {
            PledgeMode::InstantOffer
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PledgeMode::InstantOffer => "Instant Offer Mode",
            PledgeMode::FuturePledge => "Future Pledge Mode",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PledgeMode::InstantOffer => Tone::Emerald,
            PledgeMode::FuturePledge => Tone::Blue,
        }
    }
}

/// Primary button of a demand card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandAction {
    pub label: &'static str,
    pub enabled: bool,
}

impl DemandAction {
    pub fn for_item(status: DemandStatus, mode: PledgeMode) -> Self {
        match (status, mode) {
            (DemandStatus::Pause, _) => DemandAction {
                label: "Supply Paused",
                enabled: false,
            },
            (_, PledgeMode::FuturePledge) => DemandAction {
                label: "Pledge Supply (Future)",
                enabled: true,
            },
            (_, PledgeMode::InstantOffer) => DemandAction {
                label: "Make Offer (Now)",
                enabled: true,
            },
        }
    }
}

/// Everything a demand card displays, derived from an item and the board state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandCard<'a> {
    pub item: &'a DemandItem,
    pub location: &'a LocationDemand,
    pub saturation: Saturation,
    pub action: DemandAction,
}

impl<'a> DemandCard<'a> {
    /// Saturation at a wider scope. Only computed from a real pledged figure;
    /// the board data carries none for regions or the whole country.
    pub fn wider_saturation(&self, granularity: Granularity, pledged: u64) -> Saturation {
        let ceiling = match granularity {
            Granularity::Location => self.location.total_demand,
            Granularity::Regional => self.location.regional_demand,
            Granularity::Nationwide => self.item.nationwide_demand,
        };
        Saturation::new(granularity, pledged, ceiling)
    }
}

/// Filters of the demand board page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandBoardState {
    /// Search text over item name, status and locations.
    pub search: String,
    pub serve_location: ServeLocation,
    /// First day of the selected month.
    pub month: NaiveDate,
    pub filter_expanded: bool,
    /// Item whose action sheet is open.
    pub active_item: Option<String>,
}

impl DemandBoardState {
    /// Board opened on the current month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            search: String::new(),
            serve_location: ServeLocation::All,
            month: month_start(today),
            filter_expanded: false,
            active_item: None,
        }
    }

    pub fn set_month(&mut self, month: NaiveDate) {
        self.month = month_start(month);
    }

    pub fn toggle_filters(&mut self) {
        self.filter_expanded = !self.filter_expanded;
    }

    pub fn open_actions(&mut self, item_id: &str) {
        self.active_item = Some(item_id.to_string());
    }

    pub fn close_actions(&mut self) {
        self.active_item = None;
    }

    pub fn pledge_mode(&self, today: NaiveDate) -> PledgeMode {
        PledgeMode::for_month(self.month, today)
    }

    /// Items whose name, status or a location matches the search text. A blank
    /// search returns every item.
    pub fn filter<'a>(&self, items: &'a [DemandItem]) -> Vec<&'a DemandItem> {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return items.iter().collect();
        }
        items
            .iter()
            .filter(|item| item.matches_search(&query))
            .collect()
    }

    /// Cards for the filtered items. Items without location records are skipped.
    pub fn cards<'a>(&self, items: &'a [DemandItem], today: NaiveDate) -> Vec<DemandCard<'a>> {
        let mode = self.pledge_mode(today);
        self.filter(items)
            .into_iter()
            .filter_map(|item| {
                let location = item.location_for(&self.serve_location)?;
                Some(DemandCard {
                    item,
                    location,
                    saturation: Saturation::new(
                        Granularity::Location,
                        location.pledged_amount,
                        location.total_demand,
                    ),
                    action: DemandAction::for_item(item.status, mode),
                })
            })
            .collect()
    }

    pub fn active<'a>(&self, items: &'a [DemandItem]) -> Option<&'a DemandItem> {
        let id = self.active_item.as_deref()?;
        items.iter().find(|i| i.id == id)
    }
}

/// Distinct location names across all items, in first-seen order.
pub fn known_locations(items: &[DemandItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for loc in items.iter().flat_map(|i| &i.location_data) {
        if !names.contains(&loc.location) {
            names.push(loc.location.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturation_percent() {
        let s = Saturation::new(Granularity::Location, 3500, 3550);
        assert_eq!(s.percent(), 99);
        assert_eq!(s.band(), SaturationBand::NearFull);
        assert!(!s.is_oversupplied());
    }

    #[test]
    fn test_saturation_oversupply_clamped() {
        let s = Saturation::new(Granularity::Location, 600, 500);
        assert_eq!(s.percent(), 100);
        assert_eq!(s.raw_percent(), 120);
        assert!((s.ratio() - 1.2).abs() < 1e-9);
        assert!(s.is_oversupplied());
        assert_eq!(s.band(), SaturationBand::Full);
        assert_eq!(s.band().tone(), Tone::Red);
    }

    #[test]
    fn test_saturation_bands() {
        assert_eq!(Saturation::new(Granularity::Location, 80, 100).band(), SaturationBand::Open);
        assert_eq!(Saturation::new(Granularity::Location, 81, 100).band(), SaturationBand::NearFull);
        assert_eq!(Saturation::new(Granularity::Location, 100, 100).band(), SaturationBand::Full);
        // 99.6% rounds to 100 and is shown as full
        assert_eq!(Saturation::new(Granularity::Location, 996, 1000).band(), SaturationBand::Full);
    }

    #[test]
    fn test_saturation_zero_ceiling() {
        assert_eq!(Saturation::new(Granularity::Regional, 0, 0).percent(), 0);
        assert_eq!(Saturation::new(Granularity::Regional, 5, 0).percent(), 100);
    }

    #[test]
    fn test_location_resolution() {
        let fx = Fixtures::builtin();
        let carrots = &fx.demand[0];
        let first = carrots.location_for(&ServeLocation::All).unwrap();
        assert_eq!(first.location, "Metro Manila");

        let cebu = carrots
            .location_for(&ServeLocation::Named("Cebu City".into()))
            .unwrap();
        assert_eq!(cebu.total_demand, 1400);

        let fallback = carrots
            .location_for(&ServeLocation::Named("Davao".into()))
            .unwrap();
        assert_eq!(fallback.location, "Metro Manila");
    }

    #[test]
    fn test_search_filters_by_location() {
        let fx = Fixtures::builtin();
        let mut board = DemandBoardState::new(date(2026, 1, 15));
        assert_eq!(board.filter(&fx.demand).len(), 4);

        board.search = "  CEBU ".into();
        let found: Vec<_> = board.filter(&fx.demand).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(found, vec!["Native Carrots"]);

        board.search = "iloilo".into();
        assert!(board.filter(&fx.demand).is_empty());
    }

    #[test]
    fn test_search_matches_name_and_status() {
        let fx = Fixtures::builtin();
        let mut board = DemandBoardState::new(date(2026, 1, 15));

        board.search = "Carrot".into();
        let found: Vec<_> = board.filter(&fx.demand).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(found, vec!["Native Carrots"]);

        board.search = "CRITICAL".into();
        let found = board.filter(&fx.demand);
        assert!(!found.is_empty());
        assert!(found.iter().all(|i| i.status == DemandStatus::Critical));

        board.search = "pause".into();
        let found = board.filter(&fx.demand);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, DemandStatus::Pause);
    }

    #[test]
    fn test_pledge_mode() {
        let today = date(2026, 1, 15);
        assert_eq!(PledgeMode::for_month(date(2026, 1, 1), today), PledgeMode::InstantOffer);
        // Feb 1 is 17 days ahead
        assert_eq!(PledgeMode::for_month(date(2026, 2, 1), today), PledgeMode::InstantOffer);
        // Mar 1 is 45 days ahead
        assert_eq!(PledgeMode::for_month(date(2026, 3, 1), today), PledgeMode::FuturePledge);
        // exactly 30 days ahead is still instant
        assert_eq!(PledgeMode::for_month(date(2026, 3, 1), date(2026, 1, 30)), PledgeMode::InstantOffer);
        assert_eq!(PledgeMode::for_month(date(2026, 3, 1), date(2026, 1, 29)), PledgeMode::FuturePledge);
    }

    #[test]
    fn test_cards_and_actions() {
        let fx = Fixtures::builtin();
        let today = date(2026, 1, 15);
        let mut board = DemandBoardState::new(today);

        let cards = board.cards(&fx.demand, today);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].saturation.percent(), 99);
        assert_eq!(cards[0].action.label, "Make Offer (Now)");
        let cabbage = cards.iter().find(|c| c.item.status == DemandStatus::Pause).unwrap();
        assert!(!cabbage.action.enabled);
        assert_eq!(cabbage.action.label, "Supply Paused");

        board.set_month(date(2026, 4, 20));
        assert_eq!(board.month, date(2026, 4, 1));
        let cards = board.cards(&fx.demand, today);
        assert_eq!(cards[1].action.label, "Pledge Supply (Future)");
    }

    #[test]
    fn test_wider_saturation_uses_matching_ceiling() {
        let fx = Fixtures::builtin();
        let today = date(2026, 1, 15);
        let board = DemandBoardState::new(today);
        let cards = board.cards(&fx.demand, today);
        let nationwide = cards[0].wider_saturation(Granularity::Nationwide, 4250);
        assert_eq!(nationwide.ceiling, 8500);
        assert_eq!(nationwide.percent(), 50);
        let regional = cards[0].wider_saturation(Granularity::Regional, 2000);
        assert_eq!(regional.percent(), 25);
    }

    #[test]
    fn test_action_sheet() {
        let fx = Fixtures::builtin();
        let mut board = DemandBoardState::new(date(2026, 1, 15));
        board.open_actions("2");
        assert_eq!(board.active(&fx.demand).map(|i| i.name.as_str()), Some("Red Onions"));
        board.close_actions();
        assert!(board.active(&fx.demand).is_none());
        board.toggle_filters();
        assert!(board.filter_expanded);
    }

    #[test]
    fn test_known_locations() {
        let fx = Fixtures::builtin();
        assert_eq!(known_locations(&fx.demand), vec!["Metro Manila", "Cebu City"]);
    }
}
