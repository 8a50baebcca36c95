use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::theme::Tone;

/// Number of feed items shown under "Latest"; the rest go under "Earlier".
pub const LATEST_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Logistics,
    Market,
    Weather,
    Operations,
    Finance,
    Alert,
}

impl ActivityKind {
    pub fn all() -> &'static [ActivityKind] {
        &[
            ActivityKind::Logistics,
            ActivityKind::Market,
            ActivityKind::Weather,
            ActivityKind::Operations,
            ActivityKind::Finance,
            ActivityKind::Alert,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Logistics => "logistics",
            ActivityKind::Market => "market",
            ActivityKind::Weather => "weather",
            ActivityKind::Operations => "operations",
            ActivityKind::Finance => "finance",
            ActivityKind::Alert => "alert",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ActivityKind::Alert => Tone::Red,
            ActivityKind::Logistics => Tone::Blue,
            ActivityKind::Market => Tone::Emerald,
            ActivityKind::Weather => Tone::Indigo,
            ActivityKind::Finance => Tone::Amber,
            ActivityKind::Operations => Tone::Neutral,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistics" => Ok(ActivityKind::Logistics),
            "market" => Ok(ActivityKind::Market),
            "weather" => Ok(ActivityKind::Weather),
            "operations" | "ops" => Ok(ActivityKind::Operations),
            "finance" => Ok(ActivityKind::Finance),
            "alert" | "alerts" => Ok(ActivityKind::Alert),
            _ => Err(ParseError::unknown(
                "activity category",
                s,
                "logistics, market, weather, operations, finance, alert",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}

/// An entry of the farmer's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative display label, e.g. "2 hours ago".
    pub timestamp: String,
    pub is_read: bool,
    #[serde(default)]
    pub metadata: ActivityMeta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFilter {
    #[default]
    All,
    Kind(ActivityKind),
}

impl ActivityFilter {
    pub fn matches(self, kind: ActivityKind) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Kind(k) => k == kind,
        }
    }

    /// Tabs of the feed page, with their labels.
    pub fn tabs() -> [(ActivityFilter, &'static str); 5] {
        [
            (ActivityFilter::All, "All"),
            (ActivityFilter::Kind(ActivityKind::Alert), "Alerts"),
            (ActivityFilter::Kind(ActivityKind::Logistics), "Logistics"),
            (ActivityFilter::Kind(ActivityKind::Market), "Market"),
            (ActivityFilter::Kind(ActivityKind::Operations), "Farm Ops"),
        ]
    }
}

impl FromStr for ActivityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ActivityFilter::All)
        } else {
            s.parse().map(ActivityFilter::Kind)
        }
    }
}

impl fmt::Display for ActivityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityFilter::All => f.write_str("all"),
            ActivityFilter::Kind(k) => f.write_str(k.as_str()),
        }
    }
}

/// Tab selection of the activity feed page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeedState {
    pub filter: ActivityFilter,
}

/// Filtered feed split the way the page lays it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView<'a> {
    pub latest: Vec<&'a ActivityItem>,
    pub earlier: Vec<&'a ActivityItem>,
}

impl FeedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.earlier.is_empty()
    }

    pub fn len(&self) -> usize {
        self.latest.len() + self.earlier.len()
    }
}

impl ActivityFeedState {
    pub fn select(&mut self, filter: ActivityFilter) {
        self.filter = filter;
    }

    pub fn filtered<'a>(&self, items: &'a [ActivityItem]) -> Vec<&'a ActivityItem> {
        items.iter().filter(|a| self.filter.matches(a.kind)).collect()
    }

    pub fn view<'a>(&self, items: &'a [ActivityItem]) -> FeedView<'a> {
        let mut latest = self.filtered(items);
        let earlier = latest.split_off(latest.len().min(LATEST_COUNT));
        FeedView { latest, earlier }
    }
}

pub fn unread_count(items: &[ActivityItem]) -> usize {
    items.iter().filter(|a| !a.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_all_keeps_fixture_order() {
        let fx = Fixtures::builtin();
        let state = ActivityFeedState::default();
        let ids: Vec<_> = state.filtered(&fx.activities).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_filter_by_kind() {
        let fx = Fixtures::builtin();
        let mut state = ActivityFeedState::default();
        state.select("alerts".parse().unwrap());
        let found = state.filtered(&fx.activities);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Oversupply Warning: Red Onions");

        state.select(ActivityFilter::Kind(ActivityKind::Weather));
        assert!(state.filtered(&fx.activities).iter().all(|a| a.kind == ActivityKind::Weather));
    }

    #[test]
    fn test_view_split() {
        let fx = Fixtures::builtin();
        let state = ActivityFeedState::default();
        let view = state.view(&fx.activities);
        assert_eq!(view.latest.len(), 3);
        assert_eq!(view.earlier.len(), 3);
        assert_eq!(view.len(), fx.activities.len());

        let logistics = ActivityFeedState {
            filter: ActivityFilter::Kind(ActivityKind::Logistics),
        };
        let view = logistics.view(&fx.activities);
        assert_eq!(view.latest.len(), 1);
        assert!(view.earlier.is_empty());
    }

    #[test]
    fn test_empty_category() {
        let items: Vec<ActivityItem> = Vec::new();
        let view = ActivityFeedState::default().view(&items);
        assert!(view.is_empty());
    }

    #[test]
    fn test_unread_count() {
        let fx = Fixtures::builtin();
        assert_eq!(unread_count(&fx.activities), 2);
    }

    #[test]
    fn test_tones_are_exhaustive() {
        for kind in ActivityKind::all() {
            let _ = kind.tone().badge_classes();
            assert_eq!(kind.as_str().parse::<ActivityKind>(), Ok(*kind));
        }
        assert_eq!(ActivityFilter::tabs()[4].1, "Farm Ops");
    }
}
