//! "Impact & Rewards" page: customer feedback, donation drives and the
//! farmer's impact stats.

use serde::{Deserialize, Serialize};

use crate::percent::clamp_percent;
use crate::theme::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Video,
    Photo,
    Text,
}

impl FeedbackKind {
    pub fn has_media(self) -> bool {
        !matches!(self, FeedbackKind::Text)
    }
}

/// A thank-you note from a customer, traced back to the batch it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    pub kind: FeedbackKind,
    /// Anonymised city, e.g. "Quezon City".
    pub customer_location: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub message: String,
    pub product_name: String,
    pub batch_id: String,
    pub date: String,
    /// 1 to 5 stars.
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
}

impl Urgency {
    pub fn tone(self) -> Tone {
        match self {
            Urgency::High => Tone::Rose,
            Urgency::Normal => Tone::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationCampaign {
    pub id: String,
    pub title: String,
    pub beneficiary: String,
    pub urgency: Urgency,
    /// What the drive is collecting, e.g. "Root Vegetables".
    pub target: String,
    /// Percent collected so far.
    pub collected: u8,
}

impl DonationCampaign {
    pub fn progress(&self) -> u8 {
        clamp_percent(self.collected)
    }
}

/// Headline numbers of the impact page. Static display values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    pub ani_points: u64,
    pub families_fed: u64,
    pub donated_kg: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThankYouTab {
    #[default]
    Feedback,
    Donate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThankYouState {
    pub tab: ThankYouTab,
}

impl ThankYouState {
    pub fn select(&mut self, tab: ThankYouTab) {
        self.tab = tab;
    }
}

/// Count and mean star rating of a set of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub count: usize,
    pub average: Option<f32>,
}

impl RatingSummary {
    pub fn of(items: &[FeedbackItem]) -> Self {
        let count = items.len();
        let average = if count == 0 {
            None
        } else {
            let total: u32 = items.iter().map(|f| f.rating as u32).sum();
            Some(total as f32 / count as f32)
        };
        RatingSummary { count, average }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_rating_summary() {
        let fx = Fixtures::builtin();
        let summary = RatingSummary::of(&fx.feedback);
        assert_eq!(summary.count, 3);
        let avg = summary.average.unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-5);

        let empty = RatingSummary::of(&[]);
        assert_eq!(empty.count, 0);
        assert!(empty.average.is_none());
    }

    #[test]
    fn test_campaign_progress_clamped() {
        let fx = Fixtures::builtin();
        assert_eq!(fx.campaigns[0].progress(), 65);
        let over = DonationCampaign {
            collected: 130,
            ..fx.campaigns[1].clone()
        };
        assert_eq!(over.progress(), 100);
    }

    #[test]
    fn test_media_kinds() {
        assert!(FeedbackKind::Video.has_media());
        assert!(!FeedbackKind::Text.has_media());
        let mut state = ThankYouState::default();
        state.select(ThankYouTab::Donate);
        assert_eq!(state.tab, ThankYouTab::Donate);
    }
}
