use serde::{Deserialize, Serialize};

use crate::percent::clamp_percent;
use crate::theme::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Growing,
    Harvesting,
    Completed,
}

impl CropStatus {
    pub fn label(self) -> &'static str {
        match self {
            CropStatus::Growing => "Growing",
            CropStatus::Harvesting => "Harvesting",
            CropStatus::Completed => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CropStatus::Growing => Tone::Emerald,
            CropStatus::Harvesting => Tone::Amber,
            CropStatus::Completed => Tone::Neutral,
        }
    }
}

/// A pledge shown on the public farmer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PledgedCrop {
    pub id: String,
    pub name: String,
    pub pledged_amount: u64,
    pub harvest_date: String,
    pub status: CropStatus,
    /// 0 to 100.
    pub growth_progress: u8,
}

impl PledgedCrop {
    pub fn progress(&self) -> u8 {
        clamp_percent(self.growth_progress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub id: String,
    pub name: String,
    pub location: String,
    pub cover_image: String,
    pub years_farming: u32,
    pub joined_date: String,
    pub bio: String,
    pub rating: f32,
    pub verified: bool,
    pub active_pledges: Vec<PledgedCrop>,
}

impl FarmerProfile {
    /// Sum of pledged kg across active pledges.
    pub fn total_pledged(&self) -> u64 {
        self.active_pledges
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.pledged_amount))
    }

    pub fn pledges_in(&self, status: CropStatus) -> impl Iterator<Item = &PledgedCrop> {
        self.active_pledges.iter().filter(move |p| p.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_total_pledged() {
        let fx = Fixtures::builtin();
        assert_eq!(fx.profile.total_pledged(), 1700);
        assert_eq!(fx.profile.pledges_in(CropStatus::Growing).count(), 2);
        assert_eq!(fx.profile.pledges_in(CropStatus::Completed).count(), 0);
    }

    #[test]
    fn test_progress_clamped() {
        let crop = PledgedCrop {
            id: "x".into(),
            name: "Test".into(),
            pledged_amount: 0,
            harvest_date: String::new(),
            status: CropStatus::Growing,
            growth_progress: 150,
        };
        assert_eq!(crop.progress(), 100);
    }
}
