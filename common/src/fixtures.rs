//! Static mock datasets behind every page.
//!
//! [`Fixtures::builtin`] is the data the app ships with. A bundle with the same
//! shape can be loaded from JSON to swap the data out.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityItem, ActivityKind, ActivityMeta};
use crate::analytics::{BatchAnalytics, CropScience, PricePoint};
use crate::batch::{
    BatchInputs, BatchStatus, CropOption, ExpenseShares, HarvestReason, Personnel, ProduceBatch,
};
use crate::checkout::{PickupPoint, PickupStatus};
use crate::demand::{DemandItem, DemandStatus, LocationDemand};
use crate::error::FixtureError;
use crate::feedback::{DonationCampaign, FeedbackItem, FeedbackKind, ImpactStats, Urgency};
use crate::produce::{ProduceItem, ProduceStatus};
use crate::product::{PriceBreakdown, Product, ProductCategory, ProductId};
use crate::profile::{CropStatus, FarmerProfile, PledgedCrop};
use crate::program::{Accent, Program, ProgramCategory};

/// Every dataset the pages read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    /// Default location of the batch registration form.
    pub home_location: String,
    pub products: Vec<Product>,
    pub pickup_points: Vec<PickupPoint>,
    pub demand: Vec<DemandItem>,
    pub activities: Vec<ActivityItem>,
    pub crops: Vec<CropOption>,
    pub current_batch: ProduceBatch,
    pub produce: Vec<ProduceItem>,
    pub programs: Vec<Program>,
    pub feedback: Vec<FeedbackItem>,
    pub campaigns: Vec<DonationCampaign>,
    pub impact: ImpactStats,
    pub profile: FarmerProfile,
}

impl Fixtures {
    /// Parse and validate a JSON bundle.
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        let fixtures: Fixtures = serde_json::from_str(json)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Read, parse and validate a JSON bundle from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            products = fixtures.products.len(),
            demand = fixtures.demand.len(),
            activities = fixtures.activities.len(),
            "loaded fixtures"
        );
        Ok(fixtures)
    }

    pub fn to_json_pretty(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the pages rely on: unique product ids, balanced
    /// price breakdowns, and at least one location per demand item.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = BTreeSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(FixtureError::DuplicateProduct(product.id.clone()));
            }
            match product.breakdown.sum() {
                None => return Err(FixtureError::BreakdownOverflow(product.id.clone())),
                Some(sum) if sum != product.price => {
                    return Err(FixtureError::UnbalancedBreakdown {
                        id: product.id.clone(),
                        sum,
                        price: product.price,
                    });
                }
                Some(_) => {}
            }
        }
        if let Some(item) = self.demand.iter().find(|d| d.location_data.is_empty()) {
            return Err(FixtureError::EmptyDemand(item.id.clone()));
        }
        Ok(())
    }

    pub fn crop(&self, id: &str) -> Option<&CropOption> {
        self.crops.iter().find(|c| c.id == id)
    }

    pub fn builtin() -> Self {
        Fixtures {
            home_location: "Tubungan, Iloilo, Philippines".into(),
            products: builtin_products(),
            pickup_points: builtin_pickup_points(),
            demand: builtin_demand(),
            activities: builtin_activities(),
            crops: builtin_crops(),
            current_batch: builtin_batch(),
            produce: builtin_produce(),
            programs: builtin_programs(),
            feedback: builtin_feedback(),
            campaigns: builtin_campaigns(),
            impact: ImpactStats {
                ani_points: 12_450,
                families_fed: 842,
                donated_kg: 120,
            },
            profile: builtin_profile(),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_products() -> Vec<Product> {
    #[allow(clippy::too_many_arguments)]
    fn product(
        id: &str,
        name: &str,
        farmer_name: &str,
        location: &str,
        image: &str,
        price: u64,
        rating: f32,
        orders: u64,
        category: ProductCategory,
        breakdown: [u64; 4],
        is_popular: bool,
    ) -> Product {
        let [farmer, logistics, packaging, platform] = breakdown;
        Product {
            id: ProductId::new(id),
            name: name.into(),
            farmer_name: farmer_name.into(),
            location: location.into(),
            image: image.into(),
            price,
            rating,
            orders,
            category,
            breakdown: PriceBreakdown {
                farmer,
                logistics,
                packaging,
                platform,
            },
            is_popular,
        }
    }

    vec![
        product(
            "1",
            "Native Carrots",
            "Mang Jose",
            "Benguet",
            "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?auto=format&fit=crop&q=80&w=600",
            120,
            4.8,
            1540,
            ProductCategory::Root,
            [85, 20, 10, 5],
            true,
        ),
        product(
            "2",
            "Red Onions",
            "Aling Maria",
            "Nueva Ecija",
            "https://images.unsplash.com/photo-1618512496248-a07fe83aa8cb?auto=format&fit=crop&q=80&w=600",
            180,
            4.9,
            2300,
            ProductCategory::Root,
            [140, 25, 10, 5],
            false,
        ),
        product(
            "3",
            "Romaine Lettuce",
            "Benguet Coop",
            "La Trinidad",
            "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?auto=format&fit=crop&q=80&w=600",
            150,
            4.7,
            890,
            ProductCategory::Leafy,
            [100, 30, 15, 5],
            false,
        ),
        product(
            "4",
            "Lakatan Banana",
            "Davao Farms",
            "Davao",
            "https://images.unsplash.com/photo-1528825871115-3581a5387919?auto=format&fit=crop&q=80&w=600",
            90,
            4.6,
            1200,
            ProductCategory::Fruit,
            [60, 20, 5, 5],
            false,
        ),
    ]
}

fn builtin_pickup_points() -> Vec<PickupPoint> {
    let point = |id: &str, name: &str, distance: &str, ready_time: &str| PickupPoint {
        id: id.into(),
        name: name.into(),
        distance: distance.into(),
        ready_time: ready_time.into(),
        status: PickupStatus::Available,
    };
    vec![
        point("p1", "Tubungan Plaza Hub", "0.8 km", "2 hours"),
        point("p2", "Igbaras Crossing", "3.2 km", "4 hours"),
        point("p3", "Guimbal Market Center", "8.5 km", "Tomorrow"),
    ]
}

fn builtin_demand() -> Vec<DemandItem> {
    let loc = |location: &str, suggested: u64, mine: u64, pledged: u64, total: u64, regional: u64| {
        LocationDemand {
            location: location.into(),
            suggested_amount: suggested,
            my_pledge: mine,
            pledged_amount: pledged,
            total_demand: total,
            regional_demand: regional,
        }
    };
    vec![
        DemandItem {
            id: "1".into(),
            name: "Native Carrots".into(),
            image: "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?auto=format&fit=crop&q=80&w=600".into(),
            status: DemandStatus::Critical,
            nationwide_demand: 8500,
            location_data: vec![
                loc("Metro Manila", 200, 50, 3500, 3550, 8000),
                loc("Cebu City", 150, 0, 1200, 1400, 4000),
            ],
        },
        DemandItem {
            id: "2".into(),
            name: "Red Onions".into(),
            image: "https://images.unsplash.com/photo-1618512496248-a07fe83aa8cb?auto=format&fit=crop&q=80&w=600".into(),
            status: DemandStatus::Sustain,
            nationwide_demand: 12000,
            location_data: vec![loc("Metro Manila", 400, 100, 1200, 1800, 10000)],
        },
        DemandItem {
            id: "3".into(),
            name: "Baguio Cabbage".into(),
            image: "https://images.unsplash.com/photo-1664337872260-c388d9fee71b?q=80&w=2670&auto=format&fit=crop".into(),
            status: DemandStatus::Pause,
            nationwide_demand: 5500,
            location_data: vec![loc("Metro Manila", 0, 0, 600, 500, 400)],
        },
        DemandItem {
            id: "4".into(),
            name: "Cavendish Banana".into(),
            image: "https://plus.unsplash.com/premium_photo-1724250081102-cab0e5cb314c?q=80&w=2670&auto=format&fit=crop".into(),
            status: DemandStatus::Sustain,
            nationwide_demand: 15000,
            location_data: vec![loc("Metro Manila", 350, 0, 900, 1800, 12000)],
        },
    ]
}

fn builtin_activities() -> Vec<ActivityItem> {
    let meta = |price_change: Option<&str>, location: Option<&str>, action: &str| ActivityMeta {
        price_change: price_change.map(str::to_string),
        location: location.map(str::to_string),
        action_label: Some(action.to_string()),
    };
    let item = |id: &str,
                kind: ActivityKind,
                title: &str,
                description: &str,
                timestamp: &str,
                is_read: bool,
                metadata: ActivityMeta| ActivityItem {
        id: id.into(),
        kind,
        title: title.into(),
        description: description.into(),
        timestamp: timestamp.into(),
        is_read,
        metadata,
    };
    vec![
        item(
            "1",
            ActivityKind::Alert,
            "Oversupply Warning: Red Onions",
            "Market saturation in Metro Manila hubs reached 95%. Suggested: Hold harvest or redirect to Cebu hub.",
            "10 mins ago",
            false,
            meta(None, None, "View Alternative Routes"),
        ),
        item(
            "2",
            ActivityKind::Logistics,
            "Shipment #402 Arrived",
            "Your 500kg of Native Carrots has arrived at the Balintawak Consolidation Hub and is being graded.",
            "2 hours ago",
            false,
            meta(None, Some("Quezon City"), "View Receipt"),
        ),
        item(
            "3",
            ActivityKind::Weather,
            "Heavy Rain Expected",
            "Typhoon signal #1 raised in Benguet. Heavy rainfall expected tomorrow afternoon. Secure greenhouses.",
            "4 hours ago",
            true,
            meta(None, None, "See Rainfall Forecast"),
        ),
        item(
            "4",
            ActivityKind::Operations,
            "Harvest Notification",
            "Your \"Iceberg Lettuce\" batch (Plot A-4) is scheduled for harvest in 2 days based on planting date.",
            "Yesterday",
            true,
            meta(None, None, "Confirm Harvest"),
        ),
        item(
            "5",
            ActivityKind::Market,
            "Input Price Drop: Urea",
            "Local fertilizer prices for Urea 46-0-0 dropped by ₱150/bag at \"Benguet Farm Supply\".",
            "Yesterday",
            true,
            meta(Some("-8%"), None, "Order Supplies"),
        ),
        item(
            "6",
            ActivityKind::Finance,
            "Planting Suggestion: Bell Peppers",
            "Demand for Bell Peppers is projected to rise +20% next month due to holiday surge.",
            "2 days ago",
            true,
            meta(None, None, "View Demand Chart"),
        ),
    ]
}

fn builtin_crops() -> Vec<CropOption> {
    let crop = |id: &str, name: &str, image: &str, days: u32| CropOption {
        id: id.into(),
        name: name.into(),
        image: image.into(),
        days_to_harvest: days,
    };
    vec![
        crop(
            "c1",
            "Native Carrots",
            "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?auto=format&fit=crop&q=80&w=200",
            90,
        ),
        crop(
            "c2",
            "Red Onions",
            "https://images.unsplash.com/photo-1618512496248-a07fe83aa8cb?auto=format&fit=crop&q=80&w=200",
            120,
        ),
        crop(
            "c3",
            "Iceberg Lettuce",
            "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?auto=format&fit=crop&q=80&w=200",
            45,
        ),
        crop(
            "c4",
            "Bell Peppers",
            "https://images.unsplash.com/photo-1563565375-f3fdf5d2e374?auto=format&fit=crop&q=80&w=200",
            75,
        ),
    ]
}

fn builtin_batch() -> ProduceBatch {
    ProduceBatch {
        id: "B-2026-001".into(),
        crop: "Native Carrots".into(),
        status: BatchStatus::Growing,
        planted_date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap_or_default(),
        est_harvest_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap_or_default(),
        planted_qty_kg: Some(500),
        personnel: Personnel {
            planted_by: "Mang Jose".into(),
            supervisor: "Elly Tamayor".into(),
            harvest_crew: "Team Alpha (Scheduled)".into(),
        },
        inputs: BatchInputs {
            seed_source: "Harbest Agrotech".into(),
            seed_type: "F1 Hybrid Treated".into(),
            fertilizer: "Organic Chicken Manure".into(),
        },
        harvest_reason: HarvestReason::Optimal,
        expenses: ExpenseShares {
            seeds: 30,
            labor: 40,
            fertilizer: 20,
            logistics: 10,
        },
        analytics: BatchAnalytics {
            sales_trend: vec![40, 65, 55, 80, 95, 110, 105],
            price_check: [
                ("Sep", 80, 85),
                ("Oct", 75, 85),
                ("Nov", 90, 95),
                ("Dec", 110, 105),
                ("Jan", 120, 115),
            ]
            .into_iter()
            .map(|(month, market, mine)| PricePoint {
                month: month.into(),
                market,
                mine,
            })
            .collect(),
        },
        science: Some(CropScience {
            variety: "Benguet Kuroda".into(),
            scientific_name: "Daucus carota subsp. sativus".into(),
            soil_ph: "6.0 - 6.8".into(),
            temperature: "15°C - 20°C".into(),
            description: "Carrots require deep, loose, sandy soil to develop straight roots. \
                          Kuroda variety is heat tolerant but thrives in highland cool weather. \
                          Rich in Beta-carotene."
                .into(),
            tips: vec![
                "Avoid high nitrogen to prevent forking.".into(),
                "Keep soil consistently moist during germination.".into(),
            ],
        }),
    }
}

fn builtin_produce() -> Vec<ProduceItem> {
    let base = |id: &str, name: &str, status: ProduceStatus| ProduceItem {
        id: id.into(),
        name: name.into(),
        status,
        current_amount: None,
        total_yield: None,
        last_sale_price: None,
        sold_price: None,
        days_until_harvest: None,
        planted_date: None,
        sold_date: None,
    };
    vec![
        ProduceItem {
            current_amount: Some(500),
            last_sale_price: Some(85),
            days_until_harvest: Some(45),
            planted_date: Some("Oct 12".into()),
            ..base("1", "Native Carrots", ProduceStatus::Growing)
        },
        ProduceItem {
            current_amount: Some(1200),
            last_sale_price: Some(110),
            planted_date: Some("Aug 15".into()),
            ..base("2", "Red Onions", ProduceStatus::InTransit)
        },
        ProduceItem {
            last_sale_price: Some(0),
            ..base("3", "Plot C - Fallow", ProduceStatus::PlantNow)
        },
        ProduceItem {
            total_yield: Some(350),
            sold_price: Some(140),
            sold_date: Some("Dec 20, 2025".into()),
            ..base("4", "Iceberg Lettuce", ProduceStatus::Sold)
        },
        ProduceItem {
            last_sale_price: Some(220),
            ..base("5", "Bell Peppers", ProduceStatus::Idle)
        },
    ]
}

fn builtin_programs() -> Vec<Program> {
    let program = |id: &str,
                   title: &str,
                   description: &str,
                   category: ProgramCategory,
                   accent: Accent,
                   action_label: &str,
                   is_popular: bool,
                   tags: &[&str]| Program {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        accent,
        action_label: action_label.into(),
        is_popular,
        tags: strings(tags),
    };
    vec![
        program(
            "1",
            "Seed Capital & Micro-Loans",
            "Low-interest financing for seeds, fertilizers, and equipment. Pay back only after you harvest.",
            ProgramCategory::Finance,
            Accent::Emerald,
            "Check Eligibility",
            true,
            &["Low Interest", "Pay Later"],
        ),
        program(
            "2",
            "Talk with Agri-Experts",
            "Book a 30-minute video call with agronomists to diagnose pests or improve yield strategies.",
            ProgramCategory::Education,
            Accent::Blue,
            "Book Consultation",
            false,
            &["Free for Members", "Video Call"],
        ),
        program(
            "3",
            "Duruha Logistics Pool",
            "Share truck space with nearby farmers sending produce to the same city. Reduce transport costs by 40%.",
            ProgramCategory::Logistics,
            Accent::Amber,
            "Find Routes",
            true,
            &["Cost Saver", "Daily Trips"],
        ),
        program(
            "4",
            "Harvest Shield Insurance",
            "Protect your crops against typhoons and droughts. Instant payout based on local weather data.",
            ProgramCategory::Protection,
            Accent::Indigo,
            "View Coverage",
            false,
            &["Weather Index", "Fast Payout"],
        ),
        program(
            "5",
            "Bulk Input Group Buy",
            "Join 500+ farmers buying organic fertilizers in bulk. Get wholesale prices delivered to your zone.",
            ProgramCategory::Finance,
            Accent::Rose,
            "Join Group Buy",
            false,
            &["Wholesale Price", "Organic"],
        ),
        program(
            "6",
            "GAP Certification Assist",
            "Step-by-step guidance and paperwork assistance to get your Good Agricultural Practice (GAP) seal.",
            ProgramCategory::Education,
            Accent::Teal,
            "Start Certification",
            false,
            &["Premium Pricing", "Export Ready"],
        ),
    ]
}

fn builtin_feedback() -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: "1".into(),
            kind: FeedbackKind::Video,
            customer_location: "Makati City".into(),
            media_url: None,
            message: "We used your organic carrots for our baby's first solid food! Thank you for growing such clean produce.".into(),
            product_name: "Native Carrots".into(),
            batch_id: "BATCH-8821".into(),
            date: "2 days ago".into(),
            rating: 5,
        },
        FeedbackItem {
            id: "2".into(),
            kind: FeedbackKind::Photo,
            customer_location: "Cebu City".into(),
            media_url: None,
            message: "Made a huge salad for the family reunion. The lettuce was incredibly crisp even after shipping!".into(),
            product_name: "Iceberg Lettuce".into(),
            batch_id: "BATCH-9001".into(),
            date: "1 week ago".into(),
            rating: 5,
        },
        FeedbackItem {
            id: "3".into(),
            kind: FeedbackKind::Text,
            customer_location: "Taguig".into(),
            media_url: None,
            message: "Sarap ng onions! Very aromatic unlike the imported ones. Will buy again.".into(),
            product_name: "Red Onions".into(),
            batch_id: "BATCH-7723".into(),
            date: "3 days ago".into(),
            rating: 4,
        },
    ]
}

fn builtin_campaigns() -> Vec<DonationCampaign> {
    vec![
        DonationCampaign {
            id: "d1".into(),
            title: "Soup Kitchen Drive".into(),
            beneficiary: "Tondo Community Center".into(),
            urgency: Urgency::High,
            target: "Root Vegetables".into(),
            collected: 65,
        },
        DonationCampaign {
            id: "d2".into(),
            title: "School Feeding Program".into(),
            beneficiary: "Benguet Elementary".into(),
            urgency: Urgency::Normal,
            target: "Leafy Greens & Eggs".into(),
            collected: 30,
        },
    ]
}

fn builtin_profile() -> FarmerProfile {
    let pledge = |id: &str, name: &str, amount: u64, harvest: &str, status: CropStatus, progress: u8| {
        PledgedCrop {
            id: id.into(),
            name: name.into(),
            pledged_amount: amount,
            harvest_date: harvest.into(),
            status,
            growth_progress: progress,
        }
    };
    FarmerProfile {
        id: "f1".into(),
        name: "Mang Jose Rivera".into(),
        location: "La Trinidad, Benguet".into(),
        cover_image: String::new(),
        years_farming: 15,
        joined_date: "August 2024".into(),
        bio: "Specializing in high-elevation organic root vegetables. We practice regenerative farming to ensure the soil stays healthy for the next generation.".into(),
        rating: 4.9,
        verified: true,
        active_pledges: vec![
            pledge("p1", "Native Carrots", 500, "Oct 15, 2026", CropStatus::Growing, 65),
            pledge("p2", "Iceberg Lettuce", 200, "Sep 28, 2026", CropStatus::Harvesting, 95),
            pledge("p3", "Red Onions", 1000, "Nov 01, 2026", CropStatus::Growing, 30),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        let fx = Fixtures::builtin();
        fx.validate().unwrap();
        assert_eq!(fx.products.len(), 4);
        assert_eq!(fx.crop("c3").map(|c| c.days_to_harvest), Some(45));
        assert!(fx.crop("c9").is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let fx = Fixtures::builtin();
        let json = fx.to_json_pretty().unwrap();
        let parsed = Fixtures::from_json_str(&json).unwrap();
        assert_eq!(parsed, fx);
    }

    #[test]
    fn test_unbalanced_breakdown_rejected() {
        let mut fx = Fixtures::builtin();
        fx.products[1].price = 200;
        match fx.validate() {
            Err(FixtureError::UnbalancedBreakdown { id, sum, price }) => {
                assert_eq!(id, ProductId::new("2"));
                assert_eq!(sum, 180);
                assert_eq!(price, 200);
            }
            other => panic!("expected unbalanced breakdown, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_breakdown_rejected() {
        let mut value = serde_json::to_value(Fixtures::builtin()).unwrap();
        value["products"][0]["breakdown"]["farmer"] = serde_json::json!(u64::MAX);
        let json = serde_json::to_string(&value).unwrap();
        match Fixtures::from_json_str(&json) {
            Err(FixtureError::BreakdownOverflow(id)) => assert_eq!(id, ProductId::new("1")),
            other => panic!("expected breakdown overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let mut fx = Fixtures::builtin();
        let dup = fx.products[0].clone();
        fx.products.push(dup);
        assert!(matches!(fx.validate(), Err(FixtureError::DuplicateProduct(_))));
    }

    #[test]
    fn test_empty_demand_rejected() {
        let mut fx = Fixtures::builtin();
        fx.demand[2].location_data.clear();
        assert!(matches!(fx.validate(), Err(FixtureError::EmptyDemand(id)) if id == "3"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Fixtures::from_json_str("{"), Err(FixtureError::Json(_))));
    }
}
