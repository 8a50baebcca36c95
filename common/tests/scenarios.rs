//! Page-level scenarios run against the built-in fixtures, plus fixture
//! bundles loaded from disk.

use std::io::Write;

use chrono::NaiveDate;
use dirikita_common::activity::{ActivityFeedState, ActivityFilter};
use dirikita_common::batch::{BatchForm, BatchFormError, BatchManager, BatchStatus};
use dirikita_common::cart::ShopState;
use dirikita_common::catalog::{CategoryFilter, SortKey};
use dirikita_common::checkout::DeliveryMethod;
use dirikita_common::currency::Pesos;
use dirikita_common::demand::{DemandBoardState, Granularity, PledgeMode, SaturationBand, ServeLocation};
use dirikita_common::product::{ProductCategory, ProductId};
use dirikita_common::{FixtureError, Fixtures};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn shop_browse_fill_cart_and_check_out() {
    tracing_subscriber::fmt::try_init().ok();
    let fx = Fixtures::builtin();
    let mut shop = ShopState::new();

    // ── Browse ──
    shop.query.category = CategoryFilter::Only(ProductCategory::Root);
    shop.query.sort = SortKey::PriceLow;
    let names: Vec<_> = shop
        .visible_products(&fx.products)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Native Carrots", "Red Onions"]);

    shop.query.text = "MARIA".into();
    assert_eq!(shop.visible_products(&fx.products).len(), 1);

    // ── Cart ──
    assert!(!shop.open_review(&fx.products));
    shop.adjust(&fx.products, &ProductId::new("1"), 2);
    shop.adjust(&fx.products, &ProductId::new("2"), 1);
    assert_eq!(shop.cart.total_items(), 3);
    assert!(shop.open_review(&fx.products));

    // ── Checkout ──
    let summary = shop.summary(&fx.products);
    assert_eq!(summary.subtotal, Pesos(420));
    assert_eq!(summary.total, Pesos(465));
    assert_eq!(summary.confirm_label(), "Place Delivery Order");

    shop.checkout.set_method(DeliveryMethod::Pickup);
    let summary = shop.summary(&fx.products);
    assert_eq!(summary.total, Pesos(420));
    assert!(summary.is_free_delivery());
    assert_eq!(
        shop.checkout
            .selected_pickup(&fx.pickup_points)
            .map(|p| p.id.as_str()),
        Some("p1")
    );
    assert!(shop.checkout.select_pickup(&fx.pickup_points, "p3"));

    // ── Empty the cart ──
    shop.adjust(&fx.products, &ProductId::new("1"), -2);
    assert!(shop.is_review_open());
    shop.adjust(&fx.products, &ProductId::new("2"), -1);
    assert!(shop.cart.is_empty());
    assert!(!shop.is_review_open());
}

#[test]
fn demand_board_filters_and_modes() {
    let fx = Fixtures::builtin();
    let today = date(2026, 10, 17);
    let mut board = DemandBoardState::new(today);
    assert_eq!(board.pledge_mode(today), PledgeMode::InstantOffer);

    let cards = board.cards(&fx.demand, today);
    assert_eq!(cards.len(), 4);

    let carrots = &cards[0];
    assert_eq!(carrots.saturation.percent(), 99);
    assert_eq!(carrots.saturation.band(), SaturationBand::NearFull);
    assert_eq!(carrots.action.label, "Make Offer (Now)");

    let cabbage = &cards[2];
    assert_eq!(cabbage.saturation.percent(), 100);
    assert_eq!(cabbage.saturation.raw_percent(), 120);
    assert!((cabbage.saturation.ratio() - 1.2).abs() < 1e-9);
    assert_eq!(cabbage.saturation.band(), SaturationBand::Full);
    assert!(!cabbage.action.enabled);

    let nationwide = carrots.wider_saturation(Granularity::Nationwide, 4250);
    assert_eq!(nationwide.percent(), 50);

    board.set_month(date(2026, 12, 20));
    assert_eq!(board.month, date(2026, 12, 1));
    assert_eq!(board.pledge_mode(today), PledgeMode::FuturePledge);
    let cards = board.cards(&fx.demand, today);
    assert_eq!(cards[0].action.label, "Pledge Supply (Future)");

    board.search = "  cebu ".into();
    board.serve_location = ServeLocation::Named("Cebu City".into());
    let cards = board.cards(&fx.demand, today);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].location.location, "Cebu City");
    assert_eq!(cards[0].saturation.percent(), 86);
}

#[test]
fn register_and_manage_batch() {
    let fx = Fixtures::builtin();
    let mut form = BatchForm::new(fx.home_location.clone());
    assert_eq!(form.location, "Tubungan, Iloilo, Philippines");
    assert_eq!(form.submit("B-2026-002"), Err(BatchFormError::MissingCrop));

    let carrots = fx.crop("c1").unwrap();
    form.select_crop(carrots);
    assert_eq!(form.submit("B-2026-002"), Err(BatchFormError::MissingPlantedDate));

    form.set_planted_date(Some(date(2025, 10, 12)));
    assert_eq!(form.est_harvest_date(), Some(date(2026, 1, 10)));

    let lettuce = fx.crop("c3").unwrap();
    form.select_crop(lettuce);
    assert_eq!(form.est_harvest_date(), Some(date(2025, 11, 26)));

    let batch = form.submit("B-2026-002").unwrap();
    assert_eq!(batch.crop, "Iceberg Lettuce");
    assert_eq!(batch.status, BatchStatus::Growing);

    let mut manager = BatchManager::new(fx.current_batch.clone());
    assert!(!manager.set_status(BatchStatus::Harvested));
    assert!(manager.set_status(BatchStatus::HarvestReady));
    let active: Vec<_> = manager.stages().into_iter().filter(|s| s.active).collect();
    assert_eq!(active.len(), 1);
    assert!(active[0].shows_harvest_reason);

    let managed = &manager.batch;
    assert!(batch.analytics.is_empty());
    assert_eq!(managed.analytics.trend_points().len(), 7);
    assert_eq!(managed.analytics.price_bars().len(), 5);
    assert_eq!(managed.expenses.total(), 100);
    let science = managed.science.as_ref().unwrap();
    assert_eq!(science.variety, "Benguet Kuroda");
    assert_eq!(science.tips.len(), 2);
}

#[test]
fn activity_alias_filter() {
    let fx = Fixtures::builtin();
    let mut feed = ActivityFeedState::default();
    feed.select("alerts".parse::<ActivityFilter>().unwrap());
    let view = feed.view(&fx.activities);
    assert_eq!(view.len(), 1);
    assert!(view.earlier.is_empty());
    assert_eq!(view.latest[0].title, "Oversupply Warning: Red Onions");
}

#[test]
fn fixture_bundle_round_trips_through_disk() {
    let fx = Fixtures::builtin();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fx.to_json_pretty().unwrap().as_bytes())
        .unwrap();

    let loaded = Fixtures::load(file.path()).unwrap();
    assert_eq!(loaded, fx);
}

#[test]
fn fixture_bundle_with_unbalanced_breakdown_is_rejected() {
    let mut fx = Fixtures::builtin();
    fx.products[0].breakdown.platform += 1;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");
    std::fs::write(&path, fx.to_json_pretty().unwrap()).unwrap();

    match Fixtures::load(&path) {
        Err(FixtureError::UnbalancedBreakdown { sum, price, .. }) => {
            assert_eq!(sum, 121);
            assert_eq!(price, 120);
        }
        other => panic!("expected unbalanced breakdown, got {other:?}"),
    }
}

#[test]
fn missing_fixture_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Fixtures::load(&path).unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
