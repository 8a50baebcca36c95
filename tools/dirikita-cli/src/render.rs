//! Derived views printed by the subcommands, and their text form.

use chrono::NaiveDate;
use serde::Serialize;

use dirikita_common::activity::{ActivityFilter, ActivityItem, FeedView};
use dirikita_common::analytics::{ChartPoint, PriceBars};
use dirikita_common::batch::{CropOption, ProduceBatch, StageCard};
use dirikita_common::calendar::format_long;
use dirikita_common::cart::CartLine;
use dirikita_common::checkout::{CheckoutSummary, PickupPoint};
use dirikita_common::currency::{format_kg, Pesos};
use dirikita_common::demand::{DemandCard, PledgeMode, Saturation};
use dirikita_common::feedback::{
    DonationCampaign, FeedbackItem, ImpactStats, RatingSummary, ThankYouTab,
};
use dirikita_common::produce::{stat_or_dash, ProduceItem, ProduceView};
use dirikita_common::product::{BreakdownShare, Product};
use dirikita_common::profile::FarmerProfile;
use dirikita_common::program::{Program, ProgramFilter};

#[derive(Serialize)]
pub struct CatalogReport<'a> {
    pub products: Vec<&'a Product>,
    pub breakdown: Option<(&'a Product, [BreakdownShare; 4])>,
}

#[derive(Serialize)]
pub struct CartReport<'a> {
    pub lines: Vec<CartLine<'a>>,
    pub total_items: u64,
    pub summary: CheckoutSummary,
    pub pickup: Option<&'a PickupPoint>,
    pub can_check_out: bool,
}

#[derive(Serialize)]
pub struct DemandReport<'a> {
    pub month: String,
    pub serve_location: String,
    pub mode: PledgeMode,
    pub cards: Vec<DemandCard<'a>>,
    /// One entry per card when a wider scope was requested.
    pub wider: Vec<Saturation>,
}

#[derive(Serialize)]
pub struct HarvestReport<'a> {
    pub crop: &'a CropOption,
    pub location: &'a str,
    pub planted: Option<NaiveDate>,
    pub est_harvest: Option<NaiveDate>,
    pub batch: Option<ProduceBatch>,
}

#[derive(Serialize)]
pub struct ActivityReport<'a> {
    pub filter: ActivityFilter,
    pub unread: usize,
    pub view: FeedView<'a>,
}

#[derive(Serialize)]
pub struct ProgramsReport<'a> {
    pub filter: ProgramFilter,
    pub programs: Vec<&'a Program>,
}

#[derive(Serialize)]
pub struct ProduceReport<'a> {
    pub view: ProduceView,
    pub items: Vec<&'a ProduceItem>,
    pub total_revenue: Pesos,
}

#[derive(Serialize)]
pub struct BatchReport {
    pub batch: ProduceBatch,
    pub stages: Vec<StageCard>,
    pub regressed: bool,
    pub trend: Vec<ChartPoint>,
    pub price_check: Vec<PriceBars>,
}

#[derive(Serialize)]
pub struct ProfileReport<'a> {
    pub profile: &'a FarmerProfile,
    pub total_pledged: u64,
}

#[derive(Serialize)]
pub struct ImpactReport<'a> {
    pub tab: ThankYouTab,
    pub stats: ImpactStats,
    pub ratings: RatingSummary,
    pub feedback: &'a [FeedbackItem],
    pub campaigns: &'a [DonationCampaign],
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    stat_or_dash(date.map(format_long))
}

// ─── Text renderers ─────────────────────────────────────────────────────────

pub fn catalog(report: &CatalogReport<'_>) {
    if report.products.is_empty() {
        println!("No products match.");
    }
    for p in &report.products {
        let popular = if p.is_popular { "  [popular]" } else { "" };
        println!(
            "{:>3}  {:<18} {:>6}/kg  {:<14} {:<12} {:.1}★  {} orders{}",
            p.id,
            p.name,
            p.price().to_string(),
            p.farmer_name,
            p.location,
            p.rating,
            p.orders,
            popular
        );
    }
    if let Some((product, shares)) = &report.breakdown {
        println!();
        println!("Where your {} goes ({}):", product.price(), product.name);
        for share in shares {
            println!("  {:<10} {:>6}  {:>3}%", share.label, share.amount.to_string(), share.percent);
        }
    }
}

pub fn cart(report: &CartReport<'_>) {
    if report.lines.is_empty() {
        println!("Cart is empty.");
        return;
    }
    for line in &report.lines {
        println!(
            "{:>3} × {:<18} {:>8}",
            line.quantity,
            line.product.name,
            line.line_total.to_string()
        );
    }
    let summary = &report.summary;
    println!("{} items in {} lines", report.total_items, summary.line_count);
    println!("Subtotal  {:>8}", summary.subtotal.to_string());
    let fee = if summary.is_free_delivery() {
        "Free".to_string()
    } else {
        summary.fee.to_string()
    };
    println!("{:<9} {:>8}", summary.method.label(), fee);
    println!("Total     {:>8}", summary.total.to_string());
    if let Some(point) = report.pickup {
        println!(
            "Pickup at {} ({}, ready in {})",
            point.name, point.distance, point.ready_time
        );
    }
    println!("[{}]", summary.confirm_label());
}

fn saturation_line(sat: &Saturation) -> String {
    let over = if sat.is_oversupplied() { "  oversupplied" } else { "" };
    format!(
        "{} / {}  {}% ({}){}",
        format_kg(sat.pledged),
        format_kg(sat.ceiling),
        sat.percent(),
        sat.band().tone().name(),
        over
    )
}

pub fn demand(report: &DemandReport<'_>) {
    println!(
        "{} · {} · {}",
        report.month,
        report.serve_location,
        report.mode.label()
    );
    if report.cards.is_empty() {
        println!("No demand listed for that location.");
    }
    for (i, card) in report.cards.iter().enumerate() {
        println!();
        println!(
            "{} [{}] at {}",
            card.item.name,
            card.item.status.label(),
            card.location.location
        );
        println!("  saturation  {}", saturation_line(&card.saturation));
        if let Some(wider) = report.wider.get(i) {
            println!("  {:<10}  {}", format!("{:?}", wider.granularity).to_lowercase(), saturation_line(wider));
        }
        println!(
            "  suggested {}, your last pledge {}",
            format_kg(card.location.suggested_amount),
            format_kg(card.location.my_pledge)
        );
        let state = if card.action.enabled { "" } else { " (disabled)" };
        println!("  [{}]{}", card.action.label, state);
    }
}

pub fn harvest(report: &HarvestReport<'_>) {
    println!(
        "{} ({} days to harvest) at {}",
        report.crop.name, report.crop.days_to_harvest, report.location
    );
    println!("  planted      {}", date_or_dash(report.planted));
    println!("  est. harvest {}", date_or_dash(report.est_harvest));
    if let Some(batch) = &report.batch {
        println!("Registered batch {} ({})", batch.id, batch.status.label());
    }
}

pub fn activity(report: &ActivityReport<'_>) {
    println!("{} unread · filter: {}", report.unread, report.filter);
    if report.view.is_empty() {
        println!("No activity.");
        return;
    }
    let section = |title: &str, items: &[&ActivityItem]| {
        if items.is_empty() {
            return;
        }
        println!();
        println!("{title}");
        for item in items {
            let dot = if item.is_read { " " } else { "•" };
            println!("{dot} [{}] {} ({})", item.kind.as_str(), item.title, item.timestamp);
            println!("    {}", item.description);
            if let Some(action) = &item.metadata.action_label {
                println!("    → {action}");
            }
        }
    };
    section("Latest", &report.view.latest[..]);
    section("Earlier", &report.view.earlier[..]);
}

pub fn programs(report: &ProgramsReport<'_>) {
    if report.programs.is_empty() {
        println!("No programs in this category.");
    }
    for program in &report.programs {
        let popular = if program.is_popular { " ★" } else { "" };
        println!("{} [{}]{}", program.title, program.category.as_str(), popular);
        println!("    {}", program.description);
        if !program.tags.is_empty() {
            println!("    {}", program.tags.join(" · "));
        }
        println!("    [{}]", program.action_label);
    }
}

pub fn produce(report: &ProduceReport<'_>) {
    for item in &report.items {
        let qty = stat_or_dash(item.display_quantity().map(format_kg));
        let price = stat_or_dash(item.display_price());
        println!(
            "{:<18} {:<11} {:>10}  {:>6}/kg",
            item.name,
            item.status.label(),
            qty,
            price
        );
    }
    if report.view == ProduceView::History {
        println!("Total revenue {}", report.total_revenue);
    }
}

pub fn batch(report: &BatchReport) {
    let b = &report.batch;
    println!("{} · {} · {}", b.id, b.crop, b.status.label());
    if report.regressed {
        println!("  (moved back a stage)");
    }
    println!(
        "  planted {}  est. harvest {}  qty {}",
        format_long(b.planted_date),
        format_long(b.est_harvest_date),
        stat_or_dash(b.planted_qty_kg.map(format_kg))
    );
    for stage in &report.stages {
        let marker = if stage.active { ">" } else { " " };
        println!("  {marker} {}", stage.status.label());
        if stage.active && stage.shows_harvest_reason {
            println!("      reason: {}", b.harvest_reason.label());
        }
    }
    if !b.analytics.sales_trend.is_empty() {
        let samples: Vec<String> = b.analytics.sales_trend.iter().map(u64::to_string).collect();
        println!("  sales trend: {}", samples.join(" → "));
    }
    if !report.price_check.is_empty() {
        println!("  price check (market / mine):");
        for bars in &report.price_check {
            println!(
                "    {:<4} {:>8} {:>8}  {:+}",
                bars.month,
                Pesos(bars.market).to_string(),
                Pesos(bars.mine).to_string(),
                bars.gap()
            );
        }
    }
    if b.expenses.total() > 0 {
        println!("  costs:");
        for (label, pct, _) in b.expenses.segments() {
            println!("    {label:<10} {pct:>3}%");
        }
    }
    if let Some(science) = &b.science {
        println!("  {} ({})", science.variety, science.scientific_name);
        println!("    soil pH {}  temperature {}", science.soil_ph, science.temperature);
        println!("    {}", science.description);
        for tip in &science.tips {
            println!("    - {tip}");
        }
    }
}

pub fn profile(report: &ProfileReport<'_>) {
    let p = report.profile;
    let verified = if p.verified { " ✔" } else { "" };
    println!("{}{} · {}", p.name, verified, p.location);
    println!(
        "  {} years farming · joined {} · {:.1}★",
        p.years_farming, p.joined_date, p.rating
    );
    println!("  {}", p.bio);
    println!("Active pledges ({} total):", format_kg(report.total_pledged));
    for pledge in &p.active_pledges {
        println!(
            "  {:<16} {:>9}  {:<10} {:>3}%  harvest {}",
            pledge.name,
            format_kg(pledge.pledged_amount),
            pledge.status.label(),
            pledge.progress(),
            pledge.harvest_date
        );
    }
}

pub fn impact(report: &ImpactReport<'_>) {
    let stats = &report.stats;
    println!(
        "{} Ani Points · {} families fed · {} donated",
        stats.ani_points,
        stats.families_fed,
        format_kg(stats.donated_kg)
    );
    match report.tab {
        ThankYouTab::Feedback => {
            match report.ratings.average {
                Some(avg) => println!("{} reviews, {avg:.1}★ average", report.ratings.count),
                None => println!("No reviews yet."),
            }
            for item in report.feedback {
                println!();
                println!(
                    "{}★ {} · {} · {}",
                    item.rating, item.customer_location, item.product_name, item.date
                );
                println!("  \"{}\"", item.message);
                println!("  traced to {}", item.batch_id);
            }
        }
        ThankYouTab::Donate => {
            for campaign in report.campaigns {
                println!();
                println!(
                    "{} for {} ({:?})",
                    campaign.title, campaign.beneficiary, campaign.urgency
                );
                println!("  needs {} · {}% collected", campaign.target, campaign.progress());
            }
        }
    }
}
