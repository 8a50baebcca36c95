//! Dirikita in the terminal.
//!
//! Each subcommand drives one page of the app through the same view-model the
//! Dioxus front end uses, then prints the derived view as text or JSON.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dirikita_common::activity::{unread_count, ActivityFeedState, ActivityFilter};
use dirikita_common::batch::{BatchForm, BatchManager, BatchStatus, HarvestReason, SeedUnit};
use dirikita_common::calendar::{self, parse_date, parse_month};
use dirikita_common::cart::ShopState;
use dirikita_common::catalog::{CategoryFilter, SortKey};
use dirikita_common::checkout::DeliveryMethod;
use dirikita_common::demand::{DemandBoardState, Granularity, ServeLocation};
use dirikita_common::feedback::{RatingSummary, ThankYouState, ThankYouTab};
use dirikita_common::produce::{total_revenue, ProduceListState, ProduceView};
use dirikita_common::product::{find_product, ProductId};
use dirikita_common::program::{ProgramFilter, ProgramsState};
use dirikita_common::Fixtures;

use crate::render::{
    ActivityReport, BatchReport, CartReport, CatalogReport, DemandReport, HarvestReport,
    ImpactReport, ProduceReport, ProfileReport, ProgramsReport,
};

#[derive(Parser)]
#[command(name = "dirikita", about = "Dirikita farmer/consumer marketplace", version)]
struct Cli {
    /// JSON fixture bundle replacing the built-in datasets.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Print the derived view as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the shop catalog.
    Catalog {
        /// Matches product or farmer name.
        #[arg(long, short, default_value = "")]
        query: String,

        /// `all`, `root`, `leafy`, `fruit` or `spice`.
        #[arg(long, short, default_value = "all")]
        category: CategoryFilter,

        /// `popular`, `price_low` or `price_high`.
        #[arg(long, short, default_value = "popular")]
        sort: SortKey,

        /// Show where the money goes for one product id.
        #[arg(long)]
        breakdown: Option<String>,
    },

    /// Fill a cart and price the checkout.
    Cart {
        /// Cart adjustment as `ID=DELTA`, applied in order. Repeatable.
        #[arg(long = "item", short, value_parser = parse_adjustment)]
        items: Vec<(ProductId, i64)>,

        /// `delivery` or `pickup`.
        #[arg(long, short, default_value = "delivery")]
        method: DeliveryMethod,

        /// Pickup point id, for pickup orders.
        #[arg(long)]
        pickup: Option<String>,
    },

    /// Demand board with saturation per location.
    Demand {
        /// Search text over item name, status and locations.
        #[arg(long, default_value = "")]
        search: String,

        /// Location to serve, or `all`.
        #[arg(long, default_value = "all")]
        location: ServeLocation,

        /// Month to plan for, `YYYY-MM`. Defaults to the current month.
        #[arg(long)]
        month: Option<String>,

        /// Override today's date, `YYYY-MM-DD`.
        #[arg(long)]
        today: Option<String>,

        /// Show saturation at a wider scope for this pledged kg.
        #[arg(long, requires = "scope")]
        pledged: Option<u64>,

        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,
    },

    /// Project a harvest date and optionally register the planting.
    Harvest {
        /// Crop option id, e.g. `c1`.
        #[arg(long)]
        crop: String,

        /// Date planted, `YYYY-MM-DD`.
        #[arg(long)]
        planted: Option<String>,

        /// Register the planting under this batch id.
        #[arg(long)]
        register: Option<String>,

        #[arg(long)]
        plot: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        seed_variety: Option<String>,

        #[arg(long)]
        seed_source: Option<String>,

        #[arg(long)]
        seed_quantity: Option<String>,

        /// `cans`, `packets`, `kg` or `grams`.
        #[arg(long, default_value = "grams")]
        seed_unit: SeedUnit,

        #[arg(long)]
        fertilizer: Option<String>,

        #[arg(long)]
        personnel: Option<String>,
    },

    /// Activity feed.
    Activity {
        /// `all`, `alert`, `logistics`, `market`, `weather`, `operations` or `finance`.
        #[arg(long, short, default_value = "all")]
        filter: ActivityFilter,
    },

    /// Support programs.
    Programs {
        /// `all`, `finance`, `education`, `logistics` or `protection`.
        #[arg(long, short, default_value = "all")]
        category: ProgramFilter,
    },

    /// The farmer's produce list.
    Produce {
        #[arg(long, value_enum, default_value_t = ViewArg::Active)]
        view: ViewArg,
    },

    /// Manage the current produce batch.
    Batch {
        /// Move the batch to this stage.
        #[arg(long)]
        status: Option<BatchStatus>,

        /// Reason for harvesting.
        #[arg(long)]
        reason: Option<HarvestReason>,
    },

    /// Public farmer profile.
    Profile,

    /// Customer feedback, donation drives and impact stats.
    Impact {
        #[arg(long, value_enum, default_value_t = TabArg::Feedback)]
        tab: TabArg,
    },

    /// Validate the active fixtures and print them as JSON.
    Fixtures,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Location,
    Regional,
    Nationwide,
}

impl From<ScopeArg> for Granularity {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Location => Granularity::Location,
            ScopeArg::Regional => Granularity::Regional,
            ScopeArg::Nationwide => Granularity::Nationwide,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Active,
    History,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    Feedback,
    Donate,
}

fn parse_adjustment(s: &str) -> Result<(ProductId, i64), String> {
    let (id, delta) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=DELTA, got {s:?}"))?;
    let delta = delta
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("bad quantity in {s:?}: {e}"))?;
    Ok((ProductId::new(id.trim()), delta))
}

fn parse_optional_date(value: Option<&str>, what: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| parse_date(s).with_context(|| format!("invalid --{what}")))
        .transpose()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_fixtures(path: Option<&PathBuf>) -> Result<Fixtures> {
    match path {
        Some(path) => Fixtures::load(path)
            .with_context(|| format!("loading fixtures from {}", path.display())),
        None => {
            tracing::debug!("using built-in fixtures");
            Ok(Fixtures::builtin())
        }
    }
}

/// Print `report` as JSON, or as text through its renderer.
fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("serializing output")?;
        println!("{out}");
    } else {
        text(report);
    }
    Ok(())
}

// ─── Commands ────────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    let fx = load_fixtures(cli.fixtures.as_ref())?;
    let json = cli.json;

    match cli.command {
        Command::Catalog {
            query,
            category,
            sort,
            breakdown,
        } => {
            let mut shop = ShopState::new();
            shop.query.text = query;
            shop.query.category = category;
            shop.query.sort = sort;
            if let Some(id) = breakdown {
                let id = ProductId::new(id);
                if find_product(&fx.products, &id).is_none() {
                    bail!("no product with id {id}");
                }
                shop.show_breakdown(id);
            }
            let report = CatalogReport {
                products: shop.visible_products(&fx.products),
                breakdown: shop
                    .breakdown_product(&fx.products)
                    .map(|p| (p, p.breakdown_shares())),
            };
            emit(json, &report, render::catalog)
        }

        Command::Cart {
            items,
            method,
            pickup,
        } => {
            let mut shop = ShopState::new();
            for (id, delta) in &items {
                if find_product(&fx.products, id).is_none() {
                    bail!("no product with id {id}");
                }
                shop.adjust(&fx.products, id, *delta);
            }
            shop.checkout.set_method(method);
            if let Some(point) = pickup.as_deref() {
                if !shop.checkout.select_pickup(&fx.pickup_points, point) {
                    bail!("no pickup point with id {point}");
                }
            }
            let pickup_point = match method {
                DeliveryMethod::Pickup => shop.checkout.selected_pickup(&fx.pickup_points),
                DeliveryMethod::Delivery => None,
            };
            let report = CartReport {
                lines: shop.cart.lines(&fx.products),
                total_items: shop.cart.total_items(),
                summary: shop.summary(&fx.products),
                pickup: pickup_point,
                can_check_out: shop.open_review(&fx.products),
            };
            emit(json, &report, render::cart)
        }

        Command::Demand {
            search,
            location,
            month,
            today,
            pledged,
            scope,
        } => {
            let today = parse_optional_date(today.as_deref(), "today")?.unwrap_or_else(calendar::today);
            let mut board = DemandBoardState::new(today);
            board.search = search;
            board.serve_location = location;
            if let Some(month) = month {
                board.set_month(parse_month(&month).context("invalid --month")?);
            }
            let cards = board.cards(&fx.demand, today);
            let wider = match (pledged, scope) {
                (Some(pledged), Some(scope)) => cards
                    .iter()
                    .map(|card| card.wider_saturation(scope.into(), pledged))
                    .collect(),
                _ => Vec::new(),
            };
            let report = DemandReport {
                month: calendar::format_month(board.month),
                serve_location: board.serve_location.label().to_string(),
                mode: board.pledge_mode(today),
                cards,
                wider,
            };
            emit(json, &report, render::demand)
        }

        Command::Harvest {
            crop,
            planted,
            register,
            plot,
            location,
            seed_variety,
            seed_source,
            seed_quantity,
            seed_unit,
            fertilizer,
            personnel,
        } => {
            let option = fx
                .crop(&crop)
                .with_context(|| format!("no crop option with id {crop}"))?;
            let mut form = BatchForm::new(location.unwrap_or_else(|| fx.home_location.clone()));
            form.select_crop(option);
            form.set_planted_date(parse_optional_date(planted.as_deref(), "planted")?);
            form.plot_name = plot.unwrap_or_default();
            form.seed_variety = seed_variety.unwrap_or_default();
            form.seed_source = seed_source.unwrap_or_default();
            form.seed_quantity = seed_quantity.unwrap_or_default();
            form.seed_unit = seed_unit;
            form.base_fertilizer = fertilizer.unwrap_or_default();
            form.personnel = personnel.unwrap_or_default();

            let batch = register
                .map(|id| form.submit(id))
                .transpose()
                .context("registering planting")?;
            if let Some(batch) = &batch {
                tracing::info!(batch = %batch.id, crop = %batch.crop, "planting registered");
            }
            let report = HarvestReport {
                crop: option,
                location: &form.location,
                planted: form.planted_date(),
                est_harvest: form.est_harvest_date(),
                batch,
            };
            emit(json, &report, render::harvest)
        }

        Command::Activity { filter } => {
            let mut feed = ActivityFeedState::default();
            feed.select(filter);
            let report = ActivityReport {
                filter: feed.filter,
                unread: unread_count(&fx.activities),
                view: feed.view(&fx.activities),
            };
            emit(json, &report, render::activity)
        }

        Command::Programs { category } => {
            let mut state = ProgramsState::default();
            state.select(category);
            let report = ProgramsReport {
                filter: state.filter,
                programs: state.filtered(&fx.programs),
            };
            emit(json, &report, render::programs)
        }

        Command::Produce { view } => {
            let mut state = ProduceListState::default();
            state.select(match view {
                ViewArg::Active => ProduceView::Active,
                ViewArg::History => ProduceView::History,
            });
            let report = ProduceReport {
                view: state.view,
                items: state.visible(&fx.produce),
                total_revenue: total_revenue(&fx.produce),
            };
            emit(json, &report, render::produce)
        }

        Command::Batch { status, reason } => {
            let mut manager = BatchManager::new(fx.current_batch.clone());
            let mut regressed = false;
            if let Some(status) = status {
                regressed = manager.set_status(status);
            }
            if let Some(reason) = reason {
                manager.set_harvest_reason(reason);
            }
            let report = BatchReport {
                stages: manager.stages(),
                trend: manager.batch.analytics.trend_points(),
                price_check: manager.batch.analytics.price_bars(),
                batch: manager.batch,
                regressed,
            };
            emit(json, &report, render::batch)
        }

        Command::Profile => {
            let report = ProfileReport {
                total_pledged: fx.profile.total_pledged(),
                profile: &fx.profile,
            };
            emit(json, &report, render::profile)
        }

        Command::Impact { tab } => {
            let mut state = ThankYouState::default();
            state.select(match tab {
                TabArg::Feedback => ThankYouTab::Feedback,
                TabArg::Donate => ThankYouTab::Donate,
            });
            let report = ImpactReport {
                tab: state.tab,
                stats: fx.impact,
                ratings: RatingSummary::of(&fx.feedback),
                feedback: &fx.feedback,
                campaigns: &fx.campaigns,
            };
            emit(json, &report, render::impact)
        }

        Command::Fixtures => {
            fx.validate().context("fixtures failed validation")?;
            println!("{}", fx.to_json_pretty()?);
            Ok(())
        }
    }
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirikita_common::program::ProgramCategory;

    #[test]
    fn test_parse_adjustment() {
        assert_eq!(parse_adjustment("1=2"), Ok((ProductId::new("1"), 2)));
        assert_eq!(parse_adjustment(" 4 = -1"), Ok((ProductId::new("4"), -1)));
        assert!(parse_adjustment("1").is_err());
        assert!(parse_adjustment("1=two").is_err());
    }

    #[test]
    fn test_cli_parses_cart() {
        let cli = Cli::try_parse_from([
            "dirikita", "--json", "cart", "-i", "1=2", "-i", "2=1", "--method", "pickup",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Cart { items, method, .. } => {
                assert_eq!(items.len(), 2);
                assert_eq!(method, DeliveryMethod::Pickup);
            }
            _ => panic!("expected cart command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["dirikita", "catalog", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn test_cli_parses_program_filter() {
        let cli = Cli::try_parse_from(["dirikita", "programs", "-c", "Finance"]).unwrap();
        match cli.command {
            Command::Programs { category } => {
                assert_eq!(category, ProgramFilter::Only(ProgramCategory::Finance));
            }
            _ => panic!("expected programs command"),
        }
        assert!(Cli::try_parse_from(["dirikita", "programs", "-c", "housing"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
