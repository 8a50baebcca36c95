//! Domain types and page logic for the Dirikita marketplace.
//!
//! Every page of the app is a thin view over a state struct from this crate,
//! so the same rules drive the Dioxus front end and the command line tool.

pub mod activity;
pub mod analytics;
pub mod batch;
pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod demand;
pub mod error;
pub mod feedback;
pub mod fixtures;
pub mod percent;
pub mod produce;
pub mod product;
pub mod profile;
pub mod program;
pub mod theme;

pub use error::{FixtureError, ParseError};
pub use fixtures::Fixtures;
