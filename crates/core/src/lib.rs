//! Rockets Hub Core - domain library for the school community site.
//!
//! This crate provides everything the site knows, independent of how it is
//! served:
//! - `site` - The axum presentation shell
//! - `integration-tests` - In-process route tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure, synchronous operations - no
//! I/O, no HTTP, no async. Bundled content is compiled in with
//! `include_str!` and parsed once at startup.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and decimal prices
//! - [`catalog`] - The store catalog
//! - [`cart`] - Cart state and derived lines/totals
//! - [`content`] - Events, fundraisers, sports fixtures, site profile
//! - [`calendar`] - Grouping dated records by month
//! - [`search`] - Store search filter
//! - [`router`] - Page selection and the cart overlay flag
//! - [`session`] - Per-visitor session state composing all of the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod content;
pub mod router;
pub mod search;
pub mod session;
pub mod types;

pub use calendar::{Dated, MonthGroup, group_by_month};
pub use cart::{CartLine, CartState};
pub use catalog::{Catalog, Product};
pub use content::{
    ContentError, Event, EventCategory, Fundraiser, FundraiserStatus, SiteContent, SiteProfile,
    SportsFixture, TeamLevel, Tone,
};
pub use router::{CartOverlay, Page, UnknownPage, ViewRouter};
pub use search::filter_products;
pub use session::SiteSession;
pub use types::*;
