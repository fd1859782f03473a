//! Pooja Store - Small Storefront
//!
//! A catalog-browsing storefront with a client-side cart and a stub
//! checkout. The server serves a fixed product list; orders are confirmed
//! synthetically and never stored.
//!
//! ## Features
//! - Static product catalog, loaded once at startup
//! - Cart with merge-by-id lines and clamped quantities
//! - Checkout stub returning synthetic order ids
//! - API client and shopping session for the presentation side

pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod session;

pub use catalog::Catalog;
pub use client::ApiClient;
pub use config::Config;
pub use domain::{Cart, CartItem, Product};
pub use routes::AppState;
pub use session::StoreSession;
