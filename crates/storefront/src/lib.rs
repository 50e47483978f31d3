//! Kranian Farms storefront core.
//!
//! This crate provides the state and data layer behind the Kranian Farms
//! quotation storefront:
//!
//! - [`catalog`] - Immutable product records (flowers and produce, priced in KES)
//! - [`cart`] - The quotation cart: line items, persistence, notifications
//! - [`content`] - Blog sidebar and contact page data
//! - [`config`] - Environment-based configuration
//! - [`state`] - The shared application context handed to the view layer
//!
//! The view layer (routing, templates) lives elsewhere and only ever reads
//! from this crate's types and calls the cart manager's public operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod state;

pub use cart::{CartLineItem, CartManager, HeadSize};
pub use catalog::{Catalog, Category, Product};
pub use config::StorefrontConfig;
pub use state::AppState;
