//! Vitrine - view-state controller for single-page portfolio sites
//!
//! Vitrine owns the interactive state behind a portfolio page: the navbar
//! style driven by scroll position, the compact navigation menu, the
//! portfolio category filter and the overlay panel. The presentation layer
//! reads snapshots and dispatches intents; nothing else mutates the state.

pub mod action;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod paths;
pub mod replay;

pub use action::Intent;
pub use app::{Snapshot, ViewStateStore};
pub use config::Config;
pub use error::{CatalogError, ViewError};
