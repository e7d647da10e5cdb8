//! Common test utilities shared across integration tests

pub mod fixture;

pub use fixture::{SECTION_IDS, sample_items, site, store};
