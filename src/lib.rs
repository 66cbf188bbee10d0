#![warn(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

// bit layouts and the individual translators are only needed to write new
// translators or inspect field tables, so they stay behind their module path
pub mod bits;
pub mod translators;

// these modules are re-exported as they form the main part of the API
mod config;
mod problems;
mod range;
mod registry;
mod storage;
mod translator;

pub use config::*;
pub use problems::*;
pub use range::*;
pub use registry::*;
pub use storage::*;
pub use translator::*;
