//! task_galaxy - layout and content core of the DystopiaOS Task Galaxy
//!
//! The Task Galaxy is a circular map of things the assistant can do, split
//! into four sectors (home, work, school, health) and three orbits per sector
//! (content it reads, actions it takes, outputs it produces).
//!
//! This crate owns the deterministic parts:
//! - **core::polar**: polar/cartesian maths, wedge paths, angular distribution
//! - **core::galaxy**: the authored node tables and the queries over them
//! - **core::layout**: node and sector placement for an explicit view state
//! - **formats**: SVG and JSON output
//!
//! The CLI (src/bin/galaxy.rs) and the optional WASM bindings are thin
//! wrappers over the library.
//!
//! # Example
//!
//! ```
//! use task_galaxy::core::{CanvasConfig, Catalog, GalaxyLayout, ViewState};
//!
//! let catalog = Catalog::global();
//! let layout = GalaxyLayout::compute(catalog, &CanvasConfig::default(), &ViewState::new());
//! assert_eq!(layout.nodes.len(), catalog.len());
//! ```

pub mod core;
pub mod formats;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::{
    Catalog, GalaxyConfig, GalaxyError, GalaxyLayout, GalaxyNode, Orbit, Result, Sector,
    SectorFilter, ViewState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the task_galaxy library
pub fn version() -> &'static str {
    VERSION
}
