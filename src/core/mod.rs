//! Core module for task_galaxy
//!
//! # Architecture
//!
//! - `models`: Sector/orbit enumerations, nodes, geometry values
//! - `error`: Error types using thiserror
//! - `config`: Canvas and CLI configuration
//! - `polar`: Pure polar/cartesian geometry
//! - `galaxy`: Authored tables, catalog queries, validation
//! - `layout`: Canvas placement for a given view state
//! - `presenter`: Plain-text rendering

pub mod config;
pub mod error;
pub mod galaxy;
pub mod layout;
pub mod models;
pub mod polar;
pub mod presenter;

// Re-export commonly used types
pub use config::{CanvasConfig, GalaxyConfig, OutputFormat};
pub use error::{GalaxyError, Result, ResultExt};
pub use galaxy::{
    flatten_to_nodes, nodes_by_sector_and_orbit, prompt_for_node, related_nodes, validate,
    Catalog, RelatedPrompt, ValidationIssue, ValidationReport,
};
pub use layout::{GalaxyLayout, NodePlacement, SectorLayout, ViewState};
pub use models::{
    GalaxyNode, GalaxySector, Locality, Orbit, Point, Sector, SectorFilter, Segment,
};
pub use polar::{
    arc_path, distribute_on_arc, orbit_radii, polar_to_cartesian, sector_span, sector_spans,
    ArcPath, OrbitRadii, PathCommand, SectorSpan, Sweep,
};
