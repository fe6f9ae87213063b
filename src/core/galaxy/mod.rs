//! Galaxy Data Model
//!
//! Static authored content and the read-only queries built on it.
//!
//! ```text
//! tables (sector → orbit → node, prompt library)
//!     ↓ flatten_to_nodes
//! Catalog (GalaxyNode list + id index)
//!     ↓ queries
//! nodes_by_sector_and_orbit / prompt_for_node / related_nodes
//! ```

pub mod catalog;
pub mod tables;
pub mod validate;

pub use catalog::{
    flatten_to_nodes, nodes_by_sector_and_orbit, prompt_for_node, related_nodes, Catalog,
    RelatedPrompt,
};
pub use tables::{GalaxyTables, NodeSpec, SectorSpec, DEFAULT_TABLES, PLACEHOLDER_PROMPT};
pub use validate::{validate, Severity, ValidationIssue, ValidationReport};
