//! Galaxy Catalog
//!
//! Flattens the authored tables into [`GalaxyNode`]s once and answers
//! read-only queries over them. Every lookup is total: unknown ids produce an
//! empty result, never an error, because the UI may hold a stale selection.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;

use super::tables::{GalaxyTables, DEFAULT_TABLES, PLACEHOLDER_PROMPT};
use crate::core::models::{GalaxyNode, GalaxySector, Locality, Orbit, Sector, SectorFilter};

lazy_static! {
    static ref GLOBAL_CATALOG: Catalog = Catalog::from_tables(&DEFAULT_TABLES);
}

/// Walk sector → orbit → node and produce one node per leaf entry.
///
/// Prompts resolve through node id → prompt key → text and fall back to
/// [`PLACEHOLDER_PROMPT`] when either step is missing. A repeated id replaces
/// the earlier entry in place.
pub fn flatten_to_nodes(tables: &GalaxyTables) -> Vec<GalaxyNode> {
    let mut nodes: Vec<GalaxyNode> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for sector_spec in tables.sectors {
        let sector = sector_spec.sector;
        for (orbit, spec) in sector_spec.all_nodes() {
            let prompt = sector_spec
                .prompt_key(spec.id)
                .and_then(|key| tables.prompt_text(key))
                .unwrap_or(PLACEHOLDER_PROMPT);

            let node = GalaxyNode {
                id: spec.id.to_string(),
                title: spec.label.to_string(),
                description: describe(orbit, sector),
                category: sector,
                icon: spec.emoji.to_string(),
                prompt: prompt.to_string(),
                tags: vec![
                    orbit.key().to_string(),
                    sector.key().to_string(),
                    Locality::from(spec.local).tag().to_string(),
                ],
                angle: 0.0,
                radius: 0.0,
            };

            match positions.get(spec.id) {
                Some(&idx) => nodes[idx] = node,
                None => {
                    positions.insert(spec.id, nodes.len());
                    nodes.push(node);
                }
            }
        }
    }

    nodes
}

/// Human-readable label such as "Action for home".
fn describe(orbit: Orbit, sector: Sector) -> String {
    format!("{} for {}", orbit.singular_label(), sector.key())
}

/// A related node paired with its prompt, as shown in the side panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedPrompt {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub prompt: String,
}

/// Immutable, indexed view over the flattened galaxy.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<GalaxyNode>,
    index: HashMap<String, usize>,
    sectors: Vec<Sector>,
}

impl Catalog {
    /// Build a catalog from authored tables.
    pub fn from_tables(tables: &GalaxyTables) -> Self {
        let nodes = flatten_to_nodes(tables);
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        let mut sectors: Vec<Sector> = Vec::with_capacity(tables.sectors.len());
        for spec in tables.sectors {
            if !sectors.contains(&spec.sector) {
                sectors.push(spec.sector);
            }
        }
        debug!(
            "Built galaxy catalog: {} nodes across {} sectors",
            nodes.len(),
            sectors.len()
        );
        Self {
            nodes,
            index,
            sectors,
        }
    }

    /// The process-wide catalog of the shipped galaxy.
    pub fn global() -> &'static Catalog {
        &GLOBAL_CATALOG
    }

    /// All nodes in authored order.
    pub fn nodes(&self) -> &[GalaxyNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sectors in angular order.
    pub fn sector_keys(&self) -> &[Sector] {
        &self.sectors
    }

    /// Node by id.
    pub fn node(&self, id: &str) -> Option<&GalaxyNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes of `sector` sitting on `orbit`.
    pub fn nodes_by_sector_and_orbit(&self, sector: Sector, orbit: Orbit) -> Vec<&GalaxyNode> {
        self.nodes
            .iter()
            .filter(|n| n.category == sector && n.has_tag(orbit.key()))
            .collect()
    }

    /// Nodes passing a toolbar filter.
    pub fn nodes_in(&self, filter: SectorFilter) -> Vec<&GalaxyNode> {
        self.nodes
            .iter()
            .filter(|n| filter.includes(n.category))
            .collect()
    }

    /// Prompt text for `id`, or `""` when the id is unknown.
    pub fn prompt_for_node(&self, id: &str) -> &str {
        self.node(id).map(|n| n.prompt.as_str()).unwrap_or("")
    }

    /// Up to `limit` other nodes of the same sector, in authored order.
    pub fn related_nodes(&self, id: &str, limit: usize) -> Vec<&GalaxyNode> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        self.nodes
            .iter()
            .filter(|n| n.category == node.category && n.id != id)
            .take(limit)
            .collect()
    }

    /// Related nodes with their prompts.
    pub fn related_prompts(&self, id: &str, limit: usize) -> Vec<RelatedPrompt> {
        self.related_nodes(id, limit)
            .into_iter()
            .map(|n| RelatedPrompt {
                id: n.id.clone(),
                label: n.title.clone(),
                emoji: n.icon.clone(),
                prompt: n.prompt.clone(),
            })
            .collect()
    }

    /// Sectors with their member nodes.
    pub fn sectors(&self) -> Vec<GalaxySector> {
        self.sectors
            .iter()
            .map(|&sector| {
                let nodes = self
                    .nodes
                    .iter()
                    .filter(|n| n.category == sector)
                    .cloned()
                    .collect();
                GalaxySector::new(sector, nodes)
            })
            .collect()
    }
}

/// Nodes of `sector` on `orbit` in the shipped galaxy.
pub fn nodes_by_sector_and_orbit(sector: Sector, orbit: Orbit) -> Vec<&'static GalaxyNode> {
    Catalog::global().nodes_by_sector_and_orbit(sector, orbit)
}

/// Prompt for `id` in the shipped galaxy, `""` if unknown.
pub fn prompt_for_node(id: &str) -> &'static str {
    Catalog::global().prompt_for_node(id)
}

/// Related nodes for `id` in the shipped galaxy.
pub fn related_nodes(id: &str, limit: usize) -> Vec<&'static GalaxyNode> {
    Catalog::global().related_nodes(id, limit)
}
