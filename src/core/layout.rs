//! Galaxy Layout
//!
//! Turns the catalog, the canvas dimensions and an explicit [`ViewState`]
//! into everything the renderer draws: orbit rings, sector wedges with their
//! boundary lines, and one placement per node. Nothing here reads ambient UI
//! state and nothing is written back onto the catalog's nodes.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::CanvasConfig;
use super::galaxy::Catalog;
use super::models::{Orbit, Point, Sector, SectorFilter, Segment};
use super::polar::{
    arc_path, distribute_on_arc, orbit_radii, polar_to_cartesian, sector_spans, ArcPath,
    OrbitRadii, SectorSpan,
};

// =============================================================================
// View State
// =============================================================================

/// Selection state owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Toolbar filter
    #[serde(default)]
    pub sector: SectorFilter,
    /// Selected node id
    #[serde(default)]
    pub node: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the sector filter. Clears any node selection.
    pub fn select_sector(&mut self, filter: SectorFilter) {
        self.sector = filter;
        self.node = None;
    }

    pub fn select_node(&mut self, id: impl Into<String>) {
        self.node = Some(id.into());
    }

    pub fn clear_node(&mut self) {
        self.node = None;
    }

    /// Builder form of [`ViewState::select_sector`].
    pub fn with_sector(mut self, filter: SectorFilter) -> Self {
        self.select_sector(filter);
        self
    }

    /// Builder form of [`ViewState::select_node`].
    pub fn with_node(mut self, id: impl Into<String>) -> Self {
        self.select_node(id);
        self
    }

    fn is_selected(&self, id: &str) -> bool {
        self.node.as_deref() == Some(id)
    }
}

// =============================================================================
// Layout output
// =============================================================================

/// Drawing data for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorLayout {
    pub sector: Sector,
    pub label: String,
    pub color_hex: String,
    pub span: SectorSpan,
    /// Background wedge from the core to the outermost orbit
    pub wedge: ArcPath,
    /// Radial border lines at the span's start and end
    pub boundaries: [Segment; 2],
    /// Passes the sector filter
    pub visible: bool,
    /// Is the filter's single sector
    pub selected: bool,
    pub node_count: usize,
}

/// Screen placement and display fields for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub category: Sector,
    pub orbit: Orbit,
    pub local: bool,
    pub angle: f64,
    pub radius: f64,
    pub position: Point,
    /// Line from the canvas centre to the node
    pub connector: Segment,
    pub visible: bool,
    pub selected: bool,
}

/// A complete layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalaxyLayout {
    pub canvas: CanvasConfig,
    pub center: Point,
    pub orbits: OrbitRadii,
    pub view: ViewState,
    pub sectors: Vec<SectorLayout>,
    pub nodes: Vec<NodePlacement>,
    /// Prompt of the selected node, empty when nothing (known) is selected
    pub selected_prompt: String,
}

impl GalaxyLayout {
    /// Lay out `catalog` on `canvas` for the given view.
    pub fn compute(catalog: &Catalog, canvas: &CanvasConfig, view: &ViewState) -> Self {
        let center = Point::new(canvas.center_x(), canvas.center_y());
        let orbits = orbit_radii(canvas.base_orbit, canvas.orbit_gap);
        let sector_keys = catalog.sector_keys();
        let spans = sector_spans(sector_keys.len());

        let mut sectors = Vec::with_capacity(sector_keys.len());
        let mut nodes = Vec::with_capacity(catalog.len());

        for (&sector, &span) in sector_keys.iter().zip(spans.iter()) {
            let visible = view.sector.includes(sector);
            let selected = view.sector == SectorFilter::Only(sector);
            let mut node_count = 0;

            for orbit in Orbit::ALL {
                let members = catalog.nodes_by_sector_and_orbit(sector, orbit);
                let radius = orbits.for_orbit(orbit);
                let angles = distribute_on_arc(span.start, span.end, members.len());
                node_count += members.len();

                for (node, angle) in members.into_iter().zip(angles) {
                    let position = polar_to_cartesian(center.x, center.y, radius, angle);
                    nodes.push(NodePlacement {
                        id: node.id.clone(),
                        title: node.title.clone(),
                        icon: node.icon.clone(),
                        category: sector,
                        orbit,
                        local: node.is_local(),
                        angle,
                        radius,
                        position,
                        connector: Segment::new(center, position),
                        visible,
                        selected: view.is_selected(&node.id),
                    });
                }
            }

            sectors.push(SectorLayout {
                sector,
                label: sector.label().to_string(),
                color_hex: sector.color_hex().to_string(),
                span,
                wedge: arc_path(
                    center.x,
                    center.y,
                    canvas.core_radius,
                    orbits.outputs,
                    span.start,
                    span.end,
                ),
                boundaries: [
                    boundary(center, canvas.core_radius, orbits.outputs, span.start),
                    boundary(center, canvas.core_radius, orbits.outputs, span.end),
                ],
                visible,
                selected,
                node_count,
            });
        }

        let selected_prompt = view
            .node
            .as_deref()
            .map(|id| catalog.prompt_for_node(id).to_string())
            .unwrap_or_default();

        debug!(
            "Computed galaxy layout: {} sectors, {} nodes, filter={}",
            sectors.len(),
            nodes.len(),
            view.sector
        );

        Self {
            canvas: *canvas,
            center,
            orbits,
            view: view.clone(),
            sectors,
            nodes,
            selected_prompt,
        }
    }

    /// Placement of a node by id.
    pub fn node(&self, id: &str) -> Option<&NodePlacement> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Layout of a sector.
    pub fn sector(&self, sector: Sector) -> Option<&SectorLayout> {
        self.sectors.iter().find(|s| s.sector == sector)
    }

    /// Placements passing the sector filter.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &NodePlacement> {
        self.nodes.iter().filter(|n| n.visible)
    }

    /// The selected placement, if the selected id is known.
    pub fn selected_node(&self) -> Option<&NodePlacement> {
        self.nodes.iter().find(|n| n.selected)
    }
}

fn boundary(center: Point, inner: f64, outer: f64, angle: f64) -> Segment {
    Segment::new(
        polar_to_cartesian(center.x, center.y, inner, angle),
        polar_to_cartesian(center.x, center.y, outer, angle),
    )
}
