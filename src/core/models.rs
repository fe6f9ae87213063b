//! Core data models for task_galaxy
//!
//! Sector and orbit keys are closed enumerations so an authoring typo in the
//! tables fails to compile instead of silently producing an orphan node.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GalaxyError;

// =============================================================================
// Sector
// =============================================================================

/// One of the four life areas the galaxy is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Home,
    Work,
    School,
    Health,
}

impl Sector {
    /// All sectors in authored (and angular) order.
    pub const ALL: [Sector; 4] = [Sector::Home, Sector::Work, Sector::School, Sector::Health];

    /// Lowercase key used in tags and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Sector::Home => "home",
            Sector::Work => "work",
            Sector::School => "school",
            Sector::Health => "health",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Home => "Home",
            Sector::Work => "Work",
            Sector::School => "School",
            Sector::Health => "Health",
        }
    }

    /// Ring colour used for wedges, boundaries and node outlines.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Sector::Home => "#1fe0b4",
            Sector::Work => "#9a7bff",
            Sector::School => "#60a5fa",
            Sector::Health => "#34d399",
        }
    }

    /// Gradient class pair used by the toolbar and legend.
    pub fn gradient(&self) -> &'static str {
        match self {
            Sector::Home => "from-cyan-400 to-teal-400",
            Sector::Work => "from-purple-500 to-pink-500",
            Sector::School => "from-blue-500 to-cyan-500",
            Sector::Health => "from-emerald-500 to-green-500",
        }
    }

    /// Position in [`Sector::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Sector::Home => 0,
            Sector::Work => 1,
            Sector::School => 2,
            Sector::Health => 3,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sector {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .copied()
            .find(|sector| sector.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GalaxyError::UnknownSector { name: s.to_string() })
    }
}

// =============================================================================
// Sector Filter
// =============================================================================

/// Toolbar selection: every sector, or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SectorFilter {
    #[default]
    All,
    Only(Sector),
}

impl SectorFilter {
    /// Whether nodes of `sector` pass this filter.
    pub fn includes(&self, sector: Sector) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Only(selected) => *selected == sector,
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorFilter::All => f.write_str("all"),
            SectorFilter::Only(sector) => f.write_str(sector.key()),
        }
    }
}

impl FromStr for SectorFilter {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(SectorFilter::All)
        } else {
            s.parse().map(SectorFilter::Only)
        }
    }
}

impl From<SectorFilter> for String {
    fn from(filter: SectorFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for SectorFilter {
    type Error = GalaxyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Orbit
// =============================================================================

/// Concentric ring a node sits on. Radii grow content → actions → outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orbit {
    Content,
    Actions,
    Outputs,
}

impl Orbit {
    /// All orbits, innermost first.
    pub const ALL: [Orbit; 3] = [Orbit::Content, Orbit::Actions, Orbit::Outputs];

    /// Key used in tags.
    pub fn key(&self) -> &'static str {
        match self {
            Orbit::Content => "content",
            Orbit::Actions => "actions",
            Orbit::Outputs => "outputs",
        }
    }

    /// Capitalised singular form, used in node descriptions.
    pub fn singular_label(&self) -> &'static str {
        match self {
            Orbit::Content => "Content",
            Orbit::Actions => "Action",
            Orbit::Outputs => "Output",
        }
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Orbit {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orbit::ALL
            .iter()
            .copied()
            .find(|orbit| orbit.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GalaxyError::UnknownOrbit { name: s.to_string() })
    }
}

// =============================================================================
// Locality
// =============================================================================

/// Where a task runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locality {
    Local,
    Cloud,
}

impl Locality {
    pub fn tag(&self) -> &'static str {
        match self {
            Locality::Local => "local",
            Locality::Cloud => "cloud",
        }
    }
}

impl From<bool> for Locality {
    fn from(local: bool) -> Self {
        if local {
            Locality::Local
        } else {
            Locality::Cloud
        }
    }
}

// =============================================================================
// Galaxy Node
// =============================================================================

/// One addressable unit of content in the galaxy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalaxyNode {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Synthesized description, e.g. "Action for home"
    pub description: String,
    /// Owning sector
    pub category: Sector,
    /// Glyph shown inside the node
    pub icon: String,
    /// Resolved prompt text
    pub prompt: String,
    /// `[orbit, sector, local|cloud]`
    pub tags: Vec<String>,
    /// Placement angle. Stays 0.0 here; layout results live in `NodePlacement`.
    pub angle: f64,
    /// Placement radius. Stays 0.0 here; layout results live in `NodePlacement`.
    pub radius: f64,
}

impl GalaxyNode {
    /// Whether `tag` is present.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The orbit encoded in the tags.
    pub fn orbit(&self) -> Option<Orbit> {
        Orbit::ALL.iter().copied().find(|orbit| self.has_tag(orbit.key()))
    }

    /// The locality encoded in the tags. Untagged nodes count as cloud.
    pub fn locality(&self) -> Locality {
        Locality::from(self.has_tag(Locality::Local.tag()))
    }

    pub fn is_local(&self) -> bool {
        self.locality() == Locality::Local
    }
}

// =============================================================================
// Galaxy Sector
// =============================================================================

/// A sector together with its member nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalaxySector {
    pub sector: Sector,
    pub label: String,
    /// Gradient class pair
    pub color: String,
    /// Ring colour
    pub color_hex: String,
    pub nodes: Vec<GalaxyNode>,
}

impl GalaxySector {
    pub fn new(sector: Sector, nodes: Vec<GalaxyNode>) -> Self {
        Self {
            sector,
            label: sector.label().to_string(),
            color: sector.gradient().to_string(),
            color_hex: sector.color_hex().to_string(),
            nodes,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// =============================================================================
// Geometry values
// =============================================================================

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_roundtrip_keys() {
        for sector in Sector::ALL {
            assert_eq!(sector.key().parse::<Sector>().unwrap(), sector);
            assert_eq!(Sector::ALL[sector.index()], sector);
        }
    }

    #[test]
    fn test_sector_parse_is_case_insensitive() {
        assert_eq!("Work".parse::<Sector>().unwrap(), Sector::Work);
        assert!("garden".parse::<Sector>().is_err());
    }

    #[test]
    fn test_sector_filter_parse_and_includes() {
        assert_eq!("all".parse::<SectorFilter>().unwrap(), SectorFilter::All);
        let only = "school".parse::<SectorFilter>().unwrap();
        assert_eq!(only, SectorFilter::Only(Sector::School));
        assert!(only.includes(Sector::School));
        assert!(!only.includes(Sector::Home));
        assert!(SectorFilter::All.includes(Sector::Health));
    }

    #[test]
    fn test_sector_filter_serde_as_string() {
        let json = serde_json::to_string(&SectorFilter::Only(Sector::Work)).unwrap();
        assert_eq!(json, "\"work\"");
        let back: SectorFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, SectorFilter::All);
        assert!(serde_json::from_str::<SectorFilter>("\"moon\"").is_err());
    }

    #[test]
    fn test_orbit_labels() {
        assert_eq!(Orbit::Actions.singular_label(), "Action");
        assert_eq!(Orbit::Content.singular_label(), "Content");
        assert_eq!("outputs".parse::<Orbit>().unwrap(), Orbit::Outputs);
        assert!("rings".parse::<Orbit>().is_err());
    }

    #[test]
    fn test_node_tag_helpers() {
        let node = GalaxyNode {
            id: "shots".to_string(),
            title: "Screenshots".to_string(),
            description: "Content for home".to_string(),
            category: Sector::Home,
            icon: "📸".to_string(),
            prompt: "p".to_string(),
            tags: vec!["content".into(), "home".into(), "local".into()],
            angle: 0.0,
            radius: 0.0,
        };
        assert_eq!(node.orbit(), Some(Orbit::Content));
        assert!(node.is_local());
        assert!(node.has_tag("home"));
        assert!(!node.has_tag("cloud"));
    }

    #[test]
    fn test_segment_length() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((seg.length() - 5.0).abs() < 1e-12);
    }
}
