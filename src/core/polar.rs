//! Polar Layout Engine
//!
//! Pure geometry for placing nodes and drawing sector wedges on a circular
//! diagram. Angles are in degrees, 0° points to the top of the circle and
//! angles grow clockwise. Every function here shares that convention; flipping
//! it in one place mirrors the whole galaxy.

use serde::Serialize;
use std::fmt;

use super::models::{Orbit, Point};

/// Degrees in a full turn.
pub const FULL_CIRCLE: f64 = 360.0;

/// Convert a clockwise-from-top polar coordinate into canvas space.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let theta = (angle_deg - 90.0).to_radians();
    Point {
        x: cx + radius * theta.cos(),
        y: cy + radius * theta.sin(),
    }
}

// =============================================================================
// Wedge paths
// =============================================================================

/// Sweep direction of an arc segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    /// SVG sweep-flag value.
    pub fn flag(&self) -> u8 {
        match self {
            Sweep::Clockwise => 1,
            Sweep::CounterClockwise => 0,
        }
    }
}

/// A single drawing command of a wedge outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    ArcTo { radius: f64, large_arc: bool, sweep: Sweep, to: Point },
    LineTo { to: Point },
    Close,
}

/// Closed annulus-segment outline: outer arc, radial line, inner arc back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcPath {
    pub commands: Vec<PathCommand>,
}

impl ArcPath {
    /// Large-arc flag of the outer arc.
    pub fn large_arc(&self) -> bool {
        self.commands
            .iter()
            .find_map(|cmd| match cmd {
                PathCommand::ArcTo { large_arc, .. } => Some(*large_arc),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cmd in &self.commands {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match cmd {
                PathCommand::MoveTo { to } => write!(f, "M {} {}", to.x, to.y)?,
                PathCommand::ArcTo { radius, large_arc, sweep, to } => write!(
                    f,
                    "A {r} {r} 0 {} {} {} {}",
                    u8::from(*large_arc),
                    sweep.flag(),
                    to.x,
                    to.y,
                    r = radius
                )?,
                PathCommand::LineTo { to } => write!(f, "L {} {}", to.x, to.y)?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Build the wedge between `inner_radius` and `outer_radius` spanning
/// `start_deg..end_deg`.
///
/// Spans wider than 180° draw the major arc; everything else the minor arc.
/// The outer arc always sweeps clockwise and the inner arc counter-clockwise,
/// so the outline encloses the wedge without crossing itself.
pub fn arc_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> ArcPath {
    let start_outer = polar_to_cartesian(cx, cy, outer_radius, start_deg);
    let end_outer = polar_to_cartesian(cx, cy, outer_radius, end_deg);
    let start_inner = polar_to_cartesian(cx, cy, inner_radius, end_deg);
    let end_inner = polar_to_cartesian(cx, cy, inner_radius, start_deg);

    let large_arc = end_deg - start_deg > 180.0;

    ArcPath {
        commands: vec![
            PathCommand::MoveTo { to: start_outer },
            PathCommand::ArcTo {
                radius: outer_radius,
                large_arc,
                sweep: Sweep::Clockwise,
                to: end_outer,
            },
            PathCommand::LineTo { to: start_inner },
            PathCommand::ArcTo {
                radius: inner_radius,
                large_arc,
                sweep: Sweep::CounterClockwise,
                to: end_inner,
            },
            PathCommand::Close,
        ],
    }
}

// =============================================================================
// Angular distribution
// =============================================================================

/// Spread `count` angles across `start_deg..end_deg`.
///
/// A single point sits on the midpoint. Two or more leave one step of margin
/// at each end so no node lands on a sector boundary line.
pub fn distribute_on_arc(start_deg: f64, end_deg: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(start_deg + end_deg) / 2.0],
        n => {
            let step = (end_deg - start_deg) / (n as f64 + 1.0);
            (1..=n).map(|k| start_deg + step * k as f64).collect()
        }
    }
}

// =============================================================================
// Orbits
// =============================================================================

/// Radii of the three orbit rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitRadii {
    pub content: f64,
    pub actions: f64,
    pub outputs: f64,
}

impl OrbitRadii {
    /// Radius of the given orbit.
    pub fn for_orbit(&self, orbit: Orbit) -> f64 {
        match orbit {
            Orbit::Content => self.content,
            Orbit::Actions => self.actions,
            Orbit::Outputs => self.outputs,
        }
    }

    /// Innermost to outermost.
    pub fn as_array(&self) -> [f64; 3] {
        [self.content, self.actions, self.outputs]
    }
}

/// Three rings spaced `gap` apart, starting at `base`.
pub fn orbit_radii(base: f64, gap: f64) -> OrbitRadii {
    OrbitRadii {
        content: base,
        actions: base + gap,
        outputs: base + gap * 2.0,
    }
}

// =============================================================================
// Sector spans
// =============================================================================

/// Half-open angular interval `[start, end)` owned by one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorSpan {
    pub start: f64,
    pub end: f64,
}

impl SectorSpan {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Half-open membership test.
    pub fn contains(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start && angle_deg < self.end
    }
}

/// Span of sector `index` when the circle is split into `count` sectors.
///
/// `count` of zero is treated as one so the result stays finite.
pub fn sector_span(index: usize, count: usize) -> SectorSpan {
    let width = FULL_CIRCLE / count.max(1) as f64;
    SectorSpan {
        start: index as f64 * width,
        end: (index + 1) as f64 * width,
    }
}

/// Spans for every sector of a `count`-way split, in index order.
pub fn sector_spans(count: usize) -> Vec<SectorSpan> {
    (0..count).map(|i| sector_span(i, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_zero_radius_is_center() {
        for angle in [0.0, 45.0, 123.4, 270.0, -30.0] {
            let p = polar_to_cartesian(550.0, 400.0, 0.0, angle);
            assert_eq!(p, Point::new(550.0, 400.0));
        }
    }

    #[test]
    fn test_clockwise_from_top() {
        let top = polar_to_cartesian(0.0, 0.0, 10.0, 0.0);
        assert!(close(top.x, 0.0) && close(top.y, -10.0));

        let right = polar_to_cartesian(0.0, 0.0, 10.0, 90.0);
        assert!(close(right.x, 10.0) && close(right.y, 0.0));

        let bottom = polar_to_cartesian(0.0, 0.0, 10.0, 180.0);
        assert!(close(bottom.x, 0.0) && close(bottom.y, 10.0));
    }

    #[test]
    fn test_arc_path_minor_arc_for_quarter() {
        let path = arc_path(550.0, 400.0, 100.0, 270.0, 0.0, 90.0);
        assert!(!path.large_arc());
        assert_eq!(path.commands.len(), 5);
        assert!(path.to_string().contains("A 270 270 0 0 1"));
        assert!(path.to_string().contains("A 100 100 0 0 0"));
        assert!(path.to_string().ends_with('Z'));
    }

    #[test]
    fn test_arc_path_major_arc_past_half_circle() {
        assert!(arc_path(0.0, 0.0, 10.0, 20.0, 0.0, 270.0).large_arc());
        assert!(!arc_path(0.0, 0.0, 10.0, 20.0, 0.0, 180.0).large_arc());
    }

    #[test]
    fn test_arc_path_corners() {
        let path = arc_path(0.0, 0.0, 1.0, 2.0, 0.0, 90.0);
        match path.commands[0] {
            PathCommand::MoveTo { to } => assert!(close(to.x, 0.0) && close(to.y, -2.0)),
            other => panic!("expected move, got {:?}", other),
        }
        match path.commands[2] {
            PathCommand::LineTo { to } => assert!(close(to.x, 1.0) && close(to.y, 0.0)),
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_distribute_small_counts() {
        assert!(distribute_on_arc(0.0, 90.0, 0).is_empty());
        assert_eq!(distribute_on_arc(90.0, 180.0, 1), vec![135.0]);
    }

    #[test]
    fn test_distribute_work_sector_pair() {
        let angles = distribute_on_arc(90.0, 180.0, 2);
        assert_eq!(angles.len(), 2);
        assert!(close(angles[0], 120.0));
        assert!(close(angles[1], 150.0));
    }

    #[test]
    fn test_orbit_radii_spacing() {
        let radii = orbit_radii(170.0, 85.0);
        assert_eq!(radii.as_array(), [170.0, 255.0, 340.0]);
        assert_eq!(radii.for_orbit(Orbit::Actions), 255.0);
    }

    #[test]
    fn test_sector_span_quarters() {
        let span = sector_span(1, 4);
        assert_eq!(span, SectorSpan { start: 90.0, end: 180.0 });
        assert!(span.contains(90.0));
        assert!(!span.contains(180.0));
        assert_eq!(span.midpoint(), 135.0);
    }

    #[test]
    fn test_sector_span_zero_count() {
        let span = sector_span(0, 0);
        assert_eq!(span.width(), 360.0);
        assert!(sector_spans(0).is_empty());
    }
}
