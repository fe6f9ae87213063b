//! Plain-text rendering for the CLI.

use super::galaxy::{RelatedPrompt, ValidationReport};
use super::layout::GalaxyLayout;
use super::models::{GalaxyNode, GalaxySector};

/// One line per node: icon, id, title and tags.
pub fn format_node(node: &GalaxyNode) -> String {
    let locality = if node.is_local() { "🔒 local" } else { "☁️ cloud" };
    let orbit = node.orbit().map(|o| o.key()).unwrap_or("?");
    format!(
        "{} {:<14} {:<16} [{} · {} · {}]",
        node.icon, node.id, node.title, node.category, orbit, locality
    )
}

/// Node list followed by a count.
pub fn format_nodes<'a>(nodes: impl IntoIterator<Item = &'a GalaxyNode>) -> String {
    let mut output = String::new();
    let mut count = 0;
    for node in nodes {
        output.push_str(&format_node(node));
        output.push('\n');
        count += 1;
    }
    output.push_str(&format!("{} node(s)\n", count));
    output
}

/// Sector header with its nodes grouped underneath.
pub fn format_sector_summary(sector: &GalaxySector) -> String {
    let mut output = format!(
        "✨ {} ({} nodes, {})\n",
        sector.label,
        sector.node_count(),
        sector.color_hex
    );
    for node in &sector.nodes {
        output.push_str(&format!("    {} {} — {}\n", node.icon, node.title, node.description));
    }
    output
}

/// Prompt block for a node plus its related prompts.
pub fn format_prompt(node: &GalaxyNode, related: &[RelatedPrompt]) -> String {
    let mut output = format!("{} {}\n\n{}\n", node.icon, node.title, node.prompt);
    if !related.is_empty() {
        output.push_str("\nRelated:\n");
        for r in related {
            output.push_str(&format!("  {} {}: {}\n", r.emoji, r.label, r.prompt));
        }
    }
    output
}

/// Node coordinates, one sector at a time.
pub fn format_layout(layout: &GalaxyLayout) -> String {
    let mut output = format!(
        "🌌 Galaxy {}×{} (filter: {})\n",
        layout.canvas.width, layout.canvas.height, layout.view.sector
    );
    for sector in &layout.sectors {
        let marker = if sector.visible { "✨" } else { "🌫️" };
        output.push_str(&format!(
            "{} {} [{:.0}°, {:.0}°)\n",
            marker, sector.label, sector.span.start, sector.span.end
        ));
        for node in layout.nodes.iter().filter(|n| n.category == sector.sector) {
            let selected = if node.selected { " ◀ selected" } else { "" };
            output.push_str(&format!(
                "    {} {:<14} {:>7.2}° r={:<5} ({:.1}, {:.1}){}\n",
                node.icon,
                node.id,
                node.angle,
                node.radius,
                node.position.x,
                node.position.y,
                selected
            ));
        }
    }
    if !layout.selected_prompt.is_empty() {
        output.push_str(&format!("\nPrompt: {}\n", layout.selected_prompt));
    }
    output
}

/// Validation issues, errors first.
pub fn format_validation(report: &ValidationReport) -> String {
    let mut output = String::new();
    for issue in report.errors() {
        output.push_str(&format!("❌ {}\n", issue));
    }
    for issue in report.warnings() {
        output.push_str(&format!("⚠️  {}\n", issue));
    }
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    output.push_str(&format!(
        "Checked {} nodes: {} error(s), {} warning(s)\n",
        report.nodes_checked, errors, warnings
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CanvasConfig;
    use crate::core::galaxy::{validate, Catalog, DEFAULT_TABLES};
    use crate::core::layout::ViewState;

    #[test]
    fn test_format_node_line() {
        let node = Catalog::global().node("shots").unwrap();
        let line = format_node(node);
        assert!(line.contains("shots"));
        assert!(line.contains("Screenshots"));
        assert!(line.contains("home · content"));
    }

    #[test]
    fn test_format_nodes_counts() {
        let out = format_nodes(Catalog::global().nodes());
        assert!(out.ends_with("16 node(s)\n"));
    }

    #[test]
    fn test_format_prompt_lists_related() {
        let catalog = Catalog::global();
        let node = catalog.node("shots").unwrap();
        let out = format_prompt(node, &catalog.related_prompts("shots", 2));
        assert!(out.contains("Related:"));
        assert!(out.contains("Rename/Sort"));
        assert!(out.contains("Context Search"));
    }

    #[test]
    fn test_format_layout_marks_selection() {
        let layout = GalaxyLayout::compute(
            Catalog::global(),
            &CanvasConfig::default(),
            &ViewState::new().with_node("draft"),
        );
        let out = format_layout(&layout);
        assert!(out.contains("◀ selected"));
        assert!(out.contains("Prompt: "));
    }

    #[test]
    fn test_format_validation_summary() {
        let out = format_validation(&validate(&DEFAULT_TABLES));
        assert!(out.contains("Checked 16 nodes: 0 error(s), 3 warning(s)"));
    }
}
