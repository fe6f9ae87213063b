//! Streaming SVG writer for galaxy layouts
//!
//! Writes straight to any `std::io::Write`, so the same code serves files,
//! stdout and in-memory buffers (WASM). Output is deterministic: attributes
//! are written in a fixed order and numbers with fixed precision.

use std::io::Write;

use crate::core::error::{GalaxyError, Result};
use crate::core::layout::{GalaxyLayout, NodePlacement, SectorLayout};
use crate::core::models::{Point, Segment};

/// Options for SVG generation
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Document `<title>`
    pub title: String,
    /// Draw centre → node connector lines
    pub connectors: bool,
    /// Draw node titles under the glyph
    pub labels: bool,
    /// Text in the core circle
    pub core_label: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            title: "DystopiaOS Task Galaxy".to_string(),
            connectors: true,
            labels: true,
            core_label: "DYSTOPIA".to_string(),
        }
    }
}

/// Streaming SVG writer.
pub struct SvgWriter<W: Write> {
    writer: W,
    config: SvgConfig,
    open_groups: usize,
    in_document: bool,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(writer: W, config: SvgConfig) -> Self {
        Self {
            writer,
            config,
            open_groups: 0,
            in_document: false,
        }
    }

    /// Write a complete document for `layout`.
    pub fn write_document(&mut self, layout: &GalaxyLayout) -> Result<()> {
        self.write_start(layout)?;
        self.write_rings(layout)?;
        for sector in &layout.sectors {
            self.write_sector(sector)?;
        }
        self.write_core(layout)?;
        for sector in &layout.sectors {
            let nodes: Vec<&NodePlacement> = layout
                .nodes
                .iter()
                .filter(|n| n.category == sector.sector)
                .collect();
            self.write_nodes(sector, &nodes, layout.canvas.node_radius)?;
        }
        self.write_end()
    }

    /// Opening `<svg>` tag and title.
    pub fn write_start(&mut self, layout: &GalaxyLayout) -> Result<()> {
        if self.in_document {
            return Err(GalaxyError::svg_error("document already started"));
        }
        writeln!(
            self.writer,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" data-filter=\"{}\">",
            num(layout.canvas.width),
            num(layout.canvas.height),
            escape_attr(&layout.view.sector.to_string())
        )?;
        writeln!(self.writer, "  <title>{}</title>", escape_text(&self.config.title))?;
        self.in_document = true;
        Ok(())
    }

    /// Dashed orbit rings.
    pub fn write_rings(&mut self, layout: &GalaxyLayout) -> Result<()> {
        self.ensure_started()?;
        for (orbit, r) in ["content", "actions", "outputs"]
            .iter()
            .zip(layout.orbits.as_array())
        {
            writeln!(
                self.writer,
                "  <circle class=\"orbit orbit-{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-dasharray=\"8,8\" />",
                orbit,
                num(layout.center.x),
                num(layout.center.y),
                num(r)
            )?;
        }
        Ok(())
    }

    /// Wedge and boundary lines of a sector.
    pub fn write_sector(&mut self, sector: &SectorLayout) -> Result<()> {
        self.ensure_started()?;
        let opacity = if sector.selected { "0.08" } else { "0.03" };
        self.open_group(&format!(
            "class=\"sector\" data-sector=\"{}\" opacity=\"{}\"",
            sector.sector,
            if sector.visible { "1" } else { "0.3" }
        ))?;
        writeln!(
            self.writer,
            "    <path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\" />",
            escape_attr(&sector.wedge.to_string()),
            escape_attr(&sector.color_hex),
            opacity
        )?;
        for boundary in &sector.boundaries {
            self.write_line(boundary, &sector.color_hex, "0.2")?;
        }
        self.close_group()
    }

    /// Central core circle and label.
    pub fn write_core(&mut self, layout: &GalaxyLayout) -> Result<()> {
        self.ensure_started()?;
        let (cx, cy) = (num(layout.center.x), num(layout.center.y));
        writeln!(
            self.writer,
            "  <circle class=\"core\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#818cf8\" />",
            cx,
            cy,
            num(layout.canvas.core_radius)
        )?;
        writeln!(
            self.writer,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            cx,
            cy,
            escape_text(&self.config.core_label)
        )?;
        Ok(())
    }

    /// Connectors and node groups of one sector.
    pub fn write_nodes(
        &mut self,
        sector: &SectorLayout,
        nodes: &[&NodePlacement],
        node_radius: f64,
    ) -> Result<()> {
        self.ensure_started()?;
        self.open_group(&format!(
            "class=\"nodes\" data-sector=\"{}\" opacity=\"{}\"",
            sector.sector,
            if sector.visible { "1" } else { "0.25" }
        ))?;

        if self.config.connectors {
            for node in nodes {
                let opacity = if node.selected { "0.5" } else { "0.1" };
                self.write_line(&node.connector, &sector.color_hex, opacity)?;
            }
        }

        let node_radius = num(node_radius);
        for node in nodes {
            self.write_node(node, &sector.color_hex, &node_radius)?;
        }
        self.close_group()
    }

    fn write_node(&mut self, node: &NodePlacement, color: &str, radius: &str) -> Result<()> {
        let Point { x, y } = node.position;
        self.open_group(&format!(
            "class=\"node{}\" data-id=\"{}\" data-orbit=\"{}\" data-local=\"{}\"",
            if node.selected { " selected" } else { "" },
            escape_attr(&node.id),
            node.orbit,
            node.local
        ))?;
        let indent = "  ".repeat(self.open_groups + 1);
        writeln!(
            self.writer,
            "{}<title>{}</title>",
            indent,
            escape_text(&format!("{} ({} node, {} sector)", node.title, node.orbit, node.category))
        )?;
        writeln!(
            self.writer,
            "{}<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#ffffff\" stroke=\"{}\" stroke-width=\"{}\" />",
            indent,
            num(x),
            num(y),
            radius,
            escape_attr(color),
            if node.selected { 3 } else { 2 }
        )?;
        writeln!(
            self.writer,
            "{}<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            indent,
            num(x),
            num(y),
            escape_text(&node.icon)
        )?;
        if self.config.labels {
            writeln!(
                self.writer,
                "{}<text class=\"label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
                indent,
                num(x),
                num(y + 40.0),
                escape_text(&node.title)
            )?;
        }
        self.close_group()
    }

    /// Closing `</svg>`; fails if groups are still open.
    pub fn write_end(&mut self) -> Result<()> {
        self.ensure_started()?;
        if self.open_groups != 0 {
            return Err(GalaxyError::svg_error(format!(
                "{} group(s) still open at end of document",
                self.open_groups
            )));
        }
        writeln!(self.writer, "</svg>")?;
        self.in_document = false;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, segment: &Segment, color: &str, opacity: &str) -> Result<()> {
        let indent = "  ".repeat(self.open_groups + 1);
        writeln!(
            self.writer,
            "{}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-opacity=\"{}\" />",
            indent,
            num(segment.from.x),
            num(segment.from.y),
            num(segment.to.x),
            num(segment.to.y),
            escape_attr(color),
            opacity
        )?;
        Ok(())
    }

    fn open_group(&mut self, attrs: &str) -> Result<()> {
        self.open_groups += 1;
        writeln!(self.writer, "{}<g {}>", "  ".repeat(self.open_groups), attrs)?;
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        if self.open_groups == 0 {
            return Err(GalaxyError::svg_error("close_group without open group"));
        }
        writeln!(self.writer, "{}</g>", "  ".repeat(self.open_groups))?;
        self.open_groups -= 1;
        Ok(())
    }

    fn ensure_started(&self) -> Result<()> {
        if self.in_document {
            Ok(())
        } else {
            Err(GalaxyError::svg_error("must call write_start first"))
        }
    }
}

/// Render a layout to an SVG string.
pub fn render_svg(layout: &GalaxyLayout, config: SvgConfig) -> Result<String> {
    let mut writer = SvgWriter::new(Vec::new(), config);
    writer.write_document(layout)?;
    String::from_utf8(writer.into_inner()).map_err(|e| GalaxyError::svg_error(e.to_string()))
}

/// Fixed-precision number without trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape a string for an attribute value.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape a string for text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
