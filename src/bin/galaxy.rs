//! galaxy CLI - inspect the Task Galaxy
//!
//! Thin wrapper over the task_galaxy library: list sectors and nodes, look up
//! prompts, render the layout as text, JSON or SVG, and check the authored
//! tables.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::fs;
use std::path::PathBuf;

use task_galaxy::core::galaxy::DEFAULT_TABLES;
use task_galaxy::core::presenter;
use task_galaxy::core::{
    validate, Catalog, GalaxyConfig, GalaxyLayout, Orbit, OutputFormat, SectorFilter, ViewState,
};
use task_galaxy::formats::{render_svg, to_json, SvgConfig};

/// 🌌 Task Galaxy: explore the DystopiaOS galaxy map.
#[derive(Parser, Debug)]
#[command(name = "galaxy")]
#[command(version = task_galaxy::VERSION)]
#[command(about = "🌌 Task Galaxy: explore the DystopiaOS galaxy map")]
#[command(after_help = "EXAMPLES:
  # Sectors and their nodes
  galaxy sectors

  # Action nodes of the work sector as JSON
  galaxy nodes --sector work --orbit actions --format json

  # Prompt for a node, with two related prompts
  galaxy prompt shots

  # Render the galaxy focused on school to an SVG file
  galaxy layout --sector school --format svg -o galaxy.svg

  # Check the authored tables
  galaxy validate
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file path (default: .galaxy_config.json, then user config)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format [text, json, svg]
    #[arg(long = "format", value_enum, global = true)]
    format: Option<FormatArg>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List sectors with their nodes
    Sectors,

    /// List nodes, optionally narrowed to a sector and orbit
    Nodes {
        /// Sector [all, home, work, school, health]
        #[arg(long = "sector", value_name = "SECTOR")]
        sector: Option<SectorFilter>,

        /// Orbit [content, actions, outputs]
        #[arg(long = "orbit", value_name = "ORBIT")]
        orbit: Option<Orbit>,
    },

    /// Show the prompt for a node
    Prompt {
        /// Node id
        id: String,

        /// Number of related prompts to include
        #[arg(long = "related", value_name = "N")]
        related: Option<usize>,
    },

    /// List other nodes of the same sector
    Related {
        /// Node id
        id: String,

        /// Maximum number of nodes
        #[arg(long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Compute the galaxy layout for a view
    Layout {
        /// Sector filter [all, home, work, school, health]
        #[arg(long = "sector", value_name = "SECTOR", default_value = "all")]
        sector: SectorFilter,

        /// Selected node id
        #[arg(long = "node", value_name = "ID")]
        node: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check the authored tables for defects
    Validate,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Svg,
}

impl Command {
    fn renders_svg(&self) -> bool {
        matches!(self, Command::Layout { .. })
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Svg => OutputFormat::Svg,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("reading working directory")?;
    let config = GalaxyConfig::resolve(cli.config.as_deref(), &working_dir)?;
    let format = match cli.format {
        Some(arg) => OutputFormat::from(arg),
        // A configured svg default only applies where svg can be rendered
        None if config.format == OutputFormat::Svg && !cli.command.renders_svg() => {
            debug!("Configured svg format not supported here, using text");
            OutputFormat::Text
        }
        None => config.format,
    };
    debug!("Output format: {}", format);

    let catalog = Catalog::global();

    let output = match cli.command {
        Command::Sectors => {
            let sectors = catalog.sectors();
            match format {
                OutputFormat::Json => to_json(&sectors)?,
                OutputFormat::Text => sectors
                    .iter()
                    .map(presenter::format_sector_summary)
                    .collect(),
                OutputFormat::Svg => bail!("SVG output is only available for `layout`"),
            }
        }

        Command::Nodes { sector, orbit } => {
            let filter = sector.unwrap_or_default();
            let nodes: Vec<_> = catalog
                .nodes_in(filter)
                .into_iter()
                .filter(|n| orbit.map_or(true, |o| n.has_tag(o.key())))
                .collect();
            match format {
                OutputFormat::Json => to_json(&nodes)?,
                OutputFormat::Text => presenter::format_nodes(nodes),
                OutputFormat::Svg => bail!("SVG output is only available for `layout`"),
            }
        }

        Command::Prompt { id, related } => {
            let limit = related.unwrap_or(config.related_limit);
            let related = catalog.related_prompts(&id, limit);
            match format {
                OutputFormat::Json => to_json(&serde_json::json!({
                    "id": id,
                    "prompt": catalog.prompt_for_node(&id),
                    "related": related,
                }))?,
                OutputFormat::Text => match catalog.node(&id) {
                    Some(node) => presenter::format_prompt(node, &related),
                    // Unknown ids resolve to an empty prompt
                    None => String::new(),
                },
                OutputFormat::Svg => bail!("SVG output is only available for `layout`"),
            }
        }

        Command::Related { id, limit } => {
            let nodes = catalog.related_nodes(&id, limit.unwrap_or(config.related_limit));
            match format {
                OutputFormat::Json => to_json(&nodes)?,
                OutputFormat::Text => presenter::format_nodes(nodes),
                OutputFormat::Svg => bail!("SVG output is only available for `layout`"),
            }
        }

        Command::Layout {
            sector,
            node,
            output,
        } => {
            let mut view = ViewState::new().with_sector(sector);
            if let Some(id) = node {
                view.select_node(id);
            }
            let layout = GalaxyLayout::compute(catalog, &config.canvas, &view);
            let rendered = match format {
                OutputFormat::Json => to_json(&layout)?,
                OutputFormat::Text => presenter::format_layout(&layout),
                OutputFormat::Svg => render_svg(&layout, SvgConfig::default())?,
            };
            if let Some(mut path) = output {
                if path.extension().is_none() {
                    path.set_extension(format.extension());
                }
                fs::write(&path, &rendered)
                    .with_context(|| format!("writing {}", path.display()))?;
                eprintln!("✨ Wrote {} layout to {}", format, path.display());
                return Ok(());
            }
            rendered
        }

        Command::Validate => {
            let report = validate(&DEFAULT_TABLES);
            let rendered = match format {
                OutputFormat::Json => to_json(&report)?,
                OutputFormat::Text => presenter::format_validation(&report),
                OutputFormat::Svg => bail!("SVG output is only available for `layout`"),
            };
            print!("{}", rendered);
            if !report.is_clean() {
                bail!("galaxy tables have {} error(s)", report.errors().count());
            }
            return Ok(());
        }
    };

    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
