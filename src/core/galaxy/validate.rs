//! Authoring checks for the galaxy tables.
//!
//! Flattening degrades gracefully on bad data (placeholder prompts, last write
//! wins on duplicate ids). These checks surface the same defects up front so
//! they get fixed in the tables instead.

use std::collections::{HashMap, HashSet};
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::tables::GalaxyTables;
use crate::core::models::Sector;

lazy_static! {
    static ref NODE_ID: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// How bad an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single authoring defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    DuplicateNodeId { id: String, sectors: Vec<Sector> },
    MissingPromptKey { id: String, sector: Sector },
    UnknownPromptKey { id: String, sector: Sector, key: String },
    MalformedNodeId { id: String, sector: Sector },
    EmptySector { sector: Sector },
    DuplicateSector { sector: Sector },
    DanglingPromptMapping { id: String, sector: Sector },
    UnusedPrompt { key: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::UnusedPrompt { .. }
            | ValidationIssue::DanglingPromptMapping { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateNodeId { id, sectors } => {
                let keys: Vec<&str> = sectors.iter().map(|s| s.key()).collect();
                write!(f, "node id '{}' defined more than once ({})", id, keys.join(", "))
            }
            ValidationIssue::MissingPromptKey { id, sector } => {
                write!(f, "[{}] node '{}' has no prompt mapping", sector, id)
            }
            ValidationIssue::UnknownPromptKey { id, sector, key } => write!(
                f,
                "[{}] node '{}' maps to prompt '{}' which is not in the library",
                sector, id, key
            ),
            ValidationIssue::MalformedNodeId { id, sector } => {
                write!(f, "[{}] node id '{}' is not lowercase kebab-case", sector, id)
            }
            ValidationIssue::EmptySector { sector } => {
                write!(f, "[{}] sector has no nodes", sector)
            }
            ValidationIssue::DuplicateSector { sector } => {
                write!(f, "[{}] sector is listed more than once", sector)
            }
            ValidationIssue::DanglingPromptMapping { id, sector } => {
                write!(f, "[{}] prompt mapping for '{}' names no node", sector, id)
            }
            ValidationIssue::UnusedPrompt { key } => {
                write!(f, "prompt '{}' is never referenced", key)
            }
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub nodes_checked: usize,
}

impl ValidationReport {
    /// No errors (warnings allowed).
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Warning)
    }
}

/// Check the tables for authoring defects.
pub fn validate(tables: &GalaxyTables) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashMap<&str, Vec<Sector>> = HashMap::new();
    let mut id_order: Vec<&str> = Vec::new();
    let mut used_prompts: HashSet<&str> = HashSet::new();
    let mut listed: Vec<Sector> = Vec::new();

    for spec in tables.sectors {
        let sector = spec.sector;
        if listed.contains(&sector) {
            report.issues.push(ValidationIssue::DuplicateSector { sector });
        } else {
            listed.push(sector);
        }
        let mut sector_ids: HashSet<&str> = HashSet::new();

        for (_, node) in spec.all_nodes() {
            report.nodes_checked += 1;
            sector_ids.insert(node.id);

            let sectors = seen.entry(node.id).or_default();
            if sectors.is_empty() {
                id_order.push(node.id);
            }
            sectors.push(sector);

            if !NODE_ID.is_match(node.id) {
                report.issues.push(ValidationIssue::MalformedNodeId {
                    id: node.id.to_string(),
                    sector,
                });
            }

            match spec.prompt_key(node.id) {
                None => report.issues.push(ValidationIssue::MissingPromptKey {
                    id: node.id.to_string(),
                    sector,
                }),
                Some(key) => {
                    used_prompts.insert(key);
                    if tables.prompt_text(key).is_none() {
                        report.issues.push(ValidationIssue::UnknownPromptKey {
                            id: node.id.to_string(),
                            sector,
                            key: key.to_string(),
                        });
                    }
                }
            }
        }

        if sector_ids.is_empty() {
            report.issues.push(ValidationIssue::EmptySector { sector });
        }

        for (id, _) in spec.prompt_map {
            if !sector_ids.contains(id) {
                report.issues.push(ValidationIssue::DanglingPromptMapping {
                    id: id.to_string(),
                    sector,
                });
            }
        }
    }

    for id in id_order {
        if let Some(sectors) = seen.get(id) {
            if sectors.len() > 1 {
                report.issues.push(ValidationIssue::DuplicateNodeId {
                    id: id.to_string(),
                    sectors: sectors.clone(),
                });
            }
        }
    }

    for (key, _) in tables.prompts {
        if !used_prompts.contains(key) {
            report.issues.push(ValidationIssue::UnusedPrompt {
                key: key.to_string(),
            });
        }
    }

    report
}
