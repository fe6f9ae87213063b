//! Authored galaxy content.
//!
//! The layout is sector → orbit → node, plus a per-sector map from node id to
//! a key in the prompt library. Keep the two in sync; `validate` reports drift.

use crate::core::models::{Orbit, Sector};

/// Prompt shown when a node's key does not resolve.
pub const PLACEHOLDER_PROMPT: &str = "No prompt available";

/// A leaf entry as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub local: bool,
}

/// One sector's orbits and prompt map.
#[derive(Debug, Clone, Copy)]
pub struct SectorSpec {
    pub sector: Sector,
    pub content: &'static [NodeSpec],
    pub actions: &'static [NodeSpec],
    pub outputs: &'static [NodeSpec],
    /// node id → prompt key
    pub prompt_map: &'static [(&'static str, &'static str)],
}

impl SectorSpec {
    /// Nodes on `orbit`.
    pub fn orbit(&self, orbit: Orbit) -> &'static [NodeSpec] {
        match orbit {
            Orbit::Content => self.content,
            Orbit::Actions => self.actions,
            Orbit::Outputs => self.outputs,
        }
    }

    /// Prompt key mapped to `node_id`.
    pub fn prompt_key(&self, node_id: &str) -> Option<&'static str> {
        self.prompt_map
            .iter()
            .find(|(id, _)| *id == node_id)
            .map(|(_, key)| *key)
    }

    /// Every node of the sector, orbit by orbit.
    pub fn all_nodes(&self) -> impl Iterator<Item = (Orbit, &'static NodeSpec)> + '_ {
        Orbit::ALL
            .into_iter()
            .flat_map(move |orbit| self.orbit(orbit).iter().map(move |node| (orbit, node)))
    }
}

/// The full authored content: sectors plus prompt library.
#[derive(Debug, Clone, Copy)]
pub struct GalaxyTables {
    pub sectors: &'static [SectorSpec],
    /// prompt key → text
    pub prompts: &'static [(&'static str, &'static str)],
}

impl GalaxyTables {
    /// Text for a prompt key.
    pub fn prompt_text(&self, key: &str) -> Option<&'static str> {
        self.prompts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

/// The shipped DystopiaOS galaxy.
pub const DEFAULT_TABLES: GalaxyTables = GalaxyTables {
    sectors: GALAXY,
    prompts: PROMPTS,
};

// =============================================================================
// Prompt library
// =============================================================================

pub const PROMPTS: &[(&str, &str)] = &[
    (
        "clean",
        "Tidy my desktop: group by project, move screenshots to /Screenshots, delete duplicates.",
    ),
    ("find", "Find the PDF with cardiology slides downloaded last week and open it."),
    ("rename", "Rename files in Downloads by content and move to the correct course folders."),
    (
        "schedule",
        "Time-block these tasks across this week with 45-min focus blocks and 10-min breaks.",
    ),
    (
        "form",
        "Fill this onboarding form with my saved profile, pause to confirm anything sensitive.",
    ),
    ("study", "From these notes, generate 20 flashcards and a 5-day study plan."),
    ("clinic", "Create a SBAR handoff from these notes. Keep PHI local; ask before any cloud use."),
    ("home", "From these 3 recipes, build a grocery list by aisle and a chores rota for the week."),
    ("travel", "Make a 3-day itinerary from these emails and a packing list for 2 adults."),
    ("money", "Extract totals from these receipts and export a CSV. Tag by project."),
    ("ocr", "From this screenshot, produce a clean table and copy to clipboard."),
    ("dev", "Explain this stack trace and provide a 3-step fix I can try."),
];

// =============================================================================
// Galaxy structure
// =============================================================================

const fn node(id: &'static str, label: &'static str, emoji: &'static str) -> NodeSpec {
    NodeSpec {
        id,
        label,
        emoji,
        local: true,
    }
}

pub const GALAXY: &[SectorSpec] = &[
    SectorSpec {
        sector: Sector::Home,
        content: &[node("shots", "Screenshots", "📸")],
        actions: &[
            node("rename", "Rename/Sort", "🏷️"),
            node("search", "Context Search", "🔎"),
        ],
        outputs: &[node("checklist", "Checklist", "✅")],
        prompt_map: &[
            ("shots", "ocr"),
            ("rename", "rename"),
            ("search", "find"),
            ("checklist", "clean"),
        ],
    },
    SectorSpec {
        sector: Sector::Work,
        content: &[
            node("emails", "Emails", "✉️"),
            node("calendar", "Calendar", "📆"),
        ],
        actions: &[
            node("timeblock", "Time-block", "⏱️"),
            node("formfill", "Form Fill", "🧾"),
        ],
        outputs: &[
            node("draft", "Draft reply", "✍️"),
            node("csv", "Expense CSV", "📈"),
        ],
        prompt_map: &[
            ("emails", "find"),
            ("calendar", "schedule"),
            ("timeblock", "schedule"),
            ("formfill", "form"),
            ("draft", "find"),
            ("csv", "money"),
        ],
    },
    SectorSpec {
        sector: Sector::School,
        content: &[
            node("notes", "Notes", "🗒️"),
            node("pdfs", "PDFs", "📄"),
        ],
        actions: &[
            node("summarize", "Summarize", "🧠"),
            node("ocr-school", "OCR", "📋"),
        ],
        outputs: &[node("flashcards", "Flashcards", "🗂️")],
        prompt_map: &[
            ("notes", "study"),
            ("pdfs", "study"),
            ("summarize", "study"),
            ("ocr-school", "ocr"),
            ("flashcards", "study"),
        ],
    },
    SectorSpec {
        sector: Sector::Health,
        content: &[node("notes-med", "Patient Notes", "📝")],
        actions: &[node("summarize-med", "Summarize", "🧠")],
        outputs: &[node("handoff", "Handoff", "🩺")],
        prompt_map: &[
            ("notes-med", "clinic"),
            ("summarize-med", "clinic"),
            ("handoff", "clinic"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sectors_in_canonical_order() {
        let order: Vec<Sector> = GALAXY.iter().map(|s| s.sector).collect();
        assert_eq!(order, Sector::ALL.to_vec());
    }

    #[test]
    fn test_prompt_key_lookup() {
        let home = &GALAXY[0];
        assert_eq!(home.prompt_key("shots"), Some("ocr"));
        assert_eq!(home.prompt_key("emails"), None);
    }

    #[test]
    fn test_all_nodes_walks_orbits_in_order() {
        let home: Vec<(Orbit, &str)> = GALAXY[0].all_nodes().map(|(o, n)| (o, n.id)).collect();
        assert_eq!(
            home,
            vec![
                (Orbit::Content, "shots"),
                (Orbit::Actions, "rename"),
                (Orbit::Actions, "search"),
                (Orbit::Outputs, "checklist"),
            ]
        );
    }

    #[test]
    fn test_prompt_text() {
        assert!(DEFAULT_TABLES.prompt_text("ocr").unwrap().contains("screenshot"));
        assert_eq!(DEFAULT_TABLES.prompt_text("missing"), None);
    }
}
