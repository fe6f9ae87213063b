//! Output format modules for task_galaxy
//!
//! Writers stream through `std::io::Write` so they work the same on native
//! targets and in WASM.

pub mod svg_writer;

pub use svg_writer::{escape_attr, escape_text, render_svg, SvgConfig, SvgWriter};

use serde::Serialize;

use crate::core::error::Result;

/// Pretty-printed JSON for any serializable galaxy value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
