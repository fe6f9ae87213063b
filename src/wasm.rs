//! WASM bindings for the web front end.
//!
//! Values cross the boundary as plain JS objects via serde-wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::core::{CanvasConfig, Catalog, GalaxyLayout, ViewState};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// All flattened galaxy nodes.
#[wasm_bindgen(js_name = galaxyNodes)]
pub fn galaxy_nodes() -> Result<JsValue, JsValue> {
    to_js(&Catalog::global().nodes())
}

/// Layout for a view state such as `{ sector: "work", node: "csv" }`.
/// `undefined`/`null` means the unfiltered view.
#[wasm_bindgen(js_name = galaxyLayout)]
pub fn galaxy_layout(view: JsValue) -> Result<JsValue, JsValue> {
    let view: ViewState = if view.is_undefined() || view.is_null() {
        ViewState::default()
    } else {
        serde_wasm_bindgen::from_value(view).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let layout = GalaxyLayout::compute(Catalog::global(), &CanvasConfig::default(), &view);
    to_js(&layout)
}

/// Prompt for a node, empty string when unknown.
#[wasm_bindgen(js_name = nodePrompt)]
pub fn node_prompt(id: &str) -> String {
    Catalog::global().prompt_for_node(id).to_string()
}

/// Related prompts for the side panel.
#[wasm_bindgen(js_name = relatedNodes)]
pub fn related_nodes(id: &str, limit: usize) -> Result<JsValue, JsValue> {
    to_js(&Catalog::global().related_prompts(id, limit))
}
