use serde::Serialize;

use crate::render::vdom::Node;

/// One mutation of a named page region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    /// Clears the region, then appends `nodes`.
    ReplaceChildren {
        target: &'static str,
        nodes: Vec<Node>,
    },
    /// Replaces the region's content with a single text node.
    SetText { target: &'static str, text: String },
    SetAttr {
        target: &'static str,
        name: &'static str,
        value: String,
    },
}

impl Patch {
    pub fn target(&self) -> &'static str {
        match self {
            Patch::ReplaceChildren { target, .. }
            | Patch::SetText { target, .. }
            | Patch::SetAttr { target, .. } => target,
        }
    }
}
