use serde_json::Value;

use crate::content::records::{decode_records, AboutItem};
use crate::render::patch::Patch;
use crate::render::regions::ABOUT_TEXT;
use crate::render::vdom::Element;

pub fn render_about(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let paragraphs = decode_records::<AboutItem>("about", data)
        .into_iter()
        .map(|item| Element::new("p").text(item.content).into())
        .collect();

    vec![Patch::ReplaceChildren {
        target: ABOUT_TEXT,
        nodes: paragraphs,
    }]
}
