//! In-memory page document: the boundary where renderer patches are applied.
//!
//! Only regions declared by the static shell exist. Patching an undeclared
//! region is an error, which is how a markup/renderer mismatch surfaces.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::render::patch::Patch;
use crate::render::regions;
use crate::render::vdom::{Element, Node};

#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    #[error("page region '{0}' does not exist")]
    MissingRegion(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Region {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
    pub hidden: bool,
}

impl Region {
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }

    /// Child elements, skipping bare text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    regions: BTreeMap<String, Region>,
}

impl Document {
    /// A document declaring exactly `ids`, all empty and visible.
    pub fn with_regions(ids: &[&str]) -> Self {
        Self {
            regions: ids
                .iter()
                .map(|id| (id.to_string(), Region::default()))
                .collect(),
        }
    }

    /// The static page shell: every region renderers and wiring rely on, the
    /// main content hidden behind the loading spinner, the thank-you panel
    /// hidden, and the contact form pointing at `form_action`.
    pub fn shell(form_action: &str) -> Self {
        let mut doc = Self::with_regions(regions::ALL);
        if let Some(main) = doc.regions.get_mut(regions::MAIN_CONTENT) {
            main.hidden = true;
        }
        if let Some(panel) = doc.regions.get_mut(regions::THANK_YOU_MESSAGE) {
            panel.hidden = true;
        }
        if let Some(form) = doc.regions.get_mut(regions::CONTACT_FORM) {
            form.attrs.insert("action".into(), form_action.to_string());
            form.attrs.insert("method".into(), "post".into());
        }
        if let Some(spinner) = doc.regions.get_mut(regions::LOADING_SPINNER) {
            spinner.children = vec![Element::new("div").class("spinner").into()];
        }
        if let Some(select) = doc.regions.get_mut(regions::SELECT_VALUE) {
            select.children = vec![Node::text("Select category")];
        }
        doc
    }

    pub fn region(&self, id: &str) -> Result<&Region, PageError> {
        self.regions
            .get(id)
            .ok_or_else(|| PageError::MissingRegion(id.to_string()))
    }

    pub fn region_mut(&mut self, id: &str) -> Result<&mut Region, PageError> {
        self.regions
            .get_mut(id)
            .ok_or_else(|| PageError::MissingRegion(id.to_string()))
    }

    pub fn apply(&mut self, patch: Patch) -> Result<(), PageError> {
        let region = self.region_mut(patch.target())?;
        match patch {
            Patch::ReplaceChildren { nodes, .. } => region.children = nodes,
            Patch::SetText { text, .. } => region.children = vec![Node::text(text)],
            Patch::SetAttr { name, value, .. } => {
                region.attrs.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), PageError> {
        self.region_mut(id)?.children = vec![Node::text(text)];
        Ok(())
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<(), PageError> {
        self.region_mut(id)?.hidden = hidden;
        Ok(())
    }

    pub fn text_of(&self, id: &str) -> String {
        self.regions
            .get(id)
            .map(Region::text_content)
            .unwrap_or_default()
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.regions.get(id).map(|r| r.hidden).unwrap_or(true)
    }
}
