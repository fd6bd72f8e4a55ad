use serde::Serialize;

use crate::render::action::Action;
use crate::render::vdom::{Element, Node};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub page: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(page: &str, label: &str) -> Self {
        Self {
            page: page.to_string(),
            label: label.to_string(),
        }
    }
}

/// Page switcher keyed by page identifier. Exactly one page is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigator {
    entries: Vec<NavEntry>,
    active: String,
}

impl Navigator {
    /// The first entry starts active. An empty entry list yields a navigator
    /// with nothing to activate.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let active = entries.first().map(|e| e.page.clone()).unwrap_or_default();
        Self { entries, active }
    }

    pub fn portfolio() -> Self {
        Self::new(vec![
            NavEntry::new("about", "About"),
            NavEntry::new("resume", "Resume"),
            NavEntry::new("portfolio", "Portfolio"),
            NavEntry::new("certifications", "Certifications"),
            NavEntry::new("contact", "Contact"),
        ])
    }

    /// Activates `page` and deactivates every other page. Returns `false`
    /// and changes nothing when `page` is not a known identifier.
    pub fn activate(&mut self, page: &str) -> bool {
        if !self.entries.iter().any(|e| e.page == page) {
            return false;
        }
        self.active = page.to_string();
        true
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active == page
    }

    /// Nav bar links, the active one marked with the `active` class.
    pub fn links(&self) -> Vec<Node> {
        self.entries
            .iter()
            .map(|entry| {
                let mut button = Element::new("button")
                    .class("navbar-link")
                    .flag("data-nav-link")
                    .text(entry.label.clone())
                    .on_click(Action::Navigate {
                        page: entry.page.clone(),
                    });
                if self.is_active(&entry.page) {
                    button.add_class("active");
                }
                Element::new("li").class("navbar-item").child(button).into()
            })
            .collect()
    }
}
