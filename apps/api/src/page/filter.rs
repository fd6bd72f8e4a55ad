//! Project filtering. The custom select and the quick-filter buttons drive
//! the same predicate over the cards in `project-list`.

use crate::page::document::{Document, PageError};
use crate::render::projects::ALL_FILTER;
use crate::render::regions::{PROJECT_FILTERS, PROJECT_LIST, SELECT_VALUE};
use crate::render::vdom::Element;

const ACTIVE: &str = "active";

/// Filter state bound to one rendering of the project section. Rebuilt every
/// time the projects renderer replaces the buttons and cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilter {
    /// Index of the button currently marked active. Retained here rather
    /// than looked up from the document.
    current_button: usize,
    button_count: usize,
    select_open: bool,
}

impl ProjectFilter {
    pub fn register(doc: &Document) -> Result<Self, PageError> {
        let button_count = doc.region(PROJECT_FILTERS)?.elements().count();
        Ok(Self {
            current_button: 0,
            button_count,
            select_open: false,
        })
    }

    pub fn current_button(&self) -> usize {
        self.current_button
    }

    pub fn is_select_open(&self) -> bool {
        self.select_open
    }

    pub fn toggle_select(&mut self) {
        self.select_open = !self.select_open;
    }

    /// An option picked from the dropdown: show its label, close the
    /// dropdown, filter.
    pub fn choose_option(
        &mut self,
        doc: &mut Document,
        value: &str,
        label: &str,
    ) -> Result<(), PageError> {
        doc.set_text(SELECT_VALUE, label)?;
        self.toggle_select();
        apply_filter(doc, value)
    }

    /// A quick-filter button: show its label, filter, and move the active
    /// marker from the previously pressed button to this one.
    pub fn press_button(
        &mut self,
        doc: &mut Document,
        index: usize,
        value: &str,
        label: &str,
    ) -> Result<(), PageError> {
        if index >= self.button_count {
            return Ok(());
        }
        doc.set_text(SELECT_VALUE, label)?;
        apply_filter(doc, value)?;

        if let Some(previous) = button_at(doc, self.current_button)? {
            previous.remove_class(ACTIVE);
        }
        if let Some(pressed) = button_at(doc, index)? {
            pressed.add_class(ACTIVE);
        }
        self.current_button = index;
        Ok(())
    }
}

/// `"all"` activates every card; otherwise a card is active iff its stored
/// category equals the lower-cased selection.
pub fn apply_filter(doc: &mut Document, selected: &str) -> Result<(), PageError> {
    let selected = selected.to_lowercase();
    for item in doc
        .region_mut(PROJECT_LIST)?
        .elements_mut()
        .filter(|el| el.has_attr("data-filter-item"))
    {
        let matches = selected == ALL_FILTER
            || item.get_attr("data-category").map(str::to_lowercase).as_deref()
                == Some(selected.as_str());
        if matches {
            item.add_class(ACTIVE);
        } else {
            item.remove_class(ACTIVE);
        }
    }
    Ok(())
}

fn button_at(doc: &mut Document, index: usize) -> Result<Option<&mut Element>, PageError> {
    Ok(doc
        .region_mut(PROJECT_FILTERS)?
        .elements_mut()
        .nth(index)
        .and_then(Element::first_child_element_mut))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::render::projects::render_projects;
    use crate::render::regions;

    fn rendered() -> Document {
        let mut doc = Document::shell("/api/contact");
        let data = vec![
            json!({ "name": "Site", "category": "Web" }),
            json!({ "name": "Shop", "category": "Web" }),
            json!({ "name": "grep2", "category": "CLI" }),
        ];
        for patch in render_projects(Some(&data)) {
            doc.apply(patch).unwrap();
        }
        doc
    }

    fn active_cards(doc: &Document) -> Vec<String> {
        doc.region(regions::PROJECT_LIST)
            .unwrap()
            .elements()
            .filter(|el| el.has_class("active"))
            .map(|el| el.find_by_class("project-title").unwrap().children[0].text_content())
            .collect()
    }

    fn active_buttons(doc: &Document) -> Vec<usize> {
        doc.region(regions::PROJECT_FILTERS)
            .unwrap()
            .elements()
            .enumerate()
            .filter(|(_, li)| li.children[0].as_element().unwrap().has_class("active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_selecting_cli_leaves_only_cli_active() {
        let mut doc = rendered();
        let mut filter = ProjectFilter::register(&doc).unwrap();
        filter.press_button(&mut doc, 2, "cli", "CLI").unwrap();

        assert_eq!(active_cards(&doc), vec!["grep2"]);
        assert_eq!(doc.text_of(regions::SELECT_VALUE), "CLI");
    }

    #[test]
    fn test_all_reactivates_everything() {
        let mut doc = rendered();
        let mut filter = ProjectFilter::register(&doc).unwrap();
        filter.press_button(&mut doc, 1, "web", "Web").unwrap();
        assert_eq!(active_cards(&doc), vec!["Site", "Shop"]);
        filter.press_button(&mut doc, 0, "all", "All").unwrap();
        assert_eq!(active_cards(&doc).len(), 3);
    }

    #[test]
    fn test_exactly_one_button_is_current() {
        let mut doc = rendered();
        let mut filter = ProjectFilter::register(&doc).unwrap();
        assert_eq!(active_buttons(&doc), vec![0]);

        filter.press_button(&mut doc, 2, "cli", "CLI").unwrap();
        assert_eq!(active_buttons(&doc), vec![2]);
        filter.press_button(&mut doc, 1, "web", "Web").unwrap();
        assert_eq!(active_buttons(&doc), vec![1]);
        assert_eq!(filter.current_button(), 1);
    }

    #[test]
    fn test_select_option_closes_dropdown_and_filters() {
        let mut doc = rendered();
        let mut filter = ProjectFilter::register(&doc).unwrap();
        filter.toggle_select();
        assert!(filter.is_select_open());

        filter.choose_option(&mut doc, "web", "Web").unwrap();
        assert!(!filter.is_select_open());
        assert_eq!(active_cards(&doc), vec!["Site", "Shop"]);
        // the option does not move the quick-filter marker
        assert_eq!(active_buttons(&doc), vec![0]);
    }

    #[test]
    fn test_out_of_range_button_is_ignored() {
        let mut doc = rendered();
        let mut filter = ProjectFilter::register(&doc).unwrap();
        filter.press_button(&mut doc, 9, "cli", "CLI").unwrap();
        assert_eq!(active_cards(&doc).len(), 3);
        assert_eq!(filter.current_button(), 0);
    }
}
