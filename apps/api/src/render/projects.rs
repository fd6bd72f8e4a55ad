use serde_json::Value;

use crate::content::records::{decode_records, ProjectRecord};
use crate::render::action::Action;
use crate::render::ion;
use crate::render::patch::Patch;
use crate::render::regions::{PROJECT_FILTERS, PROJECT_LIST, PROJECT_SELECT_LIST};
use crate::render::vdom::{Element, Node};

pub const ALL_FILTER: &str = "all";
const ALL_LABEL: &str = "All";

/// Distinct categories in first-seen order. Comparison is exact, so "Web"
/// and "web" are two categories that filter to the same key.
pub fn distinct_categories(projects: &[ProjectRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

pub fn filter_key(category: &str) -> String {
    category.to_lowercase()
}

pub fn render_projects(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let projects: Vec<ProjectRecord> = decode_records("projects", data);
    let labels: Vec<String> = std::iter::once(ALL_LABEL.to_string())
        .chain(distinct_categories(&projects))
        .collect();

    let filters = labels
        .iter()
        .enumerate()
        .map(|(index, label)| filter_button(index, label))
        .collect();
    let options = labels.iter().map(|label| select_option(label)).collect();
    let cards = projects.iter().map(project_card).collect();

    vec![
        Patch::ReplaceChildren {
            target: PROJECT_FILTERS,
            nodes: filters,
        },
        Patch::ReplaceChildren {
            target: PROJECT_SELECT_LIST,
            nodes: options,
        },
        Patch::ReplaceChildren {
            target: PROJECT_LIST,
            nodes: cards,
        },
    ]
}

fn filter_button(index: usize, label: &str) -> Node {
    let mut button = Element::new("button")
        .flag("data-filter-btn")
        .text(label)
        .on_click(Action::FilterButton {
            index,
            value: filter_key(label),
            label: label.to_string(),
        });
    if index == 0 {
        button.add_class("active");
    }
    Element::new("li").class("filter-item").child(button).into()
}

fn select_option(label: &str) -> Node {
    Element::new("li")
        .class("select-item")
        .child(
            Element::new("button")
                .flag("data-select-item")
                .text(label)
                .on_click(Action::FilterOption {
                    value: filter_key(label),
                    label: label.to_string(),
                }),
        )
        .into()
}

fn project_card(project: &ProjectRecord) -> Node {
    Element::new("li")
        .class("project-item")
        .class("active")
        .flag("data-filter-item")
        .attr("data-category", filter_key(&project.category))
        .child(
            Element::new("a")
                .attr("href", project.project_url.clone())
                .attr("target", "_blank")
                .child(
                    Element::new("figure")
                        .class("project-img")
                        .child(
                            Element::new("div")
                                .class("project-item-icon-box")
                                .child(ion("eye-outline")),
                        )
                        .child(
                            Element::new("img")
                                .attr("src", project.image_url.clone())
                                .attr("alt", project.name.clone())
                                .attr("loading", "lazy"),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("project-content")
                        .child(
                            Element::new("h3")
                                .class("project-title")
                                .text(project.name.clone()),
                        )
                        .child(
                            Element::new("p")
                                .class("project-category")
                                .text(project.category.clone()),
                        )
                        .child(
                            Element::new("p")
                                .class("project-languages")
                                .text(project.languages.clone()),
                        ),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn nodes<'a>(patches: &'a [Patch], region: &str) -> &'a [Node] {
        patches
            .iter()
            .find_map(|p| match p {
                Patch::ReplaceChildren { target, nodes } if *target == region => {
                    Some(nodes.as_slice())
                }
                _ => None,
            })
            .unwrap()
    }

    fn sample() -> Vec<Value> {
        vec![
            json!({ "name": "Site", "category": "Web", "project_url": "https://a" }),
            json!({ "name": "Shop", "category": "Web", "project_url": "https://b" }),
            json!({ "name": "grep2", "category": "CLI", "project_url": "https://c" }),
        ]
    }

    #[test]
    fn test_filters_are_distinct_in_first_seen_order() {
        let patches = render_projects(Some(&sample()));
        let labels: Vec<String> = nodes(&patches, PROJECT_FILTERS)
            .iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(labels, vec!["All", "Web", "CLI"]);

        let options: Vec<String> = nodes(&patches, PROJECT_SELECT_LIST)
            .iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(options, vec!["All", "Web", "CLI"]);
    }

    #[test]
    fn test_cards_carry_lowercased_filter_key() {
        let patches = render_projects(Some(&sample()));
        let keys: Vec<&str> = nodes(&patches, PROJECT_LIST)
            .iter()
            .map(|n| n.as_element().unwrap().get_attr("data-category").unwrap())
            .collect();
        assert_eq!(keys, vec!["web", "web", "cli"]);
    }

    #[test]
    fn test_buttons_carry_index_and_key() {
        let patches = render_projects(Some(&sample()));
        let li = nodes(&patches, PROJECT_FILTERS)[2].as_element().unwrap();
        let button = li.children[0].as_element().unwrap();
        assert_eq!(
            button.on_click,
            Some(Action::FilterButton {
                index: 2,
                value: "cli".into(),
                label: "CLI".into(),
            })
        );
        assert!(!button.has_class("active"));
        let first = nodes(&patches, PROJECT_FILTERS)[0].as_element().unwrap();
        assert!(first.children[0].as_element().unwrap().has_class("active"));
    }

    #[test]
    fn test_missing_fields_never_leak_undefined() {
        let data = vec![json!({ "name": "Bare" })];
        let patches = render_projects(Some(&data));
        let html = nodes(&patches, PROJECT_LIST)[0].to_html();
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
        assert!(html.contains("href=\"\""));
    }
}
