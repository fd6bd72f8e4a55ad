//! Skills: flat `(category, subskill)` rows grouped into one card per
//! category. Cards whose subskill list is too long to read inline open the
//! skills modal on click.

use serde_json::Value;

use crate::content::records::{decode_records, SkillRecord};
use crate::render::action::Action;
use crate::render::icons::ion_icon_or;
use crate::render::ion;
use crate::render::patch::Patch;
use crate::render::regions::SKILLS_LIST;
use crate::render::vdom::{Element, Node};

/// Joined subskill text longer than this many characters is "overflowing".
pub const SKILL_TEXT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub role: String,
    pub icon: String,
    pub subskills: Vec<String>,
}

impl SkillGroup {
    pub fn joined(&self) -> String {
        self.subskills.join(", ")
    }

    pub fn is_overflowing(&self) -> bool {
        self.joined().chars().count() > SKILL_TEXT_LIMIT
    }
}

/// Groups records by category in first-seen order. The first record of a
/// category decides its role and icon.
pub fn group_skills(records: Vec<SkillRecord>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g.category == record.category) {
            Some(group) => group.subskills.push(record.subskill),
            None => groups.push(SkillGroup {
                category: record.category,
                role: record.role,
                icon: record.icon,
                subskills: vec![record.subskill],
            }),
        }
    }
    groups
}

pub fn render_skills(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let groups = group_skills(decode_records("skills", data));
    vec![Patch::ReplaceChildren {
        target: SKILLS_LIST,
        nodes: groups.iter().map(skill_item).collect(),
    }]
}

fn skill_item(group: &SkillGroup) -> Node {
    let text = group.joined();
    let mut item = Element::new("li")
        .class("service-item")
        .attr("data-category", group.category.clone())
        .attr("data-full-skills", text.clone())
        .child(
            Element::new("div")
                .class("service-icon-box")
                .child(ion(ion_icon_or(&group.icon, "code-outline"))),
        )
        .child(
            Element::new("div")
                .class("service-content-box")
                .child(
                    Element::new("h4")
                        .class("h4")
                        .class("service-item-title")
                        .text(group.role.clone()),
                )
                .child(
                    Element::new("p")
                        .class("service-item-text")
                        .text(text.clone()),
                ),
        );

    if group.is_overflowing() {
        item = item.on_click(Action::OpenSkillsModal {
            title: group.role.clone(),
            content: text,
        });
    }
    item.into()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn items(patches: &[Patch]) -> &[Node] {
        match &patches[0] {
            Patch::ReplaceChildren { nodes, .. } => nodes,
            other => panic!("unexpected patch {other:?}"),
        }
    }

    #[test]
    fn test_groups_by_category_in_first_seen_order() {
        let data = vec![
            json!({ "category": "backend", "role": "Backend", "icon": "code", "subskill": "Rust" }),
            json!({ "category": "frontend", "role": "Frontend", "icon": "brain", "subskill": "CSS" }),
            json!({ "category": "backend", "role": "ignored", "icon": "coffee", "subskill": "Go" }),
        ];
        let groups = group_skills(decode_records("skills", &data));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].role, "Backend");
        assert_eq!(groups[0].icon, "code");
        assert_eq!(groups[0].joined(), "Rust, Go");
        assert_eq!(groups[1].category, "frontend");
    }

    #[test]
    fn test_short_group_has_no_click_action() {
        let data = vec![
            json!({ "category": "db", "role": "Databases", "icon": "book", "subskill": "Postgres" }),
            json!({ "category": "db", "role": "Databases", "icon": "book", "subskill": "Redis" }),
        ];
        let patches = render_skills(Some(&data));
        let item = items(&patches)[0].as_element().unwrap();
        assert!(item.on_click.is_none());
    }

    #[test]
    fn test_exactly_fifty_chars_is_not_overflowing() {
        let group = SkillGroup {
            category: "x".into(),
            role: "X".into(),
            icon: String::new(),
            subskills: vec!["a".repeat(50)],
        };
        assert!(!group.is_overflowing());
    }

    #[test]
    fn test_long_group_opens_modal_with_full_text() {
        let subskills = [
            "Rust",
            "Go",
            "TypeScript",
            "Python",
            "Kotlin",
            "Elixir",
            "Haskell",
            "OCaml",
        ];
        let data: Vec<Value> = subskills
            .iter()
            .map(|s| json!({ "category": "lang", "role": "Languages", "icon": "code", "subskill": s }))
            .collect();
        let full = subskills.join(", ");
        assert!(full.len() > SKILL_TEXT_LIMIT);

        let patches = render_skills(Some(&data));
        let item = items(&patches)[0].as_element().unwrap();
        assert_eq!(
            item.on_click,
            Some(Action::OpenSkillsModal {
                title: "Languages".into(),
                content: full.clone(),
            })
        );
        assert_eq!(item.get_attr("data-full-skills"), Some(full.as_str()));
    }

    #[test]
    fn test_missing_subskill_renders_empty() {
        let data = vec![json!({ "category": "misc", "role": "Misc" })];
        let patches = render_skills(Some(&data));
        let html = items(&patches)[0].to_html();
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
        assert!(html.contains("<p class=\"service-item-text\"></p>"));
    }
}
