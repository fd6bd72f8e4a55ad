// Section renderers: pure functions from one snapshot slice to the patches
// for the page regions that section owns. A renderer given `None` returns no
// patches; otherwise every region it owns is replaced wholesale.

pub mod about;
pub mod action;
pub mod certifications;
pub mod icons;
pub mod patch;
pub mod projects;
pub mod regions;
pub mod sidebar;
pub mod skills;
pub mod timeline;
pub mod vdom;

use serde_json::Value;

use crate::content::{ContentSnapshot, Topic};

pub use action::Action;
pub use patch::Patch;
pub use vdom::{Element, Node};

/// The rendered output of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionUpdate {
    pub topic: Topic,
    pub patches: Vec<Patch>,
}

type Renderer = fn(Option<&[Value]>) -> Vec<Patch>;

/// Fixed rendering order. The contact-form topic is fetched but not
/// rendered: the form markup is static.
const SECTIONS: [(Topic, Renderer); 7] = [
    (Topic::Sidebar, sidebar::render_sidebar),
    (Topic::About, about::render_about),
    (Topic::Skills, skills::render_skills),
    (Topic::Projects, projects::render_projects),
    (Topic::Experience, timeline::render_experience),
    (Topic::Education, timeline::render_education),
    (Topic::Certifications, certifications::render_certifications),
];

/// Renders every section of the snapshot, in order. Sections whose slice is
/// absent are omitted.
pub fn render_snapshot(snapshot: &ContentSnapshot) -> Vec<SectionUpdate> {
    SECTIONS
        .iter()
        .filter_map(|(topic, render)| {
            let slice = snapshot.slice(*topic)?;
            Some(SectionUpdate {
                topic: *topic,
                patches: render(Some(slice)),
            })
        })
        .collect()
}

/// `<ion-icon name="...">`
pub(crate) fn ion(name: &str) -> Element {
    Element::new("ion-icon").attr("name", name)
}
