//! Experience and education share the timeline template: a title, an
//! organisation that links out only when a URL is known, and a
//! "duration • location" line.

use serde_json::Value;

use crate::content::records::{decode_records, EducationRecord, ExperienceRecord};
use crate::render::patch::Patch;
use crate::render::regions::{EDUCATION_LIST, EXPERIENCE_LIST};
use crate::render::vdom::{Element, Node};

pub fn render_experience(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let entries = decode_records::<ExperienceRecord>("experience", data)
        .into_iter()
        .map(|exp| {
            timeline_item(&exp.role, &exp.company, &exp.company_url, &exp.duration, &exp.location)
                .child(Element::new("p").class("timeline-text").text(exp.description))
                .into()
        })
        .collect();

    vec![Patch::ReplaceChildren {
        target: EXPERIENCE_LIST,
        nodes: entries,
    }]
}

pub fn render_education(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let entries = decode_records::<EducationRecord>("education", data)
        .into_iter()
        .map(|edu| {
            timeline_item(
                &edu.degree,
                &edu.institution,
                &edu.certificate_url,
                &edu.duration,
                &edu.location,
            )
            .into()
        })
        .collect();

    vec![Patch::ReplaceChildren {
        target: EDUCATION_LIST,
        nodes: entries,
    }]
}

fn timeline_item(
    title: &str,
    organisation: &str,
    url: &str,
    duration: &str,
    location: &str,
) -> Element {
    let organisation: Node = if url.is_empty() {
        Node::text(organisation)
    } else {
        Element::new("a")
            .attr("href", url)
            .attr("target", "_blank")
            .class("timeline-link")
            .text(organisation)
            .into()
    };

    Element::new("li")
        .class("timeline-item")
        .child(
            Element::new("h4")
                .class("h4")
                .class("timeline-item-title")
                .text(title),
        )
        .child(
            Element::new("div")
                .class("timeline-item-company")
                .child(organisation),
        )
        .child(
            Element::new("span")
                .class("timeline-item-duration")
                .text(format!("{duration} • {location}")),
        )
}
