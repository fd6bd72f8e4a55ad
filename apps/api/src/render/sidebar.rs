use serde_json::Value;
use tracing::warn;

use crate::content::records::{decode_records, SidebarItem, SocialLink};
use crate::render::icons::{ion_icon, ion_icon_or};
use crate::render::patch::Patch;
use crate::render::regions::{
    CONTACTS_LIST, PAGE_TITLE, SIDEBAR_JOB_TITLE, SIDEBAR_NAME, SOCIAL_LIST,
};
use crate::render::vdom::{Element, Node};
use crate::render::ion;

pub fn render_sidebar(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let mut patches = Vec::new();
    let mut contacts: Vec<Node> = Vec::new();
    let mut socials: Vec<Node> = Vec::new();

    for item in decode_records::<SidebarItem>("sidebar", data) {
        match item.key.as_str() {
            "name" => {
                patches.push(Patch::SetText {
                    target: SIDEBAR_NAME,
                    text: item.content.clone(),
                });
                patches.push(Patch::SetAttr {
                    target: SIDEBAR_NAME,
                    name: "title",
                    value: item.content.clone(),
                });
                patches.push(Patch::SetText {
                    target: PAGE_TITLE,
                    text: format!("{} - Portfolio", item.content),
                });
            }
            "job_title" => patches.push(Patch::SetText {
                target: SIDEBAR_JOB_TITLE,
                text: item.content,
            }),
            "phone" => contacts.push(contact_item(
                "phone",
                "Phone",
                Element::new("a")
                    .attr("href", format!("tel:{}", item.content))
                    .class("contact-link")
                    .text(item.content),
            )),
            "email" => contacts.push(contact_item(
                "email",
                "Email",
                Element::new("a")
                    .attr("href", format!("mailto:{}", item.content))
                    .class("contact-link")
                    .text(item.content),
            )),
            "resume" => contacts.push(contact_item(
                "resume",
                "Resume",
                Element::new("a")
                    .attr("href", item.content)
                    .attr("target", "_blank")
                    .class("contact-link")
                    .text("Download CV"),
            )),
            "social" => match serde_json::from_str::<Vec<SocialLink>>(&item.content) {
                Ok(links) => socials.extend(links.into_iter().map(social_item)),
                Err(e) => warn!("error parsing social data: {e}"),
            },
            _ => {}
        }
    }

    patches.push(Patch::ReplaceChildren {
        target: CONTACTS_LIST,
        nodes: contacts,
    });
    patches.push(Patch::ReplaceChildren {
        target: SOCIAL_LIST,
        nodes: socials,
    });
    patches
}

fn contact_item(icon_key: &str, title: &str, link: Element) -> Node {
    Element::new("li")
        .class("contact-item")
        .child(
            Element::new("div")
                .class("icon-box")
                .child(ion(ion_icon(icon_key).unwrap_or_default())),
        )
        .child(
            Element::new("div")
                .class("contact-info")
                .child(Element::new("p").class("contact-title").text(title))
                .child(link),
        )
        .into()
}

fn social_item(link: SocialLink) -> Node {
    Element::new("li")
        .class("social-item")
        .child(
            Element::new("a")
                .attr("href", link.url)
                .attr("target", "_blank")
                .class("social-link")
                .child(ion(ion_icon_or(&link.icon, "link-outline"))),
        )
        .into()
}
