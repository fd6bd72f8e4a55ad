use serde_json::Value;

use crate::content::records::{decode_records, CertificationRecord};
use crate::render::ion;
use crate::render::patch::Patch;
use crate::render::regions::CERTIFICATIONS_LIST;
use crate::render::vdom::{Element, Node};

pub fn render_certifications(data: Option<&[Value]>) -> Vec<Patch> {
    let Some(data) = data else {
        return Vec::new();
    };

    let items = decode_records::<CertificationRecord>("certification", data)
        .iter()
        .map(certification_item)
        .collect();

    vec![Patch::ReplaceChildren {
        target: CERTIFICATIONS_LIST,
        nodes: items,
    }]
}

fn certification_item(cert: &CertificationRecord) -> Node {
    let has_image = !cert.certificate_image.trim().is_empty();

    let content = Element::new("div")
        .class("certification-content")
        .child(
            Element::new("h3")
                .class("h3")
                .class("certification-item-title")
                .text(cert.certificate_name.clone()),
        )
        .child(
            Element::new("p")
                .class("certification-platform")
                .text(cert.platform.clone()),
        );

    let mut link = Element::new("a")
        .attr("href", cert.certificate_url.clone())
        .attr("target", "_blank");

    let mut item = Element::new("li").class("certification-post-item");
    if has_image {
        link = link.child(
            Element::new("figure")
                .class("certification-banner-box")
                .child(
                    Element::new("div")
                        .class("certification-item-icon-box")
                        .child(ion("eye-outline")),
                )
                .child(
                    Element::new("img")
                        .attr("src", cert.certificate_image.clone())
                        .attr("alt", cert.certificate_name.clone())
                        .attr("loading", "lazy"),
                ),
        );
    } else {
        item = item.class("text-only");
    }

    item.child(link.child(content)).into()
}
