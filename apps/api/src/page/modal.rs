use crate::page::document::{Document, PageError};
use crate::render::regions::{MODAL_SKILLS_CONTENT, MODAL_SKILL_TITLE};
use crate::render::vdom::Element;

/// The skills modal and its overlay share one open flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsModal {
    open: bool,
}

impl SkillsModal {
    pub fn open(&mut self, doc: &mut Document, title: &str, content: &str) -> Result<(), PageError> {
        doc.set_text(MODAL_SKILL_TITLE, title)?;
        doc.region_mut(MODAL_SKILLS_CONTENT)?.children =
            vec![Element::new("p").text(content).into()];
        self.open = true;
        Ok(())
    }

    /// Close button and overlay both land here.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
