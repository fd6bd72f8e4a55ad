//! One page session: the document plus every piece of interaction state,
//! driven by load, click, input and submit events.

use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::content::{ContentSnapshot, Topic};
use crate::page::document::{Document, PageError};
use crate::page::filter::ProjectFilter;
use crate::page::form::ContactForm;
use crate::page::modal::SkillsModal;
use crate::page::navigation::Navigator;
use crate::page::sidebar::SidebarToggle;
use crate::page::submit::{failure_panel, post_form, thank_you_panel, SubmitOutcome};
use crate::render::action::Action;
use crate::render::regions::{CONTACT_FORM, LOADING_SPINNER, MAIN_CONTENT, THANK_YOU_MESSAGE};
use crate::render::vdom::{Element, Node};
use crate::render::{render_snapshot, SectionUpdate};

pub const LOAD_ERROR: &str = "Error loading portfolio. Please refresh the page.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    Failed { message: String },
}

pub struct Session {
    document: Document,
    navigator: Navigator,
    sidebar: SidebarToggle,
    modal: SkillsModal,
    form: ContactForm,
    /// Present only once the projects section has rendered.
    filter: Option<ProjectFilter>,
    load_state: LoadState,
}

/// Serializable view of a session for the content endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub state: &'a LoadState,
    pub navigation: Vec<Node>,
    pub active_page: &'a str,
    pub regions: &'a Document,
}

impl Session {
    /// A fresh session over the standard page shell.
    pub fn new(form_action: &str) -> Self {
        Self::with_document(Document::shell(form_action))
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            navigator: Navigator::portfolio(),
            sidebar: SidebarToggle::new(true),
            modal: SkillsModal::default(),
            form: ContactForm::contact(),
            filter: None,
            load_state: LoadState::Loading,
        }
    }

    /// Renders the snapshot into the document. Any apply failure stops
    /// rendering and puts the page into a single error state.
    pub fn load(&mut self, snapshot: &ContentSnapshot) -> &LoadState {
        self.load_state = match self.populate(render_snapshot(snapshot)) {
            Ok(()) => {
                info!("portfolio rendered");
                LoadState::Ready
            }
            Err(e) => {
                error!("error loading portfolio data: {e}");
                self.show_load_error();
                LoadState::Failed {
                    message: LOAD_ERROR.to_string(),
                }
            }
        };
        &self.load_state
    }

    fn populate(&mut self, sections: Vec<SectionUpdate>) -> Result<(), PageError> {
        for section in sections {
            for patch in section.patches {
                self.document.apply(patch)?;
            }
            // the buttons and cards were just replaced; bind filtering to the new ones
            if section.topic == Topic::Projects {
                self.filter = Some(ProjectFilter::register(&self.document)?);
            }
        }
        self.document.set_hidden(LOADING_SPINNER, true)?;
        self.document.set_hidden(MAIN_CONTENT, false)?;
        Ok(())
    }

    fn show_load_error(&mut self) {
        if let Ok(spinner) = self.document.region_mut(LOADING_SPINNER) {
            spinner.hidden = false;
            spinner.children = vec![
                Element::new("div").class("spinner").into(),
                Element::new("p").text(LOAD_ERROR).into(),
            ];
        }
    }

    /// Runs the handler bound to a click.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), PageError> {
        match action {
            Action::Navigate { page } => {
                self.navigator.activate(page);
            }
            Action::ToggleSidebar => self.sidebar.toggle(),
            Action::ToggleSelect => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.toggle_select();
                }
            }
            Action::FilterButton {
                index,
                value,
                label,
            } => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.press_button(&mut self.document, *index, value, label)?;
                }
            }
            Action::FilterOption { value, label } => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.choose_option(&mut self.document, value, label)?;
                }
            }
            Action::OpenSkillsModal { title, content } => {
                self.modal.open(&mut self.document, title, content)?;
            }
            Action::CloseSkillsModal => self.modal.close(),
            Action::SendAnother => self.send_another()?,
        }
        Ok(())
    }

    /// An input event on a contact form field. Returns whether submit is now enabled.
    pub fn input(&mut self, name: &str, value: &str) -> bool {
        self.form.input(name, value)
    }

    /// Submits the contact form to its action URL and swaps in the status panel.
    pub async fn submit(&mut self, client: &Client) -> Result<SubmitOutcome, PageError> {
        if !self.form.submit_enabled() {
            return Ok(SubmitOutcome::Blocked);
        }

        let action = self
            .document
            .region(CONTACT_FORM)?
            .attrs
            .get("action")
            .cloned()
            .unwrap_or_default();

        match post_form(client, &action, self.form.fields()).await {
            Ok(()) => {
                self.document.set_hidden(CONTACT_FORM, true)?;
                let panel = self.document.region_mut(THANK_YOU_MESSAGE)?;
                panel.hidden = false;
                panel.children = thank_you_panel();
                self.form.reset();
                Ok(SubmitOutcome::Sent)
            }
            Err(e) => {
                let message = e.panel_message();
                let panel = self.document.region_mut(THANK_YOU_MESSAGE)?;
                panel.hidden = false;
                panel.children = failure_panel(&message);
                Ok(SubmitOutcome::Failed { message })
            }
        }
    }

    /// "Send another message": hide the panel, show the form again.
    pub fn send_another(&mut self) -> Result<(), PageError> {
        self.document.set_hidden(THANK_YOU_MESSAGE, true)?;
        self.document.set_hidden(CONTACT_FORM, false)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn sidebar(&self) -> &SidebarToggle {
        &self.sidebar
    }

    pub fn modal(&self) -> &SkillsModal {
        &self.modal
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn filter(&self) -> Option<&ProjectFilter> {
        self.filter.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            state: &self.load_state,
            navigation: self.navigator.links(),
            active_page: self.navigator.active(),
            regions: &self.document,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::contact::store::MemoryContactStore;
    use crate::content::source::fixtures::StaticContentSource;
    use crate::page::submit::{REJECTED_TEXT, THANK_YOU_TITLE};
    use crate::render::regions;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn full_snapshot() -> ContentSnapshot {
        let long_skills: Vec<Value> = ["Rust", "Go", "TypeScript", "Python", "Kotlin", "Elixir", "Haskell"]
            .iter()
            .map(|s| json!({ "category": "lang", "role": "Languages", "icon": "code", "subskill": s }))
            .collect();
        ContentSnapshot::from_results([
            (
                Topic::Sidebar,
                Some(vec![
                    json!({ "key": "name", "content": "Ada Lovelace" }),
                    json!({ "key": "email", "content": "ada@example.com" }),
                ]),
            ),
            (Topic::About, Some(vec![json!({ "content": "Analyst." })])),
            (Topic::Skills, Some(long_skills)),
            (
                Topic::Projects,
                Some(vec![
                    json!({ "name": "Site", "category": "Web" }),
                    json!({ "name": "Shop", "category": "Web" }),
                    json!({ "name": "grep2", "category": "CLI" }),
                ]),
            ),
            (Topic::Experience, Some(vec![json!({ "role": "Engineer" })])),
            (Topic::Education, Some(vec![json!({ "degree": "BSc" })])),
            (Topic::Certifications, Some(vec![json!({ "certificate_name": "CKA" })])),
            (Topic::ContactForm, Some(vec![])),
        ])
    }

    #[test]
    fn test_load_renders_every_section() {
        let mut session = Session::new("/api/contact");
        assert_eq!(session.load(&full_snapshot()), &LoadState::Ready);

        let doc = session.document();
        assert_eq!(doc.text_of(regions::PAGE_TITLE), "Ada Lovelace - Portfolio");
        assert_eq!(doc.text_of(regions::ABOUT_TEXT), "Analyst.");
        assert!(doc.is_hidden(regions::LOADING_SPINNER));
        assert!(!doc.is_hidden(regions::MAIN_CONTENT));
        assert!(session.filter().is_some());
    }

    #[test]
    fn test_failed_topic_only_blanks_its_own_section() {
        for failed in Topic::ALL {
            let snapshot = ContentSnapshot::from_results(
                Topic::ALL
                    .iter()
                    .filter(|t| **t != failed)
                    .map(|t| (*t, full_snapshot().slice(*t).map(|s| s.to_vec()))),
            );
            let mut session = Session::new("/api/contact");
            assert_eq!(session.load(&snapshot), &LoadState::Ready, "{failed} failed");

            let doc = session.document();
            let rendered = |id: &str| !doc.region(id).unwrap().children.is_empty();
            assert_eq!(rendered(regions::ABOUT_TEXT), failed != Topic::About);
            assert_eq!(rendered(regions::SKILLS_LIST), failed != Topic::Skills);
            assert_eq!(rendered(regions::PROJECT_LIST), failed != Topic::Projects);
            assert_eq!(rendered(regions::EXPERIENCE_LIST), failed != Topic::Experience);
            assert_eq!(rendered(regions::EDUCATION_LIST), failed != Topic::Education);
            assert_eq!(
                rendered(regions::CERTIFICATIONS_LIST),
                failed != Topic::Certifications
            );
            assert_eq!(rendered(regions::SIDEBAR_NAME), failed != Topic::Sidebar);
        }
    }

    #[test]
    fn test_loading_twice_matches_loading_once() {
        let mut session = Session::new("/api/contact");
        session.load(&full_snapshot());
        let once = session.document().clone();
        session.load(&full_snapshot());
        assert_eq!(session.document(), &once);
    }

    #[test]
    fn test_missing_region_surfaces_single_error_and_halts() {
        let ids: Vec<&str> = regions::ALL
            .iter()
            .copied()
            .filter(|id| *id != regions::PROJECT_LIST)
            .collect();
        let mut session = Session::with_document(Document::with_regions(&ids));
        let state = session.load(&full_snapshot()).clone();

        assert_eq!(
            state,
            LoadState::Failed {
                message: LOAD_ERROR.into()
            }
        );
        let doc = session.document();
        assert!(doc.text_of(regions::LOADING_SPINNER).contains(LOAD_ERROR));
        // sections after projects never ran
        assert!(doc.region(regions::EXPERIENCE_LIST).unwrap().children.is_empty());
        assert!(session.filter().is_none());
    }

    #[test]
    fn test_rendered_actions_drive_the_page() {
        let mut session = Session::new("/api/contact");
        session.load(&full_snapshot());

        let skill_click = session
            .document()
            .region(regions::SKILLS_LIST)
            .unwrap()
            .elements()
            .next()
            .and_then(|el| el.on_click.clone())
            .unwrap();
        session.dispatch(&skill_click).unwrap();
        assert!(session.modal().is_open());
        assert_eq!(
            session.document().text_of(regions::MODAL_SKILLS_CONTENT),
            "Rust, Go, TypeScript, Python, Kotlin, Elixir, Haskell"
        );
        session.dispatch(&Action::CloseSkillsModal).unwrap();
        assert!(!session.modal().is_open());

        session
            .dispatch(&Action::Navigate {
                page: "portfolio".into(),
            })
            .unwrap();
        assert_eq!(session.navigator().active(), "portfolio");

        session.dispatch(&Action::ToggleSidebar).unwrap();
        assert!(session.sidebar().is_active());
    }

    #[test]
    fn test_filter_rebinds_after_projects_rerender() {
        let mut session = Session::new("/api/contact");
        session.load(&full_snapshot());
        session
            .dispatch(&Action::FilterButton {
                index: 2,
                value: "cli".into(),
                label: "CLI".into(),
            })
            .unwrap();
        assert_eq!(session.filter().unwrap().current_button(), 2);

        session.load(&full_snapshot());
        assert_eq!(session.filter().unwrap().current_button(), 0);
        let active = session
            .document()
            .region(regions::PROJECT_LIST)
            .unwrap()
            .elements()
            .filter(|el| el.has_class("active"))
            .count();
        assert_eq!(active, 3);
    }

    async fn spawn_backend() -> (String, Arc<MemoryContactStore>) {
        let store = Arc::new(MemoryContactStore::new());
        let state = AppState::for_tests(store.clone(), Arc::new(StaticContentSource::default()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        (format!("http://{addr}/api/contact"), store)
    }

    fn fill(session: &mut Session, email: &str) {
        session.input("fullname", "Ada Lovelace");
        session.input("email", email);
        session.input("message", "Hello there");
    }

    #[tokio::test]
    async fn test_disabled_submit_posts_nothing() {
        let (action, store) = spawn_backend().await;
        let mut session = Session::new(&action);
        session.input("fullname", "Ada");

        let outcome = session.submit(&Client::new()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_successful_submit_shows_thank_you_and_resets() {
        let (action, store) = spawn_backend().await;
        let mut session = Session::new(&action);
        fill(&mut session, "ada@example.com");

        let outcome = session.submit(&Client::new()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Sent);

        let doc = session.document();
        assert!(doc.is_hidden(regions::CONTACT_FORM));
        assert!(!doc.is_hidden(regions::THANK_YOU_MESSAGE));
        assert!(doc.text_of(regions::THANK_YOU_MESSAGE).contains(THANK_YOU_TITLE));
        assert_eq!(session.form().value("fullname"), Some(""));

        let rows = store.all().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].message, "Hello there");

        session.dispatch(&Action::SendAnother).unwrap();
        assert!(!session.document().is_hidden(regions::CONTACT_FORM));
        assert!(session.document().is_hidden(regions::THANK_YOU_MESSAGE));
    }

    #[tokio::test]
    async fn test_rejected_submit_shows_error_panel() {
        let (action, store) = spawn_backend().await;
        let mut session = Session::new(&action);
        // valid for the browser, rejected by the backend pattern
        fill(&mut session, "ada@localhost");

        let outcome = session.submit(&Client::new()).await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: REJECTED_TEXT.into()
            }
        );
        let doc = session.document();
        assert!(!doc.is_hidden(regions::CONTACT_FORM));
        assert_eq!(doc.text_of(regions::THANK_YOU_MESSAGE), REJECTED_TEXT);
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_reports_reason() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut session = Session::new(&format!("http://{addr}/api/contact"));
        fill(&mut session, "ada@example.com");

        match session.submit(&Client::new()).await.unwrap() {
            SubmitOutcome::Failed { message } => assert!(message.starts_with("Error: ")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
