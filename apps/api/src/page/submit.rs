//! Contact form submission: multipart POST to the form's action URL and the
//! status panel that replaces the form afterwards.

use reqwest::{multipart, Client};
use thiserror::Error;
use tracing::{info, warn};

use crate::page::form::FormField;
use crate::render::action::Action;
use crate::render::vdom::{Element, Node};

pub const THANK_YOU_TITLE: &str = "Thank You!";
pub const THANK_YOU_TEXT: &str =
    "Your message has been sent successfully. I'll get back to you within 24 hours.";
pub const REJECTED_TEXT: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("submission rejected with status {0}")]
    Rejected(u16),
}

impl SubmitError {
    /// Text shown to the visitor in the status panel.
    pub fn panel_message(&self) -> String {
        match self {
            SubmitError::Transport(e) => format!("Error: {e}"),
            SubmitError::Rejected(_) => REJECTED_TEXT.to_string(),
        }
    }
}

/// Posts `fields` as multipart form data. Any 2xx is success; the response
/// body is not read.
pub async fn post_form(client: &Client, action: &str, fields: &[FormField]) -> Result<(), SubmitError> {
    let form = fields.iter().fold(multipart::Form::new(), |form, field| {
        form.text(field.name.clone(), field.value.clone())
    });

    let response = client.post(action).multipart(form).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "contact submission rejected");
        return Err(SubmitError::Rejected(status.as_u16()));
    }

    info!("contact submission accepted");
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The submit button was disabled; nothing was posted.
    Blocked,
    Sent,
    Failed { message: String },
}

pub fn thank_you_panel() -> Vec<Node> {
    vec![
        Element::new("h3").class("h3").text(THANK_YOU_TITLE).into(),
        Element::new("p").text(THANK_YOU_TEXT).into(),
        Element::new("button")
            .class("form-btn")
            .text("Send Another Message")
            .on_click(Action::SendAnother)
            .into(),
    ]
}

pub fn failure_panel(message: &str) -> Vec<Node> {
    vec![Element::new("p").class("error").text(message).into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_messages() {
        assert_eq!(SubmitError::Rejected(502).panel_message(), REJECTED_TEXT);
    }

    #[test]
    fn test_thank_you_panel_offers_send_another() {
        let panel = thank_you_panel();
        let button = panel[2].as_element().unwrap();
        assert_eq!(button.on_click, Some(Action::SendAnother));
        assert_eq!(panel[0].text_content(), THANK_YOU_TITLE);
    }
}
