use serde::Deserialize;

use crate::models::contact::NewContact;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Invalid email format";

/// Raw contact form payload. Every field is optional so that missing fields
/// surface as a validation error rather than a decode rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Assigns a named form field. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "fullname" => self.fullname = Some(value),
            "email" => self.email = Some(value),
            "message" => self.message = Some(value),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactValidationError {
    MissingFields,
    InvalidEmail,
}

impl ContactValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ContactValidationError::MissingFields => MISSING_FIELDS,
            ContactValidationError::InvalidEmail => INVALID_EMAIL,
        }
    }
}

/// Checks that all three fields are present and non-empty, then that the
/// email looks like `something@something.something`.
pub fn validate_contact(
    submission: ContactSubmission,
) -> Result<NewContact, ContactValidationError> {
    let (fullname, email, message) = match submission {
        ContactSubmission {
            fullname: Some(fullname),
            email: Some(email),
            message: Some(message),
        } if !fullname.is_empty() && !email.is_empty() && !message.is_empty() => {
            (fullname, email, message)
        }
        _ => return Err(ContactValidationError::MissingFields),
    };

    if !looks_like_email(&email) {
        return Err(ContactValidationError::InvalidEmail);
    }

    Ok(NewContact {
        fullname,
        email,
        message,
    })
}

/// Unanchored match of `\S+@\S+\.\S+`: some whitespace-free run must hold an
/// `@` with at least one character before it, and a `.` after it with at least
/// one character on each side.
pub fn looks_like_email(text: &str) -> bool {
    text.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        let len = chars.len();
        chars.iter().enumerate().any(|(at, &c)| {
            c == '@'
                && at >= 1
                && (at + 2..len.saturating_sub(1)).any(|dot| chars[dot] == '.')
        })
    })
}
