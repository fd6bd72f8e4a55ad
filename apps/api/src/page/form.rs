//! Contact form validity gating. The submit button is enabled iff every
//! field currently satisfies its constraints; re-checked on every input.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
            value: String::new(),
        }
    }

    /// Same rules as the browser's constraint validation for these inputs:
    /// `required` rejects only the empty string, `type=email` checks shape
    /// once a value is present.
    pub fn is_valid(&self) -> bool {
        if self.value.is_empty() {
            return !self.required;
        }
        match self.kind {
            FieldKind::Email => is_valid_email(&self.value),
            FieldKind::Text | FieldKind::Textarea => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactForm {
    fields: Vec<FormField>,
    submit_enabled: bool,
}

impl ContactForm {
    /// The submit button starts disabled until the first input event.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            submit_enabled: false,
        }
    }

    /// The static contact form: full name, email and message, all required.
    pub fn contact() -> Self {
        Self::new(vec![
            FormField::new("fullname", FieldKind::Text),
            FormField::new("email", FieldKind::Email),
            FormField::new("message", FieldKind::Textarea),
        ])
    }

    /// An input event on field `name`. Unknown names change nothing but
    /// still re-evaluate the button.
    pub fn input(&mut self, name: &str, value: &str) -> bool {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
        self.submit_enabled = self.check_validity();
        self.submit_enabled
    }

    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(FormField::is_valid)
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Clears every field and disables the submit button again.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.submit_enabled = self.check_validity();
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// The browser's `type=email` rule: a non-empty local part of permitted
/// characters, `@`, then dot-separated labels of letters, digits and inner
/// hyphens, each at most 63 characters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    local_ok && domain_ok
}
