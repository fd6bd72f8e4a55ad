use serde::Serialize;

/// One independently fetched content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Sidebar,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Certifications,
    ContactForm,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Sidebar,
        Topic::About,
        Topic::Skills,
        Topic::Projects,
        Topic::Experience,
        Topic::Education,
        Topic::Certifications,
        Topic::ContactForm,
    ];

    /// Value of the `tab` query parameter understood by the content source.
    /// Note the singular `certification` sheet name.
    pub fn tab(&self) -> &'static str {
        match self {
            Topic::Sidebar => "sidebar",
            Topic::About => "about",
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Experience => "experience",
            Topic::Education => "education",
            Topic::Certifications => "certification",
            Topic::ContactForm => "contact-form",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tab())
    }
}
