// Identifiers of the page regions renderers write into. The static page
// shell must declare every one of them.

pub const PAGE_TITLE: &str = "page-title";
pub const LOADING_SPINNER: &str = "loading-spinner";
pub const MAIN_CONTENT: &str = "main-content";

pub const SIDEBAR_NAME: &str = "sidebar-name";
pub const SIDEBAR_JOB_TITLE: &str = "sidebar-job-title";
pub const CONTACTS_LIST: &str = "contacts-list";
pub const SOCIAL_LIST: &str = "social-list";

pub const ABOUT_TEXT: &str = "about-text";

pub const SKILLS_LIST: &str = "skills-list";
pub const MODAL_SKILL_TITLE: &str = "modal-skill-title";
pub const MODAL_SKILLS_CONTENT: &str = "modal-skills-content";

pub const PROJECT_FILTERS: &str = "project-filters";
pub const PROJECT_SELECT_LIST: &str = "project-select-list";
pub const SELECT_VALUE: &str = "select-value";
pub const PROJECT_LIST: &str = "project-list";

pub const EXPERIENCE_LIST: &str = "experience-list";
pub const EDUCATION_LIST: &str = "education-list";
pub const CERTIFICATIONS_LIST: &str = "certifications-list";

pub const CONTACT_FORM: &str = "contact-form";
pub const THANK_YOU_MESSAGE: &str = "thank-you-message";

pub const ALL: &[&str] = &[
    PAGE_TITLE,
    LOADING_SPINNER,
    MAIN_CONTENT,
    SIDEBAR_NAME,
    SIDEBAR_JOB_TITLE,
    CONTACTS_LIST,
    SOCIAL_LIST,
    ABOUT_TEXT,
    SKILLS_LIST,
    MODAL_SKILL_TITLE,
    MODAL_SKILLS_CONTENT,
    PROJECT_FILTERS,
    PROJECT_SELECT_LIST,
    SELECT_VALUE,
    PROJECT_LIST,
    EXPERIENCE_LIST,
    EDUCATION_LIST,
    CERTIFICATIONS_LIST,
    CONTACT_FORM,
    THANK_YOU_MESSAGE,
];
