use serde::Serialize;

/// What a click on an element does. Attached to nodes at render time so the
/// wiring travels with the markup it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Navigate { page: String },
    ToggleSidebar,
    ToggleSelect,
    /// A quick-filter button; `index` is its position in `project-filters`.
    FilterButton {
        index: usize,
        value: String,
        label: String,
    },
    FilterOption { value: String, label: String },
    OpenSkillsModal { title: String, content: String },
    CloseSkillsModal,
    SendAnother,
}
