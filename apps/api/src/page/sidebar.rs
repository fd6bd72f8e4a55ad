/// Collapsible sidebar on narrow viewports: one button toggling one state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarToggle {
    has_button: bool,
    active: bool,
}

impl SidebarToggle {
    pub fn new(has_button: bool) -> Self {
        Self {
            has_button,
            active: false,
        }
    }

    /// Flips the state; a no-op when the shell has no sidebar button.
    pub fn toggle(&mut self) {
        if self.has_button {
            self.active = !self.active;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
