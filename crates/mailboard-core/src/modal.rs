use crate::task_item::TaskDetails;

/// Single detail dialog. Showing a task overwrites whatever was shown
/// before; there is no stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible(TaskDetails),
}

impl ModalState {
    pub fn show(&mut self, details: TaskDetails) {
        *self = ModalState::Visible(details);
    }

    pub fn hide(&mut self) {
        *self = ModalState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible(_))
    }

    pub fn details(&self) -> Option<&TaskDetails> {
        match self {
            ModalState::Visible(details) => Some(details),
            ModalState::Hidden => None,
        }
    }

    /// Handles a click that reached the backdrop listener. Returns `true`
    /// when the modal was dismissed.
    pub fn dismiss_on_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop && self.is_visible() {
            self.hide();
            return true;
        }
        false
    }
}
