use crate::error::BoardError;

/// Cycles through status messages while a request is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingCycle {
    messages: Vec<String>,
    index: usize,
}

impl LoadingCycle {
    pub fn new(messages: Vec<String>) -> Result<Self, BoardError> {
        if messages.is_empty() {
            return Err(BoardError::NoLoadingMessages);
        }
        Ok(Self { messages, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.messages[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Wraps from the last message back to the first.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.messages.len();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    Fetching,
}

impl TriggerState {
    pub fn is_disabled(self) -> bool {
        matches!(self, TriggerState::Fetching)
    }

    pub fn label<'a>(self, idle_label: &'a str, busy_label: &'a str) -> &'a str {
        match self {
            TriggerState::Idle => idle_label,
            TriggerState::Fetching => busy_label,
        }
    }
}
