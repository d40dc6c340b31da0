use mailboard_shared::TaskRecord;
use tracing::{debug, info, warn};

use crate::config::BoardConfig;
use crate::error::{BoardError, FetchError};
use crate::loading::{LoadingCycle, TriggerState};
use crate::modal::ModalState;
use crate::response::error_text;
use crate::task_item::{TaskItem, render_items};

/// Contents of the results container. Always replaced whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Results {
    #[default]
    Empty,
    Tasks(Vec<TaskItem>),
    Error(String),
}

impl Results {
    pub fn items(&self) -> &[TaskItem] {
        match self {
            Results::Tasks(items) => items.as_slice(),
            Results::Empty | Results::Error(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Results::Error(message) => Some(message),
            Results::Empty | Results::Tasks(_) => None,
        }
    }
}

/// View model of the task board: trigger, loading surface, results and
/// the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    trigger: TriggerState,
    loading: Option<LoadingCycle>,
    results: Results,
    modal: ModalState,
}

impl Board {
    pub fn new(mut config: BoardConfig) -> Self {
        config.sanitize();
        Self {
            config,
            trigger: TriggerState::Idle,
            loading: None,
            results: Results::Empty,
            modal: ModalState::Hidden,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn trigger_disabled(&self) -> bool {
        self.trigger.is_disabled()
    }

    pub fn trigger_label(&self) -> &str {
        self.trigger
            .label(&self.config.idle_label, &self.config.busy_label)
    }

    pub fn is_fetching(&self) -> bool {
        self.trigger == TriggerState::Fetching
    }

    /// `None` while the loading surface is hidden.
    pub fn loading_message(&self) -> Option<&str> {
        self.loading.as_ref().map(LoadingCycle::current)
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Starts a loading session. Refused while another fetch is pending.
    pub fn begin_fetch(&mut self) -> Result<(), BoardError> {
        if self.is_fetching() {
            warn!("fetch requested while one is in flight");
            return Err(BoardError::FetchInFlight);
        }
        let cycle = LoadingCycle::new(self.config.loading_messages.clone())?;

        self.trigger = TriggerState::Fetching;
        self.results = Results::Empty;
        self.loading = Some(cycle);
        info!("loading session started");
        Ok(())
    }

    pub fn tick(&mut self) {
        if let Some(cycle) = self.loading.as_mut() {
            cycle.advance();
            debug!(index = cycle.index(), message = cycle.current(), "loading message advanced");
        }
    }

    /// Ends the loading session, then shows the outcome.
    pub fn settle(&mut self, outcome: Result<Vec<TaskRecord>, FetchError>) {
        self.end_loading();

        self.results = match outcome {
            Ok(records) => {
                info!(count = records.len(), "rendering fetched tasks");
                Results::Tasks(render_items(&records))
            }
            Err(error) => {
                warn!(%error, "fetch failed");
                Results::Error(error_text(&error))
            }
        };
    }

    fn end_loading(&mut self) {
        self.loading = None;
        self.trigger = TriggerState::Idle;
    }

    pub fn toggle_completed(&mut self, index: usize, checked: bool) {
        let Results::Tasks(items) = &mut self.results else {
            return;
        };
        match items.get_mut(index) {
            Some(item) => {
                item.set_completed(checked);
                debug!(index, checked, "task completion toggled");
            }
            None => warn!(index, "toggle for unknown task index"),
        }
    }

    pub fn open_details(&mut self, index: usize) {
        match self.results.items().get(index) {
            Some(item) => {
                let details = item.details.clone();
                self.modal.show(details);
                debug!(index, "detail modal opened");
            }
            None => warn!(index, "details requested for unknown task index"),
        }
    }

    pub fn close_details(&mut self) {
        self.modal.hide();
    }

    pub fn backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        self.modal.dismiss_on_click(target_is_backdrop)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
