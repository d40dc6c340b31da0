mod loading_state;
mod task_list;
mod task_list_row;
mod task_modal;

pub use loading_state::LoadingState;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_modal::TaskModal;
