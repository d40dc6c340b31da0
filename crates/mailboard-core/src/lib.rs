//! View model for the mail task board: turns `/fetch-emails` responses
//! into rendered task rows, drives the loading indicator and tracks the
//! detail modal. Nothing here touches the DOM.

pub mod board;
pub mod config;
pub mod deadline;
pub mod error;
pub mod loading;
pub mod modal;
pub mod response;
pub mod task_item;

pub use board::{Board, Results};
pub use config::BoardConfig;
pub use error::{BoardError, FetchError};
pub use task_item::{TaskDetails, TaskItem};
