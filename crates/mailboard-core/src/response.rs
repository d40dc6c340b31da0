use mailboard_shared::{ErrorResponse, TaskRecord, TasksResponse};
use tracing::{debug, warn};

use crate::error::FetchError;

/// Turns a settled `/fetch-emails` response into the task list or the
/// error to display.
#[tracing::instrument(skip(body), fields(body_len = body.len()))]
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<TaskRecord>, FetchError> {
    if (200..300).contains(&status) {
        let parsed: TasksResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(count = parsed.tasks.len(), "decoded task list");
        return Ok(parsed.tasks);
    }

    let parsed: ErrorResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    match parsed.error {
        Some(message) => {
            warn!(status, error = %message, "server reported an error");
            Err(FetchError::Server(message))
        }
        None => {
            warn!(status, "error response without message");
            Err(FetchError::Status(status))
        }
    }
}

/// The single line rendered in place of the task list.
pub fn error_text(error: &FetchError) -> String {
    format!("Error: {error}")
}
