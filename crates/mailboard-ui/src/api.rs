use gloo::net::http::Request;
use mailboard_core::FetchError;
use mailboard_core::response::interpret_response;
use mailboard_shared::TaskRecord;

/// Issues one `POST` to the task endpoint.
/// No timeout is applied; the browser's own
/// request lifecycle decides when it settles.
pub async fn fetch_tasks(
  endpoint: &str
) -> Result<Vec<TaskRecord>, FetchError> {
  let response = Request::post(endpoint)
    .send()
    .await
    .map_err(|e| {
      FetchError::Transport(e.to_string())
    })?;

  let status = response.status();
  let body =
    response.text().await.map_err(
      |e| {
        FetchError::Transport(
          e.to_string()
        )
      }
    )?;

  tracing::debug!(
    status,
    body_len = body.len(),
    "fetch-emails settled"
  );
  interpret_response(status, &body)
}
