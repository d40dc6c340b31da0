use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

pub const DEFAULT_ENDPOINT: &str =
  "/fetch-emails";
pub const DEFAULT_IDLE_LABEL: &str =
  "Fetch Emails";
pub const DEFAULT_BUSY_LABEL: &str =
  "Fetching...";
pub const DEFAULT_MESSAGE_INTERVAL_MS:
  u32 = 1_500;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct BoardConfig {
  #[serde(default = "default_endpoint")]
  pub endpoint:            String,
  #[serde(
    default = "default_idle_label"
  )]
  pub idle_label:          String,
  #[serde(
    default = "default_busy_label"
  )]
  pub busy_label:          String,
  #[serde(
    default = "default_loading_messages"
  )]
  pub loading_messages:    Vec<String>,
  #[serde(
    default = "default_message_interval_ms"
  )]
  pub message_interval_ms: u32
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      endpoint:            default_endpoint(
      ),
      idle_label:
        default_idle_label(),
      busy_label:
        default_busy_label(),
      loading_messages:
        default_loading_messages(),
      message_interval_ms:
        default_message_interval_ms()
    }
  }
}

impl BoardConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<BoardConfig>(
        text
      )
      .context(
        "failed to parse board config"
      )?;
    config.sanitize();
    debug!(
      endpoint = %config.endpoint,
      messages = config.loading_messages.len(),
      interval_ms = config.message_interval_ms,
      "parsed board config"
    );
    Ok(config)
  }

  /// Replaces unusable values with
  /// defaults so the loading cycle always
  /// has at least one message.
  pub fn sanitize(&mut self) {
    if self.endpoint.trim().is_empty()
    {
      warn!(
        "blank endpoint; using default"
      );
      self.endpoint =
        default_endpoint();
    }
    if self.idle_label.trim().is_empty()
    {
      self.idle_label =
        default_idle_label();
    }
    if self.busy_label.trim().is_empty()
    {
      self.busy_label =
        default_busy_label();
    }

    self.loading_messages.retain(
      |message| {
        !message.trim().is_empty()
      }
    );
    if self.loading_messages.is_empty()
    {
      warn!(
        "no loading messages \
         configured; using defaults"
      );
      self.loading_messages =
        default_loading_messages();
    }

    if self.message_interval_ms == 0 {
      warn!(
        "message interval must be \
         positive; using default"
      );
      self.message_interval_ms =
        default_message_interval_ms();
    }
  }
}

fn default_endpoint() -> String {
  DEFAULT_ENDPOINT.to_string()
}

fn default_idle_label() -> String {
  DEFAULT_IDLE_LABEL.to_string()
}

fn default_busy_label() -> String {
  DEFAULT_BUSY_LABEL.to_string()
}

fn default_loading_messages()
-> Vec<String> {
  vec![
    "Fetching emails...".to_string(),
    "Analyzing content...".to_string(),
    "Preparing tasks...".to_string(),
  ]
}

fn default_message_interval_ms() -> u32
{
  DEFAULT_MESSAGE_INTERVAL_MS
}
