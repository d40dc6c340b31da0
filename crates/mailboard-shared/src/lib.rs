use serde::de::IgnoredAny;
use serde::{
  Deserialize,
  Deserializer,
  Serialize
};

/// One task extracted from an email, as
/// returned by `POST /fetch-emails`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskRecord {
  #[serde(
    default,
    deserialize_with = "lenient_summary"
  )]
  pub summary:        String,
  #[serde(
    default,
    deserialize_with = "lenient_text"
  )]
  pub deadline:       Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_text"
  )]
  pub from:           Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_text"
  )]
  pub subject:        Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_text"
  )]
  pub detailed_tasks: Option<String>
}

// A task field of the wrong JSON type must
// not fail the whole response; it reads as
// absent instead.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
  Text(String),
  Other(IgnoredAny)
}

fn lenient_text<'de, D>(
  deserializer: D
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>
{
  Ok(
    match LenientText::deserialize(
      deserializer
    )? {
      | LenientText::Text(text) => {
        Some(text)
      }
      | LenientText::Other(_) => None
    }
  )
}

fn lenient_summary<'de, D>(
  deserializer: D
) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  lenient_text(deserializer)
    .map(Option::unwrap_or_default)
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TasksResponse {
  pub tasks: Vec<TaskRecord>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct ErrorResponse {
  #[serde(default)]
  pub error: Option<String>
}
