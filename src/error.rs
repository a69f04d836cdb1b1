#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting processing; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid post json: {source}")]
  InvalidPost {
    #[from]
    source: serde_json::Error,
  },
}
