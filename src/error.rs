#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
