#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("no panel registered with id `{0}`")]
    UnknownPanel(String),
}
