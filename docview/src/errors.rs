use egui_scrollnav::NavError;

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("{0}")]
    Plain(String),
    #[error("{0}")]
    Nav(#[from] NavError),
}
