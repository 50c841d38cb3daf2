mod errors;
mod nav_panel;
mod scroll_watcher;

pub use errors::NavError;
pub use nav_panel::{NavPanel, NavToggler};
pub use scroll_watcher::{BackToTopButton, ScrollWatcher};
