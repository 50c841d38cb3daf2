pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Id of the slide-out navigation panel, registered at startup.
pub const NAV_PANEL_ID: &str = "site_nav";
