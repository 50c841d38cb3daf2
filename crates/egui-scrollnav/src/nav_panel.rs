use crate::errors::NavError;
use indexmap::IndexMap;

/// Width state of one slide-out panel. A panel is "open" exactly when its
/// width is non-zero; `open` therefore toggles when called on an already
/// open panel, while `close` is unconditional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavPanel {
    width: f32,
}

impl NavPanel {
    pub const OPEN_WIDTH: f32 = 400.0;
    pub const CLOSED_WIDTH: f32 = 0.0;

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_open(&self) -> bool {
        self.width != Self::CLOSED_WIDTH
    }

    /// Opens a closed panel to the fixed open width. Any non-zero width
    /// counts as open and closes instead (toggle).
    pub fn open(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.width = Self::OPEN_WIDTH;
        }
    }

    pub fn close(&mut self) {
        self.width = Self::CLOSED_WIDTH;
    }

    /// Hosts that animate the slide write the in-flight width here so the
    /// open check stays in sync with what is on screen.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

/// Registry of slide-out panels keyed by id. Panels are registered up
/// front so that operations on a missing id surface as a typed error
/// instead of a runtime fault at the point of use.
#[derive(Debug, Clone, Default)]
pub struct NavToggler {
    panels: IndexMap<String, NavPanel>,
}

impl NavToggler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a panel in the closed state. Re-registering an id keeps
    /// the existing panel's state.
    pub fn register(&mut self, id: impl Into<String>) {
        self.panels.entry(id.into()).or_default();
    }

    pub fn open(&mut self, id: &str) -> Result<(), NavError> {
        self.panel_mut(id)?.open();
        Ok(())
    }

    pub fn close(&mut self, id: &str) -> Result<(), NavError> {
        self.panel_mut(id)?.close();
        Ok(())
    }

    pub fn panel(&self, id: &str) -> Option<&NavPanel> {
        self.panels.get(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.panel(id).is_some_and(NavPanel::is_open)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    fn panel_mut(&mut self, id: &str) -> Result<&mut NavPanel, NavError> {
        self.panels
            .get_mut(id)
            .ok_or_else(|| NavError::UnknownPanel(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed() {
        let panel = NavPanel::default();
        assert!(!panel.is_open());
        assert_eq!(panel.width(), 0.0);
    }

    #[test]
    fn test_open_from_closed() {
        let mut panel = NavPanel::default();
        panel.open();
        assert_eq!(panel.width(), NavPanel::OPEN_WIDTH);
        assert!(panel.is_open());
    }

    #[test]
    fn test_open_when_already_open_toggles_closed() {
        let mut panel = NavPanel::default();
        panel.open();
        panel.open();
        assert_eq!(panel.width(), NavPanel::CLOSED_WIDTH);
        assert!(!panel.is_open());
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut panel = NavPanel::default();
        panel.close();
        assert_eq!(panel.width(), 0.0);

        panel.open();
        panel.close();
        assert_eq!(panel.width(), 0.0);
    }

    #[test]
    fn test_open_mid_animation_counts_as_open() {
        // any non-zero width closes, not just the full open width
        let mut panel = NavPanel::default();
        panel.set_width(150.0);
        panel.open();
        assert_eq!(panel.width(), NavPanel::CLOSED_WIDTH);
    }

    #[test]
    fn test_repeated_toggle_is_self_consistent() {
        // open after close must reliably re-open, regardless of how the
        // closed width was reached
        let mut panel = NavPanel::default();
        for _ in 0..3 {
            panel.open();
            assert_eq!(panel.width(), NavPanel::OPEN_WIDTH);
            panel.open();
            assert_eq!(panel.width(), NavPanel::CLOSED_WIDTH);
        }
    }

    #[test]
    fn test_toggler_roundtrip() {
        let mut nav = NavToggler::new();
        nav.register("site_nav");
        assert!(!nav.is_open("site_nav"));

        nav.open("site_nav").unwrap();
        assert!(nav.is_open("site_nav"));
        assert_eq!(nav.panel("site_nav").unwrap().width(), 400.0);

        nav.close("site_nav").unwrap();
        assert!(!nav.is_open("site_nav"));
    }

    #[test]
    fn test_unknown_panel_id() {
        let mut nav = NavToggler::new();
        nav.register("site_nav");

        let err = nav.open("no_such_panel").unwrap_err();
        assert!(matches!(err, NavError::UnknownPanel(id) if id == "no_such_panel"));
        assert!(nav.close("no_such_panel").is_err());

        // the failing call leaves registered panels untouched
        assert!(!nav.is_open("site_nav"));
    }

    #[test]
    fn test_panels_are_independent() {
        let mut nav = NavToggler::new();
        nav.register("left");
        nav.register("right");

        nav.open("left").unwrap();
        assert!(nav.is_open("left"));
        assert!(!nav.is_open("right"));

        let ids: Vec<_> = nav.ids().collect();
        assert_eq!(ids, ["left", "right"]);
    }

    #[test]
    fn test_register_keeps_existing_state() {
        let mut nav = NavToggler::new();
        nav.register("site_nav");
        nav.open("site_nav").unwrap();

        nav.register("site_nav");
        assert!(nav.is_open("site_nav"));
    }
}
