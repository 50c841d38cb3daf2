use egui::{Align2, Area, Context, Id, Order, Vec2, WidgetText};

/// Derives the visibility of a "back to top" control from the current
/// vertical scroll offset. Feed it the scroll area's offset every frame.
#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    threshold: f32,
    visible: bool,
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollWatcher {
    pub const DEFAULT_THRESHOLD: f32 = 20.0;

    pub fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Recomputes visibility from the offset. Strictly greater than the
    /// threshold shows the control; at or below hides it.
    pub fn on_scroll(&mut self, offset: f32) {
        self.visible = offset > self.threshold;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Floating overlay button anchored to a screen corner. Shown only while
/// the watcher reports the page as scrolled; returns whether it was
/// activated this frame. The caller performs the actual jump by zeroing
/// its scroll state.
pub struct BackToTopButton<'a> {
    watcher: &'a ScrollWatcher,
    text: WidgetText,
    anchor: Align2,
    offset: Vec2,
}

impl<'a> BackToTopButton<'a> {
    pub const MARGIN: f32 = 24.0;

    pub fn new(watcher: &'a ScrollWatcher) -> Self {
        Self {
            watcher,
            text: "⬆".into(),
            anchor: Align2::RIGHT_BOTTOM,
            offset: Vec2::new(-Self::MARGIN, -Self::MARGIN),
        }
    }

    pub fn text(mut self, text: impl Into<WidgetText>) -> Self {
        self.text = text.into();
        self
    }

    pub fn anchor(mut self, anchor: Align2, offset: impl Into<Vec2>) -> Self {
        self.anchor = anchor;
        self.offset = offset.into();
        self
    }

    pub fn show(self, ctx: &Context) -> bool {
        if !self.watcher.is_visible() {
            return false;
        }
        let mut clicked = false;
        Area::new(Id::new("back_to_top_btn"))
            .anchor(self.anchor, self.offset)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                if ui.button(self.text).clicked() {
                    clicked = true;
                }
            });
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_or_below_threshold() {
        let mut watcher = ScrollWatcher::new();
        for offset in [0.0, 1.0, 19.5, 20.0] {
            watcher.on_scroll(offset);
            assert!(!watcher.is_visible(), "offset {offset} should hide");
        }
    }

    #[test]
    fn test_shown_above_threshold() {
        let mut watcher = ScrollWatcher::new();
        for offset in [20.5, 21.0, 400.0, 10_000.0] {
            watcher.on_scroll(offset);
            assert!(watcher.is_visible(), "offset {offset} should show");
        }
    }

    #[test]
    fn test_jump_to_top_hides_again() {
        let mut watcher = ScrollWatcher::new();
        watcher.on_scroll(300.0);
        assert!(watcher.is_visible());

        // the jump resets the offset to zero
        watcher.on_scroll(0.0);
        assert!(!watcher.is_visible());
    }

    #[test]
    fn test_custom_threshold() {
        let mut watcher = ScrollWatcher::with_threshold(100.0);
        watcher.on_scroll(50.0);
        assert!(!watcher.is_visible());
        watcher.on_scroll(100.5);
        assert!(watcher.is_visible());
    }
}
