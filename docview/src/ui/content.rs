use crate::app::DocView;
use crate::docs;
use egui::{Align, ScrollArea, Ui, Vec2};
use egui_phosphor::regular::ARROW_UP;
use egui_scrollnav::BackToTopButton;

impl DocView {
    pub fn doc_view(&mut self, ui: &mut Ui) {
        let output = ScrollArea::vertical()
            .id_salt("doc_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (idx, section) in docs::sections().iter().enumerate() {
                    let heading = ui.heading(section.title);
                    if self.pending_jump == Some(idx) {
                        heading.scroll_to_me(Some(Align::Min));
                        self.pending_jump = None;
                    }
                    ui.add_space(4.0);
                    ui.label(section.body);
                    ui.add_space(24.0);
                }
            });

        self.back_to_top.on_scroll(output.state.offset.y);

        let jump = BackToTopButton::new(&self.back_to_top)
            .text(format!("{ARROW_UP} Top"))
            .show(ui.ctx());
        if jump {
            // immediate jump, no smooth scroll
            let mut state = output.state;
            state.offset = Vec2::ZERO;
            state.store(ui.ctx(), output.id);
            self.back_to_top.on_scroll(0.0);
        }
    }
}
