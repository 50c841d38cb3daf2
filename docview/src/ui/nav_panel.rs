use crate::app::DocView;
use crate::consts::NAV_PANEL_ID;
use crate::docs;
use egui::Context;
use egui_scrollnav::NavPanel;

impl DocView {
    pub fn nav_panel(&mut self, ctx: &Context) {
        egui::SidePanel::left(NAV_PANEL_ID)
            .resizable(false)
            .exact_width(NavPanel::OPEN_WIDTH)
            .show_animated(ctx, self.nav.is_open(NAV_PANEL_ID), |ui| {
                ui.label("Contents");
                ui.separator();

                for (idx, section) in docs::sections().iter().enumerate() {
                    if ui.button(section.title).clicked() {
                        self.pending_jump = Some(idx);
                    }
                }
            });
    }
}
