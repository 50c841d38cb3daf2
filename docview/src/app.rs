use crate::consts::NAV_PANEL_ID;
use crate::errors::DocError;
use eframe::{egui, NativeOptions};
use egui_scrollnav::{NavToggler, ScrollWatcher};
use egui_theme_switch::global_theme_switch;

pub struct DocView {
    pub nav: NavToggler,
    pub back_to_top: ScrollWatcher,
    /// Section index the document view should scroll to on the next frame.
    pub pending_jump: Option<usize>,
}

impl Default for DocView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocView {
    pub fn new() -> Self {
        let mut nav = NavToggler::new();
        nav.register(NAV_PANEL_ID);
        Self {
            nav,
            back_to_top: ScrollWatcher::new(),
            pending_jump: None,
        }
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "DocView",
            options,
            Box::new(|cc| {
                catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::FRAPPE);
                set_font(&cc.egui_ctx);
                Ok(Box::new(DocView::new()))
            }),
        )
    }

    pub fn toggle_nav(&mut self) -> Result<(), DocError> {
        self.nav.open(NAV_PANEL_ID)?;
        Ok(())
    }
}

impl eframe::App for DocView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                global_theme_switch(ui);
            });
        });

        self.nav_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.doc_view(ui);
        });
    }
}

fn set_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
