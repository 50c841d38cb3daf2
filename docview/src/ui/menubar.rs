use crate::app::DocView;
use crate::consts::REPOSITORY_URL;
use egui::{Button, Modifiers};
use tracing::error;

const BTN_WIDTH: f32 = 200.0;

impl DocView {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // Site
            site_menu(ui);
            // View
            self.view_menu(ui);
            // Help
            help_menu(ui);
        });
    }

    fn view_menu(&mut self, ui: &mut egui::Ui) {
        let toggle_nav_shortcut = egui::KeyboardShortcut::new(Modifiers::CTRL, egui::Key::B);
        if ui.input_mut(|i| i.consume_shortcut(&toggle_nav_shortcut)) {
            if let Err(err) = self.toggle_nav() {
                error!("toggle navigation error: {err}");
            }
        }
        ui.menu_button("View", |ui| {
            let toggle_nav_shortcut = ui.ctx().format_shortcut(&toggle_nav_shortcut);
            let toggle_nav_btn = Button::new("Toggle Navigation")
                .min_size((BTN_WIDTH, 0.).into())
                .shortcut_text(toggle_nav_shortcut);
            if ui.add(toggle_nav_btn).clicked() {
                if let Err(err) = self.toggle_nav() {
                    error!("toggle navigation error: {err}");
                }
                ui.close_menu();
            }
        });
    }
}

fn site_menu(ui: &mut egui::Ui) {
    ui.menu_button("Site", |ui| {
        if ui.button("Quit").clicked() {
            std::process::exit(0);
        }
    });
}

fn help_menu(ui: &mut egui::Ui) {
    ui.menu_button("Help", |ui| {
        let about_btn = Button::new("About").min_size((BTN_WIDTH, 0.).into());
        if ui.add(about_btn).clicked() {
            if let Err(err) = open::that(REPOSITORY_URL) {
                error!("opening page {REPOSITORY_URL} error: {err}");
            }
        }
    });
}
