use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 120.0, 320.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label("Fetching questions…");
            ui.add_space(8.0);
            if ui.button("Cancel").clicked() {
                app.go_home();
            }
        });
    });
}
