use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_no_data(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 120.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No quiz data. Please go back and start again.").strong());
            ui.add_space(10.0);
            if ui.button("🏠 Back Home").clicked() {
                app.go_home();
            }
        });
    });
}
