use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, Grid, ScrollArea};

pub fn ui_history(app: &mut QuizApp, ctx: &Context) {
    let rows = app.history_rows();

    centered_panel(ctx, 480.0, 560.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| ui.heading("📜 Quiz History"));
        ui.add_space(10.0);

        if rows.is_empty() {
            ui.label("No quizzes taken yet.");
        } else {
            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                Grid::new("history_grid")
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for row in &rows {
                            ui.label(&row.date);
                            ui.label(&row.summary);
                            ui.end_row();
                        }
                    });
            });
        }
        ui.add_space(10.0);

        if rows.is_empty() {
            if ui.button("🏠 Back Home").clicked() {
                app.go_home();
            }
        } else {
            let (home, clear) = two_button_row(ui, panel_width, "🏠 Back Home", "🗑 Clear History");
            if home {
                app.go_home();
            }
            if clear {
                app.clear_history();
            }
        }
    });
}
