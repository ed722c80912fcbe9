use crate::QuizApp;
use crate::ui::helpers::{big_list_button, option_button};
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(header) = app.quiz_header() else {
        app.go_home();
        return;
    };
    let question = app
        .session
        .as_ref()
        .and_then(|s| s.current_question())
        .map(|q| q.text.clone())
        .unwrap_or_default();
    let buttons = app.option_buttons();
    let has_selection = app.session.as_ref().and_then(|s| s.selected()).is_some();

    centered_panel(ctx, 460.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.columns(3, |cols| {
            cols[0].label(RichText::new(&header.topic).strong());
            cols[1].vertical_centered(|ui| ui.label(&header.difficulty));
            cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&header.position);
            });
        });
        ui.add(ProgressBar::new(app.progress() / 100.0).desired_height(8.0));
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(question).size(18.0).strong());
        });
        ui.add_space(12.0);

        let mut picked = None;
        for button in &buttons {
            if option_button(ui, button, panel_width) {
                picked = Some(button.text.clone());
            }
            ui.add_space(4.0);
        }
        if let Some(option) = picked {
            app.select_option(&option);
        }

        ui.add_space(10.0);
        if big_list_button(ui, header.next_label, panel_width, 38.0, has_selection) {
            app.advance();
        }

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &app.message);
        }
    });
}
