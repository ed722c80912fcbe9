use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{centered_panel, error_alert};
use egui::{Color32, Context, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some((score, total, percentage)) = app
        .result()
        .map(|r| (r.score, r.total, r.percentage()))
    else {
        app.go_home();
        return;
    };
    let review = app.review_rows();
    let past = app.history_rows();

    centered_panel(ctx, 640.0, 600.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading("🎉 Quiz Complete!");
            ui.label(RichText::new(format!("You scored {score} / {total}")).size(20.0));
            ui.label(format!("{percentage}%"));
        });
        ui.add_space(10.0);

        if !app.message.is_empty() {
            let message = app.message.clone();
            if error_alert(ui, &message) {
                app.dismiss_message();
            }
            ui.add_space(6.0);
        }

        ui.label(RichText::new("Review").strong());
        ScrollArea::vertical()
            .id_salt("review")
            .max_height(260.0)
            .show(ui, |ui| {
                for row in &review {
                    ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
                    let colour = if row.is_correct {
                        Color32::from_rgb(40, 160, 70)
                    } else {
                        Color32::from_rgb(200, 60, 60)
                    };
                    ui.colored_label(colour, format!("Your answer: {}", row.your_answer));
                    if let Some(correct) = &row.correct_answer {
                        ui.label(format!("Correct answer: {correct}"));
                    }
                    ui.add_space(6.0);
                }
            });
        ui.add_space(8.0);

        if !past.is_empty() {
            ui.label(RichText::new("Past attempts").strong());
            ScrollArea::vertical()
                .id_salt("past_attempts")
                .max_height(120.0)
                .show(ui, |ui| {
                    for row in &past {
                        ui.label(format!("{}  {}", row.date, row.summary));
                    }
                });
            ui.add_space(8.0);
        }

        if big_list_button(ui, "🏠 Try Another Quiz", panel_width, 36.0, true) {
            app.go_home();
        }
        if big_list_button(ui, "🔄 Retake Quiz", panel_width, 36.0, true) {
            app.retake_quiz();
        }
        if big_list_button(ui, "📜 View History", panel_width, 36.0, true) {
            app.open_history();
        }
    });
}
